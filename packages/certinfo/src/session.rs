//! Peer certificate retrieval
//!
//! A session exposes the negotiated peer certificate, a copy stashed by the
//! verification step, and the verified chain. Certificates are shared through
//! `Arc`, so a handle returned to the caller stays valid after the session
//! drops its own reference.

use std::sync::Arc;

use rustls::pki_types::CertificateDer;

use crate::error::Result;
use crate::x509::{CertificateAccess, X509Certificate};

/// Certificate capabilities of a TLS session
pub trait PeerSession {
    /// Certificate type handed out by the session
    type Cert: CertificateAccess;

    /// Negotiated peer certificate, as an owned reference
    fn peer_certificate(&self) -> Option<Arc<Self::Cert>>;

    /// Reference stashed by the verification callback
    fn stashed_certificate(&self) -> Option<&Arc<Self::Cert>>;

    /// Verified chain, leaf first
    fn verified_chain(&self) -> Option<&[Arc<Self::Cert>]>;
}

/// Effective peer certificate of `session`.
///
/// Falls back to the stashed reference when the primary accessor has nothing,
/// which happens once the handshake state has been released. `None` is the
/// normal outcome when the peer presented no certificate.
pub fn get_peer_certificate<S>(session: &S) -> Option<Arc<S::Cert>>
where
    S: PeerSession + ?Sized,
{
    if let Some(cert) = session.peer_certificate() {
        return Some(cert);
    }
    let stashed = session.stashed_certificate().map(Arc::clone);
    if stashed.is_some() {
        tracing::debug!("peer certificate taken from the verification stash");
    }
    stashed
}

/// Root of the verified chain: its first self-issued certificate, or the last
/// entry when none is self-issued. `None` only for a missing or empty chain.
pub fn verified_chain_root<S>(session: &S) -> Option<Arc<S::Cert>>
where
    S: PeerSession + ?Sized,
{
    let chain = session.verified_chain()?;
    chain
        .iter()
        .find(|cert| cert.is_self_issued())
        .or_else(|| chain.last())
        .map(Arc::clone)
}

/// Certificate state of one connection
#[derive(Debug)]
pub struct SessionCertificates<C> {
    peer: Option<Arc<C>>,
    stash: Option<Arc<C>>,
    chain: Option<Vec<Arc<C>>>,
}

impl<C> Default for SessionCertificates<C> {
    fn default() -> Self {
        Self {
            peer: None,
            stash: None,
            chain: None,
        }
    }
}

impl<C> SessionCertificates<C> {
    /// Session with a negotiated peer certificate
    pub fn with_peer(peer: C) -> Self {
        Self {
            peer: Some(Arc::new(peer)),
            ..Self::default()
        }
    }

    /// Keep a reference to `cert` for retrieval after the handshake
    pub fn stash_peer_certificate(&mut self, cert: Arc<C>) {
        self.stash = Some(cert);
    }

    /// Drop the negotiated peer certificate, leaving only the stash
    pub fn release_peer(&mut self) -> Option<Arc<C>> {
        self.peer.take()
    }

    /// Record the chain built by verification, leaf first
    pub fn set_verified_chain(&mut self, chain: Vec<Arc<C>>) {
        self.chain = Some(chain);
    }
}

impl SessionCertificates<X509Certificate> {
    /// Build from the end-entity-first chain a rustls connection reports.
    ///
    /// The leaf becomes both the peer certificate and the stashed reference;
    /// the remaining entries are not treated as verified.
    pub fn from_peer_chain(chain: &[CertificateDer<'_>]) -> Result<Self> {
        let Some(leaf) = chain.first() else {
            return Ok(Self::default());
        };
        let leaf = Arc::new(X509Certificate::from_der(leaf.as_ref())?);
        Ok(Self {
            peer: Some(Arc::clone(&leaf)),
            stash: Some(leaf),
            chain: None,
        })
    }
}

impl<C: CertificateAccess> PeerSession for SessionCertificates<C> {
    type Cert = C;

    fn peer_certificate(&self) -> Option<Arc<C>> {
        self.peer.clone()
    }

    fn stashed_certificate(&self) -> Option<&Arc<C>> {
        self.stash.as_ref()
    }

    fn verified_chain(&self) -> Option<&[Arc<C>]> {
        self.chain.as_deref()
    }
}
