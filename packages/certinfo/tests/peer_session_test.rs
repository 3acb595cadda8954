//! Peer certificate retrieval and verified-chain root lookup

use std::sync::Arc;

use cryypt_certinfo::extract;
use cryypt_certinfo::{
    CertificateAccess, OutBuf, PeerSession, SessionCertificates, X509Certificate,
    get_peer_certificate, verified_chain_root,
};
use rustls::pki_types::CertificateDer;

fn load(pem: &str) -> X509Certificate {
    X509Certificate::from_pem(pem).expect("fixture parses")
}

fn chain() -> Vec<Arc<X509Certificate>> {
    [
        include_str!("fixtures/chain_leaf.pem"),
        include_str!("fixtures/chain_intermediate.pem"),
        include_str!("fixtures/chain_root.pem"),
    ]
    .into_iter()
    .map(|pem| Arc::new(load(pem)))
    .collect()
}

fn common_name(cert: &X509Certificate) -> String {
    let mut area = [0u8; 64];
    let mut out = OutBuf::new(&mut area);
    extract::dn_entry(cert.subject(), "CN", 1, &mut out);
    out.as_str().unwrap_or_default().to_string()
}

#[test]
fn test_primary_accessor_wins() {
    let session = SessionCertificates::with_peer(load(include_str!("fixtures/chain_leaf.pem")));
    let peer = get_peer_certificate(&session).expect("peer present");
    assert_eq!(common_name(&peer), "client.acme.test");
}

#[test]
fn test_stash_fallback_takes_new_reference() {
    let leaf = chain().remove(0);
    let mut session = SessionCertificates::with_peer((*leaf).clone());
    session.stash_peer_certificate(Arc::clone(&leaf));
    assert!(session.release_peer().is_some());
    assert!(session.peer_certificate().is_none());

    let before = Arc::strong_count(&leaf);
    let peer = get_peer_certificate(&session).expect("stashed certificate");
    assert_eq!(Arc::strong_count(&leaf), before + 1);
    assert!(Arc::ptr_eq(&peer, &leaf));

    // the returned reference outlives the session
    drop(session);
    assert_eq!(common_name(&peer), "client.acme.test");
}

#[test]
fn test_no_certificate_is_not_an_error() {
    let session = SessionCertificates::<X509Certificate>::default();
    assert!(get_peer_certificate(&session).is_none());
    assert!(verified_chain_root(&session).is_none());
}

#[test]
fn test_verified_chain_root() {
    let mut session = SessionCertificates::<X509Certificate>::default();
    session.set_verified_chain(chain());
    let root = verified_chain_root(&session).expect("root in chain");
    assert_eq!(common_name(&root), "Acme Root CA");
}

#[test]
fn test_chain_without_self_issued_entry_ends_at_last() {
    let mut session = SessionCertificates::<X509Certificate>::default();
    session.set_verified_chain(chain().into_iter().take(2).collect());
    let root = verified_chain_root(&session).expect("last entry of the chain");
    assert_eq!(common_name(&root), "Acme Intermediate CA");

    session.set_verified_chain(Vec::new());
    assert!(verified_chain_root(&session).is_none());
}

#[test]
fn test_issuer_checks() {
    let certs = chain();
    let (leaf, intermediate, root) = (&certs[0], &certs[1], &certs[2]);
    assert!(leaf.is_issued_by(intermediate));
    assert!(intermediate.is_issued_by(root));
    assert!(!leaf.is_issued_by(root));
    assert!(root.is_self_issued());
    assert!(!intermediate.is_self_issued());
}

#[test]
fn test_session_from_rustls_chain() {
    let pem = [
        include_str!("fixtures/chain_leaf.pem"),
        include_str!("fixtures/chain_intermediate.pem"),
    ]
    .concat();
    let ders: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut pem.as_bytes())
        .collect::<Result<_, _>>()
        .expect("valid PEM");

    let mut session = SessionCertificates::from_peer_chain(&ders).expect("parses");
    let peer = get_peer_certificate(&session).expect("leaf");
    assert_eq!(common_name(&peer), "client.acme.test");

    session.release_peer();
    assert!(get_peer_certificate(&session).is_some());
    assert!(session.verified_chain().is_none());

    let empty = SessionCertificates::from_peer_chain(&[]).expect("empty chain");
    assert!(get_peer_certificate(&empty).is_none());
}

#[test]
fn test_pem_chain_loading() {
    let pem = [
        include_str!("fixtures/chain_leaf.pem"),
        include_str!("fixtures/chain_root.pem"),
    ]
    .concat();
    let certs = X509Certificate::chain_from_pem(&pem).expect("two certificates");
    assert_eq!(certs.len(), 2);
    assert!(X509Certificate::from_pem("not a certificate").is_err());
    assert!(X509Certificate::from_der(&[0x30, 0x03, 0x02, 0x01, 0x01]).is_err());
}
