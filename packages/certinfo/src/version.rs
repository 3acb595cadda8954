//! Packed library version numbers
//!
//! Layout, most significant first: `major:4 | minor:8 | fix:8 | patch:8 | status:4`
//! (the `MNNFFPPS` scheme). Status is `0` for development builds, `1..=14`
//! for betas and `0xf` for releases, so packed values order the same way
//! the versions do.
//!
//! ```text
//! 0x0090821f  0.9.8zh
//! 0x1000215f  1.0.2u
//! 0x30000000  3.0.0-alpha17
//! 0x30000002  3.0.0-beta2
//! 0x3000000f  3.0.0
//! ```

use std::fmt;

use crate::error::{CertInfoError, Result};

const STATUS_RELEASE: u32 = 0xf;
const MAX_BETA: u32 = 14;

/// A parsed version in packed form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackedVersion(u32);

impl PackedVersion {
    /// Wrap an already packed value
    #[must_use]
    pub const fn from_u32(raw: u32) -> Self {
        Self(raw)
    }

    /// Packed value
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Major field (4 bits)
    #[must_use]
    pub const fn major(self) -> u32 {
        self.0 >> 28
    }

    /// Minor field (8 bits)
    #[must_use]
    pub const fn minor(self) -> u32 {
        (self.0 >> 20) & 0xff
    }

    /// Fix field (8 bits)
    #[must_use]
    pub const fn fix(self) -> u32 {
        (self.0 >> 12) & 0xff
    }

    /// Patch field (8 bits), the letter suffix of pre-3.0 releases
    #[must_use]
    pub const fn patch(self) -> u32 {
        (self.0 >> 4) & 0xff
    }

    /// Status nibble
    #[must_use]
    pub const fn status(self) -> u32 {
        self.0 & 0xf
    }

    /// True for release builds
    #[must_use]
    pub const fn is_release(self) -> bool {
        self.status() == STATUS_RELEASE
    }

    const fn pack(major: u32, minor: u32, fix: u32, patch: u32, status: u32) -> Self {
        Self(
            ((major & 0xf) << 28)
                | ((minor & 0xff) << 20)
                | ((fix & 0xff) << 12)
                | ((patch & 0xff) << 4)
                | (status & 0xf),
        )
    }
}

impl fmt::Display for PackedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Split a leading run of decimal digits off `s`
fn leading_number(s: &str) -> Option<(u32, &str)> {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    let value = s[..end].parse::<u32>().unwrap_or(u32::MAX);
    Some((value, &s[end..]))
}

/// Parse `MAJOR.MINOR.FIX[suffix]` into a [`PackedVersion`].
///
/// - no suffix: release (`status = 0xf`)
/// - `-beta<N>`: beta `N`, at most 14
/// - any other `-...`: development build (`status = 0`)
/// - letters directly after `FIX` (`1.0.2u`): patch release, `patch` is one
///   plus the sum of each uppercased letter's distance from `A`
pub fn parse_version(version: &str) -> Result<PackedVersion> {
    let invalid = |reason: &'static str| CertInfoError::InvalidVersion {
        input: version.to_string(),
        reason,
    };

    let (major, rest) = leading_number(version).ok_or_else(|| invalid("missing major"))?;
    if major > 0xf {
        return Err(invalid("major exceeds 4 bits"));
    }
    let rest = rest.strip_prefix('.').ok_or_else(|| invalid("expected '.' after major"))?;

    let (minor, rest) = leading_number(rest).ok_or_else(|| invalid("missing minor"))?;
    if minor > 0xff {
        return Err(invalid("minor exceeds 8 bits"));
    }
    let rest = rest.strip_prefix('.').ok_or_else(|| invalid("expected '.' after minor"))?;

    let (fix, rest) = leading_number(rest).ok_or_else(|| invalid("missing fix"))?;
    if fix > 0xff {
        return Err(invalid("fix exceeds 8 bits"));
    }

    let (patch, status) = if rest.is_empty() {
        (0, STATUS_RELEASE)
    } else if let Some(pre) = rest.strip_prefix('-') {
        match pre.strip_prefix("beta") {
            Some(beta) => {
                let status = leading_number(beta).map_or(0, |(n, _)| n);
                if status > MAX_BETA {
                    return Err(invalid("beta number exceeds 14"));
                }
                (0, status)
            }
            None => (0, 0),
        }
    } else {
        let patch = rest.bytes().fold(1u32, |acc, c| {
            acc.wrapping_add(u32::from(c & !0x20).wrapping_sub(u32::from(b'A')))
        });
        (patch, STATUS_RELEASE)
    };

    Ok(PackedVersion::pack(major, minor, fix, patch, status))
}

impl std::str::FromStr for PackedVersion {
    type Err = CertInfoError;

    fn from_str(s: &str) -> Result<Self> {
        parse_version(s)
    }
}
