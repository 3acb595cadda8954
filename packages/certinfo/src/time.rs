//! ASN.1 time values and their conversions
//!
//! Certificates carry validity bounds as either UTCTime (`YYMMDDHHMMSSZ`) or
//! GeneralizedTime (`YYYYMMDDHHMM[SS[.f]]` followed by `Z` or `±HHMM`). This
//! module keeps the encoded text in a fixed inline buffer so no conversion
//! allocates.

use std::fmt;

use chrono::DateTime;
use der::Tag;

/// Largest time payload kept inline; a GeneralizedTime with an offset and a
/// long fraction still fits.
const MAX_TIME_LEN: usize = 48;

/// Cumulative days before each month in a non-leap year
const MONTH_OFFSET: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// A tagged ASN.1 time payload (content octets only)
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Asn1Time {
    tag: Tag,
    len: u8,
    bytes: [u8; MAX_TIME_LEN],
}

impl Asn1Time {
    /// Wrap `bytes` under `tag`; `None` when the payload is longer than the inline capacity
    #[must_use]
    pub fn new(tag: Tag, bytes: &[u8]) -> Option<Self> {
        if bytes.len() > MAX_TIME_LEN {
            return None;
        }
        let mut inline = [0u8; MAX_TIME_LEN];
        inline[..bytes.len()].copy_from_slice(bytes);
        Some(Self {
            tag,
            len: u8::try_from(bytes.len()).ok()?,
            bytes: inline,
        })
    }

    /// GeneralizedTime payload
    #[must_use]
    pub fn generalized(text: &str) -> Option<Self> {
        Self::new(Tag::GeneralizedTime, text.as_bytes())
    }

    /// UTCTime payload
    #[must_use]
    pub fn utc(text: &str) -> Option<Self> {
        Self::new(Tag::UtcTime, text.as_bytes())
    }

    /// ASN.1 tag of the value
    #[must_use]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Content octets
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }

    /// Same instant as a GeneralizedTime, applying the RFC 5280 century rule to
    /// UTCTime (`YY >= 50` is 19YY). Other tags yield `None`.
    #[must_use]
    pub fn to_generalized(&self) -> Option<Self> {
        match self.tag {
            Tag::GeneralizedTime => Some(*self),
            Tag::UtcTime => {
                let text = self.as_bytes();
                let first = *text.first()?;
                if !first.is_ascii_digit() || text.len() + 2 > MAX_TIME_LEN {
                    return None;
                }
                let mut promoted = [0u8; MAX_TIME_LEN];
                promoted[..2].copy_from_slice(if first >= b'5' { b"19" } else { b"20" });
                promoted[2..text.len() + 2].copy_from_slice(text);
                Self::new(Tag::GeneralizedTime, &promoted[..text.len() + 2])
            }
            _ => None,
        }
    }
}

impl fmt::Debug for Asn1Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Asn1Time")
            .field("tag", &self.tag)
            .field("text", &String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}

/// Two ASCII digits as a number
fn two_digits(p: &[u8]) -> Option<i64> {
    match p {
        [a, b, ..] if a.is_ascii_digit() && b.is_ascii_digit() => {
            Some(i64::from(a - b'0') * 10 + i64::from(b - b'0'))
        }
        _ => None,
    }
}

/// Seconds since the Unix epoch for a GeneralizedTime value.
///
/// Accepts `YYYYMMDDHHMM[SS[.fraction]]` followed by `Z`, `+HHMM` or `-HHMM`.
/// Sub-second precision is discarded, and a `.` with no digits after it is
/// accepted as an empty fraction. Returns `None` for any other tag, a
/// non-digit field, a month outside 1-12, a truncated field, or anything
/// following the zone designator.
#[must_use]
pub fn generalized_time_to_epoch(time: &Asn1Time) -> Option<i64> {
    if time.tag() != Tag::GeneralizedTime {
        return None;
    }
    let mut p = time.as_bytes();

    let year = two_digits(p)? * 100 + two_digits(p.get(2..)?)?;
    p = &p[4..];
    let month = two_digits(p)?;
    if !(1..=12).contains(&month) {
        return None;
    }
    p = &p[2..];

    // Days before the current month, with leap days counted through the end
    // of February of the current year only once March is reached.
    let y = year - i64::from(month < 3);
    let leap_days = |y: i64| y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400);
    let month_index = usize::try_from(month - 1).ok()?;
    let days = (year - 1970) * 365 + leap_days(y) - leap_days(1969) + MONTH_OFFSET[month_index];
    let mut epoch = days * SECS_PER_DAY;

    epoch += (two_digits(p)? - 1) * SECS_PER_DAY;
    p = &p[2..];
    epoch += two_digits(p)? * 60 * 60;
    p = &p[2..];
    epoch += two_digits(p)? * 60;
    p = &p[2..];

    let first = *p.first()?;
    if first.is_ascii_digit() {
        epoch += two_digits(p)?;
        p = &p[2..];
        if p.first() == Some(&b'.') {
            let digits = p[1..].iter().take_while(|b| b.is_ascii_digit()).count();
            p = &p[1 + digits..];
        }
    }

    match p {
        [b'Z'] => Some(epoch),
        [sign @ (b'+' | b'-'), zone @ ..] if zone.len() == 4 => {
            let offset = (two_digits(zone)? * 60 + two_digits(&zone[2..])?) * 60;
            if *sign == b'+' {
                Some(epoch - offset)
            } else {
                Some(epoch + offset)
            }
        }
        _ => None,
    }
}

/// Seconds since the Unix epoch for either time encoding
#[must_use]
pub fn time_to_epoch(time: &Asn1Time) -> Option<i64> {
    generalized_time_to_epoch(&time.to_generalized()?)
}

/// `Mon DD HH:MM:SS YYYY GMT` rendering of a time, day padded with a space
pub(crate) struct PrintableTime(pub(crate) i64);

impl fmt::Display for PrintableTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instant = DateTime::from_timestamp(self.0, 0).ok_or(fmt::Error)?;
        write!(f, "{} GMT", instant.format("%b %e %H:%M:%S %Y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_promotion_uses_rfc5280_window() {
        let t = Asn1Time::utc("490101000000Z").and_then(|t| t.to_generalized());
        assert_eq!(t.map(|t| t.as_bytes().to_vec()), Some(b"20490101000000Z".to_vec()));
        let t = Asn1Time::utc("990101000000Z").and_then(|t| t.to_generalized());
        assert_eq!(t.map(|t| t.as_bytes().to_vec()), Some(b"19990101000000Z".to_vec()));
    }

    #[test]
    fn oversized_payload_is_rejected() {
        assert!(Asn1Time::generalized(&"1".repeat(MAX_TIME_LEN + 1)).is_none());
    }

    #[test]
    fn printable_time_pads_day() {
        assert_eq!(PrintableTime(1_709_251_200).to_string(), "Mar  1 00:00:00 2024 GMT");
    }
}
