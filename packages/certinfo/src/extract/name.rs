//! Distinguished-name extractors

use std::fmt::{self, Write as _};

use const_oid::ObjectIdentifier;

use crate::buffer::{BoundedWriter, Extract, OutBuf, format_into};
use crate::x509::DistinguishedName;
use crate::x509::attributes::short_name;

const LABEL_CAPACITY: usize = 128;

/// The only format accepted by [`dn_formatted`]
pub const RFC2253: &str = "rfc2253";

/// Attribute label: the short name when known, else the dotted OID rendered into `scratch`
fn attribute_label<'t>(oid: &ObjectIdentifier, scratch: &'t mut [u8; LABEL_CAPACITY]) -> &'t str {
    if let Some(name) = short_name(oid) {
        return name;
    }
    let len = {
        let mut label = OutBuf::new(&mut scratch[..]);
        // dotted OIDs longer than the scratch area come out empty and never match
        if write!(BoundedWriter::new(&mut label), "{oid}").is_err() {
            label.reset();
        }
        label.len()
    };
    let scratch: &'t [u8; LABEL_CAPACITY] = scratch;
    std::str::from_utf8(&scratch[..len]).unwrap_or_default()
}

/// Copy the value of the `pos`-th attribute named `attribute`.
///
/// `attribute` is compared case-insensitively with the short name, or with the
/// dotted OID for attributes without one. `pos` is 1-based; negative values
/// count from the last entry, so `-1` is the last match. `0` never matches.
pub fn dn_entry<N>(name: &N, attribute: &str, pos: i32, out: &mut OutBuf<'_>) -> Extract
where
    N: DistinguishedName + ?Sized,
{
    out.reset();
    let count = name.entry_count();
    let step = if pos < 0 { -1 } else { 1 };
    let mut seen = 0i32;

    for i in 0..count {
        let index = if pos < 0 { count - 1 - i } else { i };
        let Some(entry) = name.entry(index) else {
            continue;
        };
        let mut scratch = [0u8; LABEL_CAPACITY];
        if !attribute_label(&entry.oid, &mut scratch).eq_ignore_ascii_case(attribute) {
            continue;
        }
        seen += step;
        if seen == pos {
            return out.set(entry.value);
        }
    }
    Extract::Absent
}

/// Render the name as `/SN=value/SN=value...` in encoding order.
///
/// A name without attributes is reported as absent.
pub fn dn_oneline<N>(name: &N, out: &mut OutBuf<'_>) -> Extract
where
    N: DistinguishedName + ?Sized,
{
    out.reset();
    for index in 0..name.entry_count() {
        let Some(entry) = name.entry(index) else {
            continue;
        };
        let mut scratch = [0u8; LABEL_CAPACITY];
        let label = attribute_label(&entry.oid, &mut scratch);

        if label.len() + entry.value.len() + 2 > out.remaining() {
            out.reset();
            return Extract::NoSpace;
        }
        out.push_byte(b'/');
        out.push(label.as_bytes());
        out.push_byte(b'=');
        out.push(entry.value);
    }

    if out.is_empty() {
        Extract::Absent
    } else {
        Extract::Found
    }
}

struct Rfc2253<'n, N: ?Sized>(&'n N);

impl<N: DistinguishedName + ?Sized> fmt::Display for Rfc2253<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_rfc2253(f)
    }
}

/// Render the name in the requested textual format.
///
/// Only [`RFC2253`] is supported; any other format is absent, as is an empty
/// rendering. The text comes from the name's own RFC 4514 printer, so it is
/// not byte-identical to OpenSSL's: non-ASCII UTF-8 is written raw rather than
/// escaped as `\XX`.
pub fn dn_formatted<N>(name: &N, format: &str, out: &mut OutBuf<'_>) -> Extract
where
    N: DistinguishedName + ?Sized,
{
    out.reset();
    if format != RFC2253 {
        tracing::debug!("unsupported distinguished name format {format:?}");
        return Extract::Absent;
    }
    match format_into(out, format_args!("{}", Rfc2253(name))) {
        Extract::Found if out.is_empty() => Extract::Absent,
        outcome => outcome,
    }
}
