//! Bounded output buffer shared by every extractor
//!
//! The caller owns the byte region; an extractor only ever writes inside
//! `area[..size]` and reports one of three outcomes through [`Extract`].
//! On [`Extract::NoSpace`] the buffer length is left at zero so a caller can
//! never mistake a partial write for a value.

use std::fmt;

/// Tri-state outcome of an extractor call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extract {
    /// Value found and copied into the buffer
    Found,
    /// Value legitimately absent, or not supported for this input
    Absent,
    /// Value exists but the buffer capacity is insufficient
    NoSpace,
}

impl Extract {
    /// Integer form of the outcome: `1`, `0` or `-1`
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Found => 1,
            Self::Absent => 0,
            Self::NoSpace => -1,
        }
    }

    /// True when a value was copied
    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found)
    }
}

impl From<Extract> for i32 {
    fn from(value: Extract) -> Self {
        value.as_i32()
    }
}

/// Caller-owned output region with a current length
///
/// `size` is the length of the borrowed slice and never changes; `len()` is
/// always `<= size()`.
#[derive(Debug)]
pub struct OutBuf<'a> {
    area: &'a mut [u8],
    data: usize,
}

impl<'a> OutBuf<'a> {
    /// Wrap a caller-provided region; the buffer starts empty
    pub fn new(area: &'a mut [u8]) -> Self {
        Self { area, data: 0 }
    }

    /// Capacity of the region
    #[must_use]
    pub fn size(&self) -> usize {
        self.area.len()
    }

    /// Number of valid bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.data
    }

    /// True when no bytes are valid
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data == 0
    }

    /// Free capacity after the valid bytes
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.area.len() - self.data
    }

    /// Valid bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.area[..self.data]
    }

    /// Valid bytes as UTF-8, if they are
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    /// Forget the current contents
    pub fn reset(&mut self) {
        self.data = 0;
    }

    /// Replace the contents with `bytes`.
    pub(crate) fn set(&mut self, bytes: &[u8]) -> Extract {
        self.data = 0;
        if bytes.len() > self.area.len() {
            return Extract::NoSpace;
        }
        self.area[..bytes.len()].copy_from_slice(bytes);
        self.data = bytes.len();
        Extract::Found
    }

    /// Append `bytes`; leaves the buffer untouched and returns false when they do not fit.
    pub(crate) fn push(&mut self, bytes: &[u8]) -> bool {
        if bytes.len() > self.remaining() {
            return false;
        }
        self.area[self.data..self.data + bytes.len()].copy_from_slice(bytes);
        self.data += bytes.len();
        true
    }

    pub(crate) fn push_byte(&mut self, byte: u8) -> bool {
        self.push(&[byte])
    }

    /// Whole region, for encoders that write in place before the length is committed
    pub(crate) fn area_mut(&mut self) -> &mut [u8] {
        &mut *self.area
    }

    pub(crate) fn commit(&mut self, len: usize) {
        debug_assert!(len <= self.area.len());
        self.data = len.min(self.area.len());
    }
}

/// `fmt::Write` sink appending into an [`OutBuf`] without allocating
///
/// Running out of room surfaces as `fmt::Error`; [`BoundedWriter::overflowed`]
/// tells that case apart from a formatter failure.
pub(crate) struct BoundedWriter<'b, 'a> {
    out: &'b mut OutBuf<'a>,
    overflowed: bool,
}

impl<'b, 'a> BoundedWriter<'b, 'a> {
    pub(crate) fn new(out: &'b mut OutBuf<'a>) -> Self {
        Self {
            out,
            overflowed: false,
        }
    }

    pub(crate) fn overflowed(&self) -> bool {
        self.overflowed
    }
}

impl fmt::Write for BoundedWriter<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.out.push(s.as_bytes()) {
            Ok(())
        } else {
            self.overflowed = true;
            Err(fmt::Error)
        }
    }
}

/// Format `args` into `out`, replacing its contents.
pub(crate) fn format_into(out: &mut OutBuf<'_>, args: fmt::Arguments<'_>) -> Extract {
    use fmt::Write as _;

    out.reset();
    let mut writer = BoundedWriter::new(out);
    match writer.write_fmt(args) {
        Ok(()) => Extract::Found,
        Err(_) => {
            let overflowed = writer.overflowed();
            out.reset();
            if overflowed {
                Extract::NoSpace
            } else {
                Extract::Absent
            }
        }
    }
}
