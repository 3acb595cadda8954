//! Extractors copying certificate data into caller-owned buffers
//!
//! Every function here takes an [`OutBuf`](crate::buffer::OutBuf), writes at
//! most its capacity and returns an [`Extract`](crate::buffer::Extract).
//!
//! - `fields`: serial, DER, public key summary, validity bounds
//! - `name`: distinguished-name entry lookup, oneline and RFC 2253 rendering

pub mod fields;
pub mod name;

pub use fields::{
    KeyFamily, der, not_after, not_after_epoch, not_after_text, not_before, not_before_epoch,
    not_before_text, pkey_algo, serial, time_to_buf,
};
pub use name::{RFC2253, dn_entry, dn_formatted, dn_oneline};
