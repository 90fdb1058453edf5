//! FortiGate firewall-rule extraction on top of `blockconf-core`.
//!
//! FortiGate 7.2.x exports its configuration as a flat block-structured
//! text file. The firewall policy lives in one section:
//!
//! ```text
//! config firewall policy
//!     edit <id>
//!         set name "rule name"
//!         ...
//!     next
//! end
//! ```
//!
//! This crate binds the generic scanner to that dialect and adds the
//! thin I/O and rendering layers around it:
//!
//! - [`policy`] — FortiGate grammar literals, config-file reading with
//!   permissive decoding, and rule extraction
//! - [`report`] — simple/detailed/CSV renderings of the extracted rules
//!
//! All parsing logic is in `blockconf-core`; this crate never fails on
//! malformed configuration text, only on filesystem problems or an
//! empty result.

pub mod policy;
pub mod report;
