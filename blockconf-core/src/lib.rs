//! Generic scanning primitives for block-structured configuration text.
//!
//! Many network appliances export their configuration as a flat text
//! document built from named sections and repeated record blocks:
//!
//! ```text
//! config firewall policy
//!     edit 1
//!         set name "allow-dns"
//!     next
//! end
//! ```
//!
//! This crate locates one named section in such a document, segments it
//! into record blocks keyed by a numeric ID, and pulls a single quoted
//! field out of each block. The recognized literals are supplied by the
//! caller through a [`BlockGrammar`], so higher-level tools can target
//! different vendor dialects without touching the scan logic.
//!
//! The scanner is deliberately shallow: it performs three cascaded
//! pattern scans rather than building a parse tree, and it never fails
//! on malformed input. A document without the section yields an empty
//! result, a record block without an ID is skipped, and a block without
//! the named field gets a synthesized placeholder name.

pub mod grammar;
pub mod record;
pub mod scanner;

pub use grammar::BlockGrammar;
pub use record::RuleRecord;
pub use scanner::{BlockScanner, ScanError};
