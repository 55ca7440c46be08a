//! Dictionaries for the lexgrid solver.
//!
//! [`Lexicon`] is an arena-allocated trie over upper-cased words that
//! implements [`PrefixIndex`](lexgrid_core::PrefixIndex). It is built once,
//! before a search starts, and is then only read.
//!
//! Loading failures ([`DictError`]) are fatal to a run: they surface
//! before any search work is seeded.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod lexicon;

pub use error::DictError;
pub use lexicon::{Lexicon, DEFAULT_WORDS_PATH};
