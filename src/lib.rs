//! A pretty-printing library in the Wadler/Leijen tradition.
//!
//! Documents are immutable algebraic values describing formatting
//! intent: text fragments, mandatory and optional line breaks,
//! indentation scopes, and grouped layout alternatives. Rendering walks
//! a document against a column budget and decides at each group whether
//! the flattened layout fits on the current line, following
//! ["Strictly Pretty" (2000) by Christian Lindig][0] and the classic
//! Wadler/Leijen prettier-printer designs.
//!
//! [0]: http://citeseerx.ist.psu.edu/viewdoc/summary?doi=10.1.1.34.2200
//!
//! ```
//! use sabon::{docvec, line};
//!
//! let doc = docvec!["let xs =", line(), "[1, 2, 3]"].nest(2).group();
//!
//! assert_eq!("let xs = [1, 2, 3]", doc.pretty(80));
//! assert_eq!("let xs =\n  [1, 2, 3]", doc.pretty(10));
//! ```
#![warn(
    clippy::all,
    clippy::dbg_macro,
    clippy::todo,
    clippy::mem_forget,
    clippy::needless_continue,
    clippy::needless_borrow,
    clippy::match_wildcard_for_single_variants,
    clippy::inefficient_to_string,
    clippy::macro_use_imports,
    clippy::option_option,
    clippy::unnested_or_patterns,
    rust_2018_idioms,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    nonstandard_style,
    unused_import_braces
)]
#![deny(clippy::unwrap_used, unsafe_code, unstable_features)]

pub mod doc;
pub mod error;
pub mod io;
mod render;

pub use crate::doc::{
    char, concat, join, line, nil, sep, softbreak, softline, text, vcat, Doc, Documentable,
};
pub use crate::error::{Error, Result};
pub use crate::io::{StreamWriter, Writer};
