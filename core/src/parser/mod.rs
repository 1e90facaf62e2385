#![deny(missing_docs)]

//! # Parser Module
//!
//! Locates exported `interface` and `type` declarations in TypeScript source
//! text and decomposes interface bodies into fields.
//!
//! This is a pattern-based probe, not a grammar: generics, `extends` clauses and
//! non-exported declarations are out of its reach.

pub mod body;
pub mod extractors;
pub mod fields;
pub mod locator;
pub mod mode;
pub mod models;
pub mod scan;

pub use body::{BalancedBraces, BodyExtractor, FirstBrace};
pub use extractors::analyze_source;
pub use fields::decompose_fields;
pub use locator::{locate_aliases, locate_interfaces, RawDeclaration};
pub use mode::ExtractionMode;
pub use models::{FieldSpec, TypeEntry, TypeReport};
