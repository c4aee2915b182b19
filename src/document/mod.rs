//! Document parsing and data structures module
//!
//! This module provides functionality for parsing Microsoft Word (.docx) documents
//! into an ordered list of paragraph strings, and for matching terms against them.

pub(crate) mod io;
pub(crate) mod loader;
pub mod models;
pub(crate) mod parsing;
pub mod query;

pub use io::DocumentError;
pub use loader::load_document;
pub use models::*;
pub use query::*;
