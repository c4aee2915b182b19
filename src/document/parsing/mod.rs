//! Document parsing utilities
//!
//! This module contains the functions that turn docx-rs elements into the
//! plain text the scanner works on.

pub(crate) mod text;
