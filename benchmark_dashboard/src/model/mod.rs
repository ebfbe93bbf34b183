//!
//! The benchmark history data model.
//!

pub mod document;
pub mod suite;
