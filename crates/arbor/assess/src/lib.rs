//! Multi-dimension value assessment of finished content items
//!
//! Each enrichment output is scored on its own dimension; the declared
//! type contributes a fixed base value. Dimensions whose capability did
//! not run are excluded and the weights renormalize over what is present,
//! so a skipped summarizer lowers information, not the score directly.
//! A low score is a business verdict, never an error.

#![deny(unsafe_code)]

pub mod assessor;
pub mod dimensions;

pub use assessor::ValueAssessor;
