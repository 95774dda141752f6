//! Language-specific normalization data.
//!
//! # Available Languages
//!
//! - [`hungarian`] - Hungarian word characters, stop words and registry labels

pub mod hungarian;
