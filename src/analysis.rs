//! Text analysis module for hunstem.
//!
//! This module provides the tokens and per-token functions that run inside a
//! host pipeline: trimming, stop-word removal and analyzer-backed stemming.

pub mod language;
pub mod token;
pub mod token_filter;
