//! HTTP handler modules.
//!
//! Handlers parse the request, delegate to `algotrace-gen`, and return JSON.

pub mod algorithms;
pub mod health;
pub mod traces;
