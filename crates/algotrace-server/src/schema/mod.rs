//! API schema types for request/response definitions.

pub mod algorithms;
pub mod traces;
