//! HTTP/JSON API serving the algorithm catalog and generated traces.
//!
//! The presentation layer lists algorithms, asks for sample inputs, and
//! posts an input to receive the full trace it then plays back locally.
//! This crate contains the router, handlers, API schema types, error
//! mapping and the in-memory trace store.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
pub mod store;
