//! HTTP API: server wiring, routing, and request/response mapping around the
//! coverage engine.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
