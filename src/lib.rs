//! HTTP/JSON gateway for the Galaxy gRPC backend.
//!
//! Exposes a public REST surface for accounts, sessions, items and
//! purchase entries. All persistence lives behind the backend; this crate
//! validates input, authenticates bearer tokens, translates backend
//! failures into the public error contract and shapes responses.

pub mod backend;
pub mod config;
pub mod error;
pub mod extensions;
pub mod handlers;
pub mod middleware;
pub mod password;
pub mod patch;
pub mod pb;
pub mod routes;
pub mod telemetry;

#[cfg(test)]
mod test_support;
