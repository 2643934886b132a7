//! Integration tests
//!
//! HTTP API tests against in-memory databases, and client sessions
//! driven against mock and real servers.

mod api;
