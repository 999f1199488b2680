//! Outpost - Minimal HTTP/1.0 Web Server
//!
//! Core library for the listener and HTTP handling.

pub mod config;
pub mod http;
pub mod server;
