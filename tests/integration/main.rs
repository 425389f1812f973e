//! Integration tests for the HTTP API
//!
//! These tests use wiremock to stand in for the upstream catalog site and
//! drive the full router (rate limit, CORS, handlers, assembler, scraper)
//! without binding a socket.

mod api_tests;
mod support;
