//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **rest**: PostgREST-style HTTP store built on reqwest
//! - **memory**: in-process store for local runs and tests
//!
//! Adapters are thin translators between domain row types and the
//! infrastructure's representation. They contain no business logic.

pub mod memory;
pub mod rest;
