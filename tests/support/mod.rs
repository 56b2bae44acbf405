//! Shared helpers for precond integration tests.

pub mod harness;
