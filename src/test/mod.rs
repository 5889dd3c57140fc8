//! Shared helpers for the crate's tests.
