//! Integration tests for pixfx crates.
//!
//! End-to-end checks that decode, filter and encode together:
//! file -> `pixfx_io` -> `pixfx_ops` -> file -> `pixfx_io`.
