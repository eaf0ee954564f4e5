//! Shared contracts for the categories admin panel.
//!
//! Everything here is target independent: the frontend compiles it to WASM,
//! tests run it on the host.

pub mod domain;
pub mod shared;
