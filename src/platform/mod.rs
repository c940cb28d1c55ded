//! Platform bindings
//!
//! The core is host-agnostic; this is where a concrete host plugs in.
//! - `web`: wasm-bindgen surface for a browser canvas layer (wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod web;
