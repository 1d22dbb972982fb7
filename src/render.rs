// Longtime
// copyright zipxing@hotmail.com 2022～2025

//! # Render module
//!
//! - `adapter`: platform adapter interface (SDL, or scripted in tests)
//! - `adapter::gl`: the `Gpu` trait, shader/program helpers, geometry and
//!   the three variant renderers

pub mod adapter;

pub use adapter::{Adapter, AdapterBase};
