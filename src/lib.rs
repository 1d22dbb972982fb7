// Longtime
// copyright zipxing@hotmail.com 2022～2025

//! Longtime opens an 800x600 window, creates an OpenGL 3.3 core context through
//! SDL2 and draws one hard-coded triangle.
//!
//! It comes in three incremental variants, picked at runtime:
//! - `clear`: window, context and a clear loop
//! - `buffer`: adds the vertex buffer upload and a vertex shader
//! - `triangle`: full vertex/fragment pipeline, vertex array object, GL debug
//!   output and the draw call
//!
//! The SDL backend is behind the `sdl` feature. Without it the crate still
//! builds the render loop and GL helpers, which is what the tests drive
//! through a scripted adapter and a recording `Gpu`.

/// bootstrap, main loop and teardown
pub mod app;

/// command line arguments and runtime configuration
pub mod config;

/// error type and exit codes
pub mod error;

/// unified input events
pub mod event;

/// log
pub mod log;

/// render adapters and the OpenGL layer
pub mod render;

pub use app::{run, LoopState, RenderLoop};
pub use config::{Config, Variant};
pub use error::{LongtimeError, Result};
