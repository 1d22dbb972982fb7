// Longtime
// copyright zipxing@hotmail.com 2022～2025

//! # Render Adapter Module
//!
//! An adapter owns the platform side of the program: the window, the GL
//! context bound to it, and the event source. The render loop only sees the
//! [`Adapter`] trait, so the same loop runs on SDL or on a scripted adapter.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            Render loop (app::run)            │
//! │   poll_event ─► GlRender::draw ─► present     │
//! └──────────────────────────────────────────────┘
//!          │                      │
//!          ▼                      ▼
//! ┌──────────────────┐   ┌──────────────────────┐
//! │     Adapter      │   │     Gpu (gl.rs)      │
//! │  SDL window/ctx  │──►│  glow::Context       │
//! └──────────────────┘   └──────────────────────┘
//! ```

use crate::{config::Config, error::Result, event::Event};

/// OpenGL helpers, renderers and the `Gpu` trait
pub mod gl;

/// SDL adapter module - window, GL context and events through SDL2
#[cfg(sdl_backend)]
pub mod sdl;

use gl::Gpu;

/// Window facts shared by all adapters
#[derive(Debug, Clone, Default)]
pub struct AdapterBase {
    /// Drawable width in pixels
    pub pixel_w: u32,
    /// Drawable height in pixels
    pub pixel_h: u32,
}

impl AdapterBase {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Adapter Interface Definition
///
/// Lifecycle: `init` → `load_gl` → (`poll_event` → `present`)* → `cleanup`.
/// `cleanup` must be safe to call at any point and any number of times,
/// including after a failed `init`.
pub trait Adapter {
    type Gl: Gpu + 'static;

    /// Create window and GL context. Must not issue GL calls.
    fn init(&mut self, config: &Config) -> Result<()>;

    /// Resolve GL entry points for the current context
    fn load_gl(&mut self) -> Result<Self::Gl>;

    fn get_base(&mut self) -> &mut AdapterBase;

    /// Drawable size in pixels
    fn drawable_size(&mut self) -> (u32, u32) {
        let base = self.get_base();
        (base.pixel_w, base.pixel_h)
    }

    /// Append every pending event to `es` without blocking
    fn poll_event(&mut self, es: &mut Vec<Event>);

    /// Swap buffers
    fn present(&mut self);

    /// Destroy context, window and platform, in that order
    fn cleanup(&mut self);
}
