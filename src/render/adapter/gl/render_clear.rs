// Longtime
// copyright zipxing@hotmail.com 2022～2025

use crate::error::Result;
use crate::render::adapter::gl::{GlRender, GlRenderBase, Gpu, CLEAR_BLACK};

/// Window and context only: every frame is a clear
pub struct GlRenderClear<G: Gpu> {
    pub base: GlRenderBase<G>,
}

impl<G: Gpu> GlRenderClear<G> {
    pub fn new() -> Self {
        Self {
            base: GlRenderBase::new("clear", CLEAR_BLACK),
        }
    }
}

impl<G: Gpu> Default for GlRenderClear<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Gpu> GlRender<G> for GlRenderClear<G> {
    fn get_base(&mut self) -> &mut GlRenderBase<G> {
        &mut self.base
    }

    fn create_shader(&mut self, _gl: &G) -> Result<()> {
        Ok(())
    }

    fn create_buffer(&mut self, _gl: &G) -> Result<()> {
        Ok(())
    }
}
