// Longtime
// copyright zipxing@hotmail.com 2022～2025

use crate::error::Result;
use crate::render::adapter::gl::{
    geometry::{upload, TRIANGLE_VERTICES},
    shader::compile_shader,
    shader_source::TRIANGLE_VERTEX_SRC,
    GlRender, GlRenderBase, Gpu, ShaderStage, CLEAR_TEAL,
};

/// Second step: the triangle is uploaded and its vertex shader compiled,
/// but nothing is drawn yet. No vertex array object exists, so no attribute
/// layout is described.
pub struct GlRenderBuffer<G: Gpu> {
    pub base: GlRenderBase<G>,
}

impl<G: Gpu> GlRenderBuffer<G> {
    pub fn new() -> Self {
        Self {
            base: GlRenderBase::new("buffer", CLEAR_TEAL),
        }
    }
}

impl<G: Gpu> Default for GlRenderBuffer<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Gpu> GlRender<G> for GlRenderBuffer<G> {
    fn get_base(&mut self) -> &mut GlRenderBase<G> {
        &mut self.base
    }

    fn create_shader(&mut self, gl: &G) -> Result<()> {
        let vs = compile_shader(gl, ShaderStage::Vertex, TRIANGLE_VERTEX_SRC)?;
        self.base.stages.push(vs);
        Ok(())
    }

    fn create_buffer(&mut self, gl: &G) -> Result<()> {
        let vbo = upload(gl, &TRIANGLE_VERTICES)?;
        self.base.gl_buffers.push(vbo);
        gl.bind_array_buffer(None);
        Ok(())
    }
}
