// Longtime
// copyright zipxing@hotmail.com 2022～2025

use crate::error::Result;
use crate::render::adapter::gl::{
    debug,
    geometry::{describe_layout, upload, vertex_count, TRIANGLE_VERTICES},
    shader::GlShader,
    shader_source::{TRIANGLE_FRAGMENT_SRC, TRIANGLE_VERTEX_SRC},
    GlRender, GlRenderBase, Gpu, CLEAR_TEAL,
};
use log::{info, trace};

/// Full pipeline: VAO + VBO, vertex and fragment shader, one draw per frame
pub struct GlRenderTriangle<G: Gpu> {
    pub base: GlRenderBase<G>,
    pub gl_debug: bool,
    pub vertex_count: i32,
}

impl<G: Gpu> GlRenderTriangle<G> {
    pub fn new(gl_debug: bool) -> Self {
        Self {
            base: GlRenderBase::new("triangle", CLEAR_TEAL),
            gl_debug,
            vertex_count: vertex_count(&TRIANGLE_VERTICES),
        }
    }
}

impl<G: Gpu> GlRender<G> for GlRenderTriangle<G> {
    fn get_base(&mut self) -> &mut GlRenderBase<G> {
        &mut self.base
    }

    fn create_shader(&mut self, gl: &G) -> Result<()> {
        let shader = GlShader::new(gl, TRIANGLE_VERTEX_SRC, TRIANGLE_FRAGMENT_SRC)?;
        self.base.shader = Some(shader);
        Ok(())
    }

    fn create_buffer(&mut self, gl: &G) -> Result<()> {
        let vao = gl.create_vertex_array()?;
        self.base.vao = Some(vao);
        gl.bind_vertex_array(Some(vao));

        let vbo = upload(gl, &TRIANGLE_VERTICES)?;
        self.base.gl_buffers.push(vbo);
        describe_layout(gl);

        gl.bind_array_buffer(None);
        gl.bind_vertex_array(None);
        Ok(())
    }

    fn init(&mut self, gl: &mut G) -> Result<()> {
        if self.gl_debug {
            debug::install(gl);
        }
        self.create_buffer(gl)?;
        self.create_shader(gl)?;
        info!("triangle pipeline ready, {} vertices", self.vertex_count);
        Ok(())
    }

    fn draw(&mut self, gl: &G) {
        gl.clear(self.base.clear_color);
        if let (Some(shader), Some(vao)) = (&self.base.shader, self.base.vao) {
            shader.bind(gl);
            gl.bind_vertex_array(Some(vao));
            gl.draw_triangles(0, self.vertex_count);
            trace!("draw_arrays TRIANGLES 0..{}", self.vertex_count);
        }
    }
}
