// Longtime
// copyright zipxing@hotmail.com 2022～2025

use crate::error::{LongtimeError, Result};
use crate::render::adapter::gl::{program::link_program, Gpu, ShaderStage};
use log::{error, info};

/// Reported when the driver fails a compile or link without saying why
pub const EMPTY_LOG: &str = "no diagnostic provided by driver";

pub(crate) fn diagnostic(log: String) -> String {
    let trimmed = log.trim_end_matches(|c: char| c == '\0' || c.is_whitespace());
    if trimmed.is_empty() {
        EMPTY_LOG.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Compile one stage. A stage that fails is deleted and never returned.
pub fn compile_shader<G: Gpu>(gl: &G, stage: ShaderStage, source: &str) -> Result<G::Shader> {
    let shader = gl.create_shader(stage)?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);
    if !gl.shader_compile_status(shader) {
        let log = diagnostic(gl.shader_info_log(shader));
        error!("{} shader compilation error: {}", stage, log);
        gl.delete_shader(shader);
        return Err(LongtimeError::ShaderCompile { stage, log });
    }
    info!("{} shader compiled", stage);
    Ok(shader)
}

/// A linked vertex + fragment program
pub struct GlShader<G: Gpu> {
    pub program: G::Program,
}

impl<G: Gpu> GlShader<G> {
    /// Compile both stages, link them, then delete the stages.
    pub fn new(gl: &G, vertex_source: &str, fragment_source: &str) -> Result<Self> {
        let vertex_shader = compile_shader(gl, ShaderStage::Vertex, vertex_source)?;
        let fragment_shader = match compile_shader(gl, ShaderStage::Fragment, fragment_source) {
            Ok(s) => s,
            Err(e) => {
                gl.delete_shader(vertex_shader);
                return Err(e);
            }
        };

        let linked = link_program(gl, &[vertex_shader, fragment_shader]);
        gl.delete_shader(vertex_shader);
        gl.delete_shader(fragment_shader);

        Ok(Self { program: linked? })
    }

    pub fn bind(&self, gl: &G) {
        gl.use_program(Some(self.program));
    }

    pub fn get_program(&self) -> G::Program {
        self.program
    }

    pub fn delete(self, gl: &G) {
        gl.delete_program(self.program);
    }
}
