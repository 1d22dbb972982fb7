// Longtime
// copyright zipxing@hotmail.com 2022～2025

//! [`Gpu`] for a real driver, through glow.
//!
//! `glow::HasContext` has methods with the same names as [`Gpu`], so every
//! call below is spelled out as `HasContext::...`.

use crate::error::{LongtimeError, Result};
use crate::render::adapter::gl::{DebugCallback, Gpu, ShaderStage};
use glow::HasContext;

impl Gpu for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type Buffer = glow::Buffer;
    type VertexArray = glow::VertexArray;

    fn describe(&self) -> String {
        unsafe {
            format!(
                "{} ({})",
                HasContext::get_parameter_string(self, glow::VERSION),
                HasContext::get_parameter_string(self, glow::RENDERER)
            )
        }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { HasContext::viewport(self, x, y, width, height) }
    }

    fn clear(&self, rgba: [f32; 4]) {
        unsafe {
            HasContext::clear_color(self, rgba[0], rgba[1], rgba[2], rgba[3]);
            HasContext::clear(self, glow::COLOR_BUFFER_BIT);
        }
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<glow::Shader> {
        unsafe { HasContext::create_shader(self, stage.gl_enum()).map_err(LongtimeError::Gpu) }
    }

    fn shader_source(&self, shader: glow::Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: glow::Shader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: glow::Shader) -> bool {
        unsafe { HasContext::get_shader_compile_status(self, shader) }
    }

    fn shader_info_log(&self, shader: glow::Shader) -> String {
        // glow sizes the buffer from GL_INFO_LOG_LENGTH
        unsafe { HasContext::get_shader_info_log(self, shader) }
    }

    fn delete_shader(&self, shader: glow::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<glow::Program> {
        unsafe { HasContext::create_program(self).map_err(LongtimeError::Gpu) }
    }

    fn attach_shader(&self, program: glow::Program, shader: glow::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn detach_shader(&self, program: glow::Program, shader: glow::Shader) {
        unsafe { HasContext::detach_shader(self, program, shader) }
    }

    fn link_program(&self, program: glow::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: glow::Program) -> bool {
        unsafe { HasContext::get_program_link_status(self, program) }
    }

    fn program_info_log(&self, program: glow::Program) -> String {
        unsafe { HasContext::get_program_info_log(self, program) }
    }

    fn use_program(&self, program: Option<glow::Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn delete_program(&self, program: glow::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn create_vertex_array(&self) -> Result<glow::VertexArray> {
        unsafe { HasContext::create_vertex_array(self).map_err(LongtimeError::Gpu) }
    }

    fn bind_vertex_array(&self, vao: Option<glow::VertexArray>) {
        unsafe { HasContext::bind_vertex_array(self, vao) }
    }

    fn delete_vertex_array(&self, vao: glow::VertexArray) {
        unsafe { HasContext::delete_vertex_array(self, vao) }
    }

    fn create_buffer(&self) -> Result<glow::Buffer> {
        unsafe { HasContext::create_buffer(self).map_err(LongtimeError::Gpu) }
    }

    fn bind_array_buffer(&self, buffer: Option<glow::Buffer>) {
        unsafe { HasContext::bind_buffer(self, glow::ARRAY_BUFFER, buffer) }
    }

    fn array_buffer_data_static(&self, data: &[u8]) {
        unsafe {
            HasContext::buffer_data_u8_slice(self, glow::ARRAY_BUFFER, data, glow::STATIC_DRAW)
        }
    }

    fn delete_buffer(&self, buffer: glow::Buffer) {
        unsafe { HasContext::delete_buffer(self, buffer) }
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        unsafe {
            HasContext::vertex_attrib_pointer_f32(
                self,
                index,
                size,
                glow::FLOAT,
                false,
                stride,
                offset,
            )
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { HasContext::enable_vertex_attrib_array(self, index) }
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        unsafe { HasContext::draw_arrays(self, glow::TRIANGLES, first, count) }
    }

    fn install_debug_output(&mut self, callback: DebugCallback) -> bool {
        unsafe {
            if !HasContext::supports_debug(self) {
                return false;
            }
            HasContext::enable(self, glow::DEBUG_OUTPUT);
            HasContext::enable(self, glow::DEBUG_OUTPUT_SYNCHRONOUS);
            HasContext::debug_message_control(
                self,
                glow::DONT_CARE,
                glow::DONT_CARE,
                glow::DONT_CARE,
                &[],
                true,
            );
            HasContext::debug_message_callback(self, move |source, gltype, id, severity, message: &str| {
                callback(source, gltype, id, severity, message)
            });
        }
        true
    }
}
