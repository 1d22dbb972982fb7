// Longtime
// copyright zipxing@hotmail.com 2022～2025

//! # OpenGL Rendering Module
//!
//! Everything that talks to the GL driver lives below this module:
//!
//! ```text
//!   Adapter::load_gl ──► Gpu (glow::Context)
//!                          │
//!        ┌─────────────────┼──────────────────┐
//!        ▼                 ▼                  ▼
//!   shader::compile   program::link     geometry::upload
//!        └──────┬──────────┘                  │
//!               ▼                             ▼
//!           GlShader                    VAO / VBO
//!               └──────────────┬──────────────┘
//!                              ▼
//!            GlRender (clear | buffer | triangle)
//! ```
//!
//! GL calls go through the [`Gpu`] trait rather than `glow::HasContext`
//! directly. The trait covers only the calls this program makes, which keeps
//! the helpers and the render loop runnable against a recording mock.

use crate::config::Variant;
use crate::error::Result;
use log::info;
use std::fmt::{self, Debug};

/// `glow::Context` implementation of [`Gpu`]
pub mod context;

/// GL debug output callback and message formatting
pub mod debug;

/// Fixed triangle vertices and their upload / layout description
pub mod geometry;

/// Program linking helper
pub mod program;

/// Shader stage compilation helper and the linked `GlShader`
pub mod shader;

/// GLSL sources embedded in the binary
pub mod shader_source;

/// Variant 1: clear only
pub mod render_clear;

/// Variant 2: vertex buffer upload plus a vertex shader
pub mod render_buffer;

/// Variant 3: full pipeline and draw call
pub mod render_triangle;

use render_buffer::GlRenderBuffer;
use render_clear::GlRenderClear;
use render_triangle::GlRenderTriangle;
use shader::GlShader;

/// One programmable pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Signature of the driver debug message sink: source, type, id, severity, message
pub type DebugCallback = fn(u32, u32, u32, u32, &str);

/// GL entry points used by Longtime
///
/// Handles are plain copyable ids. Methods must be called from the thread
/// that owns the current context.
pub trait Gpu {
    type Shader: Copy + Debug + PartialEq;
    type Program: Copy + Debug + PartialEq;
    type Buffer: Copy + Debug + PartialEq;
    type VertexArray: Copy + Debug + PartialEq;

    /// GL_VERSION and GL_RENDERER, for the startup log
    fn describe(&self) -> String;

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear(&self, rgba: [f32; 4]);

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    /// Full info log, length queried from the driver
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    fn create_vertex_array(&self) -> Result<Self::VertexArray>;
    fn bind_vertex_array(&self, vao: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vao: Self::VertexArray);

    fn create_buffer(&self) -> Result<Self::Buffer>;
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);
    /// Upload into the bound array buffer with a static usage hint
    fn array_buffer_data_static(&self, data: &[u8]);
    fn delete_buffer(&self, buffer: Self::Buffer);

    /// Float attribute pointer into the bound array buffer, not normalized
    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32);
    fn enable_vertex_attrib_array(&self, index: u32);

    fn draw_triangles(&self, first: i32, count: i32);

    /// Route every driver message to `callback`. Returns false when the
    /// context has no debug output support.
    fn install_debug_output(&mut self, callback: DebugCallback) -> bool;
}

/// OpenGL Renderer Interface Definition
///
/// Lifecycle:
///
/// ```text
///   new()            → no GL objects yet
///   init()           → create_buffer() then create_shader()
///   draw()           → once per frame (clear, optional draw call)
///   release()        → delete GL objects, safe to repeat
/// ```
pub trait GlRender<G: Gpu> {
    fn get_base(&mut self) -> &mut GlRenderBase<G>;

    /// Compile and link shaders
    fn create_shader(&mut self, gl: &G) -> Result<()>;

    /// Upload geometry and describe its layout
    fn create_buffer(&mut self, gl: &G) -> Result<()>;

    /// Geometry first, then shaders
    fn init(&mut self, gl: &mut G) -> Result<()> {
        self.create_buffer(gl)?;
        self.create_shader(gl)
    }

    /// Clear to the variant's color, the default frame
    fn draw(&mut self, gl: &G) {
        let rgba = self.get_base().clear_color;
        gl.clear(rgba);
    }

    fn release(&mut self, gl: &G) {
        self.get_base().release(gl);
    }
}

/// GL objects owned by one renderer
pub struct GlRenderBase<G: Gpu> {
    /// Variant name, for logs
    pub name: &'static str,

    /// Linked program, triangle variant only
    pub shader: Option<GlShader<G>>,

    /// Compiled stages not (yet) linked into a program
    pub stages: Vec<G::Shader>,

    pub vao: Option<G::VertexArray>,
    pub gl_buffers: Vec<G::Buffer>,

    pub clear_color: [f32; 4],
}

impl<G: Gpu> GlRenderBase<G> {
    pub fn new(name: &'static str, clear_color: [f32; 4]) -> Self {
        Self {
            name,
            shader: None,
            stages: vec![],
            vao: None,
            gl_buffers: vec![],
            clear_color,
        }
    }

    /// Delete everything still held and return how many objects went.
    /// A second call finds nothing to delete.
    pub fn release(&mut self, gl: &G) -> usize {
        let mut deleted = 0;
        if let Some(shader) = self.shader.take() {
            shader.delete(gl);
            deleted += 1;
        }
        for stage in self.stages.drain(..) {
            gl.delete_shader(stage);
            deleted += 1;
        }
        if let Some(vao) = self.vao.take() {
            gl.delete_vertex_array(vao);
            deleted += 1;
        }
        for buffer in self.gl_buffers.drain(..) {
            gl.delete_buffer(buffer);
            deleted += 1;
        }
        if deleted > 0 {
            info!("{} renderer released {} GL objects", self.name, deleted);
        }
        deleted
    }
}

/// Black, as in the first window-only version
pub const CLEAR_BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Dark teal behind the buffer and triangle variants
pub const CLEAR_TEAL: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

/// Build the renderer for a variant. GL objects are created later by `init`.
pub fn create_renderer<G: Gpu + 'static>(variant: Variant, gl_debug: bool) -> Box<dyn GlRender<G>> {
    match variant {
        Variant::Clear => Box::new(GlRenderClear::new()),
        Variant::Buffer => Box::new(GlRenderBuffer::new()),
        Variant::Triangle => Box::new(GlRenderTriangle::new(gl_debug)),
    }
}
