// Longtime
// copyright zipxing@hotmail.com 2022～2025

use crate::error::Result;
use crate::render::adapter::gl::Gpu;
use log::info;
use std::mem::size_of;

/// Three vertices, x y z each, in normalized device coordinates
#[rustfmt::skip]
pub const TRIANGLE_VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0, // left
     0.5, -0.5, 0.0, // right
     0.0,  0.5, 0.0, // top
];

/// Shader input location of the position attribute
pub const POSITION_ATTRIB: u32 = 0;

pub const FLOATS_PER_VERTEX: i32 = 3;

/// Tightly packed: one vertex is exactly three f32
pub const VERTEX_STRIDE: i32 = FLOATS_PER_VERTEX * size_of::<f32>() as i32;

pub fn vertex_count(vertices: &[f32]) -> i32 {
    vertices.len() as i32 / FLOATS_PER_VERTEX
}

pub fn as_bytes(vertices: &[f32]) -> &[u8] {
    // f32 -> u8 never needs padding, prefix and suffix are empty
    unsafe { vertices.align_to::<u8>().1 }
}

/// Create a buffer, bind it to GL_ARRAY_BUFFER and copy `vertices` in one
/// transfer. The buffer stays bound.
pub fn upload<G: Gpu>(gl: &G, vertices: &[f32]) -> Result<G::Buffer> {
    let vbo = gl.create_buffer()?;
    gl.bind_array_buffer(Some(vbo));
    let bytes = as_bytes(vertices);
    gl.array_buffer_data_static(bytes);
    info!("vertex buffer uploaded: {} bytes", bytes.len());
    Ok(vbo)
}

/// Position attribute layout for the bound buffer. Recorded into the bound
/// vertex array object, if any.
pub fn describe_layout<G: Gpu>(gl: &G) {
    gl.vertex_attrib_pointer_f32(POSITION_ATTRIB, FLOATS_PER_VERTEX, VERTEX_STRIDE, 0);
    gl.enable_vertex_attrib_array(POSITION_ATTRIB);
}
