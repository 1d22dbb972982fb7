// Longtime
// copyright zipxing@hotmail.com 2022～2025

use crate::error::{LongtimeError, Result};
use crate::render::adapter::gl::{shader::diagnostic, Gpu};
use log::{error, info};

/// Link already compiled stages into a new program.
///
/// Stages are detached on both outcomes. On failure the program is deleted
/// before the error is returned. Deleting the stages is left to the caller.
pub fn link_program<G: Gpu>(gl: &G, stages: &[G::Shader]) -> Result<G::Program> {
    let program = gl.create_program()?;
    for stage in stages {
        gl.attach_shader(program, *stage);
    }
    gl.link_program(program);
    let linked = gl.program_link_status(program);
    let log = if linked {
        None
    } else {
        Some(diagnostic(gl.program_info_log(program)))
    };

    for stage in stages {
        gl.detach_shader(program, *stage);
    }

    match log {
        None => {
            info!("program linked from {} stages", stages.len());
            Ok(program)
        }
        Some(log) => {
            error!("program linking error: {}", log);
            gl.delete_program(program);
            Err(LongtimeError::ProgramLink(log))
        }
    }
}
