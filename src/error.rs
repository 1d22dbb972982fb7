// Longtime
// copyright zipxing@hotmail.com 2022～2025

//! Error type shared by bootstrap, the GL helpers and the render loop.
//!
//! Every failure is fatal. Errors travel up to `main`, which releases
//! resources and exits with [`LongtimeError::exit_code`].

use crate::render::adapter::gl::ShaderStage;

/// Exit code for failures before any shader work (init, window, context, loader).
pub const EXIT_SETUP_FAILURE: i32 = 1;

/// Exit code for shader compile, program link and GPU object failures.
pub const EXIT_PIPELINE_FAILURE: i32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum LongtimeError {
    // setup
    Init(String),
    Window(String),
    Context(String),
    Loader(String),
    Log(String),

    // pipeline
    Gpu(String),
    ShaderCompile { stage: ShaderStage, log: String },
    ProgramLink(String),
}

impl LongtimeError {
    pub fn exit_code(&self) -> i32 {
        match self {
            LongtimeError::Init(_)
            | LongtimeError::Window(_)
            | LongtimeError::Context(_)
            | LongtimeError::Loader(_)
            | LongtimeError::Log(_) => EXIT_SETUP_FAILURE,
            LongtimeError::Gpu(_)
            | LongtimeError::ShaderCompile { .. }
            | LongtimeError::ProgramLink(_) => EXIT_PIPELINE_FAILURE,
        }
    }

    /// True for failures that happen before the GL entry points exist.
    pub fn is_setup(&self) -> bool {
        self.exit_code() == EXIT_SETUP_FAILURE
    }
}

impl std::fmt::Display for LongtimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LongtimeError::Init(msg) => write!(f, "SDL_Init Error: {}", msg),
            LongtimeError::Window(msg) => write!(f, "SDL_CreateWindow Error: {}", msg),
            LongtimeError::Context(msg) => write!(f, "SDL_GL_CreateContext Error: {}", msg),
            LongtimeError::Loader(msg) => {
                write!(f, "Failed to load OpenGL functions: {}", msg)
            }
            LongtimeError::Log(msg) => write!(f, "Failed to initialize logging: {}", msg),
            LongtimeError::Gpu(msg) => write!(f, "GPU object creation failed: {}", msg),
            LongtimeError::ShaderCompile { stage, log } => {
                write!(f, "{} shader compilation failed: {}", stage, log)
            }
            LongtimeError::ProgramLink(log) => write!(f, "Shader program linking failed: {}", log),
        }
    }
}

impl std::error::Error for LongtimeError {}

pub type Result<T> = std::result::Result<T, LongtimeError>;
