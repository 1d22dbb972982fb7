// Longtime
// copyright zipxing@hotmail.com 2022～2025

//! GL debug output. Every message the driver emits is logged, no filtering
//! on source, type or severity.

use crate::render::adapter::gl::Gpu;
use log::{info, log, warn, Level};

/// Enable debug output and install [`log_debug_message`]
pub fn install<G: Gpu>(gl: &mut G) -> bool {
    let ok = gl.install_debug_output(log_debug_message);
    if ok {
        info!("GL debug output enabled");
    } else {
        warn!("GL debug output not supported by this context");
    }
    ok
}

pub fn log_debug_message(source: u32, gltype: u32, id: u32, severity: u32, message: &str) {
    log!(
        severity_level(severity),
        "GL debug: source={} type={} id={} severity={} message={}",
        source_name(source),
        type_name(gltype),
        id,
        severity_name(severity),
        message
    );
}

pub fn severity_level(severity: u32) -> Level {
    match severity {
        glow::DEBUG_SEVERITY_HIGH => Level::Error,
        glow::DEBUG_SEVERITY_MEDIUM => Level::Warn,
        _ => Level::Info,
    }
}

pub fn source_name(source: u32) -> &'static str {
    match source {
        glow::DEBUG_SOURCE_API => "API",
        glow::DEBUG_SOURCE_WINDOW_SYSTEM => "WINDOW_SYSTEM",
        glow::DEBUG_SOURCE_SHADER_COMPILER => "SHADER_COMPILER",
        glow::DEBUG_SOURCE_THIRD_PARTY => "THIRD_PARTY",
        glow::DEBUG_SOURCE_APPLICATION => "APPLICATION",
        glow::DEBUG_SOURCE_OTHER => "OTHER",
        _ => "UNKNOWN",
    }
}

pub fn type_name(gltype: u32) -> &'static str {
    match gltype {
        glow::DEBUG_TYPE_ERROR => "ERROR",
        glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "DEPRECATED_BEHAVIOR",
        glow::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "UNDEFINED_BEHAVIOR",
        glow::DEBUG_TYPE_PORTABILITY => "PORTABILITY",
        glow::DEBUG_TYPE_PERFORMANCE => "PERFORMANCE",
        glow::DEBUG_TYPE_MARKER => "MARKER",
        glow::DEBUG_TYPE_PUSH_GROUP => "PUSH_GROUP",
        glow::DEBUG_TYPE_POP_GROUP => "POP_GROUP",
        glow::DEBUG_TYPE_OTHER => "OTHER",
        _ => "UNKNOWN",
    }
}

pub fn severity_name(severity: u32) -> &'static str {
    match severity {
        glow::DEBUG_SEVERITY_HIGH => "HIGH",
        glow::DEBUG_SEVERITY_MEDIUM => "MEDIUM",
        glow::DEBUG_SEVERITY_LOW => "LOW",
        glow::DEBUG_SEVERITY_NOTIFICATION => "NOTIFICATION",
        _ => "UNKNOWN",
    }
}
