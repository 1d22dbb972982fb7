// Longtime
// copyright zipxing@hotmail.com 2022～2025

// GLSL 330 core, matching the 3.3 core context requested at bootstrap.
// Kept byte for byte; the driver sees exactly this text.

/// Passes the position attribute at location 0 through unchanged
pub const TRIANGLE_VERTEX_SRC: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;

void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
"#;

/// Opaque orange
pub const TRIANGLE_FRAGMENT_SRC: &str = r#"#version 330 core
out vec4 FragColor;

void main()
{
    FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
"#;
