// Longtime
// copyright zipxing@hotmail.com 2022～2025

//! Headless stand-ins for the driver and the platform.
//!
//! `MockGpu` records every call and hands out increasing ids starting at 1.
//! A shader compiles when its source starts with `#version 330 core`, has a
//! `void main()` whose body ends with a `;`, and contains none of the
//! `reject` markers. `HeadlessAdapter`
//! replays one scripted batch of events per poll.

#![allow(dead_code)]

use longtime::{
    config::Config,
    error::{LongtimeError, Result},
    event::Event,
    render::adapter::{
        gl::{DebugCallback, Gpu, ShaderStage},
        Adapter, AdapterBase,
    },
};
use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    rc::Rc,
};

pub const BAD_GLSL: &str = "#version 330 core\nvoid main() { gl_Position = vec4(aPos, 1.0) }";

/// Trimmed text between the braces of `void main()`
fn main_body(src: &str) -> Option<&str> {
    let rest = &src[src.find("void main()")?..];
    let open = rest.find('{')?;
    let close = rest.rfind('}')?;
    (open < close).then(|| rest[open + 1..close].trim())
}

#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    Viewport(i32, i32, i32, i32),
    Clear([f32; 4]),
    CreateShader(ShaderStage, u32),
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    DetachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    CreateBuffer(u32),
    BindArrayBuffer(Option<u32>),
    BufferData(usize),
    DeleteBuffer(u32),
    VertexAttribPointer(u32, i32, i32, i32),
    EnableVertexAttribArray(u32),
    DrawTriangles(i32, i32),
    DebugOutput,
}

#[derive(Default)]
struct MockState {
    calls: Vec<GlCall>,
    next_id: u32,
    sources: HashMap<u32, String>,
    compiled: HashMap<u32, bool>,
    attached: HashMap<u32, Vec<u32>>,
    linked: HashMap<u32, bool>,
}

#[derive(Clone, Default)]
pub struct MockGpu {
    state: Rc<RefCell<MockState>>,
    /// Sources containing any of these fail to compile
    pub reject: Vec<&'static str>,
    pub fail_link: bool,
    pub debug_supported: bool,
}

impl MockGpu {
    pub fn new() -> Self {
        Self {
            debug_supported: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.state.borrow().calls.clone()
    }

    pub fn count(&self, pred: impl Fn(&GlCall) -> bool) -> usize {
        self.state.borrow().calls.iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: GlCall) {
        self.state.borrow_mut().calls.push(call);
    }

    fn next_id(&self) -> u32 {
        let mut st = self.state.borrow_mut();
        st.next_id += 1;
        st.next_id
    }

    fn source_ok(&self, src: &str) -> bool {
        src.starts_with("#version 330 core")
            && main_body(src).is_some_and(|body| body.is_empty() || body.ends_with(';'))
            && !self.reject.iter().any(|r| src.contains(r))
    }
}

impl Gpu for MockGpu {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;

    fn describe(&self) -> String {
        "3.3 (mock)".to_string()
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(GlCall::Viewport(x, y, width, height));
    }

    fn clear(&self, rgba: [f32; 4]) {
        self.record(GlCall::Clear(rgba));
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<u32> {
        let id = self.next_id();
        self.record(GlCall::CreateShader(stage, id));
        Ok(id)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.state
            .borrow_mut()
            .sources
            .insert(shader, source.to_string());
        self.record(GlCall::ShaderSource(shader));
    }

    fn compile_shader(&self, shader: u32) {
        let src = self
            .state
            .borrow()
            .sources
            .get(&shader)
            .cloned()
            .unwrap_or_default();
        let ok = self.source_ok(&src);
        self.state.borrow_mut().compiled.insert(shader, ok);
        self.record(GlCall::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.state
            .borrow()
            .compiled
            .get(&shader)
            .copied()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        if self.shader_compile_status(shader) {
            String::new()
        } else {
            "0:2(52): error: syntax error, unexpected '}', expecting ',' or ';'\n".to_string()
        }
    }

    fn delete_shader(&self, shader: u32) {
        self.record(GlCall::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32> {
        let id = self.next_id();
        self.record(GlCall::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.state
            .borrow_mut()
            .attached
            .entry(program)
            .or_default()
            .push(shader);
        self.record(GlCall::AttachShader(program, shader));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        if let Some(list) = self.state.borrow_mut().attached.get_mut(&program) {
            list.retain(|s| *s != shader);
        }
        self.record(GlCall::DetachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        let ok = {
            let st = self.state.borrow();
            let stages = st.attached.get(&program).cloned().unwrap_or_default();
            !self.fail_link
                && !stages.is_empty()
                && stages
                    .iter()
                    .all(|s| st.compiled.get(s).copied().unwrap_or(false))
        };
        self.state.borrow_mut().linked.insert(program, ok);
        self.record(GlCall::LinkProgram(program));
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.state
            .borrow()
            .linked
            .get(&program)
            .copied()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: u32) -> String {
        if self.program_link_status(program) {
            String::new()
        } else {
            "error: linking with uncompiled/unspecialized shader".to_string()
        }
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(GlCall::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.record(GlCall::DeleteProgram(program));
    }

    fn create_vertex_array(&self) -> Result<u32> {
        let id = self.next_id();
        self.record(GlCall::CreateVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, vao: Option<u32>) {
        self.record(GlCall::BindVertexArray(vao));
    }

    fn delete_vertex_array(&self, vao: u32) {
        self.record(GlCall::DeleteVertexArray(vao));
    }

    fn create_buffer(&self) -> Result<u32> {
        let id = self.next_id();
        self.record(GlCall::CreateBuffer(id));
        Ok(id)
    }

    fn bind_array_buffer(&self, buffer: Option<u32>) {
        self.record(GlCall::BindArrayBuffer(buffer));
    }

    fn array_buffer_data_static(&self, data: &[u8]) {
        self.record(GlCall::BufferData(data.len()));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(GlCall::DeleteBuffer(buffer));
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        self.record(GlCall::VertexAttribPointer(index, size, stride, offset));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::EnableVertexAttribArray(index));
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.record(GlCall::DrawTriangles(first, count));
    }

    fn install_debug_output(&mut self, _callback: DebugCallback) -> bool {
        if self.debug_supported {
            self.record(GlCall::DebugOutput);
        }
        self.debug_supported
    }
}

/// Scripted platform. Each poll pops one batch; an exhausted script reports
/// a quit so a test can never spin forever.
pub struct HeadlessAdapter {
    pub base: AdapterBase,
    pub gpu: MockGpu,
    pub script: VecDeque<Vec<Event>>,
    pub fail_init: Option<LongtimeError>,
    pub fail_load: Option<LongtimeError>,
    pub live: bool,
    pub gl_loads: usize,
    pub polls: usize,
    pub presents: usize,
    pub cleanup_calls: usize,
    pub releases: usize,
}

impl HeadlessAdapter {
    pub fn new(script: Vec<Vec<Event>>) -> Self {
        Self {
            base: AdapterBase::new(),
            gpu: MockGpu::new(),
            script: script.into(),
            fail_init: None,
            fail_load: None,
            live: false,
            gl_loads: 0,
            polls: 0,
            presents: 0,
            cleanup_calls: 0,
            releases: 0,
        }
    }
}

impl Adapter for HeadlessAdapter {
    type Gl = MockGpu;

    fn init(&mut self, config: &Config) -> Result<()> {
        if let Some(e) = self.fail_init.clone() {
            return Err(e);
        }
        self.base.pixel_w = config.width;
        self.base.pixel_h = config.height;
        self.live = true;
        Ok(())
    }

    fn load_gl(&mut self) -> Result<MockGpu> {
        if let Some(e) = self.fail_load.clone() {
            return Err(e);
        }
        self.gl_loads += 1;
        Ok(self.gpu.clone())
    }

    fn get_base(&mut self) -> &mut AdapterBase {
        &mut self.base
    }

    fn poll_event(&mut self, es: &mut Vec<Event>) {
        self.polls += 1;
        match self.script.pop_front() {
            Some(batch) => es.extend(batch),
            None => es.push(Event::Quit),
        }
    }

    fn present(&mut self) {
        self.presents += 1;
    }

    fn cleanup(&mut self) {
        self.cleanup_calls += 1;
        if self.live {
            self.live = false;
            self.releases += 1;
        }
    }
}
