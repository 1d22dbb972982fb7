// Longtime
// copyright zipxing@hotmail.com 2022～2025

//! App drives one variant from bootstrap to teardown and owns the main loop.
//!
//! ```text
//!  adapter.init ─► adapter.load_gl ─► viewport ─► renderer.init
//!        │
//!        ▼
//!  loop { poll all events ─► (stopped? break) ─► draw ─► present }
//!        │
//!        ▼
//!  renderer.release ─► adapter.cleanup
//! ```
//!
//! # Example
//!
//! fn main() {
//!    let config = Config::from(Args::parse());
//!    init_log(config.log_level, None).unwrap();
//!    let mut adapter = SdlAdapter::new();
//!    std::process::exit(match run(&mut adapter, &config) {
//!        Ok(_) => 0,
//!        Err(e) => e.exit_code(),
//!    });
//! }

use crate::{
    config::Config,
    error::Result,
    event::Event,
    render::adapter::{
        gl::{create_renderer, GlRender, Gpu},
        Adapter,
    },
};
use log::{info, trace};

/// Render loop state. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

pub struct RenderLoop {
    pub state: LoopState,
    /// Frames rendered and presented
    pub frames: u64,
    input_events: Vec<Event>,
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Running,
            frames: 0,
            input_events: vec![],
        }
    }

    /// Apply a batch of events. Any quit or escape press stops the loop;
    /// once stopped it stays stopped.
    pub fn handle_events(&mut self, events: &[Event]) -> LoopState {
        if events.iter().any(|e| e.is_exit()) {
            if self.state == LoopState::Running {
                info!("Exit requested");
            }
            self.state = LoopState::Stopped;
        }
        self.state
    }

    /// One iteration: drain events, then draw and present unless stopped
    pub fn step<A: Adapter>(
        &mut self,
        adapter: &mut A,
        gl: &A::Gl,
        renderer: &mut dyn GlRender<A::Gl>,
    ) -> LoopState {
        if self.state == LoopState::Stopped {
            return self.state;
        }
        self.input_events.clear();
        adapter.poll_event(&mut self.input_events);
        let events = std::mem::take(&mut self.input_events);
        let state = self.handle_events(&events);
        self.input_events = events;
        if state == LoopState::Stopped {
            return state;
        }

        renderer.draw(gl);
        adapter.present();
        self.frames += 1;
        trace!("frame {}", self.frames);
        self.state
    }

    /// Main loop, runs until quit or escape. Returns frames rendered.
    pub fn run<A: Adapter>(
        &mut self,
        adapter: &mut A,
        gl: &A::Gl,
        renderer: &mut dyn GlRender<A::Gl>,
    ) -> u64 {
        info!("Begin run...");
        while self.step(adapter, gl, renderer) == LoopState::Running {}
        self.frames
    }
}

/// Bootstrap, render until exit, then tear down. Teardown happens on every
/// path, including setup and shader failures, before the error is returned.
pub fn run<A: Adapter>(adapter: &mut A, config: &Config) -> Result<u64> {
    let outcome = run_variant(adapter, config);
    adapter.cleanup();
    outcome
}

fn run_variant<A: Adapter>(adapter: &mut A, config: &Config) -> Result<u64> {
    info!("Init {} variant...", config.variant.name());
    adapter.init(config)?;
    let mut gl = adapter.load_gl()?;
    info!("GL: {}", gl.describe());

    let (w, h) = adapter.drawable_size();
    gl.viewport(0, 0, w as i32, h as i32);

    let mut renderer = create_renderer::<A::Gl>(config.variant, config.debug_channel());
    info!("Init {} renderer...", renderer.get_base().name);
    let outcome = render(adapter, &mut gl, renderer.as_mut());
    renderer.release(&gl);
    outcome
}

fn render<A: Adapter>(
    adapter: &mut A,
    gl: &mut A::Gl,
    renderer: &mut dyn GlRender<A::Gl>,
) -> Result<u64> {
    renderer.init(gl)?;
    let mut rl = RenderLoop::new();
    let frames = rl.run(adapter, gl, renderer);
    info!("Render loop stopped after {} frames", frames);
    Ok(frames)
}
