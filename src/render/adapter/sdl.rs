// Longtime
// copyright zipxing@hotmail.com 2022～2025

//! Implements an Adapter trait. Moreover, all SDL related processing is handled here.
//! Includes GL attribute setup, window and context creation, GL loading via
//! SDL_GL_GetProcAddress, event conversion and teardown.

use crate::config::Config;
use crate::error::{LongtimeError, Result};
use crate::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use crate::render::adapter::{Adapter, AdapterBase};
use log::{info, trace};
use sdl2::{
    event::Event as SEvent,
    keyboard::Keycode as SKeycode,
    video::{GLContext, GLProfile, Window},
    EventPump, Sdl, VideoSubsystem,
};

/// Entry points probed before glow is built. If the driver does not expose
/// these, nothing else will work either.
const PROBE_SYMBOLS: [&str; 3] = ["glGetString", "glCreateShader", "glGenVertexArrays"];

pub struct SdlAdapter {
    pub base: AdapterBase,

    // sdl object
    pub sdl_context: Option<Sdl>,
    pub video_subsystem: Option<VideoSubsystem>,
    pub sdl_window: Option<Window>,
    pub event_pump: Option<EventPump>,

    // gl object
    pub gl_context: Option<GLContext>,
}

impl SdlAdapter {
    /// No SDL call happens until `init`
    pub fn new() -> Self {
        Self {
            base: AdapterBase::new(),
            sdl_context: None,
            video_subsystem: None,
            sdl_window: None,
            event_pump: None,
            gl_context: None,
        }
    }

    /// True once `cleanup` has run (or before `init`)
    pub fn is_released(&self) -> bool {
        self.sdl_context.is_none()
            && self.video_subsystem.is_none()
            && self.sdl_window.is_none()
            && self.gl_context.is_none()
            && self.event_pump.is_none()
    }
}

impl Default for SdlAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for SdlAdapter {
    type Gl = glow::Context;

    fn init(&mut self, config: &Config) -> Result<()> {
        let sdl_context = sdl2::init().map_err(LongtimeError::Init)?;
        let video_subsystem = sdl_context.video().map_err(LongtimeError::Init)?;
        self.sdl_context = Some(sdl_context);

        // GL attributes only take effect if set before the window exists
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(config.gl_version.0, config.gl_version.1);
        if config.debug_channel() {
            gl_attr.set_context_flags().debug().set();
        }

        let window = video_subsystem
            .window(&config.title, config.width, config.height)
            .opengl()
            .position_centered()
            .build()
            .map_err(|e| LongtimeError::Window(e.to_string()))?;

        let gl_context = window.gl_create_context().map_err(LongtimeError::Context)?;
        self.gl_context = Some(gl_context);

        let (w, h) = window.drawable_size();
        self.base.pixel_w = w;
        self.base.pixel_h = h;
        self.sdl_window = Some(window);
        self.video_subsystem = Some(video_subsystem);
        info!(
            "Window & gl context ok...{} {}x{} GL {}.{} core",
            config.title, w, h, config.gl_version.0, config.gl_version.1
        );

        let sdl_context = self
            .sdl_context
            .as_ref()
            .ok_or_else(|| LongtimeError::Init("SDL context released".to_string()))?;
        self.event_pump = Some(sdl_context.event_pump().map_err(LongtimeError::Init)?);
        Ok(())
    }

    fn load_gl(&mut self) -> Result<glow::Context> {
        let video_subsystem = self
            .video_subsystem
            .as_ref()
            .ok_or_else(|| LongtimeError::Loader("no video subsystem".to_string()))?;
        if self.gl_context.is_none() {
            return Err(LongtimeError::Loader("no current GL context".to_string()));
        }
        for name in PROBE_SYMBOLS {
            if video_subsystem.gl_get_proc_address(name).is_null() {
                return Err(LongtimeError::Loader(format!("{} not found", name)));
            }
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        info!("GL functions loaded");
        Ok(gl)
    }

    fn get_base(&mut self) -> &mut AdapterBase {
        &mut self.base
    }

    fn drawable_size(&mut self) -> (u32, u32) {
        if let Some(window) = &self.sdl_window {
            let (w, h) = window.drawable_size();
            self.base.pixel_w = w;
            self.base.pixel_h = h;
        }
        (self.base.pixel_w, self.base.pixel_h)
    }

    fn poll_event(&mut self, es: &mut Vec<Event>) {
        if let Some(ref mut ep) = self.event_pump {
            for event in ep.poll_iter() {
                // convert sdl events to longtime events
                if let Some(et) = input_events_from_sdl(&event) {
                    trace!("event {:?}", et);
                    es.push(et);
                }
            }
        }
    }

    fn present(&mut self) {
        // swap window for display
        if let Some(window) = &self.sdl_window {
            window.gl_swap_window();
        }
    }

    fn cleanup(&mut self) {
        if self.is_released() {
            return;
        }
        self.event_pump = None;
        if self.gl_context.take().is_some() {
            info!("GL context destroyed");
        }
        if self.sdl_window.take().is_some() {
            info!("Window destroyed");
        }
        self.video_subsystem = None;
        // last Sdl handle gone: SDL_Quit
        self.sdl_context = None;
        info!("SDL shut down");
    }
}

impl Drop for SdlAdapter {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Convert sdl input events to Longtime events. Keys are matched by keycode
/// (layout aware), the scancode is only carried along.
pub fn input_events_from_sdl(e: &SEvent) -> Option<Event> {
    match e {
        SEvent::Quit { .. } => Some(Event::Quit),
        SEvent::KeyDown {
            keycode,
            scancode,
            repeat,
            ..
        } => {
            let kind = if *repeat {
                KeyEventKind::Repeat
            } else {
                KeyEventKind::Press
            };
            Some(Event::Key(key_event(*keycode, *scancode, kind)))
        }
        SEvent::KeyUp {
            keycode, scancode, ..
        } => Some(Event::Key(key_event(*keycode, *scancode, KeyEventKind::Release))),
        _ => None,
    }
}

fn key_event(
    keycode: Option<SKeycode>,
    scancode: Option<sdl2::keyboard::Scancode>,
    kind: KeyEventKind,
) -> KeyEvent {
    let code = match keycode {
        Some(SKeycode::Escape) => KeyCode::Esc,
        _ => KeyCode::Other,
    };
    let ke = KeyEvent::new(code, kind);
    match scancode {
        Some(sc) => ke.with_scancode(sc as i32),
        None => ke,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::{Mod, Scancode};

    fn key_down(keycode: Option<SKeycode>, scancode: Option<Scancode>) -> SEvent {
        SEvent::KeyDown {
            timestamp: 0,
            window_id: 1,
            keycode,
            scancode,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    #[test]
    fn test_cleanup_before_init_and_twice() {
        let mut adapter = SdlAdapter::new();
        assert!(adapter.is_released());
        adapter.cleanup();
        adapter.cleanup();
        assert!(adapter.is_released());
    }

    #[test]
    fn test_escape_matched_by_keycode() {
        // escape symbol from a remapped physical key
        let ev = input_events_from_sdl(&key_down(Some(SKeycode::Escape), Some(Scancode::CapsLock)));
        assert!(ev.map(|e| e.is_exit()).unwrap_or(false));

        // escape's physical key producing another symbol
        let ev = input_events_from_sdl(&key_down(Some(SKeycode::Backquote), Some(Scancode::Escape)));
        assert!(!ev.map(|e| e.is_exit()).unwrap_or(true));
    }

    #[test]
    fn test_only_escape_has_its_own_code() {
        for keycode in [SKeycode::Return, SKeycode::Space, SKeycode::Q] {
            let ev = input_events_from_sdl(&key_down(Some(keycode), None));
            match ev {
                Some(Event::Key(ke)) => assert_eq!(ke.code, KeyCode::Other),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn test_quit_converted() {
        let ev = input_events_from_sdl(&SEvent::Quit { timestamp: 0 });
        assert_eq!(ev, Some(Event::Quit));
    }
}
