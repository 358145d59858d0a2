//! Event loop: render once, then re-render on request until told to stop.

use std::thread;
use std::time::Duration;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;
use tracing::{debug, info};

use crate::error::Result;
use crate::renderer::FrameRenderer;
use crate::surface::Surface;

/// Pause between event polls.
pub const DEFAULT_TICK: Duration = Duration::from_millis(16);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    R,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    KeyDown(Key),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Render,
    Nothing,
}

impl LoopState {
    pub fn next(self, input: &Input) -> (LoopState, Action) {
        match (self, input) {
            (LoopState::Stopped, _) => (LoopState::Stopped, Action::Nothing),
            (LoopState::Running, Input::Quit)
            | (LoopState::Running, Input::KeyDown(Key::Escape)) => {
                (LoopState::Stopped, Action::Nothing)
            }
            (LoopState::Running, Input::KeyDown(Key::R)) => (LoopState::Running, Action::Render),
            (LoopState::Running, Input::KeyDown(Key::Other)) => {
                (LoopState::Running, Action::Nothing)
            }
        }
    }
}

/// Source of pending inputs. `poll` never blocks; an empty batch is normal.
pub trait EventSource {
    fn poll(&mut self) -> Vec<Input>;
}

impl From<Keycode> for Key {
    fn from(k: Keycode) -> Key {
        match k {
            Keycode::Escape => Key::Escape,
            Keycode::R => Key::R,
            _ => Key::Other,
        }
    }
}

/// Inputs the loop cares about; everything else is dropped.
pub fn input_from_event(event: &Event) -> Option<Input> {
    match event {
        Event::Quit { .. } => Some(Input::Quit),
        Event::KeyDown {
            keycode: Some(k), ..
        } => Some(Input::KeyDown(Key::from(*k))),
        _ => None,
    }
}

impl EventSource for EventPump {
    fn poll(&mut self) -> Vec<Input> {
        self.poll_iter()
            .filter_map(|e| input_from_event(&e))
            .collect()
    }
}

/// Runs until a quit or escape arrives. Returns the number of frames rendered.
///
/// A re-render happens synchronously inside the poll cycle that saw the
/// request, so the new frame is presented before the next poll.
pub fn run<S, E>(
    renderer: &FrameRenderer,
    surface: &mut S,
    events: &mut E,
    budget: u32,
    tick: Duration,
) -> Result<usize>
where
    S: Surface,
    E: EventSource,
{
    renderer.render_frame(surface, budget)?;
    let mut frames = 1;
    info!("Mandelbrot set rendered. Press R to re-render, ESC or close window to exit.");

    let mut state = LoopState::Running;
    'mainloop: loop {
        for input in events.poll() {
            let (next, action) = state.next(&input);
            state = next;
            if action == Action::Render {
                info!("re-rendering");
                renderer.render_frame(surface, budget)?;
                frames += 1;
            }
            if state == LoopState::Stopped {
                debug!(?input, "stopping");
                break 'mainloop;
            }
        }
        thread::sleep(tick);
    }

    Ok(frames)
}
