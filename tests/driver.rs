use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use mandelbrot::driver::{run, EventSource, Input, Key};
use mandelbrot::profile::BANDED;
use mandelbrot::{FrameRenderer, PixelBuffer, Surface};
use sdl2::pixels::Color;

/// Counts presents in a cell shared with the event source.
struct Recording {
    inner: PixelBuffer,
    presents: Rc<Cell<usize>>,
}

impl Surface for Recording {
    fn set_draw_color(&mut self, color: Color) {
        self.inner.set_draw_color(color)
    }

    fn clear(&mut self) {
        self.inner.clear()
    }

    fn draw_point(&mut self, x: i32, y: i32) -> Result<(), String> {
        self.inner.draw_point(x, y)
    }

    fn present(&mut self) {
        self.inner.present();
        self.presents.set(self.presents.get() + 1);
    }
}

/// Hands out one batch per poll and notes how many frames were visible at each poll.
/// Runs dry into a quit so a broken loop cannot spin forever.
struct Script {
    batches: VecDeque<Vec<Input>>,
    presents: Rc<Cell<usize>>,
    seen: Vec<usize>,
}

impl EventSource for Script {
    fn poll(&mut self) -> Vec<Input> {
        self.seen.push(self.presents.get());
        self.batches.pop_front().unwrap_or_else(|| vec![Input::Quit])
    }
}

fn setup(batches: Vec<Vec<Input>>) -> (FrameRenderer, Recording, Script) {
    let profile = BANDED.clone().with_raster(32, 24).unwrap();
    let presents = Rc::new(Cell::new(0));
    let surface = Recording {
        inner: PixelBuffer::new(32, 24),
        presents: presents.clone(),
    };
    let script = Script {
        batches: batches.into(),
        presents,
        seen: Vec::new(),
    };
    (FrameRenderer::new(&profile).unwrap(), surface, script)
}

#[test]
fn renders_once_then_quits() {
    let (renderer, mut surface, mut script) = setup(vec![vec![Input::Quit]]);
    let frames = run(&renderer, &mut surface, &mut script, 100, Duration::ZERO).unwrap();
    assert_eq!(frames, 1);
    assert_eq!(script.seen, vec![1]);
}

#[test]
fn escape_key_stops() {
    let (renderer, mut surface, mut script) =
        setup(vec![vec![], vec![Input::KeyDown(Key::Escape)]]);
    let frames = run(&renderer, &mut surface, &mut script, 100, Duration::ZERO).unwrap();
    assert_eq!(frames, 1);
    assert_eq!(script.seen, vec![1, 1]);
}

#[test]
fn rerender_is_presented_before_next_poll() {
    let (renderer, mut surface, mut script) = setup(vec![
        vec![],
        vec![Input::KeyDown(Key::R)],
        vec![Input::KeyDown(Key::Other), Input::KeyDown(Key::R)],
        vec![Input::Quit],
    ]);
    let frames = run(&renderer, &mut surface, &mut script, 100, Duration::ZERO).unwrap();
    assert_eq!(frames, 3);
    assert_eq!(script.seen, vec![1, 1, 2, 3]);
    assert_eq!(surface.inner.presents(), 3);
}

#[test]
fn inputs_after_stop_are_dropped() {
    let (renderer, mut surface, mut script) = setup(vec![vec![
        Input::KeyDown(Key::R),
        Input::KeyDown(Key::Escape),
        Input::KeyDown(Key::R),
    ]]);
    let frames = run(&renderer, &mut surface, &mut script, 100, Duration::ZERO).unwrap();
    assert_eq!(frames, 2);
    assert_eq!(surface.presents.get(), 2);
}

#[test]
fn zero_budget_fails_before_loop() {
    let (renderer, mut surface, mut script) = setup(vec![]);
    assert!(run(&renderer, &mut surface, &mut script, 0, Duration::ZERO).is_err());
    assert!(script.seen.is_empty());
}
