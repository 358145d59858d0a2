//! The drawable the renderer writes into.
//!
//! SDL2 canvases implement [`Surface`] directly. [`PixelBuffer`] is an
//! in-memory stand-in with a separate front buffer, so only presented
//! frames are ever observable.

use sdl2::pixels::Color;
use sdl2::rect::Point;
use sdl2::render::{Canvas, RenderTarget};

pub trait Surface {
    fn set_draw_color(&mut self, color: Color);
    /// Fill the whole back buffer with the current draw color.
    fn clear(&mut self);
    fn draw_point(&mut self, x: i32, y: i32) -> Result<(), String>;
    fn present(&mut self);
}

impl<T: RenderTarget> Surface for Canvas<T> {
    fn set_draw_color(&mut self, color: Color) {
        Canvas::set_draw_color(self, color);
    }

    fn clear(&mut self) {
        Canvas::clear(self);
    }

    fn draw_point(&mut self, x: i32, y: i32) -> Result<(), String> {
        Canvas::draw_point(self, Point::new(x, y))
    }

    fn present(&mut self) {
        Canvas::present(self);
    }
}

/// Headless RGBA surface.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    color: Color,
    back: Vec<Color>,
    front: Vec<Color>,
    presents: usize,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> PixelBuffer {
        let len = width as usize * height as usize;
        PixelBuffer {
            width,
            height,
            color: Color::RGBA(0, 0, 0, 255),
            back: vec![Color::RGBA(0, 0, 0, 0); len],
            front: vec![Color::RGBA(0, 0, 0, 0); len],
            presents: 0,
        }
    }

    /// Pixel of the last presented frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.front.get(self.index(x, y)).copied()
    }

    pub fn frame(&self) -> &[Color] {
        &self.front
    }

    pub fn presents(&self) -> usize {
        self.presents
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl Surface for PixelBuffer {
    fn set_draw_color(&mut self, color: Color) {
        self.color = color;
    }

    fn clear(&mut self) {
        let color = self.color;
        self.back.iter_mut().for_each(|p| *p = color);
    }

    fn draw_point(&mut self, x: i32, y: i32) -> Result<(), String> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return Err(format!(
                "point ({},{}) outside {}x{} buffer",
                x, y, self.width, self.height
            ));
        }
        let i = self.index(x as u32, y as u32);
        self.back[i] = self.color;
        Ok(())
    }

    fn present(&mut self) {
        self.front.copy_from_slice(&self.back);
        self.presents += 1;
    }
}
