//! Iteration count to color.

use crate::error::Error;
use crate::escape::is_inside;
use sdl2::pixels::Color;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
}

/// How an escape count becomes a color.
///
/// The two policies disagree on points inside the set: `Banded` paints
/// them black, `Grayscale` paints them white.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorPolicy {
    /// Black inside; outside, each channel cycles mod 256 at its own rate (9, 15, 12).
    Banded,
    /// `result * 255 / budget` on all three channels.
    Grayscale,
}

impl ColorPolicy {
    pub fn color(self, result: u32, budget: u32) -> Rgb {
        match self {
            ColorPolicy::Banded => {
                if is_inside(result, budget) {
                    return Rgb::BLACK;
                }
                let n = result as u64;
                Rgb(
                    (n * 9 % 256) as u8,
                    (n * 15 % 256) as u8,
                    (n * 12 % 256) as u8,
                )
            }
            ColorPolicy::Grayscale => {
                let v = (result as u64 * 255 / budget.max(1) as u64).min(255) as u8;
                Rgb(v, v, v)
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorPolicy::Banded => "banded",
            ColorPolicy::Grayscale => "grayscale",
        }
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Color {
        Color::RGBA(c.0, c.1, c.2, 255)
    }
}

impl fmt::Display for ColorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "banded" => Ok(ColorPolicy::Banded),
            "grayscale" | "greyscale" => Ok(ColorPolicy::Grayscale),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
