//! Full-frame escape-time rendering.

use std::time::Instant;

use itertools::iproduct;
use rayon::prelude::*;
use sdl2::pixels::Color;
use tracing::{debug, info_span};

use crate::error::{Error, Result};
use crate::escape::escape_time;
use crate::palette::{ColorPolicy, Rgb};
use crate::profile::Profile;
use crate::surface::Surface;
use crate::viewport::{Raster, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub struct FrameRenderer {
    viewport: Viewport,
    raster: Raster,
    policy: ColorPolicy,
}

impl FrameRenderer {
    /// Re-checks the profile's raster and viewport, since both have public fields.
    pub fn new(profile: &Profile) -> Result<FrameRenderer> {
        let Raster { width, height } = profile.raster;
        let v = profile.viewport;
        Ok(FrameRenderer {
            viewport: Viewport::new(v.real_min, v.real_max, v.imag_min, v.imag_max)?,
            raster: Raster::new(width, height)?,
            policy: profile.policy,
        })
    }

    pub fn raster(&self) -> Raster {
        self.raster
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn pixel(&self, x: u32, y: u32, budget: u32) -> Rgb {
        let c = self.viewport.to_complex(x, y, self.raster);
        self.policy.color(escape_time(c, budget), budget)
    }

    /// Row-major colors, rows evaluated in parallel.
    pub fn compute(&self, budget: u32) -> Vec<Rgb> {
        let width = self.raster.width;
        let mut frame = vec![Rgb::BLACK; self.raster.pixel_count()];
        frame
            .par_chunks_exact_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, out) in row.iter_mut().enumerate() {
                    *out = self.pixel(x as u32, y as u32, budget);
                }
            });
        frame
    }

    /// Same as [`compute`](Self::compute), one pixel at a time.
    pub fn compute_sequential(&self, budget: u32) -> Vec<Rgb> {
        iproduct!(0..self.raster.height, 0..self.raster.width)
            .map(|(y, x)| self.pixel(x, y, budget))
            .collect()
    }

    /// Clear, write every pixel row-major, then present once.
    ///
    /// Nothing reaches the surface if `budget` is zero. A failed point
    /// draw aborts the frame before `present`.
    pub fn render_frame<S: Surface>(&self, surface: &mut S, budget: u32) -> Result<()> {
        if budget == 0 {
            return Err(Error::ZeroBudget);
        }
        let span = info_span!(
            "render_frame",
            budget,
            width = self.raster.width,
            height = self.raster.height
        );
        let _enter = span.enter();
        let start = Instant::now();

        let frame = self.compute(budget);

        surface.set_draw_color(Color::RGBA(0, 0, 0, 255));
        surface.clear();
        let pixels = iproduct!(0..self.raster.height, 0..self.raster.width);
        for ((y, x), rgb) in pixels.zip(frame) {
            surface.set_draw_color(rgb.into());
            surface
                .draw_point(x as i32, y as i32)
                .map_err(|reason| Error::Draw { x, y, reason })?;
        }
        surface.present();

        debug!(elapsed_ms = start.elapsed().as_millis() as u64, "frame presented");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{BANDED, GRAYSCALE};
    use crate::surface::PixelBuffer;

    fn small(profile: &Profile) -> FrameRenderer {
        FrameRenderer::new(&profile.clone().with_raster(40, 30).unwrap()).unwrap()
    }

    #[test]
    fn parallel_matches_sequential() {
        for profile in [&BANDED, &GRAYSCALE] {
            let r = small(profile);
            assert_eq!(r.compute(200), r.compute_sequential(200));
        }
    }

    #[test]
    fn frame_has_one_color_per_pixel() {
        let r = small(&BANDED);
        assert_eq!(r.compute(50).len(), 40 * 30);
    }

    #[test]
    fn zero_budget_touches_nothing() {
        let r = small(&BANDED);
        let mut buf = PixelBuffer::new(40, 30);
        assert_eq!(r.render_frame(&mut buf, 0), Err(Error::ZeroBudget));
        assert_eq!(buf.presents(), 0);
    }

    #[test]
    fn undersized_surface_reports_draw_failure() {
        let r = small(&BANDED);
        let mut buf = PixelBuffer::new(10, 10);
        match r.render_frame(&mut buf, 10) {
            Err(Error::Draw { x: 10, y: 0, .. }) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(buf.presents(), 0);
    }

    #[test]
    fn zero_width_profile_is_rejected() {
        let mut profile = BANDED.clone();
        profile.raster = Raster { width: 0, height: 4 };
        assert_eq!(
            FrameRenderer::new(&profile),
            Err(Error::EmptyRaster { width: 0, height: 4 })
        );
    }

    #[test]
    fn inverted_viewport_profile_is_rejected() {
        let mut profile = BANDED.clone();
        profile.viewport.real_min = 2.0;
        match FrameRenderer::new(&profile) {
            Err(Error::InvalidViewport { .. }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn corner_pixel_escapes_immediately() {
        let r = small(&GRAYSCALE);
        assert_eq!(r.compute(1000)[0], Rgb::BLACK);
    }
}
