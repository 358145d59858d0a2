//! Startup configurations.
//!
//! Window size, viewport, budget and color policy used to be process-wide
//! constants. A [`Profile`] bundles them so more than one raster/viewport
//! pairing can coexist.

use crate::error::{Error, Result};
use crate::palette::ColorPolicy;
use crate::viewport::{Raster, Viewport};

pub const DEFAULT_BUDGET: u32 = 1000;

#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub raster: Raster,
    pub viewport: Viewport,
    pub budget: u32,
    pub policy: ColorPolicy,
}

pub static BANDED: Profile = Profile {
    name: "banded",
    title: "Mandelbrot Set - C++",
    raster: Raster {
        width: 800,
        height: 600,
    },
    viewport: Viewport::CLASSIC,
    budget: DEFAULT_BUDGET,
    policy: ColorPolicy::Banded,
};

pub static GRAYSCALE: Profile = Profile {
    name: "grayscale",
    title: "Mandelbrot Set",
    raster: Raster {
        width: 800,
        height: 600,
    },
    viewport: Viewport::CLASSIC,
    budget: DEFAULT_BUDGET,
    policy: ColorPolicy::Grayscale,
};

pub static PROFILES: &[&Profile] = &[&BANDED, &GRAYSCALE];

impl Profile {
    pub fn by_name(name: &str) -> Result<Profile> {
        PROFILES
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|p| (*p).clone())
            .ok_or_else(|| {
                let known: Vec<&str> = PROFILES.iter().map(|p| p.name).collect();
                Error::UnknownProfile(name.to_string(), known.join(", "))
            })
    }

    pub fn with_raster(mut self, width: u32, height: u32) -> Result<Profile> {
        self.raster = Raster::new(width, height)?;
        Ok(self)
    }

    pub fn with_budget(mut self, budget: u32) -> Result<Profile> {
        if budget == 0 {
            return Err(Error::ZeroBudget);
        }
        self.budget = budget;
        Ok(self)
    }

    pub fn with_policy(mut self, policy: ColorPolicy) -> Profile {
        self.policy = policy;
        self
    }
}

impl Default for Profile {
    fn default() -> Profile {
        BANDED.clone()
    }
}
