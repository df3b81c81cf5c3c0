//! Morphing strategies: turn two path-data strings into a progress-driven interpolator.

pub(crate) mod cache;
pub(crate) mod config;
pub(crate) mod curve;
pub(crate) mod flatten;
pub(crate) mod interpolator;
pub(crate) mod polygon;
pub(crate) mod resample;
pub(crate) mod ring;
