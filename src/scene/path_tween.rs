use std::sync::Arc;

use crate::morph::interpolator::{Interpolator, Morpher};

/// Animates the data of a single path node towards a new value.
///
/// The tween keeps one interpolator for the current `(from, to)` pair, so sampling a long
/// animation never rebuilds it, and retargeting to the same pair is free.
#[derive(Debug)]
pub struct PathTween {
    data: String,
    target: Option<String>,
    morpher: Option<Arc<dyn Morpher>>,
    cached: Option<(String, String, Interpolator)>,
}

impl PathTween {
    pub fn new(data: impl Into<String>, morpher: Arc<dyn Morpher>) -> Self {
        Self {
            data: data.into(),
            target: None,
            morpher: Some(morpher),
            cached: None,
        }
    }

    /// Committed path data.
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Start (or restart) a tween from the committed data to `to`.
    pub fn retarget(&mut self, to: impl Into<String>) -> Interpolator {
        let to = to.into();
        let interpolator = self.interpolator(&to);
        self.target = Some(to);
        interpolator
    }

    fn interpolator(&mut self, to: &str) -> Interpolator {
        if let Some((from, cached_to, it)) = &self.cached
            && *from == self.data
            && cached_to == to
        {
            return it.clone();
        }
        let it = match &self.morpher {
            Some(morpher) => morpher.create_interpolator(&self.data, to),
            None => Interpolator::snap(&self.data, to),
        };
        self.cached = Some((self.data.clone(), to.to_owned(), it.clone()));
        it
    }

    /// Path data at `progress` of the active tween; the committed data when idle.
    pub fn sample(&self, progress: f64) -> String {
        match (&self.target, &self.cached) {
            (Some(_), Some((_, _, it))) => it.sample(progress),
            _ => self.data.clone(),
        }
    }

    /// Commit the target data and drop the cached interpolator.
    pub fn finish(&mut self) {
        if let Some(target) = self.target.take() {
            self.data = target;
        }
        self.cached = None;
    }

    /// Release the cached interpolator and the morpher; later tweens snap.
    pub fn dispose(&mut self) {
        self.cached = None;
        if let Some(morpher) = self.morpher.take() {
            morpher.dispose();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/path_tween.rs"]
mod tests;
