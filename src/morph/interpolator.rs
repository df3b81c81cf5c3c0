use std::{fmt, sync::Arc};

/// A sampled morph between two path-data strings.
///
/// Cloning is cheap; clones share the same underlying closure. Progress `<= 0` (or NaN)
/// always yields the original `from` string and progress `>= 1` the original `to` string,
/// whatever the strategy does in between.
#[derive(Clone)]
pub struct Interpolator {
    from: Arc<str>,
    to: Arc<str>,
    body: Arc<dyn Fn(f64) -> String + Send + Sync>,
}

impl Interpolator {
    /// Wrap `body`, which is only consulted for progress strictly inside `(0, 1)`.
    pub fn new(
        from: &str,
        to: &str,
        body: impl Fn(f64) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            from: Arc::from(from),
            to: Arc::from(to),
            body: Arc::new(body),
        }
    }

    /// Jump from `from` to `to` at half progress.
    pub fn snap(from: &str, to: &str) -> Self {
        let from_owned: Arc<str> = Arc::from(from);
        let to_owned: Arc<str> = Arc::from(to);
        let (a, b) = (from_owned.clone(), to_owned.clone());
        Self {
            from: from_owned,
            to: to_owned,
            body: Arc::new(move |p| if p < 0.5 { a.to_string() } else { b.to_string() }),
        }
    }

    /// Path data at `progress`.
    pub fn sample(&self, progress: f64) -> String {
        if progress.is_nan() || progress <= 0.0 {
            return self.from.to_string();
        }
        if progress >= 1.0 {
            return self.to.to_string();
        }
        (self.body)(progress)
    }

    pub fn from_path(&self) -> &str {
        &self.from
    }

    pub fn to_path(&self) -> &str {
        &self.to
    }
}

impl fmt::Debug for Interpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpolator")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}

/// A path morphing strategy.
///
/// Implementations never fail: input that cannot be morphed yields an interpolator that
/// returns the nearest endpoint.
pub trait Morpher: Send + Sync + fmt::Debug {
    /// Build the interpolator from `from` to `to`.
    fn create_interpolator(&self, from: &str, to: &str) -> Interpolator;

    /// Release cached state. Interpolators already handed out keep working.
    fn dispose(&self) {}

    /// Short strategy name used in logs.
    fn name(&self) -> &'static str;
}

impl<M: Morpher + ?Sized> Morpher for Arc<M> {
    fn create_interpolator(&self, from: &str, to: &str) -> Interpolator {
        (**self).create_interpolator(from, to)
    }

    fn dispose(&self) {
        (**self).dispose()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/interpolator.rs"]
mod tests;
