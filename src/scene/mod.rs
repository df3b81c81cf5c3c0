//! Shape documents, their structural diff, and the transitions planned from it.

pub(crate) mod clock;
pub(crate) mod diff;
pub(crate) mod fragments;
pub(crate) mod model;
pub(crate) mod path_tween;
pub(crate) mod transition;
