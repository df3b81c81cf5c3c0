//! Pathmorph animates vector shapes between two states.
//!
//! Two layers are provided:
//!
//! - Path morphing: parse SVG path data into cubic subpaths, align two paths to a common
//!   topology, and sample a [`Morpher`] strategy at any progress value
//! - Document transitions: diff two [`ShapeDocument`] trees by node id and plan a
//!   [`Transition`] that moves, morphs, fades and resizes everything between them
#![forbid(unsafe_code)]

mod align;
mod animation;
mod foundation;
mod morph;
mod path;
mod scene;

pub use crate::foundation::core::{BezPath, CubicBez, Fps, FrameIndex, Point, Rgba8, Size, Vec2};
pub use crate::foundation::error::{MorphError, MorphResult};
pub use crate::foundation::math::clamp_remap;

pub use crate::animation::ease::Ease;
pub use crate::animation::lerp::Lerp;

pub use crate::path::arc::arc_to_cubics;
pub use crate::path::model::{PathDocument, Subpath};
pub use crate::path::parser::parse;
pub use crate::path::serialize::{write_cubic_path, write_polyline};
pub use crate::path::tokenizer::{PathCommand, PathTokenizer};

pub use crate::align::aligner::{AlignOpts, align};
pub use crate::align::subdivide::{split_at, subdivide_segment};

pub use crate::morph::cache::CachedMorpher;
pub use crate::morph::config::MorpherConfig;
pub use crate::morph::curve::{CurveMorpher, CurveMorpherOpts};
pub use crate::morph::flatten::{FlattenMorpher, FlattenMorpherOpts};
pub use crate::morph::interpolator::{Interpolator, Morpher};
pub use crate::morph::polygon::{PolygonMorpher, PolygonMorpherOpts};
pub use crate::morph::resample::ResampleMorpher;

pub use crate::scene::clock::TransitionClock;
pub use crate::scene::diff::{MatchedNode, NodeDiff, NodeSlot, diff_nodes};
pub use crate::scene::fragments::{FragmentPlan, FragmentWarning, plan_fragment_mapping};
pub use crate::scene::model::{ShapeAttrs, ShapeDocument, ShapeKind, ShapeNode};
pub use crate::scene::path_tween::PathTween;
pub use crate::scene::transition::{
    FrameNode, NodeRole, PhaseWindows, SceneFrame, Transition, TransitionOpts, wrapper_scale,
};
