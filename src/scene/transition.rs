//! Two-phase document transitions: [`Transition::plan`] builds an immutable plan from a
//! [`NodeDiff`], and [`Transition::sample`] evaluates every node for one progress value.

use std::{collections::HashMap, sync::Arc};

use crate::{
    animation::ease::Ease,
    animation::lerp::{Lerp, lerp_option},
    foundation::core::{Fps, Size, Vec2},
    foundation::error::{MorphError, MorphResult},
    foundation::math::clamp_remap,
    morph::interpolator::{Interpolator, Morpher},
    scene::clock::TransitionClock,
    scene::diff::{MatchedNode, NodeDiff, diff_nodes},
    scene::model::{ShapeAttrs, ShapeDocument, ShapeKind, ShapeNode},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Phase boundaries as fractions of the transition duration.
pub struct PhaseWindows {
    /// Matched nodes start interpolating here; deleted nodes are mostly gone by then.
    pub beginning: f64,
    /// Matched nodes finish interpolating here; inserted nodes start appearing before.
    pub ending: f64,
    /// How far fades reach into the matched window.
    pub overlap: f64,
}

impl Default for PhaseWindows {
    fn default() -> Self {
        Self {
            beginning: 0.2,
            ending: 0.8,
            overlap: 0.15,
        }
    }
}

impl PhaseWindows {
    pub fn validate(&self) -> MorphResult<()> {
        for (name, value) in [
            ("beginning", self.beginning),
            ("ending", self.ending),
            ("overlap", self.overlap),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(MorphError::validation(format!(
                    "phase {name} must be finite and in [0, 1]"
                )));
            }
        }
        if self.beginning > self.ending {
            return Err(MorphError::validation(
                "phase beginning must not exceed ending",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Options for [`Transition::plan`].
pub struct TransitionOpts {
    /// Total duration in seconds.
    pub duration_secs: f64,
    /// Timing curve applied to progress.
    pub ease: Ease,
    /// Phase boundaries.
    pub phases: PhaseWindows,
    /// Container width pinned by the host; animates with the document when `None`.
    pub fixed_width: Option<f64>,
    /// Container height pinned by the host; animates with the document when `None`.
    pub fixed_height: Option<f64>,
}

impl Default for TransitionOpts {
    fn default() -> Self {
        Self {
            duration_secs: 0.6,
            ease: Ease::default(),
            phases: PhaseWindows::default(),
            fixed_width: None,
            fixed_height: None,
        }
    }
}

impl TransitionOpts {
    pub fn validate(&self) -> MorphResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(MorphError::validation(
                "duration_secs must be finite and >= 0",
            ));
        }
        for (name, value) in [
            ("fixed_width", self.fixed_width),
            ("fixed_height", self.fixed_height),
        ] {
            if let Some(v) = value
                && (!v.is_finite() || v <= 0.0)
            {
                return Err(MorphError::validation(format!(
                    "{name} must be finite and > 0 when set"
                )));
            }
        }
        self.phases.validate()
    }
}

/// Scale that fits a document of `doc_size` into a container.
///
/// With both dimensions pinned the axes scale independently; with one pinned the other
/// follows uniformly; with none the document keeps its intrinsic size.
pub fn wrapper_scale(
    doc_size: Size,
    fixed_width: Option<f64>,
    fixed_height: Option<f64>,
) -> Vec2 {
    let ratio = |fixed: f64, intrinsic: f64| {
        if intrinsic > 0.0 {
            fixed / intrinsic
        } else {
            1.0
        }
    };
    match (fixed_width, fixed_height) {
        (Some(w), Some(h)) => Vec2::new(ratio(w, doc_size.width), ratio(h, doc_size.height)),
        (Some(w), None) => {
            let s = ratio(w, doc_size.width);
            Vec2::new(s, s)
        }
        (None, Some(h)) => {
            let s = ratio(h, doc_size.height);
            Vec2::new(s, s)
        }
        (None, None) => Vec2::new(1.0, 1.0),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// What a node in a sampled frame is doing.
pub enum NodeRole {
    /// Committed target node, or a descendant of a fading node.
    Settled,
    /// Interpolating between a source and a target node.
    Matched,
    /// Target-only node fading in.
    Inserted,
    /// Source-only node fading out.
    Deleted,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One node of a sampled frame.
pub struct FrameNode {
    pub id: String,
    pub kind: ShapeKind,
    pub role: NodeRole,
    /// Attribute values at this instant; `opacity` already includes any fade.
    pub attrs: ShapeAttrs,
    pub children: Vec<FrameNode>,
}

impl FrameNode {
    fn settled(node: &ShapeNode, role: NodeRole) -> Self {
        Self {
            id: node.id.clone(),
            kind: node.kind,
            role,
            attrs: node.attrs.clone(),
            children: node
                .children
                .iter()
                .map(|c| Self::settled(c, NodeRole::Settled))
                .collect(),
        }
    }

    /// Freeze this node into a plain shape node.
    pub fn into_shape(self) -> ShapeNode {
        ShapeNode {
            id: self.id,
            kind: self.kind,
            attrs: self.attrs,
            children: self.children.into_iter().map(Self::into_shape).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything a host needs to draw one instant of a transition.
pub struct SceneFrame {
    /// Progress this frame was sampled at, clamped to `[0, 1]`.
    pub progress: f64,
    /// Interpolated intrinsic document size.
    pub doc_size: Size,
    /// Container size after applying pinned dimensions and the wrapper scale.
    pub size: Size,
    /// Wrapper scale fitting the document into the container.
    pub scale: Vec2,
    /// Top-level nodes in paint order.
    pub nodes: Vec<FrameNode>,
}

impl SceneFrame {
    /// First top-level node with `id`.
    pub fn find(&self, id: &str) -> Option<&FrameNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Freeze the frame into a document, dropping nodes that have faded out completely.
    pub fn into_document(self) -> ShapeDocument {
        let nodes = self
            .nodes
            .into_iter()
            .filter(|n| n.role != NodeRole::Deleted || n.attrs.opacity > 0.0)
            .map(FrameNode::into_shape)
            .collect();
        ShapeDocument::new(self.doc_size, nodes)
    }
}

#[derive(Debug)]
struct MatchedTrack {
    from: ShapeNode,
    to: ShapeNode,
    path: Option<Interpolator>,
    children: Vec<NodeTrack>,
}

#[derive(Debug)]
enum NodeTrack {
    Matched(Box<MatchedTrack>),
    Inserted(ShapeNode),
    Deleted(ShapeNode),
}

/// Per-frame factors shared by every track.
#[derive(Clone, Copy)]
struct Factors {
    matched: f64,
    fade_out: f64,
    fade_in: f64,
}

/// A planned transition between two shape documents.
#[derive(Debug)]
pub struct Transition {
    from: ShapeDocument,
    to: ShapeDocument,
    morpher: Arc<dyn Morpher>,
    opts: TransitionOpts,
    diff: NodeDiff,
    tracks: Vec<NodeTrack>,
    instant: bool,
}

impl Transition {
    /// Diff `from` against `to` and prepare one track per top-level node.
    ///
    /// Path interpolators for matched path pairs are created here, once. When either
    /// document has no nodes the transition is instant and every sample is the target.
    #[tracing::instrument(skip_all, fields(strategy = morpher.name()))]
    pub fn plan(
        from: ShapeDocument,
        to: ShapeDocument,
        morpher: Arc<dyn Morpher>,
        opts: TransitionOpts,
    ) -> MorphResult<Self> {
        opts.validate()?;

        if from.is_empty() || to.is_empty() {
            tracing::debug!("empty side, transition is instant");
            return Ok(Self {
                from,
                to,
                morpher,
                opts,
                diff: NodeDiff::default(),
                tracks: Vec::new(),
                instant: true,
            });
        }

        let diff = diff_nodes(&from.nodes, &to.nodes);
        let (matched, inserted, deleted) = diff.totals();
        tracing::debug!(matched, inserted, deleted, "planned transition");
        let tracks = build_tracks(&from.nodes, &to.nodes, &diff, morpher.as_ref());

        Ok(Self {
            from,
            to,
            morpher,
            opts,
            diff,
            tracks,
            instant: false,
        })
    }

    pub fn source(&self) -> &ShapeDocument {
        &self.from
    }

    pub fn target(&self) -> &ShapeDocument {
        &self.to
    }

    pub fn diff(&self) -> &NodeDiff {
        &self.diff
    }

    pub fn opts(&self) -> &TransitionOpts {
        &self.opts
    }

    pub fn is_instant(&self) -> bool {
        self.instant
    }

    /// Evaluate the transition at linear progress `t` (clamped to `[0, 1]`).
    ///
    /// At `t >= 1` the frame is exactly the target document and no interpolator runs.
    pub fn sample(&self, t: f64) -> SceneFrame {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if self.instant || t >= 1.0 {
            return self.committed();
        }

        let PhaseWindows {
            beginning,
            ending,
            overlap,
        } = self.opts.phases;
        let ease = self.opts.ease;
        let eased = ease.apply(t);
        let factors = Factors {
            matched: ease.apply(clamp_remap(beginning, ending, 0.0, 1.0, t)),
            fade_out: clamp_remap(0.0, beginning + overlap, 1.0, 0.0, eased),
            fade_in: clamp_remap(ending - overlap, 1.0, 0.0, 1.0, eased),
        };

        let resize = clamp_remap(beginning, ending, 0.0, 1.0, eased);
        let doc_size = Size::new(
            Ease::InOutSine.tween(resize, self.from.size.width, self.to.size.width),
            Ease::InOutSine.tween(resize, self.from.size.height, self.to.size.height),
        );
        let scale = self
            .scale_for(self.from.size)
            .lerp(self.scale_for(self.to.size), eased);

        SceneFrame {
            progress: t,
            doc_size,
            size: self.container(doc_size, scale),
            scale,
            nodes: sample_tracks(&self.tracks, factors),
        }
    }

    /// Evaluate at `secs` seconds into the transition.
    pub fn sample_secs(&self, secs: f64) -> SceneFrame {
        if self.opts.duration_secs <= 0.0 {
            return self.committed();
        }
        self.sample(secs / self.opts.duration_secs)
    }

    /// Every frame of the transition at `fps`, first at progress 0 and last committed.
    pub fn frames(&self, fps: Fps) -> MorphResult<impl Iterator<Item = SceneFrame> + '_> {
        let clock = TransitionClock::new(self.opts.duration_secs, fps)?;
        Ok(clock.progress_values().map(move |(_, t)| self.sample(t)))
    }

    /// Interrupt this transition at `t` and plan from that frame towards `new_target`.
    ///
    /// Interpolators of the interrupted plan are released; the morpher and options carry
    /// over.
    pub fn supersede(self, t: f64, new_target: ShapeDocument) -> MorphResult<Self> {
        let source = self.sample(t).into_document();
        let Self { morpher, opts, .. } = self;
        Self::plan(source, new_target, morpher, opts)
    }

    fn scale_for(&self, doc_size: Size) -> Vec2 {
        wrapper_scale(doc_size, self.opts.fixed_width, self.opts.fixed_height)
    }

    fn container(&self, doc_size: Size, scale: Vec2) -> Size {
        Size::new(
            self.opts.fixed_width.unwrap_or(doc_size.width * scale.x),
            self.opts.fixed_height.unwrap_or(doc_size.height * scale.y),
        )
    }

    fn committed(&self) -> SceneFrame {
        let scale = self.scale_for(self.to.size);
        SceneFrame {
            progress: 1.0,
            doc_size: self.to.size,
            size: self.container(self.to.size, scale),
            scale,
            nodes: self
                .to
                .nodes
                .iter()
                .map(|n| FrameNode::settled(n, NodeRole::Settled))
                .collect(),
        }
    }
}

/// Interleave tracks so that target order is kept and deleted nodes stay near the source
/// neighbours they were painted with.
///
/// Deleted nodes past the last matched source node go right after that node's track, ahead
/// of any inserted nodes that follow it.
fn build_tracks(
    from: &[ShapeNode],
    to: &[ShapeNode],
    diff: &NodeDiff,
    morpher: &dyn Morpher,
) -> Vec<NodeTrack> {
    let by_target: HashMap<usize, &MatchedNode> =
        diff.matched.iter().map(|m| (m.to_index, m)).collect();
    let mut deleted = diff.deleted.iter().peekable();
    let mut tracks = Vec::with_capacity(to.len() + diff.deleted.len());
    let mut after_last_match = 0;

    for (to_index, node) in to.iter().enumerate() {
        let Some(pair) = by_target.get(&to_index) else {
            tracks.push(NodeTrack::Inserted(node.clone()));
            continue;
        };
        while let Some(slot) = deleted.next_if(|slot| slot.index < pair.from_index) {
            tracks.push(NodeTrack::Deleted(from[slot.index].clone()));
        }

        let source = &from[pair.from_index];
        let path = match (source.kind, node.kind, &source.attrs.data, &node.attrs.data) {
            (ShapeKind::Path, ShapeKind::Path, Some(a), Some(b)) if a != b => {
                Some(morpher.create_interpolator(a, b))
            }
            _ => None,
        };
        tracks.push(NodeTrack::Matched(Box::new(MatchedTrack {
            from: source.clone(),
            to: node.clone(),
            path,
            children: build_tracks(&source.children, &node.children, &pair.children, morpher),
        })));
        after_last_match = tracks.len();
    }
    let trailing: Vec<NodeTrack> = deleted
        .map(|slot| NodeTrack::Deleted(from[slot.index].clone()))
        .collect();
    tracks.splice(after_last_match..after_last_match, trailing);
    tracks
}

fn sample_tracks(tracks: &[NodeTrack], factors: Factors) -> Vec<FrameNode> {
    tracks
        .iter()
        .map(|track| match track {
            NodeTrack::Matched(m) => sample_matched(m, factors),
            NodeTrack::Inserted(node) => {
                let mut out = FrameNode::settled(node, NodeRole::Inserted);
                out.attrs.opacity *= factors.fade_in;
                out
            }
            NodeTrack::Deleted(node) => {
                let mut out = FrameNode::settled(node, NodeRole::Deleted);
                out.attrs.opacity *= factors.fade_out;
                out
            }
        })
        .collect()
}

fn sample_matched(track: &MatchedTrack, factors: Factors) -> FrameNode {
    let t = factors.matched;
    let done = t >= 1.0;
    let (a, b) = (&track.from.attrs, &track.to.attrs);
    let data = match &track.path {
        Some(interpolator) => Some(interpolator.sample(t)),
        None if done => b.data.clone(),
        None => a.data.clone(),
    };
    let (node, extra) = if done {
        (&track.to, &b.extra)
    } else {
        (&track.from, &a.extra)
    };

    FrameNode {
        id: node.id.clone(),
        kind: node.kind,
        role: NodeRole::Matched,
        attrs: ShapeAttrs {
            position: a.position.lerp(b.position, t),
            scale: a.scale.lerp(b.scale, t),
            rotation: Lerp::lerp(&a.rotation, &b.rotation, t),
            size: lerp_option(&a.size, &b.size, t, |_| Size::ZERO),
            data,
            fill: lerp_option(&a.fill, &b.fill, t, |c| c.cleared()),
            stroke: lerp_option(&a.stroke, &b.stroke, t, |c| c.cleared()),
            line_width: Lerp::lerp(&a.line_width, &b.line_width, t),
            opacity: Lerp::lerp(&a.opacity, &b.opacity, t),
            extra: extra.clone(),
        },
        children: sample_tracks(&track.children, factors),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/transition.rs"]
mod tests;
