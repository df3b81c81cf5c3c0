//! Explicit fragment-to-fragment mapping, for content such as typeset formulas where ids
//! carry no meaning and the caller decides which pieces correspond.

use crate::{
    animation::ease::Ease,
    animation::lerp::lerp_option,
    foundation::core::Size,
    foundation::math::clamp_remap,
    morph::interpolator::{Interpolator, Morpher},
    scene::model::{ShapeKind, ShapeNode},
    scene::transition::{FrameNode, NodeRole},
};

const FADE_OUT_END: f64 = 0.3;
const CROSS_FADE_IN_START: f64 = 0.7;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// A mapping entry pointing outside the target fragment list.
pub struct FragmentWarning {
    pub source: usize,
    pub target: isize,
    pub target_count: usize,
}

#[derive(Debug)]
enum FragmentTrack {
    /// Path pair: data through the morpher, plus position and scale.
    Morph {
        from: ShapeNode,
        to: ShapeNode,
        path: Option<Interpolator>,
    },
    /// Same-kind non-path pair: position, scale and size.
    Resize { from: ShapeNode, to: ShapeNode },
    /// Kind mismatch: the source fades out early, the target fades in late.
    CrossFade { from: ShapeNode, to: ShapeNode },
    FadeOut(ShapeNode),
    FadeIn(ShapeNode),
}

/// Planned animation of every shape of every fragment.
#[derive(Debug)]
pub struct FragmentPlan {
    tracks: Vec<FragmentTrack>,
    target: Vec<ShapeNode>,
    ease: Ease,
    warnings: Vec<FragmentWarning>,
}

/// Plan the transition from `source` fragments to `target` fragments.
///
/// `mapping[i]` lists the target fragments source fragment `i` turns into. The first target
/// takes the source shapes themselves; further targets each get their own copy. Inside a
/// mapped pair shapes pair by position. Out-of-range target indices are logged, recorded in
/// [`FragmentPlan::warnings`] and skipped. Source fragments without a usable target fade out
/// over the first 30% of the transition; target fragments nobody maps to fade in over the
/// whole transition.
///
/// This includes sources past the end of `mapping`: they fade out rather than staying put,
/// so a short mapping never leaves stale fragments on screen.
#[tracing::instrument(skip_all, fields(sources = source.len(), targets = target.len()))]
pub fn plan_fragment_mapping(
    source: &[Vec<ShapeNode>],
    target: &[Vec<ShapeNode>],
    mapping: &[Vec<isize>],
    morpher: &dyn Morpher,
    ease: Ease,
) -> FragmentPlan {
    let mut tracks = Vec::new();
    let mut warnings = Vec::new();
    let mut reached = vec![false; target.len()];

    for (src_idx, shapes) in source.iter().enumerate() {
        if shapes.is_empty() {
            continue;
        }
        let mut mapped_any = false;
        for &tgt in mapping.get(src_idx).map(Vec::as_slice).unwrap_or_default() {
            let resolved = usize::try_from(tgt)
                .ok()
                .and_then(|i| target.get(i).map(|shapes| (i, shapes)));
            let Some((tgt_idx, tgt_shapes)) = resolved else {
                tracing::warn!(
                    source = src_idx,
                    target = tgt,
                    target_count = target.len(),
                    "fragment target index out of bounds"
                );
                warnings.push(FragmentWarning {
                    source: src_idx,
                    target: tgt,
                    target_count: target.len(),
                });
                continue;
            };
            reached[tgt_idx] = true;
            mapped_any = true;
            pair_shapes(shapes, tgt_shapes, morpher, &mut tracks);
        }
        if !mapped_any {
            tracks.extend(shapes.iter().cloned().map(FragmentTrack::FadeOut));
        }
    }

    for (tgt_idx, shapes) in target.iter().enumerate() {
        if !reached[tgt_idx] {
            tracks.extend(shapes.iter().cloned().map(FragmentTrack::FadeIn));
        }
    }

    FragmentPlan {
        tracks,
        target: target.iter().flatten().cloned().collect(),
        ease,
        warnings,
    }
}

fn pair_shapes(
    from: &[ShapeNode],
    to: &[ShapeNode],
    morpher: &dyn Morpher,
    tracks: &mut Vec<FragmentTrack>,
) {
    for i in 0..from.len().max(to.len()) {
        let track = match (from.get(i), to.get(i)) {
            (Some(a), Some(b)) if a.kind == ShapeKind::Path && b.kind == ShapeKind::Path => {
                let path = match (&a.attrs.data, &b.attrs.data) {
                    (Some(x), Some(y)) if x != y => Some(morpher.create_interpolator(x, y)),
                    _ => None,
                };
                FragmentTrack::Morph {
                    from: a.clone(),
                    to: b.clone(),
                    path,
                }
            }
            (Some(a), Some(b)) if a.kind == b.kind => FragmentTrack::Resize {
                from: a.clone(),
                to: b.clone(),
            },
            (Some(a), Some(b)) => FragmentTrack::CrossFade {
                from: a.clone(),
                to: b.clone(),
            },
            (Some(a), None) => FragmentTrack::FadeOut(a.clone()),
            (None, Some(b)) => FragmentTrack::FadeIn(b.clone()),
            (None, None) => continue,
        };
        tracks.push(track);
    }
}

impl FragmentPlan {
    /// Out-of-range mapping entries that were skipped.
    pub fn warnings(&self) -> &[FragmentWarning] {
        &self.warnings
    }

    /// Number of animated shapes, counting both halves of a cross-fade.
    pub fn track_count(&self) -> usize {
        self.tracks
            .iter()
            .map(|t| match t {
                FragmentTrack::CrossFade { .. } => 2,
                _ => 1,
            })
            .sum()
    }

    /// Shapes at linear progress `t`. At `t >= 1` this is exactly the target fragments.
    pub fn sample(&self, t: f64) -> Vec<FrameNode> {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t >= 1.0 {
            return self
                .target
                .iter()
                .map(|n| settled(n, NodeRole::Settled, 1.0))
                .collect();
        }

        let ease = self.ease;
        let full = ease.apply(t);
        let fade_out = 1.0 - ease.apply(clamp_remap(0.0, FADE_OUT_END, 0.0, 1.0, t));
        let late_in = ease.apply(clamp_remap(CROSS_FADE_IN_START, 1.0, 0.0, 1.0, t));

        let mut out = Vec::with_capacity(self.tracks.len());
        for track in &self.tracks {
            match track {
                FragmentTrack::Morph { from, to, path } => {
                    let mut node = moved(from, to, full, false);
                    if let Some(path) = path {
                        node.attrs.data = Some(path.sample(full));
                    }
                    out.push(node);
                }
                FragmentTrack::Resize { from, to } => out.push(moved(from, to, full, true)),
                FragmentTrack::CrossFade { from, to } => {
                    out.push(settled(from, NodeRole::Deleted, fade_out));
                    out.push(settled(to, NodeRole::Inserted, late_in));
                }
                FragmentTrack::FadeOut(node) => {
                    out.push(settled(node, NodeRole::Deleted, fade_out));
                }
                FragmentTrack::FadeIn(node) => out.push(settled(node, NodeRole::Inserted, full)),
            }
        }
        out
    }
}

fn settled(node: &ShapeNode, role: NodeRole, opacity: f64) -> FrameNode {
    let mut attrs = node.attrs.clone();
    attrs.opacity *= opacity;
    FrameNode {
        id: node.id.clone(),
        kind: node.kind,
        role,
        attrs,
        children: node
            .children
            .iter()
            .map(|c| settled(c, NodeRole::Settled, 1.0))
            .collect(),
    }
}

fn moved(from: &ShapeNode, to: &ShapeNode, t: f64, resize: bool) -> FrameNode {
    let mut node = settled(from, NodeRole::Matched, 1.0);
    node.attrs.position = from.attrs.position.lerp(to.attrs.position, t);
    node.attrs.scale = from.attrs.scale.lerp(to.attrs.scale, t);
    if resize {
        node.attrs.size = lerp_option(&from.attrs.size, &to.attrs.size, t, |_| Size::ZERO);
    }
    node
}

#[cfg(test)]
#[path = "../../tests/unit/scene/fragments.rs"]
mod tests;
