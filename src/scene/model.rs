use std::collections::BTreeMap;

use anyhow::Context;

use crate::foundation::{
    core::{Rgba8, Size, Vec2},
    error::{MorphError, MorphResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Concrete shape class of a node. Only `Path` nodes carry morphable path data.
pub enum ShapeKind {
    /// Container without geometry of its own.
    Group,
    /// SVG path; geometry lives in [`ShapeAttrs::data`].
    Path,
    /// Axis-aligned rectangle sized by [`ShapeAttrs::size`].
    Rect,
    /// Ellipse sized by [`ShapeAttrs::size`].
    Circle,
    /// Polyline.
    Line,
    /// Raster image.
    Image,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Animatable attributes of a shape.
pub struct ShapeAttrs {
    /// Translation relative to the parent.
    pub position: Vec2,
    /// Per-axis scale; `(1, 1)` by default.
    pub scale: Vec2,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Layout size for sized shapes.
    pub size: Option<Size>,
    /// Path data for `Path` nodes.
    pub data: Option<String>,
    /// Fill color, `None` for no fill.
    pub fill: Option<Rgba8>,
    /// Stroke color, `None` for no stroke.
    pub stroke: Option<Rgba8>,
    /// Stroke width.
    pub line_width: f64,
    /// Authored opacity in `[0, 1]`.
    pub opacity: f64,
    /// Host-specific properties carried through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for ShapeAttrs {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::new(1.0, 1.0),
            rotation: 0.0,
            size: None,
            data: None,
            fill: None,
            stroke: None,
            line_width: 0.0,
            opacity: 1.0,
            extra: BTreeMap::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One node of a shape tree. `id` is the identity used for diffing; it need not be unique.
pub struct ShapeNode {
    /// Caller-provided identity.
    pub id: String,
    /// Shape class.
    pub kind: ShapeKind,
    /// Animatable attributes.
    #[serde(default)]
    pub attrs: ShapeAttrs,
    /// Child nodes in paint order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ShapeNode>,
}

impl ShapeNode {
    pub fn new(id: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            attrs: ShapeAttrs::default(),
            children: Vec::new(),
        }
    }

    /// A `Path` node with the given path data.
    pub fn path(id: impl Into<String>, data: impl Into<String>) -> Self {
        let mut node = Self::new(id, ShapeKind::Path);
        node.attrs.data = Some(data.into());
        node
    }

    /// A `Rect` node of the given size.
    pub fn rect(id: impl Into<String>, size: Size) -> Self {
        let mut node = Self::new(id, ShapeKind::Rect);
        node.attrs.size = Some(size);
        node
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.attrs.position = position;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.attrs.opacity = opacity;
        self
    }

    pub fn with_fill(mut self, fill: Rgba8) -> Self {
        self.attrs.fill = Some(fill);
        self
    }

    pub fn with_children(mut self, children: Vec<ShapeNode>) -> Self {
        self.children = children;
        self
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Self::subtree_len).sum::<usize>()
    }

    fn validate(&self, path: &str) -> MorphResult<()> {
        let path = format!("{path}/{}", self.id);
        let a = &self.attrs;
        for (name, value) in [
            ("position.x", a.position.x),
            ("position.y", a.position.y),
            ("scale.x", a.scale.x),
            ("scale.y", a.scale.y),
            ("rotation", a.rotation),
            ("line_width", a.line_width),
        ] {
            if !value.is_finite() {
                return Err(MorphError::validation(format!(
                    "node '{path}' {name} must be finite"
                )));
            }
        }
        if !(0.0..=1.0).contains(&a.opacity) {
            return Err(MorphError::validation(format!(
                "node '{path}' opacity must be in [0, 1]"
            )));
        }
        if let Some(size) = a.size
            && !(size.width.is_finite() && size.height.is_finite())
        {
            return Err(MorphError::validation(format!(
                "node '{path}' size must be finite"
            )));
        }
        for child in &self.children {
            child.validate(&path)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A parsed vector document: its intrinsic size and top-level nodes.
pub struct ShapeDocument {
    /// Intrinsic document size.
    pub size: Size,
    /// Top-level nodes in paint order.
    #[serde(default)]
    pub nodes: Vec<ShapeNode>,
}

impl ShapeDocument {
    pub fn new(size: Size, nodes: Vec<ShapeNode>) -> Self {
        Self { size, nodes }
    }

    /// Deserialize and validate a document from JSON.
    pub fn from_json_str(json: &str) -> MorphResult<Self> {
        let doc: Self = serde_json::from_str(json).context("parse shape document json")?;
        doc.validate()?;
        Ok(doc)
    }

    pub fn to_json_string(&self) -> MorphResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn validate(&self) -> MorphResult<()> {
        if !(self.size.width.is_finite() && self.size.height.is_finite())
            || self.size.width < 0.0
            || self.size.height < 0.0
        {
            return Err(MorphError::validation(
                "document size must be finite and >= 0",
            ));
        }
        for node in &self.nodes {
            node.validate("")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
