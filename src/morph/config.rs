use std::sync::Arc;

use crate::{
    foundation::error::{MorphError, MorphResult},
    morph::curve::{CurveMorpher, CurveMorpherOpts},
    morph::flatten::{FlattenMorpher, FlattenMorpherOpts},
    morph::interpolator::Morpher,
    morph::polygon::{PolygonMorpher, PolygonMorpherOpts},
    morph::resample::ResampleMorpher,
};

/// Serializable choice of morphing strategy and its options.
///
/// The JSON form is an object tagged by `kind`, e.g. `{"kind": "polygon",
/// "morph_precision": 4}`. Omitted options take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MorpherConfig {
    Curve(CurveMorpherOpts),
    Polygon(PolygonMorpherOpts),
    Resample,
    Flatten(FlattenMorpherOpts),
}

impl Default for MorpherConfig {
    fn default() -> Self {
        Self::Curve(CurveMorpherOpts::default())
    }
}

impl MorpherConfig {
    /// Parse and validate a strategy config.
    ///
    /// Accepts either a tagged object or a bare kind string (`"flatten"`). Kind names are
    /// matched case-insensitively.
    pub fn from_json(value: &serde_json::Value) -> MorphResult<Self> {
        let normalized = match value {
            serde_json::Value::String(kind) => {
                let kind = normalize_kind(kind)?;
                serde_json::json!({ "kind": kind })
            }
            serde_json::Value::Object(map) => {
                let kind = map.get("kind").and_then(|v| v.as_str()).ok_or_else(|| {
                    MorphError::validation("morpher config requires a string 'kind'")
                })?;
                let kind = normalize_kind(kind)?;
                let mut map = map.clone();
                map.insert("kind".to_owned(), kind.into());
                serde_json::Value::Object(map)
            }
            _ => {
                return Err(MorphError::validation(
                    "morpher config must be an object or a kind string",
                ));
            }
        };

        let config: Self = serde_json::from_value(normalized)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MorphResult<()> {
        match self {
            Self::Curve(opts) => opts.validate(),
            Self::Polygon(opts) => opts.validate(),
            Self::Resample => Ok(()),
            Self::Flatten(opts) => opts.validate(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Curve(_) => "curve",
            Self::Polygon(_) => "polygon",
            Self::Resample => "resample",
            Self::Flatten(_) => "flatten",
        }
    }

    /// Construct the configured strategy.
    pub fn build(&self) -> Arc<dyn Morpher> {
        match *self {
            Self::Curve(opts) => Arc::new(CurveMorpher::new(opts)),
            Self::Polygon(opts) => Arc::new(PolygonMorpher::new(opts)),
            Self::Resample => Arc::new(ResampleMorpher::new()),
            Self::Flatten(opts) => Arc::new(FlattenMorpher::new(opts)),
        }
    }
}

fn normalize_kind(kind: &str) -> MorphResult<String> {
    let kind = kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(MorphError::validation("morpher kind must be non-empty"));
    }
    match kind.as_str() {
        "curve" | "polygon" | "resample" | "flatten" => Ok(kind),
        _ => Err(MorphError::validation(format!("unknown morpher kind '{kind}'"))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/config.rs"]
mod tests;
