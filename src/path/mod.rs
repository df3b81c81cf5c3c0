//! SVG path data to cubic Bezier subpaths, and back.

pub(crate) mod arc;
pub(crate) mod model;
pub(crate) mod parser;
pub(crate) mod serialize;
pub(crate) mod tokenizer;
