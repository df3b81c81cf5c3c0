//! Pairing and subdivision of subpaths so two paths share one topology.

pub(crate) mod aligner;
pub(crate) mod subdivide;
