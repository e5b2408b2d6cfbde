//! Core processing building blocks: the circular crop, resizing, alpha
//! flattening, and save helpers. These are internal primitives consumed by
//! the high-level `api` module.
pub mod params;
pub mod processing;
