//! GPU rendering subsystem.
//!
//! Pipelines are built once against the surface format and recorded into
//! the per-frame pass by the frame loop.

pub mod triangle;

pub use triangle::TrianglePipeline;
