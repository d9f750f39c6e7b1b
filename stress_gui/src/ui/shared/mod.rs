//! Shared UI components reusable across panels
//!
//! Contains:
//! - `diagrams` - Canvas drawing utilities for the Mohr's circle diagram

pub mod diagrams;

// Re-exports accessed via shared::diagrams::{MohrDiagram, MohrDiagramData}
