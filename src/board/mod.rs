//! Board geometry collaborator.
//!
//! The sequencer only needs to know where a square is in world space so it
//! can animate pieces there. Hosts with a real scene implement
//! `BoardGeometry` over their own anchors; `AnchorBoard` covers the rest.

pub mod geometry;

pub use geometry::{AnchorBoard, BoardGeometry};
