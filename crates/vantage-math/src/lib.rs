//! Geometry primitives for the Vantage scene engine: view-frustum extraction
//! and point containment tests built on `glam`.

mod frustum;

pub use frustum::{Frustum, FrustumCuller};
