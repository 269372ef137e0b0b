//! Rendering seam
//!
//! The core never draws. It hands presenters a [`Frame`]: one primitive per
//! visible entity plus the HUD text.

pub mod shapes;

pub use shapes::{Frame, Primitive, Renderable, Shape, colors};
