//! Types and functions on geometries in cartesian (local projected) coordinates.

mod impls;
mod orient;
mod rect;
mod traits;

pub use impls::{Point2, Vector2};
pub use orient::Orientation;
pub use rect::Rect;
pub use traits::*;
