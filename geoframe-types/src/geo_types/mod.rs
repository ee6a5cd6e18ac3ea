//! Integration with the [`geo_types`] geometries. All of them live in [`AmbiguousSpace`](crate::geometry_type::AmbiguousSpace).

mod coord;
mod geometry;
mod linestring;
mod multi_polygon;
mod point;
mod polygon;
