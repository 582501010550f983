/// Flowline geometry: bed/surface profiles and cross-section shapes.
pub mod geometry;
pub mod shape;

pub use geometry::Flowline;
pub use shape::BedShape;
