pub mod geom;
pub mod vec2;
