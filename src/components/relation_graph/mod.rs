mod component;
mod render;
mod state;
pub mod surface;

pub use component::RelationGraph;
pub use surface::RenderSurface;
