mod component;
mod render;
mod state;
mod surface;

pub use component::GraphCanvas;
