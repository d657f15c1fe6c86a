mod render;
mod write;

pub use render::*;
pub use write::*;
