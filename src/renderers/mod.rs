mod ascii_renderer;
pub use ascii_renderer::*;
