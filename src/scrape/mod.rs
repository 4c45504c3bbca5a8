// src/scrape/mod.rs
mod debates;
mod render;
mod roster;

pub use debates::{collect_debates, debate_file_name};
#[cfg(feature = "browser")]
pub use render::ChromeRenderer;
pub use render::{HttpRenderer, Renderer, make_renderer};
pub use roster::collect_roster;
