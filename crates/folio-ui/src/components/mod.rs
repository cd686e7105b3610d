//! Hero section components
//!
//! - `HeroSection`: the whole landing hero
//! - `FadeUp`: class-based enter transition around one block
//! - `GlobeView`: lazily loaded decorative globe
//! - `ContentBlockView`: markup for one of the five blocks

mod content_block;
mod fade_up;
mod globe;
mod hero_section;

pub use content_block::*;
pub use fade_up::*;
pub use globe::*;
pub use hero_section::*;
