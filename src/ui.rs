//! Rendering layer
//!
//! - [`primitives`]: canvas programs (the HUD overlay itself)
//! - [`widgets`]: small reusable pieces used by the demo
//! - [`animation`]: `iced_anim` helpers
//! - [`theme`]: colors and widget styles

pub mod animation;
pub mod primitives;
pub mod theme;
pub mod widgets;
