//! Primitive UI elements - atomic building blocks
//!
//! Primitives implement iced's `canvas::Program` directly, use generic
//! Message types and never import from `crate::app`.
//!
//! # Contents
//!
//! - [`HudOverlay`] - Draws a composed [`crate::hud::HudScene`]

pub mod hud_overlay;

pub use hud_overlay::{HudOverlay, view_hud_overlay};
