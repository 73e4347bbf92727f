//! Overlay progress HUD for iced applications
//!
//! - [`hud`]: lifecycle, configuration, geometry and asset policy
//! - [`features`]: GIF asset loading
//! - [`ui`]: canvas rendering, widgets and animation helpers

pub mod features;
pub mod hud;
pub mod ui;
