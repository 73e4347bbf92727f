//! Animation helpers built on `iced_anim`
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut fade = OverlayFade::new();
//! fade.show();
//! // on every window frame
//! fade.tick(now);
//! let alpha = fade.opacity();
//! ```

mod fade;

pub use fade::OverlayFade;
