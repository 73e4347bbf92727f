//! Overlay progress HUD core
//!
//! Host-agnostic lifecycle, geometry and asset policy for a busy/progress
//! overlay. Rendering lives in `crate::ui`; this module only decides what
//! to draw and when.
//!
//! # Layers
//!
//! - **Configuration** (`config`): options with defaults, JSON persistence
//! - **Geometry** (`geometry`): pure rectangle, arc and alpha arithmetic
//! - **Assets** (`assets`): loading/success/failure asset resolution
//! - **Scene** (`scene`): the full visual description of a shown HUD
//! - **Lifecycle** (`lifecycle`): `show` / `set_progress` / `dismiss`
//!
//! # Usage
//!
//! ```rust,ignore
//! let hud = ProgressHud::new(
//!     IndicatorType::CircularProgress,
//!     BackgroundStyle::BlurOverlay,
//!     scheduler.clone(),
//!     loader.clone(),
//! );
//! hud.configure(|config| config.show_percent_label = true);
//!
//! hud.show(Some(&host), "Uploading", true);
//! hud.set_progress(Some(&host), 0.4);
//! hud.dismiss(Some(&host), DismissResult::Success, Duration::from_millis(800), None);
//! ```

pub mod assets;
pub mod config;
pub mod geometry;
pub mod host;
pub mod lifecycle;
pub mod scene;
pub mod scheduler;
pub mod state;

pub use assets::{
    AnimatedFrame, AssetError, AssetHandle, AssetKey, AssetKind, AssetLoader, AssetOrigin,
    AssetPhase, DismissResult, IndicatorContent, NoAssets, resolve,
};
pub use config::{BackgroundStyle, BlurStyle, ConfigError, HudConfig, IndicatorType, Rgba};
pub use host::{HostView, HudId, OverlayHost, SharedHost};
pub use lifecycle::{CompletionCallback, DismissHandle, ProgressHud};
pub use scene::{Backdrop, CenterPanel, HudScene, IndicatorVisual, SliderVisual, TitleVisual};
pub use scheduler::{FrameScheduler, Scheduler, Task, TokioScheduler};
pub use state::{LifecyclePhase, ProgressState};
