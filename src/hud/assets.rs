//! Asset resolution policy
//!
//! Decides which visual asset the indicator shows for each phase, and
//! falls back to the built-in bundle whenever a custom asset is missing,
//! unchanged from loading, or fails to load.

use std::sync::Arc;
use std::time::Duration;

use iced::widget::image;

use super::config::{HudConfig, IndicatorType};

pub const BUILTIN_LOADING_IMAGE: &str = "animat-pencil-color";
pub const BUILTIN_SUCCESS_IMAGE: &str = "animat-checkmark-color";
pub const BUILTIN_FAILURE_IMAGE: &str = "animat-rocket-color";
/// Shown by the embedded animation type when no loading animation is set
pub const BUILTIN_ANIMATION_STANDIN: &str = "animat-rocket-color";

/// Loading result passed to `dismiss`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissResult {
    Success,
    Failure,
}

/// Which visual the indicator is resolving for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetPhase {
    Loading,
    Success,
    Failure,
}

impl From<DismissResult> for AssetPhase {
    fn from(result: DismissResult) -> Self {
        match result {
            DismissResult::Success => AssetPhase::Success,
            DismissResult::Failure => AssetPhase::Failure,
        }
    }
}

/// How a resolved asset is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Looping animated image placed in the icon rect
    Image,
    /// Embedded animation, replacing the image entirely
    Animation,
}

/// Where an asset is looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetOrigin {
    /// Caller-provided assets
    Custom,
    /// Assets shipped with the widget
    BuiltIn,
}

/// Name of an asset plus where and how to load it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetKey {
    pub name: String,
    pub kind: AssetKind,
    pub origin: AssetOrigin,
}

impl AssetKey {
    pub fn custom(name: impl Into<String>, kind: AssetKind) -> Self {
        Self {
            name: name.into(),
            kind,
            origin: AssetOrigin::Custom,
        }
    }

    pub fn builtin(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AssetKind::Image,
            origin: AssetOrigin::BuiltIn,
        }
    }
}

/// One decoded frame of an animated asset
#[derive(Debug, Clone)]
pub struct AnimatedFrame {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    pub delay: Duration,
}

/// A loaded asset. Cheap to clone; frames are shared.
#[derive(Debug, Clone)]
pub struct AssetHandle {
    key: AssetKey,
    frames: Arc<[AnimatedFrame]>,
}

impl PartialEq for AssetHandle {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && Arc::ptr_eq(&self.frames, &other.frames)
    }
}

impl AssetHandle {
    pub fn new(key: AssetKey, frames: Vec<AnimatedFrame>) -> Self {
        Self {
            key,
            frames: frames.into(),
        }
    }

    /// Frameless handle used when even the built-in asset is unavailable.
    /// Renderers draw a spinner in its place.
    pub fn placeholder(key: AssetKey) -> Self {
        Self::new(key, Vec::new())
    }

    pub fn key(&self) -> &AssetKey {
        &self.key
    }

    pub fn frames(&self) -> &[AnimatedFrame] {
        &self.frames
    }

    pub fn is_placeholder(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn loop_duration(&self) -> Duration {
        self.frames.iter().map(|f| f.delay).sum()
    }

    /// Frame to show `elapsed` into the loop
    pub fn frame_at(&self, elapsed: Duration) -> Option<&AnimatedFrame> {
        let total = self.loop_duration();
        if total.is_zero() {
            return self.frames.first();
        }

        let mut remaining = Duration::from_nanos((elapsed.as_nanos() % total.as_nanos()) as u64);
        for frame in self.frames.iter() {
            if remaining < frame.delay {
                return Some(frame);
            }
            remaining -= frame.delay;
        }
        self.frames.last()
    }
}

/// Errors from an asset loader
#[derive(Debug, Clone)]
pub enum AssetError {
    NotFound(String),
    Io(String),
    Decode(String),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::NotFound(name) => write!(f, "Asset not found: {}", name),
            AssetError::Io(e) => write!(f, "IO error: {}", e),
            AssetError::Decode(e) => write!(f, "Decode error: {}", e),
        }
    }
}

impl std::error::Error for AssetError {}

/// Loads an animated asset by name from the custom or built-in bundle
pub trait AssetLoader {
    fn load(&self, key: &AssetKey) -> Result<AssetHandle, AssetError>;
}

/// Loader with no assets at all; every request yields a placeholder
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAssets;

impl AssetLoader for NoAssets {
    fn load(&self, key: &AssetKey) -> Result<AssetHandle, AssetError> {
        Err(AssetError::NotFound(key.name.clone()))
    }
}

/// What the indicator area displays
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorContent {
    Spinner,
    ImageAsset(AssetHandle),
    EmbeddedAnimation(AssetHandle),
    CircularArc,
}

impl IndicatorContent {
    /// Resolve and load the content for `phase`, never failing
    pub fn for_phase(phase: AssetPhase, config: &HudConfig, loader: &dyn AssetLoader) -> Self {
        match config.indicator_type {
            IndicatorType::Spinner => IndicatorContent::Spinner,
            IndicatorType::CircularProgress => IndicatorContent::CircularArc,
            IndicatorType::ImageLoop | IndicatorType::EmbeddedAnimation => {
                let key = match resolve(phase, config) {
                    Some(key) => key,
                    None => return IndicatorContent::Spinner,
                };
                let handle = load_with_fallback(loader, key, phase);
                match handle.key().kind {
                    AssetKind::Image => IndicatorContent::ImageAsset(handle),
                    AssetKind::Animation => IndicatorContent::EmbeddedAnimation(handle),
                }
            }
        }
    }

    pub fn asset(&self) -> Option<&AssetHandle> {
        match self {
            IndicatorContent::ImageAsset(handle) | IndicatorContent::EmbeddedAnimation(handle) => {
                Some(handle)
            }
            IndicatorContent::Spinner | IndicatorContent::CircularArc => None,
        }
    }
}

/// Built-in asset for a phase
pub fn builtin_key(phase: AssetPhase, indicator_type: IndicatorType) -> AssetKey {
    let name = match (phase, indicator_type) {
        (AssetPhase::Loading, IndicatorType::EmbeddedAnimation) => BUILTIN_ANIMATION_STANDIN,
        (AssetPhase::Loading, _) => BUILTIN_LOADING_IMAGE,
        (AssetPhase::Success, _) => BUILTIN_SUCCESS_IMAGE,
        (AssetPhase::Failure, _) => BUILTIN_FAILURE_IMAGE,
    };
    AssetKey::builtin(name)
}

/// Decide which asset to display for `phase`.
///
/// Returns `None` for indicator types that draw no asset. A custom result
/// asset is honored only when it differs from the custom loading asset,
/// so a transition never shows the same visual twice.
pub fn resolve(phase: AssetPhase, config: &HudConfig) -> Option<AssetKey> {
    let (kind, loading, success, failure) = match config.indicator_type {
        IndicatorType::Spinner | IndicatorType::CircularProgress => return None,
        IndicatorType::ImageLoop => (
            AssetKind::Image,
            &config.loading_image,
            &config.success_image,
            &config.failure_image,
        ),
        IndicatorType::EmbeddedAnimation => (
            AssetKind::Animation,
            &config.loading_animation,
            &config.success_animation,
            &config.failure_animation,
        ),
    };

    let custom = match phase {
        AssetPhase::Loading => loading.as_ref(),
        AssetPhase::Success => success.as_ref().filter(|name| Some(*name) != loading.as_ref()),
        AssetPhase::Failure => failure.as_ref().filter(|name| Some(*name) != loading.as_ref()),
    };

    Some(match custom {
        Some(name) => AssetKey::custom(name.clone(), kind),
        None => builtin_key(phase, config.indicator_type),
    })
}

/// Load `key`, falling back to the built-in asset for `phase`, then to a
/// placeholder
fn load_with_fallback(loader: &dyn AssetLoader, key: AssetKey, phase: AssetPhase) -> AssetHandle {
    match loader.load(&key) {
        Ok(handle) => return handle,
        Err(e) => tracing::warn!("Failed to load asset {:?}: {}", key.name, e),
    }

    if key.origin == AssetOrigin::Custom {
        let indicator_type = match key.kind {
            AssetKind::Image => IndicatorType::ImageLoop,
            AssetKind::Animation => IndicatorType::EmbeddedAnimation,
        };
        let fallback = builtin_key(phase, indicator_type);
        tracing::debug!("Falling back to built-in asset {:?}", fallback.name);
        match loader.load(&fallback) {
            Ok(handle) => return handle,
            Err(e) => {
                tracing::warn!("Failed to load built-in asset {:?}: {}", fallback.name, e);
                return AssetHandle::placeholder(fallback);
            }
        }
    }

    AssetHandle::placeholder(key)
}
