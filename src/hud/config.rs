//! HUD configuration
//!
//! User-settable options for a HUD instance, frozen at `show` by convention.
//! Persisted as JSON the same way the application settings are.

use std::path::{Path, PathBuf};

use iced::Color;
use serde::{Deserialize, Serialize};

use super::geometry::{SLIDER_INSET, TITLE_INSET};

/// Which visual strategy renders progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorType {
    /// Small rotating spinner
    #[default]
    Spinner,
    /// Looping animated image (GIF)
    ImageLoop,
    /// Embedded animation supplied by the caller
    EmbeddedAnimation,
    /// Pie-slice progress arc inside a guide ring
    CircularProgress,
}

impl IndicatorType {
    /// Get all indicator types
    pub fn all() -> Vec<Self> {
        vec![
            Self::Spinner,
            Self::ImageLoop,
            Self::EmbeddedAnimation,
            Self::CircularProgress,
        ]
    }
}

impl std::fmt::Display for IndicatorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndicatorType::Spinner => write!(f, "Spinner"),
            IndicatorType::ImageLoop => write!(f, "Image loop"),
            IndicatorType::EmbeddedAnimation => write!(f, "Embedded animation"),
            IndicatorType::CircularProgress => write!(f, "Circular progress"),
        }
    }
}

/// What covers the host view behind the indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundStyle {
    /// Translucent colored layer
    #[default]
    ShadowOverlay,
    /// Blur effect layer
    BlurOverlay,
    /// Nothing covers the host
    None,
}

impl BackgroundStyle {
    pub fn all() -> Vec<Self> {
        vec![Self::ShadowOverlay, Self::BlurOverlay, Self::None]
    }
}

impl std::fmt::Display for BackgroundStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackgroundStyle::ShadowOverlay => write!(f, "Shadow"),
            BackgroundStyle::BlurOverlay => write!(f, "Blur"),
            BackgroundStyle::None => write!(f, "Clear"),
        }
    }
}

/// Tone of a blur surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurStyle {
    ExtraLight,
    Light,
    Dark,
}

impl BlurStyle {
    pub fn all() -> Vec<Self> {
        vec![Self::ExtraLight, Self::Light, Self::Dark]
    }

    pub fn is_dark(self) -> bool {
        self == BlurStyle::Dark
    }
}

impl std::fmt::Display for BlurStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlurStyle::ExtraLight => write!(f, "Extra light"),
            BlurStyle::Light => write!(f, "Light"),
            BlurStyle::Dark => write!(f, "Dark"),
        }
    }
}

/// Serializable RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// HUD options
///
/// Every field defaults independently, so a partial JSON record (or a
/// `ProgressHud::configure` closure touching a few fields) keeps the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub indicator_type: IndicatorType,
    pub background_style: BackgroundStyle,

    /// Append `(NN%)` to the title once progress is reported
    pub show_percent_label: bool,
    /// Thin progress bar under the center panel
    pub show_linear_slider: bool,
    /// Fade the overlay as progress approaches completion
    pub dynamic_overlay_opacity: bool,
    /// Rounded blur panel behind the indicator
    pub show_center_panel: bool,

    pub title_color: Rgba,

    /// Shadow overlay color, used with `BackgroundStyle::ShadowOverlay`
    pub shadow_color: Rgba,
    pub shadow_alpha: f32,

    /// Blur overlay tone, used with `BackgroundStyle::BlurOverlay`.
    /// Also picks the circular progress fill.
    pub background_blur_style: BlurStyle,
    pub background_blur_alpha: f32,

    pub center_width: f32,
    pub center_height: f32,
    pub center_blur_style: BlurStyle,
    pub center_blur_alpha: f32,

    pub icon_width: f32,
    pub icon_height: f32,

    /// Custom GIF names for `IndicatorType::ImageLoop`
    pub loading_image: Option<String>,
    pub success_image: Option<String>,
    pub failure_image: Option<String>,

    /// Custom animation names for `IndicatorType::EmbeddedAnimation`
    pub loading_animation: Option<String>,
    pub success_animation: Option<String>,
    pub failure_animation: Option<String>,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            indicator_type: IndicatorType::Spinner,
            background_style: BackgroundStyle::ShadowOverlay,
            show_percent_label: false,
            show_linear_slider: false,
            dynamic_overlay_opacity: false,
            show_center_panel: false,
            title_color: Rgba::WHITE,
            shadow_color: Rgba::BLACK,
            shadow_alpha: 0.7,
            background_blur_style: BlurStyle::Dark,
            background_blur_alpha: 1.0,
            center_width: 120.0,
            center_height: 120.0,
            center_blur_style: BlurStyle::Light,
            center_blur_alpha: 0.9,
            icon_width: 80.0,
            icon_height: 80.0,
            loading_image: None,
            success_image: None,
            failure_image: None,
            loading_animation: None,
            success_animation: None,
            failure_animation: None,
        }
    }
}

impl HudConfig {
    pub fn new(indicator_type: IndicatorType, background_style: BackgroundStyle) -> Self {
        Self {
            indicator_type,
            background_style,
            ..Default::default()
        }
    }

    /// True when the center panel is too small for the derived slider or
    /// title widths. Such values are not rejected; geometry clamps to zero.
    pub fn is_degenerate(&self) -> bool {
        self.center_width < SLIDER_INSET.max(TITLE_INSET)
            || self.center_width <= 0.0
            || self.center_height <= 0.0
    }

    /// Get the config file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "progress-hud", "ProgressHud")
            .map(|dirs| dirs.config_dir().join("hud.json"))
    }

    /// Load config from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load config from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save config to the default file
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::file_path().ok_or_else(|| {
            ConfigError::Io("Could not determine config directory".to_string())
        })?;
        self.save_to_file(&path)?;
        Ok(path)
    }

    /// Save config to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with the config file
#[derive(Debug, Clone)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
