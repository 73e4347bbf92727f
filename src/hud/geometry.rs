//! Geometry engine
//!
//! Pure functions from configuration, progress and cached host geometry
//! to rectangles, arc paths and alpha values. Nothing in here touches a
//! renderer; `crate::ui` turns the results into iced paths.

use std::f32::consts::{FRAC_PI_2, TAU};

use iced::{Color, Point, Rectangle, Size};

use super::config::{BlurStyle, HudConfig};

/// Fixed title label height
pub const TITLE_HEIGHT: f32 = 44.0;
/// Title text shrinks down to this fraction of its size before clipping
pub const TITLE_MIN_SCALE: f32 = 0.5;
/// Linear slider thickness
pub const SLIDER_HEIGHT: f32 = 2.0;
/// Slider track is this much narrower than the center panel
pub const SLIDER_INSET: f32 = 14.0;
/// Title is this much narrower than the center panel
pub const TITLE_INSET: f32 = 8.0;
pub const SLIDER_TRACK_RADIUS: f32 = 3.0;
pub const SLIDER_FILL_RADIUS: f32 = 1.0;
pub const CENTER_PANEL_RADIUS: f32 = 12.0;
/// Inner pie radius of the circular indicator
pub const PIE_RADIUS: f32 = 20.0;
/// Outer guide ring radius of the circular indicator
pub const GUIDE_RING_RADIUS: f32 = 22.0;
/// Dynamic overlay alpha never drops below this
pub const OPACITY_FLOOR: f32 = 0.2;
/// Side of the square a result animation is placed in
pub const RESULT_ANIMATION_SIZE: f32 = 80.0;

/// Pie fill on dark overlays
pub const PIE_FILL_ON_DARK: Color = Color {
    r: 2.0 / 3.0,
    g: 2.0 / 3.0,
    b: 2.0 / 3.0,
    a: 1.0,
};
/// Pie fill on light overlays
pub const PIE_FILL_ON_LIGHT: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 0.85,
};
pub const GUIDE_RING_COLOR: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.4,
};

/// Host frame and center captured when the HUD is shown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostGeometry {
    pub frame: Rectangle,
    pub center: Point,
}

impl HostGeometry {
    pub fn new(frame: Rectangle, center: Point) -> Self {
        Self { frame, center }
    }

    pub fn from_frame(frame: Rectangle) -> Self {
        Self::new(frame, frame.center())
    }
}

/// Closed pie slice starting at 12 o'clock and swept clockwise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub center: Point,
    pub radius: f32,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

impl PieSlice {
    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.sweep_angle
    }

    pub fn is_empty(&self) -> bool {
        self.sweep_angle <= 0.0
    }

    pub fn is_full(&self) -> bool {
        self.sweep_angle >= TAU
    }
}

/// Full closed ring drawn behind the pie
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideRing {
    pub center: Point,
    pub radius: f32,
}

/// Clamp a reported progress value into [0, 1]; NaN counts as zero
pub fn clamp_progress(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Progress as a whole percentage
pub fn percent(progress: f32) -> u32 {
    (clamp_progress(progress) * 100.0).round() as u32
}

/// Width of the slider track, never negative
pub fn slider_width(config: &HudConfig) -> f32 {
    (config.center_width - SLIDER_INSET).max(0.0)
}

/// Width of the title label, never negative
pub fn title_width(config: &HudConfig) -> f32 {
    (config.center_width - TITLE_INSET).max(0.0)
}

fn centered(center: Point, size: Size) -> Rectangle {
    Rectangle::new(
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
        size,
    )
}

fn non_negative(width: f32, height: f32) -> Size {
    Size::new(width.max(0.0), height.max(0.0))
}

pub fn icon_rect(host: &HostGeometry, config: &HudConfig) -> Rectangle {
    centered(host.center, non_negative(config.icon_width, config.icon_height))
}

pub fn center_panel_rect(host: &HostGeometry, config: &HudConfig) -> Rectangle {
    centered(
        host.center,
        non_negative(config.center_width, config.center_height),
    )
}

/// Result animations ignore the configured icon size
pub fn result_animation_rect(host: &HostGeometry) -> Rectangle {
    centered(
        host.center,
        Size::new(RESULT_ANIMATION_SIZE, RESULT_ANIMATION_SIZE),
    )
}

/// Title label, its bottom edge just below the center panel
pub fn title_rect(host: &HostGeometry, config: &HudConfig) -> Rectangle {
    let width = title_width(config);
    Rectangle::new(
        Point::new(
            host.center.x - width / 2.0,
            host.center.y + config.center_height / 2.0 + 2.0 - TITLE_HEIGHT,
        ),
        Size::new(width, TITLE_HEIGHT),
    )
}

pub fn slider_track_rect(host: &HostGeometry, config: &HudConfig) -> Rectangle {
    let width = slider_width(config);
    Rectangle::new(
        Point::new(
            host.center.x - width / 2.0,
            host.center.y + config.center_height / 2.0 + 4.0,
        ),
        Size::new(width, SLIDER_HEIGHT),
    )
}

/// Filled part of the slider, quantized to whole percents
pub fn slider_fill_rect(host: &HostGeometry, config: &HudConfig, progress: f32) -> Rectangle {
    let track = slider_track_rect(host, config);
    let filled = percent(progress) as f32 / 100.0 * track.width;
    Rectangle::new(track.position(), Size::new(filled, track.height))
}

pub fn pie_slice(host: &HostGeometry, progress: f32) -> PieSlice {
    PieSlice {
        center: host.center,
        radius: PIE_RADIUS,
        start_angle: -FRAC_PI_2,
        sweep_angle: clamp_progress(progress) * TAU,
    }
}

pub fn guide_ring(host: &HostGeometry) -> GuideRing {
    GuideRing {
        center: host.center,
        radius: GUIDE_RING_RADIUS,
    }
}

/// Contrast rule: light gray on a dark overlay, near-white otherwise
pub fn pie_fill_color(background_blur: BlurStyle) -> Color {
    if background_blur.is_dark() {
        PIE_FILL_ON_DARK
    } else {
        PIE_FILL_ON_LIGHT
    }
}

/// Overlay alpha for the given configured alpha and reported progress.
///
/// With dynamic opacity enabled the overlay fades as work completes,
/// floored at [`OPACITY_FLOOR`]. A configured alpha of zero is left alone,
/// as is any overlay before the first progress report.
pub fn overlay_alpha(configured: f32, dynamic: bool, progress: Option<f32>) -> f32 {
    match progress {
        Some(p) if dynamic && configured != 0.0 => {
            (configured - clamp_progress(p)).max(0.0) + OPACITY_FLOOR
        }
        _ => configured,
    }
}

/// Title with an optional `(NN%)` suffix
pub fn title_text(title: &str, show_percent: bool, progress: Option<f32>) -> String {
    match progress {
        Some(p) if show_percent => format!("{}({}%)", title, percent(p)),
        _ => title.to_string(),
    }
}
