//! Overlay fade in / fade out
//!
//! The HUD itself appears and disappears instantly; the demo softens that
//! edge by scaling the whole overlay canvas with this opacity.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Fade duration; kept well under the shortest dismiss delay
pub const FADE_DURATION: Duration = Duration::from_millis(180);

fn fade_easing() -> Easing {
    Easing::EASE_OUT.with_duration(FADE_DURATION)
}

#[derive(Debug)]
pub struct OverlayFade {
    animation: Animated<f32>,
    visible: bool,
}

impl Default for OverlayFade {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayFade {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, fade_easing()),
            visible: false,
        }
    }

    /// Follow the HUD's visibility; calls with an unchanged value are ignored
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        self.animation.update(if visible { 1.0 } else { 0.0 }.into());
    }

    pub fn show(&mut self) {
        self.set_visible(true);
    }

    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current opacity (0.0 - 1.0)
    pub fn opacity(&self) -> f32 {
        self.animation.value().clamp(0.0, 1.0)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Must be called on each animation frame
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}
