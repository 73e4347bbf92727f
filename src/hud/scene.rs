//! Scene composition
//!
//! Everything the overlay draws is a pure function of the configuration
//! and the instance state. Renderers consume a [`HudScene`] and never
//! reach back into the HUD.

use iced::{Color, Point, Rectangle};

use super::assets::{AssetHandle, AssetPhase, IndicatorContent};
use super::config::{BackgroundStyle, BlurStyle, HudConfig, IndicatorType};
use super::geometry::{self, GuideRing, HostGeometry, PieSlice};
use super::state::ProgressState;

/// Layer covering the whole host
#[derive(Debug, Clone, PartialEq)]
pub enum Backdrop {
    Shadow {
        rect: Rectangle,
        color: Color,
        alpha: f32,
    },
    Blur {
        rect: Rectangle,
        style: BlurStyle,
        alpha: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CenterPanel {
    pub rect: Rectangle,
    pub style: BlurStyle,
    pub alpha: f32,
    pub corner_radius: f32,
}

/// The indicator proper
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorVisual {
    Spinner {
        center: Point,
    },
    Image {
        rect: Rectangle,
        asset: AssetHandle,
    },
    Animation {
        rect: Rectangle,
        asset: AssetHandle,
    },
    CircularArc {
        ring: GuideRing,
        pie: PieSlice,
        fill: Color,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderVisual {
    pub track: Rectangle,
    pub fill: Rectangle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TitleVisual {
    pub rect: Rectangle,
    pub text: String,
    pub color: Color,
    /// Text shrinks to fit down to this scale instead of wrapping
    pub min_scale: f32,
}

/// Complete visual description of a shown HUD, in host coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct HudScene {
    pub frame: Rectangle,
    pub backdrop: Option<Backdrop>,
    pub center_panel: Option<CenterPanel>,
    pub indicator: IndicatorVisual,
    pub slider: Option<SliderVisual>,
    pub title: TitleVisual,
}

/// Compose the scene; `None` until host geometry has been captured
pub fn compose(config: &HudConfig, state: &ProgressState) -> Option<HudScene> {
    let host = state.host?;
    let progress = state.progress.unwrap_or(0.0);

    Some(HudScene {
        frame: host.frame,
        backdrop: backdrop(config, state, &host),
        center_panel: config.show_center_panel.then(|| CenterPanel {
            rect: geometry::center_panel_rect(&host, config),
            style: config.center_blur_style,
            alpha: config.center_blur_alpha,
            corner_radius: geometry::CENTER_PANEL_RADIUS,
        }),
        indicator: indicator(config, state, &host, progress),
        slider: config.show_linear_slider.then(|| SliderVisual {
            track: geometry::slider_track_rect(&host, config),
            fill: geometry::slider_fill_rect(&host, config, progress),
        }),
        title: TitleVisual {
            rect: geometry::title_rect(&host, config),
            text: geometry::title_text(&state.title, config.show_percent_label, state.progress),
            color: config.title_color.into(),
            min_scale: geometry::TITLE_MIN_SCALE,
        },
    })
}

fn backdrop(config: &HudConfig, state: &ProgressState, host: &HostGeometry) -> Option<Backdrop> {
    let dynamic = config.dynamic_overlay_opacity;
    match config.background_style {
        BackgroundStyle::ShadowOverlay => Some(Backdrop::Shadow {
            rect: host.frame,
            color: config.shadow_color.into(),
            alpha: geometry::overlay_alpha(config.shadow_alpha, dynamic, state.progress),
        }),
        BackgroundStyle::BlurOverlay => Some(Backdrop::Blur {
            rect: host.frame,
            style: config.background_blur_style,
            alpha: geometry::overlay_alpha(config.background_blur_alpha, dynamic, state.progress),
        }),
        BackgroundStyle::None => None,
    }
}

fn indicator(
    config: &HudConfig,
    state: &ProgressState,
    host: &HostGeometry,
    progress: f32,
) -> IndicatorVisual {
    if state.circular_active && config.indicator_type == IndicatorType::CircularProgress {
        return IndicatorVisual::CircularArc {
            ring: geometry::guide_ring(host),
            pie: geometry::pie_slice(host, progress),
            fill: geometry::pie_fill_color(config.background_blur_style),
        };
    }

    match &state.content {
        IndicatorContent::ImageAsset(asset) => IndicatorVisual::Image {
            rect: geometry::icon_rect(host, config),
            asset: asset.clone(),
        },
        IndicatorContent::EmbeddedAnimation(asset) => {
            let rect = if state.content_phase == AssetPhase::Loading {
                geometry::icon_rect(host, config)
            } else {
                geometry::result_animation_rect(host)
            };
            IndicatorVisual::Animation {
                rect,
                asset: asset.clone(),
            }
        }
        IndicatorContent::Spinner | IndicatorContent::CircularArc => {
            IndicatorVisual::Spinner {
                center: host.center,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::assets::AssetKey;
    use crate::hud::state::LifecyclePhase;
    use iced::Size;

    fn shown_state(title: &str) -> ProgressState {
        let mut state = ProgressState {
            phase: LifecyclePhase::Shown,
            ..Default::default()
        };
        state.prepare(
            HostGeometry::from_frame(Rectangle::new(Point::ORIGIN, Size::new(300.0, 300.0))),
            title,
            IndicatorContent::Spinner,
        );
        state
    }

    #[test]
    fn test_no_scene_without_host() {
        assert!(compose(&HudConfig::default(), &ProgressState::default()).is_none());
    }

    #[test]
    fn test_default_scene() {
        let scene = compose(&HudConfig::default(), &shown_state("Wait")).unwrap();
        assert!(matches!(
            scene.backdrop,
            Some(Backdrop::Shadow { alpha, .. }) if alpha == 0.7
        ));
        assert!(scene.center_panel.is_none());
        assert!(scene.slider.is_none());
        assert_eq!(
            scene.indicator,
            IndicatorVisual::Spinner {
                center: Point::new(150.0, 150.0)
            }
        );
        assert_eq!(scene.title.text, "Wait");
        assert_eq!(scene.title.color, Color::WHITE);
    }

    #[test]
    fn test_progress_updates_every_decoration() {
        let mut config = HudConfig::new(IndicatorType::CircularProgress, BackgroundStyle::BlurOverlay);
        config.show_percent_label = true;
        config.show_linear_slider = true;
        config.dynamic_overlay_opacity = true;
        config.show_center_panel = true;

        let mut state = shown_state("Loading");
        state.circular_active = true;
        state.record_progress(0.42);

        let scene = compose(&config, &state).unwrap();
        assert_eq!(scene.title.text, "Loading(42%)");

        let slider = scene.slider.unwrap();
        assert!((slider.fill.width - 0.42 * slider.track.width).abs() < 1e-4);

        match scene.indicator {
            IndicatorVisual::CircularArc { pie, fill, .. } => {
                assert!((pie.sweep_angle - 0.42 * std::f32::consts::TAU).abs() < 1e-5);
                assert_eq!(fill, geometry::PIE_FILL_ON_DARK);
            }
            other => panic!("unexpected indicator {other:?}"),
        }

        match scene.backdrop {
            Some(Backdrop::Blur { alpha, .. }) => assert!((alpha - 0.78).abs() < 1e-5),
            other => panic!("unexpected backdrop {other:?}"),
        }

        let panel = scene.center_panel.unwrap();
        assert_eq!(panel.rect.size(), Size::new(120.0, 120.0));
        assert_eq!(panel.style, BlurStyle::Light);
    }

    #[test]
    fn test_clear_style_has_no_backdrop() {
        let config = HudConfig::new(IndicatorType::Spinner, BackgroundStyle::None);
        assert!(compose(&config, &shown_state("")).unwrap().backdrop.is_none());
    }

    #[test]
    fn test_result_animation_uses_fixed_rect() {
        let mut config = HudConfig::new(IndicatorType::EmbeddedAnimation, BackgroundStyle::None);
        config.icon_width = 40.0;
        config.icon_height = 40.0;

        let asset = AssetHandle::placeholder(AssetKey::builtin("tick"));
        let mut state = shown_state("");
        state.content = IndicatorContent::EmbeddedAnimation(asset.clone());

        let loading = compose(&config, &state).unwrap();
        assert!(matches!(
            loading.indicator,
            IndicatorVisual::Animation { rect, .. } if rect.width == 40.0
        ));

        state.set_result(AssetPhase::Success, IndicatorContent::EmbeddedAnimation(asset));
        let done = compose(&config, &state).unwrap();
        assert!(matches!(
            done.indicator,
            IndicatorVisual::Animation { rect, .. } if rect.width == geometry::RESULT_ANIMATION_SIZE
        ));
    }
}
