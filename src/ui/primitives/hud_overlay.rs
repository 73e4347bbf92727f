//! HUD overlay primitive
//!
//! Renders a [`HudScene`] with iced's Canvas. The scene is already laid out
//! in host coordinates; this module only turns it into paths.
//!
//! # Design
//!
//! Blur backdrops are approximated with a tinted fill of the blur tone.
//! Animated assets advance with the `elapsed` clock supplied by the caller,
//! so the primitive itself holds no timing state.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::time::Duration;

use iced::widget::Canvas;
use iced::widget::canvas::{self, Frame, Geometry, Path, Program, Stroke, Text};
use iced::{Color, Element, Fill, Pixels, Point, Radians, Rectangle, Renderer, Theme, Vector, mouse};

use crate::hud::geometry::{GUIDE_RING_COLOR, PieSlice, SLIDER_FILL_RADIUS, SLIDER_TRACK_RADIUS};
use crate::hud::{AssetHandle, Backdrop, HudScene, IndicatorVisual, TitleVisual};
use crate::ui::theme;

/// Base font size for the title before shrink-to-fit
pub const TITLE_FONT_SIZE: f32 = 16.0;

const SPINNER_RADIUS: f32 = 18.0;
const SPINNER_STROKE: f32 = 3.0;
const SPINNER_SWEEP: f32 = TAU * 0.75;
/// One full turn per second
const SPINNER_PERIOD: Duration = Duration::from_secs(1);
const SPINNER_COLOR: Color = Color::WHITE;

/// Average glyph advance as a fraction of font size
const GLYPH_ADVANCE: f32 = 0.55;

#[derive(Debug, Clone, Default)]
pub struct HudOverlay {
    pub scene: Option<HudScene>,
    /// Multiplies every color's alpha (fade in / out)
    pub opacity: f32,
    /// Clock driving the spinner and animated assets
    pub elapsed: Duration,
}

impl HudOverlay {
    pub fn new(scene: Option<HudScene>) -> Self {
        Self {
            scene,
            opacity: 1.0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    fn fade(&self, color: Color, alpha: f32) -> Color {
        Color {
            a: color.a * alpha * self.opacity,
            ..color
        }
    }

    fn draw_scene(&self, frame: &mut Frame, scene: &HudScene) {
        match &scene.backdrop {
            Some(Backdrop::Shadow { rect, color, alpha }) => {
                frame.fill_rectangle(rect.position(), rect.size(), self.fade(*color, *alpha));
            }
            Some(Backdrop::Blur { rect, style, alpha }) => {
                frame.fill_rectangle(
                    rect.position(),
                    rect.size(),
                    self.fade(theme::blur_tint(*style), *alpha),
                );
            }
            None => {}
        }

        if let Some(panel) = &scene.center_panel {
            let path = Path::rounded_rectangle(
                panel.rect.position(),
                panel.rect.size(),
                panel.corner_radius.into(),
            );
            frame.fill(&path, self.fade(theme::blur_tint(panel.style), panel.alpha));
        }

        match &scene.indicator {
            IndicatorVisual::Spinner { center } => self.draw_spinner(frame, *center),
            IndicatorVisual::Image { rect, asset } | IndicatorVisual::Animation { rect, asset } => {
                self.draw_asset(frame, *rect, asset);
            }
            IndicatorVisual::CircularArc { ring, pie, fill } => {
                frame.fill(
                    &Path::circle(ring.center, ring.radius),
                    self.fade(GUIDE_RING_COLOR, 1.0),
                );

                if pie.is_full() {
                    frame.fill(&Path::circle(pie.center, pie.radius), self.fade(*fill, 1.0));
                } else if !pie.is_empty() {
                    // A stroke as wide as the radius, centered halfway out,
                    // covers the wedge from the center to the rim
                    let wedge = Path::new(|builder| builder.arc(pie_arc(pie)));
                    frame.stroke(
                        &wedge,
                        Stroke::default()
                            .with_width(pie.radius)
                            .with_color(self.fade(*fill, 1.0)),
                    );
                }
            }
        }

        if let Some(slider) = &scene.slider {
            let track = Path::rounded_rectangle(
                slider.track.position(),
                slider.track.size(),
                SLIDER_TRACK_RADIUS.into(),
            );
            frame.fill(&track, self.fade(theme::SLIDER_TRACK, 1.0));

            if slider.fill.width > 0.0 {
                let fill = Path::rounded_rectangle(
                    slider.fill.position(),
                    slider.fill.size(),
                    SLIDER_FILL_RADIUS.into(),
                );
                frame.fill(&fill, self.fade(theme::SLIDER_FILL, 1.0));
            }
        }

        self.draw_title(frame, &scene.title);
    }

    fn draw_spinner(&self, frame: &mut Frame, center: Point) {
        let start = spinner_angle(self.elapsed);
        let arc = Path::new(|builder| {
            builder.arc(canvas::path::Arc {
                center,
                radius: SPINNER_RADIUS,
                start_angle: Radians(start),
                end_angle: Radians(start + SPINNER_SWEEP),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(SPINNER_STROKE)
                .with_color(self.fade(SPINNER_COLOR, 1.0)),
        );
    }

    fn draw_asset(&self, frame: &mut Frame, rect: Rectangle, asset: &AssetHandle) {
        match asset.frame_at(self.elapsed) {
            Some(current) => {
                frame.draw_image(rect, canvas::Image::new(current.handle.clone()));
            }
            // Nothing decoded at all
            None => self.draw_spinner(frame, rect.center()),
        }
    }

    fn draw_title(&self, frame: &mut Frame, title: &TitleVisual) {
        if title.text.is_empty() || title.rect.width <= 0.0 {
            return;
        }

        frame.fill_text(Text {
            content: title.text.clone(),
            position: title.rect.center(),
            color: self.fade(title.color, 1.0),
            size: Pixels(fit_font_size(&title.text, title.rect.width, title.min_scale)),
            align_x: iced::alignment::Horizontal::Center.into(),
            align_y: iced::alignment::Vertical::Center,
            ..Text::default()
        });
    }
}

impl<Message> Program<Message> for HudOverlay {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let Some(scene) = &self.scene else {
            return Vec::new();
        };
        if self.opacity <= 0.0 {
            return Vec::new();
        }

        let mut frame = Frame::new(renderer, bounds.size());
        // Scene coordinates are relative to the host frame
        frame.translate(Vector::new(-scene.frame.x, -scene.frame.y));
        self.draw_scene(&mut frame, scene);

        vec![frame.into_geometry()]
    }
}

/// Start angle of the spinner arc at `elapsed`
fn spinner_angle(elapsed: Duration) -> f32 {
    let period = SPINNER_PERIOD.as_secs_f32();
    let turn = (elapsed.as_secs_f32() % period) / period;
    turn * TAU - FRAC_PI_2
}

/// Centerline of the stroke that paints `pie`
fn pie_arc(pie: &PieSlice) -> canvas::path::Arc {
    canvas::path::Arc {
        center: pie.center,
        radius: pie.radius / 2.0,
        start_angle: Radians(pie.start_angle),
        end_angle: Radians(pie.end_angle()),
    }
}

/// Font size that fits `text` on one line within `width`, never smaller
/// than `min_scale` of the base size
pub fn fit_font_size(text: &str, width: f32, min_scale: f32) -> f32 {
    let estimated = text.chars().count() as f32 * TITLE_FONT_SIZE * GLYPH_ADVANCE;
    if estimated <= width || estimated <= 0.0 {
        return TITLE_FONT_SIZE;
    }
    let scale = (width / estimated).clamp(min_scale, 1.0);
    TITLE_FONT_SIZE * scale
}

/// Full-size overlay canvas
pub fn view_hud_overlay<'a, Message: 'a>(overlay: HudOverlay) -> Element<'a, Message> {
    Canvas::new(overlay).width(Fill).height(Fill).into()
}
