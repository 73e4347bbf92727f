//! HUD lifecycle state machine
//!
//! `Idle → Shown → (Updating)* → Dismissing → Removed`, reusable after
//! `Removed`. Every operation is fire-and-forget: work is queued on the
//! [`Scheduler`] and observed through host mutations or the completion
//! callback.
//!
//! Known gap: a `show` issued while a delayed removal is pending does not
//! cancel that removal, so the overlay disappears when the timer fires.
//! Callers that need the overlay to survive must cancel the
//! [`DismissHandle`] returned by `dismiss` themselves.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use super::assets::{AssetLoader, AssetPhase, DismissResult, IndicatorContent};
use super::config::{BackgroundStyle, HudConfig, IndicatorType};
use super::geometry::HostGeometry;
use super::host::{HudId, SharedHost};
use super::scene::{self, HudScene};
use super::scheduler::Scheduler;
use super::state::{LifecyclePhase, ProgressState};

/// Called once the overlay has been detached
pub type CompletionCallback = Box<dyn FnOnce() + 'static>;

/// Cancels the pending removal of one `dismiss` call
#[derive(Debug, Clone, Default)]
pub struct DismissHandle {
    cancelled: Rc<Cell<bool>>,
}

impl DismissHandle {
    /// Cancel the removal if it has not run yet. The overlay stays attached
    /// and the completion callback is dropped without being called.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

struct HudInner {
    id: HudId,
    config: HudConfig,
    state: ProgressState,
    scheduler: Rc<dyn Scheduler>,
    loader: Rc<dyn AssetLoader>,
}

impl HudInner {
    /// Recompute indicator visuals from the current options, keeping the
    /// phase the content was resolved for
    fn restyle(&mut self) {
        if !self.state.attached {
            return;
        }
        self.state.circular_active = self.config.indicator_type == IndicatorType::CircularProgress;
        let phase = self.state.content_phase;
        self.state.content = IndicatorContent::for_phase(phase, &self.config, self.loader.as_ref());
        tracing::debug!("HUD {:?} restyled as {}", self.id, self.config.indicator_type);
    }
}

/// Overlay progress HUD.
///
/// A clonable handle to one instance; clones share state. Not `Send`:
/// every call belongs on the UI thread that drives the scheduler.
#[derive(Clone)]
pub struct ProgressHud {
    inner: Rc<RefCell<HudInner>>,
}

impl std::fmt::Debug for ProgressHud {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ProgressHud")
            .field("id", &inner.id)
            .field("phase", &inner.state.phase)
            .field("progress", &inner.state.progress)
            .finish()
    }
}

impl ProgressHud {
    pub fn new(
        indicator_type: IndicatorType,
        background_style: BackgroundStyle,
        scheduler: Rc<dyn Scheduler>,
        loader: Rc<dyn AssetLoader>,
    ) -> Self {
        Self::with_config(
            HudConfig::new(indicator_type, background_style),
            scheduler,
            loader,
        )
    }

    pub fn with_config(
        config: HudConfig,
        scheduler: Rc<dyn Scheduler>,
        loader: Rc<dyn AssetLoader>,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HudInner {
                id: HudId::next(),
                config,
                state: ProgressState::default(),
                scheduler,
                loader,
            })),
        }
    }

    /// Adjust options in place; untouched fields keep their values.
    /// An attached HUD re-resolves its indicator right away.
    pub fn configure(&self, update: impl FnOnce(&mut HudConfig)) {
        let mut inner = self.inner.borrow_mut();
        update(&mut inner.config);
        inner.restyle();
    }

    /// Replace all options
    pub fn set_config(&self, config: HudConfig) {
        let mut inner = self.inner.borrow_mut();
        inner.config = config;
        inner.restyle();
    }

    pub fn config(&self) -> HudConfig {
        self.inner.borrow().config.clone()
    }

    pub fn id(&self) -> HudId {
        self.inner.borrow().id
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.inner.borrow().state.phase
    }

    pub fn progress(&self) -> Option<f32> {
        self.inner.borrow().state.progress
    }

    pub fn content(&self) -> IndicatorContent {
        self.inner.borrow().state.content.clone()
    }

    /// Current visuals, `None` unless attached and in a visible phase
    pub fn scene(&self) -> Option<HudScene> {
        let inner = self.inner.borrow();
        if !inner.state.on_screen() {
            return None;
        }
        scene::compose(&inner.config, &inner.state)
    }

    fn scheduler(&self) -> Rc<dyn Scheduler> {
        Rc::clone(&self.inner.borrow().scheduler)
    }

    /// Show the HUD over `host`.
    ///
    /// Host geometry, title and loading content are captured now; styling
    /// and attachment are queued. Showing onto a host that already lists
    /// this instance leaves a single attachment.
    pub fn show(&self, host: Option<&SharedHost>, title: &str, block_interaction: bool) {
        let Some(host) = host else {
            tracing::debug!("HUD show without a host, ignoring");
            return;
        };

        let geometry = {
            let host = host.borrow();
            HostGeometry::new(host.frame(), host.center())
        };

        {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            if inner.state.phase == LifecyclePhase::Dismissing {
                tracing::warn!(
                    "HUD {:?} shown while a removal is pending; the pending removal still runs",
                    inner.id
                );
            }
            let content =
                IndicatorContent::for_phase(AssetPhase::Loading, &inner.config, inner.loader.as_ref());
            inner.state.prepare(geometry, title, content);
        }

        host.borrow_mut().set_interaction_enabled(!block_interaction);

        let hud = self.clone();
        let host = Rc::clone(host);
        self.scheduler()
            .run_soon(Box::new(move || hud.attach(&host)));
    }

    fn attach(&self, host: &SharedHost) {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        inner.state.attached = true;
        inner.state.circular_active = inner.config.indicator_type == IndicatorType::CircularProgress;

        if host.borrow().contains(inner.id) {
            tracing::debug!("HUD {:?} already attached, skipping", inner.id);
        } else {
            host.borrow_mut().add_child(inner.id);
            tracing::info!(
                "HUD {:?} attached ({}, {})",
                inner.id,
                inner.config.indicator_type,
                inner.config.background_style
            );
        }
        // A dismiss issued before this ran still owns the phase
        if inner.state.phase != LifecyclePhase::Dismissing {
            inner.state.phase = LifecyclePhase::Shown;
        }
    }

    /// Report progress in [0, 1]; out-of-range values are clamped.
    /// Ignored unless the HUD is attached to `host` when the update runs.
    pub fn set_progress(&self, host: Option<&SharedHost>, value: f32) {
        let Some(host) = host else {
            return;
        };

        let hud = self.clone();
        let host = Rc::clone(host);
        self.scheduler()
            .run_soon(Box::new(move || hud.apply_progress(&host, value)));
    }

    fn apply_progress(&self, host: &SharedHost, value: f32) {
        let mut inner = self.inner.borrow_mut();
        if !host.borrow().contains(inner.id) || !inner.state.phase.accepts_progress() {
            tracing::debug!(
                "HUD {:?} not attached ({:?}), dropping progress {}",
                inner.id,
                inner.state.phase,
                value
            );
            return;
        }
        inner.state.record_progress(value);
        tracing::debug!("HUD {:?} progress {:?}", inner.id, inner.state.progress);
    }

    /// Resolve the result visual, then detach after `delay`.
    ///
    /// The asset swap is queued before the removal timer starts; the timer
    /// is measured from this call. Removal re-enables host interaction,
    /// detaches every attachment of this instance and finally calls
    /// `on_complete`, exactly once. Returns `None` when there is no host.
    pub fn dismiss(
        &self,
        host: Option<&SharedHost>,
        result: DismissResult,
        delay: Duration,
        on_complete: Option<CompletionCallback>,
    ) -> Option<DismissHandle> {
        let Some(host) = host else {
            tracing::debug!("HUD dismiss without a host, ignoring");
            return None;
        };

        {
            let mut inner = self.inner.borrow_mut();
            inner.state.phase = LifecyclePhase::Dismissing;
            tracing::info!("HUD {:?} dismissing with {:?} after {:?}", inner.id, result, delay);
        }

        let scheduler = self.scheduler();

        let hud = self.clone();
        scheduler.run_soon(Box::new(move || hud.swap_result(result)));

        let handle = DismissHandle::default();
        let token = handle.clone();
        let hud = self.clone();
        let host = Rc::clone(host);
        scheduler.run_after(
            delay,
            Box::new(move || {
                if token.is_cancelled() {
                    hud.resume_after_cancel();
                    return;
                }
                hud.remove_from(&host);
                if let Some(on_complete) = on_complete {
                    on_complete();
                }
            }),
        );

        Some(handle)
    }

    fn swap_result(&self, result: DismissResult) {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        let phase = AssetPhase::from(result);
        let content = IndicatorContent::for_phase(phase, &inner.config, inner.loader.as_ref());
        inner.state.set_result(phase, content);
    }

    fn remove_from(&self, host: &SharedHost) {
        let mut inner = self.inner.borrow_mut();
        {
            let mut host = host.borrow_mut();
            host.set_interaction_enabled(true);
            host.remove_child(inner.id);
        }
        inner.state.phase = LifecyclePhase::Removed;
        inner.state.attached = false;
        inner.state.circular_active = false;
        tracing::info!("HUD {:?} removed", inner.id);
    }

    fn resume_after_cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        tracing::debug!("HUD {:?} removal cancelled", inner.id);
        if inner.state.phase == LifecyclePhase::Dismissing {
            inner.state.phase = if !inner.state.attached {
                LifecyclePhase::Removed
            } else if inner.state.progress.is_some() {
                LifecyclePhase::Updating
            } else {
                LifecyclePhase::Shown
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::assets::{
        AnimatedFrame, AssetError, AssetHandle, AssetKey, AssetKind, BUILTIN_SUCCESS_IMAGE,
        NoAssets,
    };
    use crate::hud::host::{HostView, OverlayHost};
    use crate::hud::scene::IndicatorVisual;
    use crate::hud::scheduler::FrameScheduler;
    use iced::widget::image;
    use iced::{Point, Rectangle, Size};

    /// Loader that succeeds for every name
    struct AnyAsset;

    impl AssetLoader for AnyAsset {
        fn load(&self, key: &AssetKey) -> Result<AssetHandle, AssetError> {
            let frame = AnimatedFrame {
                handle: image::Handle::from_rgba(1, 1, vec![255u8; 4]),
                width: 1,
                height: 1,
                delay: Duration::from_millis(40),
            };
            Ok(AssetHandle::new(key.clone(), vec![frame]))
        }
    }

    struct Fixture {
        scheduler: Rc<FrameScheduler>,
        host: Rc<RefCell<OverlayHost>>,
        shared: SharedHost,
    }

    impl Fixture {
        fn new() -> Self {
            let scheduler = Rc::new(FrameScheduler::new());
            let host = OverlayHost::shared(Rectangle::new(Point::ORIGIN, Size::new(320.0, 480.0)));
            let shared: SharedHost = host.clone();
            Self {
                scheduler,
                host,
                shared,
            }
        }

        fn hud(&self, indicator_type: IndicatorType) -> ProgressHud {
            ProgressHud::new(
                indicator_type,
                BackgroundStyle::ShadowOverlay,
                self.scheduler.clone(),
                Rc::new(AnyAsset),
            )
        }

        fn attached(&self) -> usize {
            self.host.borrow().children().len()
        }
    }

    fn completion_counter() -> (Rc<Cell<u32>>, CompletionCallback) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        (count, Box::new(move || inner.set(inner.get() + 1)))
    }

    #[test]
    fn test_show_is_queued_then_attaches_once() {
        let fx = Fixture::new();
        let hud = fx.hud(IndicatorType::Spinner);

        hud.show(Some(&fx.shared), "Loading", false);
        assert_eq!(hud.phase(), LifecyclePhase::Idle);
        assert_eq!(fx.attached(), 0);

        fx.scheduler.run_until_idle();
        assert_eq!(hud.phase(), LifecyclePhase::Shown);
        assert_eq!(fx.host.borrow().children(), &[hud.id()]);
    }

    #[test]
    fn test_double_show_attaches_once() {
        let fx = Fixture::new();
        let hud = fx.hud(IndicatorType::Spinner);

        hud.show(Some(&fx.shared), "One", false);
        hud.show(Some(&fx.shared), "Two", false);
        fx.scheduler.run_until_idle();
        assert_eq!(fx.attached(), 1);

        hud.show(Some(&fx.shared), "Three", false);
        fx.scheduler.run_until_idle();
        assert_eq!(fx.attached(), 1);
        assert_eq!(hud.scene().unwrap().title.text, "Three");
    }

    #[test]
    fn test_block_interaction() {
        let fx = Fixture::new();
        let hud = fx.hud(IndicatorType::Spinner);

        hud.show(Some(&fx.shared), "", true);
        assert!(!fx.host.borrow().interaction_enabled());

        hud.dismiss(Some(&fx.shared), DismissResult::Success, Duration::ZERO, None);
        fx.scheduler.advance(Duration::ZERO);
        assert!(fx.host.borrow().interaction_enabled());
    }

    #[test]
    fn test_missing_host_is_a_no_op() {
        let fx = Fixture::new();
        let hud = fx.hud(IndicatorType::Spinner);

        hud.show(None, "Loading", true);
        hud.set_progress(None, 0.5);
        assert!(hud.dismiss(None, DismissResult::Failure, Duration::ZERO, None).is_none());

        assert!(!fx.scheduler.has_pending());
        assert_eq!(hud.phase(), LifecyclePhase::Idle);
        assert!(hud.scene().is_none());
    }

    #[test]
    fn test_progress_before_attach_is_dropped() {
        let fx = Fixture::new();
        let hud = fx.hud(IndicatorType::CircularProgress);

        hud.set_progress(Some(&fx.shared), 0.3);
        fx.scheduler.run_until_idle();
        assert_eq!(hud.progress(), None);
    }

    #[test]
    fn test_progress_updates_as_a_unit() {
        let fx = Fixture::new();
        let hud = fx.hud(IndicatorType::CircularProgress);
        hud.configure(|config| {
            config.show_percent_label = true;
            config.show_linear_slider = true;
        });

        hud.show(Some(&fx.shared), "Loading", false);
        hud.set_progress(Some(&fx.shared), 0.42);
        fx.scheduler.run_until_idle();

        assert_eq!(hud.phase(), LifecyclePhase::Updating);
        let scene = hud.scene().unwrap();
        assert_eq!(scene.title.text, "Loading(42%)");
        let slider = scene.slider.unwrap();
        assert!((slider.fill.width - 0.42 * slider.track.width).abs() < 1e-4);
        assert!(matches!(
            scene.indicator,
            IndicatorVisual::CircularArc { pie, .. }
                if (pie.sweep_angle - 0.42 * std::f32::consts::TAU).abs() < 1e-5
        ));

        hud.set_progress(Some(&fx.shared), 4.0);
        fx.scheduler.run_until_idle();
        assert_eq!(hud.progress(), Some(1.0));
    }

    #[test]
    fn test_dismiss_with_delay() {
        let fx = Fixture::new();
        let hud = fx.hud(IndicatorType::Spinner);
        let (count, on_complete) = completion_counter();

        hud.show(Some(&fx.shared), "Loading", true);
        fx.scheduler.run_until_idle();

        hud.dismiss(
            Some(&fx.shared),
            DismissResult::Success,
            Duration::from_millis(200),
            Some(on_complete),
        );
        assert_eq!(hud.phase(), LifecyclePhase::Dismissing);

        fx.scheduler.advance(Duration::from_millis(199));
        assert_eq!(fx.attached(), 1);
        assert_eq!(count.get(), 0);

        fx.scheduler.advance(Duration::from_millis(1));
        assert_eq!(fx.attached(), 0);
        assert!(fx.host.borrow().interaction_enabled());
        assert_eq!(hud.phase(), LifecyclePhase::Removed);
        assert_eq!(count.get(), 1);

        fx.scheduler.advance(Duration::from_secs(5));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_callback_observes_detached_overlay() {
        let fx = Fixture::new();
        let hud = fx.hud(IndicatorType::Spinner);

        let seen = Rc::new(Cell::new(None));
        let cb_host = fx.host.clone();
        let cb_hud = hud.clone();
        let cb_seen = Rc::clone(&seen);
        let on_complete: CompletionCallback = Box::new(move || {
            cb_seen.set(Some((
                cb_host.borrow().contains(cb_hud.id()),
                cb_hud.phase(),
            )));
        });

        hud.show(Some(&fx.shared), "", false);
        hud.dismiss(Some(&fx.shared), DismissResult::Failure, Duration::ZERO, Some(on_complete));
        fx.scheduler.advance(Duration::ZERO);

        assert_eq!(seen.get(), Some((false, LifecyclePhase::Removed)));
    }

    #[test]
    fn test_result_asset_swapped_before_removal() {
        let fx = Fixture::new();
        let hud = fx.hud(IndicatorType::ImageLoop);
        hud.configure(|config| config.loading_image = Some("A".to_string()));

        hud.show(Some(&fx.shared), "", false);
        fx.scheduler.run_until_idle();
        assert_eq!(
            hud.content().asset().unwrap().key(),
            &AssetKey::custom("A", AssetKind::Image)
        );

        hud.dismiss(Some(&fx.shared), DismissResult::Success, Duration::from_millis(500), None);
        fx.scheduler.run_until_idle();

        assert_eq!(fx.attached(), 1);
        assert_eq!(
            hud.content().asset().unwrap().key(),
            &AssetKey::builtin(BUILTIN_SUCCESS_IMAGE)
        );
        assert!(matches!(hud.scene().unwrap().indicator, IndicatorVisual::Image { .. }));
    }

    #[test]
    fn test_reuse_after_removal() {
        let fx = Fixture::new();
        let hud = fx.hud(IndicatorType::Spinner);

        hud.show(Some(&fx.shared), "First", false);
        hud.set_progress(Some(&fx.shared), 0.8);
        hud.dismiss(Some(&fx.shared), DismissResult::Success, Duration::ZERO, None);
        fx.scheduler.advance(Duration::ZERO);
        assert_eq!(hud.phase(), LifecyclePhase::Removed);
        assert!(hud.scene().is_none());

        hud.show(Some(&fx.shared), "Second", false);
        fx.scheduler.run_until_idle();
        assert_eq!(hud.phase(), LifecyclePhase::Shown);
        assert_eq!(hud.progress(), None);
        assert_eq!(fx.attached(), 1);
    }

    #[test]
    fn test_reshow_does_not_cancel_pending_removal() {
        let fx = Fixture::new();
        let hud = fx.hud(IndicatorType::Spinner);
        let (count, on_complete) = completion_counter();

        hud.show(Some(&fx.shared), "", false);
        hud.dismiss(
            Some(&fx.shared),
            DismissResult::Success,
            Duration::from_millis(300),
            Some(on_complete),
        );
        fx.scheduler.advance(Duration::from_millis(100));

        hud.show(Some(&fx.shared), "Again", false);
        fx.scheduler.advance(Duration::from_millis(100));
        assert_eq!(fx.attached(), 1);

        fx.scheduler.advance(Duration::from_millis(100));
        assert_eq!(fx.attached(), 0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_cancelled_dismiss_keeps_overlay() {
        let fx = Fixture::new();
        let hud = fx.hud(IndicatorType::Spinner);
        let (count, on_complete) = completion_counter();

        hud.show(Some(&fx.shared), "", true);
        hud.set_progress(Some(&fx.shared), 0.5);
        let handle = hud
            .dismiss(
                Some(&fx.shared),
                DismissResult::Success,
                Duration::from_millis(300),
                Some(on_complete),
            )
            .unwrap();
        fx.scheduler.run_until_idle();

        handle.cancel();
        fx.scheduler.advance(Duration::from_secs(1));

        assert_eq!(fx.attached(), 1);
        assert_eq!(count.get(), 0);
        assert_eq!(hud.phase(), LifecyclePhase::Updating);
        assert!(!fx.host.borrow().interaction_enabled());
    }

    #[test]
    fn test_independent_dismiss_timers() {
        let fx = Fixture::new();
        let hud = fx.hud(IndicatorType::Spinner);
        let (first, first_cb) = completion_counter();
        let (second, second_cb) = completion_counter();

        hud.show(Some(&fx.shared), "", false);
        hud.dismiss(Some(&fx.shared), DismissResult::Success, Duration::from_millis(400), Some(first_cb));
        hud.dismiss(Some(&fx.shared), DismissResult::Failure, Duration::from_millis(100), Some(second_cb));

        fx.scheduler.advance(Duration::from_millis(100));
        assert_eq!((first.get(), second.get()), (0, 1));
        assert_eq!(fx.attached(), 0);

        fx.scheduler.advance(Duration::from_millis(300));
        assert_eq!((first.get(), second.get()), (1, 1));
    }

    #[test]
    fn test_removal_clears_duplicate_attachments() {
        let fx = Fixture::new();
        let hud = fx.hud(IndicatorType::Spinner);

        hud.show(Some(&fx.shared), "", false);
        fx.scheduler.run_until_idle();
        fx.host.borrow_mut().add_child(hud.id());
        assert_eq!(fx.attached(), 2);

        hud.dismiss(Some(&fx.shared), DismissResult::Success, Duration::ZERO, None);
        fx.scheduler.advance(Duration::ZERO);
        assert_eq!(fx.attached(), 0);
    }

    #[test]
    fn test_host_geometry_cached_at_show() {
        let fx = Fixture::new();
        let hud = ProgressHud::new(
            IndicatorType::Spinner,
            BackgroundStyle::None,
            fx.scheduler.clone(),
            Rc::new(NoAssets),
        );

        hud.show(Some(&fx.shared), "", false);
        fx.scheduler.run_until_idle();
        fx.host
            .borrow_mut()
            .set_frame(Rectangle::new(Point::ORIGIN, Size::new(1000.0, 1000.0)));

        let scene = hud.scene().unwrap();
        assert_eq!(scene.frame.size(), Size::new(320.0, 480.0));
        assert_eq!(
            scene.indicator,
            IndicatorVisual::Spinner {
                center: Point::new(160.0, 240.0)
            }
        );
    }

    #[test]
    fn test_dismiss_after_removal_draws_nothing() {
        let fx = Fixture::new();
        let hud = fx.hud(IndicatorType::Spinner);
        let (count, on_complete) = completion_counter();

        hud.show(Some(&fx.shared), "Loading", false);
        hud.dismiss(Some(&fx.shared), DismissResult::Success, Duration::ZERO, None);
        fx.scheduler.advance(Duration::ZERO);
        assert_eq!(hud.phase(), LifecyclePhase::Removed);

        hud.dismiss(
            Some(&fx.shared),
            DismissResult::Failure,
            Duration::from_secs(1),
            Some(on_complete),
        );
        fx.scheduler.run_until_idle();
        assert_eq!(fx.attached(), 0);
        assert!(hud.scene().is_none());

        fx.scheduler.advance(Duration::from_secs(1));
        assert_eq!(hud.phase(), LifecyclePhase::Removed);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_cancelled_dismiss_of_detached_hud_stays_removed() {
        let fx = Fixture::new();
        let hud = fx.hud(IndicatorType::Spinner);

        hud.show(Some(&fx.shared), "", false);
        hud.dismiss(Some(&fx.shared), DismissResult::Success, Duration::ZERO, None);
        fx.scheduler.advance(Duration::ZERO);

        let handle = hud
            .dismiss(Some(&fx.shared), DismissResult::Success, Duration::from_millis(100), None)
            .unwrap();
        handle.cancel();
        fx.scheduler.advance(Duration::from_millis(100));

        assert_eq!(hud.phase(), LifecyclePhase::Removed);
        assert!(hud.scene().is_none());
    }

    #[test]
    fn test_options_changed_while_shown_restyle_indicator() {
        let fx = Fixture::new();
        let hud = fx.hud(IndicatorType::Spinner);

        hud.show(Some(&fx.shared), "", false);
        fx.scheduler.run_until_idle();

        let mut config = hud.config();
        config.indicator_type = IndicatorType::CircularProgress;
        hud.set_config(config);
        hud.set_progress(Some(&fx.shared), 0.5);
        fx.scheduler.run_until_idle();

        assert!(matches!(
            hud.scene().unwrap().indicator,
            IndicatorVisual::CircularArc { pie, .. }
                if (pie.sweep_angle - std::f32::consts::PI).abs() < 1e-5
        ));

        hud.configure(|config| config.indicator_type = IndicatorType::ImageLoop);
        assert_eq!(
            hud.content().asset().unwrap().key(),
            &AssetKey::builtin(crate::hud::assets::BUILTIN_LOADING_IMAGE)
        );
        assert!(matches!(hud.scene().unwrap().indicator, IndicatorVisual::Image { .. }));
    }

    #[test]
    fn test_options_changed_before_show_wait_for_show() {
        let fx = Fixture::new();
        let hud = fx.hud(IndicatorType::Spinner);

        hud.configure(|config| config.indicator_type = IndicatorType::ImageLoop);
        assert_eq!(hud.content(), IndicatorContent::Spinner);

        hud.show(Some(&fx.shared), "", false);
        fx.scheduler.run_until_idle();
        assert!(matches!(hud.content(), IndicatorContent::ImageAsset(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_on_tokio_scheduler() {
        use crate::hud::scheduler::TokioScheduler;

        let local = tokio::task::LocalSet::new();
        let host = OverlayHost::shared(Rectangle::new(Point::ORIGIN, Size::new(100.0, 100.0)));
        let shared: SharedHost = host.clone();
        let (count, on_complete) = completion_counter();

        local
            .run_until(async {
                let hud = ProgressHud::new(
                    IndicatorType::Spinner,
                    BackgroundStyle::ShadowOverlay,
                    Rc::new(TokioScheduler),
                    Rc::new(NoAssets),
                );
                hud.show(Some(&shared), "", true);
                hud.show(Some(&shared), "", true);
                tokio::time::sleep(Duration::from_millis(1)).await;
                assert_eq!(host.borrow().children().len(), 1);

                hud.dismiss(
                    Some(&shared),
                    DismissResult::Success,
                    Duration::from_millis(200),
                    Some(on_complete),
                );
                tokio::time::sleep(Duration::from_millis(250)).await;
            })
            .await;

        assert!(host.borrow().children().is_empty());
        assert!(host.borrow().interaction_enabled());
        assert_eq!(count.get(), 1);
    }
}
