//! Application state definitions

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use iced::{Point, Rectangle, Size};
use progress_hud::features::GifAssetLoader;
use progress_hud::hud::{
    DismissHandle, DismissResult, FrameScheduler, HudConfig, HudScene, OverlayHost, ProgressHud,
    SharedHost,
};
use progress_hud::ui::animation::OverlayFade;
use progress_hud::ui::widgets::Toast;

/// Initial window size, also the host frame until the first resize
pub const WINDOW_SIZE: Size = Size::new(1024.0, 720.0);

const DEFAULT_DISMISS_DELAY: Duration = Duration::from_millis(1200);

/// Simulated unit of work driving the HUD
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Job {
    pub progress: f32,
    /// Added on every tick
    pub step: f32,
    pub outcome: DismissResult,
}

impl Job {
    pub fn new(outcome: DismissResult) -> Self {
        Self {
            progress: 0.0,
            step: 0.015,
            outcome,
        }
    }

    /// Advance one tick; returns true once complete
    pub fn advance(&mut self) -> bool {
        self.progress = (self.progress + self.step).min(1.0);
        self.progress >= 1.0
    }
}

pub struct App {
    pub scheduler: Rc<FrameScheduler>,
    pub host: Rc<RefCell<OverlayHost>>,
    pub hud: ProgressHud,
    /// Shared with the HUD; its cache is dropped when settings reload
    pub loader: Rc<GifAssetLoader>,
    /// Options being edited; pushed to the HUD on every change
    pub config: HudConfig,

    pub task_title: String,
    pub block_interaction: bool,
    pub simulate_failure: bool,
    pub dismiss_delay: Duration,
    pub job: Option<Job>,
    pub pending_dismiss: Option<DismissHandle>,
    /// Results delivered by dismiss completion callbacks
    pub finished: Rc<RefCell<Vec<DismissResult>>>,

    pub fade: OverlayFade,
    /// Last scene on screen, kept so the overlay can fade out
    pub last_scene: Option<HudScene>,
    pub toast: Option<Toast>,
    pub started: Instant,
    pub elapsed: Duration,
}

impl App {
    pub fn with_config(config: HudConfig) -> Self {
        let scheduler = Rc::new(FrameScheduler::new());
        let loader = Rc::new(GifAssetLoader::from_project_dirs());
        let hud = ProgressHud::with_config(config.clone(), scheduler.clone(), loader.clone());

        Self {
            scheduler,
            host: OverlayHost::shared(Rectangle::new(Point::ORIGIN, WINDOW_SIZE)),
            hud,
            loader,
            config,
            task_title: "Uploading".to_string(),
            block_interaction: true,
            simulate_failure: false,
            dismiss_delay: DEFAULT_DISMISS_DELAY,
            job: None,
            pending_dismiss: None,
            finished: Rc::new(RefCell::new(Vec::new())),
            fade: OverlayFade::new(),
            last_scene: None,
            toast: None,
            started: Instant::now(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn shared_host(&self) -> SharedHost {
        self.host.clone()
    }

    /// Controls are locked while a blocking HUD is up
    pub fn controls_enabled(&self) -> bool {
        use progress_hud::hud::HostView;
        self.host.borrow().interaction_enabled()
    }

    pub fn dismiss_pending(&self) -> bool {
        self.pending_dismiss
            .as_ref()
            .is_some_and(|handle| !handle.is_cancelled())
            && self.hud.phase() == progress_hud::hud::LifecyclePhase::Dismissing
    }
}
