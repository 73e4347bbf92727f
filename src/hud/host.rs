//! Host view seam
//!
//! The HUD never owns the view it overlays. It reads the host's frame and
//! center at `show`, and registers itself by identity in the host's child
//! list instead of relying on runtime type inspection.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use iced::{Point, Rectangle};

/// Identity of a HUD instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HudId(u64);

impl HudId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        HudId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A surface the HUD can attach to
pub trait HostView {
    fn frame(&self) -> Rectangle;

    fn center(&self) -> Point {
        self.frame().center()
    }

    /// HUD instances currently attached, in attach order
    fn children(&self) -> &[HudId];

    fn add_child(&mut self, id: HudId);

    /// Detach every occurrence of `id`
    fn remove_child(&mut self, id: HudId);

    fn interaction_enabled(&self) -> bool;

    fn set_interaction_enabled(&mut self, enabled: bool);

    fn contains(&self, id: HudId) -> bool {
        self.children().contains(&id)
    }
}

/// Host shared between the caller and queued HUD tasks
pub type SharedHost = Rc<RefCell<dyn HostView>>;

/// Plain host view backed by a child list
#[derive(Debug, Clone)]
pub struct OverlayHost {
    frame: Rectangle,
    children: Vec<HudId>,
    interaction_enabled: bool,
}

impl OverlayHost {
    pub fn new(frame: Rectangle) -> Self {
        Self {
            frame,
            children: Vec::new(),
            interaction_enabled: true,
        }
    }

    pub fn shared(frame: Rectangle) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(frame)))
    }

    /// Resize the host. Shown HUDs keep the geometry captured at `show`.
    pub fn set_frame(&mut self, frame: Rectangle) {
        self.frame = frame;
    }
}

impl HostView for OverlayHost {
    fn frame(&self) -> Rectangle {
        self.frame
    }

    fn children(&self) -> &[HudId] {
        &self.children
    }

    fn add_child(&mut self, id: HudId) {
        self.children.push(id);
    }

    fn remove_child(&mut self, id: HudId) {
        self.children.retain(|child| *child != id);
    }

    fn interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    fn set_interaction_enabled(&mut self, enabled: bool) {
        self.interaction_enabled = enabled;
    }
}
