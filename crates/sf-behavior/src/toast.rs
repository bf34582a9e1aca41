//! Toast notification lifecycle.
//!
//! A toast is created off-screen, slides in after [`SLIDE_IN_DELAY_MS`],
//! starts sliding out at [`HOLD_MS`] after creation and is removed
//! [`SLIDE_OUT_MS`] later.

use sf_scheduler::{SharedScheduler, after};
use std::rc::Rc;

pub const BASE_CLASSES: &str = "fixed top-4 right-4 z-50 px-6 py-4 rounded-lg shadow-lg text-white transform translate-x-full transition-transform duration-300";
pub const OFFSCREEN_CLASS: &str = "translate-x-full";

pub const SLIDE_IN_DELAY_MS: u32 = 100;
pub const HOLD_MS: u32 = 3000;
pub const SLIDE_OUT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl ToastKind {
    /// Unknown kinds render as info.
    pub fn parse(kind: &str) -> Self {
        match kind {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Info,
        }
    }

    pub fn color_class(self) -> &'static str {
        match self {
            ToastKind::Info => "bg-blue-600",
            ToastKind::Success => "bg-green-600",
            ToastKind::Error => "bg-red-600",
            ToastKind::Warning => "bg-yellow-600",
        }
    }
}

/// The rendered toast as seen by the lifecycle.
pub trait ToastSurface {
    fn slide_in(&self);
    fn slide_out(&self);
    fn remove(&self);
}

/// Schedule the full show/hold/hide/remove sequence for an attached toast.
pub fn run(scheduler: &SharedScheduler, surface: Rc<dyn ToastSurface>) {
    let entering = surface.clone();
    after(&**scheduler, SLIDE_IN_DELAY_MS, move || entering.slide_in());

    let later = scheduler.clone();
    after(&**scheduler, HOLD_MS, move || {
        surface.slide_out();
        after(&*later, SLIDE_OUT_MS, move || surface.remove());
    });
}
