//! Scroll reveal and card hover lift.

use std::fmt;

pub const REVEAL_SELECTOR: &str = ".animate-on-scroll";
pub const REVEALED_CLASS: &str = "animate-fade-in-up";
pub const HOVER_SELECTOR: &str = ".product-card, .card-shadow";

pub const LIFTED: &str = "translateY(-4px)";
pub const RESTING: &str = "translateY(0)";

/// Viewport-intersection settings for reveal targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    /// Pixels trimmed from the bottom of the viewport before an element counts.
    pub bottom_offset_px: u32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_offset_px: 50,
        }
    }
}

impl ObserverOptions {
    pub fn root_margin(&self) -> RootMargin {
        RootMargin(self.bottom_offset_px)
    }
}

/// CSS `rootMargin` text for a bottom-only offset.
pub struct RootMargin(u32);

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            f.write_str("0px 0px 0px 0px")
        } else {
            write!(f, "0px 0px -{}px 0px", self.0)
        }
    }
}
