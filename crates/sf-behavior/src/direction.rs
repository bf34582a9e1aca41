//! Left-to-right / right-to-left layout preference.
//!
//! The preference is a JSON boolean under [`STORAGE_KEY`], so the stored text
//! is exactly `"true"` or `"false"`. The RTL mode is an approximation applied
//! through inline styles on flex and horizontal-spacing containers.

use crate::storage::{self, KeyValueStore};
use tracing::debug;

pub const STORAGE_KEY: &str = "rtl";
pub const DIR_ATTRIBUTE: &str = "dir";

pub const FLEX_SELECTOR: &str = ".flex";
pub const COLUMN_CLASS: &str = "flex-col";
pub const SPACING_SELECTOR: &str = "[class*=\"space-x-\"]";
pub const SPACING_PREFIX: &str = "space-x-";

/// Toggle feedback: pressed scale, rest scale, and how long the press shows.
pub const PULSE: (&str, &str, u32) = ("scale(0.9)", "scale(1)", 150);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Read the document `dir` attribute; anything but `rtl` is left-to-right.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("rtl") => Direction::Rtl,
            _ => Direction::Ltr,
        }
    }

    pub fn attribute(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Direction::Ltr => Direction::Rtl,
            Direction::Rtl => Direction::Ltr,
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }
}

/// Only a stored `true` restores right-to-left; everything else leaves the
/// document untouched.
pub fn load_preference(store: &dyn KeyValueStore) -> Option<Direction> {
    storage::load_json::<bool>(store, STORAGE_KEY).and_then(|rtl| rtl.then_some(Direction::Rtl))
}

pub fn save_preference(store: &dyn KeyValueStore, direction: Direction) {
    storage::save_json(store, STORAGE_KEY, &direction.is_rtl());
}

/// Flip `current`, persist the result, and return it.
pub fn toggle(store: &dyn KeyValueStore, current: Direction) -> Direction {
    let next = current.toggled();
    save_preference(store, next);
    debug!(from = current.attribute(), to = next.attribute(), "layout direction toggled");
    next
}

/// What to do with one inline style property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleOverride {
    Set(&'static str),
    Clear,
    Keep,
}

/// `flex-direction` override for an element matched by [`FLEX_SELECTOR`].
pub fn flex_override(class_name: &str, direction: Direction) -> StyleOverride {
    match direction {
        Direction::Rtl if has_class(class_name, COLUMN_CLASS) => StyleOverride::Keep,
        Direction::Rtl => StyleOverride::Set("row-reverse"),
        Direction::Ltr => StyleOverride::Clear,
    }
}

/// `direction` override for an element matched by [`SPACING_SELECTOR`].
///
/// The selector is a substring match, so an element like `md:space-x-4` is
/// matched but carries no token that starts with the prefix and is kept.
pub fn spacing_override(class_name: &str, direction: Direction) -> StyleOverride {
    match direction {
        Direction::Rtl
            if class_name
                .split_whitespace()
                .any(|token| token.starts_with(SPACING_PREFIX)) =>
        {
            StyleOverride::Set("rtl")
        }
        Direction::Rtl => StyleOverride::Keep,
        Direction::Ltr => StyleOverride::Clear,
    }
}

fn has_class(class_name: &str, class: &str) -> bool {
    class_name.split_whitespace().any(|token| token == class)
}
