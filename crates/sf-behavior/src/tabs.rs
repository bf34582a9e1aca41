//! Dashboard tab selection.

pub const TAB_SELECTOR: &str = ".dashboard-tab";
pub const PANEL_SELECTOR: &str = ".dashboard-content";
pub const TARGET_ATTRIBUTE: &str = "data-tab";

pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";

/// Class swaps for a tab's first icon (`svg`) and label (`span`):
/// `(inactive, active)`.
pub const ICON_CLASSES: (&str, &str) = ("text-gray-400", "text-primary");
pub const LABEL_CLASSES: (&str, &str) = ("text-gray-600", "text-primary");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelection {
    pub active_tab: usize,
    pub visible_panel: Option<usize>,
}

/// Resolve a click on tab `clicked`. `targets[i]` is the `data-tab` value of
/// tab `i`; `panel_ids[j]` is the id of panel `j`. A tab without a target, or
/// whose target matches no panel, leaves every panel hidden.
pub fn select<S: AsRef<str>>(targets: &[Option<S>], panel_ids: &[S], clicked: usize) -> TabSelection {
    let target: Option<&str> = targets
        .get(clicked)
        .and_then(Option::as_ref)
        .map(|t| t.as_ref());
    let visible_panel = target.and_then(|target| {
        panel_ids
            .iter()
            .position(|id| !target.is_empty() && id.as_ref() == target)
    });
    TabSelection {
        active_tab: clicked,
        visible_panel,
    }
}
