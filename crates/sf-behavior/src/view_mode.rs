//! Product listing grid/list switch.

pub const SELECTED_CLASSES: [&str; 2] = ["bg-primary", "text-white"];
pub const UNSELECTED_CLASSES: [&str; 2] = ["text-gray-400", "hover:bg-gray-100"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

impl ViewMode {
    /// Full class attribute for the product container in this mode.
    pub fn container_classes(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-8",
            ViewMode::List => "grid grid-cols-1 gap-4",
        }
    }

    pub fn other(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_are_exclusive_with_fixed_layouts() {
        assert_eq!(ViewMode::Grid.other(), ViewMode::List);
        assert_eq!(ViewMode::List.other(), ViewMode::Grid);
        assert!(ViewMode::Grid.container_classes().contains("xl:grid-cols-4"));
        assert_eq!(ViewMode::List.container_classes(), "grid grid-cols-1 gap-4");
    }
}
