#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// UI chrome state: sidebar collapse and color theme.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub sidebar_collapsed: bool,
}
