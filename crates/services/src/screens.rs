//! Per-screen UI state, owned by whichever screen instance renders it.

use serde::{Deserialize, Serialize};

/// Tabs on the exams screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamsTab {
    #[default]
    Upcoming,
    Calendar,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExamsScreenState {
    tab: ExamsTab,
    add_modal_open: bool,
}

impl ExamsScreenState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tab(&self) -> ExamsTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: ExamsTab) {
        self.tab = tab;
    }

    #[must_use]
    pub fn is_add_modal_open(&self) -> bool {
        self.add_modal_open
    }

    pub fn open_add_modal(&mut self) {
        self.add_modal_open = true;
    }

    pub fn close_add_modal(&mut self) {
        self.add_modal_open = false;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoursesScreenState {
    add_modal_open: bool,
}

impl CoursesScreenState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_add_modal_open(&self) -> bool {
        self.add_modal_open
    }

    pub fn open_add_modal(&mut self) {
        self.add_modal_open = true;
    }

    pub fn close_add_modal(&mut self) {
        self.add_modal_open = false;
    }
}
