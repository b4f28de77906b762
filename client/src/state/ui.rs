//! Local UI chrome state (active dashboard tab).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the data regions so tab
//! switching can evolve independently of the fetched records.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs on the dashboard page; activating one loads its region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Emails,
    Breaches,
    Settings,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [Self::Emails, Self::Breaches, Self::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Self::Emails => "Monitored Emails",
            Self::Breaches => "Breaches",
            Self::Settings => "Scheduler Settings",
        }
    }

    /// DOM id of the tab button.
    pub fn button_id(self) -> &'static str {
        match self {
            Self::Emails => "emails-tab",
            Self::Breaches => "breaches-tab",
            Self::Settings => "settings-tab",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: DashboardTab,
}

impl UiState {
    /// Switch tabs. Returns `true` when the tab actually changed, which is
    /// when its region should load.
    pub fn activate(&mut self, tab: DashboardTab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        self.active_tab = tab;
        true
    }
}
