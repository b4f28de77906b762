//! Single shared status alert.
//!
//! DESIGN
//! ======
//! One alert region exists; a new message replaces the previous one instead
//! of queueing. Each `show` bumps `seq` so a pending auto-dismiss timer only
//! hides the alert it was started for.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

/// Delay before success/info alerts hide themselves.
pub const AUTO_DISMISS_MS: u64 = 3000;

/// Visual category of an alert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
    Warning,
    #[default]
    Info,
}

impl AlertKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Danger => "alert-danger",
            Self::Warning => "alert-warning",
            Self::Info => "alert-info",
        }
    }

    /// Danger and warning alerts persist until replaced.
    pub fn auto_dismisses(self) -> bool {
        matches!(self, Self::Success | Self::Info)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertState {
    pub kind: AlertKind,
    pub message: String,
    pub visible: bool,
    pub seq: u64,
}

impl AlertState {
    /// Replace the current alert and return its sequence number.
    pub fn show(&mut self, kind: AlertKind, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.kind = kind;
        self.message = message.into();
        self.visible = true;
        self.seq
    }

    /// Hide the alert if it is still the one identified by `seq`.
    pub fn dismiss_if_current(&mut self, seq: u64) -> bool {
        if self.seq != seq || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}
