//! Core types for the Calls screen

/// Segmented-control tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallTab {
    /// Every call in the history
    #[default]
    All,
    /// Missed calls only
    Missed,
}

impl CallTab {
    /// Get all tabs in display order
    pub fn all() -> Vec<Self> {
        vec![Self::All, Self::Missed]
    }

    /// Get display label for tab
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All Calls",
            Self::Missed => "Missed",
        }
    }

    /// The other tab
    pub fn toggled(self) -> Self {
        match self {
            Self::All => Self::Missed,
            Self::Missed => Self::All,
        }
    }

    /// Empty-state title
    pub fn empty_title(&self) -> &str {
        match self {
            Self::All => "No calls yet",
            Self::Missed => "No missed calls",
        }
    }

    /// Empty-state subtitle
    pub fn empty_subtitle(&self) -> &str {
        match self {
            Self::All => "Your call history will appear here",
            Self::Missed => "All clear! No missed calls",
        }
    }
}

/// Destructive action waiting for the user's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingConfirmation {
    /// Remove one row of `tab`
    DeleteCall {
        /// Row index within the tab's list
        index: usize,
        /// Tab the row was picked from
        tab: CallTab,
    },
    /// Drop every missed call
    ClearAllMissed,
}

impl PendingConfirmation {
    /// Dialog title
    pub fn title(&self) -> &str {
        match self {
            Self::DeleteCall { .. } => "Delete Call",
            Self::ClearAllMissed => "Clear All Missed Calls",
        }
    }

    /// Dialog body
    pub fn message(&self) -> &str {
        match self {
            Self::DeleteCall { .. } => "Are you sure you want to delete this call record?",
            Self::ClearAllMissed => "Are you sure you want to clear all missed calls?",
        }
    }

    /// Label of the destructive button
    pub fn confirm_label(&self) -> &str {
        match self {
            Self::DeleteCall { .. } => "Delete",
            Self::ClearAllMissed => "Clear All",
        }
    }

    /// Label of the dismiss button
    pub fn cancel_label(&self) -> &str {
        "Cancel"
    }
}

/// What a confirmed dialog did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// A row was removed from the named tab's list
    Deleted {
        /// Tab whose list shrank
        tab: CallTab,
        /// Name on the removed record
        name: String,
    },
    /// Missed calls were cleared; `removed` counts records dropped from the All list
    ClearedMissed {
        /// Records dropped from the All list
        removed: usize,
    },
}
