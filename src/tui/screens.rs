//! Screen state structures for TUI

use chrono::{DateTime, Duration, Utc};
use crate::history::{missed_subset, seed_calls, Call};
use crate::tui::types::{CallTab, ConfirmOutcome, PendingConfirmation};

/// Default time a notification stays on screen
pub const DEFAULT_NOTIFICATION_MS: i64 = 3_000;

/// Transient status notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Text shown to the user
    pub message: String,
    /// When the notification appeared
    pub shown_at: DateTime<Utc>,
    /// How long it stays visible
    pub lifetime: Duration,
}

impl Notification {
    /// Create a notification shown now
    pub fn new(message: String, lifetime: Duration) -> Self {
        Self {
            message,
            shown_at: Utc::now(),
            lifetime,
        }
    }

    /// Check whether the notification should be hidden at `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.shown_at) >= self.lifetime
    }
}

/// Calls screen state
///
/// Owns the All and Missed lists. The Missed list is filtered from the All
/// list once at construction; afterwards each list only changes through
/// `confirm()`, so deleting a row on one tab leaves the other tab's list
/// untouched.
///
/// Destructive actions go through a pending confirmation: `request_*` opens
/// it, `confirm()` applies it, `cancel()` drops it. While it is open every
/// other interaction is ignored.
#[derive(Debug)]
pub struct CallsScreen {
    selected_tab: CallTab,
    all_calls: Vec<Call>,
    missed_calls: Vec<Call>,
    selected_index: usize,
    pending: Option<PendingConfirmation>,
    /// Current notification, if any
    pub notification: Option<Notification>,
    notification_lifetime: Duration,
}

impl CallsScreen {
    /// Create new calls screen over the sample history
    pub fn new() -> Self {
        Self::with_calls(seed_calls())
    }

    /// Create new calls screen over `calls`
    pub fn with_calls(calls: Vec<Call>) -> Self {
        let missed_calls = missed_subset(&calls);
        tracing::debug!(
            "Loaded {} calls ({} missed)",
            calls.len(),
            missed_calls.len()
        );

        Self {
            selected_tab: CallTab::All,
            all_calls: calls,
            missed_calls,
            selected_index: 0,
            pending: None,
            notification: None,
            notification_lifetime: Duration::milliseconds(DEFAULT_NOTIFICATION_MS),
        }
    }

    /// Override how long notifications stay visible
    pub fn with_notification_lifetime(mut self, lifetime: Duration) -> Self {
        self.notification_lifetime = lifetime;
        self
    }

    /// Currently selected tab
    pub fn selected_tab(&self) -> CallTab {
        self.selected_tab
    }

    /// Every call, in history order
    pub fn all_calls(&self) -> &[Call] {
        &self.all_calls
    }

    /// Missed calls, in history order
    pub fn missed_calls(&self) -> &[Call] {
        &self.missed_calls
    }

    /// List shown by the selected tab
    pub fn current_calls(&self) -> &[Call] {
        match self.selected_tab {
            CallTab::All => &self.all_calls,
            CallTab::Missed => &self.missed_calls,
        }
    }

    /// Row cursor within the current list
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Call under the row cursor
    pub fn selected_call(&self) -> Option<&Call> {
        self.current_calls().get(self.selected_index)
    }

    /// Confirmation waiting for an answer
    pub fn pending(&self) -> Option<PendingConfirmation> {
        self.pending
    }

    /// Whether a confirmation dialog is open
    pub fn is_modal(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the Missed tab label carries the "new missed calls" dot
    pub fn show_missed_indicator(&self) -> bool {
        !self.missed_calls.is_empty() && self.selected_tab != CallTab::Missed
    }

    /// Switch tab
    ///
    /// Resets the row cursor. Returns false while a dialog is open.
    pub fn select_tab(&mut self, tab: CallTab) -> bool {
        if self.is_modal() {
            return false;
        }
        if self.selected_tab != tab {
            tracing::debug!("Switched to {} tab", tab.label());
        }
        self.selected_tab = tab;
        self.selected_index = 0;
        true
    }

    /// Switch to the other tab
    pub fn toggle_tab(&mut self) -> bool {
        self.select_tab(self.selected_tab.toggled())
    }

    /// Move to next row
    pub fn next(&mut self) {
        let count = self.current_calls().len();
        if count > 0 && !self.is_modal() {
            self.selected_index = (self.selected_index + 1) % count;
        }
    }

    /// Move to previous row
    pub fn previous(&mut self) {
        let count = self.current_calls().len();
        if count > 0 && !self.is_modal() {
            if self.selected_index > 0 {
                self.selected_index -= 1;
            } else {
                self.selected_index = count - 1;
            }
        }
    }

    /// Put the row cursor on `index`; false if out of range
    pub fn select_row(&mut self, index: usize) -> bool {
        if self.is_modal() || index >= self.current_calls().len() {
            return false;
        }
        self.selected_index = index;
        true
    }

    /// Call a contact back
    ///
    /// Placeholder: only announces the call, no list changes.
    pub fn call_back(&mut self, call: &Call) -> bool {
        if self.is_modal() {
            return false;
        }
        tracing::info!("Calling back {}", call.name());
        self.notify(format!("Calling {}...", call.name()));
        true
    }

    /// Call back the contact under the row cursor
    pub fn call_back_selected(&mut self) -> bool {
        match self.selected_call().cloned() {
            Some(call) => self.call_back(&call),
            None => false,
        }
    }

    /// Call back the contact under the row cursor, only if that call was missed
    pub fn call_back_selected_missed(&mut self) -> bool {
        match self.selected_call().cloned() {
            Some(call) if call.is_missed() => self.call_back(&call),
            _ => false,
        }
    }

    /// Ask to delete row `index` of the current tab
    pub fn request_delete(&mut self, index: usize) -> bool {
        if self.is_modal() || index >= self.current_calls().len() {
            return false;
        }
        self.pending = Some(PendingConfirmation::DeleteCall {
            index,
            tab: self.selected_tab,
        });
        true
    }

    /// Ask to delete the row under the cursor
    pub fn request_delete_selected(&mut self) -> bool {
        self.request_delete(self.selected_index)
    }

    /// Ask to clear every missed call
    ///
    /// No dialog opens when there is nothing to clear.
    pub fn request_clear_all_missed(&mut self) -> bool {
        if self.is_modal() {
            return false;
        }
        if self.missed_calls.is_empty() {
            tracing::debug!("Clear all missed ignored: no missed calls");
            return false;
        }
        self.pending = Some(PendingConfirmation::ClearAllMissed);
        true
    }

    /// Apply the pending action and close the dialog
    ///
    /// Returns `None` when no dialog was open.
    pub fn confirm(&mut self) -> Option<ConfirmOutcome> {
        let pending = self.pending.take()?;

        let outcome = match pending {
            PendingConfirmation::DeleteCall { index, tab } => {
                let list = match tab {
                    CallTab::All => &mut self.all_calls,
                    CallTab::Missed => &mut self.missed_calls,
                };
                // Lists only change in confirm(), so the index is still valid
                debug_assert!(index < list.len(), "delete target out of range");
                let removed = list.remove(index);
                tracing::info!("Deleted call with {} from {} tab", removed.name(), tab.label());
                self.notify("Call deleted".to_string());
                ConfirmOutcome::Deleted {
                    tab,
                    name: removed.name().to_string(),
                }
            }
            PendingConfirmation::ClearAllMissed => {
                let before = self.all_calls.len();
                self.all_calls.retain(|call| !call.is_missed());
                self.missed_calls.clear();
                let removed = before - self.all_calls.len();
                tracing::info!("Cleared missed calls ({} removed from history)", removed);
                self.notify("All missed calls cleared".to_string());
                ConfirmOutcome::ClearedMissed { removed }
            }
        };

        self.clamp_selection();
        Some(outcome)
    }

    /// Close the dialog without changes
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Floating "new call" action; not wired to anything yet
    pub fn new_call(&mut self) {
        tracing::debug!("New call requested");
    }

    /// Hide the notification once its lifetime is over
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self
            .notification
            .as_ref()
            .is_some_and(|notification| notification.is_expired(now))
        {
            self.notification = None;
        }
    }

    fn notify(&mut self, message: String) {
        self.notification = Some(Notification::new(message, self.notification_lifetime));
    }

    fn clamp_selection(&mut self) {
        let count = self.current_calls().len();
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }
}

impl Default for CallsScreen {
    fn default() -> Self {
        Self::new()
    }
}
