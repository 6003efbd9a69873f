//! Call record and call type

use serde::{Deserialize, Serialize};

/// Kind of call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallType {
    /// One-to-one audio call
    Voice,
    /// One-to-one video call
    Video,
    /// Call with several participants
    Group,
}

impl CallType {
    /// Get display label for call type
    pub fn label(&self) -> &str {
        match self {
            Self::Voice => "Voice",
            Self::Video => "Video",
            Self::Group => "Group",
        }
    }
}

/// A single call-history entry
///
/// Records are immutable once built: fields are only reachable through
/// accessors, and the optional parts are set with the `with_*` builders
/// before the record is handed to a list.
///
/// # Example
/// ```rust
/// use chatify_calls::history::{Call, CallType};
///
/// let call = Call::new("Team Alpha", "Dec 11, 11:20 AM", "Dec 11", false, false, CallType::Group, "23:18")
///     .as_group()
///     .with_initials("TA");
///
/// assert!(call.is_group());
/// assert_eq!(call.avatar_label(), "TA");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    name: String,
    time: String,
    date: String,
    is_missed: bool,
    is_outgoing: bool,
    call_type: CallType,
    duration: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    is_group: bool,
    #[serde(default)]
    initials: Option<String>,
}

impl Call {
    /// Create a new call record
    ///
    /// # Arguments
    /// * `time` - Display-formatted time, e.g. "Dec 12, 2:45 PM"
    /// * `date` - Display label, e.g. "Today"
    /// * `duration` - Free-form display text, e.g. "5:32" or "Missed"
    pub fn new(
        name: impl Into<String>,
        time: impl Into<String>,
        date: impl Into<String>,
        is_missed: bool,
        is_outgoing: bool,
        call_type: CallType,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            time: time.into(),
            date: date.into(),
            is_missed,
            is_outgoing,
            call_type,
            duration: duration.into(),
            image_url: None,
            is_group: false,
            initials: None,
        }
    }

    /// Attach an avatar image URL
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Attach explicit avatar initials
    pub fn with_initials(mut self, initials: impl Into<String>) -> Self {
        self.initials = Some(initials.into());
        self
    }

    /// Mark the record as a group call entry
    pub fn as_group(mut self) -> Self {
        self.is_group = true;
        self
    }

    /// Caller or group name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display-formatted time
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Display date label
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Whether the call was missed
    pub fn is_missed(&self) -> bool {
        self.is_missed
    }

    /// Whether the call was placed by the user
    pub fn is_outgoing(&self) -> bool {
        self.is_outgoing
    }

    /// Kind of call
    pub fn call_type(&self) -> CallType {
        self.call_type
    }

    /// Free-form duration text
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Avatar image URL, if any
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Whether this entry is a group call
    pub fn is_group(&self) -> bool {
        self.is_group
    }

    /// Explicit avatar initials, if any
    pub fn initials(&self) -> Option<&str> {
        self.initials.as_deref()
    }

    /// Short label drawn in place of the avatar image
    ///
    /// Explicit initials win; otherwise the first letters of the first two
    /// words of the name, uppercased. Empty names give "?".
    pub fn avatar_label(&self) -> String {
        if let Some(initials) = &self.initials {
            return initials.clone();
        }

        let label: String = self
            .name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect();

        if label.is_empty() {
            "?".to_string()
        } else {
            label
        }
    }
}
