//! Read-only student record and the status vocabulary around it.

#[cfg(test)]
#[path = "student_test.rs"]
mod student_test;

use serde::{Deserialize, Serialize};

/// A student as handed over by the host page. Never mutated here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: String,
    pub full_name: String,
    pub avatar: Option<String>,
    /// Registration timestamp (RFC 3339, `YYYY-MM-DD`, or epoch millis).
    pub registration_date: Option<String>,
    pub last_login: Option<String>,
    /// Free-form lifecycle status such as `"Active"` or `"Inactive"`.
    pub status: Option<String>,
    pub enrollment_count: Option<u32>,
}

impl StudentRecord {
    pub fn enrollments(&self) -> u32 {
        self.enrollment_count.unwrap_or(0)
    }

    /// Avatar URL, ignoring blank strings.
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }

    /// Up to two upper-cased initials from the name, `"?"` when blank.
    pub fn initials(&self) -> String {
        let initials: String = self
            .full_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() { "?".to_owned() } else { initials }
    }

    pub fn tone(&self) -> StatusTone {
        status_tone(self.status.as_deref())
    }
}

/// Status values the bulk toolbar can assign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudentStatus {
    Active,
    Inactive,
}

impl StudentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

/// Two-way status styling. There is no neutral tone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Positive,
    Negative,
}

impl StatusTone {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "status-badge status-badge--positive",
            Self::Negative => "status-badge status-badge--negative",
        }
    }
}

/// `Positive` iff the status is `"active"` ignoring case and padding.
pub fn status_tone(status: Option<&str>) -> StatusTone {
    match status {
        Some(raw) if raw.trim().eq_ignore_ascii_case("active") => StatusTone::Positive,
        _ => StatusTone::Negative,
    }
}
