//! Advanced filter state: trainer-account flag plus registration date range.
//!
//! DESIGN
//! ======
//! The date range is one composite value. Edits go through
//! [`DateRange::merge_edit`], which copies the current range and replaces a
//! single bound, so the two bounds can never be written by separate setters
//! that overwrite each other.
//!
//! Bound ordering (`start <= end`) is deliberately left to the caller.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use serde::{Deserialize, Serialize};

/// Tri-state filter on whether a student also holds a trainer account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainerAccountFilter {
    #[default]
    All,
    Yes,
    No,
}

impl TrainerAccountFilter {
    /// Every variant, in selector display order.
    pub const VARIANTS: [Self; 3] = [Self::All, Self::Yes, Self::No];

    /// Wire/select value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All students",
            Self::Yes => "Has trainer account",
            Self::No => "No trainer account",
        }
    }

    /// Parse a select value. Anything unrecognized falls back to [`Self::All`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "yes" => Self::Yes,
            "no" => Self::No,
            _ => Self::All,
        }
    }
}

/// Which bound of a [`DateRange`] an edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

/// Registration date range. An absent or empty bound is unbounded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// The reset value: both bounds present but empty.
    pub fn cleared() -> Self {
        Self::new(String::new(), String::new())
    }

    /// Raw value of a bound, `""` when absent.
    pub fn get(&self, field: DateField) -> &str {
        let value = match field {
            DateField::Start => &self.start,
            DateField::End => &self.end,
        };
        value.as_deref().unwrap_or("")
    }

    /// Copy of this range with one bound replaced.
    #[must_use]
    pub fn with_field(&self, field: DateField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = Some(value.into());
        match field {
            DateField::Start => next.start = value,
            DateField::End => next.end = value,
        }
        next
    }

    /// Build the range that results from editing `field` of `current`.
    ///
    /// A missing `current` behaves like a fully unbounded range. The other
    /// bound is carried over exactly, including whether it was absent.
    pub fn merge_edit(current: Option<&DateRange>, field: DateField, value: impl Into<String>) -> Self {
        current.cloned().unwrap_or_default().with_field(field, value)
    }

    /// Non-empty bound value, if any.
    pub fn bound(&self, field: DateField) -> Option<&str> {
        let raw = self.get(field).trim();
        (!raw.is_empty()).then_some(raw)
    }
}

/// Bound value for display, `""` when the range or bound is absent.
pub fn field_value(range: Option<&DateRange>, field: DateField) -> String {
    range.map(|r| r.get(field).to_owned()).unwrap_or_default()
}

/// Compound filter object a host page hands to its query layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedFilters {
    #[serde(default)]
    pub has_trainer_account: TrainerAccountFilter,
    #[serde(default)]
    pub date_range: DateRange,
}

impl AdvancedFilters {
    pub fn cleared() -> Self {
        Self {
            has_trainer_account: TrainerAccountFilter::All,
            date_range: DateRange::cleared(),
        }
    }

    /// True when no criterion narrows the result set.
    pub fn is_default(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of criteria that narrow the result set.
    pub fn active_count(&self) -> usize {
        usize::from(self.has_trainer_account != TrainerAccountFilter::All)
            + usize::from(self.date_range.bound(DateField::Start).is_some())
            + usize::from(self.date_range.bound(DateField::End).is_some())
    }

    /// Query parameters for the non-default criteria, in a stable order.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.has_trainer_account != TrainerAccountFilter::All {
            pairs.push(("hasTrainerAccount", self.has_trainer_account.as_str().to_owned()));
        }
        if let Some(start) = self.date_range.bound(DateField::Start) {
            pairs.push(("startDate", start.to_owned()));
        }
        if let Some(end) = self.date_range.bound(DateField::End) {
            pairs.push(("endDate", end.to_owned()));
        }
        pairs
    }
}
