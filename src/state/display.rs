//! Display configuration shared through Leptos context.
//!
//! `App` provides a [`DisplayConfig`]; components that render dates read it
//! with [`use_display_config`] and fall back to the defaults when mounted
//! without a provider (tests, third-party hosts).

use leptos::prelude::*;

/// Locale used when rendering dates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateLocale {
    #[default]
    EnUs,
    EnGb,
    Iso,
}

impl DateLocale {
    /// chrono format pattern for this locale.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::EnUs => "%-m/%-d/%Y",
            Self::EnGb => "%d/%m/%Y",
            Self::Iso => "%Y-%m-%d",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    pub date_locale: DateLocale,
    /// Text shown in place of a missing or unparseable value.
    pub missing_text: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_locale: DateLocale::EnUs,
            missing_text: "N/A".to_owned(),
        }
    }
}

/// Read the provided display config, or the defaults when none is provided.
pub fn use_display_config() -> DisplayConfig {
    use_context::<DisplayConfig>().unwrap_or_default()
}
