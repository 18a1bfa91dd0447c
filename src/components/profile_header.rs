//! Header block on the student profile page.
//!
//! Pure projection of one [`StudentRecord`]: no local state, no callbacks.

#[cfg(test)]
#[path = "profile_header_test.rs"]
mod profile_header_test;

use leptos::prelude::*;

use crate::kit::UiKit;
use crate::state::display::{DisplayConfig, use_display_config};
use crate::state::student::StudentRecord;
use crate::util::dates::format_date_or_missing;

/// Student profile header.
#[component]
pub fn ProfileHeader(#[prop(into)] student: Signal<StudentRecord>, #[prop(optional)] kit: UiKit) -> impl IntoView {
    let config = use_display_config();
    let details = Memo::new(move |_| student.with(|s| ProfileDetails::from_record(s, &config)));

    let avatar = move || {
        student.with(|s| match s.avatar_url() {
            Some(url) => view! { <img class="profile-header__avatar" src=url.to_owned() alt=s.full_name.clone()/> }
                .into_any(),
            None => view! { <span class="profile-header__avatar profile-header__avatar--initials">{s.initials()}</span> }
                .into_any(),
        })
    };

    view! {
        <header class="profile-header">
            {avatar}
            <div class="profile-header__identity">
                <h1 class="profile-header__name">{move || student.with(|s| s.full_name.clone())}</h1>
                <span class="profile-header__id">{move || student.with(|s| format!("ID: {}", s.id))}</span>
                <span class=move || details.get().status_class>{move || details.get().status_text}</span>
            </div>
            <dl class="profile-header__meta">
                <div class="profile-header__meta-item">
                    <dt>{kit.icon("calendar")} "Registered"</dt>
                    <dd>{move || details.get().registered}</dd>
                </div>
                <div class="profile-header__meta-item">
                    <dt>{kit.icon("clock")} "Last login"</dt>
                    <dd>{move || details.get().last_login}</dd>
                </div>
                <div class="profile-header__meta-item">
                    <dt>{kit.icon("book")} "Enrollments"</dt>
                    <dd>{move || details.get().enrollments}</dd>
                </div>
            </dl>
        </header>
    }
}

/// Display strings derived from a record.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ProfileDetails {
    status_class: &'static str,
    status_text: String,
    registered: String,
    last_login: String,
    enrollments: u32,
}

impl ProfileDetails {
    fn from_record(student: &StudentRecord, config: &DisplayConfig) -> Self {
        let status_text = student
            .status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map_or_else(|| config.missing_text.clone(), str::to_owned);
        Self {
            status_class: student.tone().css_class(),
            status_text,
            registered: format_date_or_missing(student.registration_date.as_deref(), config),
            last_login: format_date_or_missing(student.last_login.as_deref(), config),
            enrollments: student.enrollments(),
        }
    }
}
