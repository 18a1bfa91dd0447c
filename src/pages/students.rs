//! Student directory page hosting the dashboard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page plays the role of the parent application: it owns the selection
//! count, the advanced filters and the displayed record, and wires each
//! component's callbacks back into those signals. Data is local demo state;
//! fetching and persistence belong to the real host.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use leptos::prelude::*;

use crate::components::bulk_actions_toolbar::BulkActionsToolbar;
use crate::components::filter_panel::FilterPanel;
use crate::components::profile_header::ProfileHeader;
use crate::kit::UiKit;
use crate::state::filters::{AdvancedFilters, DateRange, TrainerAccountFilter};
use crate::state::student::{StudentRecord, StudentStatus};

const DEMO_SELECTION: usize = 3;

/// Directory page with profile header, filter panel and bulk toolbar.
#[component]
pub fn StudentsPage() -> impl IntoView {
    let selected = RwSignal::new(DEMO_SELECTION);
    let trainer = RwSignal::new(TrainerAccountFilter::default());
    let range = RwSignal::new(None::<DateRange>);
    let show_filters = RwSignal::new(false);
    let student = RwSignal::new(demo_student());
    let kit = UiKit::default();

    let on_status_change = Callback::new(move |status: StudentStatus| {
        leptos::logging::log!("bulk status change: {}", status.as_str());
        student.update(|s| apply_status(s, status));
    });
    let on_clear_selection = Callback::new(move |()| selected.set(0));
    let on_export = Callback::new(move |count: usize| {
        leptos::logging::log!("export of {count} students handed to host");
    });

    let set_trainer = Callback::new(move |value: TrainerAccountFilter| trainer.set(value));
    let set_range = Callback::new(move |value: DateRange| range.set(Some(value)));
    let on_close_filters = Callback::new(move |()| show_filters.set(false));

    let query = move || {
        query_preview(&AdvancedFilters {
            has_trainer_account: trainer.get(),
            date_range: range.get().unwrap_or_default(),
        })
    };

    let filter_kit = kit.clone();
    let toolbar_kit = kit.clone();

    view! {
        <div class="students-page">
            <ProfileHeader student=student kit=kit/>

            <div class="students-page__controls">
                <button
                    class="btn students-page__filter-toggle"
                    on:click=move |_| show_filters.update(|open| *open = !*open)
                >
                    "Advanced Filters"
                </button>
                <code class="students-page__query">{query}</code>
            </div>

            <Show when=move || show_filters.get()>
                <FilterPanel
                    has_trainer_account=trainer
                    set_has_trainer_account=set_trainer
                    date_range=range
                    set_date_range=set_range
                    on_close=on_close_filters
                    kit=filter_kit.clone()
                />
            </Show>

            <Show when=move || { selected.get() > 0 }>
                <BulkActionsToolbar
                    selected_count=selected
                    on_status_change=on_status_change
                    on_clear_selection=on_clear_selection
                    on_export=on_export
                    kit=toolbar_kit.clone()
                />
            </Show>
        </div>
    }
}

fn demo_student() -> StudentRecord {
    StudentRecord {
        id: "stu-1024".to_owned(),
        full_name: "Ada Lovelace".to_owned(),
        avatar: None,
        registration_date: Some("2023-09-01T08:00:00Z".to_owned()),
        last_login: None,
        status: Some(StudentStatus::Active.as_str().to_owned()),
        enrollment_count: Some(4),
    }
}

fn apply_status(student: &mut StudentRecord, status: StudentStatus) {
    student.status = Some(status.as_str().to_owned());
}

/// `key=value&...` preview of the active criteria.
fn query_preview(filters: &AdvancedFilters) -> String {
    if filters.is_default() {
        return "no filters".to_owned();
    }
    filters
        .to_query_pairs()
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}
