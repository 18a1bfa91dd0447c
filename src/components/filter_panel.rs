//! Advanced filter panel: trainer-account selector plus registration range.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host owns the filter values and passes setters in. Each control
//! reports its change upward immediately; the panel keeps no copy.
//!
//! The two date inputs edit one composite range. Each edit reads the range as
//! it is at event time and hands a merged copy to `set_date_range`, so an edit
//! to one bound never clobbers the other.

#[cfg(test)]
#[path = "filter_panel_test.rs"]
mod filter_panel_test;

use leptos::prelude::*;

use crate::kit::{ButtonSize, ButtonVariant, InputKind, InputSpec, PressSpec, SelectOption, SelectSpec, UiKit};
use crate::state::filters::{AdvancedFilters, DateField, DateRange, TrainerAccountFilter, field_value};

/// Advanced filter panel.
#[component]
pub fn FilterPanel(
    #[prop(into)] has_trainer_account: Signal<TrainerAccountFilter>,
    set_has_trainer_account: Callback<TrainerAccountFilter>,
    #[prop(into)] date_range: Signal<Option<DateRange>>,
    set_date_range: Callback<DateRange>,
    on_close: Callback<()>,
    #[prop(optional)] kit: UiKit,
) -> impl IntoView {
    let handlers = FilterHandlers {
        date_range,
        set_has_trainer_account,
        set_date_range,
        on_close,
    };

    let active_count = move || {
        date_range.with(|range| {
            AdvancedFilters {
                has_trainer_account: has_trainer_account.get(),
                date_range: range.clone().unwrap_or_default(),
            }
            .active_count()
        })
    };

    let trainer_select = kit.select(SelectSpec {
        label: "Trainer account",
        value: Signal::derive(move || has_trainer_account.get().as_str().to_owned()),
        options: trainer_options(),
        on_change: Callback::new(move |raw: String| handlers.select_trainer(&raw)),
    });

    let start_input = kit.input(InputSpec {
        label: "Registered from",
        kind: InputKind::Date,
        value: Signal::derive(move || date_range.with(|r| field_value(r.as_ref(), DateField::Start))),
        on_input: Callback::new(move |value: String| handlers.edit_date(DateField::Start, value)),
    });

    let end_input = kit.input(InputSpec {
        label: "Registered to",
        kind: InputKind::Date,
        value: Signal::derive(move || date_range.with(|r| field_value(r.as_ref(), DateField::End))),
        on_input: Callback::new(move |value: String| handlers.edit_date(DateField::End, value)),
    });

    let reset_button = kit.button(PressSpec {
        variant: ButtonVariant::Secondary,
        size: ButtonSize::Small,
        title: None,
        on_press: Callback::new(move |()| handlers.reset()),
        content: view! { {kit.icon("reset")} "Clear Advanced Filters" }.into_any(),
    });

    let close_button = kit.button(PressSpec {
        variant: ButtonVariant::Ghost,
        size: ButtonSize::Small,
        title: Some("Close filters"),
        on_press: Callback::new(move |()| handlers.close()),
        content: kit.icon("x"),
    });

    view! {
        <section class="filter-panel" aria-label="Advanced filters">
            <header class="filter-panel__header">
                <h3 class="filter-panel__title">"Advanced Filters"</h3>
                <Show when=move || { active_count() > 0 }>
                    <span class="filter-panel__badge">{move || format!("{} active", active_count())}</span>
                </Show>
                <span class="filter-panel__spacer"></span>
                {close_button}
            </header>
            <div class="filter-panel__fields">
                {trainer_select}
                {start_input}
                {end_input}
            </div>
            <footer class="filter-panel__footer">{reset_button}</footer>
        </section>
    }
}

fn trainer_options() -> Vec<SelectOption> {
    TrainerAccountFilter::VARIANTS
        .into_iter()
        .map(|variant| SelectOption {
            value: variant.as_str(),
            label: variant.label(),
        })
        .collect()
}

/// Event handlers for one panel instance. Only [`FilterHandlers::close`]
/// reaches `on_close`.
#[derive(Clone, Copy)]
struct FilterHandlers {
    date_range: Signal<Option<DateRange>>,
    set_has_trainer_account: Callback<TrainerAccountFilter>,
    set_date_range: Callback<DateRange>,
    on_close: Callback<()>,
}

impl FilterHandlers {
    fn select_trainer(self, raw: &str) {
        self.set_has_trainer_account.run(TrainerAccountFilter::parse(raw));
    }

    /// Merge one bound edit into the range as it is right now.
    fn edit_date(self, field: DateField, value: String) {
        let current = self.date_range.get_untracked();
        self.set_date_range.run(DateRange::merge_edit(current.as_ref(), field, value));
    }

    /// Reset both filters to their defaults, trainer flag first.
    fn reset(self) {
        let cleared = AdvancedFilters::cleared();
        self.set_has_trainer_account.run(cleared.has_trainer_account);
        self.set_date_range.run(cleared.date_range);
    }

    fn close(self) {
        self.on_close.run(());
    }
}
