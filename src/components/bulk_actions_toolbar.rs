//! Toolbar shown while students are selected in the directory table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host owns the selection. This component reads its size, and forwards
//! status changes, clear-selection and export intent through callbacks. Its
//! only local state is whether the status menu is open.

#[cfg(test)]
#[path = "bulk_actions_toolbar_test.rs"]
mod bulk_actions_toolbar_test;

use leptos::prelude::*;

use crate::kit::{ButtonSize, ButtonVariant, PressSpec, UiKit};
use crate::state::bulk_menu::{BulkMenu, BulkStatusAction};
use crate::state::student::StudentStatus;
use crate::util::dismiss::{is_dismiss_key, use_dismiss_region};

/// Bulk status/export/clear toolbar.
///
/// `on_export` is the export extension point. Without it, export only logs.
#[component]
pub fn BulkActionsToolbar(
    #[prop(into)] selected_count: Signal<usize>,
    on_status_change: Callback<StudentStatus>,
    on_clear_selection: Callback<()>,
    #[prop(optional)] on_export: Option<Callback<usize>>,
    #[prop(optional)] kit: UiKit,
) -> impl IntoView {
    let menu = RwSignal::new(BulkMenu::default());
    let menu_open = Signal::derive(move || menu.get().is_open());
    let region = NodeRef::<leptos::html::Div>::new();
    let handlers = ToolbarHandlers {
        menu,
        selected_count,
        on_status_change,
        on_clear_selection,
        on_export,
    };

    use_dismiss_region(region, menu_open, Callback::new(move |()| handlers.dismiss()));

    let on_choose = Callback::new(move |action: BulkStatusAction| handlers.choose(action));

    let toggle_button = kit.button(PressSpec {
        variant: ButtonVariant::Secondary,
        size: ButtonSize::Small,
        title: Some("Change status of selected students"),
        on_press: Callback::new(move |()| handlers.toggle()),
        content: view! { "Change Status" {kit.icon("chevron-down")} }.into_any(),
    });

    let export_button = kit.button(PressSpec {
        variant: ButtonVariant::Secondary,
        size: ButtonSize::Small,
        title: Some("Export selected students"),
        on_press: Callback::new(move |()| {
            handlers.export();
        }),
        content: view! { {kit.icon("download")} "Export" }.into_any(),
    });

    let clear_button = kit.button(PressSpec {
        variant: ButtonVariant::Ghost,
        size: ButtonSize::Small,
        title: None,
        on_press: Callback::new(move |()| handlers.clear()),
        content: view! { {kit.icon("x")} "Clear Selection" }.into_any(),
    });

    let menu_kit = kit.clone();
    let menu_view = move || menu_open.get().then(|| status_menu(&menu_kit, on_choose));

    view! {
        <div class="bulk-actions" role="toolbar">
            <span class="bulk-actions__count">{move || selection_label(selected_count.get())}</span>
            <div
                class="bulk-actions__status"
                node_ref=region
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if is_dismiss_key(&ev.key()) {
                        handlers.dismiss();
                    }
                }
            >
                {toggle_button}
                {menu_view}
            </div>
            <span class="bulk-actions__spacer"></span>
            {export_button}
            {clear_button}
        </div>
    }
}

/// Event handlers shared by every control of one toolbar instance.
#[derive(Clone, Copy)]
struct ToolbarHandlers {
    menu: RwSignal<BulkMenu>,
    selected_count: Signal<usize>,
    on_status_change: Callback<StudentStatus>,
    on_clear_selection: Callback<()>,
    on_export: Option<Callback<usize>>,
}

impl ToolbarHandlers {
    fn toggle(self) {
        self.menu.update(BulkMenu::toggle);
    }

    /// Close from an outside press or Escape. Runs no callback.
    fn dismiss(self) {
        self.menu.update(BulkMenu::dismiss);
    }

    /// Report the chosen status first, then close the menu.
    fn choose(self, action: BulkStatusAction) {
        let mut next = self.menu.get_untracked();
        let status = next.choose(action);
        self.on_status_change.run(status);
        self.menu.set(next);
    }

    /// Forward clear intent. The menu is left as it is.
    fn clear(self) {
        self.on_clear_selection.run(());
    }

    fn export(self) -> ExportOutcome {
        let count = self.selected_count.get_untracked();
        dispatch_export(count, self.on_export.map(|cb| move |n| cb.run(n)))
    }
}

fn status_menu(kit: &UiKit, on_choose: Callback<BulkStatusAction>) -> AnyView {
    let items = BulkStatusAction::VARIANTS
        .into_iter()
        .map(|action| {
            let variant = match action {
                BulkStatusAction::Activate => ButtonVariant::Ghost,
                BulkStatusAction::Deactivate => ButtonVariant::Danger,
            };
            let button = kit.button(PressSpec {
                variant,
                size: ButtonSize::Small,
                title: None,
                on_press: Callback::new(move |()| on_choose.run(action)),
                content: view! { {kit.icon(action.icon())} {action.label()} }.into_any(),
            });
            view! { <li class="bulk-actions__menu-item" role="menuitem">{button}</li> }
        })
        .collect_view();
    view! { <ul class="bulk-actions__menu" role="menu">{items}</ul> }.into_any()
}

/// `"1 item selected"`, `"3 items selected"`; plural iff `count > 1`.
fn selection_label(count: usize) -> String {
    let noun = if count > 1 { "items" } else { "item" };
    format!("{count} {noun} selected")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExportOutcome {
    Delivered,
    LoggedOnly,
}

fn dispatch_export<F: FnOnce(usize)>(count: usize, handler: Option<F>) -> ExportOutcome {
    match handler {
        Some(handler) => {
            handler(count);
            ExportOutcome::Delivered
        }
        None => {
            leptos::logging::log!("export requested for {count} selected students; no export handler attached");
            ExportOutcome::LoggedOnly
        }
    }
}
