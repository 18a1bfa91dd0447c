//! Plain-markup kit: native `<button>`, `<select>`, `<input>` and text glyph
//! icons, styled through BEM classes.

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;

use leptos::prelude::*;

use super::{
    ButtonSize, ButtonVariant, IconLookup, InputSpec, PressSpec, Pressable, SelectSpec, Selectable, TextInput,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlKit;

impl Pressable for HtmlKit {
    fn pressable(&self, spec: PressSpec) -> AnyView {
        let PressSpec {
            variant,
            size,
            title,
            on_press,
            content,
        } = spec;
        view! {
            <button class=button_class(variant, size) title=title on:click=move |_| on_press.run(())>
                {content}
            </button>
        }
        .into_any()
    }
}

impl Selectable for HtmlKit {
    fn selectable(&self, spec: SelectSpec) -> AnyView {
        let SelectSpec {
            label,
            value,
            options,
            on_change,
        } = spec;
        view! {
            <label class="field">
                <span class="field__label">{label}</span>
                <select
                    class="field__select"
                    prop:value=move || value.get()
                    on:change=move |ev| on_change.run(event_target_value(&ev))
                >
                    {options
                        .into_iter()
                        .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                        .collect_view()}
                </select>
            </label>
        }
        .into_any()
    }
}

impl TextInput for HtmlKit {
    fn text_input(&self, spec: InputSpec) -> AnyView {
        let InputSpec {
            label,
            kind,
            value,
            on_input,
        } = spec;
        view! {
            <label class="field">
                <span class="field__label">{label}</span>
                <input
                    class="field__input"
                    type=kind.as_str()
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </label>
        }
        .into_any()
    }
}

impl IconLookup for HtmlKit {
    fn icon(&self, name: &'static str) -> AnyView {
        view! {
            <span class=format!("icon icon--{name}") aria-hidden="true">
                {icon_glyph(name)}
            </span>
        }
        .into_any()
    }
}

fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "btn--primary",
        ButtonVariant::Secondary => "btn--secondary",
        ButtonVariant::Ghost => "btn--ghost",
        ButtonVariant::Danger => "btn--danger",
    };
    let size = match size {
        ButtonSize::Small => "btn--sm",
        ButtonSize::Medium => "btn--md",
    };
    format!("btn {variant} {size}")
}

/// Text glyph for a named icon; unknown names render a bullet.
fn icon_glyph(name: &str) -> &'static str {
    match name {
        "chevron-down" => "▾",
        "check" => "✓",
        "ban" => "⊘",
        "x" => "✕",
        "download" => "⤓",
        "filter" => "⚲",
        "calendar" => "📅",
        "clock" => "🕒",
        "book" => "📚",
        "reset" => "↺",
        _ => "•",
    }
}
