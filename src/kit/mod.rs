//! Design-system capability set injected into components.
//!
//! DESIGN
//! ======
//! Components never import buttons, selects, inputs or icons directly. They
//! receive a [`UiKit`] prop holding one implementation of each capability and
//! describe what they need through plain spec structs. Hosts swap in their own
//! design system by implementing the traits; [`HtmlKit`] is the plain-markup
//! default.

pub mod html;

use std::sync::Arc;

use leptos::prelude::*;

pub use html::HtmlKit;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
}

/// A clickable control.
pub struct PressSpec {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub title: Option<&'static str>,
    pub on_press: Callback<()>,
    pub content: AnyView,
}

/// One entry in a [`SelectSpec`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// A labeled single-choice selector. `on_change` receives the raw option value.
pub struct SelectSpec {
    pub label: &'static str,
    pub value: Signal<String>,
    pub options: Vec<SelectOption>,
    pub on_change: Callback<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    Date,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Date => "date",
        }
    }
}

/// A labeled text or date input. `on_input` receives the full new value.
pub struct InputSpec {
    pub label: &'static str,
    pub kind: InputKind,
    pub value: Signal<String>,
    pub on_input: Callback<String>,
}

pub trait Pressable: Send + Sync {
    fn pressable(&self, spec: PressSpec) -> AnyView;
}

pub trait Selectable: Send + Sync {
    fn selectable(&self, spec: SelectSpec) -> AnyView;
}

pub trait TextInput: Send + Sync {
    fn text_input(&self, spec: InputSpec) -> AnyView;
}

pub trait IconLookup: Send + Sync {
    fn icon(&self, name: &'static str) -> AnyView;
}

/// The full capability set handed to every component.
#[derive(Clone)]
pub struct UiKit {
    pub pressable: Arc<dyn Pressable>,
    pub selectable: Arc<dyn Selectable>,
    pub text_input: Arc<dyn TextInput>,
    pub icons: Arc<dyn IconLookup>,
}

impl UiKit {
    pub fn button(&self, spec: PressSpec) -> AnyView {
        self.pressable.pressable(spec)
    }

    pub fn select(&self, spec: SelectSpec) -> AnyView {
        self.selectable.selectable(spec)
    }

    pub fn input(&self, spec: InputSpec) -> AnyView {
        self.text_input.text_input(spec)
    }

    pub fn icon(&self, name: &'static str) -> AnyView {
        self.icons.icon(name)
    }
}

impl Default for UiKit {
    fn default() -> Self {
        let html = Arc::new(HtmlKit);
        Self {
            pressable: html.clone(),
            selectable: html.clone(),
            text_input: html.clone(),
            icons: html,
        }
    }
}

impl std::fmt::Debug for UiKit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiKit").finish_non_exhaustive()
    }
}
