//! Leptos bindings for the push-button, checkbox, and radio controls.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::keyboard::{handle_activation_key, ActivationTarget};
use crate::presentation::{
    bool_token, button_aria, button_classes, checkbox_aria, checkbox_classes, radio_aria,
    radio_classes, BUTTON_LABEL_SLOT, CHECKBOX_CHECK_SLOT, CHECKBOX_CONTROL_SLOT,
    CHECKBOX_LABEL_SLOT, RADIO_CONTROL_SLOT, RADIO_DESCRIPTION_SLOT, RADIO_DOT_SLOT,
    RADIO_LABEL_SLOT, RADIO_MINUS_SLOT, RADIO_TEXT_SLOT,
};
use crate::resolve::{
    ButtonDeclaration, CheckboxDeclaration, RadioDeclaration, DEFAULT_BUTTON_CONTENT,
    DEFAULT_DESCRIPTION_TEXT, DEFAULT_LABEL_TEXT,
};
use crate::state::{ButtonState, ButtonType, ButtonVariant, CheckboxState, RadioState};

impl ActivationTarget for NodeRef<html::Div> {
    fn activate(&self) -> bool {
        self.get_untracked().map(|control| control.click()).is_some()
    }
}

fn forward_key(on_keydown: Option<Callback<KeyboardEvent>>) -> impl Fn(&KeyboardEvent) {
    move |ev: &KeyboardEvent| {
        if let Some(on_keydown) = on_keydown.as_ref() {
            on_keydown.call(ev.clone());
        }
    }
}

#[component]
/// Push-button with variant and interaction-state tokens.
///
/// Activation keys are left to the native `<button>`.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(optional, into)] state: MaybeSignal<ButtonState>,
    #[prop(optional, into)] is_disabled: MaybeSignal<bool>,
    #[prop(optional, into)] extra_class: Option<String>,
    #[prop(default = ButtonType::Button)] button_type: ButtonType,
    #[prop(optional)] tab_index: Option<i32>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let resolved = Signal::derive(move || {
        ButtonDeclaration {
            variant,
            state: state.get(),
            is_disabled: is_disabled.get(),
            tab_index,
            ..ButtonDeclaration::default()
        }
        .resolve()
    });
    let aria = Signal::derive(move || button_aria(&resolved.get()));
    let content = children
        .map(|children| children().into_view())
        .unwrap_or_else(|| DEFAULT_BUTTON_CONTENT.into_view());

    view! {
        <button
            type=button_type.token()
            class=move || button_classes(&resolved.get(), extra_class.as_deref()).render()
            disabled=move || resolved.get().is_disabled
            tabindex=move || resolved.get().tab_index
            aria-disabled=move || bool_token(aria.get().disabled)
            data-ui-kind="button"
            data-ui-state=move || resolved.get().state.token()
            data-ui-pressed=move || bool_token(resolved.get().is_pressed_visual)
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            {..attributes}
        >
            <span class=BUTTON_LABEL_SLOT>{content}</span>
        </button>
    }
}

#[component]
/// Checkbox with `role="checkbox"` semantics and Enter/Space activation.
pub fn Checkbox(
    #[prop(optional, into)] state: MaybeSignal<CheckboxState>,
    /// Label visibility.
    #[prop(default = true.into(), into)]
    label: MaybeSignal<bool>,
    #[prop(optional, into)] is_checked: MaybeSignal<bool>,
    #[prop(optional, into)] is_disabled: MaybeSignal<bool>,
    #[prop(default = DEFAULT_LABEL_TEXT.to_string().into(), into)] label_text: MaybeSignal<String>,
    #[prop(optional, into)] extra_class: Option<String>,
    #[prop(optional)] tab_index: Option<i32>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let resolved = Signal::derive(move || {
        CheckboxDeclaration {
            state: state.get(),
            show_label: label.get(),
            is_checked: is_checked.get(),
            is_disabled: is_disabled.get(),
            tab_index,
            ..CheckboxDeclaration::default()
        }
        .resolve()
    });
    let aria = Signal::derive(move || checkbox_aria(&resolved.get()));
    let forward = forward_key(on_keydown);
    let control = create_node_ref::<html::Div>();

    view! {
        <div
            node_ref=control
            class=move || checkbox_classes(&resolved.get(), extra_class.as_deref()).render()
            role=move || aria.get().role
            tabindex=move || resolved.get().tab_index
            aria-disabled=move || bool_token(aria.get().disabled)
            aria-checked=move || aria.get().checked.map(bool_token)
            data-ui-kind="checkbox"
            data-ui-state=move || resolved.get().state.token()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev: KeyboardEvent| {
                handle_activation_key(&ev, &control, resolved.get_untracked().is_disabled, &forward);
            }
            {..attributes}
        >
            <span class=CHECKBOX_CONTROL_SLOT aria-hidden="true">
                {move || {
                    resolved
                        .get()
                        .is_checked_visual
                        .then(|| view! { <span class=CHECKBOX_CHECK_SLOT></span> })
                }}
            </span>
            {move || {
                resolved.get().show_label.then(|| {
                    view! { <span class=CHECKBOX_LABEL_SLOT>{label_text.get()}</span> }
                })
            }}
        </div>
    }
}

#[component]
/// Radio with `role="radio"` semantics, an optional description, and
/// Enter/Space activation.
pub fn Radio(
    #[prop(optional, into)] state: MaybeSignal<RadioState>,
    /// Label visibility.
    #[prop(default = true.into(), into)]
    label: MaybeSignal<bool>,
    /// Description visibility; ignored while the label is hidden.
    #[prop(optional, into)]
    description: MaybeSignal<bool>,
    #[prop(optional, into)] is_disabled: MaybeSignal<bool>,
    #[prop(default = DEFAULT_LABEL_TEXT.to_string().into(), into)] label_text: MaybeSignal<String>,
    #[prop(default = DEFAULT_DESCRIPTION_TEXT.to_string().into(), into)]
    description_text: MaybeSignal<String>,
    #[prop(optional, into)] extra_class: Option<String>,
    #[prop(optional)] tab_index: Option<i32>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let resolved = Signal::derive(move || {
        RadioDeclaration {
            state: state.get(),
            show_label: label.get(),
            show_description: description.get(),
            is_disabled: is_disabled.get(),
            tab_index,
            ..RadioDeclaration::default()
        }
        .resolve()
    });
    let aria = Signal::derive(move || radio_aria(&resolved.get()));
    let forward = forward_key(on_keydown);
    let control = create_node_ref::<html::Div>();

    view! {
        <div
            node_ref=control
            class=move || radio_classes(&resolved.get(), extra_class.as_deref()).render()
            role=move || aria.get().role
            tabindex=move || resolved.get().tab_index
            aria-disabled=move || bool_token(aria.get().disabled)
            aria-checked=move || aria.get().checked.map(bool_token)
            data-ui-kind="radio"
            data-ui-state=move || resolved.get().state.token()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev: KeyboardEvent| {
                handle_activation_key(&ev, &control, resolved.get_untracked().is_disabled, &forward);
            }
            {..attributes}
        >
            <span class=RADIO_CONTROL_SLOT aria-hidden="true">
                {move || {
                    let resolved = resolved.get();
                    if resolved.is_pressed_visual {
                        Some(view! { <span class=RADIO_DOT_SLOT></span> })
                    } else if resolved.is_indeterminate_visual {
                        Some(view! { <span class=RADIO_MINUS_SLOT></span> })
                    } else {
                        None
                    }
                }}
            </span>
            {move || {
                let resolved = resolved.get();
                resolved.show_label.then(|| {
                    view! {
                        <span class=RADIO_TEXT_SLOT>
                            <span class=RADIO_LABEL_SLOT>{label_text.get()}</span>
                            {resolved.renders_description().then(|| {
                                view! {
                                    <span class=RADIO_DESCRIPTION_SLOT>{description_text.get()}</span>
                                }
                            })}
                        </span>
                    }
                })
            }}
        </div>
    }
}
