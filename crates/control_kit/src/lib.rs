//! Presentational control library: push-button, checkbox, and radio.
//!
//! Each control resolves its caller-owned declaration into a visual state
//! ([`resolve`]), maps that state onto the stable `control-*` class contract
//! and ARIA attributes ([`presentation`]), and normalizes Enter/Space into a
//! click for the non-native controls ([`keyboard`]). The Leptos components in
//! [`controls`] and the host-agnostic builders in [`shell`] share that
//! pipeline, so the class strings a stylesheet sees are identical in both.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod controls;
pub mod keyboard;
pub mod presentation;
pub mod resolve;
pub mod shell;
pub mod state;
pub mod tree;

pub use controls::{Button, Checkbox, Radio};
pub use keyboard::{handle_activation_key, ActivationKey, ActivationTarget, KeyInput, KeyOutcome};
pub use presentation::{AriaAttributes, ClassList};
pub use resolve::{
    ButtonDeclaration, CheckboxDeclaration, RadioDeclaration, ResolvedButton, ResolvedCheckbox,
    ResolvedRadio,
};
pub use shell::{render_button, render_button_content, render_checkbox, render_radio};
pub use state::{
    ButtonState, ButtonType, ButtonVariant, CheckboxState, ControlState, ParseTokenError,
    RadioState,
};
pub use tree::{to_markup, Element, MarkupHost, PresentationNode, RenderHost};

/// Convenience imports for crates composing the control set.
pub mod prelude {
    pub use crate::{
        Button, ButtonDeclaration, ButtonState, ButtonType, ButtonVariant, Checkbox,
        CheckboxDeclaration, CheckboxState, Radio, RadioDeclaration, RadioState,
    };
}
