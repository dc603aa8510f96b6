//! Control declarations and the pure resolution step.
//!
//! A declaration is the caller-owned prop set, fully defaulted at
//! construction. [`ButtonDeclaration::resolve`], [`CheckboxDeclaration::resolve`]
//! and [`RadioDeclaration::resolve`] turn it into the resolved visual state the
//! presentation layer consumes. Resolution holds no memory between calls.

use serde::{Deserialize, Serialize};

use crate::state::{ButtonState, ButtonType, ButtonVariant, CheckboxState, ControlState, RadioState};

/// Default content rendered inside a push-button.
pub const DEFAULT_BUTTON_CONTENT: &str = "Button";
/// Default label text for checkbox and radio controls.
pub const DEFAULT_LABEL_TEXT: &str = "Label";
/// Default radio description text.
pub const DEFAULT_DESCRIPTION_TEXT: &str = "Description";
/// Tab index assigned to disabled controls; removes them from the tab order.
pub const DISABLED_TAB_INDEX: i32 = -1;

/// Applies the disabled override: a disabled control always resolves to the
/// kind's disabled state, whatever state was declared.
pub fn resolve_state<S: ControlState>(declared: S, is_disabled: bool) -> S {
    if is_disabled {
        S::DISABLED
    } else {
        declared
    }
}

/// Tab index for a control in `resolved` state: `-1` when disabled, otherwise
/// the caller override or `0`.
pub fn resolve_tab_index<S: ControlState>(resolved: S, tab_index: Option<i32>) -> i32 {
    if resolved == S::DISABLED {
        DISABLED_TAB_INDEX
    } else {
        tab_index.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Push-button props.
pub struct ButtonDeclaration {
    /// Visual variant.
    pub variant: ButtonVariant,
    /// Declared interaction state.
    pub state: ButtonState,
    /// Disabled convenience flag; overrides `state`.
    pub is_disabled: bool,
    /// Text content rendered inside the label slot.
    pub content: String,
    /// Extra caller class appended after the computed tokens.
    pub extra_class: Option<String>,
    /// Native `type` attribute.
    pub button_type: ButtonType,
    /// Optional tab index override.
    pub tab_index: Option<i32>,
    /// Passthrough attributes applied after the computed ones.
    pub attributes: Vec<(String, String)>,
}

impl Default for ButtonDeclaration {
    fn default() -> Self {
        Self {
            variant: ButtonVariant::Primary,
            state: ButtonState::Default,
            is_disabled: false,
            content: DEFAULT_BUTTON_CONTENT.to_string(),
            extra_class: None,
            button_type: ButtonType::Button,
            tab_index: None,
            attributes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Resolved push-button state.
pub struct ResolvedButton {
    /// Visual variant, carried through unchanged.
    pub variant: ButtonVariant,
    /// State after the disabled override.
    pub state: ButtonState,
    /// `state == Pressed`; drives `data-ui-pressed`.
    pub is_pressed_visual: bool,
    /// `state == Disabled`.
    pub is_disabled: bool,
    /// Emitted tab index. `None` leaves the native focus order alone.
    pub tab_index: Option<i32>,
}

impl ButtonDeclaration {
    /// Declaration with the given variant and otherwise default props.
    pub fn new(variant: ButtonVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Resolves the declaration.
    pub fn resolve(&self) -> ResolvedButton {
        let state = resolve_state(self.state, self.is_disabled);
        let is_disabled = state == ButtonState::Disabled;
        ResolvedButton {
            variant: self.variant,
            state,
            is_pressed_visual: state == ButtonState::Pressed,
            is_disabled,
            tab_index: if is_disabled || self.tab_index.is_some() {
                Some(resolve_tab_index(state, self.tab_index))
            } else {
                None
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Checkbox props.
pub struct CheckboxDeclaration {
    /// Declared interaction state.
    pub state: CheckboxState,
    /// Label visibility.
    pub show_label: bool,
    /// Explicit checked flag, OR-ed with the pressed state.
    pub is_checked: bool,
    /// Disabled convenience flag; overrides `state`.
    pub is_disabled: bool,
    /// Label text.
    pub label_text: String,
    /// Extra caller class appended after the computed tokens.
    pub extra_class: Option<String>,
    /// Optional tab index override.
    pub tab_index: Option<i32>,
    /// Passthrough attributes applied after the computed ones.
    pub attributes: Vec<(String, String)>,
}

impl Default for CheckboxDeclaration {
    fn default() -> Self {
        Self {
            state: CheckboxState::Default,
            show_label: true,
            is_checked: false,
            is_disabled: false,
            label_text: DEFAULT_LABEL_TEXT.to_string(),
            extra_class: None,
            tab_index: None,
            attributes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Resolved checkbox state.
pub struct ResolvedCheckbox {
    /// State after the disabled override.
    pub state: CheckboxState,
    /// `state == Pressed`.
    pub is_pressed_visual: bool,
    /// `is_pressed_visual || is_checked`.
    pub is_checked_visual: bool,
    /// `state == Disabled`.
    pub is_disabled: bool,
    /// Resolved tab index.
    pub tab_index: i32,
    /// Label visibility.
    pub show_label: bool,
}

impl CheckboxDeclaration {
    /// Resolves the declaration.
    ///
    /// A pressed checkbox renders checked even when `is_checked` is `false`.
    pub fn resolve(&self) -> ResolvedCheckbox {
        let state = resolve_state(self.state, self.is_disabled);
        let is_pressed_visual = state == CheckboxState::Pressed;
        ResolvedCheckbox {
            state,
            is_pressed_visual,
            is_checked_visual: is_pressed_visual || self.is_checked,
            is_disabled: state == CheckboxState::Disabled,
            tab_index: resolve_tab_index(state, self.tab_index),
            show_label: self.show_label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Radio props.
pub struct RadioDeclaration {
    /// Declared interaction state.
    pub state: RadioState,
    /// Label visibility.
    pub show_label: bool,
    /// Description visibility; only honored while the label is visible.
    pub show_description: bool,
    /// Disabled convenience flag; overrides `state`.
    pub is_disabled: bool,
    /// Label text.
    pub label_text: String,
    /// Description text.
    pub description_text: String,
    /// Extra caller class appended after the computed tokens.
    pub extra_class: Option<String>,
    /// Optional tab index override.
    pub tab_index: Option<i32>,
    /// Passthrough attributes applied after the computed ones.
    pub attributes: Vec<(String, String)>,
}

impl Default for RadioDeclaration {
    fn default() -> Self {
        Self {
            state: RadioState::Default,
            show_label: true,
            show_description: false,
            is_disabled: false,
            label_text: DEFAULT_LABEL_TEXT.to_string(),
            description_text: DEFAULT_DESCRIPTION_TEXT.to_string(),
            extra_class: None,
            tab_index: None,
            attributes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Resolved radio state.
pub struct ResolvedRadio {
    /// State after the disabled override.
    pub state: RadioState,
    /// `state == Pressed`; drives the dot mark and `aria-checked`.
    pub is_pressed_visual: bool,
    /// `state == Indeterminate`; drives the minus mark.
    pub is_indeterminate_visual: bool,
    /// `state == Disabled`.
    pub is_disabled: bool,
    /// Resolved tab index.
    pub tab_index: i32,
    /// Label visibility.
    pub show_label: bool,
    /// Raw description flag, as declared.
    pub show_description: bool,
}

impl ResolvedRadio {
    /// Whether the description child renders. Requires a visible label.
    pub fn renders_description(&self) -> bool {
        self.show_label && self.show_description
    }
}

impl RadioDeclaration {
    /// Resolves the declaration.
    pub fn resolve(&self) -> ResolvedRadio {
        let state = resolve_state(self.state, self.is_disabled);
        ResolvedRadio {
            state,
            is_pressed_visual: state == RadioState::Pressed,
            is_indeterminate_visual: state == RadioState::Indeterminate,
            is_disabled: state == RadioState::Disabled,
            tab_index: resolve_tab_index(state, self.tab_index),
            show_label: self.show_label,
            show_description: self.show_description,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn disabled_flag_wins_over_every_declared_state() {
        for state in RadioState::ALL {
            let resolved = RadioDeclaration {
                state: *state,
                is_disabled: true,
                tab_index: Some(4),
                ..RadioDeclaration::default()
            }
            .resolve();
            assert_eq!(resolved.state, RadioState::Disabled);
            assert_eq!(resolved.tab_index, DISABLED_TAB_INDEX);
            assert!(!resolved.is_pressed_visual);
            assert!(!resolved.is_indeterminate_visual);
        }

        for state in CheckboxState::ALL {
            let resolved = CheckboxDeclaration {
                state: *state,
                is_disabled: true,
                ..CheckboxDeclaration::default()
            }
            .resolve();
            assert_eq!(resolved.state, CheckboxState::Disabled);
            assert_eq!(resolved.tab_index, DISABLED_TAB_INDEX);
        }

        for state in ButtonState::ALL {
            let resolved = ButtonDeclaration {
                state: *state,
                is_disabled: true,
                ..ButtonDeclaration::default()
            }
            .resolve();
            assert_eq!(resolved.state, ButtonState::Disabled);
            assert_eq!(resolved.tab_index, Some(DISABLED_TAB_INDEX));
        }
    }

    #[test]
    fn declared_disabled_state_behaves_like_the_flag() {
        let resolved = CheckboxDeclaration {
            state: CheckboxState::Disabled,
            ..CheckboxDeclaration::default()
        }
        .resolve();
        assert!(resolved.is_disabled);
        assert_eq!(resolved.tab_index, -1);
    }

    #[test]
    fn checkbox_checked_visual_is_pressed_or_checked() {
        let cases = [
            (CheckboxState::Default, false, false),
            (CheckboxState::Default, true, true),
            (CheckboxState::Pressed, false, true),
            (CheckboxState::Pressed, true, true),
        ];
        for (state, is_checked, expected) in cases {
            let resolved = CheckboxDeclaration {
                state,
                is_checked,
                ..CheckboxDeclaration::default()
            }
            .resolve();
            assert_eq!(resolved.is_checked_visual, expected, "{state} / {is_checked}");
        }
    }

    #[test]
    fn disabled_checkbox_keeps_explicit_checked_flag() {
        let resolved = CheckboxDeclaration {
            state: CheckboxState::Pressed,
            is_checked: true,
            is_disabled: true,
            ..CheckboxDeclaration::default()
        }
        .resolve();
        assert!(!resolved.is_pressed_visual);
        assert!(resolved.is_checked_visual);
    }

    #[test]
    fn radio_marks_are_mutually_exclusive() {
        for state in RadioState::ALL {
            let resolved = RadioDeclaration {
                state: *state,
                ..RadioDeclaration::default()
            }
            .resolve();
            assert!(!(resolved.is_pressed_visual && resolved.is_indeterminate_visual));
        }
    }

    #[test]
    fn radio_description_needs_a_visible_label() {
        let resolved = RadioDeclaration {
            show_label: false,
            show_description: true,
            ..RadioDeclaration::default()
        }
        .resolve();
        assert!(resolved.show_description);
        assert!(!resolved.renders_description());
    }

    #[test]
    fn tab_index_falls_back_to_zero_or_uses_override() {
        assert_eq!(CheckboxDeclaration::default().resolve().tab_index, 0);
        let resolved = RadioDeclaration {
            tab_index: Some(3),
            ..RadioDeclaration::default()
        }
        .resolve();
        assert_eq!(resolved.tab_index, 3);
    }

    #[test]
    fn button_only_emits_tab_index_when_needed() {
        let resolved = ButtonDeclaration::default().resolve();
        assert_eq!(resolved.tab_index, None);

        let resolved = ButtonDeclaration {
            tab_index: Some(2),
            ..ButtonDeclaration::default()
        }
        .resolve();
        assert_eq!(resolved.tab_index, Some(2));
    }

    #[test]
    fn resolution_is_repeatable() {
        let declaration = RadioDeclaration {
            state: RadioState::Indeterminate,
            show_description: true,
            ..RadioDeclaration::default()
        };
        assert_eq!(declaration.resolve(), declaration.resolve());
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let declaration: CheckboxDeclaration =
            serde_json::from_str(r#"{"state":"pressed"}"#).expect("deserialize");
        assert_eq!(declaration.state, CheckboxState::Pressed);
        assert!(declaration.show_label);
        assert_eq!(declaration.label_text, DEFAULT_LABEL_TEXT);
    }
}
