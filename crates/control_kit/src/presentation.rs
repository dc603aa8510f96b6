//! Maps resolved control state onto class tokens and ARIA attributes.
//!
//! The class prefixes and `--<token>` suffixes below are consumed by external
//! stylesheets and must not drift.

use crate::resolve::{ResolvedButton, ResolvedCheckbox, ResolvedRadio};

/// Base class of the push-button.
pub const BUTTON_CLASS: &str = "control-button";
/// Base class of the checkbox.
pub const CHECKBOX_CLASS: &str = "control-checkbox";
/// Base class of the radio.
pub const RADIO_CLASS: &str = "control-radio";

/// Push-button content slot.
pub const BUTTON_LABEL_SLOT: &str = "control-button__label";
/// Checkbox indicator box.
pub const CHECKBOX_CONTROL_SLOT: &str = "control-checkbox__control";
/// Checkbox check mark.
pub const CHECKBOX_CHECK_SLOT: &str = "control-checkbox__check";
/// Checkbox label.
pub const CHECKBOX_LABEL_SLOT: &str = "control-checkbox__label";
/// Radio indicator ring.
pub const RADIO_CONTROL_SLOT: &str = "control-radio__control";
/// Radio selected dot.
pub const RADIO_DOT_SLOT: &str = "control-radio__dot";
/// Radio indeterminate minus mark.
pub const RADIO_MINUS_SLOT: &str = "control-radio__minus";
/// Radio label/description wrapper.
pub const RADIO_TEXT_SLOT: &str = "control-radio__text";
/// Radio label.
pub const RADIO_LABEL_SLOT: &str = "control-radio__label";
/// Radio description.
pub const RADIO_DESCRIPTION_SLOT: &str = "control-radio__description";

/// Ordered `(predicate, token)` entries joined into a class attribute value.
///
/// Entries keep insertion order; an entry renders only when its predicate
/// holds and its token is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    entries: Vec<(bool, String)>,
}

impl ClassList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditional token.
    pub fn token(self, token: impl Into<String>) -> Self {
        self.token_if(true, token)
    }

    /// Token rendered only when `predicate` holds.
    pub fn token_if(mut self, predicate: bool, token: impl Into<String>) -> Self {
        self.entries.push((predicate, token.into()));
        self
    }

    /// `on` when `predicate` holds, else `off`.
    pub fn either(self, predicate: bool, on: impl Into<String>, off: impl Into<String>) -> Self {
        self.token_if(predicate, on).token_if(!predicate, off)
    }

    /// Caller-supplied extra class, if any.
    pub fn extra(self, extra: Option<&str>) -> Self {
        match extra {
            Some(extra) => self.token(extra),
            None => self,
        }
    }

    /// Rendered tokens, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(predicate, token)| *predicate && !token.is_empty())
            .map(|(_, token)| token.as_str())
    }

    /// Space-joined class attribute value.
    pub fn render(&self) -> String {
        self.tokens().collect::<Vec<_>>().join(" ")
    }
}

fn modifier(base: &str, token: &str) -> String {
    format!("{base}--{token}")
}

/// Push-button classes: base, variant, state, extra.
pub fn button_classes(resolved: &ResolvedButton, extra: Option<&str>) -> ClassList {
    ClassList::new()
        .token(BUTTON_CLASS)
        .token(modifier(BUTTON_CLASS, resolved.variant.token()))
        .token(modifier(BUTTON_CLASS, resolved.state.token()))
        .extra(extra)
}

/// Checkbox classes: base, state, label visibility, extra.
pub fn checkbox_classes(resolved: &ResolvedCheckbox, extra: Option<&str>) -> ClassList {
    ClassList::new()
        .token(CHECKBOX_CLASS)
        .token(modifier(CHECKBOX_CLASS, resolved.state.token()))
        .either(
            resolved.show_label,
            modifier(CHECKBOX_CLASS, "label-visible"),
            modifier(CHECKBOX_CLASS, "label-hidden"),
        )
        .extra(extra)
}

/// Radio classes: base, state, label visibility, description visibility, extra.
pub fn radio_classes(resolved: &ResolvedRadio, extra: Option<&str>) -> ClassList {
    ClassList::new()
        .token(RADIO_CLASS)
        .token(modifier(RADIO_CLASS, resolved.state.token()))
        .either(
            resolved.show_label,
            modifier(RADIO_CLASS, "label-visible"),
            modifier(RADIO_CLASS, "label-hidden"),
        )
        .either(
            resolved.show_description,
            modifier(RADIO_CLASS, "description-visible"),
            modifier(RADIO_CLASS, "description-hidden"),
        )
        .extra(extra)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Accessibility attributes of a control container.
pub struct AriaAttributes {
    /// Structural role. `None` for the native push-button.
    pub role: Option<&'static str>,
    /// `aria-disabled`.
    pub disabled: bool,
    /// `aria-checked`. `None` when the control has no checked semantics.
    pub checked: Option<bool>,
}

impl AriaAttributes {
    /// Attribute pairs in emission order: `role`, `aria-disabled`, `aria-checked`.
    pub fn pairs(&self) -> Vec<(&'static str, &'static str)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(role) = self.role {
            pairs.push(("role", role));
        }
        pairs.push(("aria-disabled", bool_token(self.disabled)));
        if let Some(checked) = self.checked {
            pairs.push(("aria-checked", bool_token(checked)));
        }
        pairs
    }
}

/// Push-button ARIA; native button semantics supply the role.
pub fn button_aria(resolved: &ResolvedButton) -> AriaAttributes {
    AriaAttributes {
        role: None,
        disabled: resolved.is_disabled,
        checked: None,
    }
}

/// Checkbox ARIA; `aria-checked` follows the checked visual.
pub fn checkbox_aria(resolved: &ResolvedCheckbox) -> AriaAttributes {
    AriaAttributes {
        role: Some("checkbox"),
        disabled: resolved.is_disabled,
        checked: Some(resolved.is_checked_visual),
    }
}

/// Radio ARIA; `aria-checked` follows the pressed visual only, so an
/// indeterminate radio reports `false`.
pub fn radio_aria(resolved: &ResolvedRadio) -> AriaAttributes {
    AriaAttributes {
        role: Some("radio"),
        disabled: resolved.is_disabled,
        checked: Some(resolved.is_pressed_visual),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::resolve::{ButtonDeclaration, CheckboxDeclaration, RadioDeclaration};
    use crate::state::{ButtonState, ButtonVariant, CheckboxState, RadioState};

    #[test]
    fn primary_default_button_classes() {
        let resolved = ButtonDeclaration::default().resolve();
        assert_eq!(
            button_classes(&resolved, None).render(),
            "control-button control-button--primary control-button--default"
        );
        assert_eq!(
            button_aria(&resolved).pairs(),
            vec![("aria-disabled", "false")]
        );
    }

    #[test]
    fn disabled_button_keeps_variant_and_appends_extra_class() {
        let resolved = ButtonDeclaration {
            variant: ButtonVariant::Tertiary,
            state: ButtonState::Hover,
            is_disabled: true,
            ..ButtonDeclaration::default()
        }
        .resolve();
        assert_eq!(
            button_classes(&resolved, Some("toolbar-action")).render(),
            "control-button control-button--tertiary control-button--disabled toolbar-action"
        );
    }

    #[test]
    fn empty_extra_class_is_filtered() {
        let resolved = CheckboxDeclaration::default().resolve();
        assert_eq!(
            checkbox_classes(&resolved, Some("")).render(),
            "control-checkbox control-checkbox--default control-checkbox--label-visible"
        );
    }

    #[test]
    fn checkbox_hidden_label_token() {
        let resolved = CheckboxDeclaration {
            state: CheckboxState::Focus,
            show_label: false,
            ..CheckboxDeclaration::default()
        }
        .resolve();
        assert_eq!(
            checkbox_classes(&resolved, None).render(),
            "control-checkbox control-checkbox--focus control-checkbox--label-hidden"
        );
    }

    #[test]
    fn radio_tokens_follow_fixed_order() {
        let resolved = RadioDeclaration {
            state: RadioState::Indeterminate,
            show_label: false,
            show_description: true,
            ..RadioDeclaration::default()
        }
        .resolve();
        let classes = radio_classes(&resolved, Some("settings-row"));
        assert_eq!(
            classes.tokens().collect::<Vec<_>>(),
            vec![
                "control-radio",
                "control-radio--indeterminate",
                "control-radio--label-hidden",
                "control-radio--description-visible",
                "settings-row",
            ]
        );
        assert_eq!(classes.render(), classes.clone().render());
    }

    #[test]
    fn class_list_skips_false_predicates() {
        let classes = ClassList::new()
            .token("a")
            .token_if(false, "b")
            .either(false, "c", "d")
            .extra(None);
        assert_eq!(classes.render(), "a d");
    }

    #[test]
    fn checkbox_aria_checked_tracks_checked_visual() {
        let resolved = CheckboxDeclaration {
            state: CheckboxState::Pressed,
            ..CheckboxDeclaration::default()
        }
        .resolve();
        assert_eq!(
            checkbox_aria(&resolved).pairs(),
            vec![
                ("role", "checkbox"),
                ("aria-disabled", "false"),
                ("aria-checked", "true"),
            ]
        );
    }

    #[test]
    fn indeterminate_radio_reports_unchecked() {
        let resolved = RadioDeclaration {
            state: RadioState::Indeterminate,
            ..RadioDeclaration::default()
        }
        .resolve();
        assert_eq!(radio_aria(&resolved).checked, Some(false));

        let resolved = RadioDeclaration {
            state: RadioState::Pressed,
            is_disabled: true,
            ..RadioDeclaration::default()
        }
        .resolve();
        let aria = radio_aria(&resolved);
        assert!(aria.disabled);
        assert_eq!(aria.checked, Some(false));
    }
}
