//! Control shells as presentation trees.
//!
//! These builders produce the same structure the Leptos components in
//! [`crate::controls`] render, without a browser.

use crate::presentation::{
    bool_token, button_aria, button_classes, checkbox_aria, checkbox_classes, radio_aria, radio_classes,
    AriaAttributes, BUTTON_LABEL_SLOT, CHECKBOX_CHECK_SLOT, CHECKBOX_CONTROL_SLOT,
    CHECKBOX_LABEL_SLOT, RADIO_CONTROL_SLOT, RADIO_DESCRIPTION_SLOT, RADIO_DOT_SLOT,
    RADIO_LABEL_SLOT, RADIO_MINUS_SLOT, RADIO_TEXT_SLOT,
};
use crate::resolve::{ButtonDeclaration, CheckboxDeclaration, RadioDeclaration};
use crate::tree::{Element, PresentationNode};

fn with_aria(mut element: Element, aria: AriaAttributes) -> Element {
    for (name, value) in aria.pairs() {
        element.set_attribute(name, value);
    }
    element
}

fn with_passthrough(mut element: Element, attributes: &[(String, String)]) -> Element {
    for (name, value) in attributes {
        element.set_attribute(name.as_str(), value.as_str());
    }
    element
}

fn slot(class: &'static str) -> Element {
    Element::new("span").class(class)
}

fn indicator(class: &'static str) -> Element {
    slot(class).attr("aria-hidden", "true")
}

/// Push-button tree: a native `<button>` wrapping the label slot, which holds
/// the declaration's text content.
pub fn render_button(declaration: &ButtonDeclaration) -> PresentationNode {
    render_button_content(declaration, declaration.content.as_str())
}

/// Push-button tree with caller-composed label content in place of the
/// declaration's text.
pub fn render_button_content(
    declaration: &ButtonDeclaration,
    content: impl Into<PresentationNode>,
) -> PresentationNode {
    let resolved = declaration.resolve();
    let button = Element::new("button")
        .attr("type", declaration.button_type.token())
        .class(button_classes(&resolved, declaration.extra_class.as_deref()).render())
        .attr_opt("disabled", resolved.is_disabled.then_some(""))
        .attr_opt("tabindex", resolved.tab_index.map(|index| index.to_string()));
    let button = with_aria(button, button_aria(&resolved))
        .attr("data-ui-kind", "button")
        .attr("data-ui-state", resolved.state.token())
        .attr("data-ui-pressed", bool_token(resolved.is_pressed_visual));

    with_passthrough(button, &declaration.attributes)
        .child(slot(BUTTON_LABEL_SLOT).child(content))
        .into()
}

/// Checkbox tree: indicator box with an optional check mark, then the
/// optional label.
pub fn render_checkbox(declaration: &CheckboxDeclaration) -> PresentationNode {
    let resolved = declaration.resolve();
    let container = Element::new("div")
        .class(checkbox_classes(&resolved, declaration.extra_class.as_deref()).render())
        .attr("tabindex", resolved.tab_index.to_string());
    let container = with_aria(container, checkbox_aria(&resolved))
        .attr("data-ui-kind", "checkbox")
        .attr("data-ui-state", resolved.state.token());

    with_passthrough(container, &declaration.attributes)
        .child(
            indicator(CHECKBOX_CONTROL_SLOT)
                .child_opt(resolved.is_checked_visual.then(|| slot(CHECKBOX_CHECK_SLOT))),
        )
        .child_opt(
            resolved
                .show_label
                .then(|| slot(CHECKBOX_LABEL_SLOT).text(declaration.label_text.as_str())),
        )
        .into()
}

/// Radio tree: indicator ring with at most one of the dot or minus marks,
/// then the optional label and nested description.
pub fn render_radio(declaration: &RadioDeclaration) -> PresentationNode {
    let resolved = declaration.resolve();
    let container = Element::new("div")
        .class(radio_classes(&resolved, declaration.extra_class.as_deref()).render())
        .attr("tabindex", resolved.tab_index.to_string());
    let container = with_aria(container, radio_aria(&resolved))
        .attr("data-ui-kind", "radio")
        .attr("data-ui-state", resolved.state.token());

    let mark = if resolved.is_pressed_visual {
        Some(slot(RADIO_DOT_SLOT))
    } else if resolved.is_indeterminate_visual {
        Some(slot(RADIO_MINUS_SLOT))
    } else {
        None
    };

    let text = resolved.show_label.then(|| {
        slot(RADIO_TEXT_SLOT)
            .child(slot(RADIO_LABEL_SLOT).text(declaration.label_text.as_str()))
            .child_opt(
                resolved
                    .renders_description()
                    .then(|| slot(RADIO_DESCRIPTION_SLOT).text(declaration.description_text.as_str())),
            )
    });

    with_passthrough(container, &declaration.attributes)
        .child(indicator(RADIO_CONTROL_SLOT).child_opt(mark))
        .child_opt(text)
        .into()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::state::{ButtonState, ButtonVariant, CheckboxState, RadioState};
    use crate::tree::to_markup;

    fn element(node: PresentationNode) -> Element {
        match node {
            PresentationNode::Element(element) => element,
            PresentationNode::Text(text) => panic!("expected element, found text {text:?}"),
        }
    }

    #[test]
    fn default_button_markup() {
        let node = render_button(&ButtonDeclaration::default());
        assert_eq!(
            to_markup(&node),
            concat!(
                r#"<button type="button" class="control-button control-button--primary control-button--default" "#,
                r#"aria-disabled="false" data-ui-kind="button" data-ui-state="default" "#,
                r#"data-ui-pressed="false">"#,
                r#"<span class="control-button__label">Button</span></button>"#,
            )
        );
    }

    #[test]
    fn disabled_button_is_natively_disabled_and_untabbable() {
        let button = element(render_button(&ButtonDeclaration {
            variant: ButtonVariant::Secondary,
            state: ButtonState::Pressed,
            is_disabled: true,
            content: "Disabled".to_string(),
            ..ButtonDeclaration::default()
        }));
        assert_eq!(button.attribute("disabled"), Some(""));
        assert_eq!(button.attribute("aria-disabled"), Some("true"));
        assert_eq!(button.attribute("tabindex"), Some("-1"));
        assert!(button.has_class("control-button--disabled"));
        assert!(!button.has_class("control-button--pressed"));
        assert_eq!(button.attribute("data-ui-pressed"), Some("false"));
        assert_eq!(button.text_content(), "Disabled");
    }

    #[test]
    fn pressed_button_reports_pressed_visual() {
        let button = element(render_button(&ButtonDeclaration {
            state: ButtonState::Pressed,
            ..ButtonDeclaration::default()
        }));
        assert_eq!(button.attribute("data-ui-pressed"), Some("true"));
        assert!(button.has_class("control-button--pressed"));
    }

    #[test]
    fn button_passthrough_attributes_come_last() {
        let button = element(render_button(&ButtonDeclaration {
            button_type: crate::state::ButtonType::Submit,
            attributes: vec![
                ("id".to_string(), "save".to_string()),
                ("type".to_string(), "reset".to_string()),
            ],
            ..ButtonDeclaration::default()
        }));
        assert_eq!(button.attribute("id"), Some("save"));
        assert_eq!(button.attribute("type"), Some("reset"));
        assert_eq!(button.attributes.first().map(|(name, _)| name.as_str()), Some("type"));
    }

    #[test]
    fn checkbox_mark_follows_checked_visual() {
        let unchecked = element(render_checkbox(&CheckboxDeclaration::default()));
        let control = unchecked.find_by_class(CHECKBOX_CONTROL_SLOT).expect("control");
        assert!(control.children.is_empty());
        assert_eq!(control.attribute("aria-hidden"), Some("true"));
        assert_eq!(unchecked.attribute("aria-checked"), Some("false"));

        let pressed = element(render_checkbox(&CheckboxDeclaration {
            state: CheckboxState::Pressed,
            ..CheckboxDeclaration::default()
        }));
        assert!(pressed.find_by_class(CHECKBOX_CHECK_SLOT).is_some());
        assert_eq!(pressed.attribute("aria-checked"), Some("true"));
    }

    #[test]
    fn checkbox_label_is_optional() {
        let hidden = element(render_checkbox(&CheckboxDeclaration {
            show_label: false,
            ..CheckboxDeclaration::default()
        }));
        assert!(hidden.find_by_class(CHECKBOX_LABEL_SLOT).is_none());
        assert_eq!(hidden.children.len(), 1);

        let shown = element(render_checkbox(&CheckboxDeclaration {
            label_text: "Accept terms".to_string(),
            ..CheckboxDeclaration::default()
        }));
        assert_eq!(
            shown.find_by_class(CHECKBOX_LABEL_SLOT).map(Element::text_content),
            Some("Accept terms".to_string())
        );
    }

    #[test]
    fn indeterminate_radio_with_label_and_description() {
        let radio = element(render_radio(&RadioDeclaration {
            state: RadioState::Indeterminate,
            show_label: true,
            show_description: true,
            ..RadioDeclaration::default()
        }));
        assert!(radio.find_by_class(RADIO_MINUS_SLOT).is_some());
        assert!(radio.find_by_class(RADIO_DOT_SLOT).is_none());
        assert_eq!(radio.attribute("aria-checked"), Some("false"));
        assert_eq!(radio.attribute("role"), Some("radio"));
        let text = radio.find_by_class(RADIO_TEXT_SLOT).expect("text wrapper");
        assert_eq!(
            text.find_by_class(RADIO_LABEL_SLOT).map(Element::text_content),
            Some("Label".to_string())
        );
        assert_eq!(
            text.find_by_class(RADIO_DESCRIPTION_SLOT).map(Element::text_content),
            Some("Description".to_string())
        );
    }

    #[test]
    fn radio_never_renders_both_marks() {
        for state in RadioState::ALL {
            let radio = element(render_radio(&RadioDeclaration {
                state: *state,
                ..RadioDeclaration::default()
            }));
            let control = radio.find_by_class(RADIO_CONTROL_SLOT).expect("control");
            assert!(control.children.len() <= 1, "{state}");
        }
    }

    #[test]
    fn radio_description_hidden_without_label() {
        let radio = element(render_radio(&RadioDeclaration {
            show_label: false,
            show_description: true,
            ..RadioDeclaration::default()
        }));
        assert!(radio.find_by_class(RADIO_DESCRIPTION_SLOT).is_none());
        assert!(radio.find_by_class(RADIO_TEXT_SLOT).is_none());
        assert!(radio.has_class("control-radio--description-visible"));
    }

    #[test]
    fn disabled_controls_leave_the_tab_order() {
        let checkbox = element(render_checkbox(&CheckboxDeclaration {
            is_disabled: true,
            tab_index: Some(5),
            ..CheckboxDeclaration::default()
        }));
        let radio = element(render_radio(&RadioDeclaration {
            is_disabled: true,
            ..RadioDeclaration::default()
        }));
        assert_eq!(checkbox.attribute("tabindex"), Some("-1"));
        assert_eq!(checkbox.attribute("aria-disabled"), Some("true"));
        assert_eq!(radio.attribute("tabindex"), Some("-1"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let declaration = RadioDeclaration {
            state: RadioState::Pressed,
            show_description: true,
            extra_class: Some("pref".to_string()),
            ..RadioDeclaration::default()
        };
        assert_eq!(
            to_markup(&render_radio(&declaration)),
            to_markup(&render_radio(&declaration))
        );
    }
}
