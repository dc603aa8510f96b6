//! Story fixtures: named prop permutations rendered for visual review.

use control_kit::{
    render_button_content, render_checkbox, render_radio, ButtonDeclaration, ButtonState,
    ButtonVariant, CheckboxDeclaration, CheckboxState, Element, PresentationNode,
    RadioDeclaration, RadioState,
};
use serde::{Deserialize, Serialize};

/// Leading icon glyph of the icon story.
pub const LEADING_ICON_GLYPH: &str = "+";
/// Trailing icon glyph of the icon story.
pub const TRAILING_ICON_GLYPH: &str = "\u{2192}";

const LONG_BUTTON_TEXT: &str = "Review prescription details before continuing to the next step";
const LONG_RADIO_TEXT: &str =
    "Review prescription details before final submission to the pharmacy team";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Control documented by a story.
pub enum ComponentKind {
    /// Push-button.
    Button,
    /// Checkbox.
    Checkbox,
    /// Radio.
    Radio,
}

impl ComponentKind {
    /// Every component, in catalog order.
    pub const ALL: [Self; 3] = [Self::Button, Self::Checkbox, Self::Radio];

    /// Catalog title, `Components/<Name>`.
    pub fn title(self) -> &'static str {
        match self {
            Self::Button => "Components/ControlButton",
            Self::Checkbox => "Components/ControlCheckbox",
            Self::Radio => "Components/ControlRadio",
        }
    }

    fn display_name(self) -> &'static str {
        self.title().trim_start_matches("Components/")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
/// How a story places its variants.
pub enum Arrangement {
    /// One control.
    Single,
    /// Wrapping row.
    Row,
    /// Fixed column grid.
    Grid {
        /// Column count.
        columns: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Interactive behavior a story wires around its controls.
pub enum Interaction {
    /// Records calls only.
    Record,
    /// Checkbox whose click flips the checked arg.
    CheckboxToggle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Push-button story args.
pub struct ButtonArgs {
    /// Button props.
    pub declaration: ButtonDeclaration,
    /// Prefix the content with the leading icon glyph.
    pub show_leading_icon: bool,
    /// Suffix the content with the trailing icon glyph.
    pub show_trailing_icon: bool,
}

impl ButtonArgs {
    fn has_icons(&self) -> bool {
        self.show_leading_icon || self.show_trailing_icon
    }

    /// Label content: plain text, or the icon row when an icon is shown.
    pub fn content(&self) -> PresentationNode {
        if !self.has_icons() {
            return self.declaration.content.as_str().into();
        }
        let icon = |glyph: &str| Element::new("span").attr("aria-hidden", "true").text(glyph);
        Element::new("span")
            .attr("data-catalog-slot", "icon-row")
            .child_opt(self.show_leading_icon.then(|| icon(LEADING_ICON_GLYPH)))
            .child(Element::new("span").text(self.declaration.content.as_str()))
            .child_opt(self.show_trailing_icon.then(|| icon(TRAILING_ICON_GLYPH)))
            .into()
    }
}

impl From<ButtonDeclaration> for ButtonArgs {
    fn from(declaration: ButtonDeclaration) -> Self {
        Self {
            declaration,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "component", rename_all = "lowercase")]
/// Args of one rendered control.
pub enum StoryArgs {
    /// Push-button args.
    Button(ButtonArgs),
    /// Checkbox args.
    Checkbox(CheckboxDeclaration),
    /// Radio args.
    Radio(RadioDeclaration),
}

impl StoryArgs {
    /// Component these args belong to.
    pub fn component(&self) -> ComponentKind {
        match self {
            Self::Button(_) => ComponentKind::Button,
            Self::Checkbox(_) => ComponentKind::Checkbox,
            Self::Radio(_) => ComponentKind::Radio,
        }
    }

    /// Presentation tree of the control.
    pub fn render(&self) -> PresentationNode {
        match self {
            Self::Button(args) => render_button_content(&args.declaration, args.content()),
            Self::Checkbox(declaration) => render_checkbox(declaration),
            Self::Radio(declaration) => render_radio(declaration),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A named set of controls for review.
pub struct Story {
    /// Stable id, `components-<component>--<name>`.
    pub id: String,
    /// Documented component.
    pub component: ComponentKind,
    /// Display name.
    pub name: &'static str,
    /// Variant placement.
    pub arrangement: Arrangement,
    /// Wired behavior.
    pub interaction: Interaction,
    /// Rendered variants, in order.
    pub variants: Vec<StoryArgs>,
}

impl Story {
    fn new(component: ComponentKind, name: &'static str, variants: Vec<StoryArgs>) -> Self {
        let arrangement = if variants.len() == 1 {
            Arrangement::Single
        } else {
            Arrangement::Row
        };
        Self {
            id: story_id(component, name),
            component,
            name,
            arrangement,
            interaction: Interaction::Record,
            variants,
        }
    }

    fn grid(mut self, columns: u8) -> Self {
        self.arrangement = Arrangement::Grid { columns };
        self
    }

    fn interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = interaction;
        self
    }

    /// Presentation trees of every variant.
    pub fn render(&self) -> Vec<PresentationNode> {
        self.variants.iter().map(StoryArgs::render).collect()
    }
}

/// Kebab-case story id.
pub fn story_id(component: ComponentKind, name: &str) -> String {
    let mut slug = String::new();
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    format!(
        "components-{}--{slug}",
        component.display_name().to_ascii_lowercase()
    )
}

/// Default push-button args.
pub fn button_defaults() -> ButtonArgs {
    ButtonDeclaration::default().into()
}

/// Default checkbox args.
pub fn checkbox_defaults() -> CheckboxDeclaration {
    CheckboxDeclaration {
        tab_index: Some(0),
        ..CheckboxDeclaration::default()
    }
}

/// Default radio args.
pub fn radio_defaults() -> RadioDeclaration {
    RadioDeclaration {
        tab_index: Some(0),
        ..RadioDeclaration::default()
    }
}

fn state_title(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn button(variant: ButtonVariant, state: ButtonState, content: impl Into<String>) -> StoryArgs {
    StoryArgs::Button(
        ButtonDeclaration {
            variant,
            state,
            content: content.into(),
            ..ButtonDeclaration::default()
        }
        .into(),
    )
}

fn button_state_story(name: &'static str, variant: ButtonVariant) -> Story {
    let variants = ButtonState::ALL
        .iter()
        .map(|state| button(variant, *state, state_title(state.token())))
        .collect();
    Story::new(ComponentKind::Button, name, variants)
}

/// Push-button stories.
pub fn button_stories() -> Vec<Story> {
    let kind = ComponentKind::Button;
    let mut disabled = button_defaults();
    disabled.declaration.is_disabled = true;
    disabled.declaration.content = "Disabled".to_string();

    vec![
        button_state_story("Primary states", ButtonVariant::Primary),
        button_state_story("Secondary states", ButtonVariant::Secondary),
        button_state_story("Tertiary states", ButtonVariant::Tertiary),
        Story::new(kind, "Disabled", vec![StoryArgs::Button(disabled)]),
        Story::new(
            kind,
            "All variants",
            ButtonVariant::ALL
                .iter()
                .map(|variant| button(*variant, ButtonState::Default, state_title(variant.token())))
                .collect(),
        )
        .grid(3),
        Story::new(
            kind,
            "Long text label",
            vec![button(ButtonVariant::Primary, ButtonState::Default, LONG_BUTTON_TEXT)],
        ),
        Story::new(
            kind,
            "With leading and trailing icons",
            vec![StoryArgs::Button(ButtonArgs {
                declaration: ButtonDeclaration {
                    content: "Add medication".to_string(),
                    ..ButtonDeclaration::default()
                },
                show_leading_icon: true,
                show_trailing_icon: true,
            })],
        ),
    ]
}

fn checkbox(f: impl FnOnce(&mut CheckboxDeclaration)) -> StoryArgs {
    let mut declaration = checkbox_defaults();
    f(&mut declaration);
    StoryArgs::Checkbox(declaration)
}

/// Checkbox stories.
pub fn checkbox_stories() -> Vec<Story> {
    let kind = ComponentKind::Checkbox;
    vec![
        Story::new(kind, "Default", vec![checkbox(|_| {})])
            .interaction(Interaction::CheckboxToggle),
        Story::new(kind, "No label", vec![checkbox(|args| args.show_label = false)]),
        Story::new(
            kind,
            "Checkbox states",
            CheckboxState::ALL
                .iter()
                .map(|state| {
                    checkbox(|args| {
                        args.state = *state;
                        args.show_label = true;
                    })
                })
                .collect(),
        ),
        Story::new(
            kind,
            "Label toggle",
            vec![
                checkbox(|args| args.show_label = false),
                checkbox(|args| args.show_label = true),
            ],
        ),
    ]
}

fn radio(show_label: bool, show_description: bool, state: RadioState) -> StoryArgs {
    StoryArgs::Radio(RadioDeclaration {
        state,
        show_label,
        show_description,
        ..radio_defaults()
    })
}

fn radio_states(show_label: bool, show_description: bool) -> Vec<StoryArgs> {
    RadioState::ALL
        .iter()
        .map(|state| radio(show_label, show_description, *state))
        .collect()
}

/// Radio stories.
pub fn radio_stories() -> Vec<Story> {
    let kind = ComponentKind::Radio;
    let visibility = [(false, false), (true, false), (true, true)];
    vec![
        Story::new(kind, "Default", vec![StoryArgs::Radio(radio_defaults())]),
        Story::new(
            kind,
            "No label no description",
            vec![radio(false, false, RadioState::Default)],
        ),
        Story::new(kind, "Label only", vec![radio(true, false, RadioState::Default)]),
        Story::new(
            kind,
            "Label and description",
            vec![radio(true, true, RadioState::Default)],
        ),
        Story::new(
            kind,
            "Variants side by side",
            visibility
                .iter()
                .map(|(label, description)| radio(*label, *description, RadioState::Default))
                .collect(),
        ),
        Story::new(kind, "No label/no description states", radio_states(false, false)),
        Story::new(kind, "Label only states", radio_states(true, false)),
        Story::new(kind, "Label and description states", radio_states(true, true)),
        Story::new(
            kind,
            "All variants",
            visibility
                .iter()
                .flat_map(|(label, description)| radio_states(*label, *description))
                .collect(),
        )
        .grid(3),
        Story::new(
            kind,
            "Long text label",
            vec![StoryArgs::Radio(RadioDeclaration {
                label_text: LONG_RADIO_TEXT.to_string(),
                ..radio_defaults()
            })],
        ),
    ]
}

/// Every story, grouped by component.
pub fn all_stories() -> Vec<Story> {
    ComponentKind::ALL
        .iter()
        .flat_map(|kind| match kind {
            ComponentKind::Button => button_stories(),
            ComponentKind::Checkbox => checkbox_stories(),
            ComponentKind::Radio => radio_stories(),
        })
        .collect()
}

/// Story by id.
pub fn find_story(id: &str) -> Option<Story> {
    all_stories().into_iter().find(|story| story.id == id)
}
