//! Interaction models behind the interactive stories and the demo page.
//!
//! Each model owns its args, records the callbacks a story would observe, and
//! routes key presses through the same activation adapter the controls use.

use std::cell::Cell;

use control_kit::{
    handle_activation_key, render_checkbox, render_radio, ActivationTarget, CheckboxDeclaration,
    CheckboxState, KeyInput, KeyOutcome, PresentationNode, RadioDeclaration, RadioState,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Callback invocation counts.
pub struct CallLog {
    /// Click handler invocations.
    pub clicks: u32,
    /// Key handler invocations.
    pub keydowns: u32,
}

impl CallLog {
    /// Records one click.
    pub fn record_click(&mut self) {
        self.clicks += 1;
    }

    /// Records one key press.
    pub fn record_keydown(&mut self) {
        self.keydowns += 1;
    }
}

struct ModelKey<'a>(&'a str);

impl KeyInput for ModelKey<'_> {
    fn key_value(&self) -> String {
        self.0.to_string()
    }

    fn suppress_default(&self) {}
}

#[derive(Default)]
struct ModelTarget(Cell<bool>);

impl ActivationTarget for ModelTarget {
    fn activate(&self) -> bool {
        self.0.set(true);
        true
    }
}

/// Forwards `key` into `calls` and reports whether the control should click.
fn dispatch_key(key: &str, is_disabled: bool, calls: &mut CallLog) -> (KeyOutcome, bool) {
    let target = ModelTarget::default();
    let outcome =
        handle_activation_key(&ModelKey(key), &target, is_disabled, |_| calls.record_keydown());
    (outcome, target.0.get())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Checkbox whose clicks flip its checked arg.
///
/// The rendered control is checked when either the arg is checked or the
/// declared state is pressed, and renders as pressed whenever it is checked.
pub struct CheckboxToggle {
    args: CheckboxDeclaration,
    /// Recorded callbacks.
    pub calls: CallLog,
}

impl CheckboxToggle {
    /// Model over `args`.
    pub fn new(args: CheckboxDeclaration) -> Self {
        Self {
            args,
            calls: CallLog::default(),
        }
    }

    /// Current args.
    pub fn args(&self) -> &CheckboxDeclaration {
        &self.args
    }

    /// Whether the control is currently checked.
    pub fn checked(&self) -> bool {
        self.args.is_checked || self.args.state == CheckboxState::Pressed
    }

    /// Declaration passed to the control.
    pub fn declaration(&self) -> CheckboxDeclaration {
        let checked = self.checked();
        CheckboxDeclaration {
            state: if checked {
                CheckboxState::Pressed
            } else {
                CheckboxState::Default
            },
            is_checked: checked,
            ..self.args.clone()
        }
    }

    /// Pointer click.
    pub fn click(&mut self) {
        self.calls.record_click();
        self.args.is_checked = !self.checked();
    }

    /// Key press on the focused control.
    pub fn press_key(&mut self, key: &str) -> KeyOutcome {
        let is_disabled = self.declaration().resolve().is_disabled;
        let (outcome, activated) = dispatch_key(key, is_disabled, &mut self.calls);
        if activated {
            self.click();
        }
        outcome
    }

    /// Presentation tree of the control.
    pub fn render(&self) -> PresentationNode {
        render_checkbox(&self.declaration())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Radio that renders pressed while selected.
pub struct RadioToggle {
    args: RadioDeclaration,
    selected: bool,
    toggles: bool,
    /// Recorded callbacks.
    pub calls: CallLog,
}

impl RadioToggle {
    /// Radio whose clicks toggle selection.
    pub fn new(args: RadioDeclaration) -> Self {
        Self {
            args,
            selected: false,
            toggles: true,
            calls: CallLog::default(),
        }
    }

    /// The demo page's "Medication reminders" radio, label and description
    /// shown.
    pub fn medication_reminders() -> Self {
        Self::new(RadioDeclaration {
            show_label: true,
            show_description: true,
            label_text: "Medication reminders".to_string(),
            description_text: "Enable daily reminder notifications".to_string(),
            ..RadioDeclaration::default()
        })
    }

    /// Radio that only records clicks; its declared state never changes.
    pub fn recording(args: RadioDeclaration) -> Self {
        Self {
            toggles: false,
            ..Self::new(args)
        }
    }

    /// Whether the radio is selected.
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Declaration passed to the control.
    pub fn declaration(&self) -> RadioDeclaration {
        if !self.toggles {
            return self.args.clone();
        }
        RadioDeclaration {
            state: if self.selected {
                RadioState::Pressed
            } else {
                RadioState::Default
            },
            ..self.args.clone()
        }
    }

    /// Pointer click.
    pub fn click(&mut self) {
        self.calls.record_click();
        if self.toggles {
            self.selected = !self.selected;
        }
    }

    /// Key press on the focused control.
    pub fn press_key(&mut self, key: &str) -> KeyOutcome {
        let is_disabled = self.declaration().resolve().is_disabled;
        let (outcome, activated) = dispatch_key(key, is_disabled, &mut self.calls);
        if activated {
            self.click();
        }
        outcome
    }

    /// Presentation tree of the control.
    pub fn render(&self) -> PresentationNode {
        render_radio(&self.declaration())
    }
}
