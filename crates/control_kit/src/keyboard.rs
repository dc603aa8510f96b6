//! Keyboard activation for controls that are not native buttons.
//!
//! Enter and Space are normalized into the same click a pointer produces. The
//! caller's key handler always sees the raw event first, even when the control
//! is disabled. The click goes to an explicit [`ActivationTarget`] rather than
//! the event's `currentTarget`, which delegated listeners leave pointing at
//! the window.

use web_sys::{Event, HtmlElement, KeyboardEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Keys that activate a control.
pub enum ActivationKey {
    /// Primary activation key.
    Enter,
    /// Secondary activation key.
    Space,
}

impl ActivationKey {
    /// Maps a `KeyboardEvent.key` value onto an activation key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Enter),
            " " => Some(Self::Space),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What the adapter did with a key press after forwarding it.
pub enum KeyOutcome {
    /// Activation synthesized and default suppressed.
    Activated(ActivationKey),
    /// Activation key, but the target could not be clicked. The default is
    /// left alone.
    Detached(ActivationKey),
    /// The control is disabled; nothing beyond forwarding.
    Gated,
    /// Not an activation key.
    Ignored,
}

/// A key press as seen by the adapter.
pub trait KeyInput {
    /// `KeyboardEvent.key` value.
    fn key_value(&self) -> String;

    /// Suppresses the input's default effect.
    fn suppress_default(&self);
}

impl KeyInput for KeyboardEvent {
    fn key_value(&self) -> String {
        KeyboardEvent::key(self)
    }

    fn suppress_default(&self) {
        Event::prevent_default(self);
    }
}

/// The control's own click entry point.
pub trait ActivationTarget {
    /// Clicks the control. Returns `false` when there was nothing to click.
    fn activate(&self) -> bool;
}

impl ActivationTarget for HtmlElement {
    fn activate(&self) -> bool {
        self.click();
        true
    }
}

impl<T: ActivationTarget> ActivationTarget for Option<T> {
    fn activate(&self) -> bool {
        self.as_ref().is_some_and(ActivationTarget::activate)
    }
}

/// Forwards `event` to `forward`, then clicks `target` for Enter or Space
/// unless the control is disabled.
pub fn handle_activation_key<E, T, F>(
    event: &E,
    target: &T,
    is_disabled: bool,
    forward: F,
) -> KeyOutcome
where
    E: KeyInput,
    T: ActivationTarget + ?Sized,
    F: FnOnce(&E),
{
    forward(event);

    if is_disabled {
        return KeyOutcome::Gated;
    }

    let Some(key) = ActivationKey::from_key(&event.key_value()) else {
        return KeyOutcome::Ignored;
    };
    if !target.activate() {
        return KeyOutcome::Detached(key);
    }
    event.suppress_default();
    KeyOutcome::Activated(key)
}
