//! Variant and interaction-state tokens shared by the control family.
//!
//! Every token enum serializes, parses, and renders with the same lowercase
//! token that appears in the `control-*--<token>` class contract.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Text did not match any token of the requested enum.
#[error("unknown {kind} token `{token}`")]
pub struct ParseTokenError {
    /// Name of the token family that rejected the input.
    pub kind: &'static str,
    /// The rejected input.
    pub token: String,
}

/// Interaction-state enums that share the disabled-override rule.
pub trait ControlState: Copy + Eq + fmt::Debug {
    /// The state a disabled control is forced into.
    const DISABLED: Self;
}

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Stable class-name token.
            pub fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }

        impl FromStr for $name {
            type Err = ParseTokenError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                match raw {
                    $($token => Ok(Self::$variant),)+
                    _ => Err(ParseTokenError {
                        kind: $kind,
                        token: raw.to_string(),
                    }),
                }
            }
        }
    };
}

token_enum! {
    /// Push-button visual variants.
    ButtonVariant, "button variant" {
        /// Filled, emphasized action.
        #[default]
        Primary => "primary",
        /// Outlined action.
        Secondary => "secondary",
        /// Text-only action.
        Tertiary => "tertiary",
    }
}

token_enum! {
    /// Push-button interaction states.
    ButtonState, "button state" {
        /// Resting state.
        #[default]
        Default => "default",
        /// Pointer hover.
        Hover => "hover",
        /// Keyboard focus.
        Focus => "focus",
        /// Active press.
        Pressed => "pressed",
        /// Non-interactive.
        Disabled => "disabled",
    }
}

token_enum! {
    /// Checkbox interaction states. `Pressed` renders as checked.
    CheckboxState, "checkbox state" {
        /// Resting state.
        #[default]
        Default => "default",
        /// Pointer hover.
        Hover => "hover",
        /// Keyboard focus.
        Focus => "focus",
        /// Pressed (checked) state.
        Pressed => "pressed",
        /// Non-interactive.
        Disabled => "disabled",
    }
}

token_enum! {
    /// Radio interaction states.
    RadioState, "radio state" {
        /// Resting state.
        #[default]
        Default => "default",
        /// Pointer hover.
        Hover => "hover",
        /// Keyboard focus.
        Focus => "focus",
        /// Pressed (selected) state, rendered with the dot mark.
        Pressed => "pressed",
        /// Mixed state, rendered with the minus mark.
        Indeterminate => "indeterminate",
        /// Non-interactive.
        Disabled => "disabled",
    }
}

token_enum! {
    /// Native `type` attribute of the push-button.
    ButtonType, "button type" {
        /// Plain button; never submits a surrounding form.
        #[default]
        Button => "button",
        /// Form submit button.
        Submit => "submit",
        /// Form reset button.
        Reset => "reset",
    }
}

impl ControlState for ButtonState {
    const DISABLED: Self = Self::Disabled;
}

impl ControlState for CheckboxState {
    const DISABLED: Self = Self::Disabled;
}

impl ControlState for RadioState {
    const DISABLED: Self = Self::Disabled;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tokens_parse_back_to_their_variant() {
        for state in RadioState::ALL {
            assert_eq!(state.token().parse::<RadioState>(), Ok(*state));
        }
        for variant in ButtonVariant::ALL {
            assert_eq!(variant.to_string().parse::<ButtonVariant>(), Ok(*variant));
        }
    }

    #[test]
    fn unknown_token_reports_kind_and_input() {
        let err = "indeterminate".parse::<CheckboxState>().unwrap_err();
        assert_eq!(err.kind, "checkbox state");
        assert_eq!(err.to_string(), "unknown checkbox state token `indeterminate`");
    }

    #[test]
    fn serde_uses_class_tokens() {
        let json = serde_json::to_string(&RadioState::Indeterminate).expect("serialize");
        assert_eq!(json, "\"indeterminate\"");
        let parsed: ButtonVariant = serde_json::from_str("\"tertiary\"").expect("deserialize");
        assert_eq!(parsed, ButtonVariant::Tertiary);
    }

    #[test]
    fn defaults_match_declared_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonState::default(), ButtonState::Default);
        assert_eq!(ButtonType::default().token(), "button");
        assert_eq!(RadioState::default(), RadioState::Default);
    }
}
