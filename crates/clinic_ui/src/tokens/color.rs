//! Color scales and semantic color-class helpers.
//!
//! The palette pairs each semantic family with a 50…900 hue scale tuned for
//! clinical surfaces (softer amber for caution, sky for informational data).
//! Class helpers emit `bg-`/`text-`/`border-` fragments addressed by the
//! semantic family name; the raw hex values feed the generated custom
//! properties in [`super::design_token_stylesheet`].

use std::str::FromStr;

use super::{Intent, UnknownTokenError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Steps of a color scale, lightest first.
pub enum Shade {
    /// Faintest wash.
    S50,
    /// Very light.
    S100,
    /// Light.
    S200,
    /// Light-mid.
    S300,
    /// Mid.
    S400,
    /// Base hue.
    S500,
    /// Default emphasis step.
    S600,
    /// Hover emphasis step.
    S700,
    /// Dark.
    S800,
    /// Darkest.
    S900,
}

impl Shade {
    /// Every shade, lightest first.
    pub const ALL: [Self; 10] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
    ];

    /// Numeric token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::S50 => "50",
            Self::S100 => "100",
            Self::S200 => "200",
            Self::S300 => "300",
            Self::S400 => "400",
            Self::S500 => "500",
            Self::S600 => "600",
            Self::S700 => "700",
            Self::S800 => "800",
            Self::S900 => "900",
        }
    }
}

impl FromStr for Shade {
    type Err = UnknownTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shade| shade.token() == value)
            .ok_or_else(|| UnknownTokenError::new(value, "shade"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Hue families backing the semantic palette.
///
/// Every [`Intent`] maps onto a family; `Neutral` additionally serves
/// borders, dividers, and muted text without a semantic meaning.
pub enum ColorFamily {
    /// Brand blue.
    Primary,
    /// Supporting gray.
    Secondary,
    /// True neutral grays.
    Neutral,
    /// Confirmation green.
    Success,
    /// Clinical amber.
    Caution,
    /// Alarm red.
    Danger,
    /// Informational sky.
    Info,
}

impl ColorFamily {
    /// Every family, in palette order.
    pub const ALL: [Self; 7] = [
        Self::Primary,
        Self::Secondary,
        Self::Neutral,
        Self::Success,
        Self::Caution,
        Self::Danger,
        Self::Info,
    ];

    /// Kebab-case token form used in class names and custom properties.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Neutral => "neutral",
            Self::Success => "success",
            Self::Caution => "caution",
            Self::Danger => "danger",
            Self::Info => "info",
        }
    }

    /// Hex value for one scale step.
    pub fn hex(self, shade: Shade) -> &'static str {
        match self {
            Self::Primary => match shade {
                Shade::S50 => "#eff6ff",
                Shade::S100 => "#dbeafe",
                Shade::S200 => "#bfdbfe",
                Shade::S300 => "#93c5fd",
                Shade::S400 => "#60a5fa",
                Shade::S500 => "#3b82f6",
                Shade::S600 => "#2563eb",
                Shade::S700 => "#1d4ed8",
                Shade::S800 => "#1e40af",
                Shade::S900 => "#1e3a8a",
            },
            Self::Secondary => match shade {
                Shade::S50 => "#f9fafb",
                Shade::S100 => "#f3f4f6",
                Shade::S200 => "#e5e7eb",
                Shade::S300 => "#d1d5db",
                Shade::S400 => "#9ca3af",
                Shade::S500 => "#6b7280",
                Shade::S600 => "#4b5563",
                Shade::S700 => "#374151",
                Shade::S800 => "#1f2937",
                Shade::S900 => "#111827",
            },
            Self::Neutral => match shade {
                Shade::S50 => "#fafafa",
                Shade::S100 => "#f5f5f5",
                Shade::S200 => "#e5e5e5",
                Shade::S300 => "#d4d4d4",
                Shade::S400 => "#a3a3a3",
                Shade::S500 => "#737373",
                Shade::S600 => "#525252",
                Shade::S700 => "#404040",
                Shade::S800 => "#262626",
                Shade::S900 => "#171717",
            },
            Self::Success => match shade {
                Shade::S50 => "#f0fdf4",
                Shade::S100 => "#dcfce7",
                Shade::S200 => "#bbf7d0",
                Shade::S300 => "#86efac",
                Shade::S400 => "#4ade80",
                Shade::S500 => "#22c55e",
                Shade::S600 => "#16a34a",
                Shade::S700 => "#15803d",
                Shade::S800 => "#166534",
                Shade::S900 => "#14532d",
            },
            Self::Caution => match shade {
                Shade::S50 => "#fffbeb",
                Shade::S100 => "#fefce8",
                Shade::S200 => "#fef3c7",
                Shade::S300 => "#fde68a",
                Shade::S400 => "#fbbf24",
                Shade::S500 => "#f59e0b",
                Shade::S600 => "#d97706",
                Shade::S700 => "#b45309",
                Shade::S800 => "#92400e",
                Shade::S900 => "#78350f",
            },
            Self::Danger => match shade {
                Shade::S50 => "#fef2f2",
                Shade::S100 => "#fee2e2",
                Shade::S200 => "#fecaca",
                Shade::S300 => "#fca5a5",
                Shade::S400 => "#f87171",
                Shade::S500 => "#ef4444",
                Shade::S600 => "#dc2626",
                Shade::S700 => "#b91c1c",
                Shade::S800 => "#991b1b",
                Shade::S900 => "#7f1d1d",
            },
            Self::Info => match shade {
                Shade::S50 => "#ecfeff",
                Shade::S100 => "#e0f2fe",
                Shade::S200 => "#bae6fd",
                Shade::S300 => "#7dd3fc",
                Shade::S400 => "#38bdf8",
                Shade::S500 => "#0ea5e9",
                Shade::S600 => "#0284c7",
                Shade::S700 => "#0369a1",
                Shade::S800 => "#075985",
                Shade::S900 => "#0c4a6e",
            },
        }
    }
}

impl From<Intent> for ColorFamily {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::Primary => Self::Primary,
            Intent::Secondary => Self::Secondary,
            Intent::Success => Self::Success,
            Intent::Caution => Self::Caution,
            Intent::Danger => Self::Danger,
            Intent::Info => Self::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named emphasis steps layered over the raw scale.
pub enum ColorAlias {
    /// Washed background tint (scale 100).
    Lighter,
    /// Light accents (scale 300).
    Light,
    /// Default control emphasis (scale 600).
    Default,
    /// Hover emphasis (scale 700).
    Dark,
    /// Pressed/active emphasis (scale 800).
    Darker,
}

impl ColorAlias {
    /// Every alias, lightest first.
    pub const ALL: [Self; 5] = [
        Self::Lighter,
        Self::Light,
        Self::Default,
        Self::Dark,
        Self::Darker,
    ];

    /// The scale step the alias resolves to.
    pub fn shade(self) -> Shade {
        match self {
            Self::Lighter => Shade::S100,
            Self::Light => Shade::S300,
            Self::Default => Shade::S600,
            Self::Dark => Shade::S700,
            Self::Darker => Shade::S800,
        }
    }

    /// Custom-property suffix; `None` for the unsuffixed default.
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            Self::Lighter => Some("lighter"),
            Self::Light => Some("light"),
            Self::Default => None,
            Self::Dark => Some("dark"),
            Self::Darker => Some("darker"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The style property a color class targets.
pub enum ColorProperty {
    /// Background fill.
    Background,
    /// Foreground text.
    Text,
    /// Border color.
    Border,
}

impl ColorProperty {
    /// Utility-class prefix.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Background => "bg",
            Self::Text => "text",
            Self::Border => "border",
        }
    }
}

/// Utility-class fragment for an exact family/shade pair.
pub fn color_class(property: ColorProperty, family: ColorFamily, shade: Shade) -> String {
    format!("{}-{}-{}", property.prefix(), family.token(), shade.token())
}

/// Utility-class fragment for an intent at a named emphasis step.
pub fn semantic_color_class(property: ColorProperty, intent: Intent, alias: ColorAlias) -> String {
    color_class(property, intent.into(), alias.shade())
}

/// CSS custom-property reference for an intent's default emphasis.
pub fn css_var(intent: Intent) -> String {
    format!("var(--color-{})", intent.token())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_family_shade_pair_has_a_hex_value() {
        for family in ColorFamily::ALL {
            for shade in Shade::ALL {
                let hex = family.hex(shade);
                assert!(
                    hex.len() == 7 && hex.starts_with('#'),
                    "family={family:?} shade={shade:?} hex={hex:?}"
                );
            }
        }
    }

    #[test]
    fn semantic_classes_use_the_alias_shade() {
        let cases = [
            (
                ColorProperty::Background,
                Intent::Primary,
                ColorAlias::Default,
                "bg-primary-600",
            ),
            (
                ColorProperty::Text,
                Intent::Danger,
                ColorAlias::Dark,
                "text-danger-700",
            ),
            (
                ColorProperty::Border,
                Intent::Caution,
                ColorAlias::Lighter,
                "border-caution-100",
            ),
        ];
        for (property, intent, alias, expected) in cases {
            assert_eq!(semantic_color_class(property, intent, alias), expected);
        }
    }

    #[test]
    fn css_var_references_the_semantic_property() {
        assert_eq!(css_var(Intent::Danger), "var(--color-danger)");
        assert_eq!(css_var(Intent::Primary), "var(--color-primary)");
    }

    #[test]
    fn shade_tokens_round_trip() {
        for shade in Shade::ALL {
            assert_eq!(shade.token().parse::<Shade>(), Ok(shade));
        }
        assert!("950".parse::<Shade>().is_err());
    }
}
