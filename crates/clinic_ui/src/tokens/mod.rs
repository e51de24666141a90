//! Semantic design tokens and their class-fragment lookup tables.
//!
//! Every dimension is a closed enum whose lookups are total: each value maps
//! to exactly one non-empty fragment, so out-of-range tokens are
//! unrepresentable in typed code. Values arriving from outside the type
//! system (storage, pickers, configuration) parse through [`FromStr`] and
//! fail with an [`UnknownTokenError`] naming the value and the table; render
//! paths resolve that to a default and log rather than panic.
//!
//! When several dimensions style one element, components query each table
//! independently and merge the fragments in the fixed order
//! intent → variant → size → state → custom, so later dimensions win under
//! the resolver's last-occurrence rule.

use std::str::FromStr;

use thiserror::Error;

mod color;
mod css;
mod size;

pub use color::{
    color_class, css_var, semantic_color_class, ColorAlias, ColorFamily, ColorProperty, Shade,
};
pub use css::design_token_stylesheet;
pub use size::SizeClasses;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {table} token: {value:?}")]
/// A dynamic token name that matched no entry in the queried table.
pub struct UnknownTokenError {
    /// The rejected input.
    pub value: String,
    /// The table that rejected it.
    pub table: &'static str,
}

impl UnknownTokenError {
    pub(crate) fn new(value: &str, table: &'static str) -> Self {
        Self {
            value: value.to_string(),
            table,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Semantic color dimension shared by every styled component.
pub enum Intent {
    /// Main call-to-action styling.
    Primary,
    /// Secondary, lower-emphasis actions.
    Secondary,
    /// Positive actions such as save and confirm.
    Success,
    /// Actions that warrant care before proceeding.
    Caution,
    /// Destructive or alarming actions.
    Danger,
    /// Informational styling.
    Info,
}

impl Default for Intent {
    fn default() -> Self {
        Self::Primary
    }
}

impl Intent {
    /// Every intent, in table order.
    pub const ALL: [Self; 6] = [
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Caution,
        Self::Danger,
        Self::Info,
    ];

    /// Kebab-case token form used in class names and persistence.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Caution => "caution",
            Self::Danger => "danger",
            Self::Info => "info",
        }
    }

    /// Focus-ring color fragment for this intent.
    pub fn focus_ring_class(self) -> &'static str {
        match self {
            Self::Primary => "focus-visible:ring-primary",
            Self::Secondary => "focus-visible:ring-secondary",
            Self::Success => "focus-visible:ring-success",
            Self::Caution => "focus-visible:ring-caution",
            Self::Danger => "focus-visible:ring-danger",
            Self::Info => "focus-visible:ring-info",
        }
    }
}

impl FromStr for Intent {
    type Err = UnknownTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|intent| intent.token() == value)
            .ok_or_else(|| UnknownTokenError::new(value, "intent"))
    }
}

/// Shared focus baseline applied before the per-intent ring color.
pub const FOCUS_BASE: &str =
    "focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2";

/// Wider, high-offset ring for medical device navigation.
pub const FOCUS_MEDICAL_DEVICE: &str =
    "focus-visible:ring-4 focus-visible:ring-primary focus-visible:ring-offset-4";

/// Zero-offset danger ring for emergency surfaces.
pub const FOCUS_EMERGENCY: &str =
    "focus-visible:ring-4 focus-visible:ring-danger focus-visible:ring-offset-0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Component sizing steps.
pub enum ComponentSize {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Default size.
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
}

impl Default for ComponentSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ComponentSize {
    /// Every size, smallest first.
    pub const ALL: [Self; 5] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

impl FromStr for ComponentSize {
    type Err = UnknownTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.token() == value)
            .ok_or_else(|| UnknownTokenError::new(value, "size"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual treatment selector, independent of [`Intent`].
pub enum Variant {
    /// Solid fill.
    Filled,
    /// Border with transparent body.
    Outlined,
    /// Tinted low-emphasis fill.
    Soft,
    /// No fill or border until hovered.
    Ghost,
    /// Raised with shadow.
    Elevated,
}

impl Default for Variant {
    fn default() -> Self {
        Self::Filled
    }
}

impl Variant {
    /// Every variant, in table order.
    pub const ALL: [Self; 5] = [
        Self::Filled,
        Self::Outlined,
        Self::Soft,
        Self::Ghost,
        Self::Elevated,
    ];

    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Outlined => "outlined",
            Self::Soft => "soft",
            Self::Ghost => "ghost",
            Self::Elevated => "elevated",
        }
    }
}

impl FromStr for Variant {
    type Err = UnknownTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.token() == value)
            .ok_or_else(|| UnknownTokenError::new(value, "variant"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual treatment for the form-control family.
pub enum FormVariant {
    /// Underlined baseline treatment.
    Default,
    /// Tinted fill.
    Filled,
    /// Full border.
    Outlined,
    /// Borderless flat field.
    Flat,
}

impl Default for FormVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl FormVariant {
    /// Every form variant, in table order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Filled, Self::Outlined, Self::Flat];

    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Filled => "filled",
            Self::Outlined => "outlined",
            Self::Flat => "flat",
        }
    }
}

impl FromStr for FormVariant {
    type Err = UnknownTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.token() == value)
            .ok_or_else(|| UnknownTokenError::new(value, "form variant"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Spacing steps of the utility scale consumed by gaps and padding.
pub enum Spacing {
    /// No spacing.
    Zero,
    /// 0.25rem.
    One,
    /// 0.5rem.
    Two,
    /// 0.75rem.
    Three,
    /// 1rem.
    Four,
    /// 1.5rem.
    Six,
    /// 2rem.
    Eight,
    /// 3rem.
    Twelve,
    /// 4rem.
    Sixteen,
}

impl Default for Spacing {
    fn default() -> Self {
        Self::Four
    }
}

impl Spacing {
    /// Every spacing step, smallest first.
    pub const ALL: [Self; 9] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Six,
        Self::Eight,
        Self::Twelve,
        Self::Sixteen,
    ];

    /// Numeric token form matching the utility scale.
    pub fn token(self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Six => "6",
            Self::Eight => "8",
            Self::Twelve => "12",
            Self::Sixteen => "16",
        }
    }

    /// CSS length backing this step.
    pub fn rem(self) -> &'static str {
        match self {
            Self::Zero => "0px",
            Self::One => "0.25rem",
            Self::Two => "0.5rem",
            Self::Three => "0.75rem",
            Self::Four => "1rem",
            Self::Six => "1.5rem",
            Self::Eight => "2rem",
            Self::Twelve => "3rem",
            Self::Sixteen => "4rem",
        }
    }

    /// Flex/grid gap fragment.
    pub fn gap_class(self) -> &'static str {
        match self {
            Self::Zero => "gap-0",
            Self::One => "gap-1",
            Self::Two => "gap-2",
            Self::Three => "gap-3",
            Self::Four => "gap-4",
            Self::Six => "gap-6",
            Self::Eight => "gap-8",
            Self::Twelve => "gap-12",
            Self::Sixteen => "gap-16",
        }
    }

    /// Uniform padding fragment.
    pub fn padding_class(self) -> &'static str {
        match self {
            Self::Zero => "p-0",
            Self::One => "p-1",
            Self::Two => "p-2",
            Self::Three => "p-3",
            Self::Four => "p-4",
            Self::Six => "p-6",
            Self::Eight => "p-8",
            Self::Twelve => "p-12",
            Self::Sixteen => "p-16",
        }
    }
}

impl FromStr for Spacing {
    type Err = UnknownTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|spacing| spacing.token() == value)
            .ok_or_else(|| UnknownTokenError::new(value, "spacing"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Cross-axis alignment for layout primitives.
pub enum Alignment {
    /// Align to the start.
    Start,
    /// Center items.
    Center,
    /// Align to the end.
    End,
    /// Stretch to fill.
    Stretch,
    /// Align text baselines.
    Baseline,
}

impl Default for Alignment {
    fn default() -> Self {
        Self::Stretch
    }
}

impl Alignment {
    /// Every alignment, in table order.
    pub const ALL: [Self; 5] = [
        Self::Start,
        Self::Center,
        Self::End,
        Self::Stretch,
        Self::Baseline,
    ];

    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
            Self::Stretch => "stretch",
            Self::Baseline => "baseline",
        }
    }

    /// Flex `items-*` fragment.
    pub fn items_class(self) -> &'static str {
        match self {
            Self::Start => "items-start",
            Self::Center => "items-center",
            Self::End => "items-end",
            Self::Stretch => "items-stretch",
            Self::Baseline => "items-baseline",
        }
    }
}

impl FromStr for Alignment {
    type Err = UnknownTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alignment| alignment.token() == value)
            .ok_or_else(|| UnknownTokenError::new(value, "alignment"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Main-axis distribution for layout primitives.
pub enum Justify {
    /// Pack at the start.
    Start,
    /// Center the run.
    Center,
    /// Pack at the end.
    End,
    /// Space between items.
    Between,
    /// Space around items.
    Around,
    /// Even spacing throughout.
    Evenly,
}

impl Default for Justify {
    fn default() -> Self {
        Self::Start
    }
}

impl Justify {
    /// Every justification, in table order.
    pub const ALL: [Self; 6] = [
        Self::Start,
        Self::Center,
        Self::End,
        Self::Between,
        Self::Around,
        Self::Evenly,
    ];

    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
            Self::Between => "between",
            Self::Around => "around",
            Self::Evenly => "evenly",
        }
    }

    /// Flex `justify-*` fragment.
    pub fn justify_class(self) -> &'static str {
        match self {
            Self::Start => "justify-start",
            Self::Center => "justify-center",
            Self::End => "justify-end",
            Self::Between => "justify-between",
            Self::Around => "justify-around",
            Self::Evenly => "justify-evenly",
        }
    }
}

impl FromStr for Justify {
    type Err = UnknownTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|justify| justify.token() == value)
            .ok_or_else(|| UnknownTokenError::new(value, "justify"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Clinical priority grading carried by alerting surfaces.
pub enum ClinicalPriority {
    /// Life-threatening; renders with danger styling.
    Critical,
    /// Needs prompt attention; renders with caution styling.
    Urgent,
    /// Routine care; renders with informational styling.
    Routine,
    /// Stable; renders with success styling.
    Stable,
}

impl Default for ClinicalPriority {
    fn default() -> Self {
        Self::Routine
    }
}

impl ClinicalPriority {
    /// Every priority, most severe first.
    pub const ALL: [Self; 4] = [Self::Critical, Self::Urgent, Self::Routine, Self::Stable];

    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Urgent => "urgent",
            Self::Routine => "routine",
            Self::Stable => "stable",
        }
    }

    /// The intent that styles this priority.
    pub fn intent(self) -> Intent {
        match self {
            Self::Critical => Intent::Danger,
            Self::Urgent => Intent::Caution,
            Self::Routine => Intent::Info,
            Self::Stable => Intent::Success,
        }
    }
}

impl FromStr for ClinicalPriority {
    type Err = UnknownTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.token() == value)
            .ok_or_else(|| UnknownTokenError::new(value, "clinical priority"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named compound styling rules triggered by specific prop combinations.
///
/// Each rule is an explicit table entry rather than an inline conditional, so
/// the full set is enumerable and testable.
pub enum CompoundVariant {
    /// Medical-device mode plus emergency plus caution intent on a button.
    CriticalAction,
}

impl CompoundVariant {
    /// Extra fragment contributed by the rule, merged after state fragments.
    pub fn class(self) -> &'static str {
        match self {
            Self::CriticalAction => "btn-critical-action",
        }
    }

    /// Resolves the compound rule matching a button's prop combination.
    pub fn for_button(medical_device_mode: bool, emergency: bool, intent: Intent) -> Option<Self> {
        (medical_device_mode && emergency && intent == Intent::Caution)
            .then_some(Self::CriticalAction)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_dimension_round_trips_through_its_token() {
        for intent in Intent::ALL {
            assert_eq!(intent.token().parse::<Intent>(), Ok(intent));
            assert!(!intent.focus_ring_class().is_empty());
        }
        for size in ComponentSize::ALL {
            assert_eq!(size.token().parse::<ComponentSize>(), Ok(size));
        }
        for variant in Variant::ALL {
            assert_eq!(variant.token().parse::<Variant>(), Ok(variant));
        }
        for variant in FormVariant::ALL {
            assert_eq!(variant.token().parse::<FormVariant>(), Ok(variant));
        }
        for spacing in Spacing::ALL {
            assert_eq!(spacing.token().parse::<Spacing>(), Ok(spacing));
            assert!(!spacing.rem().is_empty());
        }
        for alignment in Alignment::ALL {
            assert_eq!(alignment.token().parse::<Alignment>(), Ok(alignment));
        }
        for justify in Justify::ALL {
            assert_eq!(justify.token().parse::<Justify>(), Ok(justify));
        }
        for priority in ClinicalPriority::ALL {
            assert_eq!(priority.token().parse::<ClinicalPriority>(), Ok(priority));
        }
    }

    #[test]
    fn class_lookups_are_total_and_non_empty() {
        for spacing in Spacing::ALL {
            assert_eq!(spacing.gap_class(), format!("gap-{}", spacing.token()));
            assert_eq!(spacing.padding_class(), format!("p-{}", spacing.token()));
        }
        for alignment in Alignment::ALL {
            assert_eq!(
                alignment.items_class(),
                format!("items-{}", alignment.token())
            );
        }
        for justify in Justify::ALL {
            assert_eq!(
                justify.justify_class(),
                format!("justify-{}", justify.token())
            );
        }
    }

    #[test]
    fn unknown_tokens_name_the_table() {
        let err = "blazing".parse::<Intent>().unwrap_err();
        assert_eq!(err.value, "blazing");
        assert_eq!(err.table, "intent");
        assert_eq!(err.to_string(), "unknown intent token: \"blazing\"");

        assert!("xxl".parse::<ComponentSize>().is_err());
        assert!("5".parse::<Spacing>().is_err());
    }

    #[test]
    fn clinical_priority_maps_totally_onto_intent() {
        let cases = [
            (ClinicalPriority::Critical, Intent::Danger),
            (ClinicalPriority::Urgent, Intent::Caution),
            (ClinicalPriority::Routine, Intent::Info),
            (ClinicalPriority::Stable, Intent::Success),
        ];
        for (priority, expected) in cases {
            assert_eq!(priority.intent(), expected, "priority={priority:?}");
        }
    }

    #[test]
    fn critical_action_requires_all_three_conditions() {
        let cases = [
            (true, true, Intent::Caution, Some(CompoundVariant::CriticalAction)),
            (false, true, Intent::Caution, None),
            (true, false, Intent::Caution, None),
            (true, true, Intent::Danger, None),
            (false, false, Intent::Primary, None),
        ];
        for (device, emergency, intent, expected) in cases {
            assert_eq!(
                CompoundVariant::for_button(device, emergency, intent),
                expected,
                "device={device} emergency={emergency} intent={intent:?}"
            );
        }
    }
}
