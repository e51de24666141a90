//! Clinical UI components grouped by category.
//!
//! Every component resolves its class string through the token tables and
//! the [`crate::classes!`] resolver, with the caller's `class` override
//! merged last. Healthcare flags (`emergency`, `medical_device_mode`) are
//! ordinary boolean props; shortcut-aware components route key events
//! through the registry dispatcher instead of ad-hoc key matching.

use std::str::FromStr;

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::attrs::ExtraAttrs;
use crate::icon::{Icon, IconName, IconSize};
use crate::shortcuts::{
    dispatch_shortcut, quick_select_index, shortcut_hint, KeyPress, ShortcutAction,
    ShortcutContext,
};
use crate::theme::{ColorScheme, ThemeContext};
use crate::tokens::{
    color_class, semantic_color_class, Alignment, ClinicalPriority, ColorAlias, ColorFamily,
    ColorProperty, ComponentSize, CompoundVariant, FormVariant, Intent, Justify, Shade, Spacing,
    UnknownTokenError, Variant, FOCUS_BASE, FOCUS_EMERGENCY, FOCUS_MEDICAL_DEVICE,
};

mod controls;
mod feedback;
mod forms;
mod layout;
mod navigation;
mod structure;
mod typography;

pub use controls::Button;
pub use feedback::{Alert, Badge};
pub use forms::{
    Checkbox, FieldLayout, FieldStatus, FormField, InputKind, MedicalValidation, RadioGroup,
    RadioOption, ResizeMode, Select, SelectGroup, SelectOption, TextArea, TextAreaPurpose,
    TextInput, ValidationKind, ValueRange,
};
pub use layout::{
    Column, Container, ContainerContext, ContainerSize, Grid, GridContext, GridItem, Row, Stack,
    StackDirection,
};
pub use navigation::{Header, HeaderVariant, Logo, NavLink, NavLinkVariant, Navigation, ThemeToggle};
pub use structure::{
    Card, CardBody, CardFooter, CardHeader, CardPadding, CardPriority, CardPurpose, FooterAlign,
    HeaderEmphasis, PatientStatus,
};
pub use typography::{
    Heading, HeadingLevel, Text, TextAlign, TextPurpose, TextRole, TextTransform, TextWeight,
};

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
