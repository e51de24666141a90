//! Clinical UI component library for Leptos care-delivery applications.
//!
//! The crate owns the design-token tables, the conditional class resolver,
//! themed components from buttons to form fields, a centralized icon API,
//! and the declarative keyboard-shortcut map shared by clinical surfaces.
//! Applications compose these parts instead of emitting ad hoc markup or
//! hand-assembled utility class strings.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod classes;

mod attrs;
mod components;
mod icon;
mod shortcuts;
mod theme;
mod tokens;

pub use attrs::{ExtraAttrs, UnknownAttributeError};
pub use classes::{resolve_classes, ClassFragment};
pub use components::{
    Alert, Badge, Button, Card, CardBody, CardFooter, CardHeader, CardPadding, CardPriority,
    CardPurpose, Checkbox, Column, Container, ContainerContext, ContainerSize, FieldLayout,
    FieldStatus, FooterAlign, FormField, Grid, GridContext, GridItem, Header, HeaderEmphasis,
    HeaderVariant, Heading, HeadingLevel, InputKind, Logo, MedicalValidation, NavLink,
    NavLinkVariant, Navigation, PatientStatus, RadioGroup, RadioOption, ResizeMode, Row, Select,
    SelectGroup, SelectOption, Stack, StackDirection, Text, TextAlign, TextArea, TextAreaPurpose,
    TextInput, TextPurpose, TextRole, TextTransform, TextWeight, ThemeToggle, ValidationKind,
    ValueRange,
};
pub use icon::{icon_for_name, Icon, IconName, IconSize};
pub use shortcuts::{
    dispatch_shortcut, quick_select_index, resolve_shortcut, shortcut_hint, KeyCombo, KeyPress,
    ShortcutAction, ShortcutContext, SHORTCUTS,
};
pub use theme::{use_theme, CareTheme, ColorScheme, Theme, ThemeContext, ThemeProvider};
pub use tokens::{
    color_class, css_var, design_token_stylesheet, semantic_color_class, Alignment,
    ClinicalPriority, ColorAlias, ColorFamily, ColorProperty, ComponentSize, CompoundVariant,
    FormVariant, Intent, Justify, Shade, SizeClasses, Spacing, UnknownTokenError, Variant,
    FOCUS_BASE, FOCUS_EMERGENCY, FOCUS_MEDICAL_DEVICE,
};

/// Convenience imports for application crates composing clinical pages.
pub mod prelude {
    pub use crate::{
        use_theme, Alert, Alignment, Badge, Button, Card, CardBody, CardFooter, CardHeader,
        CardPadding, CardPriority, CardPurpose, CareTheme, Checkbox, ClinicalPriority, ColorScheme,
        Column, ComponentSize, Container, ContainerContext, ContainerSize, ExtraAttrs, FieldLayout,
        FieldStatus, FooterAlign, FormField, FormVariant, Grid, GridContext, GridItem, Header,
        HeaderEmphasis, HeaderVariant, Heading, HeadingLevel, Icon, IconName, IconSize, InputKind,
        Intent, Justify, Logo, MedicalValidation, NavLink, NavLinkVariant, Navigation,
        PatientStatus, RadioGroup, RadioOption, ResizeMode, Row, Select, SelectGroup, SelectOption,
        ShortcutAction, ShortcutContext, Spacing, Stack, StackDirection, Text, TextAlign, TextArea,
        TextAreaPurpose, TextInput, TextPurpose, TextRole, TextTransform, TextWeight, Theme,
        ThemeContext, ThemeProvider, ThemeToggle, ValidationKind, ValueRange, Variant,
    };
}
