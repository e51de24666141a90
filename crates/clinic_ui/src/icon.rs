//! Clinical icon catalog and SVG renderer.
//!
//! Components draw glyphs through a closed identifier set and a single
//! renderer so markup never embeds ad-hoc SVG snippets. Glyph bodies are
//! 24px stroke outlines in the Lucide style; dynamic lookups that miss the
//! catalog log a warning and render the placeholder glyph instead of
//! failing the view.

use std::fmt;
use std::str::FromStr;

use leptos::ev::MouseEvent;
use leptos::*;

use crate::tokens::{semantic_color_class, ColorAlias, ColorProperty, Intent, UnknownTokenError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic glyph identifiers used by clinical components.
pub enum IconName {
    /// Vitals waveform icon.
    Activity,
    /// Circled alert status icon.
    AlertCircle,
    /// Warning triangle icon.
    AlertTriangle,
    /// Back navigation arrow icon.
    ArrowLeft,
    /// Forward navigation arrow icon.
    ArrowRight,
    /// Notification bell icon.
    Bell,
    /// Appointment calendar icon.
    Calendar,
    /// Checkmark icon.
    Check,
    /// Circled checkmark status icon.
    CheckCircle,
    /// Collapse/expand chevron icon.
    ChevronDown,
    /// Collapse/expand chevron icon.
    ChevronUp,
    /// Chart clipboard icon.
    Clipboard,
    /// Schedule clock icon.
    Clock,
    /// Edit pencil icon.
    Edit,
    /// Observation eye icon.
    Eye,
    /// Document/report icon.
    FileText,
    /// Cardiology heart icon.
    Heart,
    /// Home/dashboard icon.
    Home,
    /// Restricted record lock icon.
    Lock,
    /// Mail envelope icon.
    Mail,
    /// Menu hamburger icon.
    Menu,
    /// Dark scheme moon icon.
    Moon,
    /// Contact phone icon.
    Phone,
    /// Medication capsule icon.
    Pill,
    /// Add action icon.
    Plus,
    /// Lookup magnifier icon.
    Search,
    /// Preferences gear icon.
    Settings,
    /// Auscultation stethoscope icon.
    Stethoscope,
    /// Light scheme sun icon.
    Sun,
    /// Temperature thermometer icon.
    Thermometer,
    /// Declining trend icon.
    TrendingDown,
    /// Rising trend icon.
    TrendingUp,
    /// Patient/profile icon.
    User,
    /// Dismiss cross icon.
    X,
    /// Circled cross status icon.
    XCircle,
}

impl IconName {
    /// Every glyph in the catalog.
    pub const ALL: [Self; 35] = [
        Self::Activity,
        Self::AlertCircle,
        Self::AlertTriangle,
        Self::ArrowLeft,
        Self::ArrowRight,
        Self::Bell,
        Self::Calendar,
        Self::Check,
        Self::CheckCircle,
        Self::ChevronDown,
        Self::ChevronUp,
        Self::Clipboard,
        Self::Clock,
        Self::Edit,
        Self::Eye,
        Self::FileText,
        Self::Heart,
        Self::Home,
        Self::Lock,
        Self::Mail,
        Self::Menu,
        Self::Moon,
        Self::Phone,
        Self::Pill,
        Self::Plus,
        Self::Search,
        Self::Settings,
        Self::Stethoscope,
        Self::Sun,
        Self::Thermometer,
        Self::TrendingDown,
        Self::TrendingUp,
        Self::User,
        Self::X,
        Self::XCircle,
    ];

    /// Stable token used for CSS hooks, dynamic lookup and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::AlertCircle => "alert-circle",
            Self::AlertTriangle => "alert-triangle",
            Self::ArrowLeft => "arrow-left",
            Self::ArrowRight => "arrow-right",
            Self::Bell => "bell",
            Self::Calendar => "calendar",
            Self::Check => "check",
            Self::CheckCircle => "check-circle",
            Self::ChevronDown => "chevron-down",
            Self::ChevronUp => "chevron-up",
            Self::Clipboard => "clipboard",
            Self::Clock => "clock",
            Self::Edit => "edit",
            Self::Eye => "eye",
            Self::FileText => "file-text",
            Self::Heart => "heart",
            Self::Home => "home",
            Self::Lock => "lock",
            Self::Mail => "mail",
            Self::Menu => "menu",
            Self::Moon => "moon",
            Self::Phone => "phone",
            Self::Pill => "pill",
            Self::Plus => "plus",
            Self::Search => "search",
            Self::Settings => "settings",
            Self::Stethoscope => "stethoscope",
            Self::Sun => "sun",
            Self::Thermometer => "thermometer",
            Self::TrendingDown => "trending-down",
            Self::TrendingUp => "trending-up",
            Self::User => "user",
            Self::X => "x",
            Self::XCircle => "x-circle",
        }
    }

    /// Raw SVG body markup for the glyph, drawn on a 24x24 stroke grid.
    fn svg_body(self) -> &'static str {
        match self {
            Self::Activity => r#"<path d="M22 12h-4l-3 9L9 3l-3 9H2"/>"#,
            Self::AlertCircle => {
                r#"<circle cx="12" cy="12" r="10"/><line x1="12" y1="8" x2="12" y2="12"/><line x1="12" y1="16" x2="12.01" y2="16"/>"#
            }
            Self::AlertTriangle => {
                r#"<path d="M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"/><line x1="12" y1="9" x2="12" y2="13"/><line x1="12" y1="17" x2="12.01" y2="17"/>"#
            }
            Self::ArrowLeft => {
                r#"<line x1="19" y1="12" x2="5" y2="12"/><polyline points="12 19 5 12 12 5"/>"#
            }
            Self::ArrowRight => {
                r#"<line x1="5" y1="12" x2="19" y2="12"/><polyline points="12 5 19 12 12 19"/>"#
            }
            Self::Bell => {
                r#"<path d="M18 8A6 6 0 0 0 6 8c0 7-3 9-3 9h18s-3-2-3-9"/><path d="M13.73 21a2 2 0 0 1-3.46 0"/>"#
            }
            Self::Calendar => {
                r#"<rect x="3" y="4" width="18" height="18" rx="2" ry="2"/><line x1="16" y1="2" x2="16" y2="6"/><line x1="8" y1="2" x2="8" y2="6"/><line x1="3" y1="10" x2="21" y2="10"/>"#
            }
            Self::Check => r#"<polyline points="20 6 9 17 4 12"/>"#,
            Self::CheckCircle => {
                r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><polyline points="22 4 12 14.01 9 11.01"/>"#
            }
            Self::ChevronDown => r#"<polyline points="6 9 12 15 18 9"/>"#,
            Self::ChevronUp => r#"<polyline points="18 15 12 9 6 15"/>"#,
            Self::Clipboard => {
                r#"<path d="M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2"/><rect x="8" y="2" width="8" height="4" rx="1" ry="1"/>"#
            }
            Self::Clock => {
                r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#
            }
            Self::Edit => {
                r#"<path d="M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"/><path d="M18.5 2.5a2.121 2.121 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z"/>"#
            }
            Self::Eye => {
                r#"<path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"/><circle cx="12" cy="12" r="3"/>"#
            }
            Self::FileText => {
                r#"<path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><polyline points="14 2 14 8 20 8"/><line x1="16" y1="13" x2="8" y2="13"/><line x1="16" y1="17" x2="8" y2="17"/><polyline points="10 9 9 9 8 9"/>"#
            }
            Self::Heart => {
                r#"<path d="M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"/>"#
            }
            Self::Home => {
                r#"<path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><polyline points="9 22 9 12 15 12 15 22"/>"#
            }
            Self::Lock => {
                r#"<rect x="3" y="11" width="18" height="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#
            }
            Self::Mail => {
                r#"<path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"/><polyline points="22,6 12,13 2,6"/>"#
            }
            Self::Menu => {
                r#"<line x1="3" y1="12" x2="21" y2="12"/><line x1="3" y1="6" x2="21" y2="6"/><line x1="3" y1="18" x2="21" y2="18"/>"#
            }
            Self::Moon => {
                r#"<path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"/>"#
            }
            Self::Phone => {
                r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#
            }
            Self::Pill => {
                r#"<path d="M10.5 20.5l10-10a4.95 4.95 0 1 0-7-7l-10 10a4.95 4.95 0 1 0 7 7z"/><path d="M8.5 8.5l7 7"/>"#
            }
            Self::Plus => {
                r#"<line x1="12" y1="5" x2="12" y2="19"/><line x1="5" y1="12" x2="19" y2="12"/>"#
            }
            Self::Search => {
                r#"<circle cx="11" cy="11" r="8"/><line x1="21" y1="21" x2="16.65" y2="16.65"/>"#
            }
            Self::Settings => {
                r#"<circle cx="12" cy="12" r="3"/><path d="M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 0 1 0 2.83 2 2 0 0 1-2.83 0l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 0 1-2 2 2 2 0 0 1-2-2v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 0 1-2.83 0 2 2 0 0 1 0-2.83l.06-.06a1.65 1.65 0 0 0 .33-1.82 1.65 1.65 0 0 0-1.51-1H3a2 2 0 0 1-2-2 2 2 0 0 1 2-2h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 0 1 0-2.83 2 2 0 0 1 2.83 0l.06.06a1.65 1.65 0 0 0 1.82.33H9a1.65 1.65 0 0 0 1-1.51V3a2 2 0 0 1 2-2 2 2 0 0 1 2 2v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 0 1 2.83 0 2 2 0 0 1 0 2.83l-.06.06a1.65 1.65 0 0 0-.33 1.82V9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 0 1 2 2 2 2 0 0 1-2 2h-.09a1.65 1.65 0 0 0-1.51 1z"/>"#
            }
            Self::Stethoscope => {
                r#"<path d="M4.8 2.3A.3.3 0 1 0 5 2H4a2 2 0 0 0-2 2v5a6 6 0 0 0 12 0V4a2 2 0 0 0-2-2h-1a.2.2 0 1 0 .3.3"/><path d="M8 15v1a6 6 0 0 0 12 0v-3"/><circle cx="20" cy="10" r="2"/>"#
            }
            Self::Sun => {
                r#"<circle cx="12" cy="12" r="5"/><line x1="12" y1="1" x2="12" y2="3"/><line x1="12" y1="21" x2="12" y2="23"/><line x1="4.22" y1="4.22" x2="5.64" y2="5.64"/><line x1="18.36" y1="18.36" x2="19.78" y2="19.78"/><line x1="1" y1="12" x2="3" y2="12"/><line x1="21" y1="12" x2="23" y2="12"/><line x1="4.22" y1="19.78" x2="5.64" y2="18.36"/><line x1="18.36" y1="5.64" x2="19.78" y2="4.22"/>"#
            }
            Self::Thermometer => {
                r#"<path d="M14 14.76V3.5a2.5 2.5 0 0 0-5 0v11.26a4.5 4.5 0 1 0 5 0z"/>"#
            }
            Self::TrendingDown => {
                r#"<polyline points="23 18 13.5 8.5 8.5 13.5 1 6"/><polyline points="17 18 23 18 23 12"/>"#
            }
            Self::TrendingUp => {
                r#"<polyline points="23 6 13.5 15.5 8.5 10.5 1 18"/><polyline points="17 6 23 6 23 12"/>"#
            }
            Self::User => {
                r#"<path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#
            }
            Self::X => {
                r#"<line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/>"#
            }
            Self::XCircle => {
                r#"<circle cx="12" cy="12" r="10"/><line x1="15" y1="9" x2="9" y2="15"/><line x1="9" y1="9" x2="15" y2="15"/>"#
            }
        }
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for IconName {
    type Err = UnknownTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.token() == s)
            .ok_or_else(|| UnknownTokenError::new(s, "icon"))
    }
}

/// Resolves a dynamic icon token, substituting the placeholder glyph for
/// unknown names.
///
/// Unknown names are logged and rendered as the circled-alert placeholder
/// rather than propagated as errors, so a stale glyph reference can never
/// break a clinical view.
pub fn icon_for_name(name: &str) -> IconName {
    match name.parse() {
        Ok(icon) => icon,
        Err(err) => {
            logging::warn!("{err}; rendering placeholder glyph");
            IconName::AlertCircle
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 12px compact icon (dense labels and hints).
    Xs,
    /// 16px small icon (inputs and buttons).
    Sm,
    /// 20px standard icon.
    Md,
    /// 24px large icon (headers and cards).
    Lg,
    /// 32px display icon (empty states and emergency banners).
    Xl,
}

impl IconSize {
    /// Every icon size, smallest first.
    pub const ALL: [Self; 5] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    /// Pixel edge length for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
            Self::Xl => 32,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

pub(crate) fn icon_classes(
    interactive: bool,
    emergency: bool,
    medical_device_mode: bool,
    intent: Option<Intent>,
) -> String {
    crate::classes![
        "ui-icon",
        interactive.then_some("cursor-pointer transition-all duration-200"),
        interactive.then_some("hover:scale-110 hover:opacity-80"),
        interactive.then_some(if medical_device_mode {
            "focus:outline-none focus:ring-4 focus:ring-primary/20 focus:ring-offset-2"
        } else {
            "focus:outline-none focus:ring-2 focus:ring-offset-2"
        }),
        emergency.then_some("animate-pulse text-danger"),
        (!emergency)
            .then(|| intent.map(|intent| {
                semantic_color_class(ColorProperty::Text, intent, ColorAlias::Default)
            }))
            .flatten(),
    ]
}

#[component]
/// Renders a catalog glyph as an inline SVG.
///
/// Without a `label` the glyph is decorative and hidden from assistive
/// technology. Interactive glyphs gain pointer affordances and keyboard
/// focus; `medical_device_mode` widens the focus ring for gloved use and
/// `emergency` pulses the glyph in the danger color.
pub fn Icon(
    /// Semantic glyph identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Md)]
    size: IconSize,
    /// Paints the glyph in an intent color instead of inheriting.
    #[prop(optional)]
    intent: Option<Intent>,
    /// Pointer and focus affordances for clickable glyphs.
    #[prop(optional)]
    interactive: bool,
    /// Pulses the glyph in the danger color.
    #[prop(optional)]
    emergency: bool,
    /// Widened focus ring for gloved or degraded-precision operation.
    #[prop(optional)]
    medical_device_mode: bool,
    /// Accessible name; omit for purely decorative glyphs.
    #[prop(optional, into)]
    label: Option<String>,
    /// Click handler for interactive glyphs.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let class = icon_classes(interactive, emergency, medical_device_mode, intent);
    let size_px = size.px().to_string();
    let decorative = label.is_none();

    view! {
        <svg
            class=class
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            role=if decorative { None } else { Some("img") }
            aria-label=label
            aria-hidden=decorative.then_some("true")
            focusable="false"
            tabindex=interactive.then_some("0")
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.call(ev);
                }
            }
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn icon_tokens_round_trip() {
        for icon in IconName::ALL {
            let parsed: IconName = icon.token().parse().unwrap();
            assert_eq!(parsed, icon, "icon={icon:?}");
        }
    }

    #[test]
    fn every_glyph_has_stroke_markup() {
        for icon in IconName::ALL {
            let body = icon.svg_body();
            assert!(body.starts_with('<'), "icon={icon:?}");
            assert!(body.ends_with("/>"), "icon={icon:?}");
        }
    }

    #[test]
    fn unknown_names_fall_back_to_placeholder() {
        assert_eq!(icon_for_name("heart"), IconName::Heart);
        assert_eq!(icon_for_name("definitely-not-a-glyph"), IconName::AlertCircle);
        assert_eq!(icon_for_name(""), IconName::AlertCircle);
    }

    #[test]
    fn icon_sizes_are_monotonic() {
        let mut last = 0;
        for size in IconSize::ALL {
            assert!(size.px() > last, "size={size:?}");
            last = size.px();
        }
    }

    #[test]
    fn interactive_emergency_classes() {
        let cases = [
            (false, false, false, None, "ui-icon"),
            (
                true,
                false,
                false,
                None,
                "ui-icon cursor-pointer transition-all duration-200 hover:scale-110 \
                 hover:opacity-80 focus:outline-none focus:ring-2 focus:ring-offset-2",
            ),
            (
                true,
                false,
                true,
                None,
                "ui-icon cursor-pointer transition-all duration-200 hover:scale-110 \
                 hover:opacity-80 focus:outline-none focus:ring-4 focus:ring-primary/20 \
                 focus:ring-offset-2",
            ),
            (false, true, false, None, "ui-icon animate-pulse text-danger"),
            (
                false,
                false,
                false,
                Some(Intent::Success),
                "ui-icon text-success-600",
            ),
            // Emergency wins over the intent color.
            (
                false,
                true,
                false,
                Some(Intent::Success),
                "ui-icon animate-pulse text-danger",
            ),
        ];
        for (interactive, emergency, device, intent, expected) in cases {
            assert_eq!(
                icon_classes(interactive, emergency, device, intent),
                expected,
                "interactive={interactive} emergency={emergency} device={device} intent={intent:?}",
            );
        }
    }
}
