//! Scoped theme configuration for themed component trees.
//!
//! The theme is an explicit value provided through Leptos context, never a
//! document-level mutation: [`ThemeProvider`] wraps its children in an
//! element carrying `data-scheme`/`data-care-theme` attributes derived from
//! the reactive theme signal, and consumers change it only through the
//! context callback.

use std::str::FromStr;

use leptos::*;

use crate::tokens::UnknownTokenError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Light or dark rendering scheme.
pub enum ColorScheme {
    /// Light surfaces, dark text.
    Light,
    /// Dark surfaces, light text.
    Dark,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::Light
    }
}

impl ColorScheme {
    /// Both schemes.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite scheme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl FromStr for ColorScheme {
    type Err = UnknownTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.token() == value)
            .ok_or_else(|| UnknownTokenError::new(value, "color scheme"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Clinical environment presets layered over the color scheme.
pub enum CareTheme {
    /// Default ward styling.
    Clinical,
    /// Softer palette for patient-facing screens.
    Comfort,
    /// Maximum-contrast preset for device displays.
    HighContrast,
    /// Saturated preset for education and demos.
    Vibrant,
}

impl Default for CareTheme {
    fn default() -> Self {
        Self::Clinical
    }
}

impl CareTheme {
    /// Every care theme, in table order.
    pub const ALL: [Self; 4] = [
        Self::Clinical,
        Self::Comfort,
        Self::HighContrast,
        Self::Vibrant,
    ];

    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Clinical => "clinical",
            Self::Comfort => "comfort",
            Self::HighContrast => "high-contrast",
            Self::Vibrant => "vibrant",
        }
    }
}

impl FromStr for CareTheme {
    type Err = UnknownTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|care| care.token() == value)
            .ok_or_else(|| UnknownTokenError::new(value, "care theme"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The complete theme value carried through context.
pub struct Theme {
    /// Light/dark scheme.
    pub scheme: ColorScheme,
    /// Clinical environment preset.
    pub care: CareTheme,
}

impl Theme {
    /// Compact `scheme/care` token form used for persistence.
    pub fn tokens(self) -> String {
        format!("{}/{}", self.scheme.token(), self.care.token())
    }

    /// Parses the [`Theme::tokens`] form.
    pub fn from_tokens(value: &str) -> Result<Self, UnknownTokenError> {
        let (scheme, care) = value
            .split_once('/')
            .ok_or_else(|| UnknownTokenError::new(value, "theme"))?;
        Ok(Self {
            scheme: scheme.parse()?,
            care: care.parse()?,
        })
    }

    /// The same theme with the color scheme flipped.
    pub fn toggled_scheme(self) -> Self {
        Self {
            scheme: self.scheme.toggled(),
            care: self.care,
        }
    }
}

#[derive(Clone, Copy)]
/// Leptos context for reading the active [`Theme`] and requesting changes.
pub struct ThemeContext {
    /// Reactive theme value.
    pub theme: RwSignal<Theme>,
    /// Change-request callback; the provider applies and republishes.
    pub set_theme: Callback<Theme>,
}

impl ThemeContext {
    /// Requests a theme change through the provider callback.
    pub fn set(&self, theme: Theme) {
        self.set_theme.call(theme);
    }

    /// Flips the light/dark scheme, keeping the care preset.
    pub fn toggle_scheme(&self) {
        self.set(self.theme.get_untracked().toggled_scheme());
    }
}

#[component]
/// Provides [`ThemeContext`] to descendants and scopes the theme attributes
/// to this subtree.
pub fn ThemeProvider(
    /// Theme applied before any change request; defaults to light/clinical.
    #[prop(optional)]
    initial: Option<Theme>,
    /// Observer invoked after each applied change (persistence hooks).
    #[prop(optional, into)]
    on_change: Option<Callback<Theme>>,
    children: Children,
) -> impl IntoView {
    let theme = create_rw_signal(initial.unwrap_or_default());

    let set_theme = Callback::new(move |next: Theme| {
        if theme.get_untracked() == next {
            return;
        }
        theme.set(next);
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(next);
        }
    });

    provide_context(ThemeContext { theme, set_theme });

    view! {
        <div
            class="theme-root"
            data-scheme=move || theme.get().scheme.token()
            data-care-theme=move || theme.get().care.token()
        >
            {children()}
        </div>
    }
}

/// Returns the current [`ThemeContext`].
///
/// # Panics
///
/// Panics if called outside [`ThemeProvider`]. Library components read the
/// context through [`use_context`] instead and fall back to
/// [`Theme::default`] when unthemed.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn theme_tokens_round_trip() {
        for scheme in ColorScheme::ALL {
            for care in CareTheme::ALL {
                let theme = Theme { scheme, care };
                assert_eq!(Theme::from_tokens(&theme.tokens()), Ok(theme));
            }
        }
        assert_eq!(Theme::default().tokens(), "light/clinical");
    }

    #[test]
    fn malformed_theme_tokens_are_rejected() {
        let err = Theme::from_tokens("dark").unwrap_err();
        assert_eq!(err.table, "theme");

        let err = Theme::from_tokens("dusk/clinical").unwrap_err();
        assert_eq!(err.table, "color scheme");
        assert_eq!(err.value, "dusk");

        let err = Theme::from_tokens("dark/sterile").unwrap_err();
        assert_eq!(err.table, "care theme");
    }

    #[test]
    fn scheme_toggle_preserves_the_care_preset() {
        let theme = Theme {
            scheme: ColorScheme::Light,
            care: CareTheme::HighContrast,
        };
        let flipped = theme.toggled_scheme();
        assert_eq!(flipped.scheme, ColorScheme::Dark);
        assert_eq!(flipped.care, CareTheme::HighContrast);
        assert_eq!(flipped.toggled_scheme(), theme);
    }
}
