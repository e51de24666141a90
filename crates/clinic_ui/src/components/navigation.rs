use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Chrome treatment for the page header.
pub enum HeaderVariant {
    /// White bar with a hairline border.
    Default,
    /// Red emergency banner.
    Emergency,
    /// Transparent, chromeless bar.
    Minimal,
}

impl Default for HeaderVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl HeaderVariant {
    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Emergency => "emergency",
            Self::Minimal => "minimal",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Default => "bg-white border-b border-neutral-200",
            Self::Emergency => "bg-danger-600 text-white border-b border-danger-700",
            Self::Minimal => "bg-transparent",
        }
    }
}

pub(crate) fn header_classes(
    variant: HeaderVariant,
    compact: bool,
    sticky: bool,
    class: Option<String>,
) -> String {
    crate::classes![
        "header w-full flex items-center",
        variant.class(),
        if compact { "h-12" } else { "h-16" },
        sticky.then_some("sticky top-0 z-50"),
        class,
    ]
}

#[component]
/// Page banner holding the logo, navigation, and action controls.
pub fn Header(
    #[prop(optional)] variant: HeaderVariant,
    #[prop(optional)] compact: bool,
    #[prop(optional)] sticky: bool,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = header_classes(variant, compact, sticky, class);
    view! {
        <header class=class role="banner" data-header-variant=variant.token()>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between w-full">
                {children()}
            </div>
        </header>
    }
}

#[component]
/// Branded home link for the header.
pub fn Logo(
    #[prop(default = String::from("/"), into)] href: String,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Clinic UI".to_string());
    let aria_label = format!("{label} home");
    view! {
        <a
            href=href
            class="logo flex items-center gap-2 font-semibold text-neutral-900 hover:opacity-80 transition-opacity duration-200"
            aria-label=aria_label
        >
            <span class="flex items-center justify-center w-8 h-8 rounded-md bg-primary-600 text-white">
                <Icon icon=IconName::Stethoscope size=IconSize::Sm />
            </span>
            <span class="text-lg">{label}</span>
        </a>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Emphasis treatment for a navigation link.
pub enum NavLinkVariant {
    /// Standard tab styling.
    Default,
    /// Red emergency destination.
    Emergency,
    /// Low-emphasis text link.
    Subtle,
}

impl Default for NavLinkVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl NavLinkVariant {
    fn class(self, active: bool) -> &'static str {
        match (self, active) {
            (Self::Default, true) => "bg-primary-100 text-primary-700",
            (Self::Default, false) => {
                "text-neutral-600 hover:text-neutral-900 hover:bg-neutral-100"
            }
            (Self::Emergency, true) => "bg-danger-600 text-white",
            (Self::Emergency, false) => "text-danger-600 hover:bg-danger-50",
            (Self::Subtle, true) => "text-primary-700 underline",
            (Self::Subtle, false) => "text-neutral-500 hover:text-neutral-700",
        }
    }
}

pub(crate) fn nav_link_classes(
    variant: NavLinkVariant,
    active: bool,
    class: Option<String>,
) -> String {
    crate::classes![
        "inline-flex items-center gap-1.5 px-3 py-2 text-sm font-medium rounded-md",
        "transition-colors duration-200",
        FOCUS_BASE,
        variant.class(active),
        class,
    ]
}

#[component]
/// Navigation destination link with active-page styling.
pub fn NavLink(
    #[prop(into)] href: String,
    #[prop(optional)] variant: NavLinkVariant,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let link_class = move || nav_link_classes(variant, active.get(), class.clone());
    view! {
        <a
            href=href
            class=link_class
            aria-current=move || active.get().then_some("page")
        >
            {icon.map(|icon| view! { <Icon icon=icon size=IconSize::Sm /> })}
            {children()}
        </a>
    }
}

#[component]
/// Link strip for page navigation.
pub fn Navigation(
    #[prop(optional)] vertical: bool,
    #[prop(default = String::from("Main navigation"), into)] label: String,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = crate::classes![
        "flex",
        if vertical {
            "flex-col items-stretch space-y-1"
        } else {
            "items-center space-x-1"
        },
        class,
    ];
    view! {
        <nav class=class role="navigation" aria-label=label>
            {children()}
        </nav>
    }
}

#[component]
/// Light/dark scheme switch bound to the ambient [`ThemeContext`].
///
/// Renders nothing outside a `ThemeProvider` so unthemed pages degrade
/// instead of panicking.
pub fn ThemeToggle(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    let Some(theme) = use_context::<ThemeContext>() else {
        logging::warn!("theme toggle outside ThemeProvider; omitting control");
        return None;
    };
    let dark = move || theme.theme.get().scheme == ColorScheme::Dark;
    let toggle_class = crate::classes![
        "theme-toggle inline-flex items-center justify-center h-10 w-10 rounded-md",
        "border border-neutral-200 bg-white text-neutral-700",
        "transition-colors duration-200 hover:bg-neutral-100",
        FOCUS_BASE,
        class,
    ];

    Some(view! {
        <button
            type="button"
            class=toggle_class
            aria-pressed=move || dark().to_string()
            aria-label=move || {
                if dark() { "Switch to light scheme" } else { "Switch to dark scheme" }
            }
            data-scheme=move || theme.theme.get().scheme.token()
            on:click=move |_| theme.toggle_scheme()
        >
            <Show
                when=dark
                fallback=|| view! { <Icon icon=IconName::Moon size=IconSize::Md /> }
            >
                <Icon icon=IconName::Sun size=IconSize::Md />
            </Show>
        </button>
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn header_variant_table() {
        let cases = [
            (HeaderVariant::Default, "bg-white border-b border-neutral-200"),
            (
                HeaderVariant::Emergency,
                "bg-danger-600 text-white border-b border-danger-700",
            ),
            (HeaderVariant::Minimal, "bg-transparent"),
        ];
        for (variant, expected) in cases {
            let classes = header_classes(variant, false, false, None);
            assert!(classes.contains(expected), "variant={variant:?} {classes}");
            assert!(classes.contains("h-16"), "variant={variant:?} {classes}");
        }
    }

    #[test]
    fn compact_sticky_header() {
        let classes = header_classes(HeaderVariant::Default, true, true, None);
        assert!(classes.contains("h-12"), "{classes}");
        assert!(!classes.contains("h-16"), "{classes}");
        assert!(classes.ends_with("sticky top-0 z-50"), "{classes}");
    }

    #[test]
    fn nav_link_active_styling_per_variant() {
        let cases = [
            (NavLinkVariant::Default, true, "bg-primary-100 text-primary-700"),
            (
                NavLinkVariant::Default,
                false,
                "text-neutral-600 hover:text-neutral-900 hover:bg-neutral-100",
            ),
            (NavLinkVariant::Emergency, true, "bg-danger-600 text-white"),
            (NavLinkVariant::Emergency, false, "text-danger-600 hover:bg-danger-50"),
            (NavLinkVariant::Subtle, true, "text-primary-700 underline"),
            (NavLinkVariant::Subtle, false, "text-neutral-500 hover:text-neutral-700"),
        ];
        for (variant, active, expected) in cases {
            let classes = nav_link_classes(variant, active, None);
            assert!(
                classes.contains(expected),
                "variant={variant:?} active={active} {classes}",
            );
            assert!(classes.contains(FOCUS_BASE), "variant={variant:?} {classes}");
        }
    }

    #[test]
    fn nav_link_custom_class_lands_last() {
        let classes = nav_link_classes(NavLinkVariant::Default, false, Some("ml-auto".into()));
        assert!(classes.ends_with("ml-auto"), "{classes}");
    }
}
