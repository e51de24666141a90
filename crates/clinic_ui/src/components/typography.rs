use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// HTML element a text run renders as.
pub enum TextRole {
    /// Page heading.
    H1,
    /// Section heading.
    H2,
    /// Subsection heading.
    H3,
    /// Minor heading.
    H4,
    /// Small heading.
    H5,
    /// Smallest heading.
    H6,
    /// Paragraph copy.
    Paragraph,
    /// Inline span.
    Span,
    /// Block container.
    Div,
    /// Fine print.
    Small,
    /// Form label text.
    Label,
}

impl Default for TextRole {
    fn default() -> Self {
        Self::Paragraph
    }
}

impl TextRole {
    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Paragraph => "p",
            Self::Span => "span",
            Self::Div => "div",
            Self::Small => "small",
            Self::Label => "label",
        }
    }

    fn is_heading(self) -> bool {
        matches!(
            self,
            Self::H1 | Self::H2 | Self::H3 | Self::H4 | Self::H5 | Self::H6
        )
    }

    fn size_class(self) -> &'static str {
        match self {
            Self::H1 => "text-2xl md:text-3xl lg:text-4xl",
            Self::H2 => "text-xl md:text-2xl",
            Self::H3 => "text-lg md:text-xl",
            Self::H4 => "text-base md:text-lg",
            Self::H5 => "text-base",
            Self::H6 => "text-sm md:text-base",
            Self::Paragraph | Self::Span | Self::Div => "text-base",
            Self::Small | Self::Label => "text-sm",
        }
    }

    fn default_weight(self) -> TextWeight {
        match self {
            Self::H1 | Self::H2 => TextWeight::Bold,
            Self::H3 | Self::H4 => TextWeight::Semibold,
            Self::H5 | Self::H6 | Self::Label => TextWeight::Medium,
            Self::Paragraph | Self::Span | Self::Div | Self::Small => TextWeight::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Font weight steps.
pub enum TextWeight {
    /// Light face.
    Light,
    /// Book face.
    Normal,
    /// Medium face.
    Medium,
    /// Semibold face.
    Semibold,
    /// Bold face.
    Bold,
}

impl TextWeight {
    fn class(self) -> &'static str {
        match self {
            Self::Light => "font-light",
            Self::Normal => "font-normal",
            Self::Medium => "font-medium",
            Self::Semibold => "font-semibold",
            Self::Bold => "font-bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Horizontal text alignment.
pub enum TextAlign {
    /// Flush left.
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
    /// Justified block.
    Justify,
}

impl TextAlign {
    fn class(self) -> &'static str {
        match self {
            Self::Left => "text-left",
            Self::Center => "text-center",
            Self::Right => "text-right",
            Self::Justify => "text-justify",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Casing transform.
pub enum TextTransform {
    /// Leave casing alone.
    None,
    /// Uppercase.
    Uppercase,
    /// Lowercase.
    Lowercase,
    /// Capitalize each word.
    Capitalize,
}

impl TextTransform {
    fn class(self) -> &'static str {
        match self {
            Self::None => "normal-case",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Capitalize => "capitalize",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Editorial role of a text run, carrying weight and color presets.
pub enum TextPurpose {
    /// Section headline.
    Heading,
    /// Running copy.
    Body,
    /// Field or control label.
    Label,
    /// Supporting caption.
    Caption,
    /// Validation failure.
    Error,
    /// Cautionary note.
    Caution,
    /// Positive confirmation.
    Success,
    /// Emergency callout.
    Emergency,
}

impl Default for TextPurpose {
    fn default() -> Self {
        Self::Body
    }
}

impl TextPurpose {
    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Error => "error",
            Self::Caution => "caution",
            Self::Success => "success",
            Self::Emergency => "emergency",
        }
    }

    fn extra_class(self) -> Option<&'static str> {
        match self {
            Self::Heading => Some("scroll-mt-20"),
            Self::Body => Some("leading-relaxed"),
            Self::Label | Self::Error | Self::Caution | Self::Success => Some("leading-tight"),
            Self::Caption => Some("text-sm"),
            Self::Emergency => {
                Some("leading-tight bg-danger-100 px-2 py-1 rounded border border-danger-300")
            }
        }
    }

    fn default_weight(self) -> Option<TextWeight> {
        match self {
            Self::Heading => Some(TextWeight::Semibold),
            Self::Label | Self::Error | Self::Caution | Self::Success => Some(TextWeight::Medium),
            Self::Emergency => Some(TextWeight::Bold),
            Self::Body | Self::Caption => None,
        }
    }
}

fn text_color_class(purpose: TextPurpose, intent: Option<Intent>) -> String {
    let semantic =
        |intent| semantic_color_class(ColorProperty::Text, intent, ColorAlias::Default);
    match purpose {
        TextPurpose::Error | TextPurpose::Emergency => semantic(Intent::Danger),
        TextPurpose::Caution => semantic(Intent::Caution),
        TextPurpose::Success => semantic(Intent::Success),
        TextPurpose::Caption => "text-neutral-500".to_string(),
        _ => intent
            .map(semantic)
            .unwrap_or_else(|| "text-neutral-800".to_string()),
    }
}

/// Style inputs for a text run, mirroring the [`Text`] props so class
/// assembly stays a pure lookup.
#[derive(Debug, Default, Clone)]
pub(crate) struct TextStyle {
    pub role: TextRole,
    pub purpose: TextPurpose,
    pub weight: Option<TextWeight>,
    pub align: Option<TextAlign>,
    pub transform: Option<TextTransform>,
    pub intent: Option<Intent>,
    pub italic: bool,
    pub truncate: bool,
    pub line_clamp: Option<u8>,
    pub no_select: bool,
    pub interactive: bool,
    pub medical_device_mode: bool,
    pub emergency_mode: bool,
}

impl TextStyle {
    pub(crate) fn classes(&self, class: Option<String>) -> String {
        let weight = self
            .weight
            .or_else(|| self.purpose.default_weight())
            .unwrap_or_else(|| self.role.default_weight());
        let focus = if self.medical_device_mode {
            FOCUS_MEDICAL_DEVICE
        } else {
            FOCUS_BASE
        };
        crate::classes![
            self.role.size_class(),
            weight.class(),
            text_color_class(self.purpose, self.intent),
            self.purpose.extra_class(),
            self.role.is_heading().then_some("leading-tight"),
            self.align.map(TextAlign::class),
            self.transform.map(TextTransform::class),
            self.italic.then_some("italic"),
            self.truncate.then_some("truncate"),
            self.line_clamp.map(|lines| format!("line-clamp-{lines}")),
            self.no_select.then_some("select-none"),
            self.interactive
                .then_some("cursor-pointer transition-all duration-200 hover:opacity-80"),
            self.interactive.then_some(focus),
            (self.interactive && self.medical_device_mode).then_some("focus:shadow-lg"),
            self.emergency_mode.then_some("ring-2 ring-danger-400 px-2 py-1 rounded"),
            class,
        ]
    }
}

#[component]
/// Polymorphic text run. The role picks the rendered element; purpose and
/// intent pick the preset weight and color.
pub fn Text(
    #[prop(optional)] role: TextRole,
    #[prop(optional)] purpose: TextPurpose,
    #[prop(optional)] weight: Option<TextWeight>,
    #[prop(optional)] align: Option<TextAlign>,
    #[prop(optional)] transform: Option<TextTransform>,
    #[prop(optional)] intent: Option<Intent>,
    #[prop(optional)] italic: bool,
    #[prop(optional)] truncate: bool,
    #[prop(optional)] line_clamp: Option<u8>,
    #[prop(default = true)] selectable: bool,
    #[prop(optional)] interactive: bool,
    #[prop(optional)] medical_device_mode: bool,
    #[prop(optional)] emergency_mode: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] extra: ExtraAttrs,
    #[prop(optional)] on_activate: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let style = TextStyle {
        role,
        purpose,
        weight,
        align,
        transform,
        intent,
        italic,
        truncate,
        line_clamp,
        no_select: !selectable,
        interactive,
        medical_device_mode,
        emergency_mode,
    };
    let text_class = style.classes(class);
    let element = match role {
        TextRole::H1 => html::h1().into_any(),
        TextRole::H2 => html::h2().into_any(),
        TextRole::H3 => html::h3().into_any(),
        TextRole::H4 => html::h4().into_any(),
        TextRole::H5 => html::h5().into_any(),
        TextRole::H6 => html::h6().into_any(),
        TextRole::Paragraph => html::p().into_any(),
        TextRole::Span => html::span().into_any(),
        TextRole::Div => html::div().into_any(),
        TextRole::Small => html::small().into_any(),
        TextRole::Label => html::label().into_any(),
    };

    element
        .attr("class", text_class)
        .attr("id", extra.id)
        .attr("title", extra.title)
        .attr(
            "role",
            extra
                .role
                .or_else(|| interactive.then(|| "button".to_string())),
        )
        .attr("tabindex", interactive.then_some("0"))
        .attr("aria-label", extra.aria_label)
        .attr("aria-describedby", extra.aria_describedby)
        .attr("data-testid", extra.test_id)
        .attr("data-role", role.token())
        .attr("data-purpose", purpose.token())
        .on(ev::click, move |_| {
            if interactive {
                if let Some(on_activate) = on_activate.as_ref() {
                    on_activate.call(());
                }
            }
        })
        .on(ev::keydown, move |ev: KeyboardEvent| {
            if !interactive {
                return;
            }
            match ev.key().as_str() {
                "Enter" | " " => {
                    ev.prevent_default();
                    if let Some(on_activate) = on_activate.as_ref() {
                        on_activate.call(());
                    }
                }
                _ => {}
            }
        })
        .child(children())
        .child(emergency_mode.then(|| {
            view! {
                <span class="inline-block ml-2 px-1 py-0.5 text-xs font-medium bg-caution-100 text-caution-800 rounded">
                    "EMERGENCY"
                </span>
            }
        }))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Document heading depth.
pub enum HeadingLevel {
    /// Top-level page title.
    H1,
    /// Section title.
    H2,
    /// Subsection title.
    H3,
    /// Minor title.
    H4,
}

impl HeadingLevel {
    fn role(self) -> TextRole {
        match self {
            Self::H1 => TextRole::H1,
            Self::H2 => TextRole::H2,
            Self::H3 => TextRole::H3,
            Self::H4 => TextRole::H4,
        }
    }
}

#[component]
/// Section heading with the [`Text`] heading presets baked in.
pub fn Heading(
    #[prop(default = HeadingLevel::H2)] level: HeadingLevel,
    #[prop(optional)] intent: Option<Intent>,
    #[prop(optional)] align: Option<TextAlign>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let role = level.role();
    let style = TextStyle {
        role,
        purpose: TextPurpose::Heading,
        align,
        intent,
        ..TextStyle::default()
    };
    let heading_class = style.classes(class);
    let element = match level {
        HeadingLevel::H1 => html::h1().into_any(),
        HeadingLevel::H2 => html::h2().into_any(),
        HeadingLevel::H3 => html::h3().into_any(),
        HeadingLevel::H4 => html::h4().into_any(),
    };

    element
        .attr("class", heading_class)
        .attr("data-role", role.token())
        .attr("data-purpose", TextPurpose::Heading.token())
        .child(children())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_paragraph_classes() {
        assert_eq!(
            TextStyle::default().classes(None),
            "text-base font-normal text-neutral-800 leading-relaxed",
        );
    }

    #[test]
    fn heading_role_brings_weight_and_leading() {
        let classes = TextStyle {
            role: TextRole::H1,
            ..TextStyle::default()
        }
        .classes(None);
        assert!(classes.starts_with("text-2xl md:text-3xl lg:text-4xl"), "{classes}");
        assert!(classes.contains("font-bold"), "{classes}");
        assert!(classes.contains("leading-tight"), "{classes}");
    }

    #[test]
    fn explicit_weight_beats_presets() {
        let classes = TextStyle {
            role: TextRole::H1,
            weight: Some(TextWeight::Light),
            ..TextStyle::default()
        }
        .classes(None);
        assert!(classes.contains("font-light"), "{classes}");
        assert!(!classes.contains("font-bold"), "{classes}");
    }

    #[test]
    fn purpose_presets_color_and_weight() {
        let error = TextStyle {
            purpose: TextPurpose::Error,
            ..TextStyle::default()
        }
        .classes(None);
        assert_eq!(error, "text-base font-medium text-danger-600 leading-tight");

        let emergency = TextStyle {
            purpose: TextPurpose::Emergency,
            ..TextStyle::default()
        }
        .classes(None);
        assert!(emergency.contains("font-bold"), "{emergency}");
        assert!(emergency.contains("bg-danger-100"), "{emergency}");
    }

    #[test]
    fn purpose_color_beats_intent() {
        let classes = TextStyle {
            purpose: TextPurpose::Success,
            intent: Some(Intent::Primary),
            ..TextStyle::default()
        }
        .classes(None);
        assert!(classes.contains("text-success-600"), "{classes}");
        assert!(!classes.contains("text-primary-600"), "{classes}");
    }

    #[test]
    fn device_focus_replaces_base_ring() {
        let classes = TextStyle {
            interactive: true,
            medical_device_mode: true,
            ..TextStyle::default()
        }
        .classes(None);
        assert!(classes.contains(FOCUS_MEDICAL_DEVICE), "{classes}");
        assert!(classes.contains("focus:shadow-lg"), "{classes}");
        assert!(!classes.contains(FOCUS_BASE), "{classes}");
    }

    #[test]
    fn modifier_flags_and_custom_class() {
        let classes = TextStyle {
            italic: true,
            truncate: true,
            line_clamp: Some(3),
            no_select: true,
            ..TextStyle::default()
        }
        .classes(Some("tracking-wide".to_string()));
        assert!(classes.contains("italic"), "{classes}");
        assert!(classes.contains("truncate"), "{classes}");
        assert!(classes.contains("line-clamp-3"), "{classes}");
        assert!(classes.contains("select-none"), "{classes}");
        assert!(classes.ends_with("tracking-wide"), "{classes}");
    }
}
