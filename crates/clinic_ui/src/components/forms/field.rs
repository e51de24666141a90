use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How a [`FormField`] arranges its label and control.
pub enum FieldLayout {
    /// Label above the control.
    Vertical,
    /// Label in a fixed-width column beside the control.
    Horizontal,
    /// Label and control on one baseline.
    Inline,
}

impl FieldLayout {
    /// Every layout, in display order.
    pub const ALL: [Self; 3] = [Self::Vertical, Self::Horizontal, Self::Inline];

    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Inline => "inline",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Vertical => "flex flex-col gap-1",
            Self::Horizontal => "flex items-start gap-4",
            Self::Inline => "flex items-center gap-2",
        }
    }
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self::Vertical
    }
}

impl FromStr for FieldLayout {
    type Err = UnknownTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.token() == value)
            .ok_or_else(|| UnknownTokenError::new(value, "field layout"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome shown under a [`FormField`]'s control.
pub enum FieldStatus {
    /// No outcome yet.
    Default,
    /// Value accepted.
    Success,
    /// Value accepted with a caution.
    Warning,
    /// Value rejected.
    Error,
}

impl FieldStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Success, Self::Warning, Self::Error];

    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    fn message_class(self) -> &'static str {
        match self {
            Self::Default => "text-neutral-500",
            Self::Success => "text-success-600",
            Self::Warning => "text-caution-600",
            Self::Error => "text-danger-600",
        }
    }

    fn icon(self) -> Option<IconName> {
        match self {
            Self::Default => None,
            Self::Success => Some(IconName::CheckCircle),
            Self::Warning => Some(IconName::AlertTriangle),
            Self::Error => Some(IconName::XCircle),
        }
    }
}

impl Default for FieldStatus {
    fn default() -> Self {
        Self::Default
    }
}

impl FromStr for FieldStatus {
    type Err = UnknownTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.token() == value)
            .ok_or_else(|| UnknownTokenError::new(value, "field status"))
    }
}

#[component]
/// Label, description, status message, and character counter around any
/// form control. Wire `for_id` to the control's id so the label targets it.
pub fn FormField(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] message: Option<String>,
    #[prop(optional)] status: FieldStatus,
    #[prop(optional)] layout: FieldLayout,
    #[prop(optional)] required: bool,
    #[prop(optional)] optional_hint: bool,
    #[prop(optional, into)] for_id: Option<String>,
    #[prop(optional)] max_length: Option<usize>,
    #[prop(optional, into)] count: MaybeSignal<usize>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let has_error = status == FieldStatus::Error;
    let labelled = label.is_some() || description.is_some();

    view! {
        <div
            class=crate::classes!["form-field", layout.class(), class]
            data-layout=layout.token()
            data-status=status.token()
        >
            {labelled
                .then(|| {
                    view! {
                        <div class=(layout == FieldLayout::Horizontal).then_some("w-1/3 shrink-0")>
                            {label
                                .map(|text| {
                                    view! {
                                        <label
                                            for=for_id
                                            class=field_label_classes(has_error, false)
                                        >
                                            {text}
                                            {required
                                                .then(|| {
                                                    view! {
                                                        <span class="text-danger-500 ml-1" aria-hidden="true">
                                                            "*"
                                                        </span>
                                                    }
                                                })}
                                            {(!required && optional_hint)
                                                .then(|| {
                                                    view! {
                                                        <span class="text-neutral-400 text-xs ml-1">
                                                            "(optional)"
                                                        </span>
                                                    }
                                                })}
                                        </label>
                                    }
                                })}
                            {description
                                .map(|text| {
                                    view! { <p class="text-xs text-neutral-500 mb-1">{text}</p> }
                                })}
                        </div>
                    }
                })}
            <div class="flex-1 min-w-0">
                {children()}
                {(message.is_some() || max_length.is_some())
                    .then(|| {
                        view! {
                            <div class="mt-1 flex items-start justify-between gap-2">
                                {message
                                    .map(|text| {
                                        view! {
                                            <p
                                                class=crate::classes![
                                                    "flex items-center gap-1 text-sm",
                                                    status.message_class(),
                                                ]
                                                role=has_error.then_some("alert")
                                            >
                                                {status
                                                    .icon()
                                                    .map(|icon| {
                                                        view! { <Icon icon=icon size=IconSize::Xs /> }
                                                    })}
                                                {text}
                                            </p>
                                        }
                                    })}
                                {max_length
                                    .map(|max| {
                                        view! {
                                            <p
                                                class=move || {
                                                    let count = count.get();
                                                    if count > max {
                                                        "text-xs text-right ml-auto text-danger-600"
                                                    } else if count * 10 >= max * 9 {
                                                        "text-xs text-right ml-auto text-caution-600"
                                                    } else {
                                                        "text-xs text-right ml-auto text-neutral-500"
                                                    }
                                                }
                                                aria-live="polite"
                                            >
                                                {move || format!("{} / {max}", count.get())}
                                            </p>
                                        }
                                    })}
                            </div>
                        }
                    })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_tokens_round_trip() {
        for layout in FieldLayout::ALL {
            assert_eq!(layout.token().parse(), Ok(layout), "layout={layout:?}");
        }
        assert!("stacked".parse::<FieldLayout>().is_err());
        assert_eq!(FieldLayout::default(), FieldLayout::Vertical);
    }

    #[test]
    fn status_styling_and_icons() {
        assert_eq!(FieldStatus::Default.icon(), None);
        assert_eq!(FieldStatus::Success.icon(), Some(IconName::CheckCircle));
        assert_eq!(FieldStatus::Warning.icon(), Some(IconName::AlertTriangle));
        assert_eq!(FieldStatus::Error.icon(), Some(IconName::XCircle));

        assert_eq!(FieldStatus::Error.message_class(), "text-danger-600");
        assert_eq!(FieldStatus::Default.message_class(), "text-neutral-500");
        for status in FieldStatus::ALL {
            assert_eq!(status.token().parse(), Ok(status), "status={status:?}");
        }
    }
}
