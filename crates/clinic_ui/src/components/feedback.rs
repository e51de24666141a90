use super::*;

/// Color treatment shared by the feedback surfaces. Width utilities stay out
/// of this table so each component controls its own border presence.
fn variant_tint(variant: Variant, intent: Intent) -> String {
    let family = ColorFamily::from(intent);
    match variant {
        Variant::Filled => crate::classes![
            color_class(ColorProperty::Background, family, Shade::S600),
            "text-white",
            color_class(ColorProperty::Border, family, Shade::S600),
        ],
        Variant::Outlined => crate::classes![
            "bg-white",
            color_class(ColorProperty::Text, family, Shade::S700),
            color_class(ColorProperty::Border, family, Shade::S300),
        ],
        Variant::Soft => crate::classes![
            color_class(ColorProperty::Background, family, Shade::S100),
            color_class(ColorProperty::Text, family, Shade::S800),
            color_class(ColorProperty::Border, family, Shade::S200),
        ],
        Variant::Ghost => crate::classes![
            "bg-transparent border-transparent",
            color_class(ColorProperty::Text, family, Shade::S700),
        ],
        Variant::Elevated => crate::classes![
            "bg-white shadow-md",
            color_class(ColorProperty::Text, family, Shade::S700),
            color_class(ColorProperty::Border, family, Shade::S200),
        ],
    }
}

fn intent_icon(intent: Intent) -> IconName {
    match intent {
        Intent::Primary | Intent::Secondary => IconName::Bell,
        Intent::Success => IconName::CheckCircle,
        Intent::Caution => IconName::AlertTriangle,
        Intent::Danger => IconName::XCircle,
        Intent::Info => IconName::AlertCircle,
    }
}

fn alert_size_class(size: ComponentSize) -> &'static str {
    match size {
        ComponentSize::Xs => "text-xs p-2",
        ComponentSize::Sm => "text-sm p-3",
        ComponentSize::Md => "text-base p-4",
        ComponentSize::Lg => "text-lg p-5",
        ComponentSize::Xl => "text-xl p-6",
    }
}

pub(crate) fn alert_classes(
    intent: Intent,
    variant: Variant,
    size: ComponentSize,
    emergency: bool,
    dismissible: bool,
    class: Option<String>,
) -> String {
    crate::classes![
        "alert flex items-start gap-3 border rounded-lg transition-all duration-200 relative",
        variant_tint(variant, intent),
        alert_size_class(size),
        emergency.then_some("ring-2 ring-danger-400 shadow-lg"),
        dismissible.then_some("pr-12"),
        class,
    ]
}

#[component]
/// Inline status message with intent tinting, emergency escalation, and
/// optional dismissal.
pub fn Alert(
    #[prop(default = Intent::Info)] intent: Intent,
    #[prop(default = Variant::Soft)] variant: Variant,
    #[prop(default = ComponentSize::Md)] size: ComponentSize,
    #[prop(optional)] emergency: bool,
    #[prop(optional)] dismissible: bool,
    #[prop(default = true)] show_icon: bool,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] patient_id: Option<String>,
    #[prop(optional, into)] timestamp: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] extra: ExtraAttrs,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(true);
    let alert_class = alert_classes(intent, variant, size, emergency, dismissible, class);
    let icon_color = if variant == Variant::Filled {
        "text-white".to_string()
    } else {
        semantic_color_class(ColorProperty::Text, intent, ColorAlias::Default)
    };
    let close_label = if emergency {
        "Acknowledge emergency alert"
    } else {
        "Close alert"
    };

    view! {
        <Show when=move || visible.get()>
            <div
                class=alert_class.clone()
                id=extra.id.clone()
                title=extra.title.clone()
                role=extra.role.clone().unwrap_or_else(|| {
                    if emergency { "alert" } else { "status" }.to_string()
                })
                aria-live=if emergency { "assertive" } else { "polite" }
                aria-atomic="true"
                aria-label=extra.aria_label.clone()
                aria-describedby=extra.aria_describedby.clone()
                data-testid=extra.test_id.clone()
                data-intent=intent.token()
                data-variant=variant.token()
                data-emergency=bool_token(emergency)
            >
                {show_icon
                    .then(|| {
                        view! {
                            <span class=icon_color.clone() aria-hidden="true">
                                <Icon icon=intent_icon(intent) size=IconSize::Md />
                            </span>
                        }
                    })}
                <div class="flex-1 min-w-0">
                    {(emergency || patient_id.is_some())
                        .then(|| {
                            view! {
                                <div class="flex items-center gap-2 mb-1">
                                    {emergency
                                        .then(|| {
                                            view! {
                                                <span class="inline-flex items-center px-2 py-1 rounded-full text-xs font-medium bg-danger-100 text-danger-800">
                                                    "EMERGENCY"
                                                </span>
                                            }
                                        })}
                                    {patient_id
                                        .clone()
                                        .map(|patient_id| {
                                            view! {
                                                <span class="font-medium">"Patient: " {patient_id}</span>
                                            }
                                        })}
                                </div>
                            }
                        })}
                    {title
                        .clone()
                        .map(|title| view! { <h4 class="font-semibold mb-1">{title}</h4> })}
                    <div class="alert-message">{children()}</div>
                    {timestamp
                        .clone()
                        .map(|timestamp| {
                            view! {
                                <time class="block mt-1 text-xs text-neutral-500" datetime=timestamp.clone()>
                                    {timestamp}
                                </time>
                            }
                        })}
                </div>
                {dismissible
                    .then(|| {
                        view! {
                            <button
                                type="button"
                                class="alert-close absolute top-3 right-3 p-1.5 rounded-md text-current opacity-70 hover:opacity-100 hover:bg-white/20 focus:outline-none focus:ring-2 focus:ring-offset-1 focus:ring-current transition-all duration-200"
                                aria-label=close_label
                                on:click=move |_| {
                                    set_visible.set(false);
                                    if let Some(on_dismiss) = on_dismiss.as_ref() {
                                        on_dismiss.call(());
                                    }
                                }
                            >
                                <Icon icon=IconName::X size=IconSize::Sm />
                            </button>
                        }
                    })}
            </div>
        </Show>
    }
}

fn badge_size_class(size: ComponentSize) -> &'static str {
    match size {
        ComponentSize::Xs => "text-xs px-1.5 py-0.5",
        ComponentSize::Sm => "text-xs px-2 py-0.5",
        ComponentSize::Md => "text-sm px-2.5 py-0.5",
        ComponentSize::Lg => "text-sm px-3 py-1",
        ComponentSize::Xl => "text-base px-3.5 py-1",
    }
}

pub(crate) fn badge_classes(
    intent: Intent,
    size: ComponentSize,
    variant: Variant,
    pill: bool,
    interactive: bool,
    class: Option<String>,
) -> String {
    crate::classes![
        "inline-flex items-center font-medium select-none",
        variant_tint(variant, intent),
        (variant == Variant::Outlined || variant == Variant::Soft).then_some("border"),
        badge_size_class(size),
        if pill { "rounded-full" } else { "rounded" },
        interactive.then_some("cursor-pointer transition-all duration-200 hover:brightness-110"),
        interactive.then_some(FOCUS_BASE),
        class,
    ]
}

#[component]
/// Compact status label. A clinical priority, when given, overrides the
/// intent so triage levels always read consistently.
pub fn Badge(
    #[prop(optional)] intent: Intent,
    #[prop(default = ComponentSize::Sm)] size: ComponentSize,
    #[prop(default = Variant::Soft)] variant: Variant,
    #[prop(optional)] pill: bool,
    #[prop(optional)] dot: bool,
    #[prop(optional)] interactive: bool,
    #[prop(optional)] priority: Option<ClinicalPriority>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] extra: ExtraAttrs,
    #[prop(optional)] on_activate: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let intent = priority.map(ClinicalPriority::intent).unwrap_or(intent);
    let badge_class = badge_classes(intent, size, variant, pill, interactive, class);

    view! {
        <span
            class=badge_class
            id=extra.id.clone()
            title=extra.title.clone()
            role=extra.role.clone().or_else(|| interactive.then(|| "button".to_string()))
            tabindex=interactive.then_some("0")
            aria-label=extra.aria_label.clone()
            aria-describedby=extra.aria_describedby.clone()
            data-testid=extra.test_id.clone()
            data-intent=intent.token()
            data-priority=priority.map(ClinicalPriority::token)
            on:click=move |_| {
                if interactive {
                    if let Some(on_activate) = on_activate.as_ref() {
                        on_activate.call(());
                    }
                }
            }
            on:keydown=move |ev: KeyboardEvent| {
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
            }
        >
            {dot
                .then(|| {
                    view! {
                        <span class="w-1.5 h-1.5 rounded-full bg-current mr-1.5" aria-hidden="true">
                        </span>
                    }
                })}
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tint_table_resolves_per_variant() {
        let cases = [
            (Variant::Soft, Intent::Info, "bg-info-100 text-info-800 border-info-200"),
            (
                Variant::Filled,
                Intent::Danger,
                "bg-danger-600 text-white border-danger-600",
            ),
            (
                Variant::Outlined,
                Intent::Success,
                "bg-white text-success-700 border-success-300",
            ),
            (
                Variant::Ghost,
                Intent::Caution,
                "bg-transparent border-transparent text-caution-700",
            ),
        ];
        for (variant, intent, expected) in cases {
            assert_eq!(
                variant_tint(variant, intent),
                expected,
                "variant={variant:?} intent={intent:?}",
            );
        }
    }

    #[test]
    fn default_alert_classes() {
        let classes = alert_classes(
            Intent::Info,
            Variant::Soft,
            ComponentSize::Md,
            false,
            false,
            None,
        );
        assert_eq!(
            classes,
            "alert flex items-start gap-3 border rounded-lg transition-all duration-200 \
             relative bg-info-100 text-info-800 border-info-200 text-base p-4",
        );
    }

    #[test]
    fn each_dimension_contributes_exactly_once_with_custom_last() {
        let classes = alert_classes(
            Intent::Danger,
            Variant::Outlined,
            ComponentSize::Lg,
            false,
            false,
            Some("my-extra-class".to_string()),
        );
        assert_eq!(
            classes,
            "alert flex items-start gap-3 border rounded-lg transition-all duration-200 \
             relative bg-white text-danger-700 border-danger-300 text-lg p-5 my-extra-class",
        );
    }

    #[test]
    fn emergency_alert_gains_ring_and_dismiss_gutter() {
        let classes = alert_classes(
            Intent::Danger,
            Variant::Soft,
            ComponentSize::Md,
            true,
            true,
            None,
        );
        assert!(classes.contains("ring-2 ring-danger-400 shadow-lg"), "{classes}");
        assert!(classes.ends_with("pr-12"), "{classes}");
    }

    #[test]
    fn every_intent_has_a_glyph() {
        let cases = [
            (Intent::Primary, IconName::Bell),
            (Intent::Secondary, IconName::Bell),
            (Intent::Success, IconName::CheckCircle),
            (Intent::Caution, IconName::AlertTriangle),
            (Intent::Danger, IconName::XCircle),
            (Intent::Info, IconName::AlertCircle),
        ];
        for (intent, icon) in cases {
            assert_eq!(intent_icon(intent), icon, "intent={intent:?}");
        }
    }

    #[test]
    fn default_badge_classes() {
        assert_eq!(
            badge_classes(
                Intent::Primary,
                ComponentSize::Sm,
                Variant::Soft,
                false,
                false,
                None,
            ),
            "inline-flex items-center font-medium select-none bg-primary-100 \
             text-primary-800 border-primary-200 border text-xs px-2 py-0.5 rounded",
        );
    }

    #[test]
    fn interactive_pill_badge() {
        let classes = badge_classes(
            Intent::Success,
            ComponentSize::Md,
            Variant::Outlined,
            true,
            true,
            None,
        );
        assert!(classes.contains("rounded-full"), "{classes}");
        assert!(classes.contains("cursor-pointer"), "{classes}");
        assert!(classes.contains(FOCUS_BASE), "{classes}");
    }

    #[test]
    fn filled_badge_skips_border_width() {
        let classes = badge_classes(
            Intent::Danger,
            ComponentSize::Sm,
            Variant::Filled,
            false,
            false,
            None,
        );
        assert!(!classes.split_whitespace().any(|token| token == "border"), "{classes}");
    }
}
