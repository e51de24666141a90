use super::*;

fn intent_class(intent: Intent) -> &'static str {
    match intent {
        Intent::Primary => "btn-primary",
        Intent::Secondary => "btn-secondary",
        Intent::Success => "btn-success",
        Intent::Caution => "btn-caution",
        Intent::Danger => "btn-danger",
        Intent::Info => "btn-info",
    }
}

fn size_class(size: ComponentSize) -> &'static str {
    match size {
        ComponentSize::Xs => "btn-xs",
        ComponentSize::Sm => "btn-sm",
        ComponentSize::Md => "btn-md",
        ComponentSize::Lg => "btn-lg",
        ComponentSize::Xl => "btn-xl",
    }
}

pub(crate) fn button_classes(
    intent: Intent,
    size: ComponentSize,
    full_width: bool,
    emergency: bool,
    medical_device_mode: bool,
    loading: bool,
    class: Option<String>,
) -> String {
    crate::classes![
        "btn",
        intent_class(intent),
        size_class(size),
        full_width.then_some("w-full"),
        emergency.then_some("btn-emergency"),
        medical_device_mode.then_some("btn-medical-device"),
        CompoundVariant::for_button(medical_device_mode, emergency, intent)
            .map(CompoundVariant::class),
        loading.then_some("cursor-wait"),
        class,
    ]
}

#[component]
/// Action button with intent-driven styling, loading state, and clinical
/// emergency/medical-device escalations.
pub fn Button(
    #[prop(default = Intent::Primary)] intent: Intent,
    #[prop(default = ComponentSize::Md)] size: ComponentSize,
    #[prop(optional)] submit: bool,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] emergency: bool,
    #[prop(optional)] medical_device_mode: bool,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] extra: ExtraAttrs,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        button_classes(
            intent,
            size,
            full_width,
            emergency,
            medical_device_mode,
            loading.get(),
            class.clone(),
        )
    };
    let aria_label = aria_label
        .or(extra.aria_label.clone())
        .or_else(|| emergency.then(|| "Emergency action button".to_string()));

    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=class
            id=extra.id.clone()
            role=extra.role.clone()
            title=extra.title.clone()
            aria-label=aria_label
            aria-describedby=extra.aria_describedby.clone()
            aria-busy=move || loading.get().to_string()
            disabled=move || disabled.get() || loading.get()
            data-testid=extra.test_id.clone()
            data-intent=intent.token()
            data-size=size.token()
            data-emergency=bool_token(emergency)
            data-medical-device=bool_token(medical_device_mode)
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Show when=move || loading.get()>
                <svg
                    class="animate-spin -ml-1 mr-2 h-4 w-4"
                    xmlns="http://www.w3.org/2000/svg"
                    fill="none"
                    viewBox="0 0 24 24"
                    aria-hidden="true"
                >
                    <circle
                        class="opacity-25"
                        cx="12"
                        cy="12"
                        r="10"
                        stroke="currentColor"
                        stroke-width="4"
                    ></circle>
                    <path
                        class="opacity-75"
                        fill="currentColor"
                        d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
                    ></path>
                </svg>
            </Show>
            {leading_icon.map(|icon| view! { <Icon icon=icon size=IconSize::Sm /> })}
            <span class=move || loading.get().then_some("opacity-75")>{children()}</span>
            {trailing_icon.map(|icon| view! { <Icon icon=icon size=IconSize::Sm /> })}
            <Show when=move || loading.get()>
                <span class="sr-only" aria-live="polite">"Loading, please wait"</span>
            </Show>
            {emergency
                .then(|| view! { <span class="sr-only">"Emergency function - Handle with care"</span> })}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_button_classes() {
        assert_eq!(
            button_classes(
                Intent::Primary,
                ComponentSize::Md,
                false,
                false,
                false,
                false,
                None,
            ),
            "btn btn-primary btn-md",
        );
    }

    #[test]
    fn every_intent_and_size_resolves_once() {
        for intent in Intent::ALL {
            for size in ComponentSize::ALL {
                let classes = button_classes(intent, size, false, false, false, false, None);
                let tokens: Vec<&str> = classes.split_whitespace().collect();
                assert_eq!(tokens.len(), 3, "intent={intent:?} size={size:?}");
                assert_eq!(tokens[0], "btn", "intent={intent:?} size={size:?}");
            }
        }
    }

    #[test]
    fn escalation_flags_stack_in_order() {
        assert_eq!(
            button_classes(
                Intent::Danger,
                ComponentSize::Lg,
                true,
                true,
                true,
                true,
                Some("shadow-xl".to_string()),
            ),
            "btn btn-danger btn-lg w-full btn-emergency btn-medical-device cursor-wait shadow-xl",
        );
    }

    #[test]
    fn critical_action_needs_all_three_conditions() {
        let critical = button_classes(
            Intent::Caution,
            ComponentSize::Md,
            false,
            true,
            true,
            false,
            None,
        );
        assert_eq!(
            critical,
            "btn btn-caution btn-md btn-emergency btn-medical-device btn-critical-action",
        );

        let cases = [
            (Intent::Caution, false, true),
            (Intent::Caution, true, false),
            (Intent::Danger, true, true),
        ];
        for (intent, emergency, device) in cases {
            let classes = button_classes(
                intent,
                ComponentSize::Md,
                false,
                emergency,
                device,
                false,
                None,
            );
            assert!(
                !classes.contains("btn-critical-action"),
                "intent={intent:?} emergency={emergency} device={device}",
            );
        }
    }

    #[test]
    fn custom_class_duplicate_keeps_last_occurrence() {
        assert_eq!(
            button_classes(
                Intent::Primary,
                ComponentSize::Md,
                false,
                false,
                false,
                false,
                Some("btn".to_string()),
            ),
            "btn-primary btn-md btn",
        );
    }
}
