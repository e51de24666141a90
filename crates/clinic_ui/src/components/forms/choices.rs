use super::*;

fn checkbox_box_size(size: ComponentSize) -> &'static str {
    match size {
        ComponentSize::Xs => "w-3.5 h-3.5",
        ComponentSize::Sm => "w-4 h-4",
        ComponentSize::Md => "w-5 h-5",
        ComponentSize::Lg => "w-6 h-6",
        ComponentSize::Xl => "w-7 h-7",
    }
}

fn checkbox_wrapper_classes(
    disabled: bool,
    medical_device_mode: bool,
    confirming: bool,
    class: Option<String>,
) -> String {
    crate::classes![
        "checkbox relative flex items-start gap-3 cursor-pointer select-none",
        "transition-all duration-200",
        disabled.then_some("opacity-50 cursor-not-allowed"),
        medical_device_mode
            .then_some("focus-within:ring-4 focus-within:ring-offset-2 focus-within:ring-primary-200"),
        confirming.then_some("ring-2 ring-caution-400 animate-pulse rounded-lg p-1"),
        class,
    ]
}

fn checkbox_box_classes(
    size: ComponentSize,
    checked: bool,
    indeterminate: bool,
    error: bool,
    critical: bool,
) -> String {
    crate::classes![
        "checkbox-box shrink-0 flex items-center justify-center border-2 rounded",
        "transition-all duration-200",
        checkbox_box_size(size),
        if error {
            "border-danger-500 bg-white"
        } else if checked || indeterminate {
            "border-primary-600 bg-primary-600"
        } else {
            "border-neutral-300 bg-white hover:border-primary-400"
        },
        critical.then_some("ring-1 ring-caution-300"),
    ]
}

fn checkbox_label_classes(error: bool, critical: bool) -> &'static str {
    if error {
        "text-sm font-medium text-danger-600"
    } else if critical {
        "text-sm font-semibold text-caution-700"
    } else {
        "text-sm font-medium text-neutral-800"
    }
}

#[component]
/// Checkbox with indeterminate support and a two-press confirmation for
/// critical clinical actions.
///
/// A `critical` checkbox does not check on the first activation. It enters a
/// pending state, pulses, and asks for a second press, so one stray tap
/// cannot enable a critical order. Unchecking is always immediate.
pub fn Checkbox(
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] indeterminate: MaybeSignal<bool>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(default = ComponentSize::Md)] size: ComponentSize,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] critical: bool,
    #[prop(optional)] medical_device_mode: bool,
    #[prop(optional)] error: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] extra: ExtraAttrs,
    #[prop(optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    let id = extra.id.clone().unwrap_or_else(|| next_field_id("checkbox"));
    let confirming = create_rw_signal(false);
    let node = create_node_ref::<html::Input>();

    let wrapper_class = {
        let class = class.clone();
        move || {
            checkbox_wrapper_classes(
                disabled.get(),
                medical_device_mode,
                confirming.get(),
                class.clone(),
            )
        }
    };
    let box_class =
        move || checkbox_box_classes(size, checked.get(), indeterminate.get(), error, critical);

    let handle_change = move |ev| {
        let now_checked = event_target_checked(&ev);
        if critical && now_checked && !confirming.get() {
            confirming.set(true);
            if let Some(input) = node.get() {
                input.set_checked(false);
            }
            return;
        }
        confirming.set(false);
        if let Some(on_change) = on_change {
            on_change.call(now_checked);
        }
    };

    view! {
        <label class=wrapper_class title=extra.title.clone() data-critical=bool_token(critical)>
            <input
                node_ref=node
                type="checkbox"
                class="sr-only"
                id=id
                prop:checked=move || checked.get()
                prop:indeterminate=move || indeterminate.get()
                disabled=move || disabled.get()
                role=extra.role.clone()
                aria-invalid=error.to_string()
                aria-label=extra.aria_label.clone()
                aria-describedby=extra.aria_describedby.clone()
                data-testid=extra.test_id.clone()
                on:change=handle_change
            />
            <span class=box_class aria-hidden="true">
                <Show
                    when=move || indeterminate.get()
                    fallback=move || {
                        view! {
                            <Show when=move || checked.get()>
                                <span class="text-white">
                                    <Icon icon=IconName::Check size=IconSize::Xs />
                                </span>
                            </Show>
                        }
                    }
                >
                    <span class="w-2 h-0.5 bg-white rounded"></span>
                </Show>
            </span>
            <span class="flex flex-col">
                {label
                    .map(|text| {
                        view! {
                            <span class=checkbox_label_classes(error, critical)>
                                {text}
                                {critical
                                    .then(|| {
                                        view! { <span class="text-caution-600">" (Critical)"</span> }
                                    })}
                            </span>
                        }
                    })}
                {description
                    .map(|text| {
                        view! { <span class="text-xs text-neutral-500 mt-0.5">{text}</span> }
                    })}
                <Show when=move || confirming.get()>
                    <span class="text-xs font-medium text-caution-700 mt-0.5" role="alert">
                        "Press again to confirm"
                    </span>
                </Show>
            </span>
        </label>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One selectable entry of a [`RadioGroup`].
pub struct RadioOption {
    /// Value reported on selection.
    pub value: String,
    /// Visible label.
    pub label: String,
    /// Secondary line under the label.
    pub description: Option<String>,
    /// Whether the entry can be selected.
    pub disabled: bool,
}

impl RadioOption {
    /// Enabled option with a value and label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            disabled: false,
        }
    }

    /// Adds the secondary description line.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the option unselectable.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

fn radio_box_classes(size: ComponentSize, selected: bool) -> String {
    crate::classes![
        "radio-box shrink-0 flex items-center justify-center border-2 rounded-full",
        "transition-all duration-200",
        checkbox_box_size(size),
        if selected {
            "border-primary-600 bg-primary-600"
        } else {
            "border-neutral-300 bg-white hover:border-primary-400"
        },
    ]
}

#[component]
/// Exclusive choice rendered as labelled radio rows.
///
/// In medical device mode the first nine options carry numbered badges and
/// the digit keys 1-9 select them directly.
pub fn RadioGroup(
    options: Vec<RadioOption>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] legend: Option<String>,
    #[prop(default = ComponentSize::Md)] size: ComponentSize,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] medical_device_mode: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] extra: ExtraAttrs,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let name = extra.id.clone().unwrap_or_else(|| next_field_id("radio-group"));
    let quick: Vec<(String, bool)> = options
        .iter()
        .map(|option| (option.value.clone(), option.disabled))
        .collect();

    let handle_keydown = move |ev: KeyboardEvent| {
        if !medical_device_mode {
            return;
        }
        let Some(index) = quick_select_index(&KeyPress::from_event(&ev)) else {
            return;
        };
        let Some((value, option_disabled)) = quick.get(index) else {
            return;
        };
        if *option_disabled || disabled.get() {
            return;
        }
        ev.prevent_default();
        if let Some(on_change) = on_change {
            on_change.call(value.clone());
        }
    };

    let rows = options
        .into_iter()
        .enumerate()
        .map(|(index, option)| {
            let RadioOption {
                value: option_value,
                label,
                description,
                disabled: option_disabled,
            } = option;
            let option_id = format!("{name}-{index}");
            let selected = {
                let value = value.clone();
                let option_value = option_value.clone();
                move || value.get() == option_value
            };
            let box_class = {
                let selected = selected.clone();
                move || radio_box_classes(size, selected())
            };
            let row_class = move || {
                crate::classes![
                    "radio-option relative flex items-start gap-3 cursor-pointer select-none",
                    "transition-all duration-200 p-2 rounded-lg hover:bg-neutral-50",
                    (disabled.get() || option_disabled).then_some("opacity-50 cursor-not-allowed"),
                ]
            };
            let change_value = option_value.clone();
            view! {
                <label class=row_class for=option_id.clone()>
                    {(medical_device_mode && index < 9)
                        .then(|| {
                            view! {
                                <span
                                    class="absolute -top-1 -left-1 w-5 h-5 bg-primary-600 text-white text-xs font-bold rounded-full flex items-center justify-center"
                                    aria-hidden="true"
                                >
                                    {index + 1}
                                </span>
                            }
                        })}
                    <input
                        type="radio"
                        class="sr-only"
                        id=option_id
                        name=name.clone()
                        value=option_value
                        prop:checked=selected.clone()
                        disabled=move || disabled.get() || option_disabled
                        on:change=move |_| {
                            if let Some(on_change) = on_change {
                                on_change.call(change_value.clone());
                            }
                        }
                    />
                    <span class=box_class aria-hidden="true">
                        <Show when=selected>
                            <span class="w-2 h-2 rounded-full bg-white"></span>
                        </Show>
                    </span>
                    <span class="flex flex-col">
                        <span class="text-sm font-medium text-neutral-800">{label}</span>
                        {description
                            .map(|text| {
                                view! {
                                    <span class="text-xs text-neutral-500 mt-0.5">{text}</span>
                                }
                            })}
                    </span>
                </label>
            }
        })
        .collect_view();

    view! {
        <fieldset
            class=crate::classes!["radio-group space-y-2", class]
            role="radiogroup"
            id=name.clone()
            title=extra.title.clone()
            aria-label=extra.aria_label.clone()
            aria-describedby=extra.aria_describedby.clone()
            data-testid=extra.test_id.clone()
            data-medical-device=bool_token(medical_device_mode)
            on:keydown=handle_keydown
        >
            {legend
                .map(|text| {
                    view! { <legend class="text-sm font-semibold text-neutral-800 mb-2">{text}</legend> }
                })}
            {rows}
            {medical_device_mode
                .then(|| {
                    view! {
                        <span class="sr-only">"Press 1 through 9 to select an option directly"</span>
                    }
                })}
        </fieldset>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry of a [`Select`] listbox.
pub struct SelectOption {
    /// Value reported on selection.
    pub value: String,
    /// Visible label.
    pub label: String,
    /// Whether the entry can be chosen.
    pub disabled: bool,
}

impl SelectOption {
    /// Enabled option with a value and label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Marks the option unselectable.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Labelled section of [`Select`] options.
pub struct SelectGroup {
    /// Section heading.
    pub label: String,
    /// Options under the heading.
    pub options: Vec<SelectOption>,
}

impl SelectGroup {
    /// Section with a heading and its options.
    pub fn new(label: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            label: label.into(),
            options,
        }
    }
}

#[component]
/// Dropdown selection styled like the text fields.
///
/// Options can be flat, grouped under headings, or both. The list renders as
/// an ARIA listbox and closes on selection, on `Escape`, or on a click
/// anywhere else in the document.
pub fn Select(
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] options: Vec<SelectOption>,
    #[prop(optional)] groups: Vec<SelectGroup>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(default = String::from("Select an option"), into)] placeholder: String,
    #[prop(optional)] variant: FormVariant,
    #[prop(default = ComponentSize::Md)] size: ComponentSize,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(default = true)] full_width: bool,
    #[prop(optional)] medical_device_mode: bool,
    #[prop(optional)] error: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] extra: ExtraAttrs,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let id = extra.id.clone().unwrap_or_else(|| next_field_id("select"));
    let listbox_id = format!("{id}-listbox");
    let (open, set_open) = create_signal(false);

    let lookup: Vec<SelectOption> = groups
        .iter()
        .flat_map(|group| group.options.iter().cloned())
        .chain(options.iter().cloned())
        .collect();
    let lookup = store_value(lookup);
    let flat_options = store_value(options);
    let groups = store_value(groups);

    let display = {
        let value = value.clone();
        let placeholder = placeholder.clone();
        move || {
            let current = value.get();
            if current.is_empty() {
                return placeholder.clone();
            }
            lookup
                .with_value(|options| {
                    options
                        .iter()
                        .find(|option| option.value == current)
                        .map(|option| option.label.clone())
                })
                .unwrap_or(current)
        }
    };
    let is_placeholder = {
        let value = value.clone();
        move || value.with(String::is_empty)
    };
    let trigger_class = {
        let class = class.clone();
        move || {
            crate::classes![
                input_classes(
                    variant,
                    size,
                    error,
                    false,
                    medical_device_mode,
                    full_width,
                    class.clone(),
                ),
                "flex items-center justify-between gap-2 text-left cursor-pointer",
            ]
        }
    };

    let outside = window_event_listener(ev::click, move |_| set_open.set(false));
    on_cleanup(move || outside.remove());

    let option_row = {
        let value = value.clone();
        move |option: SelectOption| {
            let SelectOption {
                value: option_value,
                label,
                disabled: option_disabled,
            } = option;
            let selected = {
                let value = value.clone();
                let option_value = option_value.clone();
                move || value.get() == option_value
            };
            let row_class = {
                let selected = selected.clone();
                move || {
                    crate::classes![
                        "px-3 py-2 text-sm cursor-pointer transition-colors duration-150",
                        if selected() {
                            "bg-primary-100 text-primary-700 font-medium"
                        } else {
                            "text-neutral-700 hover:bg-neutral-100"
                        },
                        option_disabled.then_some("opacity-50 cursor-not-allowed"),
                    ]
                }
            };
            view! {
                <li
                    class=row_class
                    role="option"
                    aria-selected=move || selected().to_string()
                    aria-disabled=option_disabled.to_string()
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        if option_disabled {
                            return;
                        }
                        set_open.set(false);
                        if let Some(on_change) = on_change {
                            on_change.call(option_value.clone());
                        }
                    }
                >
                    {label}
                </li>
            }
        }
    };
    let group_rows = {
        let option_row = option_row.clone();
        move || {
            groups.with_value(|groups| {
                groups
                    .iter()
                    .map(|group| {
                        let rows = group
                            .options
                            .iter()
                            .cloned()
                            .map(&option_row)
                            .collect_view();
                        view! {
                            <li
                                class="px-3 py-1.5 text-xs font-semibold text-neutral-500 uppercase"
                                role="presentation"
                            >
                                {group.label.clone()}
                            </li>
                            {rows}
                        }
                    })
                    .collect_view()
            })
        }
    };
    let flat_rows = {
        let option_row = option_row.clone();
        move || {
            flat_options.with_value(|options| {
                options
                    .iter()
                    .cloned()
                    .map(&option_row)
                    .collect_view()
            })
        }
    };

    view! {
        <div class=crate::classes!["select-field relative", full_width.then_some("w-full")]>
            {label
                .map(|text| {
                    view! {
                        <label for=id.clone() class=field_label_classes(error, false)>
                            {text}
                        </label>
                    }
                })}
            <button
                type="button"
                id=id.clone()
                class=trigger_class
                disabled=move || disabled.get()
                title=extra.title.clone()
                aria-haspopup="listbox"
                aria-expanded=move || open.get().to_string()
                aria-controls=listbox_id.clone()
                aria-invalid=error.to_string()
                aria-label=extra.aria_label.clone()
                aria-describedby=extra.aria_describedby.clone()
                data-testid=extra.test_id.clone()
                data-medical-device=bool_token(medical_device_mode)
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    if !disabled.get() {
                        set_open.update(|open| *open = !*open);
                    }
                }
                on:keydown=move |ev: KeyboardEvent| {
                    match ev.key().as_str() {
                        "Escape" => set_open.set(false),
                        "ArrowDown" => {
                            ev.prevent_default();
                            set_open.set(true);
                        }
                        _ => {}
                    }
                }
            >
                <span class=move || is_placeholder().then_some("text-neutral-400")>{display}</span>
                <span class="text-neutral-400 shrink-0" aria-hidden="true">
                    <Show
                        when=move || open.get()
                        fallback=|| view! { <Icon icon=IconName::ChevronDown size=IconSize::Sm /> }
                    >
                        <Icon icon=IconName::ChevronUp size=IconSize::Sm />
                    </Show>
                </span>
            </button>
            <Show when=move || open.get()>
                <ul
                    id=listbox_id.clone()
                    class="absolute z-50 mt-1 w-full bg-white border border-neutral-200 rounded-md shadow-lg max-h-60 overflow-auto py-1"
                    role="listbox"
                >
                    {group_rows.clone()}
                    {flat_rows.clone()}
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn box_sizes_track_component_size() {
        let expected = ["w-3.5 h-3.5", "w-4 h-4", "w-5 h-5", "w-6 h-6", "w-7 h-7"];
        for (size, expected) in ComponentSize::ALL.into_iter().zip(expected) {
            assert_eq!(checkbox_box_size(size), expected, "size={size:?}");
        }
    }

    #[test]
    fn checkbox_box_state_precedence() {
        let unchecked = checkbox_box_classes(ComponentSize::Md, false, false, false, false);
        assert!(unchecked.contains("border-neutral-300"), "unchecked={unchecked:?}");

        let checked = checkbox_box_classes(ComponentSize::Md, true, false, false, false);
        assert!(checked.contains("bg-primary-600"), "checked={checked:?}");

        let indeterminate = checkbox_box_classes(ComponentSize::Md, false, true, false, false);
        assert!(indeterminate.contains("bg-primary-600"), "indeterminate={indeterminate:?}");

        // An error keeps the box unfilled even when checked.
        let error = checkbox_box_classes(ComponentSize::Md, true, false, true, false);
        assert!(error.contains("border-danger-500"), "error={error:?}");
        assert!(!error.contains("bg-primary-600"), "error={error:?}");

        let critical = checkbox_box_classes(ComponentSize::Md, false, false, false, true);
        assert!(critical.contains("ring-caution-300"), "critical={critical:?}");
    }

    #[test]
    fn wrapper_flags_layer_in_order() {
        let plain = checkbox_wrapper_classes(false, false, false, None);
        assert!(!plain.contains("opacity-50"), "plain={plain:?}");
        assert!(!plain.contains("animate-pulse"), "plain={plain:?}");

        let confirming = checkbox_wrapper_classes(true, true, true, Some("mt-2".to_string()));
        assert!(confirming.contains("opacity-50"), "confirming={confirming:?}");
        assert!(confirming.contains("focus-within:ring-4"), "confirming={confirming:?}");
        assert!(confirming.contains("animate-pulse"), "confirming={confirming:?}");
        assert!(confirming.ends_with("mt-2"), "confirming={confirming:?}");
    }

    #[test]
    fn radio_box_fills_when_selected() {
        let idle = radio_box_classes(ComponentSize::Md, false);
        assert!(idle.contains("rounded-full"), "idle={idle:?}");
        assert!(idle.contains("bg-white"), "idle={idle:?}");

        let selected = radio_box_classes(ComponentSize::Md, true);
        assert!(selected.contains("bg-primary-600"), "selected={selected:?}");
    }

    #[test]
    fn option_builders_chain() {
        let option = RadioOption::new("iv", "Intravenous")
            .describe("Administered via IV line")
            .disabled();
        assert_eq!(option.value, "iv");
        assert_eq!(option.label, "Intravenous");
        assert_eq!(option.description.as_deref(), Some("Administered via IV line"));
        assert!(option.disabled);

        let select = SelectOption::new("mg", "Milligrams").disabled();
        assert!(select.disabled);

        let group = SelectGroup::new(
            "Routes",
            vec![SelectOption::new("po", "Oral"), SelectOption::new("iv", "IV")],
        );
        assert_eq!(group.label, "Routes");
        assert_eq!(group.options.len(), 2);
    }
}
