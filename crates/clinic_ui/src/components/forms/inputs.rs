use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Native `type` attribute rendered by [`TextInput`].
pub enum InputKind {
    /// Free text.
    Text,
    /// Email address with browser keyboard hints.
    Email,
    /// Masked password entry.
    Password,
    /// Numeric entry.
    Number,
    /// Telephone number.
    Tel,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Search box.
    Search,
}

impl InputKind {
    /// Every input kind, in display order.
    pub const ALL: [Self; 8] = [
        Self::Text,
        Self::Email,
        Self::Password,
        Self::Number,
        Self::Tel,
        Self::Date,
        Self::Time,
        Self::Search,
    ];

    /// The `type` attribute value.
    pub fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Date => "date",
            Self::Time => "time",
            Self::Search => "search",
        }
    }
}

impl Default for InputKind {
    fn default() -> Self {
        Self::Text
    }
}

impl FromStr for InputKind {
    type Err = UnknownTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.token() == value)
            .ok_or_else(|| UnknownTokenError::new(value, "input kind"))
    }
}

#[component]
/// Single-line text field with optional clinical validation.
///
/// When a [`MedicalValidation`] is attached the field validates on every
/// input, announces the first failure below the control, and honors the
/// device-entry keys: `Escape` clears the value and `F5` selects it for
/// re-entry. Keyboard shortcuts for the surrounding [`ShortcutContext`]
/// dispatch before any local key handling.
pub fn TextInput(
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] kind: InputKind,
    #[prop(optional)] variant: FormVariant,
    #[prop(default = ComponentSize::Md)] size: ComponentSize,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] helper: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(default = true)] full_width: bool,
    #[prop(optional)] medical_device_mode: bool,
    #[prop(optional)] validation: Option<MedicalValidation>,
    #[prop(optional)] context: ShortcutContext,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] extra: ExtraAttrs,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_shortcut: Option<Callback<ShortcutAction>>,
) -> impl IntoView {
    let id = extra.id.clone().unwrap_or_else(|| next_field_id("input"));
    let help_id = format!("{id}-help");
    let medical = validation.is_some();
    let has_help = helper.is_some() || medical;
    let errors = create_rw_signal(Vec::<String>::new());
    let has_error = move || !errors.with(Vec::is_empty);
    let node = create_node_ref::<html::Input>();

    let input_class = {
        let class = class.clone();
        move || {
            input_classes(
                variant,
                size,
                has_error(),
                medical,
                medical_device_mode,
                full_width,
                class.clone(),
            )
        }
    };
    let label_class = move || field_label_classes(has_error(), medical);
    let describedby = if has_help {
        Some(help_id.clone())
    } else {
        extra.aria_describedby.clone()
    };

    let handle_input = move |ev| {
        let text = event_target_value(&ev);
        if let Some(validation) = validation {
            errors.set(validation.validate(&text));
        }
        if let Some(on_input) = on_input {
            on_input.call(text);
        }
    };
    let handle_keydown = move |ev: KeyboardEvent| {
        if dispatch_shortcut(context, &ev, on_shortcut) {
            return;
        }
        if !medical {
            return;
        }
        match ev.key().as_str() {
            "Escape" => {
                errors.set(Vec::new());
                if let Some(on_input) = on_input {
                    on_input.call(String::new());
                }
            }
            "F5" => {
                ev.prevent_default();
                if let Some(input) = node.get() {
                    input.select();
                }
            }
            _ => {}
        }
    };

    view! {
        <div class=crate::classes!["input-field", full_width.then_some("w-full")]>
            {label
                .map(|text| {
                    view! {
                        <label for=id.clone() class=label_class>
                            {text}
                            {required
                                .then(|| {
                                    view! {
                                        <span class="text-danger-500 ml-1" aria-hidden="true">
                                            "*"
                                        </span>
                                    }
                                })}
                            {medical
                                .then(|| {
                                    view! {
                                        <span class="text-primary-600 text-xs ml-1">
                                            "(Medical Data)"
                                        </span>
                                    }
                                })}
                        </label>
                    }
                })}
            <input
                node_ref=node
                id=id.clone()
                type=kind.token()
                class=input_class
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || disabled.get()
                required=required
                title=extra.title.clone()
                role=extra.role.clone()
                aria-label=extra.aria_label.clone()
                aria-invalid=move || has_error().to_string()
                aria-required=required.to_string()
                aria-describedby=describedby
                data-testid=extra.test_id.clone()
                data-kind=kind.token()
                data-medical=bool_token(medical)
                data-context=context.token()
                on:input=handle_input
                on:keydown=handle_keydown
            />
            {(medical_device_mode && medical)
                .then(|| {
                    view! {
                        <span class="sr-only">
                            {format!(
                                "Press Escape to clear, F5 to refresh and select all. {}",
                                shortcut_hint(context),
                            )}
                        </span>
                    }
                })}
            {has_help
                .then(|| {
                    let helper = helper.clone();
                    view! {
                        <p
                            id=help_id.clone()
                            class=move || {
                                if has_error() {
                                    "mt-1 text-sm text-danger-600"
                                } else {
                                    "mt-1 text-sm text-neutral-500"
                                }
                            }
                            role=move || if has_error() { "alert" } else { "status" }
                            aria-live="polite"
                        >
                            {move || {
                                errors
                                    .with(|errors| errors.first().cloned())
                                    .or_else(|| helper.clone())
                            }}
                        </p>
                    }
                })}
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Documentation purpose of a [`TextArea`], carrying row, length, and
/// placeholder presets for common clinical note types.
pub enum TextAreaPurpose {
    /// Unconstrained notes.
    General,
    /// Clinical observations.
    ClinicalNotes,
    /// Patient medical history.
    PatientHistory,
    /// Presenting symptoms.
    Symptoms,
    /// Planned treatment.
    TreatmentPlan,
    /// Administration instructions.
    MedicationInstructions,
    /// Discharge summary.
    DischargeSummary,
    /// Laboratory notes.
    LabNotes,
    /// Emergency interventions.
    EmergencyNotes,
}

impl TextAreaPurpose {
    /// Every purpose, in display order.
    pub const ALL: [Self; 9] = [
        Self::General,
        Self::ClinicalNotes,
        Self::PatientHistory,
        Self::Symptoms,
        Self::TreatmentPlan,
        Self::MedicationInstructions,
        Self::DischargeSummary,
        Self::LabNotes,
        Self::EmergencyNotes,
    ];

    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::ClinicalNotes => "clinical-notes",
            Self::PatientHistory => "patient-history",
            Self::Symptoms => "symptoms",
            Self::TreatmentPlan => "treatment-plan",
            Self::MedicationInstructions => "medication-instructions",
            Self::DischargeSummary => "discharge-summary",
            Self::LabNotes => "lab-notes",
            Self::EmergencyNotes => "emergency-notes",
        }
    }

    /// Default visible rows.
    pub fn rows(self) -> u32 {
        match self {
            Self::General | Self::LabNotes => 3,
            Self::Symptoms | Self::MedicationInstructions | Self::EmergencyNotes => 4,
            Self::ClinicalNotes | Self::TreatmentPlan => 6,
            Self::PatientHistory | Self::DischargeSummary => 8,
        }
    }

    /// Default character limit, if the purpose carries one.
    pub fn max_length(self) -> Option<usize> {
        match self {
            Self::General => None,
            Self::LabNotes => Some(500),
            Self::Symptoms | Self::MedicationInstructions | Self::EmergencyNotes => Some(1000),
            Self::ClinicalNotes | Self::TreatmentPlan => Some(2000),
            Self::PatientHistory | Self::DischargeSummary => Some(4000),
        }
    }

    /// Placeholder preset shown when the caller gives none.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::General => None,
            Self::ClinicalNotes => Some("Enter clinical observations and notes..."),
            Self::PatientHistory => Some("Document patient medical history..."),
            Self::Symptoms => Some("Describe presenting symptoms..."),
            Self::TreatmentPlan => Some("Outline the treatment plan..."),
            Self::MedicationInstructions => {
                Some("Enter medication instructions and administration notes...")
            }
            Self::DischargeSummary => Some("Summarize the stay and discharge instructions..."),
            Self::LabNotes => Some("Add laboratory notes..."),
            Self::EmergencyNotes => Some("Document emergency interventions..."),
        }
    }
}

impl Default for TextAreaPurpose {
    fn default() -> Self {
        Self::General
    }
}

impl FromStr for TextAreaPurpose {
    type Err = UnknownTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|purpose| purpose.token() == value)
            .ok_or_else(|| UnknownTokenError::new(value, "textarea purpose"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which directions a [`TextArea`] may be resized in.
pub enum ResizeMode {
    /// Fixed size.
    None,
    /// Vertical handle only.
    Vertical,
    /// Horizontal handle only.
    Horizontal,
    /// Both directions.
    Both,
}

impl ResizeMode {
    fn class(self) -> &'static str {
        match self {
            Self::None => "resize-none",
            Self::Vertical => "resize-y",
            Self::Horizontal => "resize-x",
            Self::Both => "resize",
        }
    }
}

impl Default for ResizeMode {
    fn default() -> Self {
        Self::Vertical
    }
}

fn textarea_classes(
    variant: FormVariant,
    size: ComponentSize,
    resize: ResizeMode,
    medical: bool,
    medical_device_mode: bool,
    full_width: bool,
    class: Option<String>,
) -> String {
    let sizing = size.classes();
    crate::classes![
        "font-normal leading-relaxed",
        if full_width { "w-full" } else { "w-auto" },
        "transition-all duration-200 ease-in-out",
        if medical_device_mode {
            FOCUS_MEDICAL_DEVICE
        } else {
            FOCUS_BASE
        },
        "focus:shadow-md focus:z-10",
        "disabled:cursor-not-allowed disabled:opacity-60",
        sizing.padding,
        sizing.text,
        sizing.radius,
        form_variant_class(variant),
        resize.class(),
        medical.then_some("ring-1 ring-primary-200"),
        class,
    ]
}

#[component]
/// Multi-line notes field whose purpose presets rows, length limit, and
/// placeholder. Purposes other than [`TextAreaPurpose::General`] mark the
/// field as medical data and render a character counter against the limit.
pub fn TextArea(
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] purpose: TextAreaPurpose,
    #[prop(optional)] variant: FormVariant,
    #[prop(default = ComponentSize::Md)] size: ComponentSize,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] helper: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(default = true)] full_width: bool,
    #[prop(optional)] medical_device_mode: bool,
    #[prop(optional)] resize: ResizeMode,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional)] max_length: Option<usize>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] extra: ExtraAttrs,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let id = extra.id.clone().unwrap_or_else(|| next_field_id("textarea"));
    let help_id = format!("{id}-help");
    let medical = purpose != TextAreaPurpose::General;
    let rows = rows.unwrap_or_else(|| purpose.rows());
    let max_length = max_length.or_else(|| purpose.max_length());
    let placeholder = placeholder.or_else(|| purpose.placeholder().map(str::to_string));
    let count = {
        let value = value.clone();
        move || value.with(|value| value.chars().count())
    };

    let textarea_class = textarea_classes(
        variant,
        size,
        resize,
        medical,
        medical_device_mode,
        full_width,
        class,
    );
    let handle_input = move |ev| {
        if let Some(on_input) = on_input {
            on_input.call(event_target_value(&ev));
        }
    };

    view! {
        <div class=crate::classes!["textarea-field", full_width.then_some("w-full")]>
            {label
                .map(|text| {
                    view! {
                        <label for=id.clone() class=field_label_classes(false, medical)>
                            {text}
                            {required
                                .then(|| {
                                    view! {
                                        <span class="text-danger-500 ml-1" aria-hidden="true">
                                            "*"
                                        </span>
                                    }
                                })}
                            {medical
                                .then(|| {
                                    view! {
                                        <span class="text-primary-600 text-xs ml-1">
                                            "(Medical Data)"
                                        </span>
                                    }
                                })}
                        </label>
                    }
                })}
            <textarea
                id=id.clone()
                class=textarea_class
                rows=rows
                placeholder=placeholder
                maxlength=max_length.map(|max| max.to_string())
                prop:value=move || value.get()
                disabled=move || disabled.get()
                required=required
                title=extra.title.clone()
                role=extra.role.clone()
                aria-label=extra.aria_label.clone()
                aria-required=required.to_string()
                aria-describedby=helper.is_some().then(|| help_id.clone())
                data-testid=extra.test_id.clone()
                data-purpose=purpose.token()
                data-medical=bool_token(medical)
                on:input=handle_input
            ></textarea>
            <div class="flex items-start justify-between gap-2">
                {helper
                    .map(|text| {
                        view! {
                            <p id=help_id.clone() class="mt-1 text-sm text-neutral-500">
                                {text}
                            </p>
                        }
                    })}
                {max_length
                    .map(|max| {
                        let class_count = count.clone();
                        let text_count = count.clone();
                        view! {
                            <p
                                class=move || {
                                    let count = class_count();
                                    if count > max {
                                        "mt-1 text-xs text-right ml-auto text-danger-600"
                                    } else if count * 10 >= max * 9 {
                                        "mt-1 text-xs text-right ml-auto text-caution-600"
                                    } else {
                                        "mt-1 text-xs text-right ml-auto text-neutral-500"
                                    }
                                }
                                aria-live="polite"
                            >
                                {move || format!("{} / {max}", text_count())}
                            </p>
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
    fn input_kind_tokens_round_trip() {
        for kind in InputKind::ALL {
            assert_eq!(kind.token().parse(), Ok(kind), "kind={kind:?}");
        }
        assert!("checkbox".parse::<InputKind>().is_err());
    }

    #[test]
    fn purpose_presets_stay_consistent() {
        for purpose in TextAreaPurpose::ALL {
            assert_eq!(purpose.token().parse(), Ok(purpose), "purpose={purpose:?}");
            assert!(purpose.rows() >= 3, "purpose={purpose:?}");
            if purpose == TextAreaPurpose::General {
                assert_eq!(purpose.max_length(), None);
                assert_eq!(purpose.placeholder(), None);
            } else {
                assert!(purpose.max_length().is_some(), "purpose={purpose:?}");
                assert!(purpose.placeholder().is_some(), "purpose={purpose:?}");
            }
        }
        assert_eq!(TextAreaPurpose::PatientHistory.rows(), 8);
        assert_eq!(TextAreaPurpose::LabNotes.max_length(), Some(500));
    }

    #[test]
    fn textarea_classes_compose_resize_and_flags() {
        let merged = textarea_classes(
            FormVariant::Default,
            ComponentSize::Md,
            ResizeMode::None,
            true,
            false,
            true,
            None,
        );
        assert!(merged.contains("resize-none"), "merged={merged:?}");
        assert!(merged.contains("ring-1 ring-primary-200"), "merged={merged:?}");
        assert!(!merged.contains("h-10"), "merged={merged:?}");

        let both = textarea_classes(
            FormVariant::Flat,
            ComponentSize::Md,
            ResizeMode::Both,
            false,
            false,
            false,
            None,
        );
        assert!(both.contains("resize"), "both={both:?}");
        assert!(both.contains("w-auto"), "both={both:?}");
    }
}
