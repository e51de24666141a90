use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Clinical context a card presents, driving its tint and header treatment.
pub enum CardPurpose {
    /// No clinical context.
    General,
    /// Patient demographic or chart summary.
    Patient,
    /// Vital sign readings.
    VitalSigns,
    /// Medication orders and administration.
    Medication,
    /// Scheduling information.
    Appointment,
    /// Active emergency content.
    Emergency,
}

impl Default for CardPurpose {
    fn default() -> Self {
        Self::General
    }
}

impl CardPurpose {
    /// Every purpose, in table order.
    pub const ALL: [Self; 6] = [
        Self::General,
        Self::Patient,
        Self::VitalSigns,
        Self::Medication,
        Self::Appointment,
        Self::Emergency,
    ];

    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Patient => "patient",
            Self::VitalSigns => "vital-signs",
            Self::Medication => "medication",
            Self::Appointment => "appointment",
            Self::Emergency => "emergency",
        }
    }

    /// Whether the purpose carries patient-facing header chrome.
    pub fn is_medical(self) -> bool {
        matches!(
            self,
            Self::Patient | Self::VitalSigns | Self::Medication | Self::Emergency
        )
    }

    fn tint_class(self) -> Option<&'static str> {
        match self {
            Self::General => None,
            Self::Patient => Some("border-primary-200 bg-primary-50"),
            Self::VitalSigns => Some("border-info-200 bg-info-50"),
            Self::Medication => Some("border-success-200 bg-success-50"),
            Self::Appointment => Some("border-secondary-200 bg-secondary-50"),
            Self::Emergency => Some("border-danger-300 bg-danger-50"),
        }
    }
}

impl FromStr for CardPurpose {
    type Err = UnknownTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|purpose| purpose.token() == value)
            .ok_or_else(|| UnknownTokenError::new(value, "card purpose"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Escalation level of the information a card holds.
pub enum CardPriority {
    /// Background information.
    Low,
    /// Ordinary priority.
    Normal,
    /// Needs prompt attention.
    High,
    /// Needs immediate attention.
    Critical,
    /// Active emergency.
    Emergency,
}

impl Default for CardPriority {
    fn default() -> Self {
        Self::Normal
    }
}

impl CardPriority {
    /// Every priority, lowest first.
    pub const ALL: [Self; 5] = [
        Self::Low,
        Self::Normal,
        Self::High,
        Self::Critical,
        Self::Emergency,
    ];

    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Critical => "critical",
            Self::Emergency => "emergency",
        }
    }

    fn ring_class(self) -> Option<&'static str> {
        match self {
            Self::Low | Self::Normal => None,
            Self::High => Some("ring-1 ring-caution-300"),
            Self::Critical => Some("ring-2 ring-danger-400"),
            Self::Emergency => Some("ring-2 ring-danger-600 bg-danger-100"),
        }
    }
}

impl FromStr for CardPriority {
    type Err = UnknownTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.token() == value)
            .ok_or_else(|| UnknownTokenError::new(value, "card priority"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Observed condition of the patient a card describes.
pub enum PatientStatus {
    /// Within expected ranges.
    Stable,
    /// Worth watching.
    Caution,
    /// Deteriorating readings.
    Warning,
    /// Dangerous readings.
    Critical,
}

impl PatientStatus {
    /// Every status, most stable first.
    pub const ALL: [Self; 4] = [Self::Stable, Self::Caution, Self::Warning, Self::Critical];

    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Caution => "caution",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }

    /// Chip text, uppercased for scanning at a distance.
    pub fn label(self) -> &'static str {
        match self {
            Self::Stable => "STABLE",
            Self::Caution => "CAUTION",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }

    fn accent_class(self) -> Option<&'static str> {
        match self {
            Self::Stable => None,
            Self::Caution => Some("border-l-4 border-l-caution-500"),
            Self::Warning => Some("border-l-4 border-l-caution-600"),
            Self::Critical => Some("border-l-4 border-l-danger-600"),
        }
    }

    fn chip_class(self) -> &'static str {
        match self {
            Self::Stable => "bg-success-100 text-success-700",
            Self::Caution => "bg-caution-100 text-caution-700",
            Self::Warning => "bg-caution-200 text-caution-800",
            Self::Critical => "bg-danger-100 text-danger-700",
        }
    }
}

impl FromStr for PatientStatus {
    type Err = UnknownTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.token() == value)
            .ok_or_else(|| UnknownTokenError::new(value, "patient status"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inner padding for the card body region.
pub enum CardPadding {
    /// Flush content.
    None,
    /// Tight padding.
    Sm,
    /// Standard padding.
    Md,
    /// Roomy padding.
    Lg,
}

impl Default for CardPadding {
    fn default() -> Self {
        Self::Md
    }
}

impl CardPadding {
    fn class(self) -> &'static str {
        match self {
            Self::None => "p-0",
            Self::Sm => "p-2",
            Self::Md => "p-4",
            Self::Lg => "p-6",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Background treatment for a card header.
pub enum HeaderEmphasis {
    /// Plain header.
    Default,
    /// Tinted clinical header.
    Medical,
    /// Emergency header.
    Emergency,
}

impl Default for HeaderEmphasis {
    fn default() -> Self {
        Self::Default
    }
}

impl HeaderEmphasis {
    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Medical => "medical",
            Self::Emergency => "emergency",
        }
    }

    fn class(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Medical => Some("bg-primary-50"),
            Self::Emergency => Some("bg-danger-50 border-danger-200"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Horizontal placement of footer content.
pub enum FooterAlign {
    /// Natural start position.
    Left,
    /// Centered run.
    Center,
    /// Packed at the end.
    Right,
    /// Pushed to opposite edges.
    Between,
}

impl Default for FooterAlign {
    fn default() -> Self {
        Self::Left
    }
}

impl FooterAlign {
    fn class(self) -> Option<&'static str> {
        match self {
            Self::Left => None,
            Self::Center => Some("justify-center"),
            Self::Right => Some("justify-end"),
            Self::Between => Some("justify-between"),
        }
    }
}

fn card_size_class(size: ComponentSize) -> &'static str {
    match size {
        ComponentSize::Xs => "text-xs",
        ComponentSize::Sm => "text-sm",
        ComponentSize::Md => "text-base",
        ComponentSize::Lg => "text-lg",
        ComponentSize::Xl => "text-xl",
    }
}

fn card_variant_class(variant: Variant) -> &'static str {
    match variant {
        Variant::Filled => "bg-neutral-50",
        Variant::Outlined => "border border-neutral-200",
        Variant::Soft => "border border-neutral-100 bg-neutral-50",
        Variant::Ghost => "border-0 shadow-none",
        Variant::Elevated => "shadow-md hover:shadow-lg",
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn card_classes(
    variant: Variant,
    size: ComponentSize,
    purpose: CardPurpose,
    priority: CardPriority,
    status: Option<PatientStatus>,
    interactive: bool,
    critical: bool,
    class: Option<String>,
) -> String {
    crate::classes![
        "card bg-white rounded-lg transition-all duration-200",
        card_variant_class(variant),
        card_size_class(size),
        purpose.tint_class(),
        priority.ring_class(),
        status.and_then(PatientStatus::accent_class),
        interactive.then_some("cursor-pointer hover:shadow-md"),
        interactive.then_some(FOCUS_BASE),
        critical.then_some("ring-1 ring-danger-400"),
        class,
    ]
}

#[component]
fn StatusChip(status: PatientStatus) -> impl IntoView {
    let class = crate::classes![
        "inline-flex items-center px-2 py-1 rounded text-xs font-medium",
        status.chip_class(),
    ];
    view! {
        <span class=class data-status=status.token()>{status.label()}</span>
    }
}

#[component]
/// Content surface with clinical purpose tinting, priority rings, and an
/// optional patient header.
pub fn Card(
    #[prop(default = Variant::Outlined)] variant: Variant,
    #[prop(default = ComponentSize::Md)] size: ComponentSize,
    #[prop(optional)] purpose: CardPurpose,
    #[prop(optional)] priority: CardPriority,
    #[prop(optional)] status: Option<PatientStatus>,
    #[prop(optional)] padding: CardPadding,
    #[prop(optional)] interactive: bool,
    #[prop(optional)] critical: bool,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] patient_id: Option<String>,
    #[prop(optional, into)] timestamp: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] extra: ExtraAttrs,
    #[prop(optional)] on_activate: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let card_class = card_classes(
        variant,
        size,
        purpose,
        priority,
        status,
        interactive,
        critical,
        class,
    );
    let aria_label = extra
        .aria_label
        .clone()
        .or_else(|| title.clone())
        .unwrap_or_else(|| format!("{} card", purpose.token()));
    let role = extra
        .role
        .clone()
        .unwrap_or_else(|| if interactive { "button" } else { "region" }.to_string());
    let has_header = title.is_some() || subtitle.is_some();
    let emphasis = match purpose {
        CardPurpose::Emergency => HeaderEmphasis::Emergency,
        _ if purpose.is_medical() => HeaderEmphasis::Medical,
        _ => HeaderEmphasis::Default,
    };

    view! {
        <div
            class=card_class
            id=extra.id.clone()
            title=extra.title.clone()
            role=role
            tabindex=interactive.then_some("0")
            aria-label=aria_label
            aria-describedby=extra.aria_describedby.clone()
            data-testid=extra.test_id.clone()
            data-purpose=purpose.token()
            data-priority=priority.token()
            data-critical=bool_token(critical)
            data-patient-id=patient_id.clone()
            data-status=status.map(PatientStatus::token)
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
            {has_header
                .then(|| {
                    view! {
                        <CardHeader emphasis=emphasis>
                            <div>
                                {title
                                    .map(|title| {
                                        view! {
                                            <h3 class="text-lg font-semibold text-neutral-900 mb-1">
                                                {title}
                                            </h3>
                                        }
                                    })}
                                {subtitle
                                    .map(|subtitle| {
                                        view! { <p class="text-sm text-neutral-600">{subtitle}</p> }
                                    })}
                                {(patient_id.is_some() || timestamp.is_some())
                                    .then(|| {
                                        view! {
                                            <div class="flex items-center gap-4 mt-2 text-xs text-neutral-500">
                                                {patient_id
                                                    .map(|patient_id| {
                                                        view! { <span>"ID: " {patient_id}</span> }
                                                    })}
                                                {timestamp
                                                    .map(|timestamp| {
                                                        view! {
                                                            <time datetime=timestamp.clone()>{timestamp}</time>
                                                        }
                                                    })}
                                            </div>
                                        }
                                    })}
                            </div>
                            {status.map(|status| view! { <StatusChip status=status /> })}
                        </CardHeader>
                    }
                })}
            <CardBody padding=padding>{children()}</CardBody>
        </div>
    }
}

#[component]
/// Header strip for a card, tinted by emphasis.
pub fn CardHeader(
    #[prop(optional)] emphasis: HeaderEmphasis,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = crate::classes![
        "card-header flex items-center justify-between p-4 border-b border-neutral-200",
        emphasis.class(),
        class,
    ];
    view! {
        <div class=class data-emphasis=emphasis.token()>{children()}</div>
    }
}

#[component]
/// Padded content region of a card.
pub fn CardBody(
    #[prop(optional)] padding: CardPadding,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = crate::classes!["card-body", padding.class(), class];
    view! { <div class=class>{children()}</div> }
}

#[component]
/// Footer strip for a card with horizontal alignment control.
pub fn CardFooter(
    #[prop(optional)] align: FooterAlign,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = crate::classes![
        "card-footer p-4 border-t border-neutral-200 flex",
        align.class(),
        class,
    ];
    view! { <div class=class>{children()}</div> }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_card_classes() {
        assert_eq!(
            card_classes(
                Variant::Outlined,
                ComponentSize::Md,
                CardPurpose::General,
                CardPriority::Normal,
                None,
                false,
                false,
                None,
            ),
            "card bg-white rounded-lg transition-all duration-200 border border-neutral-200 text-base",
        );
    }

    #[test]
    fn purpose_tint_joins_priority_ring() {
        let classes = card_classes(
            Variant::Outlined,
            ComponentSize::Md,
            CardPurpose::Emergency,
            CardPriority::Emergency,
            None,
            false,
            false,
            None,
        );
        assert!(classes.contains("border-danger-300 bg-danger-50"), "{classes}");
        assert!(classes.contains("ring-2 ring-danger-600 bg-danger-100"), "{classes}");
    }

    #[test]
    fn status_accent_table() {
        let cases = [
            (PatientStatus::Stable, None),
            (PatientStatus::Caution, Some("border-l-caution-500")),
            (PatientStatus::Warning, Some("border-l-caution-600")),
            (PatientStatus::Critical, Some("border-l-danger-600")),
        ];
        for (status, accent) in cases {
            let classes = card_classes(
                Variant::Outlined,
                ComponentSize::Md,
                CardPurpose::Patient,
                CardPriority::Normal,
                Some(status),
                false,
                false,
                None,
            );
            match accent {
                Some(accent) => assert!(classes.contains(accent), "status={status:?} {classes}"),
                None => assert!(!classes.contains("border-l-4"), "status={status:?} {classes}"),
            }
        }
    }

    #[test]
    fn interactive_card_gains_pointer_and_focus_ring() {
        let classes = card_classes(
            Variant::Elevated,
            ComponentSize::Md,
            CardPurpose::General,
            CardPriority::Normal,
            None,
            true,
            false,
            None,
        );
        assert!(classes.contains("cursor-pointer hover:shadow-md"), "{classes}");
        assert!(classes.contains(FOCUS_BASE), "{classes}");
    }

    #[test]
    fn status_chip_colors_and_labels() {
        let cases = [
            (PatientStatus::Stable, "bg-success-100", "STABLE"),
            (PatientStatus::Caution, "bg-caution-100", "CAUTION"),
            (PatientStatus::Warning, "bg-caution-200", "WARNING"),
            (PatientStatus::Critical, "bg-danger-100", "CRITICAL"),
        ];
        for (status, chip, label) in cases {
            assert!(status.chip_class().contains(chip), "status={status:?}");
            assert_eq!(status.label(), label, "status={status:?}");
        }
    }

    #[test]
    fn custom_class_lands_last() {
        let classes = card_classes(
            Variant::Ghost,
            ComponentSize::Sm,
            CardPurpose::General,
            CardPriority::Normal,
            None,
            false,
            false,
            Some("my-card".to_string()),
        );
        assert!(classes.ends_with("my-card"), "{classes}");
    }
}
