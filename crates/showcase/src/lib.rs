//! Interactive gallery for the clinical design system.
//!
//! Renders every component family through `clinic_ui` with live pickers so
//! styling changes can be reviewed on a single page instead of hunting
//! through application screens. Picker selections persist to browser storage
//! and survive reloads.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::str::FromStr;

use clinic_ui::prelude::*;
use clinic_ui::{icon_for_name, shortcut_hint, UnknownTokenError};
use leptos::*;
use serde::{Deserialize, Serialize};

const STATE_KEY: &str = "clinicui.showcase.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ShowcaseState {
    intent: String,
    size: String,
    status: String,
    emergency: bool,
    medical_device_mode: bool,
    icon_query: String,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            intent: Intent::Primary.token().to_string(),
            size: ComponentSize::Md.token().to_string(),
            status: PatientStatus::Stable.token().to_string(),
            emergency: false,
            medical_device_mode: false,
            icon_query: "stethoscope".to_string(),
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn load_state() -> Option<ShowcaseState> {
    let storage = local_storage()?;
    let raw = storage.get_item(STATE_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(state) => Some(state),
        Err(err) => {
            logging::warn!("showcase state restore failed: {err}");
            None
        }
    }
}

fn persist_state(serialized: &str) {
    let Some(storage) = local_storage() else {
        return;
    };
    if storage.set_item(STATE_KEY, serialized).is_err() {
        logging::warn!("showcase state persist failed");
    }
}

/// Parses a persisted picker token, restoring `fallback` when the stored
/// value no longer matches the catalog.
fn parse_token<T>(raw: &str, fallback: T) -> T
where
    T: FromStr<Err = UnknownTokenError>,
{
    match raw.parse() {
        Ok(value) => value,
        Err(err) => {
            logging::warn!("{err}; restoring picker default");
            fallback
        }
    }
}

fn token_label(token: &str) -> String {
    let mut label = String::with_capacity(token.len());
    let mut chars = token.chars();
    if let Some(first) = chars.next() {
        label.extend(first.to_uppercase());
        label.push_str(chars.as_str());
    }
    label
}

#[component]
/// Single-page gallery of every component family, driven by persisted
/// pickers.
pub fn ShowcasePage() -> impl IntoView {
    let state = create_rw_signal(ShowcaseState::default());
    let last_saved = create_rw_signal::<Option<String>>(None);

    if let Some(restored) = load_state() {
        last_saved.set(serde_json::to_string(&restored).ok());
        state.set(restored);
    }

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("showcase state serialize failed: {err}");
                return;
            }
        };

        if last_saved.get().as_deref() == Some(serialized.as_str()) {
            return;
        }
        last_saved.set(Some(serialized.clone()));
        persist_state(&serialized);
    });

    let intent = Signal::derive(move || parse_token(&state.get().intent, Intent::Primary));
    let size = Signal::derive(move || parse_token(&state.get().size, ComponentSize::Md));
    let status = Signal::derive(move || parse_token(&state.get().status, PatientStatus::Stable));
    let emergency = Signal::derive(move || state.get().emergency);
    let device = Signal::derive(move || state.get().medical_device_mode);
    let icon_query = Signal::derive(move || state.get().icon_query);

    let saving = create_rw_signal(false);
    let dismissed_alerts = create_rw_signal(0u32);
    let badge_taps = create_rw_signal(0u32);
    let last_action = create_rw_signal::<Option<ShortcutAction>>(None);
    let patient_id_value = create_rw_signal(String::new());
    let dosage_value = create_rw_signal(String::new());
    let temperature_value = create_rw_signal(String::new());
    let notes_value = create_rw_signal(String::new());
    let route_value = create_rw_signal(String::new());
    let high_alert_armed = create_rw_signal(false);

    let temperature_validation =
        MedicalValidation::required(ValidationKind::VitalReading).with_range(ValueRange::new(30.0, 43.0));

    let intent_options = Intent::ALL
        .iter()
        .map(|intent| RadioOption::new(intent.token(), token_label(intent.token())))
        .collect::<Vec<_>>();
    let size_options = ComponentSize::ALL
        .iter()
        .map(|size| SelectOption::new(size.token(), size.token().to_uppercase()))
        .collect::<Vec<_>>();
    let status_options = PatientStatus::ALL
        .iter()
        .map(|status| SelectOption::new(status.token(), status.label()))
        .collect::<Vec<_>>();
    let route_groups = vec![
        SelectGroup::new(
            "Enteral",
            vec![
                SelectOption::new("po", "Oral"),
                SelectOption::new("sl", "Sublingual"),
            ],
        ),
        SelectGroup::new(
            "Parenteral",
            vec![
                SelectOption::new("iv", "Intravenous"),
                SelectOption::new("im", "Intramuscular"),
                SelectOption::new("sc", "Subcutaneous").disabled(),
            ],
        ),
    ];

    view! {
        <Header sticky=true>
            <Logo label="Clinic UI" />
            <Navigation>
                <NavLink href="/" active=true icon=IconName::Home>"Gallery"</NavLink>
                <NavLink href="/triage" variant=NavLinkVariant::Emergency icon=IconName::AlertTriangle>
                    "Triage"
                </NavLink>
            </Navigation>
            <ThemeToggle />
        </Header>

        <Container size=ContainerSize::Xl class="py-8">
            <Stack gap=Spacing::Eight>
                <Stack gap=Spacing::Two>
                    <Heading level=HeadingLevel::H1>"Component gallery"</Heading>
                    <Text purpose=TextPurpose::Body>
                        "The pickers below drive every live preview on this page."
                    </Text>
                </Stack>

                <Card title="Preview controls" subtitle="Selections persist across reloads">
                    <Grid cols=2 gap=Spacing::Six>
                        <GridItem>
                            {move || {
                                let options = intent_options.clone();
                                view! {
                                    <RadioGroup
                                        options=options
                                        legend="Intent"
                                        medical_device_mode=device.get()
                                        value=Signal::derive(move || state.get().intent)
                                        on_change=Callback::new(move |next| {
                                            state.update(|value| value.intent = next);
                                        })
                                    />
                                }
                            }}
                        </GridItem>
                        <GridItem>
                            <Stack gap=Spacing::Four>
                                <Select
                                    label="Component size"
                                    options=size_options
                                    value=Signal::derive(move || state.get().size)
                                    on_change=Callback::new(move |next| {
                                        state.update(|value| value.size = next);
                                    })
                                />
                                <Select
                                    label="Patient status"
                                    options=status_options
                                    value=Signal::derive(move || state.get().status)
                                    on_change=Callback::new(move |next| {
                                        state.update(|value| value.status = next);
                                    })
                                />
                                <Checkbox
                                    label="Emergency mode"
                                    description="Escalates previews to emergency styling"
                                    checked=emergency
                                    on_change=Callback::new(move |next| {
                                        state.update(|value| value.emergency = next);
                                    })
                                />
                                <Checkbox
                                    label="Medical device mode"
                                    description="Widens focus rings and enables numbered quick-select"
                                    checked=device
                                    on_change=Callback::new(move |next| {
                                        state.update(|value| value.medical_device_mode = next);
                                    })
                                />
                            </Stack>
                        </GridItem>
                    </Grid>
                </Card>

                <Card title="Buttons">
                    <Stack gap=Spacing::Four>
                        {move || {
                            let intent = intent.get();
                            let size = size.get();
                            let emergency = emergency.get();
                            let device = device.get();
                            view! {
                                <Row gap=Spacing::Three wrap=true>
                                    <Button intent=intent size=size emergency=emergency medical_device_mode=device>
                                        "Record vitals"
                                    </Button>
                                    <Button
                                        intent=intent
                                        size=size
                                        emergency=emergency
                                        medical_device_mode=device
                                        leading_icon=IconName::Plus
                                    >
                                        "Add order"
                                    </Button>
                                    <Button intent=intent size=size disabled=true>"Disabled"</Button>
                                </Row>
                            }
                        }}
                        <Row gap=Spacing::Three wrap=true>
                            <Button
                                loading=saving
                                trailing_icon=IconName::ArrowRight
                                on_click=Callback::new(move |_| {
                                    saving.update(|flag| *flag = !*flag);
                                })
                            >
                                "Sign and save"
                            </Button>
                            <Button intent=Intent::Caution emergency=true medical_device_mode=true>
                                "Silence alarm"
                            </Button>
                            <Button
                                intent=Intent::Danger
                                leading_icon=IconName::X
                                aria_label="Discard draft note"
                            >
                                "Discard"
                            </Button>
                        </Row>
                        <Text purpose=TextPurpose::Caption>
                            "Caution intent combined with emergency and device mode picks up the critical-action treatment."
                        </Text>
                    </Stack>
                </Card>

                <Card title="Alerts">
                    <Stack gap=Spacing::Four>
                        {move || view! {
                            <Alert intent=intent.get() title="Medication due">
                                "Amoxicillin 500 mg is due for the patient in bay 4."
                            </Alert>
                        }}
                        {move || {
                            let _ = dismissed_alerts.get();
                            view! {
                                <Alert
                                    intent=Intent::Danger
                                    emergency=true
                                    dismissible=true
                                    title="Code blue"
                                    patient_id="AB123456"
                                    timestamp="09:41"
                                    on_dismiss=Callback::new(move |_| {
                                        dismissed_alerts.update(|count| *count += 1);
                                    })
                                >
                                    "Cardiac arrest response in progress. Crash cart en route."
                                </Alert>
                            }
                        }}
                        <Text purpose=TextPurpose::Caption>
                            {move || {
                                format!(
                                    "Emergency alert dismissed {} times; the gallery restores it.",
                                    dismissed_alerts.get(),
                                )
                            }}
                        </Text>
                    </Stack>
                </Card>

                <Card title="Badges">
                    <Stack gap=Spacing::Four>
                        <Row gap=Spacing::Two wrap=true>
                            {ClinicalPriority::ALL
                                .iter()
                                .copied()
                                .map(|priority| {
                                    view! {
                                        <Badge priority=priority pill=true dot=true>
                                            {token_label(priority.token())}
                                        </Badge>
                                    }
                                })
                                .collect_view()}
                        </Row>
                        <Row gap=Spacing::Two wrap=true>
                            {move || view! {
                                <Badge intent=intent.get() size=size.get() variant=Variant::Outlined>
                                    "Intent preview"
                                </Badge>
                            }}
                            <Badge
                                intent=Intent::Info
                                interactive=true
                                on_activate=Callback::new(move |_| {
                                    badge_taps.update(|count| *count += 1);
                                })
                            >
                                "Ward 3"
                            </Badge>
                            <Text purpose=TextPurpose::Caption>
                                {move || format!("Ward filter toggled {} times", badge_taps.get())}
                            </Text>
                        </Row>
                    </Stack>
                </Card>

                <Card title="Cards">
                    <Grid cols=2 gap=Spacing::Six context=GridContext::Dashboard>
                        <GridItem>
                            {move || view! {
                                <Card
                                    title="Rosa Martinez"
                                    subtitle="Post-op day 2"
                                    purpose=CardPurpose::Patient
                                    priority=CardPriority::High
                                    status=status.get()
                                    patient_id="AB123456"
                                    timestamp="08:15"
                                    interactive=true
                                >
                                    <Text>"Vitals stable overnight. Pain managed with scheduled analgesia."</Text>
                                </Card>
                            }}
                        </GridItem>
                        <GridItem>
                            <Card purpose=CardPurpose::VitalSigns variant=Variant::Elevated padding=CardPadding::None>
                                <CardHeader emphasis=HeaderEmphasis::Medical>
                                    <Row justify=Justify::Between>
                                        <Heading level=HeadingLevel::H3>"Blood pressure"</Heading>
                                        <Icon icon=IconName::Activity />
                                    </Row>
                                </CardHeader>
                                <CardBody>
                                    <Row gap=Spacing::Four>
                                        <Column span=6>
                                            <Text purpose=TextPurpose::Label>"Systolic"</Text>
                                            <Text>"122 mmHg"</Text>
                                        </Column>
                                        <Column span=6>
                                            <Text purpose=TextPurpose::Label>"Diastolic"</Text>
                                            <Text>"78 mmHg"</Text>
                                        </Column>
                                    </Row>
                                </CardBody>
                                <CardFooter align=FooterAlign::Right>
                                    <Button size=ComponentSize::Sm intent=Intent::Secondary>"History"</Button>
                                </CardFooter>
                            </Card>
                        </GridItem>
                    </Grid>
                </Card>

                <Card title="Typography">
                    <Stack gap=Spacing::Three>
                        <Heading level=HeadingLevel::H1>"Ward overview"</Heading>
                        <Heading level=HeadingLevel::H3 intent=Intent::Primary>"Assigned patients"</Heading>
                        <Text purpose=TextPurpose::Body>
                            "Routine rounds completed at 08:00. No outstanding escalations."
                        </Text>
                        <Text purpose=TextPurpose::Label transform=TextTransform::Uppercase>
                            "Medication record"
                        </Text>
                        <Text purpose=TextPurpose::Caption>"Updated 2 minutes ago"</Text>
                        <Text purpose=TextPurpose::Error>"Potassium outside reference range."</Text>
                        <Text purpose=TextPurpose::Emergency emergency_mode=true>"Anaphylaxis protocol active"</Text>
                        <Text truncate=true class="max-w-xs">
                            "This admission note is longer than its column and truncates with an ellipsis."
                        </Text>
                    </Stack>
                </Card>

                <Card title="Forms">
                    <Stack gap=Spacing::Six>
                        <Grid cols=2 gap=Spacing::Six>
                            <GridItem>
                                {move || view! {
                                    <TextInput
                                        label="Patient ID"
                                        placeholder="AB123456"
                                        required=true
                                        validation=MedicalValidation::required(ValidationKind::PatientId)
                                        medical_device_mode=device.get()
                                        context=ShortcutContext::PatientData
                                        value=patient_id_value
                                        on_input=Callback::new(move |next| patient_id_value.set(next))
                                        on_shortcut=Callback::new(move |action| last_action.set(Some(action)))
                                    />
                                }}
                            </GridItem>
                            <GridItem>
                                <TextInput
                                    label="Dosage"
                                    placeholder="10 mg"
                                    helper="Amount followed by mg, ml, or units"
                                    validation=MedicalValidation::required(ValidationKind::Dosage)
                                    value=dosage_value
                                    on_input=Callback::new(move |next| dosage_value.set(next))
                                />
                            </GridItem>
                            <GridItem>
                                <TextInput
                                    label="Temperature"
                                    kind=InputKind::Number
                                    placeholder="37.0"
                                    validation=temperature_validation
                                    value=temperature_value
                                    on_input=Callback::new(move |next| temperature_value.set(next))
                                />
                            </GridItem>
                            <GridItem>
                                <FormField
                                    label="Administration route"
                                    description="How the medication reaches the patient"
                                    status=FieldStatus::Success
                                    message="Route verified against the order"
                                    for_id="route-select"
                                >
                                    <Select
                                        extra=ExtraAttrs::default().with_id("route-select")
                                        groups=route_groups
                                        value=route_value
                                        on_change=Callback::new(move |next| route_value.set(next))
                                    />
                                </FormField>
                            </GridItem>
                        </Grid>
                        <TextArea
                            label="Clinical notes"
                            purpose=TextAreaPurpose::ClinicalNotes
                            value=notes_value
                            on_input=Callback::new(move |next| notes_value.set(next))
                        />
                        <Checkbox
                            label="Administer high-alert medication"
                            description="A second press confirms the order"
                            critical=true
                            checked=high_alert_armed
                            on_change=Callback::new(move |next| high_alert_armed.set(next))
                        />
                    </Stack>
                </Card>

                <Card title="Keyboard shortcuts">
                    <Stack gap=Spacing::Four>
                        <Text purpose=TextPurpose::Body>{shortcut_hint(ShortcutContext::VitalSigns)}</Text>
                        <Container
                            size=ContainerSize::Md
                            scrollable=true
                            medical_device_mode=true
                            context=ContainerContext::VitalSigns
                            class="h-48 border border-neutral-200 rounded-lg p-4"
                            on_shortcut=Callback::new(move |action| last_action.set(Some(action)))
                        >
                            <Stack gap=Spacing::Two>
                                {(1..=12)
                                    .map(|reading| {
                                        view! {
                                            <Text>{format!("Reading {reading}: 120/78 mmHg, 72 bpm")}</Text>
                                        }
                                    })
                                    .collect_view()}
                            </Stack>
                        </Container>
                        <Row gap=Spacing::Two>
                            <Text purpose=TextPurpose::Label>"Last shortcut action:"</Text>
                            {move || match last_action.get() {
                                Some(action) => {
                                    view! { <Badge intent=Intent::Info>{action.description()}</Badge> }
                                        .into_view()
                                }
                                None => {
                                    view! { <Text purpose=TextPurpose::Caption>"none yet"</Text> }
                                        .into_view()
                                }
                            }}
                        </Row>
                    </Stack>
                </Card>

                <Card title="Icons">
                    <Stack gap=Spacing::Four>
                        <Row gap=Spacing::Four align=Alignment::End>
                            <TextInput
                                label="Icon lookup"
                                helper="Unknown names render the placeholder glyph"
                                full_width=false
                                value=icon_query
                                on_input=Callback::new(move |next| {
                                    state.update(|value| value.icon_query = next);
                                })
                            />
                            {move || {
                                let resolved = icon_for_name(&icon_query.get());
                                view! {
                                    <Row gap=Spacing::Two>
                                        <Icon icon=resolved size=IconSize::Lg />
                                        <Text purpose=TextPurpose::Caption>
                                            {format!("resolved: {}", resolved.token())}
                                        </Text>
                                    </Row>
                                }
                            }}
                        </Row>
                        <Grid cols=6 gap=Spacing::Four>
                            {IconName::ALL
                                .iter()
                                .map(|glyph| {
                                    view! {
                                        <GridItem>
                                            <Stack gap=Spacing::One align=Alignment::Center>
                                                <Icon icon=*glyph />
                                                <Text purpose=TextPurpose::Caption>{glyph.token()}</Text>
                                            </Stack>
                                        </GridItem>
                                    }
                                })
                                .collect_view()}
                        </Grid>
                    </Stack>
                </Card>
            </Stack>
        </Container>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_state_round_trips_through_json() {
        let state = ShowcaseState::default();
        let raw = serde_json::to_string(&state).unwrap();
        let restored: ShowcaseState = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn picker_tokens_parse_with_fallback() {
        assert_eq!(parse_token("danger", Intent::Primary), Intent::Danger);
        assert_eq!(parse_token("not-a-token", Intent::Primary), Intent::Primary);
        assert_eq!(parse_token("xl", ComponentSize::Md), ComponentSize::Xl);
    }

    #[test]
    fn default_pickers_use_catalog_tokens() {
        let state = ShowcaseState::default();
        assert_eq!(parse_token(&state.intent, Intent::Info), Intent::Primary);
        assert_eq!(parse_token(&state.size, ComponentSize::Xs), ComponentSize::Md);
        assert_eq!(
            parse_token(&state.status, PatientStatus::Critical),
            PatientStatus::Stable
        );
    }

    #[test]
    fn token_labels_capitalize_the_first_letter() {
        assert_eq!(token_label("caution"), "Caution");
        assert_eq!(token_label(""), "");
    }
}
