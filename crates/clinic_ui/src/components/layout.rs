use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Main axis of a [`Stack`].
pub enum StackDirection {
    /// Horizontal run.
    Row,
    /// Vertical run.
    Column,
}

impl Default for StackDirection {
    fn default() -> Self {
        Self::Column
    }
}

impl StackDirection {
    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }

    fn class(self, reverse: bool) -> &'static str {
        match (self, reverse) {
            (Self::Row, false) => "flex-row",
            (Self::Row, true) => "flex-row-reverse",
            (Self::Column, false) => "flex-col",
            (Self::Column, true) => "flex-col-reverse",
        }
    }

    fn default_alignment(self) -> Alignment {
        match self {
            Self::Row => Alignment::Center,
            Self::Column => Alignment::Stretch,
        }
    }
}

pub(crate) fn stack_classes(
    direction: StackDirection,
    reverse: bool,
    gap: Spacing,
    align: Option<Alignment>,
    justify: Justify,
    wrap: bool,
    class: Option<String>,
) -> String {
    let align = align.unwrap_or_else(|| direction.default_alignment());
    crate::classes![
        "flex",
        direction.class(reverse),
        gap.gap_class(),
        align.items_class(),
        justify.justify_class(),
        if wrap { "flex-wrap" } else { "flex-nowrap" },
        class,
    ]
}

#[component]
/// Flex run along one axis. Cross-axis alignment defaults to center for
/// rows and stretch for columns when not given.
pub fn Stack(
    #[prop(optional)] direction: StackDirection,
    #[prop(optional)] reverse: bool,
    #[prop(optional)] gap: Spacing,
    #[prop(optional)] align: Option<Alignment>,
    #[prop(optional)] justify: Justify,
    #[prop(optional)] wrap: bool,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = stack_classes(direction, reverse, gap, align, justify, wrap, class);
    view! {
        <div class=class data-direction=direction.token()>{children()}</div>
    }
}

#[component]
/// Horizontal [`Stack`] with row defaults.
pub fn Row(
    #[prop(optional)] gap: Spacing,
    #[prop(default = Alignment::Center)] align: Alignment,
    #[prop(optional)] justify: Justify,
    #[prop(optional)] wrap: bool,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = stack_classes(
        StackDirection::Row,
        false,
        gap,
        Some(align),
        justify,
        wrap,
        class,
    );
    view! {
        <div class=class data-direction="row">{children()}</div>
    }
}

fn column_span_class(span: u8) -> Option<&'static str> {
    match span {
        1 => Some("w-1/12"),
        2 => Some("w-1/6"),
        3 => Some("w-1/4"),
        4 => Some("w-1/3"),
        5 => Some("w-5/12"),
        6 => Some("w-1/2"),
        7 => Some("w-7/12"),
        8 => Some("w-2/3"),
        9 => Some("w-3/4"),
        10 => Some("w-5/6"),
        11 => Some("w-11/12"),
        12 => Some("w-full"),
        _ => None,
    }
}

fn column_offset_class(offset: u8) -> Option<&'static str> {
    match offset {
        1 => Some("ml-1/12"),
        2 => Some("ml-1/6"),
        3 => Some("ml-1/4"),
        4 => Some("ml-1/3"),
        5 => Some("ml-5/12"),
        6 => Some("ml-1/2"),
        7 => Some("ml-7/12"),
        8 => Some("ml-2/3"),
        9 => Some("ml-3/4"),
        10 => Some("ml-5/6"),
        11 => Some("ml-11/12"),
        _ => None,
    }
}

pub(crate) fn column_classes(
    gap: Spacing,
    align: Alignment,
    justify: Justify,
    span: Option<u8>,
    offset: Option<u8>,
    class: Option<String>,
) -> String {
    crate::classes![
        "flex flex-col",
        gap.gap_class(),
        align.items_class(),
        justify.justify_class(),
        span.and_then(column_span_class),
        offset.and_then(column_offset_class),
        class,
    ]
}

#[component]
/// Vertical flex column, optionally sized on the twelve-column scale.
pub fn Column(
    #[prop(optional)] gap: Spacing,
    #[prop(optional)] align: Alignment,
    #[prop(optional)] justify: Justify,
    #[prop(optional)] span: Option<u8>,
    #[prop(optional)] offset: Option<u8>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    if let Some(span) = span {
        if column_span_class(span).is_none() {
            logging::warn!("column span {span} outside 1..=12; ignoring");
        }
    }
    if let Some(offset) = offset {
        if column_offset_class(offset).is_none() {
            logging::warn!("column offset {offset} outside 1..=11; ignoring");
        }
    }
    let class = column_classes(gap, align, justify, span, offset, class);
    view! {
        <div class=class data-direction="column">{children()}</div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Clinical screen region a grid lays out.
pub enum GridContext {
    /// No particular region.
    Default,
    /// Overview dashboard tiles.
    Dashboard,
    /// Vital sign tiles.
    VitalSigns,
    /// Patient roster rows.
    PatientList,
    /// Dense tabular data.
    DataDisplay,
}

impl Default for GridContext {
    fn default() -> Self {
        Self::Default
    }
}

impl GridContext {
    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dashboard => "dashboard",
            Self::VitalSigns => "vital-signs",
            Self::PatientList => "patient-list",
            Self::DataDisplay => "data-display",
        }
    }
}

fn grid_cols_class(cols: u8) -> Option<&'static str> {
    match cols {
        1 => Some("grid-cols-1"),
        2 => Some("grid-cols-2"),
        3 => Some("grid-cols-3"),
        4 => Some("grid-cols-4"),
        5 => Some("grid-cols-5"),
        6 => Some("grid-cols-6"),
        7 => Some("grid-cols-7"),
        8 => Some("grid-cols-8"),
        9 => Some("grid-cols-9"),
        10 => Some("grid-cols-10"),
        11 => Some("grid-cols-11"),
        12 => Some("grid-cols-12"),
        _ => None,
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn grid_classes(
    cols: u8,
    gap: Spacing,
    gap_x: Option<Spacing>,
    gap_y: Option<Spacing>,
    align: Option<Alignment>,
    justify: Option<Justify>,
    medical_device_mode: bool,
    context: GridContext,
    class: Option<String>,
) -> String {
    crate::classes![
        "grid",
        grid_cols_class(cols),
        gap.gap_class(),
        gap_x.map(|gap| format!("gap-x-{}", gap.token())),
        gap_y.map(|gap| format!("gap-y-{}", gap.token())),
        align.map(Alignment::items_class),
        justify.map(Justify::justify_class),
        medical_device_mode.then_some("medical-device-grid"),
        (context != GridContext::Default).then(|| format!("grid-context-{}", context.token())),
        class,
    ]
}

#[component]
/// CSS grid with a fixed column count and clinical context hooks.
pub fn Grid(
    #[prop(default = 1)] cols: u8,
    #[prop(optional)] gap: Spacing,
    #[prop(optional)] gap_x: Option<Spacing>,
    #[prop(optional)] gap_y: Option<Spacing>,
    #[prop(optional)] align: Option<Alignment>,
    #[prop(optional)] justify: Option<Justify>,
    #[prop(optional)] medical_device_mode: bool,
    #[prop(optional)] context: GridContext,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    if grid_cols_class(cols).is_none() {
        logging::warn!("grid cols {cols} outside 1..=12; falling back to auto flow");
    }
    let class = grid_classes(
        cols,
        gap,
        gap_x,
        gap_y,
        align,
        justify,
        medical_device_mode,
        context,
        class,
    );
    view! {
        <div
            class=class
            role="grid"
            data-grid-context=context.token()
            data-medical-device=bool_token(medical_device_mode)
        >
            {children()}
        </div>
    }
}

fn col_span_class(span: u8) -> Option<&'static str> {
    match span {
        1 => Some("col-span-1"),
        2 => Some("col-span-2"),
        3 => Some("col-span-3"),
        4 => Some("col-span-4"),
        5 => Some("col-span-5"),
        6 => Some("col-span-6"),
        7 => Some("col-span-7"),
        8 => Some("col-span-8"),
        9 => Some("col-span-9"),
        10 => Some("col-span-10"),
        11 => Some("col-span-11"),
        12 => Some("col-span-full"),
        _ => None,
    }
}

fn row_span_class(span: u8) -> Option<&'static str> {
    match span {
        1 => Some("row-span-1"),
        2 => Some("row-span-2"),
        3 => Some("row-span-3"),
        4 => Some("row-span-4"),
        5 => Some("row-span-5"),
        6 => Some("row-span-6"),
        _ => None,
    }
}

fn self_class(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Start => "self-start",
        Alignment::Center => "self-center",
        Alignment::End => "self-end",
        Alignment::Stretch => "self-stretch",
        Alignment::Baseline => "self-baseline",
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn grid_item_classes(
    col_span: Option<u8>,
    row_span: Option<u8>,
    col_start: Option<u8>,
    col_end: Option<u8>,
    row_start: Option<u8>,
    row_end: Option<u8>,
    align_self: Option<Alignment>,
    class: Option<String>,
) -> String {
    crate::classes![
        col_span.and_then(col_span_class),
        row_span.and_then(row_span_class),
        col_start.map(|line| format!("col-start-{line}")),
        col_end.map(|line| format!("col-end-{line}")),
        row_start.map(|line| format!("row-start-{line}")),
        row_end.map(|line| format!("row-end-{line}")),
        align_self.map(self_class),
        class,
    ]
}

#[component]
/// Cell placement inside a [`Grid`].
pub fn GridItem(
    #[prop(optional)] col_span: Option<u8>,
    #[prop(optional)] row_span: Option<u8>,
    #[prop(optional)] col_start: Option<u8>,
    #[prop(optional)] col_end: Option<u8>,
    #[prop(optional)] row_start: Option<u8>,
    #[prop(optional)] row_end: Option<u8>,
    #[prop(optional)] align_self: Option<Alignment>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = grid_item_classes(
        col_span, row_span, col_start, col_end, row_start, row_end, align_self, class,
    );
    view! {
        <div class=class role="gridcell">{children()}</div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Maximum width step for a [`Container`].
pub enum ContainerSize {
    /// Narrow reading column.
    Xs,
    /// Small column.
    Sm,
    /// Medium column.
    Md,
    /// Wide column.
    Lg,
    /// Very wide column.
    Xl,
    /// No width cap.
    Full,
}

impl Default for ContainerSize {
    fn default() -> Self {
        Self::Lg
    }
}

impl ContainerSize {
    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Full => "full",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Xs => "max-w-xl",
            Self::Sm => "max-w-2xl",
            Self::Md => "max-w-4xl",
            Self::Lg => "max-w-6xl",
            Self::Xl => "max-w-7xl",
            Self::Full => "max-w-none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Clinical workflow a container hosts, feeding the shortcut registry.
pub enum ContainerContext {
    /// No particular workflow.
    Default,
    /// Patient demographics and chart.
    PatientInfo,
    /// Medication orders.
    MedicationList,
    /// Vital sign monitoring.
    VitalSigns,
    /// Active emergency surface.
    EmergencyAlert,
    /// Form entry section.
    FormSection,
    /// Dense data grid.
    DataGrid,
}

impl Default for ContainerContext {
    fn default() -> Self {
        Self::Default
    }
}

impl ContainerContext {
    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PatientInfo => "patient-info",
            Self::MedicationList => "medication-list",
            Self::VitalSigns => "vital-signs",
            Self::EmergencyAlert => "emergency-alert",
            Self::FormSection => "form-section",
            Self::DataGrid => "data-grid",
        }
    }

    /// The shortcut table consulted while focus is inside the container.
    pub fn shortcut_context(self) -> ShortcutContext {
        match self {
            Self::PatientInfo => ShortcutContext::PatientData,
            Self::MedicationList => ShortcutContext::MedicationDosage,
            Self::VitalSigns => ShortcutContext::VitalSigns,
            Self::EmergencyAlert => ShortcutContext::EmergencyAlert,
            Self::DataGrid => ShortcutContext::LabValues,
            Self::Default | Self::FormSection => ShortcutContext::Global,
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn container_classes(
    size: ContainerSize,
    padding: Spacing,
    centered: bool,
    fluid: bool,
    scrollable: bool,
    medical_device_mode: bool,
    emergency_mode: bool,
    context: ContainerContext,
    class: Option<String>,
) -> String {
    crate::classes![
        "w-full",
        if fluid { "max-w-none" } else { size.class() },
        centered.then_some("mx-auto"),
        format!("px-{}", padding.token()),
        scrollable.then_some("overflow-auto focus:outline-none"),
        medical_device_mode.then_some("medical-device-mode"),
        emergency_mode.then_some("emergency-mode"),
        emergency_mode.then_some(FOCUS_EMERGENCY),
        (context != ContainerContext::Default)
            .then(|| format!("container-context-{}", context.token())),
        class,
    ]
}

#[component]
/// Width-capped page region. Scrollable containers answer Home, End,
/// PageUp, and PageDown locally; workflow keys route through the shortcut
/// registry for the container's context.
pub fn Container(
    #[prop(optional)] size: ContainerSize,
    #[prop(optional)] padding: Spacing,
    #[prop(default = true)] centered: bool,
    #[prop(optional)] fluid: bool,
    #[prop(optional)] scrollable: bool,
    #[prop(optional)] medical_device_mode: bool,
    #[prop(optional)] emergency_mode: bool,
    #[prop(optional)] context: ContainerContext,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] extra: ExtraAttrs,
    #[prop(optional)] on_shortcut: Option<Callback<ShortcutAction>>,
    children: Children,
) -> impl IntoView {
    let node = create_node_ref::<html::Div>();
    let container_class = container_classes(
        size,
        padding,
        centered,
        fluid,
        scrollable,
        medical_device_mode,
        emergency_mode,
        context,
        class,
    );
    let hint = medical_device_mode.then(|| shortcut_hint(context.shortcut_context()));

    view! {
        <div
            node_ref=node
            class=container_class
            id=extra.id.clone()
            title=extra.title.clone()
            role=extra.role.clone().or_else(|| {
                medical_device_mode.then(|| "region".to_string())
            })
            tabindex=(medical_device_mode && scrollable).then_some("0")
            aria-label=extra.aria_label.clone()
            aria-describedby=extra.aria_describedby.clone()
            data-testid=extra.test_id.clone()
            data-container-context=context.token()
            data-size=size.token()
            on:keydown=move |ev: KeyboardEvent| {
                if dispatch_shortcut(context.shortcut_context(), &ev, on_shortcut) {
                    return;
                }
                if !scrollable {
                    return;
                }
                let Some(div) = node.get() else {
                    return;
                };
                let page = div.client_height();
                match ev.key().as_str() {
                    "Home" => {
                        ev.prevent_default();
                        div.set_scroll_top(0);
                    }
                    "End" => {
                        ev.prevent_default();
                        div.set_scroll_top(div.scroll_height());
                    }
                    "PageUp" => {
                        ev.prevent_default();
                        div.set_scroll_top(div.scroll_top() - page);
                    }
                    "PageDown" => {
                        ev.prevent_default();
                        div.set_scroll_top(div.scroll_top() + page);
                    }
                    _ => {}
                }
            }
        >
            {hint.map(|hint| view! { <span class="sr-only">{hint}</span> })}
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_stack_classes() {
        assert_eq!(
            stack_classes(
                StackDirection::Column,
                false,
                Spacing::default(),
                None,
                Justify::default(),
                false,
                None,
            ),
            "flex flex-col gap-4 items-stretch justify-start flex-nowrap",
        );
    }

    #[test]
    fn row_direction_defaults_to_centered_items() {
        let classes = stack_classes(
            StackDirection::Row,
            false,
            Spacing::Two,
            None,
            Justify::Between,
            true,
            None,
        );
        assert_eq!(
            classes,
            "flex flex-row gap-2 items-center justify-between flex-wrap",
        );
    }

    #[test]
    fn reverse_flips_the_direction_class() {
        let classes = stack_classes(
            StackDirection::Row,
            true,
            Spacing::default(),
            None,
            Justify::default(),
            false,
            None,
        );
        assert!(classes.contains("flex-row-reverse"), "{classes}");
    }

    #[test]
    fn column_span_fractions() {
        let cases = [
            (1, Some("w-1/12")),
            (4, Some("w-1/3")),
            (6, Some("w-1/2")),
            (12, Some("w-full")),
            (0, None),
            (13, None),
        ];
        for (span, expected) in cases {
            assert_eq!(column_span_class(span), expected, "span={span}");
        }
    }

    #[test]
    fn out_of_range_column_span_is_ignored() {
        let classes = column_classes(
            Spacing::default(),
            Alignment::default(),
            Justify::default(),
            Some(40),
            None,
            None,
        );
        assert_eq!(classes, "flex flex-col gap-4 items-stretch justify-start");
    }

    #[test]
    fn grid_carries_context_and_device_hooks() {
        let classes = grid_classes(
            3,
            Spacing::Four,
            None,
            Some(Spacing::Two),
            None,
            None,
            true,
            GridContext::VitalSigns,
            None,
        );
        assert_eq!(
            classes,
            "grid grid-cols-3 gap-4 gap-y-2 medical-device-grid grid-context-vital-signs",
        );
    }

    #[test]
    fn grid_item_spans_and_lines() {
        let classes = grid_item_classes(
            Some(12),
            Some(2),
            Some(1),
            None,
            None,
            None,
            Some(Alignment::Center),
            None,
        );
        assert_eq!(classes, "col-span-full row-span-2 col-start-1 self-center");
    }

    #[test]
    fn default_container_classes() {
        assert_eq!(
            container_classes(
                ContainerSize::default(),
                Spacing::default(),
                true,
                false,
                false,
                false,
                false,
                ContainerContext::default(),
                None,
            ),
            "w-full max-w-6xl mx-auto px-4",
        );
    }

    #[test]
    fn fluid_beats_the_size_cap() {
        let classes = container_classes(
            ContainerSize::Sm,
            Spacing::default(),
            true,
            true,
            false,
            false,
            false,
            ContainerContext::default(),
            None,
        );
        assert!(classes.contains("max-w-none"), "{classes}");
        assert!(!classes.contains("max-w-2xl"), "{classes}");
    }

    #[test]
    fn emergency_container_gains_ring_and_context_class() {
        let classes = container_classes(
            ContainerSize::default(),
            Spacing::default(),
            true,
            false,
            true,
            true,
            true,
            ContainerContext::EmergencyAlert,
            None,
        );
        assert!(classes.contains("overflow-auto"), "{classes}");
        assert!(classes.contains("medical-device-mode"), "{classes}");
        assert!(classes.contains("emergency-mode"), "{classes}");
        assert!(classes.contains(FOCUS_EMERGENCY), "{classes}");
        assert!(classes.contains("container-context-emergency-alert"), "{classes}");
    }

    #[test]
    fn container_contexts_pick_their_shortcut_tables() {
        let cases = [
            (ContainerContext::Default, ShortcutContext::Global),
            (ContainerContext::PatientInfo, ShortcutContext::PatientData),
            (
                ContainerContext::MedicationList,
                ShortcutContext::MedicationDosage,
            ),
            (ContainerContext::VitalSigns, ShortcutContext::VitalSigns),
            (
                ContainerContext::EmergencyAlert,
                ShortcutContext::EmergencyAlert,
            ),
            (ContainerContext::FormSection, ShortcutContext::Global),
            (ContainerContext::DataGrid, ShortcutContext::LabValues),
        ];
        for (context, expected) in cases {
            assert_eq!(context.shortcut_context(), expected, "context={context:?}");
        }
    }
}
