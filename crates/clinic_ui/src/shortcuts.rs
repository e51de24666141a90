//! Declarative clinical workflow keyboard shortcuts.
//!
//! Shortcut policy lives in one static `(context, combo) → action` table
//! interpreted by a single dispatcher, instead of per-component key
//! branching. Components translate their purpose into a
//! [`ShortcutContext`], route `keydown` through [`dispatch_shortcut`], and
//! receive the matched [`ShortcutAction`] on their callback.

use leptos::ev::KeyboardEvent;
use leptos::{Callable, Callback};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Workflow scope a shortcut applies in.
pub enum ShortcutContext {
    /// Form-wide shortcuts available in every scope.
    Global,
    /// Vital-signs capture fields.
    VitalSigns,
    /// Medication dosage entry.
    MedicationDosage,
    /// Patient demographic and identity fields.
    PatientData,
    /// Laboratory value entry.
    LabValues,
    /// Emergency alert surfaces.
    EmergencyAlert,
    /// Medical-device field editing.
    DeviceControl,
}

impl Default for ShortcutContext {
    fn default() -> Self {
        Self::Global
    }
}

impl ShortcutContext {
    /// Every context, in table order.
    pub const ALL: [Self; 7] = [
        Self::Global,
        Self::VitalSigns,
        Self::MedicationDosage,
        Self::PatientData,
        Self::LabValues,
        Self::EmergencyAlert,
        Self::DeviceControl,
    ];

    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::VitalSigns => "vital-signs",
            Self::MedicationDosage => "medication-dosage",
            Self::PatientData => "patient-data",
            Self::LabValues => "lab-values",
            Self::EmergencyAlert => "emergency-alert",
            Self::DeviceControl => "device-control",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Action identifier a shortcut resolves to; the host decides what it means.
pub enum ShortcutAction {
    /// Persist the surrounding form.
    SaveForm,
    /// Start the emergency protocol.
    EmergencyProtocol,
    /// Show reference ranges for the measured vital.
    ShowReferenceRanges,
    /// Show the measurement history.
    ShowMeasurementHistory,
    /// Open the dosage calculator.
    OpenDosageCalculator,
    /// Check drug interactions.
    CheckInteractions,
    /// Open patient lookup.
    OpenPatientLookup,
    /// Verify patient identity.
    VerifyPatientIdentity,
    /// Show normal ranges for the lab value.
    ShowNormalRanges,
    /// Compare with previous results.
    CompareResults,
    /// Acknowledge the active alert.
    AcknowledgeAlert,
    /// Clear the focused field.
    ClearField,
    /// Refocus and reselect the field.
    RefocusField,
}

impl ShortcutAction {
    /// Short description used in shortcut hints.
    pub fn description(self) -> &'static str {
        match self {
            Self::SaveForm => "save the form",
            Self::EmergencyProtocol => "start the emergency protocol",
            Self::ShowReferenceRanges => "show reference ranges",
            Self::ShowMeasurementHistory => "show measurement history",
            Self::OpenDosageCalculator => "open the dosage calculator",
            Self::CheckInteractions => "check drug interactions",
            Self::OpenPatientLookup => "open patient lookup",
            Self::VerifyPatientIdentity => "verify patient identity",
            Self::ShowNormalRanges => "show normal ranges",
            Self::CompareResults => "compare with previous results",
            Self::AcknowledgeAlert => "acknowledge the alert",
            Self::ClearField => "clear the field",
            Self::RefocusField => "refocus the field",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A key chord a table row matches against.
pub struct KeyCombo {
    /// Whether Ctrl must be held.
    pub ctrl: bool,
    /// The `KeyboardEvent.key` value; single letters match
    /// case-insensitively.
    pub key: &'static str,
}

impl KeyCombo {
    const fn ctrl(key: &'static str) -> Self {
        Self { ctrl: true, key }
    }

    const fn plain(key: &'static str) -> Self {
        Self { ctrl: false, key }
    }

    /// Whether the pressed chord matches this combo. Alt- and Meta-modified
    /// presses never match, so browser and OS chords stay untouched.
    pub fn matches(self, press: &KeyPress) -> bool {
        if press.alt || press.meta {
            return false;
        }
        if self.ctrl != press.ctrl {
            return false;
        }
        if self.key.len() == 1 {
            press.key.eq_ignore_ascii_case(self.key)
        } else {
            press.key == self.key
        }
    }

    /// Human-readable label, e.g. `Ctrl+R` or `F5`.
    pub fn label(self) -> String {
        if self.ctrl {
            format!("Ctrl+{}", self.key.to_ascii_uppercase())
        } else {
            self.key.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The parts of a keyboard event the shortcut table inspects.
pub struct KeyPress {
    /// Ctrl held.
    pub ctrl: bool,
    /// Alt held.
    pub alt: bool,
    /// Meta held.
    pub meta: bool,
    /// The `KeyboardEvent.key` value.
    pub key: String,
}

impl KeyPress {
    /// Captures the relevant parts of a DOM keyboard event.
    pub fn from_event(ev: &KeyboardEvent) -> Self {
        Self {
            ctrl: ev.ctrl_key(),
            alt: ev.alt_key(),
            meta: ev.meta_key(),
            key: ev.key(),
        }
    }
}

/// The complete shortcut policy: `(context, combo) → action` rows.
pub const SHORTCUTS: &[(ShortcutContext, KeyCombo, ShortcutAction)] = &[
    (
        ShortcutContext::Global,
        KeyCombo::ctrl("s"),
        ShortcutAction::SaveForm,
    ),
    (
        ShortcutContext::Global,
        KeyCombo::ctrl("e"),
        ShortcutAction::EmergencyProtocol,
    ),
    (
        ShortcutContext::VitalSigns,
        KeyCombo::ctrl("r"),
        ShortcutAction::ShowReferenceRanges,
    ),
    (
        ShortcutContext::VitalSigns,
        KeyCombo::ctrl("h"),
        ShortcutAction::ShowMeasurementHistory,
    ),
    (
        ShortcutContext::MedicationDosage,
        KeyCombo::ctrl("d"),
        ShortcutAction::OpenDosageCalculator,
    ),
    (
        ShortcutContext::MedicationDosage,
        KeyCombo::ctrl("i"),
        ShortcutAction::CheckInteractions,
    ),
    (
        ShortcutContext::PatientData,
        KeyCombo::ctrl("p"),
        ShortcutAction::OpenPatientLookup,
    ),
    (
        ShortcutContext::PatientData,
        KeyCombo::ctrl("v"),
        ShortcutAction::VerifyPatientIdentity,
    ),
    (
        ShortcutContext::LabValues,
        KeyCombo::ctrl("n"),
        ShortcutAction::ShowNormalRanges,
    ),
    (
        ShortcutContext::LabValues,
        KeyCombo::ctrl("c"),
        ShortcutAction::CompareResults,
    ),
    (
        ShortcutContext::EmergencyAlert,
        KeyCombo::plain("F1"),
        ShortcutAction::AcknowledgeAlert,
    ),
    (
        ShortcutContext::DeviceControl,
        KeyCombo::plain("Escape"),
        ShortcutAction::ClearField,
    ),
    (
        ShortcutContext::DeviceControl,
        KeyCombo::plain("F5"),
        ShortcutAction::RefocusField,
    ),
];

fn context_action(context: ShortcutContext, press: &KeyPress) -> Option<ShortcutAction> {
    SHORTCUTS
        .iter()
        .find(|(row_context, combo, _)| *row_context == context && combo.matches(press))
        .map(|(_, _, action)| *action)
}

/// Resolves a pressed chord against the table: the specific context's rows
/// first, then the global rows.
pub fn resolve_shortcut(context: ShortcutContext, press: &KeyPress) -> Option<ShortcutAction> {
    context_action(context, press).or_else(|| {
        if context == ShortcutContext::Global {
            None
        } else {
            context_action(ShortcutContext::Global, press)
        }
    })
}

/// The one shared dispatcher: resolves the event, consumes it, and fires the
/// callback. Returns whether the event was consumed.
pub fn dispatch_shortcut(
    context: ShortcutContext,
    ev: &KeyboardEvent,
    on_shortcut: Option<Callback<ShortcutAction>>,
) -> bool {
    let Some(on_shortcut) = on_shortcut else {
        return false;
    };
    let Some(action) = resolve_shortcut(context, &KeyPress::from_event(ev)) else {
        return false;
    };
    ev.prevent_default();
    ev.stop_propagation();
    on_shortcut.call(action);
    true
}

/// Digit-row quick selection (keys 1–9) used by radio groups in
/// medical-device mode; returns a zero-based option index.
pub fn quick_select_index(press: &KeyPress) -> Option<usize> {
    if press.ctrl || press.alt || press.meta {
        return None;
    }
    match press.key.as_str() {
        "1" => Some(0),
        "2" => Some(1),
        "3" => Some(2),
        "4" => Some(3),
        "5" => Some(4),
        "6" => Some(5),
        "7" => Some(6),
        "8" => Some(7),
        "9" => Some(8),
        _ => None,
    }
}

/// Hint line listing the combos available in a context (specific rows first,
/// then global), for instruction text and accessible descriptions.
pub fn shortcut_hint(context: ShortcutContext) -> String {
    let mut parts = Vec::new();
    for (row_context, combo, action) in SHORTCUTS {
        if *row_context == context {
            parts.push(format!("{} to {}", combo.label(), action.description()));
        }
    }
    if context != ShortcutContext::Global {
        for (row_context, combo, action) in SHORTCUTS {
            if *row_context == ShortcutContext::Global {
                parts.push(format!("{} to {}", combo.label(), action.description()));
            }
        }
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn press(ctrl: bool, key: &str) -> KeyPress {
        KeyPress {
            ctrl,
            alt: false,
            meta: false,
            key: key.to_string(),
        }
    }

    #[test]
    fn every_table_row_resolves_in_its_own_context() {
        for (context, combo, action) in SHORTCUTS {
            let pressed = press(combo.ctrl, combo.key);
            assert_eq!(
                resolve_shortcut(*context, &pressed),
                Some(*action),
                "context={context:?} combo={combo:?}"
            );
        }
    }

    #[test]
    fn context_rows_do_not_leak_across_contexts() {
        let ranges = press(true, "r");
        assert_eq!(
            resolve_shortcut(ShortcutContext::VitalSigns, &ranges),
            Some(ShortcutAction::ShowReferenceRanges)
        );
        assert_eq!(resolve_shortcut(ShortcutContext::LabValues, &ranges), None);
        assert_eq!(resolve_shortcut(ShortcutContext::Global, &ranges), None);
    }

    #[test]
    fn global_rows_apply_in_every_context() {
        let save = press(true, "s");
        for context in ShortcutContext::ALL {
            assert_eq!(
                resolve_shortcut(context, &save),
                Some(ShortcutAction::SaveForm),
                "context={context:?}"
            );
        }
    }

    #[test]
    fn modified_presses_never_match() {
        let mut alt_save = press(true, "s");
        alt_save.alt = true;
        assert_eq!(resolve_shortcut(ShortcutContext::Global, &alt_save), None);

        let mut meta_save = press(true, "s");
        meta_save.meta = true;
        assert_eq!(resolve_shortcut(ShortcutContext::Global, &meta_save), None);

        // Plain letters without Ctrl stay typing, not shortcuts.
        assert_eq!(resolve_shortcut(ShortcutContext::VitalSigns, &press(false, "r")), None);
    }

    #[test]
    fn letter_combos_match_case_insensitively() {
        assert_eq!(
            resolve_shortcut(ShortcutContext::VitalSigns, &press(true, "R")),
            Some(ShortcutAction::ShowReferenceRanges)
        );
        // Named keys match exactly.
        let escape = press(false, "escape");
        assert_eq!(resolve_shortcut(ShortcutContext::DeviceControl, &escape), None);
        assert_eq!(
            resolve_shortcut(ShortcutContext::DeviceControl, &press(false, "Escape")),
            Some(ShortcutAction::ClearField)
        );
    }

    #[test]
    fn quick_select_maps_digits_to_indices() {
        assert_eq!(quick_select_index(&press(false, "1")), Some(0));
        assert_eq!(quick_select_index(&press(false, "9")), Some(8));
        assert_eq!(quick_select_index(&press(false, "0")), None);
        assert_eq!(quick_select_index(&press(true, "1")), None);
    }

    #[test]
    fn hints_list_context_then_global_rows() {
        let hint = shortcut_hint(ShortcutContext::VitalSigns);
        assert_eq!(
            hint,
            "Ctrl+R to show reference ranges, Ctrl+H to show measurement history, \
             Ctrl+S to save the form, Ctrl+E to start the emergency protocol"
        );
        assert_eq!(
            shortcut_hint(ShortcutContext::Global),
            "Ctrl+S to save the form, Ctrl+E to start the emergency protocol"
        );
    }
}
