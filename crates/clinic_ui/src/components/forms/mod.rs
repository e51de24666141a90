//! Form controls: text entry, textarea, checkbox, radio group, and select.
//!
//! The shared class builders here keep every field rendering the same sizing
//! and focus treatment, while [`validation`] owns the clinical format checks
//! that medical fields run on input.

use std::sync::atomic::{AtomicU64, Ordering};

use super::*;

mod choices;
mod field;
mod inputs;
mod validation;

pub use choices::{Checkbox, RadioGroup, RadioOption, Select, SelectGroup, SelectOption};
pub use field::{FieldLayout, FieldStatus, FormField};
pub use inputs::{InputKind, ResizeMode, TextArea, TextAreaPurpose, TextInput};
pub use validation::{MedicalValidation, ValidationKind, ValueRange};

static NEXT_FIELD_ID: AtomicU64 = AtomicU64::new(0);

/// Generates a document-unique element id for label wiring.
pub(crate) fn next_field_id(prefix: &str) -> String {
    let n = NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{n}")
}

fn form_variant_class(variant: FormVariant) -> &'static str {
    match variant {
        FormVariant::Default => "bg-white border border-neutral-300",
        FormVariant::Filled => "bg-neutral-50 border border-transparent",
        FormVariant::Outlined => "bg-white border-2 border-neutral-300",
        FormVariant::Flat => "bg-white border-0",
    }
}

/// Class list shared by text inputs, textareas, and the select trigger.
pub(crate) fn input_classes(
    variant: FormVariant,
    size: ComponentSize,
    error: bool,
    medical: bool,
    medical_device_mode: bool,
    full_width: bool,
    class: Option<String>,
) -> String {
    let sizing = size.classes();
    crate::classes![
        "font-normal",
        if full_width { "w-full" } else { "w-auto" },
        "transition-all duration-200 ease-in-out",
        if medical_device_mode {
            FOCUS_MEDICAL_DEVICE
        } else {
            FOCUS_BASE
        },
        "focus:shadow-md focus:z-10",
        "disabled:cursor-not-allowed disabled:opacity-60",
        sizing.height,
        sizing.padding,
        sizing.text,
        sizing.radius,
        form_variant_class(variant),
        error.then_some("border-danger-500 text-danger-900 placeholder-danger-300"),
        medical.then_some("ring-1 ring-primary-200"),
        class,
    ]
}

/// Label treatment shared by the labelled form fields.
pub(crate) fn field_label_classes(error: bool, medical: bool) -> String {
    crate::classes![
        "block text-sm mb-1",
        if medical { "font-semibold" } else { "font-medium" },
        if error { "text-danger-600" } else { "text-neutral-800" },
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_input_classes() {
        let merged = input_classes(
            FormVariant::Default,
            ComponentSize::Md,
            false,
            false,
            false,
            true,
            None,
        );
        assert_eq!(
            merged,
            "font-normal w-full transition-all duration-200 ease-in-out \
             focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 \
             focus:shadow-md focus:z-10 disabled:cursor-not-allowed disabled:opacity-60 \
             h-10 px-4 py-2 text-base rounded-md bg-white border border-neutral-300",
        );
    }

    #[test]
    fn input_state_layers() {
        let merged = input_classes(
            FormVariant::Outlined,
            ComponentSize::Sm,
            true,
            true,
            true,
            false,
            Some("data-entry".to_string()),
        );
        assert!(merged.contains("w-auto"), "merged={merged:?}");
        assert!(merged.contains("border-2"), "merged={merged:?}");
        assert!(merged.contains("border-danger-500"), "merged={merged:?}");
        assert!(merged.contains("ring-1 ring-primary-200"), "merged={merged:?}");
        assert!(
            merged.contains("focus-visible:ring-4"),
            "merged={merged:?}"
        );
        assert!(merged.ends_with("data-entry"), "merged={merged:?}");
        assert!(!merged.contains("w-full"), "merged={merged:?}");
    }

    #[test]
    fn flat_variant_drops_the_border() {
        let merged = input_classes(
            FormVariant::Flat,
            ComponentSize::Md,
            false,
            false,
            false,
            true,
            None,
        );
        assert!(merged.contains("border-0"), "merged={merged:?}");
        assert!(!merged.contains("border-neutral-300"), "merged={merged:?}");
    }

    #[test]
    fn label_classes_by_state() {
        let cases = [
            (false, false, "block text-sm mb-1 font-medium text-neutral-800"),
            (true, false, "block text-sm mb-1 font-medium text-danger-600"),
            (false, true, "block text-sm mb-1 font-semibold text-neutral-800"),
            (true, true, "block text-sm mb-1 font-semibold text-danger-600"),
        ];
        for (error, medical, expected) in cases {
            assert_eq!(
                field_label_classes(error, medical),
                expected,
                "error={error:?} medical={medical:?}",
            );
        }
    }

    #[test]
    fn field_ids_are_prefixed_and_unique() {
        let first = next_field_id("input");
        let second = next_field_id("input");
        assert!(first.starts_with("input-"), "first={first:?}");
        assert!(second.starts_with("input-"), "second={second:?}");
        assert_ne!(first, second);
    }
}
