//! Clinical format validation for text fields.
//!
//! Validators are pure string checks returning every failure message for a
//! value, so components can render them and tests can pin the exact texts
//! shown to clinicians.

#[derive(Debug, Clone, Copy, PartialEq)]
/// Inclusive numeric bounds for a measured value.
pub struct ValueRange {
    /// Lowest acceptable value.
    pub min: f64,
    /// Highest acceptable value.
    pub max: f64,
}

impl ValueRange {
    /// Builds a range, swapping the bounds if given out of order.
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Whether the value sits inside the bounds.
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Format family a medical field's text must satisfy.
pub enum ValidationKind {
    /// Two uppercase letters followed by six to eight digits.
    PatientId,
    /// Uppercase code of letters, digits, and hyphen groups.
    MedicationCode,
    /// Amount with a dosage unit.
    Dosage,
    /// Numeric vital sign reading.
    VitalReading,
    /// Numeric laboratory value.
    LabValue,
}

impl ValidationKind {
    /// Kebab-case token form.
    pub fn token(self) -> &'static str {
        match self {
            Self::PatientId => "patient-id",
            Self::MedicationCode => "medication-code",
            Self::Dosage => "dosage",
            Self::VitalReading => "vital-reading",
            Self::LabValue => "lab-value",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Validation contract attached to a medical text field.
pub struct MedicalValidation {
    /// Format family to enforce.
    pub kind: ValidationKind,
    /// Acceptable bounds for the numeric kinds.
    pub range: Option<ValueRange>,
    /// Whether an empty value is itself a failure.
    pub required: bool,
}

impl MedicalValidation {
    /// Required field of the given kind, without bounds.
    pub fn required(kind: ValidationKind) -> Self {
        Self {
            kind,
            range: None,
            required: true,
        }
    }

    /// Optional field of the given kind.
    pub fn optional(kind: ValidationKind) -> Self {
        Self {
            kind,
            range: None,
            required: false,
        }
    }

    /// Attaches numeric bounds.
    pub fn with_range(mut self, range: ValueRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Every failure message for the value; empty when it passes.
    pub fn validate(&self, value: &str) -> Vec<String> {
        let mut errors = Vec::new();
        let value = value.trim();
        if value.is_empty() {
            if self.required {
                errors.push("This medical field is required".to_string());
            }
            return errors;
        }
        match self.kind {
            ValidationKind::PatientId => {
                if !patient_id_ok(value) {
                    errors.push(
                        "Patient ID format: 2 letters followed by 6-8 digits (e.g., AB123456)"
                            .to_string(),
                    );
                }
            }
            ValidationKind::MedicationCode => {
                if !medication_code_ok(value) {
                    errors.push(
                        "Medication code format: 4-12 uppercase letters, digits, or hyphens (e.g., AMOX-500)"
                            .to_string(),
                    );
                }
            }
            ValidationKind::Dosage => {
                if !dosage_ok(value) {
                    errors.push(
                        "Enter dosage in format: number mg/ml/units (e.g., 10 mg)".to_string(),
                    );
                }
            }
            ValidationKind::VitalReading => match value.parse::<f64>() {
                Ok(reading) if reading.is_finite() => self.check_range(reading, &mut errors),
                _ => errors.push("Must be a valid numeric vital sign reading".to_string()),
            },
            ValidationKind::LabValue => match value.parse::<f64>() {
                Ok(reading) if reading.is_finite() => self.check_range(reading, &mut errors),
                _ => errors.push("Must be a valid numeric lab value".to_string()),
            },
        }
        errors
    }

    /// Whether the value passes every check.
    pub fn is_valid(&self, value: &str) -> bool {
        self.validate(value).is_empty()
    }

    fn check_range(&self, reading: f64, errors: &mut Vec<String>) {
        if let Some(range) = self.range {
            if !range.contains(reading) {
                errors.push(format!(
                    "Value must be between {} and {}",
                    range.min, range.max
                ));
            }
        }
    }
}

fn patient_id_ok(value: &str) -> bool {
    let bytes = value.as_bytes();
    if !(8..=10).contains(&bytes.len()) {
        return false;
    }
    bytes[..2].iter().all(|byte| byte.is_ascii_uppercase())
        && bytes[2..].iter().all(|byte| byte.is_ascii_digit())
}

fn medication_code_ok(value: &str) -> bool {
    (4..=12).contains(&value.len())
        && !value.starts_with('-')
        && !value.ends_with('-')
        && value
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
}

fn dosage_ok(value: &str) -> bool {
    let value = value.to_ascii_lowercase();
    let Some(unit_start) = value.find(|c: char| c.is_ascii_alphabetic()) else {
        return false;
    };
    let (amount, unit) = value.split_at(unit_start);
    if !matches!(unit.trim(), "mg" | "ml" | "unit" | "units") {
        return false;
    }
    dosage_amount_ok(amount.trim_end())
}

fn dosage_amount_ok(amount: &str) -> bool {
    if amount.is_empty() {
        return false;
    }
    match amount.split_once('.') {
        None => amount.bytes().all(|byte| byte.is_ascii_digit()),
        Some((whole, frac)) => {
            !whole.is_empty()
                && (1..=2).contains(&frac.len())
                && whole.bytes().all(|byte| byte.is_ascii_digit())
                && frac.bytes().all(|byte| byte.is_ascii_digit())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn patient_id_accepts_two_letters_then_digits() {
        let validation = MedicalValidation::required(ValidationKind::PatientId);
        for ok in ["AB123456", "ZZ1234567", "MR12345678"] {
            assert_eq!(validation.validate(ok), Vec::<String>::new(), "value={ok:?}");
        }
        for bad in ["ab123456", "A1234567", "AB12345", "AB123456789", "AB12E456"] {
            assert_eq!(
                validation.validate(bad),
                vec!["Patient ID format: 2 letters followed by 6-8 digits (e.g., AB123456)"],
                "value={bad:?}",
            );
        }
    }

    #[test]
    fn medication_code_rules() {
        let validation = MedicalValidation::optional(ValidationKind::MedicationCode);
        for ok in ["AMOX-500", "IBU200", "X9-Y8-Z7"] {
            assert!(validation.is_valid(ok), "value={ok:?}");
        }
        for bad in ["amox-500", "AB", "-AMOX", "AMOX-", "TOO-LONG-CODE-999"] {
            assert!(!validation.is_valid(bad), "value={bad:?}");
        }
    }

    #[test]
    fn dosage_accepts_amount_and_unit() {
        let validation = MedicalValidation::required(ValidationKind::Dosage);
        for ok in ["10 mg", "2.5ml", "3 units", "1 unit", "0.25 MG"] {
            assert_eq!(validation.validate(ok), Vec::<String>::new(), "value={ok:?}");
        }
        for bad in ["mg", "10", "10 mgg", "1.234 mg", ".5 mg", "10 tablets"] {
            assert_eq!(
                validation.validate(bad),
                vec!["Enter dosage in format: number mg/ml/units (e.g., 10 mg)"],
                "value={bad:?}",
            );
        }
    }

    #[test]
    fn vital_reading_checks_numeric_then_range() {
        let validation = MedicalValidation::required(ValidationKind::VitalReading)
            .with_range(ValueRange::new(36.1, 38.0));
        assert!(validation.is_valid("37.2"));
        assert_eq!(
            validation.validate("abc"),
            vec!["Must be a valid numeric vital sign reading"],
        );
        assert_eq!(
            validation.validate("39.4"),
            vec!["Value must be between 36.1 and 38"],
        );
        assert_eq!(validation.validate("inf").len(), 1);
    }

    #[test]
    fn lab_value_message_differs_from_vitals() {
        let validation = MedicalValidation::optional(ValidationKind::LabValue);
        assert_eq!(
            validation.validate("positive"),
            vec!["Must be a valid numeric lab value"],
        );
        assert!(validation.is_valid("4.5"));
    }

    #[test]
    fn required_and_empty_values() {
        let required = MedicalValidation::required(ValidationKind::PatientId);
        assert_eq!(
            required.validate("   "),
            vec!["This medical field is required"],
        );
        let optional = MedicalValidation::optional(ValidationKind::PatientId);
        assert_eq!(optional.validate(""), Vec::<String>::new());
    }

    #[test]
    fn range_swaps_inverted_bounds() {
        let range = ValueRange::new(100.0, 60.0);
        assert_eq!(range.min, 60.0);
        assert_eq!(range.max, 100.0);
        assert!(range.contains(72.0));
        assert!(!range.contains(40.0));
    }
}
