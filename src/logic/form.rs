//! Patient Indicator Form
//!
//! Numeric coercion and inclusive range validation for the 13 medical
//! indicator fields. The gate runs before any network activity and
//! rejects the whole form on the first failing field.

use crate::logic::backend::client::PredictionRequest;

pub const FIELD_COUNT: usize = 13;

/// One entry of the indicator catalog: wire name, human label and the
/// inclusive range accepted by the form.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

/// The indicator catalog, in submission order.
pub const FIELDS: [FieldSpec; FIELD_COUNT] = [
    FieldSpec { name: "age", label: "Age in years", min: 18.0, max: 120.0 },
    FieldSpec { name: "sex", label: "Sex (0 female, 1 male)", min: 0.0, max: 1.0 },
    FieldSpec { name: "cp", label: "Chest pain type (0-3)", min: 0.0, max: 3.0 },
    FieldSpec { name: "trestbps", label: "Resting blood pressure in mm Hg", min: 80.0, max: 250.0 },
    FieldSpec { name: "chol", label: "Serum cholesterol in mg/dL", min: 100.0, max: 600.0 },
    FieldSpec { name: "fbs", label: "Fasting blood sugar > 120 mg/dL (0 no, 1 yes)", min: 0.0, max: 1.0 },
    FieldSpec { name: "restecg", label: "Resting ECG result (0-2)", min: 0.0, max: 2.0 },
    FieldSpec { name: "thalach", label: "Maximum heart rate achieved", min: 60.0, max: 220.0 },
    FieldSpec { name: "exang", label: "Exercise induced angina (0 no, 1 yes)", min: 0.0, max: 1.0 },
    FieldSpec { name: "oldpeak", label: "ST depression induced by exercise", min: 0.0, max: 10.0 },
    FieldSpec { name: "slope", label: "Slope of peak exercise ST segment (1-3)", min: 1.0, max: 3.0 },
    FieldSpec { name: "ca", label: "Major vessels colored by fluoroscopy (0-3)", min: 0.0, max: 3.0 },
    FieldSpec { name: "thal", label: "Thalassemia (0 normal, 1 fixed, 2 reversible)", min: 0.0, max: 2.0 },
];

/// Validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NotANumber { field: &'static str },
    OutOfRange { field: &'static str, min: f64, max: f64 },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber { field } => {
                write!(f, "Please enter a valid number for {}", field)
            }
            Self::OutOfRange { field, min, max } => {
                write!(
                    f,
                    "Please enter a valid value for {} ({}-{})",
                    field,
                    fmt_bound(*min),
                    fmt_bound(*max)
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

// "18" rather than "18.0" in user-facing range hints
fn fmt_bound(bound: f64) -> String {
    if bound.fract() == 0.0 {
        format!("{}", bound as i64)
    } else {
        format!("{}", bound)
    }
}

/// Raw form values, one per catalog entry, kept as entered until
/// submission. Constructed fresh per assessment and discarded after.
#[derive(Debug, Clone, Default)]
pub struct PatientForm {
    entries: [String; FIELD_COUNT],
}

impl PatientForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the raw value for the field at `index` (submission order)
    pub fn set(&mut self, index: usize, value: &str) {
        self.entries[index] = value.trim().to_string();
    }

    /// Coerce every field to a number and check it against its range.
    /// The first failure rejects the whole form; nothing is submitted.
    pub fn parse(&self) -> Result<PredictionRequest, ValidationError> {
        let mut values = [0.0f64; FIELD_COUNT];

        for (i, spec) in FIELDS.iter().enumerate() {
            let raw = self.entries[i].trim();
            let value: f64 = raw
                .parse()
                .map_err(|_| ValidationError::NotANumber { field: spec.name })?;
            if !value.is_finite() {
                return Err(ValidationError::NotANumber { field: spec.name });
            }
            if value < spec.min || value > spec.max {
                return Err(ValidationError::OutOfRange {
                    field: spec.name,
                    min: spec.min,
                    max: spec.max,
                });
            }
            values[i] = value;
        }

        Ok(build_request(&values))
    }
}

// Fractional input to integer-valued indicators is truncated.
fn build_request(values: &[f64; FIELD_COUNT]) -> PredictionRequest {
    PredictionRequest {
        age: values[0] as u32,
        sex: values[1] as u8,
        cp: values[2] as u8,
        trestbps: values[3] as u32,
        chol: values[4] as u32,
        fbs: values[5] as u8,
        restecg: values[6] as u8,
        thalach: values[7] as u32,
        exang: values[8] as u8,
        oldpeak: values[9],
        slope: values[10] as u8,
        ca: values[11] as u8,
        thal: values[12] as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> PatientForm {
        let mut form = PatientForm::new();
        for (i, value) in [
            "52", "1", "0", "130", "240", "0", "1", "150", "0", "1.0", "2", "0", "1",
        ]
        .iter()
        .enumerate()
        {
            form.set(i, value);
        }
        form
    }

    #[test]
    fn valid_form_parses() {
        let request = valid_form().parse().unwrap();
        assert_eq!(request.age, 52);
        assert_eq!(request.trestbps, 130);
        assert_eq!(request.oldpeak, 1.0);
        assert_eq!(request.slope, 2);
    }

    #[test]
    fn every_field_rejects_below_min_and_above_max() {
        for (i, spec) in FIELDS.iter().enumerate() {
            let mut form = valid_form();
            form.set(i, &(spec.min - 1.0).to_string());
            assert_eq!(
                form.parse(),
                Err(ValidationError::OutOfRange {
                    field: spec.name,
                    min: spec.min,
                    max: spec.max,
                }),
                "{} should reject values below {}",
                spec.name,
                spec.min
            );

            let mut form = valid_form();
            form.set(i, &(spec.max + 1.0).to_string());
            assert!(
                matches!(form.parse(), Err(ValidationError::OutOfRange { field, .. }) if field == spec.name),
                "{} should reject values above {}",
                spec.name,
                spec.max
            );
        }
    }

    #[test]
    fn every_field_accepts_its_exact_bounds() {
        for (i, spec) in FIELDS.iter().enumerate() {
            let mut form = valid_form();
            form.set(i, &spec.min.to_string());
            assert!(form.parse().is_ok(), "{} should accept min {}", spec.name, spec.min);

            let mut form = valid_form();
            form.set(i, &spec.max.to_string());
            assert!(form.parse().is_ok(), "{} should accept max {}", spec.name, spec.max);
        }
    }

    #[test]
    fn non_numeric_value_blocks_the_form() {
        let mut form = valid_form();
        form.set(4, "plenty");
        assert_eq!(form.parse(), Err(ValidationError::NotANumber { field: "chol" }));

        let mut form = valid_form();
        form.set(0, "");
        assert_eq!(form.parse(), Err(ValidationError::NotANumber { field: "age" }));

        // "NaN" parses as a float but must not pass the range gate
        let mut form = valid_form();
        form.set(9, "NaN");
        assert_eq!(form.parse(), Err(ValidationError::NotANumber { field: "oldpeak" }));
    }

    #[test]
    fn first_failing_field_wins() {
        let mut form = valid_form();
        form.set(1, "7");
        form.set(12, "9");
        assert!(
            matches!(form.parse(), Err(ValidationError::OutOfRange { field: "sex", .. })),
            "the earliest field in submission order should be reported"
        );
    }

    #[test]
    fn integer_fields_truncate_fractional_input() {
        let mut form = valid_form();
        form.set(0, "52.9");
        let request = form.parse().unwrap();
        assert_eq!(request.age, 52);
    }

    #[test]
    fn range_messages_render_integer_bounds_without_decimals() {
        let error = ValidationError::OutOfRange { field: "age", min: 18.0, max: 120.0 };
        assert_eq!(error.to_string(), "Please enter a valid value for age (18-120)");
    }
}
