//! Field-bag validation with fused normalization
//!
//! Validators take a JSON object (the field-bag) and produce either a
//! normalized draft/patch or a `Validation` error carrying every failing
//! field's message in input order. Three bag states are distinguished
//! everywhere: key absent, key present and null, key present with a value.
//!
//! Create-mode treats null optionals as absent (defaults are applied later,
//! by the repository). Update-mode keeps the null (it will null out the
//! column) and additionally requires at least one recognized key before any
//! per-field checks run. String normalization (trim, gender lower-casing)
//! happens in the same pass; the drafts/patches hold normalized values.

use chrono::NaiveDate;
use serde_json::Value;

use crate::errors::{EvError, Result};
use crate::model::{
    ConceptoDraft, ConceptoPatch, ExpenseDraft, ExpensePatch, Gender, GrupoDraft, GrupoPatch,
    GuestDraft, GuestPatch,
};

/// A JSON object used as the validator input
pub type FieldBag = serde_json::Map<String, Value>;

const GUEST_FIELDS: [&str; 7] = [
    "first_name",
    "last_name",
    "gender",
    "family",
    "guest_count",
    "expiration_date",
    "confirmation",
];

const EXPENSE_FIELDS: [&str; 5] = ["descripcion", "detalle", "responsable", "monto", "id_concept"];

const GRUPO_FIELDS: [&str; 1] = ["nombre"];

const CONCEPTO_FIELDS: [&str; 2] = ["nombre", "subtotal"];

/// Tri-state view of a bag key
enum Field<'a> {
    Absent,
    Null,
    Present(&'a Value),
}

fn field<'a>(bag: &'a FieldBag, name: &str) -> Field<'a> {
    match bag.get(name) {
        None => Field::Absent,
        Some(Value::Null) => Field::Null,
        Some(value) => Field::Present(value),
    }
}

fn no_recognized_fields(bag: &FieldBag, recognized: &[&str]) -> bool {
    !recognized.iter().any(|name| bag.contains_key(*name))
}

fn empty_update_error() -> EvError {
    EvError::validation(vec![
        "At least one valid field must be provided for update".to_string(),
    ])
}

fn validation_failed(errors: Vec<String>) -> EvError {
    tracing::debug!(?errors, "validation failed");
    EvError::validation(errors)
}

// ---- per-type value parsers (push a message on failure, return None) ----

/// Required string: non-empty after trimming, bounded length. The length
/// check counts trimmed characters.
fn parse_required_string(
    value: Option<&Value>,
    name: &str,
    max: usize,
    required_msg: String,
    errors: &mut Vec<String>,
) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => {
            let trimmed = s.trim();
            if trimmed.chars().count() > max {
                errors.push(format!("{} must not exceed {} characters", name, max));
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        _ => {
            errors.push(required_msg);
            None
        }
    }
}

/// Optional string: any string up to the length ceiling, trimmed on success
fn parse_optional_string(
    value: &Value,
    name: &str,
    max: usize,
    errors: &mut Vec<String>,
) -> Option<String> {
    match value {
        Value::String(s) => {
            if s.chars().count() > max {
                errors.push(format!("{} must not exceed {} characters", name, max));
                None
            } else {
                Some(s.trim().to_string())
            }
        }
        _ => {
            errors.push(format!("{} must be a string if provided", name));
            None
        }
    }
}

fn parse_gender(value: &Value, errors: &mut Vec<String>) -> Option<Gender> {
    match value {
        Value::String(s) if !s.trim().is_empty() => match Gender::parse(s) {
            Some(gender) => Some(gender),
            None => {
                errors.push(
                    "gender must be one of: male, female, other, prefer not to say".to_string(),
                );
                None
            }
        },
        _ => {
            errors.push("gender must be a non-empty string if provided".to_string());
            None
        }
    }
}

fn parse_int_range(
    value: &Value,
    min: i64,
    max: i64,
    message: &str,
    errors: &mut Vec<String>,
) -> Option<i64> {
    match value.as_i64() {
        Some(n) if (min..=max).contains(&n) => Some(n),
        _ => {
            errors.push(message.to_string());
            None
        }
    }
}

/// Literal YYYY-MM-DD shape: ten ASCII chars, digits with dashes at 4 and 7
fn is_date_pattern(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Dates must match the literal pattern AND denote a real calendar date;
/// 2024-02-30 matches the pattern but still fails.
fn parse_date(value: &Value, name: &str, errors: &mut Vec<String>) -> Option<NaiveDate> {
    let text = match value {
        Value::String(s) => s.as_str(),
        _ => {
            errors.push(format!("{} must be in YYYY-MM-DD format", name));
            return None;
        }
    };
    if !is_date_pattern(text) {
        errors.push(format!("{} must be in YYYY-MM-DD format", name));
        return None;
    }
    match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(format!("{} must be a valid date", name));
            None
        }
    }
}

fn parse_bool(value: &Value, message: &str, errors: &mut Vec<String>) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        _ => {
            errors.push(message.to_string());
            None
        }
    }
}

fn parse_positive_number(value: &Value, message: &str, errors: &mut Vec<String>) -> Option<f64> {
    match value.as_f64() {
        Some(n) if n.is_finite() && n > 0.0 => Some(n),
        _ => {
            errors.push(message.to_string());
            None
        }
    }
}

fn parse_number(value: &Value, message: &str, errors: &mut Vec<String>) -> Option<f64> {
    match value.as_f64() {
        Some(n) if n.is_finite() => Some(n),
        _ => {
            errors.push(message.to_string());
            None
        }
    }
}

// ---- guest ----

/// Validate and normalize a guest creation bag
pub fn guest_create(bag: &FieldBag) -> Result<GuestDraft> {
    let mut errors = Vec::new();

    let first_name = parse_required_string(
        bag.get("first_name"),
        "first_name",
        100,
        "first_name is required and must be a non-empty string".to_string(),
        &mut errors,
    );
    let last_name = parse_required_string(
        bag.get("last_name"),
        "last_name",
        100,
        "last_name is required and must be a non-empty string".to_string(),
        &mut errors,
    );

    let gender = match field(bag, "gender") {
        Field::Absent | Field::Null => None,
        Field::Present(value) => parse_gender(value, &mut errors),
    };
    let family = match field(bag, "family") {
        Field::Absent | Field::Null => None,
        Field::Present(value) => parse_optional_string(value, "family", 100, &mut errors),
    };
    let guest_count = match field(bag, "guest_count") {
        Field::Absent | Field::Null => None,
        Field::Present(value) => parse_int_range(
            value,
            1,
            50,
            "guest_count must be an integer between 1 and 50",
            &mut errors,
        ),
    };
    let expiration_date = match field(bag, "expiration_date") {
        Field::Absent | Field::Null => None,
        Field::Present(value) => parse_date(value, "expiration_date", &mut errors),
    };
    let confirmation = match field(bag, "confirmation") {
        Field::Absent | Field::Null => None,
        Field::Present(value) => {
            parse_bool(value, "confirmation must be a boolean value", &mut errors)
        }
    };

    if !errors.is_empty() {
        return Err(validation_failed(errors));
    }

    Ok(GuestDraft {
        first_name: first_name.unwrap_or_default(),
        last_name: last_name.unwrap_or_default(),
        gender,
        family,
        guest_count,
        expiration_date,
        confirmation,
    })
}

/// Validate a guest update bag into a partial patch
pub fn guest_update(bag: &FieldBag) -> Result<GuestPatch> {
    if no_recognized_fields(bag, &GUEST_FIELDS) {
        return Err(empty_update_error());
    }

    let mut errors = Vec::new();

    let first_name = match field(bag, "first_name") {
        Field::Absent => None,
        Field::Null | Field::Present(_) => parse_required_string(
            bag.get("first_name"),
            "first_name",
            100,
            "first_name must be a non-empty string if provided".to_string(),
            &mut errors,
        ),
    };
    let last_name = match field(bag, "last_name") {
        Field::Absent => None,
        Field::Null | Field::Present(_) => parse_required_string(
            bag.get("last_name"),
            "last_name",
            100,
            "last_name must be a non-empty string if provided".to_string(),
            &mut errors,
        ),
    };
    let gender = match field(bag, "gender") {
        Field::Absent => None,
        Field::Null => Some(None),
        Field::Present(value) => parse_gender(value, &mut errors).map(Some),
    };
    let family = match field(bag, "family") {
        Field::Absent => None,
        Field::Null => Some(None),
        Field::Present(value) => {
            parse_optional_string(value, "family", 100, &mut errors).map(Some)
        }
    };
    let guest_count = match field(bag, "guest_count") {
        Field::Absent => None,
        Field::Null => Some(None),
        Field::Present(value) => parse_int_range(
            value,
            1,
            50,
            "guest_count must be an integer between 1 and 50",
            &mut errors,
        )
        .map(Some),
    };
    let expiration_date = match field(bag, "expiration_date") {
        Field::Absent => None,
        Field::Null => Some(None),
        Field::Present(value) => parse_date(value, "expiration_date", &mut errors).map(Some),
    };
    let confirmation = match field(bag, "confirmation") {
        Field::Absent => None,
        Field::Null => Some(None),
        Field::Present(value) => {
            parse_bool(value, "confirmation must be a boolean value", &mut errors).map(Some)
        }
    };

    if !errors.is_empty() {
        return Err(validation_failed(errors));
    }

    Ok(GuestPatch {
        first_name,
        last_name,
        gender,
        family,
        guest_count,
        expiration_date,
        confirmation,
    })
}

// ---- expense ----

/// Validate and normalize an expense creation bag
pub fn expense_create(bag: &FieldBag) -> Result<ExpenseDraft> {
    let mut errors = Vec::new();

    let descripcion = parse_required_string(
        bag.get("descripcion"),
        "descripcion",
        100,
        "descripcion is required and must be a non-empty string".to_string(),
        &mut errors,
    );
    let monto = match field(bag, "monto") {
        Field::Absent | Field::Null => {
            errors.push("monto is required and must be a positive number".to_string());
            None
        }
        Field::Present(value) => parse_positive_number(
            value,
            "monto is required and must be a positive number",
            &mut errors,
        ),
    };
    let detalle = match field(bag, "detalle") {
        Field::Absent | Field::Null => None,
        Field::Present(value) => parse_optional_string(value, "detalle", 500, &mut errors),
    };
    let responsable = match field(bag, "responsable") {
        Field::Absent | Field::Null => None,
        Field::Present(value) => parse_optional_string(value, "responsable", 100, &mut errors),
    };
    let id_concept = match field(bag, "id_concept") {
        Field::Absent | Field::Null => None,
        Field::Present(value) => parse_int_range(
            value,
            1,
            i64::MAX,
            "id_concept must be a positive integer if provided",
            &mut errors,
        ),
    };

    if !errors.is_empty() {
        return Err(validation_failed(errors));
    }

    Ok(ExpenseDraft {
        descripcion: descripcion.unwrap_or_default(),
        detalle,
        responsable,
        monto: monto.unwrap_or_default(),
        id_concept,
    })
}

/// Validate an expense update bag into a partial patch
pub fn expense_update(bag: &FieldBag) -> Result<ExpensePatch> {
    if no_recognized_fields(bag, &EXPENSE_FIELDS) {
        return Err(empty_update_error());
    }

    let mut errors = Vec::new();

    let descripcion = match field(bag, "descripcion") {
        Field::Absent => None,
        Field::Null | Field::Present(_) => parse_required_string(
            bag.get("descripcion"),
            "descripcion",
            100,
            "descripcion must be a non-empty string if provided".to_string(),
            &mut errors,
        ),
    };
    let detalle = match field(bag, "detalle") {
        Field::Absent => None,
        Field::Null => Some(None),
        Field::Present(value) => {
            parse_optional_string(value, "detalle", 500, &mut errors).map(Some)
        }
    };
    let responsable = match field(bag, "responsable") {
        Field::Absent => None,
        Field::Null => Some(None),
        Field::Present(value) => {
            parse_optional_string(value, "responsable", 100, &mut errors).map(Some)
        }
    };
    let monto = match field(bag, "monto") {
        Field::Absent => None,
        Field::Null => Some(None),
        Field::Present(value) => parse_positive_number(
            value,
            "monto must be a positive number if provided",
            &mut errors,
        )
        .map(Some),
    };
    let id_concept = match field(bag, "id_concept") {
        Field::Absent => None,
        Field::Null => Some(None),
        Field::Present(value) => parse_int_range(
            value,
            1,
            i64::MAX,
            "id_concept must be a positive integer if provided",
            &mut errors,
        )
        .map(Some),
    };

    if !errors.is_empty() {
        return Err(validation_failed(errors));
    }

    Ok(ExpensePatch {
        descripcion,
        detalle,
        responsable,
        monto,
        id_concept,
    })
}

// ---- grupo ----

/// Validate and normalize a grupo creation bag
pub fn grupo_create(bag: &FieldBag) -> Result<GrupoDraft> {
    let mut errors = Vec::new();

    let nombre = parse_required_string(
        bag.get("nombre"),
        "nombre",
        100,
        "nombre is required and must be a non-empty string".to_string(),
        &mut errors,
    );

    if !errors.is_empty() {
        return Err(validation_failed(errors));
    }

    Ok(GrupoDraft {
        nombre: nombre.unwrap_or_default(),
    })
}

/// Validate a grupo update bag into a partial patch
pub fn grupo_update(bag: &FieldBag) -> Result<GrupoPatch> {
    if no_recognized_fields(bag, &GRUPO_FIELDS) {
        return Err(empty_update_error());
    }

    let mut errors = Vec::new();

    let nombre = parse_required_string(
        bag.get("nombre"),
        "nombre",
        100,
        "nombre must be a non-empty string if provided".to_string(),
        &mut errors,
    );

    if !errors.is_empty() {
        return Err(validation_failed(errors));
    }

    Ok(GrupoPatch { nombre })
}

// ---- concepto ----

/// Validate and normalize a concepto creation bag
pub fn concepto_create(bag: &FieldBag) -> Result<ConceptoDraft> {
    let mut errors = Vec::new();

    let nombre = parse_required_string(
        bag.get("nombre"),
        "nombre",
        100,
        "nombre is required and must be a non-empty string".to_string(),
        &mut errors,
    );
    let subtotal = match field(bag, "subtotal") {
        Field::Absent | Field::Null => {
            errors.push("subtotal is required and must be a number".to_string());
            None
        }
        Field::Present(value) => parse_number(
            value,
            "subtotal is required and must be a number",
            &mut errors,
        ),
    };

    if !errors.is_empty() {
        return Err(validation_failed(errors));
    }

    Ok(ConceptoDraft {
        nombre: nombre.unwrap_or_default(),
        subtotal: subtotal.unwrap_or_default(),
    })
}

/// Validate a concepto update bag into a partial patch
pub fn concepto_update(bag: &FieldBag) -> Result<ConceptoPatch> {
    if no_recognized_fields(bag, &CONCEPTO_FIELDS) {
        return Err(empty_update_error());
    }

    let mut errors = Vec::new();

    let nombre = match field(bag, "nombre") {
        Field::Absent => None,
        Field::Null | Field::Present(_) => parse_required_string(
            bag.get("nombre"),
            "nombre",
            100,
            "nombre must be a non-empty string if provided".to_string(),
            &mut errors,
        ),
    };
    let subtotal = match field(bag, "subtotal") {
        Field::Absent => None,
        Field::Null => Some(None),
        Field::Present(value) => {
            parse_number(value, "subtotal must be a number if provided", &mut errors).map(Some)
        }
    };

    if !errors.is_empty() {
        return Err(validation_failed(errors));
    }

    Ok(ConceptoPatch { nombre, subtotal })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EvErrorKind;
    use serde_json::json;

    fn bag(value: Value) -> FieldBag {
        match value {
            Value::Object(map) => map,
            _ => panic!("test bag must be a JSON object"),
        }
    }

    fn details(err: EvError) -> Vec<String> {
        assert_eq!(err.kind(), EvErrorKind::Validation);
        err.details().to_vec()
    }

    #[test]
    fn test_guest_create_minimal() {
        let draft = guest_create(&bag(json!({
            "first_name": "Ana",
            "last_name": "Lopez"
        })))
        .unwrap();

        assert_eq!(draft.first_name, "Ana");
        assert_eq!(draft.last_name, "Lopez");
        assert_eq!(draft.gender, None);
        assert_eq!(draft.guest_count, None);
        assert_eq!(draft.confirmation, None);
    }

    #[test]
    fn test_guest_create_trims_and_lowercases() {
        let draft = guest_create(&bag(json!({
            "first_name": "  Ana  ",
            "last_name": " Lopez ",
            "gender": "  FEMALE ",
            "family": " Lopez Garcia "
        })))
        .unwrap();

        assert_eq!(draft.first_name, "Ana");
        assert_eq!(draft.last_name, "Lopez");
        assert_eq!(draft.gender, Some(Gender::Female));
        assert_eq!(draft.family.as_deref(), Some("Lopez Garcia"));
    }

    #[test]
    fn test_guest_create_collects_all_errors() {
        let err = guest_create(&bag(json!({
            "first_name": "   ",
            "gender": "robot",
            "guest_count": 0
        })))
        .unwrap_err();

        let messages = details(err);
        assert_eq!(
            messages,
            vec![
                "first_name is required and must be a non-empty string",
                "last_name is required and must be a non-empty string",
                "gender must be one of: male, female, other, prefer not to say",
                "guest_count must be an integer between 1 and 50",
            ]
        );
    }

    #[test]
    fn test_guest_create_required_rejects_null_and_non_string() {
        for value in [json!(null), json!(42), json!(true)] {
            let err = guest_create(&bag(json!({
                "first_name": value,
                "last_name": "Lopez"
            })))
            .unwrap_err();
            assert!(details(err)
                .iter()
                .any(|m| m == "first_name is required and must be a non-empty string"));
        }
    }

    #[test]
    fn test_guest_create_name_length_ceiling() {
        let long = "x".repeat(101);
        let err = guest_create(&bag(json!({
            "first_name": long,
            "last_name": "Lopez"
        })))
        .unwrap_err();
        assert_eq!(
            details(err),
            vec!["first_name must not exceed 100 characters"]
        );
    }

    #[test]
    fn test_guest_create_null_optionals_are_skipped() {
        let draft = guest_create(&bag(json!({
            "first_name": "Ana",
            "last_name": "Lopez",
            "gender": null,
            "family": null,
            "guest_count": null,
            "expiration_date": null,
            "confirmation": null
        })))
        .unwrap();

        assert_eq!(draft.gender, None);
        assert_eq!(draft.family, None);
        assert_eq!(draft.guest_count, None);
        assert_eq!(draft.expiration_date, None);
        assert_eq!(draft.confirmation, None);
    }

    #[test]
    fn test_guest_count_bounds() {
        for count in [1, 25, 50] {
            let result = guest_create(&bag(json!({
                "first_name": "Ana",
                "last_name": "Lopez",
                "guest_count": count
            })));
            assert!(result.is_ok(), "guest_count {} should pass", count);
        }
        for count in [json!(0), json!(51), json!(-3), json!(2.5), json!("5")] {
            let err = guest_create(&bag(json!({
                "first_name": "Ana",
                "last_name": "Lopez",
                "guest_count": count
            })))
            .unwrap_err();
            assert_eq!(
                details(err),
                vec!["guest_count must be an integer between 1 and 50"]
            );
        }
    }

    #[test]
    fn test_expiration_date_pattern() {
        for value in [json!("2024-1-05"), json!("20240105"), json!("not-a-date"), json!(20240105)]
        {
            let err = guest_create(&bag(json!({
                "first_name": "Ana",
                "last_name": "Lopez",
                "expiration_date": value
            })))
            .unwrap_err();
            assert_eq!(
                details(err),
                vec!["expiration_date must be in YYYY-MM-DD format"]
            );
        }
    }

    #[test]
    fn test_expiration_date_impossible_calendar_date() {
        // Matches the pattern but is not a real date
        let err = guest_create(&bag(json!({
            "first_name": "Ana",
            "last_name": "Lopez",
            "expiration_date": "2024-02-30"
        })))
        .unwrap_err();
        assert_eq!(details(err), vec!["expiration_date must be a valid date"]);

        let draft = guest_create(&bag(json!({
            "first_name": "Ana",
            "last_name": "Lopez",
            "expiration_date": "2024-02-29"
        })))
        .unwrap();
        assert_eq!(
            draft.expiration_date,
            Some(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
    }

    #[test]
    fn test_confirmation_no_string_coercion() {
        let err = guest_create(&bag(json!({
            "first_name": "Ana",
            "last_name": "Lopez",
            "confirmation": "true"
        })))
        .unwrap_err();
        assert_eq!(details(err), vec!["confirmation must be a boolean value"]);
    }

    #[test]
    fn test_guest_update_requires_a_recognized_field() {
        for input in [json!({}), json!({"unknown": 1, "other": "x"})] {
            let err = guest_update(&bag(input)).unwrap_err();
            assert_eq!(
                details(err),
                vec!["At least one valid field must be provided for update"]
            );
        }
    }

    #[test]
    fn test_guest_update_null_marks_explicit_null() {
        let patch = guest_update(&bag(json!({ "family": null, "gender": null }))).unwrap();
        assert_eq!(patch.family, Some(None));
        assert_eq!(patch.gender, Some(None));
        assert_eq!(patch.first_name, None);
    }

    #[test]
    fn test_guest_update_null_rejected_for_required_columns() {
        let err = guest_update(&bag(json!({ "first_name": null }))).unwrap_err();
        assert_eq!(
            details(err),
            vec!["first_name must be a non-empty string if provided"]
        );
    }

    #[test]
    fn test_guest_update_normalizes_values() {
        let patch = guest_update(&bag(json!({
            "first_name": "  Maria ",
            "gender": "OTHER",
            "confirmation": true
        })))
        .unwrap();
        assert_eq!(patch.first_name.as_deref(), Some("Maria"));
        assert_eq!(patch.gender, Some(Some(Gender::Other)));
        assert_eq!(patch.confirmation, Some(Some(true)));
    }

    #[test]
    fn test_expense_create_ok() {
        let draft = expense_create(&bag(json!({
            "descripcion": " Flores ",
            "detalle": "Centros de mesa",
            "monto": 1500.5,
            "id_concept": 3
        })))
        .unwrap();
        assert_eq!(draft.descripcion, "Flores");
        assert_eq!(draft.detalle.as_deref(), Some("Centros de mesa"));
        assert_eq!(draft.responsable, None);
        assert_eq!(draft.monto, 1500.5);
        assert_eq!(draft.id_concept, Some(3));
    }

    #[test]
    fn test_expense_create_monto_rules() {
        for value in [json!(0), json!(-10), json!("12"), json!(null)] {
            let err = expense_create(&bag(json!({
                "descripcion": "Flores",
                "monto": value
            })))
            .unwrap_err();
            assert_eq!(
                details(err),
                vec!["monto is required and must be a positive number"]
            );
        }
        let err = expense_create(&bag(json!({ "descripcion": "Flores" }))).unwrap_err();
        assert_eq!(
            details(err),
            vec!["monto is required and must be a positive number"]
        );
    }

    #[test]
    fn test_expense_create_detalle_ceiling() {
        let long = "x".repeat(501);
        let err = expense_create(&bag(json!({
            "descripcion": "Flores",
            "monto": 10,
            "detalle": long
        })))
        .unwrap_err();
        assert_eq!(details(err), vec!["detalle must not exceed 500 characters"]);
    }

    #[test]
    fn test_expense_create_id_concept_rules() {
        for value in [json!(0), json!(-1), json!(1.5), json!("2")] {
            let err = expense_create(&bag(json!({
                "descripcion": "Flores",
                "monto": 10,
                "id_concept": value
            })))
            .unwrap_err();
            assert_eq!(
                details(err),
                vec!["id_concept must be a positive integer if provided"]
            );
        }
    }

    #[test]
    fn test_expense_update_empty_and_null_semantics() {
        let err = expense_update(&bag(json!({}))).unwrap_err();
        assert_eq!(
            details(err),
            vec!["At least one valid field must be provided for update"]
        );

        let patch = expense_update(&bag(json!({ "detalle": null, "id_concept": null }))).unwrap();
        assert_eq!(patch.detalle, Some(None));
        assert_eq!(patch.id_concept, Some(None));
        assert_eq!(patch.monto, None);

        let err = expense_update(&bag(json!({ "descripcion": null }))).unwrap_err();
        assert_eq!(
            details(err),
            vec!["descripcion must be a non-empty string if provided"]
        );
    }

    #[test]
    fn test_expense_update_monto_message() {
        let err = expense_update(&bag(json!({ "monto": -5 }))).unwrap_err();
        assert_eq!(
            details(err),
            vec!["monto must be a positive number if provided"]
        );
    }

    #[test]
    fn test_grupo_validators() {
        let draft = grupo_create(&bag(json!({ "nombre": " Recepcion " }))).unwrap();
        assert_eq!(draft.nombre, "Recepcion");

        let err = grupo_create(&bag(json!({}))).unwrap_err();
        assert_eq!(
            details(err),
            vec!["nombre is required and must be a non-empty string"]
        );

        let err = grupo_update(&bag(json!({}))).unwrap_err();
        assert_eq!(
            details(err),
            vec!["At least one valid field must be provided for update"]
        );

        let patch = grupo_update(&bag(json!({ "nombre": "Civil" }))).unwrap();
        assert_eq!(patch.nombre.as_deref(), Some("Civil"));
    }

    #[test]
    fn test_concepto_validators() {
        let draft = concepto_create(&bag(json!({ "nombre": "Alimentos", "subtotal": 0 }))).unwrap();
        assert_eq!(draft.nombre, "Alimentos");
        assert_eq!(draft.subtotal, 0.0);

        let err = concepto_create(&bag(json!({ "subtotal": "12" }))).unwrap_err();
        assert_eq!(
            details(err),
            vec![
                "nombre is required and must be a non-empty string",
                "subtotal is required and must be a number",
            ]
        );

        let patch = concepto_update(&bag(json!({ "subtotal": 99.5 }))).unwrap();
        assert_eq!(patch.nombre, None);
        assert_eq!(patch.subtotal, Some(Some(99.5)));

        // Explicit null is forwarded; the NOT NULL column turns it into a
        // store constraint error downstream
        let patch = concepto_update(&bag(json!({ "subtotal": null }))).unwrap();
        assert_eq!(patch.subtotal, Some(None));
    }
}
