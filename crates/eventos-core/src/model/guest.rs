use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Guest gender, stored lower-case in the database
///
/// Incoming values are matched case-insensitively and normalized by the
/// validator; the canonical wire form is the lower-case string (with spaces
/// for "prefer not to say").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[serde(rename = "prefer not to say")]
    PreferNotToSay,
}

impl Gender {
    /// Canonical lower-case form, as persisted
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::PreferNotToSay => "prefer not to say",
        }
    }

    /// Case-insensitive parse of a raw input string
    pub fn parse(input: &str) -> Option<Gender> {
        match input.trim().to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            "prefer not to say" => Some(Gender::PreferNotToSay),
            _ => None,
        }
    }
}

/// Guest - an invited attendee of the event
///
/// Timestamps are store-managed: created_at/updated_at default to the
/// insert time and updated_at is refreshed by a trigger whenever any field
/// changes. `confirmation` is coerced to a genuine bool on every read path
/// (a NULLed-out column reads as false).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    pub family: Option<String>,
    pub guest_count: Option<i64>,
    pub expiration_date: Option<NaiveDate>,
    pub confirmation: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Validated, normalized payload for guest creation
///
/// Optional fields left as None get their defaults applied by the
/// repository at insert time (guest_count 1, confirmation false, nullable
/// strings NULL) - the validator never injects defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestDraft {
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    pub family: Option<String>,
    pub guest_count: Option<i64>,
    pub expiration_date: Option<NaiveDate>,
    pub confirmation: Option<bool>,
}

/// Validated partial update for a guest
///
/// Outer None = key absent (column untouched). For nullable columns the
/// inner Option distinguishes an explicit null (Some(None), nulls the
/// column) from a new value. first_name/last_name are NOT NULL columns, so
/// the validator rejects explicit nulls for them before a patch is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Option<Gender>>,
    pub family: Option<Option<String>>,
    pub guest_count: Option<Option<i64>>,
    pub expiration_date: Option<Option<NaiveDate>>,
    pub confirmation: Option<Option<bool>>,
}

/// List/count filters for guests; conditions are combined with AND
///
/// `family` matches as a substring (LIKE); the others match exactly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestFilter {
    pub gender: Option<Gender>,
    pub family: Option<String>,
    pub confirmation: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse_case_insensitive() {
        assert_eq!(Gender::parse("Male"), Some(Gender::Male));
        assert_eq!(Gender::parse("FEMALE"), Some(Gender::Female));
        assert_eq!(Gender::parse("  other "), Some(Gender::Other));
        assert_eq!(Gender::parse("Prefer Not To Say"), Some(Gender::PreferNotToSay));
        assert_eq!(Gender::parse("unknown"), None);
        assert_eq!(Gender::parse(""), None);
    }

    #[test]
    fn test_gender_round_trip() {
        for gender in [
            Gender::Male,
            Gender::Female,
            Gender::Other,
            Gender::PreferNotToSay,
        ] {
            assert_eq!(Gender::parse(gender.as_str()), Some(gender));
        }
    }

    #[test]
    fn test_gender_serializes_as_lowercase_string() {
        let json = serde_json::to_string(&Gender::PreferNotToSay).unwrap();
        assert_eq!(json, "\"prefer not to say\"");
    }
}
