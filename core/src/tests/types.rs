use super::*;
use crate::error::RosterError;
use crate::types::{decode_roster, StudentId};

#[test]
fn test_decode_roster_reads_pascal_case_fields() {
    let students = decode_roster(ALICE_ONLY).unwrap();
    assert_eq!(students, vec![student("101", "Alice", "Trinity")]);
}

#[test]
fn test_decode_roster_accepts_numeric_ids() {
    let students = decode_roster(THREE_STUDENTS).unwrap();
    let ids: Vec<&str> = students.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["10000", "10001", "10002"]);
}

#[test]
fn test_decode_roster_keeps_document_order() {
    let students = decode_roster(THREE_STUDENTS).unwrap();
    let names: Vec<&str> = students.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Aru", "Eimi", "Haruna"]);
}

#[test]
fn test_decode_roster_missing_fields_decode_empty() {
    let students = decode_roster(r#"[{"Name": "Hoshino"}, {"Id": 7, "School": null}]"#).unwrap();

    assert_eq!(students[0].id, StudentId::default());
    assert_eq!(students[0].name, "Hoshino");
    assert_eq!(students[0].school, "");

    assert_eq!(students[1].id.as_str(), "7");
    assert_eq!(students[1].name, "");
    assert_eq!(students[1].school, "");
}

#[test]
fn test_decode_roster_ignores_unknown_fields() {
    let body = r#"[{"Id": 10005, "Name": "Hoshino", "School": "Abydos", "StarGrade": 3, "Skills": []}]"#;
    let students = decode_roster(body).unwrap();
    assert_eq!(students, vec![student("10005", "Hoshino", "Abydos")]);
}

#[test]
fn test_decode_roster_empty_array() {
    assert!(decode_roster("[]").unwrap().is_empty());
}

#[test]
fn test_decode_roster_rejects_non_json() {
    let err = decode_roster("<html>404 Not Found</html>").unwrap_err();
    assert!(matches!(err, RosterError::Decode(_)), "got {err:?}");
}

#[test]
fn test_decode_roster_rejects_non_array_document() {
    let err = decode_roster(r#"{"10000": {"Id": 10000}}"#).unwrap_err();
    assert!(matches!(err, RosterError::Decode(_)), "got {err:?}");
}

#[test]
fn test_student_id_serializes_numeric_ids_as_numbers() {
    let json = serde_json::to_string(&student("10000", "Aru", "Gehenna")).unwrap();
    assert_eq!(json, r#"{"Id":10000,"Name":"Aru","School":"Gehenna"}"#);

    let json = serde_json::to_string(&student("0101", "Alice", "Trinity")).unwrap();
    assert!(json.starts_with(r#"{"Id":"0101""#), "leading zero must stay a string: {json}");
}

#[test]
fn test_decode_roster_accepts_integral_float_ids() {
    let students = decode_roster(r#"[{"Id": 101.0, "Name": "Alice", "School": "Trinity"}]"#).unwrap();
    assert_eq!(students[0].id.as_str(), "101");
}
