//! Upstream student list → roster document
//!
//! SchaleDB has shipped `students.json` both as an array and as an object
//! keyed by id. Either way each entry carries `Id`, `Name` and `School`
//! among many other fields; only those three are kept.

use std::fs;
use std::path::Path;

use roster_core::{decode_roster, Student, StudentId};
use serde_json::Value;

use crate::error::{SyncError, SyncResult};
use crate::http::HttpClient;
use crate::images::is_file_safe;

pub const DEFAULT_SOURCE: &str =
    "https://raw.githubusercontent.com/SchaleDB/SchaleDB/main/data/en/students.json";

fn entry_id(entry: &Value) -> Option<StudentId> {
    match entry.get("Id")? {
        Value::Number(n) => Some(StudentId::new(n.to_string())),
        Value::String(s) if !s.is_empty() => Some(StudentId::new(s.as_str())),
        _ => None,
    }
}

fn entry_text(entry: &Value, field: &str) -> String {
    entry
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Keep `Id`, `Name` and `School` from every entry that has a usable id, in
/// upstream order. Object documents keep their key order.
pub fn map_upstream(data: &Value) -> SyncResult<Vec<Student>> {
    let entries: Vec<&Value> = match data {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => map.values().collect(),
        _ => return Err(SyncError::UnexpectedShape),
    };

    let mut students = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(id) = entry_id(entry) else {
            log::warn!("skipping upstream entry without an Id");
            continue;
        };
        if !is_file_safe(&id) {
            log::warn!("skipping upstream entry with unsafe Id {:?}", id.as_str());
            continue;
        }
        students.push(Student {
            id,
            name: entry_text(entry, "Name"),
            school: entry_text(entry, "School"),
        });
    }
    Ok(students)
}

pub fn fetch_students(client: &HttpClient, source: &str) -> SyncResult<Vec<Student>> {
    log::info!("fetching student list from {source}");
    let data = client.get_json(source)?;
    let students = map_upstream(&data)?;
    log::info!("found {} students", students.len());
    Ok(students)
}

pub fn write_roster(path: &Path, students: &[Student]) -> SyncResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SyncError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(students)?;
    fs::write(path, json).map_err(|e| SyncError::io(path, e))
}

pub fn read_roster(path: &Path) -> SyncResult<Vec<Student>> {
    let body = fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
    Ok(decode_roster(&body)?)
}
