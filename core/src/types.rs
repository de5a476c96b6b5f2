use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Identifier used to key a student's image paths.
///
/// The data source writes it either as a JSON string (`"101"`) or as a JSON
/// integer (`10000`); both spellings produce the same id. Integral floats
/// (`101.0`) are accepted too. A missing or null
/// id decodes to the empty id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for StudentId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for StudentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for StudentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Numeric ids go back out as numbers so SchaleDB-shaped files stay untouched
        match self.0.parse::<u64>() {
            Ok(n) if n.to_string() == self.0 => serializer.serialize_u64(n),
            _ => serializer.serialize_str(&self.0),
        }
    }
}

struct StudentIdVisitor;

impl<'de> Visitor<'de> for StudentIdVisitor {
    type Value = StudentId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or integer student id")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(StudentId::new(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(StudentId(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(StudentId::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(StudentId(v.to_string()))
    }

    // Display drops the fraction of integral floats, so `101.0` becomes `101`
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(StudentId(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(StudentId::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(StudentId::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(StudentIdVisitor)
    }
}

impl<'de> Deserialize<'de> for StudentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StudentIdVisitor)
    }
}

/// A single student entry from the roster document.
///
/// Nothing is enforced: absent or null fields decode to empty values and the
/// card is rendered anyway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Student {
    #[serde(default)]
    pub id: StudentId,
    #[serde(default, deserialize_with = "nullable_text")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub school: String,
}

impl Student {
    pub fn new(id: impl Into<StudentId>, name: &str, school: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            school: school.to_string(),
        }
    }
}

fn nullable_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a roster document into students, preserving document order.
pub fn decode_roster(body: &str) -> crate::RosterResult<Vec<Student>> {
    Ok(serde_json::from_str(body)?)
}
