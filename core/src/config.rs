use serde::{Deserialize, Serialize};

use crate::types::StudentId;

/// Roster document, relative to the page
pub const DEFAULT_DATA_URL: &str = "data/students.json";
/// Id of the element that receives the cards
pub const DEFAULT_CONTAINER_ID: &str = "student-grid";
/// Primary card image
pub const DEFAULT_ICON_TEMPLATE: &str = "images/student/icon/{id}.webp";
/// Substituted once when the icon fails to load
pub const DEFAULT_PORTRAIT_TEMPLATE: &str = "images/student/portrait/{id}.webp";

const ID_PLACEHOLDER: &str = "{id}";

/// An image path with `{id}` placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathTemplate(String);

impl PathTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitute every `{id}` with the student's identifier
    pub fn fill(&self, id: &StudentId) -> String {
        self.0.replace(ID_PLACEHOLDER, id.as_str())
    }
}

/// Where the page reads its data from and where it renders it.
///
/// Any field left out of a JSON override keeps its default, so a page can
/// pass `{"containerId": "roster"}` and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RosterConfig {
    pub data_url: String,
    pub container_id: String,
    pub icon_template: PathTemplate,
    pub portrait_template: PathTemplate,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            icon_template: PathTemplate::new(DEFAULT_ICON_TEMPLATE),
            portrait_template: PathTemplate::new(DEFAULT_PORTRAIT_TEMPLATE),
        }
    }
}

impl RosterConfig {
    pub fn icon_path(&self, id: &StudentId) -> String {
        self.icon_template.fill(id)
    }

    pub fn portrait_path(&self, id: &StudentId) -> String {
        self.portrait_template.fill(id)
    }
}
