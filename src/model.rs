use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub max_participants: i64,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }

    pub fn availability_label(&self) -> String {
        format!("{} spots left", self.spots_left())
    }
}

/// Activities keyed by name, in the order the server sent them.
pub type Activities = IndexMap<String, Activity>;
