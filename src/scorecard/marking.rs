use serde::{Deserialize, Serialize};

use crate::classify::{classify, CategoryLists, Mark};
use crate::error::Error;

/// User-editable marker lists for tee shots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FairwayMarks {
    pub hit: Vec<String>,
    pub missed: Vec<String>,
    pub missed_left: Vec<String>,
    pub missed_right: Vec<String>,
}

impl Default for FairwayMarks {
    fn default() -> Self {
        Self {
            hit: markers(&["✓", "hit", "/"]),
            missed: markers(&["✗", "x", "missed"]),
            missed_left: markers(&["←", "<", "missed left"]),
            missed_right: markers(&["→", ">", "missed right"]),
        }
    }
}

impl FairwayMarks {
    pub fn classify(&self, raw: Option<&str>) -> Mark {
        classify(
            raw,
            CategoryLists {
                hit: &self.hit,
                missed_left: &self.missed_left,
                missed_right: &self.missed_right,
                missed: &self.missed,
            },
        )
    }
}

/// User-editable marker lists for greens in regulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreenMarks {
    pub hit: Vec<String>,
    pub missed: Vec<String>,
}

impl Default for GreenMarks {
    fn default() -> Self {
        Self {
            hit: markers(&["✓", "hit", "/"]),
            missed: markers(&["✗", "x", "missed"]),
        }
    }
}

impl GreenMarks {
    pub fn classify(&self, raw: Option<&str>) -> Mark {
        classify(
            raw,
            CategoryLists {
                hit: &self.hit,
                missed: &self.missed,
                ..Default::default()
            },
        )
    }
}

fn markers(defaults: &[&str]) -> Vec<String> {
    defaults.iter().map(|marker| marker.to_string()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatType {
    SuccessRate,
    Percentage,
    Average,
    Count,
}

/// A user-defined per-hole field, e.g. "sand save" or "penalty".
///
/// The id is assigned once when the field is created and never re-derived
/// from the label, so renaming the field cannot orphan stored hole data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomFieldDef {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub enabled: bool,
    pub show_as_donut: bool,
    pub stat_type: StatType,
    #[serde(default)]
    pub success_values: Vec<String>,
}

impl CustomFieldDef {
    pub fn new(id: impl Into<String>, label: impl Into<String>, stat_type: StatType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: String::new(),
            enabled: true,
            show_as_donut: true,
            stat_type,
            success_values: vec![],
        }
    }

    pub fn with_success_values(mut self, values: &[&str]) -> Self {
        self.success_values = markers(values);
        self
    }

    pub fn is_success(&self, value: &str) -> bool {
        self.success_values
            .iter()
            .any(|success| success.eq_ignore_ascii_case(value.trim()))
    }
}

/// One user's complete marking configuration. Treated as an immutable
/// snapshot during an aggregation pass; edits go through these methods.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkingConfig {
    pub fairway: FairwayMarks,
    pub greens: GreenMarks,
    pub custom_fields: Vec<CustomFieldDef>,
}

impl MarkingConfig {
    pub fn add_custom_field(&mut self, def: CustomFieldDef) -> Result<(), Error> {
        if self.custom_field(&def.id).is_some() {
            return Err(Error::DuplicateCustomField(def.id));
        }
        self.custom_fields.push(def);
        Ok(())
    }

    pub fn remove_custom_field(&mut self, id: &str) -> Option<CustomFieldDef> {
        let index = self.custom_fields.iter().position(|def| def.id == id)?;
        Some(self.custom_fields.remove(index))
    }

    pub fn custom_field(&self, id: &str) -> Option<&CustomFieldDef> {
        self.custom_fields.iter().find(|def| def.id == id)
    }

    pub fn enabled_custom_fields(&self) -> impl Iterator<Item = &CustomFieldDef> {
        self.custom_fields.iter().filter(|def| def.enabled)
    }
}
