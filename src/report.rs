//! The report record layout consumes.

use crate::ReportError;
use serde::{Deserialize, Serialize};

/// A labelled field shown in the metadata bar under the header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataField {
    pub label: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl MetadataField {
    pub fn new<L: ToString, V: ToString>(label: L, value: Option<V>) -> MetadataField {
        MetadataField {
            label: label.to_string(),
            value: value.map(|v| v.to_string()),
        }
    }
}

/// One key/value row inside a section. A missing value renders as "N/A".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl Entry {
    pub fn new<K: ToString, V: ToString>(key: K, value: Option<V>) -> Entry {
        Entry {
            key: key.to_string(),
            value: value.map(|v| v.to_string()),
        }
    }
}

/// A titled group of key/value rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// Everything needed to lay out one report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub title: String,
    /// Shown under the title; when absent a "Report ID: ..." line is shown instead
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub metadata: Vec<MetadataField>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Report {
    pub fn from_json(json: &str) -> Result<Report, ReportError> {
        Ok(serde_json::from_str(json)?)
    }
}
