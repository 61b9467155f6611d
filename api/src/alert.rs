//! Defines safety alerts and the vocabulary used to classify them.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// The alert categories offered by the filter and preference views.
pub const CATEGORIES: [(&str, &str); 6] = [
    ("crime", "Crime"),
    ("traffic", "Traffic"),
    ("emergency", "Emergency"),
    ("police", "Police Activity"),
    ("weather", "Weather"),
    ("community", "Community"),
];

/// How urgent an alert is. Variants are declared most severe first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Human readable label, e.g. "Critical".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Identifier of an alert, unique within the active set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(String);

impl AlertId {
    pub(crate) fn generate() -> Self {
        Self(crate::ids::next_id("alert"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AlertId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An active safety alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
    pub location: Option<String>,
    pub category: String,
}

/// The caller-supplied fields of an alert. The store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlert {
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub location: Option<String>,
    pub category: String,
}

impl NewAlert {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
            location: None,
            category: category.into(),
        }
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub(crate) fn into_alert(self, id: AlertId, timestamp: DateTime<Utc>) -> Alert {
        Alert {
            id,
            title: self.title,
            message: self.message,
            severity: self.severity,
            timestamp,
            location: self.location,
            category: self.category,
        }
    }
}

/// Narrows a list view. `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertFilter {
    pub category: Option<String>,
    pub severity: Option<Severity>,
}

impl AlertFilter {
    pub fn matches(&self, alert: &Alert) -> bool {
        self.category
            .as_deref()
            .map_or(true, |category| alert.category == category)
            && self.severity.map_or(true, |severity| alert.severity == severity)
    }
}
