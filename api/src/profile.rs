//! The signed-in user's profile and alert preferences.

use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeSet;

/// Alert distance in miles. Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Radius(f64);

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("radius must be a positive number of miles, got {0}")]
pub struct InvalidRadius(pub f64);

impl Radius {
    // callers pass positive literals only
    pub(crate) const fn literal(miles: f64) -> Self {
        Self(miles)
    }

    pub fn miles(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Radius {
    type Error = InvalidRadius;

    fn try_from(miles: f64) -> Result<Self, Self::Error> {
        if miles.is_finite() && miles > 0.0 {
            Ok(Self(miles))
        } else {
            Err(InvalidRadius(miles))
        }
    }
}

impl From<Radius> for f64 {
    fn from(radius: Radius) -> Self {
        radius.0
    }
}

/// Which alerts reach the user, and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertPreferences {
    #[serde(rename = "email")]
    pub email_enabled: bool,
    #[serde(rename = "push")]
    pub push_enabled: bool,
    pub categories: BTreeSet<String>,
    pub radius: Radius,
}

impl AlertPreferences {
    /// Adds `category` if absent, removes it otherwise.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_owned());
        }
    }

    pub fn wants(&self, category: &str) -> bool {
        self.categories.contains(category)
    }
}

impl Default for AlertPreferences {
    fn default() -> Self {
        Self {
            email_enabled: false,
            push_enabled: false,
            categories: ["crime", "emergency"].into_iter().map(String::from).collect(),
            radius: Radius::literal(1.0),
        }
    }
}

/// A saved route. Routes are not computed yet, so the record is kept opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedRoute(pub serde_json::Value);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub neighborhood: Option<String>,
    pub is_anonymous: bool,
    pub alert_preferences: AlertPreferences,
    #[serde(default)]
    pub saved_routes: Vec<SavedRoute>,
}

impl UserProfile {
    /// Applies `update` on top of this profile. Fields set in the update win.
    pub fn merged(&self, update: &ProfileUpdate) -> Self {
        let mut next = self.clone();
        if let Some(name) = &update.name {
            next.name = non_blank(name);
        }
        if let Some(email) = &update.email {
            next.email = non_blank(email);
        }
        if let Some(neighborhood) = &update.neighborhood {
            next.neighborhood = non_blank(neighborhood);
        }
        if let Some(prefs) = &update.alert_preferences {
            next.alert_preferences = prefs.clone();
        }
        if let Some(routes) = &update.saved_routes {
            next.saved_routes = routes.clone();
        }
        next
    }

    /// The name to greet the user with.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Community Member")
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// A partial profile. Only the fields that are set are applied.
///
/// Blank display strings clear the corresponding field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub neighborhood: Option<String>,
    pub alert_preferences: Option<AlertPreferences>,
    pub saved_routes: Option<Vec<SavedRoute>>,
}

impl ProfileUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn neighborhood(mut self, neighborhood: impl Into<String>) -> Self {
        self.neighborhood = Some(neighborhood.into());
        self
    }

    pub fn alert_preferences(mut self, prefs: AlertPreferences) -> Self {
        self.alert_preferences = Some(prefs);
        self
    }
}
