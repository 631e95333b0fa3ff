//! # Catalog Models
//!
//! The project record shared by the catalog store, the query engine and
//! every consumer that renders a project.

use serde::{Deserialize, Serialize};

/// Bucket used for records without an explicit category
pub const DEFAULT_CATEGORY: &str = "Other";

/// Icon reference used for records without an explicit icon
pub const PLACEHOLDER_ICON: &str = "/placeholder.svg";

/// One project entry in the design kit catalog
///
/// Field names follow the camelCase layout of `projects.json`:
///
/// ```json
/// {
///   "name": "Aerodrome",
///   "designKitUrl": "https://example.com/brand",
///   "contact": "design@aerodrome.finance",
///   "category": "DeFi"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Display name, also the key consumers use for detail lookups
    pub name: String,
    /// External link to the project's design kit
    pub design_kit_url: String,
    /// Email address or social handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProjectRecord {
    /// Create a record with only the required fields set
    pub fn new(name: impl Into<String>, design_kit_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            design_kit_url: design_kit_url.into(),
            contact: None,
            category: None,
            icon_url: None,
            description: None,
        }
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Category used for grouping, `"Other"` when none is set
    pub fn category_bucket(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    /// Icon to render, the placeholder when none is set
    pub fn icon_or_placeholder(&self) -> &str {
        self.icon_url.as_deref().unwrap_or(PLACEHOLDER_ICON)
    }

    /// Link a visitor can follow to reach the project team
    ///
    /// - `team@example.com` becomes `mailto:team@example.com`
    /// - `@handle` becomes `https://x.com/handle`
    /// - anything else (usually already a URL) is returned as-is
    pub fn contact_link(&self) -> Option<String> {
        let contact = self.contact.as_deref()?.trim();
        if contact.is_empty() {
            return None;
        }

        if let Some(handle) = contact.strip_prefix('@') {
            return Some(format!("https://x.com/{}", handle));
        }

        if contact.contains('@') && !contact.contains("://") {
            return Some(format!("mailto:{}", contact));
        }

        Some(contact.to_string())
    }
}
