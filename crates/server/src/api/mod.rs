//! # HTTP API
//!
//! Response shapes shared by every endpoint, plus the endpoint modules.
//!
//! - `search` - `/api/search`, the programmatic query endpoint
//! - `projects` - catalog listing, grouping and project detail
//! - `about` - static site metadata

pub mod about;
pub mod projects;
pub mod search;

use axum::{http::StatusCode, response::IntoResponse, Json};
use designkit_core::{CatalogError, ProjectRecord};
use serde::Serialize;
use utoipa::ToSchema;

/// Where visitors can contribute missing projects
pub const GITHUB_URL: &str = "https://github.com/ZaK3939/design-kit";

/// A project as returned over HTTP
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub name: String,
    pub design_kit_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&ProjectRecord> for ProjectResponse {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            name: record.name.clone(),
            design_kit_url: record.design_kit_url.clone(),
            contact: record.contact.clone(),
            category: record.category.clone(),
            icon_url: record.icon_url.clone(),
            description: record.description.clone(),
        }
    }
}

/// Structured reply used whenever there is no list to return
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub message: String,
    pub suggestion: String,
    pub github_url: String,
}

impl Suggestion {
    fn new(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: suggestion.into(),
            github_url: GITHUB_URL.to_string(),
        }
    }

    /// No `q` parameter, or an empty one
    pub fn no_query() -> Self {
        Self::new(
            "Please provide a search query",
            "Add a ?q= parameter with part of a project name, for example ?q=swap",
        )
    }

    /// The term matched nothing
    pub fn no_results(term: &str) -> Self {
        Self::new(
            format!("No projects found matching \"{}\"", term),
            "Can't find a project? Add its design kit to the catalog on GitHub",
        )
    }

    /// No project with this exact name
    pub fn not_found(name: &str) -> Self {
        Self::new(
            format!("No project named \"{}\"", name),
            "Search with /api/search?q= to find the exact project name",
        )
    }

    /// The catalog could not be loaded
    pub fn unavailable() -> Self {
        Self::new(
            "Unable to fetch projects data",
            "Please try again later or report the problem on GitHub",
        )
    }
}

/// Log a catalog failure and turn it into the 500 reply
pub(crate) fn catalog_failure(err: &CatalogError) -> axum::response::Response {
    tracing::error!(origin = %err.origin(), error = %err, "Catalog unavailable");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(Suggestion::unavailable())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_serialization() {
        let json = serde_json::to_value(Suggestion::no_query()).unwrap();
        assert_eq!(json["message"], "Please provide a search query");
        assert_eq!(json["githubUrl"], GITHUB_URL);
        assert!(json["suggestion"].is_string());
    }

    #[test]
    fn test_no_results_names_the_term() {
        let suggestion = Suggestion::no_results("zz");
        assert_eq!(suggestion.message, "No projects found matching \"zz\"");
    }

    #[test]
    fn test_project_response_from_record() {
        let record = ProjectRecord::new("Acme", "https://acme.xyz/kit").with_category("DeFi");
        let response = ProjectResponse::from(&record);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Acme",
                "designKitUrl": "https://acme.xyz/kit",
                "category": "DeFi"
            })
        );
    }
}
