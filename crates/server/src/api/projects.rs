//! # Projects API
//!
//! Catalog browsing: the full list, the category-grouped view and the
//! per-project detail view.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use designkit_core::{group_by_category, query, Catalog, ProjectRecord, QueryResult};
use serde::Serialize;
use utoipa::ToSchema;

use super::search::search_term;
use super::{catalog_failure, ProjectResponse, Suggestion};
use crate::app::SharedState;

/// One category bucket
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct CategoryGroupResponse {
    pub category: String,
    pub projects: Vec<ProjectResponse>,
}

/// Grouped view of the catalog, optionally filtered
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct GroupedResponse {
    /// The term that was applied, `null` when the whole catalog is grouped
    pub query: Option<String>,
    pub groups: Vec<CategoryGroupResponse>,
}

impl GroupedResponse {
    /// Group the records matching `term`, or every record when there is no term
    pub fn build(catalog: &Catalog, term: Option<&str>) -> Self {
        let records: Vec<&ProjectRecord> = match query(catalog.records(), term) {
            QueryResult::Matches(found) => found,
            QueryResult::EmptyWithQuery => Vec::new(),
            QueryResult::NoQuery => catalog.records().iter().collect(),
        };

        let groups = group_by_category(records)
            .into_iter()
            .map(|group| CategoryGroupResponse {
                category: group.category.to_string(),
                projects: group.projects.into_iter().map(ProjectResponse::from).collect(),
            })
            .collect();

        Self {
            query: term.filter(|t| !t.is_empty()).map(str::to_string),
            groups,
        }
    }
}

/// Detail view of a single project
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetailResponse {
    pub name: String,
    pub design_kit_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category, or "Other"
    pub category_bucket: String,
    /// Icon URL, or the placeholder
    pub icon: String,
    /// `mailto:` or profile link derived from `contact`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_link: Option<String>,
}

impl From<&ProjectRecord> for ProjectDetailResponse {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            name: record.name.clone(),
            design_kit_url: record.design_kit_url.clone(),
            contact: record.contact.clone(),
            description: record.description.clone(),
            category_bucket: record.category_bucket().to_string(),
            icon: record.icon_or_placeholder().to_string(),
            contact_link: record.contact_link(),
        }
    }
}

/// List every project in catalog order
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Full catalog", body = Vec<ProjectResponse>),
        (status = 500, description = "Catalog unavailable", body = Suggestion)
    )
)]
pub async fn list_projects(State(state): State<SharedState>) -> Response {
    match state.catalog.load().await {
        Ok(catalog) => {
            let projects: Vec<ProjectResponse> =
                catalog.records().iter().map(ProjectResponse::from).collect();
            Json(projects).into_response()
        }
        Err(e) => catalog_failure(&e),
    }
}

/// Projects grouped by category
#[utoipa::path(
    get,
    path = "/api/v1/projects/grouped",
    tag = "projects",
    params(("q" = Option<String>, Query, description = "Optional name filter applied before grouping")),
    responses(
        (status = 200, description = "Category groups", body = GroupedResponse),
        (status = 500, description = "Catalog unavailable", body = Suggestion)
    )
)]
pub async fn grouped_projects(
    State(state): State<SharedState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    match state.catalog.load().await {
        Ok(catalog) => Json(GroupedResponse::build(&catalog, search_term(&params))).into_response(),
        Err(e) => catalog_failure(&e),
    }
}

/// Detail view for one project
#[utoipa::path(
    get,
    path = "/api/v1/projects/{name}",
    tag = "projects",
    params(("name" = String, Path, description = "Exact project name")),
    responses(
        (status = 200, description = "Project detail", body = ProjectDetailResponse),
        (status = 404, description = "No project with that name", body = Suggestion),
        (status = 500, description = "Catalog unavailable", body = Suggestion)
    )
)]
pub async fn get_project(State(state): State<SharedState>, Path(name): Path<String>) -> Response {
    let catalog = match state.catalog.load().await {
        Ok(catalog) => catalog,
        Err(e) => return catalog_failure(&e),
    };

    match catalog.find(&name) {
        Some(record) => Json(ProjectDetailResponse::from(record)).into_response(),
        None => (StatusCode::NOT_FOUND, Json(Suggestion::not_found(&name))).into_response(),
    }
}

/// The catalog document itself, as the front end fetches it
///
/// Served byte for byte once it parses, so fields the API does not model go
/// through untouched.
pub async fn raw_catalog(State(state): State<SharedState>) -> Response {
    match state.catalog.load_raw().await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(e) => catalog_failure(&e),
    }
}
