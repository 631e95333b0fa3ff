//! # Search API
//!
//! `GET /api/search?q=<term>`. Always answers 200 for a readable catalog:
//! either the matching projects or a structured suggestion.

use axum::{
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use designkit_core::{query, QueryResult};
use serde::Serialize;

use super::{catalog_failure, ProjectResponse, Suggestion};
use crate::app::SharedState;

/// Body of a search reply
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SearchResponse {
    Matches(Vec<ProjectResponse>),
    Suggestion(Suggestion),
}

impl SearchResponse {
    pub fn from_result(result: QueryResult<'_>, term: Option<&str>) -> Self {
        match result {
            QueryResult::Matches(found) => {
                Self::Matches(found.into_iter().map(ProjectResponse::from).collect())
            }
            QueryResult::EmptyWithQuery => {
                Self::Suggestion(Suggestion::no_results(term.unwrap_or_default()))
            }
            QueryResult::NoQuery => Self::Suggestion(Suggestion::no_query()),
        }
    }
}

/// The first `q` value among the query parameters
pub fn search_term(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.as_str())
}

/// Reply for any verb other than GET
pub fn method_not_allowed(method: &Method) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET")],
        format!("Method {} Not Allowed", method),
    )
        .into_response()
}

/// Search projects by name
#[utoipa::path(
    get,
    path = "/api/search",
    tag = "search",
    params(("q" = Option<String>, Query, description = "Case-insensitive substring of the project name")),
    responses(
        (status = 200, description = "Matching projects, or a Suggestion object when there is no query or no match", body = Vec<ProjectResponse>),
        (status = 405, description = "Only GET is supported"),
        (status = 500, description = "Catalog unavailable", body = Suggestion)
    )
)]
pub async fn search(
    method: Method,
    State(state): State<SharedState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    if method != Method::GET {
        tracing::debug!(%method, "Rejected search request");
        return method_not_allowed(&method);
    }

    let catalog = match state.catalog.load().await {
        Ok(catalog) => catalog,
        Err(e) => return catalog_failure(&e),
    };

    let term = search_term(&params);
    let result = query(catalog.records(), term);
    tracing::debug!(term = ?term, matched = result.is_match(), "Search handled");

    Json(SearchResponse::from_result(result, term)).into_response()
}
