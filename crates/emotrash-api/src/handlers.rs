//! Route handlers
//!
//! Status mapping follows the original service contract: validation
//! failures and missing ids are 400 with the specific message, store
//! failures are 500 with an opaque body (detail only logged).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use emotrash_core::{
    validate, CreateRequest, EmotionError, EmotionRecord, ListFilter, ListQuery, PatchRequest,
    ReplaceRequest, Sort,
};
use emotrash_store::EmotionGateway;

use crate::state::AppState;

/// Wire shape of an error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// Wire shape of a mutation acknowledgement
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Wire shape of a successful create
#[derive(Debug, Serialize)]
pub struct CreatedBody {
    pub id: i64,
}

/// Transport wrapper mapping the error taxonomy onto status codes
pub struct ApiError(EmotionError);

impl From<EmotionError> for ApiError {
    fn from(err: EmotionError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        if err.is_client_error() {
            tracing::info!(code = err.code(), error = %err, "request rejected");
            let body = ErrorBody {
                code: err.code(),
                message: err.to_string(),
            };
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        } else {
            // Never leak driver detail to the client
            tracing::error!(code = err.code(), error = %err, "request failed");
            let body = ErrorBody {
                code: err.code(),
                message: "internal server error".to_string(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

/// Query-string parameters of the list operation
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub content: Option<String>,
    pub subject: Option<String>,
    #[serde(rename = "useYn")]
    pub use_yn: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

impl ListParams {
    /// Translate wire parameters into a builder query
    ///
    /// `page` defaults to 1, `size` to 10; a blank `sort` means the
    /// default ordering.
    ///
    /// # Errors
    ///
    /// - `InvalidEnum` — sort outside the column/direction whitelist
    fn into_query(self) -> Result<ListQuery, EmotionError> {
        let sort = match self.sort.as_deref() {
            Some(sort) if !sort.trim().is_empty() => Some(Sort::parse(sort)?),
            _ => None,
        };

        Ok(ListQuery {
            filter: ListFilter {
                content: self.content,
                subject: self.subject,
                use_yn: self.use_yn,
            },
            page: self.page.unwrap_or(1),
            size: self.size.unwrap_or(10),
            sort,
        })
    }
}

/// POST /emotions
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateRequest>,
) -> Result<(StatusCode, Json<CreatedBody>), ApiError> {
    tracing::info!("create request received");

    validate::validate_create(&request)?;

    let conn = state.conn()?;
    let id = EmotionGateway::create(
        &conn,
        request.content.as_deref().unwrap_or_default(),
        request.subject.as_deref(),
    )?;
    Ok((StatusCode::CREATED, Json(CreatedBody { id })))
}

/// GET /emotions/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EmotionRecord>, ApiError> {
    tracing::info!(id, "detail request received");

    let conn = state.conn()?;
    let record = EmotionGateway::get_by_id(&conn, id)?;
    Ok(Json(record))
}

/// GET /emotions
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<EmotionRecord>>, ApiError> {
    tracing::info!(?params, "list request received");

    let query = params.into_query()?;
    let conn = state.conn()?;
    let records = EmotionGateway::list(&conn, &query)?;
    Ok(Json(records))
}

/// PUT /emotions/:id
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<ReplaceRequest>,
) -> Result<Json<MessageBody>, ApiError> {
    tracing::info!(id, "replace request received");

    let use_yn = validate::validate_replace(&request)?;

    let conn = state.conn()?;
    EmotionGateway::replace(
        &conn,
        id,
        request.content.as_deref().unwrap_or_default(),
        request.subject.as_deref(),
        use_yn,
    )?;
    Ok(Json(MessageBody { message: "record updated" }))
}

/// PATCH /emotions/:id
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<PatchRequest>,
) -> Result<Json<MessageBody>, ApiError> {
    tracing::info!(id, "patch request received");

    validate::validate_patch(&request)?;

    let conn = state.conn()?;
    EmotionGateway::patch(&conn, id, &request)?;
    Ok(Json(MessageBody { message: "record patched" }))
}

/// DELETE /emotions/:id
pub async fn soft_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageBody>, ApiError> {
    tracing::info!(id, "delete request received");

    let conn = state.conn()?;
    EmotionGateway::soft_delete(&conn, id)?;
    Ok(Json(MessageBody { message: "record deleted" }))
}
