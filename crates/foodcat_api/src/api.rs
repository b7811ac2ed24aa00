//! Use-case endpoints with status codes and JSON payloads.
//!
//! # Responsibility
//! - Turn request bodies into service calls and results into responses.
//! - Map validation and lookup failures to `400` / `404`.
//!
//! # Invariants
//! - `list`, `search` and `update` let storage failures escape as `Err`.
//! - `delete` never returns `Err`: any unexpected failure becomes a `500`.
//! - Failure bodies are `{"error": message}` and carry no record data.

use foodcat_core::{FoodService, FoodStore, MutationError, StoreError, UpdateRequest};
use log::{info, warn};
use serde::Deserialize;
use serde_json::{json, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

const STATUS_OK: u16 = 200;
const STATUS_BAD_REQUEST: u16 = 400;
const STATUS_NOT_FOUND: u16 = 404;
const STATUS_INTERNAL_ERROR: u16 = 500;

const MISSING_FOOD_NAME: &str = "food_name is required.";
const MISSING_FOOD_NAME_FOR_DELETE: &str = "food_name is required to delete.";
const NO_MATCHING_ROW: &str = "No row matches this food_name.";

/// Status code plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn ok(body: Value) -> Self {
        Self {
            status: STATUS_OK,
            body,
        }
    }

    fn failure(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure that escapes an endpoint instead of becoming a response.
#[derive(Debug)]
pub enum ApiError {
    /// Request body or response payload is not valid JSON for its shape.
    Payload(serde_json::Error),
    Store(StoreError),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Payload(err) => write!(f, "invalid payload: {err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Payload(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        Self::Payload(value)
    }
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Body of an update request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdatePayload {
    pub food_name: Option<String>,
    pub new_name: Option<String>,
    pub restore: Option<bool>,
}

/// Body of a delete request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeletePayload {
    pub food_name: Option<String>,
}

/// `GET` listing: `{data, stats: {total, active, deleted}}`.
pub fn list<S: FoodStore>(service: &FoodService<S>) -> Result<ApiResponse, ApiError> {
    let result = service.list()?;
    info!(
        "event=api_request module=api op=list status=ok rows={}",
        result.data.len()
    );
    Ok(ApiResponse::ok(serde_json::to_value(result)?))
}

/// `GET` keyword search. A missing query is treated as blank.
pub fn search<S: FoodStore>(
    service: &FoodService<S>,
    query: Option<&str>,
) -> Result<ApiResponse, ApiError> {
    let result = service.search(query.unwrap_or_default())?;
    info!(
        "event=api_request module=api op=search status=ok rows={}",
        result.data.len()
    );
    Ok(ApiResponse::ok(serde_json::to_value(result)?))
}

/// `POST` update from a JSON body: `{updated: record}` on success.
pub fn update<S: FoodStore>(
    service: &FoodService<S>,
    body: &str,
) -> Result<ApiResponse, ApiError> {
    let payload: UpdatePayload = serde_json::from_str(body)?;
    let request = UpdateRequest {
        food_name: payload.food_name,
        new_name: payload.new_name,
        restore: payload.restore.unwrap_or(false),
    };

    match service.update(&request) {
        Ok(record) => {
            info!("event=api_request module=api op=update status=ok http_status={STATUS_OK}");
            let updated = serde_json::to_value(record)?;
            Ok(ApiResponse::ok(json!({ "updated": updated })))
        }
        Err(MutationError::MissingFoodName) => {
            Ok(rejected("update", STATUS_BAD_REQUEST, MISSING_FOOD_NAME))
        }
        Err(MutationError::NotFound(_)) => {
            Ok(rejected("update", STATUS_NOT_FOUND, NO_MATCHING_ROW))
        }
        Err(MutationError::Store(err)) => Err(err.into()),
    }
}

/// `POST` soft-delete from a JSON body: `{deleted: record}` on success.
///
/// Unlike the other endpoints, unexpected failures (bad body, storage) are
/// reported as a `500` response carrying the error message.
pub fn delete<S: FoodStore>(service: &FoodService<S>, body: &str) -> ApiResponse {
    match try_delete(service, body) {
        Ok(response) => response,
        Err(err) => {
            warn!("event=api_request module=api op=delete status=error http_status={STATUS_INTERNAL_ERROR} error={err}");
            ApiResponse::failure(STATUS_INTERNAL_ERROR, err.to_string())
        }
    }
}

fn try_delete<S: FoodStore>(
    service: &FoodService<S>,
    body: &str,
) -> Result<ApiResponse, ApiError> {
    let payload: DeletePayload = serde_json::from_str(body)?;

    match service.delete(payload.food_name.as_deref()) {
        Ok(record) => {
            info!("event=api_request module=api op=delete status=ok http_status={STATUS_OK}");
            let deleted = serde_json::to_value(record)?;
            Ok(ApiResponse::ok(json!({ "deleted": deleted })))
        }
        Err(MutationError::MissingFoodName) => Ok(rejected(
            "delete",
            STATUS_BAD_REQUEST,
            MISSING_FOOD_NAME_FOR_DELETE,
        )),
        Err(MutationError::NotFound(_)) => {
            Ok(rejected("delete", STATUS_NOT_FOUND, NO_MATCHING_ROW))
        }
        Err(MutationError::Store(err)) => Err(err.into()),
    }
}

fn rejected(op: &str, status: u16, message: &str) -> ApiResponse {
    info!("event=api_request module=api op={op} status=rejected http_status={status}");
    ApiResponse::failure(status, message)
}

#[cfg(test)]
mod tests {
    use super::{delete, update, ApiError};
    use foodcat_core::{FoodRecord, FoodService, FoodTable, MemoryFoodStore};

    fn service() -> FoodService<MemoryFoodStore> {
        FoodService::new(MemoryFoodStore::new(FoodTable::with_records(vec![
            FoodRecord::named("Apple"),
        ])))
    }

    #[test]
    fn update_rejects_malformed_body_as_error() {
        let err = update(&service(), "not json").unwrap_err();
        assert!(matches!(err, ApiError::Payload(_)));
    }

    #[test]
    fn non_boolean_restore_is_a_payload_error() {
        let err = update(&service(), r#"{"food_name":"Apple","restore":1}"#).unwrap_err();
        assert!(matches!(err, ApiError::Payload(_)));

        let response = delete(&service(), r#"{"food_name":7}"#);
        assert_eq!(response.status, 500);
    }

    #[test]
    fn delete_turns_malformed_body_into_500() {
        let response = delete(&service(), "not json");
        assert_eq!(response.status, 500);
        assert!(response.body["error"].is_string());
    }

    #[test]
    fn update_restore_defaults_to_false() {
        let service = service();
        delete(&service, r#"{"food_name":"Apple"}"#);

        let response = update(&service, r#"{"food_name":"Apple"}"#).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body["updated"]["deleted"], true);
    }
}
