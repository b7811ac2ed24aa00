//! Request-handling envelope for the food catalog.
//!
//! Maps catalog operations onto HTTP-style `status + JSON body` responses
//! and resolves where the backing file lives.

mod api;
mod config;

pub use api::{
    delete, list, search, update, ApiError, ApiResponse, DeletePayload, UpdatePayload,
};
pub use config::{resolve_data_path, DATA_PATH_ENV, DEFAULT_DATA_FILE};
