//! HTTP rendering of domain errors.
//!
//! Every failure leaves the API as the JSON [`Error`] payload. That covers
//! handler errors and the extractor failures actix would otherwise answer
//! in plain text: malformed login, signup and support bodies, and
//! unparsable query strings such as `maxPrice=cheap`.

use actix_web::http::header::{self, HeaderValue};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

pub use crate::domain::ApiResult;

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = if status.is_server_error() {
            error!(trace_id = self.trace_id(), message = self.message(), "request failed");
            self.redacted()
        } else {
            debug!(
                trace_id = self.trace_id(),
                code = ?self.code(),
                message = self.message(),
                "request rejected"
            );
            self.clone()
        };

        let mut builder = HttpResponse::build(status);
        builder.insert_header((header::CACHE_CONTROL, HeaderValue::from_static("no-store")));
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(body)
    }
}

impl Error {
    /// Wire form of a server error: the generic message and trace id only.
    fn redacted(&self) -> Self {
        let generic = Self::internal("Internal server error");
        match self.trace_id() {
            Some(id) => generic.with_trace_id(id.to_owned()),
            None => generic,
        }
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("Internal server error")
    }
}

/// JSON body settings that report malformed bodies as `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        Error::invalid_request(format!("Malformed request body: {err}"))
            .with_details(json!({ "code": "malformed_body" }))
            .into()
    })
}

/// Query string settings that report unparsable values as `invalid_request`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        Error::invalid_request(format!("Malformed query string: {err}"))
            .with_details(json!({ "code": "malformed_query" }))
            .into()
    })
}
