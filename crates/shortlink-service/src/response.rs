//! Maps service outcomes onto the uniform response envelope.
//!
//! This module is the single place where the internal outcome taxonomy
//! becomes wire status integers, so both operations stay consistent and
//! the mapping can be tested in isolation.

use shortlink_core::Link;
use shortlink_proto_schema::v1 as proto;

use crate::error::LinkError;

/// Wire status codes carried in the response envelope.
pub const STATUS_OK: i32 = 200;
pub const STATUS_INVALID_INPUT: i32 = 400;
pub const STATUS_NOT_FOUND: i32 = 404;
pub const STATUS_INTERNAL: i32 = 500;

const ERROR_INVALID_INPUT: &str = "empty or invalid url";
const ERROR_NOT_FOUND: &str = "not found";
const ERROR_INTERNAL: &str = "internal server error";

/// Shapes a service outcome into the response envelope.
///
/// Internal failure details never reach the caller: generation and
/// storage faults collapse to a generic message here and are logged at
/// the call site instead.
pub fn into_envelope(result: Result<Link, LinkError>) -> proto::Response {
    match result {
        Ok(link) => proto::Response {
            code: STATUS_OK,
            error: String::new(),
            message: Some(proto::LinkMessage {
                id: link.short_code.to_string(),
                url: link.original_url,
            }),
        },
        Err(err) => {
            let (code, error) = match err {
                LinkError::InvalidInput(_) => (STATUS_INVALID_INPUT, ERROR_INVALID_INPUT),
                LinkError::NotFound => (STATUS_NOT_FOUND, ERROR_NOT_FOUND),
                LinkError::Generation(_) | LinkError::Storage(_) => {
                    (STATUS_INTERNAL, ERROR_INTERNAL)
                }
            };
            proto::Response {
                code,
                error: error.to_string(),
                message: None,
            }
        }
    }
}
