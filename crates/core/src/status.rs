//! Status code resolution

use crate::DomainError;
use std::error::Error;

/// Status used when nothing more specific is known
pub const DEFAULT_STATUS: i64 = 500;

/// Map a well-known error name to its HTTP-like status
pub fn status_for_name(name: &str) -> Option<i64> {
    let status = match name {
        "bad_request" | "query_parse_error" => 400,
        "unauthorized" => 401,
        "forbidden" => 403,
        "not_found" => 404,
        "method_not_allowed" => 405,
        "conflict" => 409,
        "file_exists" | "precondition_failed" => 412,
        "bad_content_type" => 415,
        "internal_server_error" => 500,
        "not_implemented" => 501,
        "service_unavailable" => 503,
        _ => return None,
    };
    Some(status)
}

/// Status of an arbitrary error.
///
/// `None` resolves to `0`. Otherwise the `source()` chain is walked and the
/// status of the first [`DomainError`] found is returned, or
/// [`DEFAULT_STATUS`] if there is none.
pub fn http_status(err: Option<&(dyn Error + 'static)>) -> i64 {
    let Some(mut current) = err else {
        return 0;
    };

    loop {
        if let Some(domain) = current.downcast_ref::<DomainError>() {
            return domain.status();
        }
        match current.source() {
            Some(next) => current = next,
            None => return DEFAULT_STATUS,
        }
    }
}
