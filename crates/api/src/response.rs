//! Success-response envelope.

use serde::Serialize;

/// Wrapper every successful endpoint returns: `{ "data": ... }`. Failures
/// use the `{ "error", "code" }` shape from [`crate::error::AppError`], so
/// clients see exactly one of two body layouts.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
