use serde::Serialize;

/// Standard envelope for successful responses carrying a payload.
///
/// Serializes as `{"data": ...}` so clients can distinguish payloads
/// from error bodies, which carry `error` and `code` fields instead.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
