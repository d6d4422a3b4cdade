use shared_types::AppError;

/// Convert a transport-level reqwest failure into an AppError.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if err.is_decode() {
        return AppError::decode(format!("Could not read the server response: {err}"));
    }
    if let Some(status) = err.status() {
        return AppError::from_response(status.as_u16(), "");
    }
    tracing::error!(error = %err, "request did not reach the API");
    AppError::network("Unable to reach the server. Check your connection and try again.")
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}
