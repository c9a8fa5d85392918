//! Error taxonomy shared by the API clients.
//!
//! All variants propagate to the caller (fail-open). The one exception in this
//! crate is the content safety gate, which converts every failure into an
//! "unsafe" verdict instead of returning an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-success HTTP status from the remote service.
    #[error("API请求失败: {status} {message}")]
    RemoteService { status: u16, message: String },

    /// Body present but missing the expected fields, or not parseable at all.
    #[error("响应解析失败: {0}")]
    MalformedResponse(String),

    /// Connectivity failure below the HTTP layer (DNS, TLS, timeout).
    #[error("网络请求失败: {0}")]
    Transport(String),

    /// Request was never issued: no API key configured.
    #[error("API密钥未配置，请在设置中配置SiliconFlow API密钥")]
    MissingApiKey,
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match &err {
            ureq::Error::StatusCode(code) => ApiError::RemoteService {
                status: *code,
                message: err.to_string(),
            },
            _ => ApiError::Transport(err.to_string()),
        }
    }
}
