//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// 请求体无法解码，消息即解码错误本身
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InternalServerError(String),
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::BadRequest(err.to_string())
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            // 404 不带响应体，消息只记录到日志
            CoreError::NotFound(msg) => {
                debug!(%status, "{}", msg);
                status.into_response()
            }
            CoreError::BadRequest(msg) | CoreError::InternalServerError(msg) => {
                (status, msg).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_maps_to_bad_request() {
        let err: CoreError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("EOF"));
    }

    #[test]
    fn test_not_found_status() {
        let response = CoreError::NotFound("gone".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
