//! 核心响应处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

/// 成功响应的状态分类
#[derive(Debug)]
pub enum ApiResponse<T> {
    /// 200，JSON 响应体
    Ok(T),
    /// 201，JSON 响应体
    Created(T),
    /// 204，无响应体
    NoContent,
}

impl<T> ApiResponse<T> {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiResponse::Ok(_) => StatusCode::OK,
            ApiResponse::Created(_) => StatusCode::CREATED,
            ApiResponse::NoContent => StatusCode::NO_CONTENT,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiResponse::Ok(data) | ApiResponse::Created(data) => (status, Json(data)).into_response(),
            ApiResponse::NoContent => status.into_response(),
        }
    }
}
