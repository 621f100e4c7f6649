//! 访问日志中间件

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info};

/// 日志中的路由标签：优先取匹配到的路由模板（如 `/users/:id`），未命中路由时取原始路径
pub fn route_label(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string())
}

/// 按路由模板记录每次请求，5xx 以 error 级别输出
pub async fn access_log(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let route = route_label(&req);
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        error!(%method, route = %route, path = %path, status, elapsed_ms, "user request failed");
    } else {
        info!(%method, route = %route, path = %path, status, elapsed_ms, "user request");
    }

    response
}
