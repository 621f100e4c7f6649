//! 应用层

pub mod users;

use std::{sync::Arc, time::Duration};

use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    core::middleware::access_log,
};
use users::{seed_users, AppState, UserService, UserStore};

/// 按配置构建用户存储
pub fn build_store(config: &Config) -> UserStore {
    let strategy = config.users.id_strategy;
    if config.users.seed {
        UserStore::with_users(strategy, seed_users())
    } else {
        UserStore::new(strategy)
    }
}

/// 组装完整的应用路由
pub fn build_router(config: &Config, store: Arc<UserStore>) -> Router {
    let state = AppState {
        user_service: UserService::new(store),
    };

    users::routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(access_log))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.http.timeout_seconds,
                )))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
