//! 用户资源：模型、存储、服务与处理器

pub mod handler;
pub mod id;
pub mod model;
pub mod service;
pub mod store;

use axum::{routing::get, Router};

pub use handler::AppState;
pub use id::IdStrategy;
pub use model::{seed_users, User, UserPayload};
pub use service::UserService;
pub use store::UserStore;

/// `/users` 路由
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(handler::list_users).post(handler::create_user),
        )
        .route("/users/", get(handler::list_users))
        .route(
            "/users/:id",
            get(handler::get_user)
                .put(handler::upsert_user)
                .delete(handler::remove_user),
        )
}
