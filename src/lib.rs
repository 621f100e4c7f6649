//! # 用户资源服务
//!
//! 基于 Axum 的内存用户 CRUD 服务：
//! - `GET /users` 列出全部用户
//! - `GET /users/:id` 查询单个用户
//! - `PUT /users/:id` 按 ID 创建或覆盖
//! - `POST /users` 生成 ID 并创建
//! - `DELETE /users/:id` 删除用户

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{build_router, build_store};
pub use config::{Config, ConfigError};
pub use crate::core::error::CoreError;
