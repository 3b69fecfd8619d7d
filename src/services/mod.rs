//! 服务层
//!
//! - [`OrderService`] - 订单接收编排
//! - [`seed`] - 默认菜单安装

pub mod order_service;
pub mod seed;

pub use order_service::OrderService;
