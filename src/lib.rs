//! Foodies Server - 餐饮下单网站后端
//!
//! # 架构概述
//!
//! - **内存存储** (`store`): 商品目录和订单，进程生命周期内存活
//! - **付款分类** (`payment`): 下单时一次性解析订单终态
//! - **服务层** (`services`): 订单接收编排、默认菜单
//! - **数据库** (`db`): SQLite 持久化联系消息
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! src/
//! ├── core/      # 配置、状态、服务器、启动错误
//! ├── models/    # 数据模型 (wire shapes)
//! ├── store/     # 内存存储 (id 分配、目录、订单)
//! ├── payment/   # 付款方式分类
//! ├── services/  # 订单服务、默认菜单
//! ├── db/        # SQLite 连接池和仓库
//! ├── api/       # HTTP 路由和处理器
//! └── utils/     # 错误、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod models;
pub mod payment;
pub mod services;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use services::OrderService;
pub use store::{CatalogStore, IdAllocator, OrderStore};
pub use utils::logger::init_logger;
pub use utils::{AppError, AppResult};

pub fn print_banner() {
    println!(
        r#"
    ______                ___
   / ____/___  ____  ____/ (_)__  _____
  / /_  / __ \/ __ \/ __  / / _ \/ ___/
 / __/ / /_/ / /_/ / /_/ / /  __(__  )
/_/    \____/\____/\__,_/_/\___/____/
    "#
    );
}
