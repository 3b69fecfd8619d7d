use std::sync::Arc;

use sqlx::SqlitePool;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::services::{OrderService, seed};
use crate::store::{CatalogStore, OrderStore};

/// 服务器状态 - 持有所有共享资源的单例引用
///
/// Constructed once at process start and cloned into every handler via
/// axum `State` — no ambient/static access anywhere.
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | catalog | 商品目录 (内存) |
/// | orders | 订单存储 (内存) |
/// | order_service | 订单接收服务 |
/// | pool | SQLite 连接池 (联系消息) |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub catalog: Arc<CatalogStore>,
    pub orders: Arc<OrderStore>,
    pub order_service: OrderService,
    pub pool: SqlitePool,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 数据库 (SQLite, 运行迁移)
    /// 2. 商品目录 (可选安装默认菜单)
    /// 3. 订单存储和订单服务
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_path)
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;

        let catalog = Arc::new(CatalogStore::new());
        if config.seed_catalog {
            seed::install_default_menu(&catalog);
        }

        let orders = Arc::new(OrderStore::new());
        let order_service = OrderService::new(orders.clone());

        Ok(Self {
            config: config.clone(),
            catalog,
            orders,
            order_service,
            pool: db.pool,
        })
    }
}
