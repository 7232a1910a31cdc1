//!
//! src/backend/mod.rs
//! Backend 层：后端服务与配置
//!
//! Backend 层与 UI 完全解耦，
//! 通过 aio-admin-core 的 RegistryApi 访问账户/模型注册中心。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config;                 // 配置文件（JSON）
//!         mod registry_service;       // 注册中心服务（异步任务 + 消息回传）
//!
//!         #[cfg(test)]
//!         pub mod mock;               // 内存注册中心（测试用）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、注册中心服务（RegistryService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/registry_service.rs 中定义：
//!
//!         RegistryService 持有三样东西：
//!             - Arc<dyn RegistryApi>      实际的 HTTP 客户端（测试时换成 Mock）
//!             - tokio Handle              运行时句柄
//!             - UnboundedSender           发回主循环的通道
//!
//!         每个方法都只负责“发起”请求：
//!             1. 在运行时上 spawn 一个任务
//!             2. 任务中调用 RegistryApi
//!             3. 把结果包装成 AppMessage::Api(ApiEvent::..) 发回主循环
//!
//!         Update 层调用这些方法后立即返回，不会阻塞界面；
//!         请求不可取消，后到的结果覆盖先到的结果。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置（FileConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config.rs 中定义：
//!
//!         存储位置：~/.config/aio-admin-tui/config.json
//!
//!         字段：api_base_url / language / page_size / request_timeout_secs / theme
//!
//!         文件不存在时使用默认值；文件损坏时记录警告并使用默认值。
//!         切换语言或主题时写回文件。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在弹窗中按 Enter 提交
//!         ↓
//!     Update 层处理 ModalMessage::Confirm，先做本地校验
//!         ↓
//!     校验通过后调用 RegistryService 的相应方法
//!         ↓
//!     tokio 任务调用 RegistryApi（HTTP）
//!         ↓
//!     结果经通道回到主循环，成为 AppMessage::Api
//!         ↓
//!     Update 层关闭弹窗、提示结果并重新加载当前页
//!         ↓
//!     View 层重新渲染
//!

mod config;
mod registry_service;

#[cfg(test)]
pub mod mock;

pub use config::{
    load_or_default, AppConfig, ConfigError, ConfigService, FileConfigService, API_ENV_VAR,
};
pub use registry_service::RegistryService;
