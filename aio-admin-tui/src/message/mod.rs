//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event / Backend → Update 之间的桥梁。
//! 所有的用户操作、定时事件和异步请求结果都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod api;            // 后端请求完成事件
//!         mod app;            // 主消息
//!         mod content;        // 内容面板子消息
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 导航栏子消息
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             ToggleFocus,                        // 切换焦点面板
//!             Navigation(NavigationMessage),      // 导航面板子消息
//!             Content(ContentMessage),            // 内容面板子消息
//!             Modal(ModalMessage),                // 弹窗子消息
//!             Api(ApiEvent),                      // 异步请求完成
//!             Tick,                               // 定时检查（提示过期、搜索防抖）
//!             GoBack,                             // 返回/关闭
//!             Refresh,                            // 重新加载当前页面
//!             ShowHelp,                           // 显示帮助
//!             Noop,                               // 无操作
//!         }
//!
//!
//! 消息有两个来源：
//!
//!     1. 键盘事件：src/event/handler.rs 中的 handle_event() 把按键翻译成消息
//!
//!     2. 后端任务：src/backend/registry_service.rs 中每个请求都在 tokio
//!        运行时上执行，完成后把 AppMessage::Api(..) 发回主循环的通道
//!
//!                ┌──────────┐    AppMessage    ┌──────────┐
//!                │  Event   │ ───────────────▶ │          │
//!                └──────────┘                  │  Update  │
//!                ┌──────────┐  AppMessage::Api │          │
//!                │ Backend  │ ───────────────▶ │          │
//!                └──────────┘   (mpsc 通道)    └──────────┘
//!
//!     主循环一次只处理一条消息，因此 Update 层的处理函数不会并发执行。
//!

mod api;
mod app;
mod content;
mod modal;
mod navigation;

pub use api::ApiEvent;
pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
