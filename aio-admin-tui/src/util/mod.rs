//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化/恢复，以及文件日志。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // tracing-subscriber + tracing-appender 文件日志
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     初始化终端：
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!             - 关闭字符回显
//!             - 捕获所有按键：包括 Ctrl+C、箭头键等特殊键
//!
//!         · Alternate Screen（备用屏幕）
//!             - TUI 在备用屏幕运行，退出后恢复原有内容
//!
//!     恢复终端：
//!         无论 app::run 成功与否，main.rs 都会先调用 restore_terminal，
//!         再返回结果。否则终端会停留在原始模式。
//!
//!
//!     日志：
//!         终端被界面占用，所以日志写入配置目录下的 logs/，按天滚动。
//!         代码中统一使用 log 宏，tracing-subscriber 负责接收并写入文件。
//!         init_logging 返回的 WorkerGuard 在 main 中持有到最后。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
