//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断顺序：
//!                 1. Ctrl+C 无论何时都退出
//!                 2. 有弹窗打开时，调用 handle_modal_keys 处理
//!                 3. 搜索框或调试页下拉框正在输入时，普通字符全部交给输入框
//!                 4. 全局快捷键（Alt+h 帮助、Alt+r 刷新、Esc 返回、Tab 切换面板、Alt+q 退出）
//!                 5. 焦点位于导航面板，调用 handle_navigation_keys 处理
//!                 6. 焦点位于内容面板，调用 handle_content_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     账户表单：
//!         Tab / ↓          下一个字段（编辑时跳过名称）
//!         Shift+Tab / ↑    上一个字段
//!         Alt+v            显示/隐藏 API Key
//!         Enter            提交
//!
//!     模型表单：
//!         Tab / Shift+Tab  切换字段
//!         ← →              切换服务商 / 启用状态
//!         ↑ ↓              在关联模型列表中移动光标
//!         Space            勾选光标所在行（第一行为“自定义”）
//!         Alt+s            全选/全不选当前可见的行
//!         Enter            校验并提交
//!
//!     删除确认：
//!         Tab / ← →        在“取消”和“确认”之间切换
//!         Enter            执行
//!
//!     所有弹窗中 Esc 都会关闭弹窗。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
