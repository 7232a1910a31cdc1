//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构与对自身字段的简单操作，
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面数据状态、弹窗、提示消息
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub reload_requested: bool,         // 重新加载标志（切换语言后置位）
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub navigation: NavigationState,    // 导航状态
//!             pub current_page: Page,             // 当前页面
//!             pub toast: Option<Toast>,           // 状态栏提示（自动消失）
//!             pub i18n: Translator,               // 翻译器
//!
//!             pub accounts / models / debug / settings,   // 各页面状态
//!             pub modal: ModalState,              // 弹窗状态
//!             pub backend: RegistryService,       // 后端服务句柄
//!         }
//!
//!     每个页面的状态都由 App 持有，View 层以 &App 读取并渲染，
//!     不存在任何模块级的全局可变状态。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、页面状态（state/）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     - AccountsState：服务端分页的账户列表 + 防抖搜索框 + 加载中标志
//!     - ModelsState：一次取回、本地按 10 条切片的模型列表 + 防抖搜索框
//!     - DebugState：调试模型缓存 + 可搜索下拉框 + 重新加载状态
//!     - SettingsState：设置项选中位置
//!
//!     加载中标志的语义不同：
//!         账户列表加载中时会丢弃重复的加载请求；
//!         模型列表没有这个保护，以最后到达的响应为准。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/modal.rs 中定义：
//!
//!         Modal 枚举：每种弹窗都是一个变体，携带该弹窗的所有数据
//!             - AccountForm(AccountForm)      添加/编辑账户
//!             - ModelForm(ModelForm)          添加/编辑模型（含关联模型选择）
//!             - ConfirmDelete { .. }          删除确认
//!             - Help                          帮助
//!
//!     关联模型的勾选逻辑在 aio_admin_core::association 中，
//!     ModelForm 只额外记录焦点与光标位置。
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::NavigationState;
pub use page::Page;
pub use state::{
    AccountsState, DebugState, ModalState, ModelsState, SettingsState, Toast, ToastKind,
};
