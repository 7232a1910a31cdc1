//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 &App，把状态画到终端上，不修改任何状态。
//! 唯一的例外是主题：当前主题保存在 theme.rs 的原子变量中，
//! 由 Update 层在切换主题时写入，渲染时读取。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局（标题栏 / 导航 / 内容 / 状态栏 / 弹窗）
//!         mod components;     // 跨页面复用的组件
//!         mod pages;          // 各页面内容
//!         pub mod theme;      // 主题与样式
//!
//!
//!     布局：
//!         ┌──────────────────────────────────────────────┐
//!         │ 标题栏：应用名 + 版本 + API 地址              │
//!         ├──────────┬───────────────────────────────────┤
//!         │  导航    │  当前页面                          │
//!         │  20%     │  80%                              │
//!         │          │  搜索框 / 卡片列表 / 分页器        │
//!         ├──────────┴───────────────────────────────────┤
//!         │ 状态栏：快捷键提示 + 提示消息                 │
//!         └──────────────────────────────────────────────┘
//!
//!     弹窗在最后绘制，覆盖在所有内容之上。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
