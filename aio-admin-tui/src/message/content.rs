//! 内容面板消息
//!
//! 处理内容面板中的操作，如列表选择、增删改查、搜索与翻页

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// 确认（调试页打开/选中下拉框）
    Confirm,

    // ========== CRUD 操作 ==========
    Add,
    Edit,
    Delete,
    /// 切换启用状态
    Toggle,

    // ========== 分页 ==========
    PrevPage,
    NextPage,

    // ========== 文本输入（搜索框、下拉框） ==========
    /// 进入搜索框
    FocusSearch,
    Input(char),
    Backspace,
    /// 结束输入（离开搜索框或关闭下拉框）
    FinishInput,
    /// 清空搜索并立即重新加载
    ClearSearch,

    // ========== 调试页面专用 ==========
    /// 触发服务端缓存重新加载
    ReloadCache,

    // ========== 设置页面专用 ==========
    TogglePrev,
    ToggleNext,
}
