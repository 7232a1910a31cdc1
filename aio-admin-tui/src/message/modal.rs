//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 切换选项（左），用于服务商与启用状态
    CyclePrev,

    /// 切换选项（右）
    CycleNext,

    /// 关联模型列表光标上移
    CursorUp,

    /// 关联模型列表光标下移
    CursorDown,

    /// 勾选/取消光标所在行
    Check,

    /// 全选/全不选可见行
    SelectAll,

    /// 确认/提交
    Confirm,

    /// 在确认删除弹窗中切换焦点
    ToggleDeleteFocus,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 切换 API Key 可见性
    ToggleSecrets,
}
