//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 表单核心操作
    Calculate,
    Clear,

    // 焦点切换
    FocusNext,
    FocusPrevious,

    // 文本编辑
    Input(char), // 输入字符
    DeleteChar,  // Backspace

    // 错误弹窗
    DismissError,
}
