//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use crate::bmi::{BmiResult, ErrorReason};
use crate::config::Theme;

/// 应用状态
pub struct App {
    pub weight_input: String,
    pub height_input: String,
    pub focus: InputField,
    pub result: Option<BmiResult>,
    pub weight_error: bool,
    pub height_error: bool,
    pub mode: AppMode,
    pub theme: Theme,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    ErrorDialog(ErrorReason),
}

/// 输入字段类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Weight,
    Height,
}

impl App {
    /// 创建新的应用实例
    pub fn new(theme: Theme) -> Self {
        Self {
            weight_input: String::new(),
            height_input: String::new(),
            focus: InputField::Weight,
            result: None,
            weight_error: false,
            height_error: false,
            mode: AppMode::Normal,
            theme,
        }
    }

    /// 当前聚焦的输入缓冲区
    pub fn focused_input(&mut self) -> &mut String {
        match self.focus {
            InputField::Weight => &mut self.weight_input,
            InputField::Height => &mut self.height_input,
        }
    }
}
