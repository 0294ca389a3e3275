//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种状态转换方法

use super::actions::Action;
use super::state::{App, AppMode, InputField};
use crate::bmi;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::FocusNext | Action::FocusPrevious => self.toggle_focus(),

            Action::Input(c) => self.input_char(c),
            Action::DeleteChar => self.delete_char(),

            Action::Calculate => self.calculate(),
            Action::Clear => self.clear(),

            Action::DismissError => self.dismiss_error(),
        }
        false
    }

    // ============ 焦点切换 ============

    /// 在两个输入框之间切换焦点
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            InputField::Weight => InputField::Height,
            InputField::Height => InputField::Weight,
        };
    }

    // ============ 文本编辑 ============

    /// 向聚焦的输入框追加字符
    ///
    /// 输入层只放行数字和单个小数点，其余字符直接丢弃
    pub fn input_char(&mut self, c: char) {
        if self.mode != AppMode::Normal {
            return;
        }
        let buffer = self.focused_input();
        let accepted = c.is_ascii_digit() || (c == '.' && !buffer.contains('.'));
        if accepted {
            buffer.push(c);
        }
    }

    /// 删除聚焦输入框的末尾字符
    pub fn delete_char(&mut self) {
        if self.mode == AppMode::Normal {
            self.focused_input().pop();
        }
    }

    // ============ 计算/清空 ============

    /// 校验并计算 BMI
    ///
    /// 校验失败时弹出错误提示并标记出错的输入框，
    /// 上一次的计算结果保留在屏幕上
    pub fn calculate(&mut self) {
        match bmi::validate(&self.weight_input, &self.height_input) {
            Ok(input) => {
                self.weight_error = false;
                self.height_error = false;
                self.result = Some(bmi::evaluate(input));
            }
            Err(reason) => {
                let (weight_error, height_error) = reason.field_flags();
                self.weight_error = weight_error;
                self.height_error = height_error;
                self.mode = AppMode::ErrorDialog(reason);
            }
        }
    }

    /// 清空表单，回到初始状态
    pub fn clear(&mut self) {
        self.weight_input.clear();
        self.height_input.clear();
        self.result = None;
        self.weight_error = false;
        self.height_error = false;
        self.focus = InputField::Weight;
        self.mode = AppMode::Normal;
    }

    // ============ 错误弹窗 ============

    /// 关闭错误弹窗，表单保持可编辑，错误标记保留到下次计算成功
    pub fn dismiss_error(&mut self) {
        self.mode = AppMode::Normal;
    }
}
