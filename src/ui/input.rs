//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::Clear),
            KeyCode::Enter => Some(Action::Calculate),
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrevious),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        AppMode::ErrorDialog(_) => match key {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DismissError),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(&app.mode, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::ErrorReason;

    #[test]
    fn test_normal_mode_keymap() {
        let mode = AppMode::Normal;
        assert_eq!(get_action(&mode, KeyCode::Enter), Some(Action::Calculate));
        assert_eq!(get_action(&mode, KeyCode::Char('c')), Some(Action::Clear));
        assert_eq!(get_action(&mode, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(get_action(&mode, KeyCode::Tab), Some(Action::FocusNext));
        assert_eq!(
            get_action(&mode, KeyCode::Char('7')),
            Some(Action::Input('7'))
        );
        assert_eq!(get_action(&mode, KeyCode::F(1)), None);
    }

    #[test]
    fn test_dialog_mode_keymap() {
        let mode = AppMode::ErrorDialog(ErrorReason::BothMissing);
        assert_eq!(get_action(&mode, KeyCode::Enter), Some(Action::DismissError));
        assert_eq!(get_action(&mode, KeyCode::Esc), Some(Action::DismissError));
        // 弹窗模式下不响应输入
        assert_eq!(get_action(&mode, KeyCode::Char('7')), None);
    }
}
