//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::{App, AppMode, InputField};
use crate::bmi::ErrorReason;
use components::{render_dialog_framework, render_input_widget};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(3), // 体重输入
            Constraint::Length(3), // 身高输入
            Constraint::Length(4), // 结果
            Constraint::Min(0),    // 填充
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);
    render_weight_input(frame, app, chunks[1]);
    render_height_input(frame, app, chunks[2]);
    render_result(frame, app, chunks[3]);
    render_help(frame, app, chunks[5]);

    // 渲染弹窗
    if let AppMode::ErrorDialog(reason) = &app.mode {
        render_error_dialog(frame, *reason);
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new("⚖️ BMI 计算器")
        .style(
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_weight_input(frame: &mut Frame, app: &App, area: Rect) {
    render_input_widget(
        frame,
        area,
        "体重",
        &app.weight_input,
        "kg",
        app.focus == InputField::Weight && app.mode == AppMode::Normal,
        app.weight_error,
        app.theme.accent,
    );
}

fn render_height_input(frame: &mut Frame, app: &App, area: Rect) {
    render_input_widget(
        frame,
        area,
        "身高",
        &app.height_input,
        "m",
        app.focus == InputField::Height && app.mode == AppMode::Normal,
        app.height_error,
        app.theme.accent,
    );
}

fn render_result(frame: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(result) = &app.result {
        format!("BMI:  {}\n状态: {}", result.formatted(), result.category)
    } else {
        "输入体重和身高后按 Enter 计算".to_string()
    };

    let result = Paragraph::new(content)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().title("结果").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    frame.render_widget(result, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.mode {
        AppMode::Normal => {
            "[0-9 .] 输入  [Tab/↑↓] 切换输入框  [Enter] 计算  [c] 清空  [q] 退出"
        }
        AppMode::ErrorDialog(_) => "[Enter/Esc] 关闭提示",
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_error_dialog(frame: &mut Frame, reason: ErrorReason) {
    let area = centered_rect(60, 25, frame.area());
    let title = format!("⚠️ {}", reason.title());
    let inner = render_dialog_framework(frame, area, &title, Color::Red);

    let dialog = Paragraph::new(format!("{}\n\n[Enter] OK", reason.message()))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });

    frame.render_widget(dialog, inner);
}
