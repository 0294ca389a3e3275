//! 通用 UI 组件
//!
//! 弹窗、输入框等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 带标题和单位后缀的输入框
///
/// 聚焦时用强调色加粗，出错时边框标红
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    suffix: &str,
    is_focused: bool,
    is_error: bool,
    accent: Color,
) {
    let border_color = if is_error {
        Color::Red
    } else if is_focused {
        accent
    } else {
        Color::Gray
    };

    let style = if is_focused {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    // 聚焦时在末尾显示光标占位符
    let cursor = if is_focused { "_" } else { "" };
    let text = format!("{}{}  {}", value, cursor, suffix);

    let input = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
    frame.render_widget(input, area);
}
