mod bmi;
mod config;
mod ui;

use std::io;
use std::path::PathBuf;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::{Theme, load_theme};
use crate::ui::{App, render};

/// 获取主题配置文件路径 (~/.config/bmical/theme.toml)
fn get_theme_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bmical").join("theme.toml"))
}

fn main() -> io::Result<()> {
    // 加载主题，没有配置文件时使用默认值
    let theme = match get_theme_path() {
        Some(path) => load_theme(&path)?,
        None => Theme::default(),
    };

    // 创建应用状态
    let mut app = App::new(theme);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press {
                if ui::handle_key_event(app, key.code)? {
                    break;
                }
            }
        }
    }
    Ok(())
}
