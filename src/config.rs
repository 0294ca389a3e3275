use std::fs;
use std::io;
use std::path::Path;

use ratatui::style::Color;
use serde::Deserialize;

/// TOML 配置文件结构
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ThemeConfig {
    pub accent: Option<String>,
}

/// 运行时主题
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
        }
    }
}

impl Theme {
    pub fn from_config(config: ThemeConfig) -> Self {
        let accent = config
            .accent
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(Color::Cyan);
        Self { accent }
    }
}

/// 颜色名解析，未知名称返回 None
fn parse_color(name: &str) -> Option<Color> {
    match name.to_ascii_lowercase().as_str() {
        "cyan" => Some(Color::Cyan),
        "blue" => Some(Color::Blue),
        "green" => Some(Color::Green),
        "magenta" => Some(Color::Magenta),
        "yellow" => Some(Color::Yellow),
        "red" => Some(Color::Red),
        "white" => Some(Color::White),
        "gray" => Some(Color::Gray),
        _ => None,
    }
}

/// 从TOML文件加载主题，文件不存在时使用默认值
pub fn load_theme(path: &Path) -> io::Result<Theme> {
    if !path.exists() {
        return Ok(Theme::default());
    }

    let content = fs::read_to_string(path)?;
    let config: ThemeConfig =
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(Theme::from_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accent() {
        assert_eq!(Theme::default().accent, Color::Cyan);
        assert_eq!(Theme::from_config(ThemeConfig::default()).accent, Color::Cyan);
    }

    #[test]
    fn test_accent_override() {
        let config: ThemeConfig = toml::from_str("accent = \"magenta\"").unwrap();
        assert_eq!(Theme::from_config(config).accent, Color::Magenta);
    }

    #[test]
    fn test_unknown_color_falls_back() {
        let config = ThemeConfig {
            accent: Some("chartreuse".to_string()),
        };
        assert_eq!(Theme::from_config(config).accent, Color::Cyan);
    }

    #[test]
    fn test_parse_color_case_insensitive() {
        assert_eq!(parse_color("Green"), Some(Color::Green));
        assert_eq!(parse_color("RED"), Some(Color::Red));
        assert_eq!(parse_color(""), None);
    }
}
