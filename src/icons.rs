//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks. It also owns
//! the catalogue of project icons and colors offered by the project editor.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

impl IconTheme {
    pub fn label(self) -> &'static str {
        match self {
            IconTheme::Emoji => "Emoji",
            IconTheme::Unicode => "Unicode",
            IconTheme::Ascii => "ASCII",
        }
    }
}

/// Project icon ids, in picker order
pub const PROJECT_ICON_IDS: &[&str] = &[
    "folder",
    "folder-open",
    "folder-git",
    "folder-code",
    "folder-heart",
    "folder-key",
    "folder-lock",
    "folder-cog",
    "box",
    "package",
    "boxes",
    "code",
    "code-2",
    "terminal",
    "braces",
    "file-code",
    "file-json",
    "globe",
    "server",
    "database",
    "cloud",
    "rocket",
    "zap",
    "star",
    "heart",
    "bookmark",
    "flag",
    "target",
    "lightbulb",
    "puzzle",
    "cpu",
    "smartphone",
    "monitor",
    "gamepad",
    "music",
    "camera",
    "palette",
    "pen-tool",
];

/// Project icon colors, in picker order
pub const PROJECT_COLORS: &[&str] = &[
    "#737373", "#ef4444", "#f97316", "#eab308", "#22c55e", "#14b8a6", "#0ea5e9", "#3b82f6", "#8b5cf6", "#ec4899",
];

/// Env file and panel icons
#[derive(Debug, Clone)]
pub struct EnvIcons {
    pub file: &'static str,
    pub active: &'static str,
    pub inactive: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub projects_title: &'static str,
    pub env_title: &'static str,
    pub viewer_title: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
    pub settings: &'static str,
    pub refreshing: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub env: EnvIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            env: EnvIcons {
                file: "📄",
                active: "🟢",
                inactive: "⚪",
            },
            ui: UiIcons {
                projects_title: "📁",
                env_title: "🔐",
                viewer_title: "👁",
                error: "❌",
                info: "💡",
                warning: "⚠️",
                success: "✅",
                settings: "⚙️",
                refreshing: "🔄",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            env: EnvIcons {
                file: "≡",
                active: "●",
                inactive: "○",
            },
            ui: UiIcons {
                projects_title: "▤",
                env_title: "◈",
                viewer_title: "◉",
                error: "✗",
                info: "ℹ",
                warning: "⚠",
                success: "✓",
                settings: "⚙",
                refreshing: "⟳",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            env: EnvIcons {
                file: "-",
                active: "*",
                inactive: " ",
            },
            ui: UiIcons {
                projects_title: "#",
                env_title: "$",
                viewer_title: ">",
                error: "!",
                info: "i",
                warning: "!",
                success: "+",
                settings: "%",
                refreshing: "~",
            },
        }
    }

    pub fn env_active(&self) -> &'static str {
        self.icons().env.active
    }

    pub fn env_inactive(&self) -> &'static str {
        self.icons().env.inactive
    }

    pub fn env_file(&self) -> &'static str {
        self.icons().env.file
    }

    pub fn projects_title(&self) -> &'static str {
        self.icons().ui.projects_title
    }

    pub fn env_title(&self) -> &'static str {
        self.icons().ui.env_title
    }

    pub fn viewer_title(&self) -> &'static str {
        self.icons().ui.viewer_title
    }

    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }

    pub fn settings(&self) -> &'static str {
        self.icons().ui.settings
    }

    pub fn refreshing(&self) -> &'static str {
        self.icons().ui.refreshing
    }

    /// Glyph for a project icon id; unknown ids render as a folder
    pub fn project_icon(&self, icon_id: &str) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => match icon_id {
                "folder-open" => "📂",
                "folder-git" | "code" | "code-2" | "braces" | "file-code" | "file-json" => "🧩",
                "folder-code" | "terminal" => "💻",
                "folder-heart" | "heart" => "❤️",
                "folder-key" | "folder-lock" => "🔒",
                "folder-cog" | "cpu" => "⚙️",
                "box" | "package" | "boxes" => "📦",
                "globe" => "🌐",
                "server" | "database" => "🗄️",
                "cloud" => "☁️",
                "rocket" => "🚀",
                "zap" => "⚡",
                "star" => "⭐",
                "bookmark" | "flag" => "🚩",
                "target" => "🎯",
                "lightbulb" => "💡",
                "puzzle" => "🧩",
                "smartphone" => "📱",
                "monitor" => "🖥️",
                "gamepad" => "🎮",
                "music" => "🎵",
                "camera" => "📷",
                "palette" | "pen-tool" => "🎨",
                _ => "📁",
            },
            IconTheme::Unicode => match icon_id {
                "folder-open" => "▭",
                "folder-git" | "code" | "code-2" | "braces" | "file-code" | "file-json" => "⟨⟩",
                "folder-code" | "terminal" => "▸",
                "folder-heart" | "heart" => "♥",
                "folder-key" | "folder-lock" => "⚿",
                "folder-cog" | "cpu" => "⚙",
                "box" | "package" | "boxes" => "▣",
                "globe" | "cloud" => "◍",
                "server" | "database" => "◫",
                "rocket" | "zap" => "↯",
                "star" | "bookmark" | "flag" | "target" => "★",
                "lightbulb" => "✧",
                "music" => "♪",
                _ => "▤",
            },
            IconTheme::Ascii => match icon_id {
                "folder-git" | "code" | "code-2" | "braces" | "file-code" | "file-json" => "<>",
                "folder-code" | "terminal" => ">_",
                "folder-key" | "folder-lock" => "[k]",
                "box" | "package" | "boxes" => "[=]",
                "server" | "database" => "[db]",
                "star" | "bookmark" | "flag" | "target" => "*",
                _ => "[]",
            },
        }
    }

    /// Next icon id in picker order, wrapping around
    pub fn next_project_icon(current: &str) -> &'static str {
        cycle(PROJECT_ICON_IDS, current)
    }

    /// Next color in picker order, wrapping around
    pub fn next_project_color(current: &str) -> &'static str {
        cycle(PROJECT_COLORS, current)
    }
}

fn cycle(items: &[&'static str], current: &str) -> &'static str {
    let next = items
        .iter()
        .position(|item| item.eq_ignore_ascii_case(current))
        .map_or(0, |index| (index + 1) % items.len());
    items[next]
}

/// Parse a `#rrggbb` project color into a terminal color
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
