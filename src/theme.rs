// src/theme.rs
//! Presentation themes and the hook the session adapter uses to push the
//! modal's theme mode into the host UI.

use serde::Serialize;

/// Receives the active theme mode whenever a theme event lands. The host
/// typically writes it onto the document root (or the terminal/GUI
/// equivalent).
pub trait ThemeSink: Send + Sync {
    fn apply_mode(&self, mode: &str);
}

/// A selectable presentation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemePreset {
    pub name: &'static str,
    pub emoji: &'static str,
}

pub const THEMES: &[ThemePreset] = &[
    ThemePreset { name: "catppuccin", emoji: "🐈" },
    ThemePreset { name: "cerberus", emoji: "🐺" },
    ThemePreset { name: "concord", emoji: "🤖" },
    ThemePreset { name: "crimson", emoji: "🔴" },
    ThemePreset { name: "fennec", emoji: "🦊" },
    ThemePreset { name: "hamlindigo", emoji: "👔" },
    ThemePreset { name: "legacy", emoji: "💀" },
    ThemePreset { name: "mint", emoji: "🍃" },
    ThemePreset { name: "modern", emoji: "🌸" },
    ThemePreset { name: "mona", emoji: "🐙" },
    ThemePreset { name: "nosh", emoji: "🥙" },
    ThemePreset { name: "nouveau", emoji: "👑" },
    ThemePreset { name: "pine", emoji: "🌲" },
    ThemePreset { name: "reign", emoji: "📒" },
    ThemePreset { name: "rocket", emoji: "🚀" },
    ThemePreset { name: "rose", emoji: "🌷" },
    ThemePreset { name: "sahara", emoji: "🏜️" },
    ThemePreset { name: "seafoam", emoji: "🧜‍♀️" },
    ThemePreset { name: "terminus", emoji: "🌑" },
    ThemePreset { name: "vintage", emoji: "📺" },
    ThemePreset { name: "vox", emoji: "👾" },
    ThemePreset { name: "wintry", emoji: "🌨️" },
];

pub const FALLBACK_THEME: &str = "mint";

/// Look up a preset by name.
pub fn theme_preset(name: &str) -> Option<&'static ThemePreset> {
    THEMES.iter().find(|theme| theme.name == name)
}
