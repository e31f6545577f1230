use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::item::Item;

/// Contents of a list file (`*.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListFile {
    #[serde(default)]
    pub list: ListInfo,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub drag: DragConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListInfo {
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for ListInfo {
    fn default() -> Self {
        ListInfo {
            title: default_title(),
        }
    }
}

fn default_title() -> String {
    "Items".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Rows per item: one label row plus gutter rows. Must be at least 2 so
    /// the pointer can land in either half of an item.
    #[serde(default = "default_row_height")]
    pub row_height: u16,
    #[serde(default)]
    pub colors: HashMap<String, String>,
    #[serde(default)]
    pub indicator: IndicatorConfig,
    /// Show the key hint line at the bottom
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            row_height: default_row_height(),
            colors: HashMap::new(),
            indicator: IndicatorConfig::default(),
            show_key_hints: true,
        }
    }
}

fn default_row_height() -> u16 {
    2
}

fn default_true() -> bool {
    true
}

/// Drop indicator line style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    #[serde(default)]
    pub stroke: Stroke,
    #[serde(default)]
    pub terminal: Terminal,
}

/// Line weight of the drop indicator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stroke {
    #[default]
    Thin,
    Thick,
    Double,
}

impl Stroke {
    pub fn symbol(self) -> &'static str {
        match self {
            Stroke::Thin => "\u{2500}",
            Stroke::Thick => "\u{2501}",
            Stroke::Double => "\u{2550}",
        }
    }
}

/// Marker drawn at the start of the drop indicator line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terminal {
    None,
    #[default]
    Dot,
    Ring,
}

impl Terminal {
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            Terminal::None => None,
            Terminal::Dot => Some("\u{25CF}"),
            Terminal::Ring => Some("\u{25CB}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragConfig {
    /// Cells the pointer must travel from the press before a drag starts
    #[serde(default = "default_threshold")]
    pub threshold: u16,
    /// Post-move flash duration in milliseconds
    #[serde(default = "default_flash_ms")]
    pub flash_ms: u64,
    /// Escape abandons an in-flight pointer drag
    #[serde(default = "default_true")]
    pub cancel_on_escape: bool,
}

impl Default for DragConfig {
    fn default() -> Self {
        DragConfig {
            threshold: default_threshold(),
            flash_ms: default_flash_ms(),
            cancel_on_escape: true,
        }
    }
}

fn default_threshold() -> u16 {
    1
}

fn default_flash_ms() -> u64 {
    700
}
