use crate::storage::{load_theme_preference, save_theme_preference};
use crate::util::browser_window;
use leptos::prelude::*;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn tokens(self) -> &'static ThemeTokens {
        match self {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}

/// Stored preference, else platform preference, else light.
pub(crate) fn resolve_initial_mode(stored: Option<&str>, prefers_dark: Option<bool>) -> ThemeMode {
    if let Some(mode) = stored.and_then(|s| ThemeMode::from_str(s.trim()).ok()) {
        return mode;
    }
    match prefers_dark {
        Some(true) => ThemeMode::Dark,
        _ => ThemeMode::Light,
    }
}

/// Semantic style tokens (Tailwind class lists) for one theme.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ThemeTokens {
    pub bg: &'static str,
    pub card_bg: &'static str,
    pub card_border: &'static str,
    pub card_shadow: &'static str,
    pub input_bg: &'static str,
    pub input_border: &'static str,
    pub input_text: &'static str,
    pub input_focus: &'static str,
    pub text: &'static str,
    pub secondary_text: &'static str,
    pub light_text: &'static str,
    pub primary_color: &'static str,
    pub primary_color_hover: &'static str,
    pub button_text: &'static str,
    pub highlight: &'static str,
    pub divider: &'static str,
    pub toggle_icon: &'static str,
    pub toggle_bg: &'static str,
    pub nav_bg: &'static str,
    pub note_bg: &'static str,
    pub tag: &'static str,
    pub pinned: &'static str,
    pub icon: &'static str,
    pub error_bg: &'static str,
    pub error_border: &'static str,
    pub error_text: &'static str,
    pub modal_overlay: &'static str,
    pub modal_content: &'static str,
}

pub(crate) static LIGHT: ThemeTokens = ThemeTokens {
    bg: "bg-gradient-to-b from-indigo-50 via-purple-50 to-pink-50",
    card_bg: "bg-white/80",
    card_border: "border-white/50",
    card_shadow: "shadow-lg shadow-[#6610f2]/10",
    input_bg: "bg-white/70",
    input_border: "border-gray-200",
    input_text: "text-gray-800",
    input_focus: "focus:border-[#6610f2]",
    text: "text-gray-800",
    secondary_text: "text-gray-600",
    light_text: "text-gray-500",
    primary_color: "from-indigo-600 to-purple-600",
    primary_color_hover: "hover:from-indigo-700 hover:to-purple-700",
    button_text: "text-white",
    highlight: "ring-indigo-200/50",
    divider: "border-gray-200",
    toggle_icon: "text-yellow-500",
    toggle_bg: "bg-indigo-100",
    nav_bg: "bg-white/90",
    note_bg: "bg-gradient-to-br from-white to-indigo-50/30",
    tag: "bg-indigo-50 text-indigo-600",
    pinned: "text-indigo-600",
    icon: "text-gray-500 hover:text-indigo-600",
    error_bg: "bg-red-50",
    error_border: "border-red-100",
    error_text: "text-red-500",
    modal_overlay: "bg-black/50",
    modal_content: "bg-white border-gray-200",
};

pub(crate) static DARK: ThemeTokens = ThemeTokens {
    bg: "bg-gradient-to-b from-[#0D0D11] via-[#141419] to-[#1A1A21]",
    card_bg: "bg-[#1A1A21]/90",
    card_border: "border-[#565449]/30",
    card_shadow: "shadow-lg shadow-[#6610f2]/20",
    input_bg: "bg-[#24242C]",
    input_border: "border-[#565449]/30",
    input_text: "text-[#d8cfbc]",
    input_focus: "focus:border-[#6610f2]",
    text: "text-[#fffbf4]",
    secondary_text: "text-[#d8cfbc]",
    light_text: "text-[#d8cfbc]/70",
    primary_color: "from-[#6610f2] to-[#9668f5]",
    primary_color_hover: "hover:from-[#6610f2] hover:to-[#7d42f8]",
    button_text: "text-[#fffbf4]",
    highlight: "ring-[#6610f2]/20",
    divider: "border-[#565449]/30",
    toggle_icon: "text-[#fffbf4]",
    toggle_bg: "bg-[#28282F]",
    nav_bg: "bg-[#141419]/90",
    note_bg: "bg-gradient-to-br from-[#24242C] to-[#1e1e24]",
    tag: "bg-[#1A1A21] text-[#6610f2]",
    pinned: "text-[#6610f2]",
    icon: "text-[#d8cfbc]/70 hover:text-[#6610f2]",
    error_bg: "bg-[#2c1515]",
    error_border: "border-[#ff6b6b]/30",
    error_text: "text-[#ff6b6b]",
    modal_overlay: "bg-[#000000]/75",
    modal_content: "bg-[#1A1A21] border-[#565449]/30",
};

fn platform_prefers_dark() -> Option<bool> {
    browser_window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
}

#[derive(Clone, Copy)]
pub(crate) struct ThemeStore {
    mode: RwSignal<ThemeMode>,
}

impl ThemeStore {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode: RwSignal::new(mode),
        }
    }

    pub fn init() -> Self {
        let stored = load_theme_preference();
        Self::new(resolve_initial_mode(stored.as_deref(), platform_prefers_dark()))
    }

    pub fn toggle(&self) {
        let next = self.mode.get_untracked().flipped();
        self.mode.set(next);
        save_theme_preference(&next.to_string());
        tracing::debug!(mode = %next, "theme toggled");
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn is_dark(&self) -> bool {
        self.mode() == ThemeMode::Dark
    }

    /// Tracked: reading tokens inside a view re-renders on toggle.
    pub fn current_tokens(&self) -> &'static ThemeTokens {
        self.mode().tokens()
    }

    /// Mirrors the mode onto `<html class="dark">` for Tailwind `dark:` variants.
    pub fn apply_to_document(&self) {
        let dark = self.is_dark();
        if let Some(root) = browser_window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.class_list().toggle_with_force("dark", dark);
        }
    }
}
