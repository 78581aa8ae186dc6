// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the vendex CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `VENDEX_THEME` first (for explicit control), then `COLORFGBG` (set by some
//! terminals), then defaults to dark. Respects `NO_COLOR` and falls back to
//! plain text when stdout is not a TTY.

use std::sync::OnceLock;

use vendex::{CatalogStats, RankedRecord};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("VENDEX_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background colors 7+ (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut plain text to `max` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
fn border() -> (String, &'static str) {
    if use_colors() {
        (GRAY(), RESET)
    } else {
        (String::new(), "")
    }
}

pub fn row(content: &str) {
    let (border, reset) = border();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset,
        content,
        " ".repeat(pad),
        border,
        reset
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (border, reset) = border();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset,
        label_part,
        border,
        "─".repeat(remaining),
        reset
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let (border, reset) = border();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), reset);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded combined score (0-1)
pub fn score_value(score: Option<f64>) -> String {
    let Some(score) = score else {
        return themed(GRAY, &[], "    -");
    };
    let text = format!("{:>5.3}", score);
    if !use_colors() {
        return text;
    }
    let color = if score >= 0.75 {
        BRIGHT_GREEN()
    } else if score >= 0.5 {
        GREEN()
    } else if score >= 0.25 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{}{}", color, text, RESET)
}

/// Rating with a star, e.g. "4.8★"
pub fn rating_label(rating: f64) -> String {
    themed(YELLOW, &[], &format!("{:.1}★", rating))
}

/// Distance in km or m, "-" when unknown
pub fn distance_label(distance_km: Option<f64>) -> String {
    match distance_km {
        Some(d) if d < 1.0 => themed(BLUE, &[], &format!("{:>6.0} m", d * 1000.0)),
        Some(d) => themed(BLUE, &[], &format!("{:>6.1} km", d)),
        None => themed(GRAY, &[], "       -"),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// Render ranked results as a boxed table.
pub fn print_results(query: &str, ranked: &[RankedRecord], limit: usize) {
    let label = if query.trim().is_empty() {
        "TOP RATED".to_string()
    } else {
        format!("RESULTS FOR \"{}\"", truncate(query, 40))
    };
    section_top(&label);

    if ranked.is_empty() {
        row(&themed(GRAY, &[], " no vendors matched"));
    }

    for (i, entry) in ranked.iter().take(limit).enumerate() {
        let record = &entry.record;
        let name = themed(CYAN, &[BOLD], &truncate(&record.name, 28));
        let category = truncate(&record.category, 16);
        row(&format!(
            " {:>3}. {} {} {} {} {}",
            i + 1,
            pad_right(&name, 28),
            pad_right(&category, 16),
            rating_label(record.rating),
            score_value(entry.score),
            distance_label(entry.distance_km),
        ));
    }

    if ranked.len() > limit {
        row(&themed(
            GRAY,
            &[],
            &format!(" … {} more", ranked.len() - limit),
        ));
    }
    section_bot();
}

/// Render catalog statistics.
pub fn print_stats(path: &str, stats: &CatalogStats) {
    section_top(&format!("CATALOG {}", truncate(path, 50)));
    row(&format!(" records          {}", stats.records));
    row(&format!(" with coordinates {}", stats.with_coordinates));
    match (stats.min_rating, stats.max_rating) {
        (Some(min), Some(max)) => row(&format!(" ratings          {:.1} - {:.1}", min, max)),
        _ => row(" ratings          -"),
    }
    section_bot();

    section_top("CATEGORIES");
    for (category, count) in &stats.categories {
        let name = if category.is_empty() {
            themed(GRAY, &[], "(none)")
        } else {
            category.clone()
        };
        row(&format!(" {} {:>5}", pad_right(&name, 40), count));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
