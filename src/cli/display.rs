// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for the sitefind CLI.
//!
//! Results are drawn as one box per category, with query matches underlined
//! instead of wrapped in `<mark>` tags. Colors come from OneDark on dark
//! terminals and One Light on light ones. With `NO_COLOR` set, or when stdout
//! isn't a TTY, everything is plain text and matches are shown as `[match]`.
//!
//! The theme is picked from `SITEFIND_THEME` ("dark" / "light"), then the
//! `COLORFGBG` background hint, then dark.

use sitefind::{Category, Highlighter, ResultSet, SearchHit};

/// Width between the two `│` borders.
pub const BOX_WIDTH: usize = 80;

/// Indent for the description and url lines under a hit title.
const DETAIL_INDENT: &str = "     ";

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const UNDERLINE: &str = "\x1b[4m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Pick a theme from the raw `SITEFIND_THEME` and `COLORFGBG` values.
    pub fn from_hints(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
        match explicit.map(str::to_ascii_lowercase).as_deref() {
            Some("light" | "l") => return Theme::Light,
            Some("dark" | "d") => return Theme::Dark,
            _ => {}
        }
        // "fg;bg": background 7 and up is light, except 8 (dark gray)
        let background = colorfgbg
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.parse::<u8>().ok());
        match background {
            Some(bg) if bg >= 7 && bg != 8 => Theme::Light,
            _ => Theme::Dark,
        }
    }

    fn from_env() -> Theme {
        Theme::from_hints(
            std::env::var("SITEFIND_THEME").ok().as_deref(),
            std::env::var("COLORFGBG").ok().as_deref(),
        )
    }
}

/// What a piece of text is, which decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Border,
    Muted,
    Query,
    Count,
    Match,
    Group(Category),
}

impl Role {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        // OneDark / One Light
        match (self, theme) {
            (Role::Border | Role::Muted, Theme::Dark) => (92, 99, 112),
            (Role::Border | Role::Muted, Theme::Light) => (160, 161, 167),
            (Role::Query, Theme::Dark) => (86, 182, 194),
            (Role::Query, Theme::Light) => (1, 132, 188),
            (Role::Count | Role::Group(Category::Service), Theme::Dark) => (152, 195, 121),
            (Role::Count | Role::Group(Category::Service), Theme::Light) => (80, 161, 79),
            (Role::Match | Role::Group(Category::Blog), Theme::Dark) => (229, 192, 123),
            (Role::Match | Role::Group(Category::Blog), Theme::Light) => (193, 132, 1),
            (Role::Group(Category::Page), Theme::Dark) => (97, 175, 239),
            (Role::Group(Category::Page), Theme::Light) => (64, 120, 242),
            (Role::Group(Category::Project), Theme::Dark) => (198, 120, 221),
            (Role::Group(Category::Project), Theme::Light) => (166, 38, 164),
        }
    }
}

/// Styles text for the current terminal, or leaves it alone.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
    theme: Theme,
}

impl Painter {
    /// Colors on when stdout is a TTY and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        if std::env::var_os("NO_COLOR").is_some() || !atty::is(atty::Stream::Stdout) {
            return Self::plain();
        }
        Self {
            enabled: true,
            theme: Theme::from_env(),
        }
    }

    pub fn plain() -> Self {
        Self {
            enabled: false,
            theme: Theme::Dark,
        }
    }

    fn paint(&self, role: Role, extra: &str, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let (r, g, b) = role.rgb(self.theme);
        format!("{}\x1b[38;2;{};{};{}m{}{}", extra, r, g, b, text, RESET)
    }

    pub fn color(&self, role: Role, text: &str) -> String {
        self.paint(role, "", text)
    }

    pub fn bold(&self, role: Role, text: &str) -> String {
        self.paint(role, BOLD, text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(Role::Muted, DIM, text)
    }

    /// Group heading such as "Services".
    pub fn category_label(&self, category: Category) -> String {
        self.bold(Role::Group(category), category.label())
    }

    /// Swap highlight markers for underlined color, or `[ ]` without color.
    pub fn render_highlight(&self, marked: &str, highlighter: &Highlighter) -> String {
        let (open, close) = if self.enabled {
            let (r, g, b) = Role::Match.rgb(self.theme);
            (format!("{}\x1b[38;2;{};{};{}m", UNDERLINE, r, g, b), RESET.to_string())
        } else {
            ("[".to_string(), "]".to_string())
        };
        highlighter.restyle(marked, &open, &close)
    }

    // ───────────────────────────────────────────────────────────────────────
    // Boxes
    // ───────────────────────────────────────────────────────────────────────

    /// `┌─ label ─────┐`. The label may already be styled.
    pub fn box_top(&self, label: &str) {
        let head = format!("─ {} ", label);
        let fill = BOX_WIDTH.saturating_sub(visible_len(&head));
        println!(
            "{}{}{}",
            self.color(Role::Border, "┌"),
            head,
            self.color(Role::Border, &format!("{}┐", "─".repeat(fill)))
        );
    }

    /// `│ content     │`
    pub fn box_row(&self, content: &str) {
        let fill = BOX_WIDTH.saturating_sub(visible_len(content));
        let edge = self.color(Role::Border, "│");
        println!("{}{}{}{}", edge, content, " ".repeat(fill), edge);
    }

    /// `└─────────────┘`
    pub fn box_bottom(&self) {
        println!("{}", self.color(Role::Border, &format!("└{}┘", "─".repeat(BOX_WIDTH))));
    }

    // ───────────────────────────────────────────────────────────────────────
    // Results
    // ───────────────────────────────────────────────────────────────────────

    fn print_hit(&self, hit: &SearchHit, is_selected: bool, highlighter: &Highlighter) {
        let cursor = if is_selected { "▶" } else { " " };
        let title = self.render_highlight(&hit.title_html, highlighter);
        self.box_row(&format!(" {} {}", cursor, title));

        let room = BOX_WIDTH - DETAIL_INDENT.len();
        let description = &hit.document.description;
        if description.chars().count() > room {
            // Cutting could split a marker, so long descriptions lose highlights
            self.box_row(&format!("{}{}", DETAIL_INDENT, self.dim(&truncate(description, room))));
        } else if !description.is_empty() {
            let rendered = self.render_highlight(&hit.description_html, highlighter);
            self.box_row(&format!("{}{}", DETAIL_INDENT, rendered));
        }
        self.box_row(&format!("{}{}", DETAIL_INDENT, self.dim(&hit.document.url)));
    }

    /// One box per category, hits numbered across boxes for `selected`.
    pub fn print_results(
        &self,
        results: &ResultSet,
        selected: Option<usize>,
        highlighter: &Highlighter,
    ) {
        let quoted = format!("\"{}\"", results.query);
        if results.is_empty() {
            println!("No results for {}", self.bold(Role::Match, &quoted));
            if !results.suggestions.is_empty() {
                println!("Try: {}", results.suggestions.join(", "));
            }
            return;
        }

        println!(
            "{} result{} for {}",
            self.bold(Role::Count, &results.total.to_string()),
            if results.total == 1 { "" } else { "s" },
            self.bold(Role::Query, &quoted)
        );

        let mut position = 0;
        for (category, hits) in &results.categories {
            self.box_top(&format!("{} ({})", self.category_label(*category), hits.len()));
            for hit in hits {
                self.print_hit(hit, selected == Some(position), highlighter);
                position += 1;
            }
            self.box_bottom();
        }
    }
}

/// Printed width of `s`, skipping ANSI SGR sequences.
pub fn visible_len(s: &str) -> usize {
    let mut chars = s.chars();
    let mut len = 0;
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            let _ = chars.by_ref().find(|&c| c == 'm');
        } else {
            len += 1;
        }
    }
    len
}

/// Pad a possibly styled string with spaces to `width` printed columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Cut plain text to at most `max` characters, ending in `…` if cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut kept: String = text.chars().take(max.saturating_sub(1)).collect();
    kept.push('…');
    kept
}
