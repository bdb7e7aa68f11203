use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_TEAL: Color = Color::Rgb(94, 205, 196);
    pub const ACCENT_AMBER: Color = Color::Rgb(240, 180, 80);
    pub const ACCENT_RED: Color = Color::Rgb(235, 100, 100);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 228);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 160, 175);
    pub const TEXT_MUTED: Color = Color::Rgb(105, 105, 120);
    pub const BG_DARK: Color = Color::Rgb(22, 22, 30);
    pub const BG_ELEVATED: Color = Color::Rgb(40, 40, 54);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn question_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn question_meta() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn answer() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn category_normal() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn category_current() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn page_active() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn page_inactive() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY).bg(Self::BG_ELEVATED)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn alert_border() -> Style {
        Style::default().fg(Self::ACCENT_RED)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }
}
