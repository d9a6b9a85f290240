use ratatui::style::Stylize;
use ratatui::style::{Color, Style};

pub fn title_style() -> Style { Style::default().fg(Color::Cyan).bold() }
pub fn hint_style() -> Style { Style::default().fg(Color::DarkGray) }
pub fn front_style() -> Style { Style::default().fg(Color::White).bold() }
pub fn back_style() -> Style { Style::default().fg(Color::Yellow).bold() }
pub fn footer_style() -> Style { Style::default().fg(Color::Gray) }
