//! Splash screen component
//!
//! Shows a double helix briefly before the lab comes online.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Splash screen component
pub struct SplashComponent {
    start_time: Option<Instant>,
    duration: Duration,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashComponent {
    pub fn new() -> Self {
        Self {
            start_time: None,
            duration: Duration::from_millis(1200),
        }
    }

    /// Check if splash duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    fn get_helix() -> Vec<&'static str> {
        vec![
            "  O=========O  ",
            "   O=======O   ",
            "    O=====O    ",
            "     O===O     ",
            "      O=O      ",
            "       O       ",
            "      O=O      ",
            "     O===O     ",
            "    O=====O    ",
            "   O=======O   ",
            "  O=========O  ",
            "   O=======O   ",
            "    O=====O    ",
            "     O===O     ",
            "      O=O      ",
            "       O       ",
        ]
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let bg_black = Color::Rgb(0, 0, 0);

        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(bg_black)),
            area,
        );

        let helix = Self::get_helix();
        let helix_height = helix.len() as u16;
        let helix_width = helix.first().map(|l| l.len()).unwrap_or(0) as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((area.height.saturating_sub(helix_height + 5)) / 2),
                Constraint::Length(helix_height),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let helix_lines: Vec<Line> = helix
            .iter()
            .map(|line| {
                let spans: Vec<Span> = line
                    .chars()
                    .map(|c| {
                        let style = match c {
                            'O' => Style::default().fg(Color::Green).bg(bg_black),
                            '=' => Style::default().fg(Color::Rgb(0, 100, 0)).bg(bg_black),
                            _ => Style::default().fg(bg_black).bg(bg_black),
                        };
                        Span::styled(c.to_string(), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let helix_x = (area.width.saturating_sub(helix_width)) / 2;
        let helix_rect = Rect::new(
            helix_x,
            chunks[1].y,
            helix_width.min(area.width),
            helix_height.min(chunks[1].height),
        );
        frame.render_widget(Paragraph::new(helix_lines), helix_rect);

        let title = "GENE LAB";
        let title_rect = Rect::new(
            (area.width.saturating_sub(title.len() as u16)) / 2,
            chunks[3].y,
            (title.len() as u16).min(area.width),
            1,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                title,
                Style::default()
                    .fg(Color::Green)
                    .bg(bg_black)
                    .add_modifier(Modifier::BOLD),
            )),
            title_rect,
        );

        let subtitle = "Bioshields at 100%";
        let subtitle_rect = Rect::new(
            (area.width.saturating_sub(subtitle.len() as u16)) / 2,
            chunks[4].y,
            (subtitle.len() as u16).min(area.width),
            1,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                subtitle,
                Style::default().fg(Color::DarkGray).bg(bg_black),
            )),
            subtitle_rect,
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_not_complete_before_init() {
        let splash = SplashComponent::new();
        assert!(!splash.is_complete());
    }

    #[test]
    fn test_any_key_skips() {
        let mut splash = SplashComponent::new();
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(splash.handle_key_event(key).unwrap(), Some(Action::SplashComplete));

        let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(splash.handle_key_event(quit).unwrap(), Some(Action::ForceQuit));
    }
}
