//! Tank component - the drop target
//!
//! Accepts dragged genes and shows the tank contents as a grid of tiles.
//! Also hosts the export and wipe buttons.

use super::layout::LabLayout;
use crate::action::Action;
use crate::component::Component;
use crate::model::{DragKind, DragSession, Gene, LabState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TILE_WIDTH: usize = 18;
const EXPORT_LABEL: &str = " EXPORT SERUM (x) ";
const WIPE_LABEL: &str = " WIPE LAB (w) ";

/// Drop target state: hit areas from the last draw
#[derive(Debug, Default)]
pub struct TankComponent {
    area: Rect,
    export_button: Rect,
    wipe_button: Rect,
}

impl TankComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tank takes gene payloads only
    pub fn accepts(&self, kind: DragKind) -> bool {
        matches!(kind, DragKind::Gene)
    }

    /// Whether a screen position is over the drop area
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    /// Button under a screen position, as the action it triggers
    pub fn button_at(&self, column: u16, row: u16) -> Option<Action> {
        let position = Position::new(column, row);
        if self.export_button.contains(position) {
            Some(Action::ExportSerum)
        } else if self.wipe_button.contains(position) {
            Some(Action::WipeLab)
        } else {
            None
        }
    }
}

impl Component for TankComponent {
    /// Keys available while a gene is being dragged
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Some(Action::HoverTank(true)),
            KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => Some(Action::HoverTank(false)),
            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ReleaseDrag),
            KeyCode::Esc => Some(Action::CancelDrag),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ForceQuit)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing needs lab state; see render_tank
        Ok(())
    }
}

/// Truncate `text` to at most `width` display columns, marking cuts with `…`
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn centered(text: &str, width: usize) -> String {
    let text = fit_to_width(text, width);
    let pad = width.saturating_sub(text.width());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

/// Lay genes out as rows of tiles: an orb line and a name line per row
pub fn tile_lines(genes: &[Gene], inner_width: u16) -> Vec<Line<'static>> {
    let per_row = (inner_width as usize / TILE_WIDTH).max(1);
    let mut lines = Vec::new();

    for row in genes.chunks(per_row) {
        let orbs: Vec<Span> = row
            .iter()
            .map(|_| {
                Span::styled(
                    centered("(◉)", TILE_WIDTH),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        let names: Vec<Span> = row
            .iter()
            .map(|gene| {
                Span::styled(
                    centered(&gene.name, TILE_WIDTH - 2) + "  ",
                    Style::default().fg(Color::Rgb(0, 204, 0)),
                )
            })
            .collect();

        lines.push(Line::from(orbs));
        lines.push(Line::from(names));
        lines.push(Line::from(""));
    }

    lines
}

/// Draw the tank header (title and buttons) and the drop area
pub fn render_tank(
    frame: &mut Frame,
    layout: &LabLayout,
    tank: &mut TankComponent,
    lab: &LabState,
    drag: &DragSession,
) {
    let (header_area, tank_area) = (layout.tank_header, layout.tank);

    // Header with buttons
    let header_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(0, 68, 0)));
    let header_inner = header_block.inner(header_area);
    frame.render_widget(header_block, header_area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "PLAYGROUND v1.2",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        header_inner,
    );

    let wipe_width = WIPE_LABEL.len() as u16;
    let export_width = EXPORT_LABEL.len() as u16;
    tank.wipe_button = Rect::new(
        header_inner.right().saturating_sub(wipe_width),
        header_inner.y,
        wipe_width.min(header_inner.width),
        header_inner.height.min(1),
    );
    tank.export_button = Rect::new(
        tank.wipe_button.x.saturating_sub(export_width + 1),
        header_inner.y,
        export_width.min(header_inner.width),
        header_inner.height.min(1),
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            EXPORT_LABEL,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        tank.export_button,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(WIPE_LABEL, Style::default().fg(Color::Red))),
        tank.wipe_button,
    );

    // Drop area
    let is_over = drag.is_over_target();
    let (border_style, background, title) = if is_over {
        (
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Color::Rgb(5, 17, 5),
            " RELEASE TO INTEGRATE ",
        )
    } else if drag.is_active() {
        (
            Style::default().fg(Color::Yellow),
            Color::Reset,
            " DRAG HERE (→) ",
        )
    } else {
        (Style::default().fg(Color::Rgb(0, 68, 0)), Color::Reset, " GENETIC TANK ")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(title)
        .style(Style::default().bg(background));
    let inner = block.inner(tank_area);
    tank.area = tank_area;

    let paragraph = if lab.is_empty() {
        let mut lines = vec![Line::from(""); (inner.height / 2) as usize];
        lines.push(Line::from(Span::styled(
            "[WAITING FOR GENE INPUT...]",
            Style::default().fg(Color::DarkGray),
        )));
        Paragraph::new(lines).alignment(Alignment::Center)
    } else {
        let lines = tile_lines(lab.active(), inner.width);
        // Keep the newest tiles in view
        let overflow = lines.len().saturating_sub(inner.height as usize) as u16;
        Paragraph::new(lines).scroll((overflow, 0))
    };

    frame.render_widget(paragraph.block(block), tank_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("Bioluminescence", 20), "Bioluminescence");
        assert_eq!(fit_to_width("Cheetah ACTN3 Sprint", 10), "Cheetah A…");
        assert_eq!(fit_to_width("Cheetah", 0), "");
        assert_eq!(fit_to_width("Cheetah ACTN3 Sprint", 10).width(), 10);
    }

    #[test]
    fn test_centered_pads_to_width() {
        let text = centered("abc", 9);
        assert_eq!(text, "   abc   ");
        assert_eq!(centered("abcdefghijkl", 6).width(), 6);
    }

    #[test]
    fn test_tile_lines_wrap_rows() {
        let genes: Vec<Gene> = (1..=5)
            .map(|i| Gene::new(format!("gen_{}", i), format!("Strand {}", i)))
            .collect();

        // Two tiles per row -> three rows of three lines each
        let lines = tile_lines(&genes, (TILE_WIDTH * 2) as u16);
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0].spans.len(), 2);
        assert_eq!(lines[6].spans.len(), 1);

        // Narrow tanks still show one tile per row
        assert_eq!(tile_lines(&genes, 4).len(), 15);
    }

    #[test]
    fn test_accepts_genes() {
        let tank = TankComponent::new();
        assert!(tank.accepts(DragKind::Gene));
    }

    #[test]
    fn test_drag_keys() {
        let mut tank = TankComponent::new();
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            tank.handle_key_event(press(KeyCode::Right)).unwrap(),
            Some(Action::HoverTank(true))
        );
        assert_eq!(
            tank.handle_key_event(press(KeyCode::Char('h'))).unwrap(),
            Some(Action::HoverTank(false))
        );
        assert_eq!(
            tank.handle_key_event(press(KeyCode::Enter)).unwrap(),
            Some(Action::ReleaseDrag)
        );
        assert_eq!(
            tank.handle_key_event(press(KeyCode::Esc)).unwrap(),
            Some(Action::CancelDrag)
        );
    }
}
