//! Dashboard component - lab stats and the system log

use super::layout::LabLayout;
use crate::model::{LabState, LabStats};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of the `HH:MM:SS > ` prefix on each log entry
const TIME_PREFIX_WIDTH: usize = 11;

#[derive(Debug, Default)]
pub struct DashboardComponent {
    pub log_scroll: usize,
    log_area: Rect,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_up(&mut self) {
        self.log_scroll = self.log_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.log_scroll = self.log_scroll.saturating_add(1);
    }

    /// Jump back to the newest entry
    pub fn reset_scroll(&mut self) {
        self.log_scroll = 0;
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.log_area.contains(Position::new(column, row))
    }
}

pub fn stats_lines(stats: &LabStats) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Rgb(0, 170, 0));
    let value = |boosted: bool| {
        if boosted {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    };

    let stability_color = match stats.stability {
        70..=100 => Color::Green,
        40..=69 => Color::Yellow,
        _ => Color::Red,
    };

    vec![
        Line::from(vec![
            Span::styled("STRANDS:   ", label),
            Span::styled(stats.strands.to_string(), value(false)),
        ]),
        Line::from(vec![
            Span::styled("SPEED:     ", label),
            Span::styled(stats.speed, value(stats.speed.starts_with('▲'))),
        ]),
        Line::from(vec![
            Span::styled("LEAP:      ", label),
            Span::styled(stats.leap, value(stats.leap.starts_with('▲'))),
        ]),
        Line::from(vec![
            Span::styled("VISION:    ", label),
            Span::styled(stats.vision, value(stats.vision != "NORMAL")),
        ]),
        Line::from(vec![
            Span::styled("STABILITY: ", label),
            Span::styled(
                format!("{}%", stats.stability),
                Style::default().fg(stability_color),
            ),
        ]),
    ]
}

/// Greedy word wrap to `width` display columns. Words wider than a row are
/// split across rows.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if used > 0 && used + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            used += 1 + word_width;
            continue;
        }
        if used > 0 {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        if word_width <= width {
            current.push_str(word);
            used = word_width;
            continue;
        }
        for c in word.chars() {
            let char_width = c.width().unwrap_or(0);
            if used > 0 && used + char_width > width {
                rows.push(std::mem::take(&mut current));
                used = 0;
            }
            current.push(c);
            used += char_width;
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// Draw the stats box and the scrollable system log
pub fn render_dashboard(
    frame: &mut Frame,
    layout: &LabLayout,
    dashboard: &mut DashboardComponent,
    lab: &LabState,
) {
    let (stats_area, log_area) = (layout.stats, layout.log);
    let stats = LabStats::from_genes(lab.active());
    let stats_box = Paragraph::new(stats_lines(&stats)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" DASHBOARD ")
            .title_style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(stats_box, stats_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" SYSTEM LOG ({}) ", lab.log_len()))
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .border_style(Style::default().fg(Color::Rgb(0, 34, 0)));
    dashboard.log_area = block.inner(log_area);

    // Wrapped here so the scroll clamp counts the rows actually drawn
    let text_width = (dashboard.log_area.width as usize).saturating_sub(TIME_PREFIX_WIDTH);
    let mut lines = Vec::new();
    for entry in lab.logs() {
        let mut first = true;
        for text in entry.message.lines() {
            for row in wrap_text(text, text_width) {
                let prefix = if first {
                    format!("{} > ", entry.formatted_time())
                } else {
                    " ".repeat(TIME_PREFIX_WIDTH)
                };
                first = false;
                lines.push(Line::from(vec![
                    Span::styled(prefix, Style::default().fg(Color::DarkGray)),
                    Span::styled(row, Style::default().fg(Color::Rgb(0, 204, 0))),
                ]));
            }
        }
    }

    let total = lines.len();
    let visible = dashboard.log_area.height as usize;
    let max_scroll = total.saturating_sub(visible);
    if dashboard.log_scroll > max_scroll {
        dashboard.log_scroll = max_scroll;
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((dashboard.log_scroll as u16, 0));
    frame.render_widget(paragraph, log_area);

    if total > visible {
        let mut scrollbar_state = ScrollbarState::new(max_scroll).position(dashboard.log_scroll);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓")),
            log_area.inner(ratatui::layout::Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::calculate_lab_layout;
    use crate::model::{Ability, Gene};
    use ratatui::{backend::TestBackend, Terminal};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_stats_lines() {
        let genes = vec![Gene::new("a2", "Puma Vertical Leap").with_ability(Ability::Leap)];
        let lines = stats_lines(&LabStats::from_genes(&genes));

        assert_eq!(lines.len(), 5);
        assert_eq!(line_text(&lines[0]), "STRANDS:   1");
        assert_eq!(line_text(&lines[2]), "LEAP:      ▲ 18 FT");
        assert_eq!(line_text(&lines[4]), "STABILITY: 95%");
    }

    #[test]
    fn test_scroll_saturates() {
        let mut dashboard = DashboardComponent::new();
        dashboard.scroll_up();
        assert_eq!(dashboard.log_scroll, 0);
        dashboard.scroll_down();
        dashboard.scroll_down();
        assert_eq!(dashboard.log_scroll, 2);
        dashboard.reset_scroll();
        assert_eq!(dashboard.log_scroll, 0);
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("Lab Online", 20), vec!["Lab Online"]);
        assert_eq!(
            wrap_text("[SYSTEM]: Lab Online. Bioshields at 100%.", 14),
            vec!["[SYSTEM]: Lab", "Online.", "Bioshields at", "100%."]
        );
        assert_eq!(wrap_text("ACTN3ACTN3", 4), vec!["ACTN", "3ACT", "N3"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_scroll_reaches_oldest_entry_when_lines_wrap() {
        let mut lab = LabState::new();
        for i in 1..=20 {
            lab.append(
                Gene::new(format!("gen_{}", i), format!("Proto Helix #{}", 1000 + i))
                    .with_origin("Unknown"),
            );
        }

        let area = Rect::new(0, 0, 120, 40);
        let layout = calculate_lab_layout(area);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut dashboard = DashboardComponent::new();
        for _ in 0..500 {
            dashboard.scroll_down();
        }
        terminal
            .draw(|frame| render_dashboard(frame, &layout, &mut dashboard, &lab))
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Bioshields"));
        assert!(dashboard.log_scroll > 0);
    }
}
