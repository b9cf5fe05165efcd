//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabLayout {
    pub search: Rect,
    pub registry: Rect,
    pub disclaimer: Rect,
    pub tank_header: Rect,
    pub tank: Rect,
    pub stats: Rect,
    pub log: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        area.x + popup_x,
        area.y + popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the three-column lab layout
pub fn calculate_lab_layout(area: Rect) -> LabLayout {
    // Content + status line + help bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    // Registry | tank | dashboard
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Min(20),
            Constraint::Percentage(28),
        ])
        .split(main_chunks[0]);

    let registry = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(columns[0]);

    let tank = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(columns[1]);

    let dashboard = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(columns[2]);

    LabLayout {
        search: registry[0],
        registry: registry[1],
        disclaimer: registry[2],
        tank_header: tank[0],
        tank: tank[1],
        stats: dashboard[0],
        log: dashboard[1],
        status: main_chunks[1],
        help: main_chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions_do_not_overlap() {
        let layout = calculate_lab_layout(Rect::new(0, 0, 160, 50));

        assert!(layout.registry.right() <= layout.tank.x);
        assert!(layout.tank.right() <= layout.log.x);
        assert_eq!(layout.search.height, 3);
        assert_eq!(layout.help.height, 3);
        assert_eq!(layout.help.bottom(), 50);
        assert!(layout.tank.height > 0);
    }

    #[test]
    fn test_centered_popup_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = centered_popup(area, 50, 7);
        assert_eq!(popup.width, 30);
        assert_eq!(popup.height, 7);
        assert_eq!(popup.y, 1);
    }
}
