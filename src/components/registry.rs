//! Registry component - the searchable gene library
//!
//! Displays categories as collapsible groups and owns the search term and
//! list focus. Every gene row is a drag source.

use super::layout::LabLayout;
use crate::action::Action;
use crate::component::Component;
use crate::model::{DragSession, Gene, LabState, Library};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::collections::HashSet;

const DISCLAIMER: &str = "** NOTICE: Creating hybrid humans may result in unexpected \
cravings for tuna, sudden urges to sit in cardboard boxes, or nocturnal zoomies. Use responsibly.";

// ═══════════════════════════════════════════════════════════════════════════════
// Registry Rows
// ═══════════════════════════════════════════════════════════════════════════════

/// A row in the registry list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryRow {
    /// Category header with its (filtered) gene count
    Header {
        label: String,
        count: usize,
        expanded: bool,
    },
    Gene(Gene),
}

// ═══════════════════════════════════════════════════════════════════════════════
// Registry Component
// ═══════════════════════════════════════════════════════════════════════════════

pub struct RegistryComponent {
    pub list_state: ListState,

    pub search_query: String,

    pub search_mode: bool,

    /// Categories the user opened while not searching
    pub expanded: HashSet<String>,

    /// Inner list area from the last draw, used for mouse hit-testing
    list_area: Rect,
}

impl Default for RegistryComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryComponent {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            search_query: String::new(),
            search_mode: false,
            expanded: HashSet::new(),
            list_area: Rect::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rows
    // ─────────────────────────────────────────────────────────────────────────

    /// Categories are open while a search is active
    pub fn is_expanded(&self, label: &str) -> bool {
        !self.search_query.is_empty() || self.expanded.contains(label)
    }

    /// Build the visible rows from the filtered library
    pub fn build_rows(&self, library: &Library) -> Vec<RegistryRow> {
        let filtered = library.filter(&self.search_query);
        let mut rows = Vec::new();

        for category in filtered.categories() {
            let expanded = self.is_expanded(&category.label);
            rows.push(RegistryRow::Header {
                label: category.label.clone(),
                count: category.genes.len(),
                expanded,
            });
            if expanded {
                rows.extend(category.genes.iter().cloned().map(RegistryRow::Gene));
            }
        }

        rows
    }

    pub fn focused_row(&self, library: &Library) -> Option<RegistryRow> {
        let index = self.list_state.selected()?;
        self.build_rows(library).into_iter().nth(index)
    }

    /// The gene under the cursor, if the cursor is on a gene row
    pub fn focused_gene(&self, library: &Library) -> Option<Gene> {
        match self.focused_row(library)? {
            RegistryRow::Gene(gene) => Some(gene),
            RegistryRow::Header { .. } => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next(&mut self, library: &Library) {
        let len = self.build_rows(library).len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn previous(&mut self, library: &Library) {
        let len = self.build_rows(library).len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let prev = match self.list_state.selected() {
            Some(i) if i > 0 && i < len => i - 1,
            _ => len - 1,
        };
        self.list_state.select(Some(prev));
    }

    pub fn select_first(&mut self, library: &Library) {
        if self.build_rows(library).is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self, library: &Library) {
        let len = self.build_rows(library).len();
        self.list_state.select(len.checked_sub(1));
    }

    /// Expand or collapse the focused category header
    pub fn toggle_category(&mut self, library: &Library) {
        if let Some(RegistryRow::Header { label, .. }) = self.focused_row(library) {
            if !self.expanded.remove(&label) {
                self.expanded.insert(label);
            }
        }
    }

    /// Map a screen position to a row index from the last draw
    pub fn row_at(&self, column: u16, row: u16, library: &Library) -> Option<usize> {
        if !self.list_area.contains(Position::new(column, row)) {
            return None;
        }
        let index = (row - self.list_area.y) as usize + self.list_state.offset();
        (index < self.build_rows(library).len()).then_some(index)
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.list_area.contains(Position::new(column, row))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    pub fn search_input(&mut self, c: char, library: &Library) {
        self.search_query.push(c);
        self.select_first(library);
    }

    pub fn search_backspace(&mut self, library: &Library) {
        self.search_query.pop();
        self.select_first(library);
    }

    pub fn clear_search(&mut self, library: &Library) {
        self.search_query.clear();
        self.select_first(library);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for RegistryComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            // Enter toggles headers and quick-drops genes; App decides which
            KeyCode::Enter => Some(Action::QuickIntegrate),
            KeyCode::Char(' ') => Some(Action::GrabFocused),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing needs the library; see render_registry
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Draw the search box, the gene list and the disclaimer
pub fn render_registry(
    frame: &mut Frame,
    layout: &LabLayout,
    registry: &mut RegistryComponent,
    library: &Library,
    lab: &LabState,
    drag: &DragSession,
) {
    let (search_area, list_area, disclaimer_area) =
        (layout.search, layout.registry, layout.disclaimer);
    render_search_box(frame, search_area, registry);

    let filtered = library.filter(&registry.search_query);
    let match_count = filtered.gene_count();
    let rows = registry.build_rows(library);

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| match row {
            RegistryRow::Header {
                label,
                count,
                expanded,
            } => ListItem::new(Line::from(vec![
                Span::styled(
                    if *expanded { "▾ " } else { "▸ " },
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{} ({})", label, count),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ])),
            RegistryRow::Gene(gene) => gene_row(gene, lab, drag),
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" GENE REGISTRY ({}) ", match_count))
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .border_style(Style::default().fg(Color::Rgb(0, 68, 0)));

    registry.list_area = block.inner(list_area);

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(0, 40, 0))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, list_area, &mut registry.list_state);

    if filtered.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("NO STRANDS MATCH \"{}\"", registry.search_query),
                Style::default().fg(Color::DarkGray),
            )),
            registry.list_area,
        );
    }

    let disclaimer = Paragraph::new(Span::styled(
        DISCLAIMER,
        Style::default()
            .fg(Color::Rgb(0, 102, 0))
            .add_modifier(Modifier::ITALIC),
    ))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::Rgb(0, 68, 0))),
    );
    frame.render_widget(disclaimer, disclaimer_area);
}

fn gene_row<'a>(gene: &'a Gene, lab: &LabState, drag: &DragSession) -> ListItem<'a> {
    let dragging = drag.is_dragging(&gene.id);
    let in_tank = lab.contains(&gene.id);

    let name_style = if dragging {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::Green)
    };

    let mut spans = vec![
        Span::styled(
            if in_tank { "✓ " } else { "  " },
            Style::default().fg(Color::Green),
        ),
        Span::styled(gene.name.to_uppercase(), name_style),
    ];
    if let Some(origin) = &gene.origin {
        spans.push(Span::styled(
            format!(" [{}]", origin),
            Style::default().fg(Color::Rgb(0, 85, 0)),
        ));
    }
    if dragging {
        spans.push(Span::styled(
            " ⇢",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    ListItem::new(Line::from(spans))
}

fn render_search_box(frame: &mut Frame, area: Rect, registry: &RegistryComponent) {
    let (text, style) = if registry.search_query.is_empty() && !registry.search_mode {
        (
            "Search genes/species... (/)".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else if registry.search_mode {
        (
            format!("{}_", registry.search_query),
            Style::default().fg(Color::Green),
        )
    } else {
        (registry.search_query.clone(), Style::default().fg(Color::Green))
    };

    let border_color = if registry.search_mode {
        Color::Green
    } else {
        Color::Rgb(0, 68, 0)
    };

    let paragraph = Paragraph::new(Span::styled(text, style)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::library::Category;

    fn headers(rows: &[RegistryRow]) -> Vec<&str> {
        rows.iter()
            .filter_map(|row| match row {
                RegistryRow::Header { label, .. } => Some(label.as_str()),
                RegistryRow::Gene(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_categories_start_collapsed() {
        let library = Library::generate();
        let registry = RegistryComponent::new();
        let rows = registry.build_rows(&library);

        assert_eq!(rows.len(), library.categories().len());
        assert_eq!(headers(&rows)[0], "Human Baseline");
    }

    #[test]
    fn test_search_expands_matching_categories() {
        let library = Library::generate();
        let mut registry = RegistryComponent::new();
        for c in "cheetah".chars() {
            registry.search_input(c, &library);
        }

        let rows = registry.build_rows(&library);
        assert_eq!(
            rows,
            vec![
                RegistryRow::Header {
                    label: "Apex Predators".to_string(),
                    count: 1,
                    expanded: true,
                },
                RegistryRow::Gene(library.categories()[1].genes[0].clone()),
            ]
        );
        assert_eq!(registry.list_state.selected(), Some(0));
    }

    #[test]
    fn test_toggle_category() {
        let library = Library::generate();
        let mut registry = RegistryComponent::new();
        registry.select_first(&library);

        registry.toggle_category(&library);
        let rows = registry.build_rows(&library);
        let category: &Category = &library.categories()[0];
        assert_eq!(rows.len(), library.categories().len() + category.genes.len());

        registry.next(&library);
        assert_eq!(registry.focused_gene(&library).unwrap().id, "h1");

        // Toggling on a gene row does nothing
        registry.toggle_category(&library);
        assert_eq!(registry.build_rows(&library).len(), rows.len());

        registry.select_first(&library);
        registry.toggle_category(&library);
        assert_eq!(registry.build_rows(&library).len(), library.categories().len());
    }

    #[test]
    fn test_navigation_wraps() {
        let library = Library::generate();
        let mut registry = RegistryComponent::new();
        let len = registry.build_rows(&library).len();

        registry.previous(&library);
        assert_eq!(registry.list_state.selected(), Some(len - 1));
        registry.next(&library);
        assert_eq!(registry.list_state.selected(), Some(0));
        registry.select_last(&library);
        assert_eq!(registry.list_state.selected(), Some(len - 1));
    }

    #[test]
    fn test_no_match_clears_focus() {
        let library = Library::generate();
        let mut registry = RegistryComponent::new();
        registry.search_input('§', &library);

        assert!(registry.build_rows(&library).is_empty());
        assert_eq!(registry.list_state.selected(), None);
        assert!(registry.focused_gene(&library).is_none());

        registry.clear_search(&library);
        assert_eq!(registry.list_state.selected(), Some(0));
    }

    #[test]
    fn test_key_bindings() {
        use crossterm::event::KeyModifiers;
        let mut registry = RegistryComponent::new();
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            registry.handle_key_event(press(KeyCode::Char(' '))).unwrap(),
            Some(Action::GrabFocused)
        );
        assert_eq!(
            registry.handle_key_event(press(KeyCode::Char('/'))).unwrap(),
            Some(Action::EnterSearchMode)
        );
        assert_eq!(
            registry.handle_key_event(press(KeyCode::Enter)).unwrap(),
            Some(Action::QuickIntegrate)
        );
    }
}
