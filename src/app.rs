//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components. It owns
//! the library and routes drag payloads from the registry to the tank.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_lab_layout, render_dashboard, render_registry, render_tank, DashboardComponent,
    HelpDialog, NoticeDialog, QuitDialog, RegistryComponent, RegistryRow, SplashComponent,
    TankComponent,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::status::EMPTY_EXPORT_NOTICE;
use crate::model::ui::AppMode;
use crate::model::{AppendOutcome, DragSession, LabState, Library, SerumProtocol};
use crate::services;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    pub mode: AppMode,

    /// Gene catalog, built once
    pub library: Library,

    /// Tank contents and system log
    pub lab: LabState,

    /// In-flight drag gesture
    pub drag: DragSession,

    pub modals: ModalStack,

    pub config: Config,

    pub should_quit: bool,

    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub registry: RegistryComponent,
    pub tank: TankComponent,
    pub dashboard: DashboardComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub notice_dialog: NoticeDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(config: Config) -> App {
        let library = Library::generate();
        log::info!(
            "Library ready: {} genes in {} categories",
            library.gene_count(),
            library.categories().len()
        );

        let mode = if config.splash {
            AppMode::Splash
        } else {
            AppMode::Running
        };

        let mut app = App {
            mode,
            library,
            lab: LabState::new(),
            drag: DragSession::new(),
            modals: ModalStack::new(),
            config,
            should_quit: false,
            status_message: None,
            splash: SplashComponent::new(),
            registry: RegistryComponent::new(),
            tank: TankComponent::new(),
            dashboard: DashboardComponent::new(),
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
            notice_dialog: NoticeDialog::default(),
        };
        app.registry.select_first(&app.library);
        app
    }

    /// Run an action and every follow-up action it produces
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let mut current_action = Some(action);
        while let Some(a) = current_action {
            if a != Action::Tick {
                log::trace!("action: {}", a);
            }
            current_action = self.update(a)?;
        }
        Ok(())
    }

    /// Write the serum protocol for the current tank contents
    fn export_serum(&mut self) {
        let contents = match SerumProtocol::new(self.lab.active(), services::project_code()) {
            Some(protocol) => protocol.render(),
            None => {
                self.modals.push(Modal::notice("Export", EMPTY_EXPORT_NOTICE));
                return;
            }
        };

        let path = self.config.export_path();
        match services::write_protocol(&path, &contents) {
            Ok(()) => {
                self.lab.record(format!(
                    "[EXPORT]: Serum protocol written to {}.",
                    path.display()
                ));
                self.dashboard.reset_scroll();
                self.modals.push(Modal::notice(
                    "Serum Exported",
                    format!("Protocol written to {}", path.display()),
                ));
            }
            Err(e) => {
                log::warn!("Serum export failed: {:#}", e);
                self.modals
                    .push(Modal::notice("Export Failed", format!("{:#}", e)));
            }
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
            Modal::Notice { .. } => self.notice_dialog.handle_key_event(key),
        }
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ForceQuit)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ClearSearch)
            }
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    /// Lab-wide keys that work whenever the registry has focus
    fn handle_lab_key_event(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ForceQuit)
            }
            KeyCode::Char('x') => Some(Action::ExportSerum),
            KeyCode::Char('w') => Some(Action::WipeLab),
            KeyCode::PageUp => Some(Action::ScrollLogUp),
            KeyCode::PageDown => Some(Action::ScrollLogDown),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            _ => None,
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::Help => self.help_dialog.draw(frame, area),
            Modal::Notice { title, message } => {
                self.notice_dialog.set(title, message);
                self.notice_dialog.draw(frame, area)
            }
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                " GENE LAB ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                format!("{} strands ", self.lab.len()),
                Style::default().fg(Color::Green),
            ),
        ];

        if !self.registry.search_query.is_empty() {
            spans.push(Span::styled(
                format!("[filter:{}] ", self.registry.search_query),
                Style::default().fg(Color::Cyan),
            ));
        }

        if let Some(gene) = self.drag.payload() {
            spans.push(Span::styled(
                format!(" carrying {} ", gene.name),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        } else if let Some(status) = &self.status_message {
            spans.push(Span::styled(
                format!(" {} ", status),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_help_bar(&self, frame: &mut Frame, area: Rect) {
        let key = |k: &'static str, color: Color| {
            Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
        };

        let spans = if self.registry.search_mode {
            vec![
                key(" Esc/Enter ", Color::Yellow),
                Span::raw("Done  "),
                key(" Ctrl+u ", Color::Cyan),
                Span::raw("Clear  "),
                Span::styled(
                    format!("Search: {}", self.registry.search_query),
                    Style::default().fg(Color::Green),
                ),
            ]
        } else if self.drag.is_active() {
            vec![
                key(" → ", Color::Green),
                Span::raw("Over tank  "),
                key(" ← ", Color::Yellow),
                Span::raw("Off tank  "),
                key(" Space ", Color::Green),
                Span::raw("Release  "),
                key(" Esc ", Color::Red),
                Span::raw("Cancel"),
            ]
        } else {
            vec![
                key(" q ", Color::Yellow),
                Span::raw("Quit "),
                key(" / ", Color::Cyan),
                Span::raw("Search "),
                key(" Space ", Color::Green),
                Span::raw("Grab "),
                key(" Enter ", Color::Green),
                Span::raw("Integrate "),
                key(" x ", Color::Green),
                Span::raw("Export "),
                key(" w ", Color::Red),
                Span::raw("Wipe "),
                key(" ? ", Color::White),
                Span::raw("Help"),
            ]
        };

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(0, 68, 0))),
        );
        frame.render_widget(paragraph, area);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    self.handle_modal_key_event(&modal, key)
                } else if self.drag.is_active() {
                    self.tank.handle_key_event(key)
                } else if self.registry.search_mode {
                    self.handle_search_key_event(key)
                } else if let Some(action) = self.handle_lab_key_event(key) {
                    Ok(Some(action))
                } else {
                    self.registry.handle_key_event(key)
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.mode != AppMode::Running || !self.modals.is_empty() {
            return Ok(None);
        }

        let (column, row) = (mouse.column, mouse.row);
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.tank.button_at(column, row) {
                    Some(action)
                } else if let Some(index) = self.registry.row_at(column, row, &self.library) {
                    self.registry.list_state.select(Some(index));
                    match self.registry.focused_row(&self.library) {
                        Some(RegistryRow::Header { .. }) => Some(Action::ToggleCategory),
                        Some(RegistryRow::Gene(_)) => Some(Action::GrabFocused),
                        None => None,
                    }
                } else {
                    None
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if self.drag.is_active() => {
                Some(Action::HoverTank(self.tank.contains(column, row)))
            }
            MouseEventKind::Up(MouseButton::Left) if self.drag.is_active() => {
                self.drag.hover(self.tank.contains(column, row));
                Some(Action::ReleaseDrag)
            }
            MouseEventKind::ScrollDown if self.dashboard.contains(column, row) => {
                Some(Action::ScrollLogDown)
            }
            MouseEventKind::ScrollUp if self.dashboard.contains(column, row) => {
                Some(Action::ScrollLogUp)
            }
            MouseEventKind::ScrollDown if self.registry.contains(column, row) => {
                Some(Action::NextItem)
            }
            MouseEventKind::ScrollUp if self.registry.contains(column, row) => {
                Some(Action::PrevItem)
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash {
                    return self.splash.update(Action::Tick);
                }
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Registry (delegate to RegistryComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => self.registry.next(&self.library),
            Action::PrevItem => self.registry.previous(&self.library),
            Action::FirstItem => self.registry.select_first(&self.library),
            Action::LastItem => self.registry.select_last(&self.library),
            Action::ToggleCategory => self.registry.toggle_category(&self.library),

            Action::EnterSearchMode => self.registry.enter_search_mode(),
            Action::ExitSearchMode => self.registry.exit_search_mode(),
            Action::SearchInput(c) => self.registry.search_input(c, &self.library),
            Action::SearchBackspace => self.registry.search_backspace(&self.library),
            Action::ClearSearch => self.registry.clear_search(&self.library),

            // ─────────────────────────────────────────────────────────────────
            // Drag & Drop
            // ─────────────────────────────────────────────────────────────────
            Action::GrabFocused => {
                if let Some(gene) = self.registry.focused_gene(&self.library) {
                    self.drag.begin(gene);
                }
            }
            Action::HoverTank(over) => self.drag.hover(over),
            Action::ReleaseDrag => {
                if let Some(message) = self.drag.release() {
                    return Ok(Some(Action::Drop(message)));
                }
                self.status_message = Some("Released outside the tank".to_string());
            }
            Action::CancelDrag => {
                self.drag.cancel();
                self.status_message = Some("Drag cancelled".to_string());
            }
            Action::QuickIntegrate => match self.registry.focused_row(&self.library) {
                Some(RegistryRow::Header { .. }) => {
                    return Ok(Some(Action::ToggleCategory));
                }
                Some(RegistryRow::Gene(gene)) => {
                    self.drag.begin(gene);
                    self.drag.hover(true);
                    return Ok(Some(Action::ReleaseDrag));
                }
                None => {}
            },
            Action::Drop(message) => {
                if !self.tank.accepts(message.kind) {
                    return Ok(None);
                }
                let name = message.item.name.clone();
                self.status_message = Some(match self.lab.append(message.item) {
                    AppendOutcome::Integrated => {
                        self.dashboard.reset_scroll();
                        format!("Integrated {}", name)
                    }
                    AppendOutcome::AlreadyPresent => format!("{} is already in the tank", name),
                });
            }

            // ─────────────────────────────────────────────────────────────────
            // Lab
            // ─────────────────────────────────────────────────────────────────
            Action::WipeLab => {
                self.lab.clear();
                self.dashboard.reset_scroll();
                self.status_message = Some("Tank wiped".to_string());
            }
            Action::ExportSerum => self.export_serum(),
            Action::ScrollLogUp => self.dashboard.scroll_up(),
            Action::ScrollLogDown => self.dashboard.scroll_down(),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.quit_dialog.strands = self.lab.len();
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        if self.mode == AppMode::Splash {
            return self.splash.draw(frame, area);
        }

        let layout = calculate_lab_layout(area);

        render_registry(
            frame,
            &layout,
            &mut self.registry,
            &self.library,
            &self.lab,
            &self.drag,
        );
        render_tank(frame, &layout, &mut self.tank, &self.lab, &self.drag);
        render_dashboard(frame, &layout, &mut self.dashboard, &self.lab);
        self.render_status_bar(frame, layout.status);
        self.render_help_bar(frame, layout.help);

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }

        Ok(())
    }
}
