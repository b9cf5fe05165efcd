//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod dashboard;
pub mod help_dialog;
pub mod layout;
pub mod notice_dialog;
pub mod quit_dialog;
pub mod registry;
pub mod splash;
pub mod tank;

pub use dashboard::{render_dashboard, DashboardComponent};
pub use help_dialog::HelpDialog;
pub use layout::{calculate_lab_layout, centered_popup};
pub use notice_dialog::NoticeDialog;
pub use quit_dialog::QuitDialog;
pub use registry::{render_registry, RegistryComponent, RegistryRow};
pub use splash::SplashComponent;
pub use tank::{render_tank, TankComponent};
