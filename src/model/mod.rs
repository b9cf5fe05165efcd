//! Model layer - lab data and presentation state
//!
//! - `Library` - Static gene catalog and its search filter
//! - `LabState` - Deduplicated tank contents and the system log
//! - `DragSession` - In-flight drag gesture
//! - `ModalStack` - Modal overlay management

pub mod drag;
pub mod gene;
pub mod lab;
pub mod library;
pub mod modal;
pub mod status;
pub mod ui;

pub use drag::{DragKind, DragSession, DropMessage};
pub use gene::{Ability, Gene};
pub use lab::{AppendOutcome, LabState};
pub use library::Library;
pub use status::{LabStats, SerumProtocol};
