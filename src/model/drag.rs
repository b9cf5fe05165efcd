//! Drag and drop protocol between registry rows and the tank
//!
//! A drag is two discrete callbacks: `begin` captures the payload, `release`
//! delivers it as a [`DropMessage`] if the pointer is over a drop target.
//! The only state in between is the presentation flag for hovering.

use super::gene::Gene;

/// Kind of payload carried by a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Gene,
}

/// Payload delivered to a drop target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropMessage {
    pub kind: DragKind,
    pub item: Gene,
}

/// An in-flight drag gesture
#[derive(Debug, Default)]
pub struct DragSession {
    payload: Option<Gene>,
    over_target: bool,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging a gene. Replaces any payload already in flight.
    pub fn begin(&mut self, gene: Gene) {
        log::debug!("Drag started: {}", gene.id);
        self.payload = Some(gene);
        self.over_target = false;
    }

    pub fn is_active(&self) -> bool {
        self.payload.is_some()
    }

    /// Whether the given gene is the one being dragged
    pub fn is_dragging(&self, id: &str) -> bool {
        self.payload.as_ref().is_some_and(|g| g.id == id)
    }

    pub fn payload(&self) -> Option<&Gene> {
        self.payload.as_ref()
    }

    /// Update whether the pointer is over the drop target.
    ///
    /// Ignored when no drag is in flight.
    pub fn hover(&mut self, over_target: bool) {
        if self.is_active() {
            self.over_target = over_target;
        }
    }

    /// Whether a compatible drag is hovering over the drop target
    pub fn is_over_target(&self) -> bool {
        self.is_active() && self.over_target
    }

    /// Finish the gesture. Returns the drop message when released over the
    /// target; releasing anywhere else behaves like a cancel.
    pub fn release(&mut self) -> Option<DropMessage> {
        let over_target = std::mem::take(&mut self.over_target);
        let gene = self.payload.take()?;
        if over_target {
            Some(DropMessage {
                kind: DragKind::Gene,
                item: gene,
            })
        } else {
            log::debug!("Drag of {} released off target", gene.id);
            None
        }
    }

    pub fn cancel(&mut self) {
        self.payload = None;
        self.over_target = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gene() -> Gene {
        Gene::new("a1", "Cheetah ACTN3 Sprint")
    }

    #[test]
    fn test_release_over_target_delivers_payload() {
        let mut session = DragSession::new();
        session.begin(gene());
        assert!(session.is_dragging("a1"));
        assert!(!session.is_dragging("a2"));

        session.hover(true);
        assert!(session.is_over_target());

        let message = session.release().unwrap();
        assert_eq!(message.kind, DragKind::Gene);
        assert_eq!(message.item.id, "a1");
        assert!(!session.is_active());
        assert!(!session.is_over_target());
    }

    #[test]
    fn test_release_off_target_delivers_nothing() {
        let mut session = DragSession::new();
        session.begin(gene());
        session.hover(true);
        session.hover(false);

        assert!(session.release().is_none());
        assert!(!session.is_active());
    }

    #[test]
    fn test_cancel_clears_session() {
        let mut session = DragSession::new();
        session.begin(gene());
        session.hover(true);
        session.cancel();

        assert!(!session.is_active());
        assert!(!session.is_over_target());
        assert!(session.release().is_none());
    }

    #[test]
    fn test_hover_without_drag_is_ignored() {
        let mut session = DragSession::new();
        session.hover(true);
        assert!(!session.is_over_target());

        // A new drag does not inherit a stale hover
        session.begin(gene());
        assert!(!session.is_over_target());
    }
}
