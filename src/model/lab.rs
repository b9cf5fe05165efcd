//! Lab state - the deduplicated selection of genes in the tank
//!
//! The tank only grows by `append` and only shrinks by a full `clear`.
//! Every transition records an entry in the system log.

use super::gene::Gene;
use chrono::{DateTime, Local};
use rand::Rng;
use std::collections::{HashSet, VecDeque};

/// Maximum number of log entries kept in memory
pub const MAX_LOG_ENTRIES: usize = 200;

pub const BOOT_MESSAGE: &str = "[SYSTEM]: Lab Online. Bioshields at 100%.";
pub const PURGE_MESSAGE: &str = "[SYSTEM]: Workspace Purged. Clean Slate.";

/// A single line (or group of lines) in the system log
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl LogEntry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            message: message.into(),
        }
    }

    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Result of dropping a gene into the tank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Integrated,
    AlreadyPresent,
}

/// Selection state plus the system log
#[derive(Debug)]
pub struct LabState {
    active: Vec<Gene>,
    seen: HashSet<String>,
    /// Newest entry first
    logs: VecDeque<LogEntry>,
}

impl Default for LabState {
    fn default() -> Self {
        Self::new()
    }
}

impl LabState {
    pub fn new() -> Self {
        let mut logs = VecDeque::new();
        logs.push_front(LogEntry::new(BOOT_MESSAGE));
        Self {
            active: Vec::new(),
            seen: HashSet::new(),
            logs,
        }
    }

    /// Genes in the tank, in drop order
    pub fn active(&self) -> &[Gene] {
        &self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    /// Log entries, newest first
    pub fn logs(&self) -> impl Iterator<Item = &LogEntry> {
        self.logs.iter()
    }

    pub fn log_len(&self) -> usize {
        self.logs.len()
    }

    /// Add a gene to the tank unless a gene with the same id is already there
    pub fn append(&mut self, gene: Gene) -> AppendOutcome {
        if self.seen.contains(&gene.id) {
            log::debug!("Ignoring duplicate drop of {}", gene.id);
            return AppendOutcome::AlreadyPresent;
        }

        let mut message = format!("[SEQUENCE]: Integrated {}.", gene.name);
        if gene.is_animal() {
            let stability = rand::thread_rng().gen_range(70..=99);
            message.push_str(&format!(
                "\n[OPTIMIZER]: Animal DNA detected. Stability: {}%.",
                stability
            ));
        }

        log::info!("Integrated gene {} ({})", gene.id, gene.name);
        self.seen.insert(gene.id.clone());
        self.active.push(gene);
        self.record(message);
        AppendOutcome::Integrated
    }

    /// Empty the tank
    pub fn clear(&mut self) {
        log::info!("Purging {} genes from the tank", self.active.len());
        self.active.clear();
        self.seen.clear();
        self.record(PURGE_MESSAGE);
    }

    /// Record a log entry, dropping the oldest entries past the cap
    pub fn record(&mut self, message: impl Into<String>) {
        self.logs.push_front(LogEntry::new(message));
        self.logs.truncate(MAX_LOG_ENTRIES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheetah() -> Gene {
        Gene::new("a1", "Cheetah ACTN3 Sprint").with_origin("Cheetah")
    }

    fn puma() -> Gene {
        Gene::new("a2", "Puma Vertical Leap").with_origin("Puma")
    }

    fn human() -> Gene {
        Gene::new("h1", "Neural Pathway Alpha").with_origin("Human")
    }

    fn ids(lab: &LabState) -> Vec<&str> {
        lab.active().iter().map(|g| g.id.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let lab = LabState::new();
        assert!(lab.is_empty());
        assert_eq!(lab.log_len(), 1);
        assert_eq!(lab.logs().next().unwrap().message, BOOT_MESSAGE);
    }

    #[test]
    fn test_append_twice_is_noop() {
        let mut lab = LabState::new();
        assert_eq!(lab.append(cheetah()), AppendOutcome::Integrated);
        assert_eq!(lab.append(cheetah()), AppendOutcome::AlreadyPresent);

        assert_eq!(ids(&lab), vec!["a1"]);
        // Boot line + one integration
        assert_eq!(lab.log_len(), 2);
    }

    #[test]
    fn test_append_sequence_has_distinct_ids() {
        let mut lab = LabState::new();
        let drops = [cheetah(), puma(), cheetah(), human(), puma(), human()];
        for gene in drops {
            lab.append(gene);
        }

        assert_eq!(ids(&lab), vec!["a1", "a2", "h1"]);
        assert_eq!(lab.len(), 3);
        assert!(lab.contains("h1"));
        assert!(!lab.contains("e1"));
    }

    #[test]
    fn test_append_logs_optimizer_for_animal_dna() {
        let mut lab = LabState::new();
        lab.append(cheetah());

        let latest = &lab.logs().next().unwrap().message;
        assert!(latest.starts_with("[SEQUENCE]: Integrated Cheetah ACTN3 Sprint."));
        assert!(latest.contains("[OPTIMIZER]: Animal DNA detected. Stability: "));
    }

    #[test]
    fn test_append_human_has_no_optimizer_line() {
        let mut lab = LabState::new();
        lab.append(human());

        let latest = &lab.logs().next().unwrap().message;
        assert_eq!(latest, "[SEQUENCE]: Integrated Neural Pathway Alpha.");
    }

    #[test]
    fn test_clear_empties_and_logs_purge() {
        let mut lab = LabState::new();
        lab.append(cheetah());
        lab.append(puma());

        lab.clear();

        assert!(lab.is_empty());
        assert!(!lab.contains("a1"));
        assert_eq!(lab.logs().next().unwrap().message, PURGE_MESSAGE);

        // A cleared gene can be integrated again
        assert_eq!(lab.append(cheetah()), AppendOutcome::Integrated);
    }

    #[test]
    fn test_clear_on_empty_lab() {
        let mut lab = LabState::new();
        lab.clear();
        assert!(lab.is_empty());
        assert_eq!(lab.log_len(), 2);
    }

    #[test]
    fn test_log_is_capped() {
        let mut lab = LabState::new();
        for i in 0..(MAX_LOG_ENTRIES + 25) {
            lab.record(format!("entry {}", i));
        }
        assert_eq!(lab.log_len(), MAX_LOG_ENTRIES);
        assert_eq!(
            lab.logs().next().unwrap().message,
            format!("entry {}", MAX_LOG_ENTRIES + 24)
        );
    }

    #[test]
    fn test_log_entry_time_format() {
        let entry = LogEntry::new("x");
        assert_eq!(entry.formatted_time().len(), 8);
    }
}
