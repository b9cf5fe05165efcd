//! Gene records - the draggable items of the lab

use std::fmt;

/// Ability tag carried by a gene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    Speed,
    Leap,
    Visual,
    Durability,
    Intelligence,
    Stamina,
}

impl Ability {
    pub fn name(&self) -> &'static str {
        match self {
            Ability::Speed => "Speed",
            Ability::Leap => "Leap",
            Ability::Visual => "Visual",
            Ability::Durability => "Durability",
            Ability::Intelligence => "Intelligence",
            Ability::Stamina => "Stamina",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single gene strand in the library
///
/// Identity is `id`: two genes with the same id are the same gene everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gene {
    pub id: String,
    pub name: String,
    pub origin: Option<String>,
    pub ability: Option<Ability>,
}

impl Gene {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            origin: None,
            ability: None,
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.ability = Some(ability);
        self
    }

    /// Whether the gene comes from a non-human donor.
    ///
    /// Genes without an origin are treated as non-human.
    pub fn is_animal(&self) -> bool {
        self.origin.as_deref() != Some("Human")
    }

    /// Case-insensitive substring match against name and origin.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .origin
                .as_ref()
                .is_some_and(|origin| origin.to_lowercase().contains(needle))
    }

    pub fn has_ability(&self, ability: Ability) -> bool {
        self.ability == Some(ability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_name_and_origin() {
        let gene = Gene::new("e3", "Hemoglobin Optimizer").with_origin("Elephant Seal");

        assert!(gene.matches("hemo"));
        assert!(gene.matches("seal"));
        assert!(gene.matches(""));
        assert!(!gene.matches("cheetah"));
    }

    #[test]
    fn test_matches_without_origin() {
        let gene = Gene::new("g1", "Neo Strand #1001");
        assert!(gene.matches("strand"));
        assert!(!gene.matches("laboratory"));
    }

    #[test]
    fn test_is_animal() {
        assert!(!Gene::new("h1", "Neural Pathway Alpha").with_origin("Human").is_animal());
        assert!(Gene::new("a1", "Cheetah ACTN3 Sprint").with_origin("Cheetah").is_animal());
        assert!(Gene::new("g1", "Void #1001").is_animal());
    }

    #[test]
    fn test_has_ability() {
        let gene = Gene::new("a2", "Puma Vertical Leap").with_ability(Ability::Leap);
        assert!(gene.has_ability(Ability::Leap));
        assert!(!gene.has_ability(Ability::Speed));
        assert_eq!(Ability::Leap.to_string(), "Leap");
    }
}
