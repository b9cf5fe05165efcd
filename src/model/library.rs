//! Gene library - the static, category-partitioned catalog
//!
//! The library is generated once at startup and never mutated afterwards.
//! Views receive it by reference and derive filtered copies from it.

use super::gene::{Ability, Gene};
use std::borrow::Cow;

const STRAND_PREFIXES: [&str; 8] = [
    "Xeno", "Proto", "Neo", "Cryo", "Aether", "Void", "Bio", "Cyber",
];
const STRAND_SUFFIXES: [&str; 6] = ["Strand", "Helix", "Node", "Link", "Core", "Catalyst"];
const GENERATED_STRANDS: usize = 500;

/// A named group of genes, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub label: String,
    pub genes: Vec<Gene>,
}

/// Ordered mapping from category label to genes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    categories: Vec<Category>,
}

impl Library {
    /// Build the lab catalog: three curated categories followed by the
    /// generated synthetic strands.
    pub fn generate() -> Self {
        let mut library = Library::default();

        library.push_all(
            "Human Baseline",
            vec![
                Gene::new("h1", "Neural Pathway Alpha")
                    .with_origin("Human")
                    .with_ability(Ability::Intelligence),
                Gene::new("h2", "Skeletal Density Max")
                    .with_origin("Human")
                    .with_ability(Ability::Durability),
                Gene::new("h3", "Fast-Twitch Muscle")
                    .with_origin("Human")
                    .with_ability(Ability::Speed),
            ],
        );
        library.push_all(
            "Apex Predators",
            vec![
                Gene::new("a1", "Cheetah ACTN3 Sprint")
                    .with_origin("Cheetah")
                    .with_ability(Ability::Speed),
                Gene::new("a2", "Puma Vertical Leap")
                    .with_origin("Puma")
                    .with_ability(Ability::Leap),
                Gene::new("a3", "Tapetum Lucidum")
                    .with_origin("Leopard")
                    .with_ability(Ability::Visual),
                Gene::new("a4", "Electro-Perception")
                    .with_origin("Shark")
                    .with_ability(Ability::Visual),
            ],
        );
        library.push_all(
            "Extremophiles",
            vec![
                Gene::new("e1", "Tardigrade Shield")
                    .with_origin("Tardigrade")
                    .with_ability(Ability::Durability),
                Gene::new("e2", "Bioluminescence")
                    .with_origin("Anglerfish")
                    .with_ability(Ability::Visual),
                Gene::new("e3", "Hemoglobin Optimizer")
                    .with_origin("Elephant Seal")
                    .with_ability(Ability::Stamina),
            ],
        );

        for i in 1..=GENERATED_STRANDS {
            let even = i % 2 == 0;
            let category = if even { "Synthetic Lab" } else { "Xeno-Class Classified" };
            let ability = match i % 4 {
                0 => Ability::Speed,
                1 => Ability::Leap,
                2 => Ability::Visual,
                _ => Ability::Durability,
            };
            let gene = Gene::new(
                format!("gen_{}", i),
                format!(
                    "{} {} #{}",
                    STRAND_PREFIXES[i % STRAND_PREFIXES.len()],
                    STRAND_SUFFIXES[i % STRAND_SUFFIXES.len()],
                    1000 + i
                ),
            )
            .with_origin(if even { "Laboratory" } else { "Unknown" })
            .with_ability(ability);

            library.push(category, gene);
        }

        library
    }

    fn push(&mut self, label: &str, gene: Gene) {
        match self.categories.iter_mut().find(|c| c.label == label) {
            Some(category) => category.genes.push(gene),
            None => self.categories.push(Category {
                label: label.to_string(),
                genes: vec![gene],
            }),
        }
    }

    fn push_all(&mut self, label: &str, genes: Vec<Gene>) {
        for gene in genes {
            self.push(label, gene);
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Total number of genes across all categories
    pub fn gene_count(&self) -> usize {
        self.categories.iter().map(|c| c.genes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Filter by a case-insensitive search term over name and origin.
    ///
    /// An empty term borrows the library unchanged. Otherwise only categories
    /// with at least one match are kept, and genes keep their relative order.
    pub fn filter(&self, term: &str) -> Cow<'_, Library> {
        if term.is_empty() {
            return Cow::Borrowed(self);
        }

        let needle = term.to_lowercase();
        let categories = self
            .categories
            .iter()
            .filter_map(|category| {
                let genes: Vec<Gene> = category
                    .genes
                    .iter()
                    .filter(|gene| gene.matches(&needle))
                    .cloned()
                    .collect();
                (!genes.is_empty()).then(|| Category {
                    label: category.label.clone(),
                    genes,
                })
            })
            .collect();

        Cow::Owned(Library { categories })
    }
}
