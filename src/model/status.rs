//! Dashboard projections of the tank
//!
//! Everything here is a pure function of the active gene list.

use super::gene::{Ability, Gene};

/// Strand count above which the serum is flagged as unstable
const STABLE_STRAND_LIMIT: usize = 5;

pub const EMPTY_EXPORT_NOTICE: &str = "No genetic material detected in playground.";

/// Display stats derived from the active genes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabStats {
    pub strands: usize,
    pub speed: &'static str,
    pub leap: &'static str,
    pub vision: &'static str,
    /// Percentage, 0..=100
    pub stability: u8,
}

impl LabStats {
    pub fn from_genes(genes: &[Gene]) -> Self {
        let any = |ability: Ability| genes.iter().any(|g| g.has_ability(ability));
        let penalty = genes.len().saturating_mul(5).min(100) as u8;

        Self {
            strands: genes.len(),
            speed: if any(Ability::Speed) { "▲ 38 MPH" } else { "12 MPH" },
            leap: if any(Ability::Leap) { "▲ 18 FT" } else { "3 FT" },
            vision: if any(Ability::Visual) { "NIGHT SIGHT" } else { "NORMAL" },
            stability: 100 - penalty,
        }
    }
}

/// The exported serum protocol text
#[derive(Debug, Clone)]
pub struct SerumProtocol<'a> {
    genes: &'a [Gene],
    project_code: u16,
}

impl<'a> SerumProtocol<'a> {
    /// Returns `None` when there is nothing to export
    pub fn new(genes: &'a [Gene], project_code: u16) -> Option<Self> {
        if genes.is_empty() {
            return None;
        }
        Some(Self { genes, project_code })
    }

    /// `Active Strands: <comma-joined names>`
    pub fn strand_line(&self) -> String {
        let names: Vec<&str> = self.genes.iter().map(|g| g.name.as_str()).collect();
        format!("Active Strands: {}", names.join(", "))
    }

    pub fn stability_rating(&self) -> &'static str {
        if self.genes.len() > STABLE_STRAND_LIMIT {
            "CAUTION: MULTI-ORGANISM COLLAPSE POSSIBLE"
        } else {
            "STABLE"
        }
    }

    pub fn render(&self) -> String {
        format!(
            "--- GENETIC SERUM PROTOCOL ---\n\
             Project Code: GEN-{}\n\
             {}\n\n\
             Optimizer Dialect: Human-V1.2\n\
             Stability Rating: {}\n\
             --- END OF DATA ---",
            self.project_code,
            self.strand_line(),
            self.stability_rating()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genes(n: usize) -> Vec<Gene> {
        (1..=n)
            .map(|i| Gene::new(format!("gen_{}", i), format!("Strand {}", i)))
            .collect()
    }

    #[test]
    fn test_stats_empty() {
        let stats = LabStats::from_genes(&[]);
        assert_eq!(
            stats,
            LabStats {
                strands: 0,
                speed: "12 MPH",
                leap: "3 FT",
                vision: "NORMAL",
                stability: 100,
            }
        );
    }

    #[test]
    fn test_stats_ability_flags() {
        let genes = vec![
            Gene::new("a1", "Cheetah ACTN3 Sprint").with_ability(Ability::Speed),
            Gene::new("a3", "Tapetum Lucidum").with_ability(Ability::Visual),
        ];
        let stats = LabStats::from_genes(&genes);

        assert_eq!(stats.strands, 2);
        assert_eq!(stats.speed, "▲ 38 MPH");
        assert_eq!(stats.leap, "3 FT");
        assert_eq!(stats.vision, "NIGHT SIGHT");
        assert_eq!(stats.stability, 90);
    }

    #[test]
    fn test_stability_saturates_at_zero() {
        assert_eq!(LabStats::from_genes(&genes(20)).stability, 0);
        assert_eq!(LabStats::from_genes(&genes(50)).stability, 0);
    }

    #[test]
    fn test_protocol_requires_genes() {
        assert!(SerumProtocol::new(&[], 1234).is_none());
    }

    #[test]
    fn test_protocol_render() {
        let genes = vec![
            Gene::new("a1", "Cheetah ACTN3 Sprint"),
            Gene::new("a2", "Puma Vertical Leap"),
        ];
        let protocol = SerumProtocol::new(&genes, 4321).unwrap();

        assert_eq!(
            protocol.render(),
            "--- GENETIC SERUM PROTOCOL ---\n\
             Project Code: GEN-4321\n\
             Active Strands: Cheetah ACTN3 Sprint, Puma Vertical Leap\n\
             \n\
             Optimizer Dialect: Human-V1.2\n\
             Stability Rating: STABLE\n\
             --- END OF DATA ---"
        );
    }

    #[test]
    fn test_protocol_caution_above_limit() {
        let five = genes(5);
        let six = genes(6);
        assert_eq!(SerumProtocol::new(&five, 1000).unwrap().stability_rating(), "STABLE");
        assert_eq!(
            SerumProtocol::new(&six, 1000).unwrap().stability_rating(),
            "CAUTION: MULTI-ORGANISM COLLAPSE POSSIBLE"
        );
    }
}
