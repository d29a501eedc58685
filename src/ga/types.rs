//! Core GA types.
//!
//! A [`Chromosome`] is one bit per case (true = pursue). Its fitness is
//! computed by the runner from the case pool and the capacity; higher is
//! better.

/// How infeasible (overweight) chromosomes are scored.
///
/// Infeasible individuals stay in the population so crossover and mutation
/// can repair them, but they always rank below every feasible one with
/// positive value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InfeasiblePenalty {
    /// Fitness is `-(total_weight - capacity)`: always negative, and closer
    /// to zero the nearer the chromosome is to fitting.
    #[default]
    Overweight,

    /// Fitness is `0`, the same as the empty selection.
    Zero,
}

impl InfeasiblePenalty {
    /// Fitness of a chromosome with the given totals.
    pub fn fitness(self, total_value: f64, total_weight: f64, capacity: f64) -> f64 {
        if total_weight <= capacity {
            return total_value;
        }
        match self {
            InfeasiblePenalty::Overweight => -(total_weight - capacity),
            InfeasiblePenalty::Zero => 0.0,
        }
    }
}

/// A candidate selection in the GA population.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    /// One gene per pool case, in pool order.
    pub genes: Vec<bool>,

    /// Fitness; `f64::NEG_INFINITY` until evaluated.
    pub fitness: f64,

    /// Sum of selected values.
    pub total_value: f64,

    /// Sum of selected hour costs.
    pub total_weight: f64,

    /// Whether `total_weight` fits the capacity.
    pub feasible: bool,
}

impl Chromosome {
    /// Creates an unevaluated chromosome.
    pub fn new(genes: Vec<bool>) -> Self {
        Self {
            genes,
            fitness: f64::NEG_INFINITY,
            total_value: 0.0,
            total_weight: 0.0,
            feasible: false,
        }
    }

    /// Pool positions of the set genes, ascending.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &g)| g.then_some(i))
            .collect()
    }

    /// Number of set genes.
    pub fn count_selected(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feasible_fitness_is_value() {
        for p in [InfeasiblePenalty::Overweight, InfeasiblePenalty::Zero] {
            assert_eq!(p.fitness(220.0, 50.0, 50.0), 220.0);
        }
    }

    #[test]
    fn test_overweight_penalty() {
        let f = InfeasiblePenalty::Overweight.fitness(280.0, 60.0, 50.0);
        assert_eq!(f, -10.0);
        let closer = InfeasiblePenalty::Overweight.fitness(280.0, 55.0, 50.0);
        assert!(closer > f);
        assert!(closer < 0.0);
    }

    #[test]
    fn test_zero_penalty() {
        assert_eq!(InfeasiblePenalty::Zero.fitness(280.0, 60.0, 50.0), 0.0);
    }

    #[test]
    fn test_selected_indices() {
        let c = Chromosome::new(vec![true, false, true, false]);
        assert_eq!(c.selected_indices(), vec![0, 2]);
        assert_eq!(c.count_selected(), 2);
        assert_eq!(c.fitness, f64::NEG_INFINITY);
    }
}
