//! Probabilistic construction of a single assignment.
//!
//! # Algorithm
//!
//! Starting from an empty sequence with every item unvisited, each step
//! weighs the unvisited candidates by
//!
//! ```text
//! w(j) = tau[prev][j]^alpha * eta[j]^beta
//! ```
//!
//! (with `tau = 1` on the first step, where there is no previous item),
//! samples one candidate proportionally to its weight, and appends it.
//! After `N` steps the sequence is a permutation of `0..N`.
//!
//! # Reference
//!
//! Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a Colony
//! of Cooperating Agents", *IEEE Trans. SMC-B* 26(1), 29-41.

use super::pheromone::PheromoneModel;
use super::types::AcoProblem;
use crate::error::{Result, SlottingError};
use rand::Rng;

/// Pheromone used on the first step, where there is no incoming edge.
const BOOTSTRAP_TAU: f64 = 1.0;

/// One constructed solution and its cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Ant {
    pub assignment: Vec<usize>,
    pub cost: f64,
}

/// Builds assignments against a read-only pheromone snapshot.
///
/// `eta^beta` is computed once per constructor, since `eta` is static.
#[derive(Debug, Clone)]
pub struct AntConstructor<'a> {
    model: &'a PheromoneModel,
    alpha: f64,
    eta_beta: Vec<f64>,
}

impl<'a> AntConstructor<'a> {
    pub fn new(model: &'a PheromoneModel, alpha: f64, beta: f64) -> Self {
        let eta_beta = model.heuristic().iter().map(|e| e.powf(beta)).collect();
        Self {
            model,
            alpha,
            eta_beta,
        }
    }

    /// Constructs one assignment and evaluates it with `problem`.
    pub fn construct<P: AcoProblem, R: Rng>(&self, problem: &P, rng: &mut R) -> Result<Ant> {
        let assignment = self.construct_sequence(rng)?;
        let cost = problem.cost(&assignment);
        Ok(Ant { assignment, cost })
    }

    /// Constructs one permutation of `0..N` without evaluating it.
    ///
    /// # Errors
    ///
    /// [`SlottingError::Arithmetic`] if every remaining candidate has zero
    /// (or non-finite total) weight. The heuristic epsilon keeps `eta`
    /// positive, but `tau` on unused edges can underflow to `0.0` after many
    /// iterations at a high evaporation rate.
    pub fn construct_sequence<R: Rng>(&self, rng: &mut R) -> Result<Vec<usize>> {
        let n = self.model.size();
        let mut sequence = Vec::with_capacity(n);
        let mut unvisited: Vec<usize> = (0..n).collect();
        let mut weights = Vec::with_capacity(n);

        for step in 0..n {
            weights.clear();
            let prev = sequence.last().copied();
            for &j in &unvisited {
                let tau = match prev {
                    Some(a) => self.model.tau(a, j),
                    None => BOOTSTRAP_TAU,
                };
                weights.push(tau.powf(self.alpha) * self.eta_beta[j]);
            }

            let slot = sample_index(&weights, rng).ok_or_else(|| {
                SlottingError::arithmetic(format!(
                    "candidate weights sum to a non-positive value at step {step}"
                ))
            })?;
            sequence.push(unvisited.swap_remove(slot));
        }

        Ok(sequence)
    }
}

/// Roulette-wheel draw: one uniform sample against the cumulative sum.
///
/// Returns `None` when the total weight is not a positive finite number.
fn sample_index<R: Rng>(weights: &[f64], rng: &mut R) -> Option<usize> {
    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return None;
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last_positive = None;
    for (i, &w) in weights.iter().enumerate() {
        if w > 0.0 {
            last_positive = Some(i);
        }
        cumulative += w;
        if cumulative > threshold {
            return Some(i);
        }
    }
    // round-off left the threshold past the final sum
    last_positive
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aco::pheromone::heuristic_from_values;
    use proptest::prelude::*;
    use u_numflow::random::create_rng;

    struct Weighted {
        distances: Vec<f64>,
        frequencies: Vec<f64>,
    }

    impl AcoProblem for Weighted {
        fn size(&self) -> usize {
            self.frequencies.len()
        }

        fn desirability(&self) -> Vec<f64> {
            self.frequencies.clone()
        }

        fn cost(&self, a: &[usize]) -> f64 {
            a.iter()
                .zip(&self.distances)
                .map(|(&item, d)| d * self.frequencies[item])
                .sum()
        }
    }

    fn is_permutation(seq: &[usize], n: usize) -> bool {
        let mut seen = vec![false; n];
        seq.len() == n
            && seq.iter().all(|&v| {
                if v >= n || seen[v] {
                    false
                } else {
                    seen[v] = true;
                    true
                }
            })
    }

    #[test]
    fn test_construct_returns_permutation_and_cost() {
        let problem = Weighted {
            distances: vec![0.0, 1.0, 2.0, 3.0],
            frequencies: vec![8.0, 4.0, 2.0, 1.0],
        };
        let eta = heuristic_from_values(&problem.desirability(), 0.01).unwrap();
        let model = PheromoneModel::new(1.0, eta);
        let ctor = AntConstructor::new(&model, 1.0, 2.0);
        let mut rng = create_rng(42);

        let ant = ctor.construct(&problem, &mut rng).unwrap();
        assert!(is_permutation(&ant.assignment, 4));
        assert_eq!(ant.cost, problem.cost(&ant.assignment));
    }

    #[test]
    fn test_single_item() {
        let model = PheromoneModel::new(1.0, vec![1.01]);
        let ctor = AntConstructor::new(&model, 1.0, 2.0);
        let mut rng = create_rng(0);
        assert_eq!(ctor.construct_sequence(&mut rng).unwrap(), vec![0]);
    }

    #[test]
    fn test_empty_model() {
        let model = PheromoneModel::new(1.0, Vec::new());
        let ctor = AntConstructor::new(&model, 1.0, 1.0);
        let mut rng = create_rng(0);
        assert!(ctor.construct_sequence(&mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_zero_weights_are_arithmetic_error() {
        // eta of zero cannot come from heuristic_from_values, only from a
        // hand-built model
        let model = PheromoneModel::new(1.0, vec![0.0, 0.0]);
        let ctor = AntConstructor::new(&model, 1.0, 1.0);
        let mut rng = create_rng(0);
        let err = ctor.construct_sequence(&mut rng).unwrap_err();
        assert!(err.is_arithmetic());
    }

    #[test]
    fn test_underflowed_pheromone_is_arithmetic_error() {
        let mut model = PheromoneModel::new(1.0, vec![1.0, 1.0]);
        for _ in 0..400 {
            model.evaporate(0.9);
        }
        assert_eq!(model.min_tau(), 0.0);

        // first step uses the bootstrap tau, second sees only zeroed edges
        let ctor = AntConstructor::new(&model, 1.0, 2.0);
        let err = ctor.construct_sequence(&mut create_rng(1)).unwrap_err();
        assert!(err.is_arithmetic());
        assert!(err.to_string().contains("step 1"));
    }

    #[test]
    fn test_does_not_mutate_model() {
        let model = PheromoneModel::new(0.7, vec![1.0, 0.5, 0.2]);
        let before = model.clone();
        let ctor = AntConstructor::new(&model, 1.0, 2.0);
        let mut rng = create_rng(3);
        for _ in 0..20 {
            ctor.construct_sequence(&mut rng).unwrap();
        }
        assert_eq!(model, before);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let model = PheromoneModel::new(1.0, vec![1.0, 0.8, 0.6, 0.4, 0.2]);
        let ctor = AntConstructor::new(&model, 1.0, 2.0);
        let a = ctor.construct_sequence(&mut create_rng(11)).unwrap();
        let b = ctor.construct_sequence(&mut create_rng(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_strong_heuristic_dominates_first_pick() {
        // with beta = 2, item 0 has weight 1.01^2 against 0.0101^2
        let eta = heuristic_from_values(&[100.0, 0.1], 0.01).unwrap();
        let model = PheromoneModel::new(1.0, eta);
        let ctor = AntConstructor::new(&model, 1.0, 2.0);
        let mut rng = create_rng(5);
        let first_zero = (0..200)
            .filter(|_| ctor.construct_sequence(&mut rng).unwrap()[0] == 0)
            .count();
        assert!(first_zero > 190, "item 0 first in only {first_zero}/200");
    }

    #[test]
    fn test_sample_index_skips_zero_weights() {
        let mut rng = create_rng(9);
        for _ in 0..100 {
            assert_eq!(sample_index(&[0.0, 2.0, 0.0], &mut rng), Some(1));
        }
        assert_eq!(sample_index(&[0.0, 0.0], &mut rng), None);
        assert_eq!(sample_index(&[f64::INFINITY, 1.0], &mut rng), None);
    }

    proptest! {
        #[test]
        fn prop_construction_is_permutation(
            freqs in proptest::collection::vec(0.0f64..1000.0, 1..40),
            tau0 in 0.01f64..10.0,
            alpha in 0.0f64..3.0,
            beta in 0.0f64..3.0,
            seed in any::<u64>(),
        ) {
            let eta = heuristic_from_values(&freqs, 0.01).unwrap();
            let model = PheromoneModel::new(tau0, eta);
            let ctor = AntConstructor::new(&model, alpha, beta);
            let mut rng = create_rng(seed);
            let seq = ctor.construct_sequence(&mut rng).unwrap();
            prop_assert!(is_permutation(&seq, freqs.len()));
        }
    }
}
