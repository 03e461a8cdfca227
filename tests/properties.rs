//! Property tests for run invariants over random instances.

use proptest::prelude::*;
use u_colony::aco::{AcoConfig, AcoRunner, Candidate, Decision, KnapsackProblem, PheromoneTable};

fn brute_force(problem: &KnapsackProblem) -> f64 {
    let n = problem.len();
    (0u32..(1 << n))
        .map(|mask| {
            let decisions = (0..n).map(|i| mask & (1 << i) != 0).collect();
            problem.fitness(&problem.evaluate(decisions).unwrap())
        })
        .fold(0.0, f64::max)
}

fn instance() -> impl Strategy<Value = KnapsackProblem> {
    (0usize..10)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(1u32..50, n),
                prop::collection::vec(0u32..100, n),
                0u32..200,
            )
        })
        .prop_map(|(w, v, c)| {
            KnapsackProblem::new(
                w.into_iter().map(f64::from).collect(),
                v.into_iter().map(f64::from).collect(),
                f64::from(c),
            )
            .unwrap()
        })
}

fn small_config(seed: u64) -> AcoConfig {
    AcoConfig::default()
        .with_num_ants(5)
        .with_max_iterations(15)
        .with_seed(seed)
}

proptest! {
    #[test]
    fn best_is_feasible_and_consistent(problem in instance(), seed in any::<u64>()) {
        let result = AcoRunner::run(&problem, &small_config(seed)).unwrap();

        prop_assert_eq!(result.best.decisions.len(), problem.len());
        prop_assert!(result.best_weight <= problem.capacity());

        let selected_value: f64 = result.best.selected_items().iter().map(|&i| problem.value(i)).sum();
        prop_assert_eq!(result.best_value, selected_value);
        prop_assert!(result.best_value <= brute_force(&problem));
    }

    #[test]
    fn history_is_monotone(problem in instance(), seed in any::<u64>()) {
        let result = AcoRunner::run(&problem, &small_config(seed)).unwrap();
        for w in result.value_history.windows(2) {
            prop_assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn same_seed_same_result(problem in instance(), seed in any::<u64>()) {
        let a = AcoRunner::run(&problem, &small_config(seed)).unwrap();
        let b = AcoRunner::run(&problem, &small_config(seed)).unwrap();
        prop_assert_eq!(a.best, b.best);
        prop_assert_eq!(a.value_history, b.value_history);
    }

    #[test]
    fn pheromone_stays_positive(
        rate in 0.0f64..0.999,
        cycles in 1usize..400,
        fitness in prop::collection::vec(0.0f64..1e6, 1..5),
    ) {
        let mut table = PheromoneTable::new(3, 0.1).unwrap();
        let candidates: Vec<Candidate> = fitness
            .iter()
            .enumerate()
            .map(|(k, _)| Candidate {
                decisions: vec![k % 2 == 0, k % 3 == 0, true],
                total_weight: 0.0,
                total_value: 0.0,
            })
            .collect();

        for c in 0..cycles {
            table.evaporate(rate).unwrap();
            // only deposit on some cycles so pure evaporation is exercised too
            if c % 7 == 0 {
                table.reinforce(&candidates, &fitness, 100.0).unwrap();
            }
        }
        for item in 0..table.len() {
            for d in Decision::ALL {
                prop_assert!(table.get(item, d) > 0.0);
            }
        }
    }

    #[test]
    fn fitness_is_pure(problem in instance(), mask in any::<u32>()) {
        let decisions: Vec<bool> = (0..problem.len()).map(|i| mask & (1 << i) != 0).collect();
        let c = problem.evaluate(decisions.clone()).unwrap();
        let first = problem.fitness(&c);
        prop_assert_eq!(problem.fitness(&c), first);
        prop_assert_eq!(problem.fitness(&problem.evaluate(decisions).unwrap()), first);
    }
}
