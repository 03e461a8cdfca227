//! End-to-end runs on small reference instances, checked against
//! exhaustive enumeration.

use u_colony::aco::{AcoConfig, AcoRunner, KnapsackProblem};
use u_colony::AcoError;

/// Exact optimum by enumerating every subset.
fn brute_force(weights: &[f64], values: &[f64], capacity: f64) -> f64 {
    let n = weights.len();
    (0u32..(1 << n))
        .filter_map(|mask| {
            let (w, v) = (0..n)
                .filter(|i| mask & (1 << i) != 0)
                .fold((0.0, 0.0), |(w, v), i| (w + weights[i], v + values[i]));
            (w <= capacity).then_some(v)
        })
        .fold(0.0, f64::max)
}

fn check_feasible(problem: &KnapsackProblem, decisions: &[bool], value: f64, weight: f64) {
    let (w, v) = decisions
        .iter()
        .enumerate()
        .filter(|(_, &d)| d)
        .fold((0.0, 0.0), |(w, v), (i, _)| {
            (w + problem.weight(i), v + problem.value(i))
        });
    assert_eq!(w, weight);
    assert_eq!(v, value);
    assert!(weight <= problem.capacity());
}

#[test]
fn test_five_items_capacity_100() {
    let weights = vec![10.0, 20.0, 30.0, 40.0, 50.0];
    let values = vec![60.0, 100.0, 120.0, 160.0, 200.0];
    let optimum = brute_force(&weights, &values, 100.0);
    assert_eq!(optimum, 440.0);

    let problem = KnapsackProblem::new(weights, values, 100.0).unwrap();
    let result = AcoRunner::run(&problem, &AcoConfig::default().with_seed(42)).unwrap();

    assert!(result.best_value > 0.0);
    assert!(
        result.best_value <= optimum,
        "heuristic {} exceeds exact optimum {}",
        result.best_value,
        optimum
    );
    assert_eq!(result.iterations, 100);
    check_feasible(&problem, &result.best.decisions, result.best_value, result.best_weight);
}

#[test]
fn test_five_items_capacity_60() {
    let weights = vec![5.0, 10.0, 15.0, 22.0, 25.0];
    let values = vec![30.0, 40.0, 45.0, 77.0, 90.0];
    let optimum = brute_force(&weights, &values, 60.0);

    let problem = KnapsackProblem::new(weights, values, 60.0).unwrap();
    let result = AcoRunner::run(&problem, &AcoConfig::default().with_seed(42)).unwrap();

    assert!(result.best_value > 0.0);
    assert!(result.best_value <= optimum);
    check_feasible(&problem, &result.best.decisions, result.best_value, result.best_weight);
}

#[test]
fn test_uniform_density_reaches_optimum() {
    // value = 10 * weight, so any subset of weight 20 is optimal
    let weights: Vec<f64> = (1..=8).map(f64::from).collect();
    let values: Vec<f64> = weights.iter().map(|w| w * 10.0).collect();
    assert_eq!(brute_force(&weights, &values, 20.0), 200.0);

    let result = AcoRunner::solve(weights, values, 20.0, &AcoConfig::default().with_seed(42))
        .unwrap();

    assert_eq!(result.best_value, 200.0);
    assert_eq!(result.best_weight, 20.0);
    assert_eq!(result.best_bits().len(), 8);
}

#[test]
fn test_empty_instance() {
    let result = AcoRunner::solve(vec![], vec![], 10.0, &AcoConfig::default().with_seed(1))
        .unwrap();
    assert!(result.best.decisions.is_empty());
    assert_eq!(result.best_value, 0.0);
    assert_eq!(result.best_weight, 0.0);
}

#[test]
fn test_zero_capacity() {
    let result = AcoRunner::solve(
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        0.0,
        &AcoConfig::default().with_seed(1),
    )
    .unwrap();
    assert_eq!(result.best_bits(), vec![0, 0, 0]);
    assert_eq!(result.best_value, 0.0);
}

#[test]
fn test_validation_errors() {
    let config = AcoConfig::default();
    assert!(matches!(
        AcoRunner::solve(vec![1.0], vec![1.0, 2.0], 5.0, &config),
        Err(AcoError::InvalidInput(_))
    ));
    assert!(matches!(
        AcoRunner::solve(vec![1.0], vec![1.0], -1.0, &config),
        Err(AcoError::InvalidInput(_))
    ));
    assert!(matches!(
        AcoRunner::solve(
            vec![1.0],
            vec![1.0],
            5.0,
            &config.clone().with_evaporation_rate(2.0)
        ),
        Err(AcoError::InvalidConfig(_))
    ));
}

#[test]
fn test_elapsed_reported() {
    let result = AcoRunner::solve(
        vec![10.0, 20.0, 30.0],
        vec![60.0, 100.0, 120.0],
        50.0,
        &AcoConfig::default().with_seed(3),
    )
    .unwrap();
    assert!(result.elapsed_secs() >= 0.0);
    assert_eq!(result.elapsed_secs(), result.elapsed.as_secs_f64());
}

#[test]
fn test_extreme_density_item_is_packed() {
    // density^beta overflows f64 for the first item
    let result = AcoRunner::solve(
        vec![1.0, 1.0],
        vec![1e160, 1.0],
        5.0,
        &AcoConfig::default().with_seed(1),
    )
    .unwrap();
    assert_eq!(result.best_bits()[0], 1);
    assert!(result.best_value >= 1e160);
}
