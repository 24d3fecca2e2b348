//! Solver outputs from the gateway-placement experiments.
//!
//! Objectives per row: gateways used, energy, utilization factor. All three
//! are minimized.

use pareto_compare::SolverResult;

pub fn exact() -> Vec<Vec<f64>> {
    vec![
        vec![10.0, 687.0, 0.01002],
        vec![8.0, 767.0, 0.01101],
        vec![6.0, 904.0, 0.01205],
        vec![5.0, 1016.0, 0.01906],
        vec![4.0, 1164.0, 0.02407],
    ]
}

pub fn greedy() -> Vec<Vec<f64>> {
    vec![
        vec![12.0, 752.0, 0.012529],
        vec![11.0, 782.0, 0.013530],
        vec![10.0, 789.0, 0.014530],
        vec![9.0, 791.0, 0.015527],
        vec![7.0, 854.0, 0.016062],
        vec![6.0, 904.0, 0.019544],
        vec![5.0, 1016.0, 0.027116],
        vec![4.0, 1166.0, 0.045172],
    ]
}

pub fn moga() -> Vec<Vec<f64>> {
    vec![
        vec![30.0, 1292.0, 0.012],
        vec![29.0, 1367.0, 0.012],
        vec![26.0, 1427.0, 0.014],
        vec![16.0, 2294.0, 0.036],
        vec![15.0, 2504.0, 0.05],
    ]
}

pub fn all_solvers() -> Vec<SolverResult> {
    vec![
        SolverResult::new("CPLEX", exact()),
        SolverResult::new("Greedy", greedy()),
        SolverResult::new("MOGA", moga()),
    ]
}

/// Reference volumes over the (energy, UF) plane lifted by gateways.
pub const EXACT_VOLUME: f64 = 7.140_191_666_666_671;
pub const GREEDY_VOLUME: f64 = 21.817_894_833_333_337;
pub const MOGA_VOLUME: f64 = 88.953_333_333_333_38;

pub fn assert_close(got: f64, expected: f64) {
    assert!(
        (got - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "got {got}, expected {expected}"
    );
}
