use approx::assert_abs_diff_eq;
use ndarray::array;
use quadmin_core::QuadraticForm;
use quadmin_solve::registry::{Registry, RegistryError};

/// f(x, y) = 32x² + 19xy + 16y² + 32x - 20y + 6, minimized where Ax = -b.
fn scenario_form() -> QuadraticForm {
    let a = array![[64.0, 19.0], [19.0, 32.0]];
    QuadraticForm::new(a, array![32.0, -20.0], 6.0).unwrap()
}

const EXPECTED: [f64; 2] = [-1404.0 / 1687.0, 1888.0 / 1687.0];

#[test]
fn every_method_reaches_the_same_minimum() {
    let mut registry = Registry::standard();
    registry.add_function(scenario_form());
    registry.select_line_search(1).unwrap();

    let mut solutions = Vec::new();
    for method in 0..registry.methods().len() {
        registry.select_method(method).unwrap();
        solutions.push(registry.search_min().unwrap());
    }

    for (index, solution) in solutions.iter().enumerate() {
        assert_abs_diff_eq!(solution.point[0], EXPECTED[0], epsilon = 1e-5);
        assert_abs_diff_eq!(solution.point[1], EXPECTED[1], epsilon = 1e-5);
        assert_abs_diff_eq!(solution.point[0], solutions[0].point[0], epsilon = 1e-6);
        assert_abs_diff_eq!(solution.point[1], solutions[0].point[1], epsilon = 1e-6);
        assert_abs_diff_eq!(solution.value, solutions[0].value, epsilon = 1e-6);
        assert!(
            solution.value < 6.0,
            "method {index} failed to improve on f(0) = c"
        );
    }
}

#[test]
fn searches_are_idempotent() {
    let mut registry = Registry::standard();
    registry.add_function(scenario_form());
    registry.select_line_search(1).unwrap();

    for method in 0..registry.methods().len() {
        registry.select_method(method).unwrap();

        let first = registry.search_min().unwrap();
        let second = registry.search_min().unwrap();
        assert_eq!(first, second, "method {method} drifted between runs");
    }
}

#[test]
fn traced_searches_replay_identically() {
    let mut registry = Registry::standard();
    registry.add_function(scenario_form());
    registry.select_line_search(4).unwrap();

    for method in 0..registry.methods().len() {
        registry.select_method(method).unwrap();

        let first = registry.search_min_traced().unwrap();
        let second = registry.search_min_traced().unwrap();

        assert_eq!(first.solution, second.solution);
        assert_eq!(
            first.replay, second.replay,
            "method {method} recorded different narratives"
        );
        assert!(!first.replay.is_empty());
    }
}

#[test]
fn selection_errors_name_the_offending_index() {
    let mut registry = Registry::standard();

    let error = registry.select_function(2).unwrap_err();
    assert_eq!(error.to_string(), "index out of range: function 2 of 0");

    let error = registry.select_line_search(9).unwrap_err();
    assert_eq!(error.to_string(), "index out of range: line search 9 of 5");
}

#[test]
fn running_on_empty_collections_is_an_error_not_a_panic() {
    let registry = Registry::new();

    assert_eq!(registry.search_min().unwrap_err(), RegistryError::NoFunction);
    assert_eq!(
        registry.search_min_traced().unwrap_err(),
        RegistryError::NoFunction
    );
}

#[test]
fn steepest_descent_accepts_every_registered_line_search() {
    let mut registry = Registry::standard();
    registry.add_function(scenario_form());
    registry.select_method(1).unwrap();

    for line_search in 0..5 {
        registry.select_line_search(line_search).unwrap();
        let solution = registry.search_min().unwrap();

        assert_abs_diff_eq!(solution.point[0], EXPECTED[0], epsilon = 1e-5);
        assert_abs_diff_eq!(solution.point[1], EXPECTED[1], epsilon = 1e-5);
    }
}
