//! Circumference connectivity of complete bipartite graphs K(a, b).

use p_connectivity::generators::complete_bipartite;
use p_connectivity::properties::{has_circumference_at_least, MinCircumference};
use p_connectivity::{
    component_p_edge_connectivity, component_p_vertex_connectivity, p_edge_connectivity,
    p_vertex_connectivity,
};
use rstest::rstest;

/// Part sizes `a <= b` with `a < 3` and `b < 8`.
fn parts() -> Vec<(usize, usize)> {
    (1..3)
        .flat_map(|a| (a..8).map(move |b| (a, b)))
        .collect()
}

#[rstest]
fn circumference_too_large() {
    for (a, b) in parts() {
        let graph = complete_bipartite(a, b);
        for length in 2 * a + 1..=3 * a {
            let (removal_set, verdicts) =
                component_p_edge_connectivity(&graph, &MinCircumference::new(length)).unwrap();
            assert_eq!(0, removal_set.len(), "K({a}, {b}), l = {length}");
            assert_eq!(vec![false], verdicts);
        }
    }
}

#[rstest]
fn equitable() {
    for (a, b) in parts().into_iter().filter(|(a, b)| a == b) {
        let graph = complete_bipartite(a, b);
        let (removal_set, _) =
            component_p_edge_connectivity(&graph, &MinCircumference::new(2 * a)).unwrap();
        assert_eq!(a - 1, removal_set.len(), "K({a}, {b})");
    }
}

#[rstest]
fn less_than_equitable() {
    for (a, b) in parts().into_iter().filter(|(a, b)| a < b) {
        let graph = complete_bipartite(a, b);
        for length in 3..=2 * a {
            let (removal_set, verdicts) =
                component_p_edge_connectivity(&graph, &MinCircumference::new(length)).unwrap();
            assert_eq!(a, removal_set.len(), "K({a}, {b}), l = {length}");
            assert!(verdicts.contains(&false));
        }
    }
}

#[rstest]
#[case(3, 8, 7, 0)]
#[case(3, 3, 6, 2)]
#[case(2, 5, 4, 2)]
fn documented_scenarios(
    #[case] a: usize,
    #[case] b: usize,
    #[case] length: usize,
    #[case] expected: usize,
) {
    let graph = complete_bipartite(a, b);
    let (removal_set, _) =
        component_p_edge_connectivity(&graph, &MinCircumference::new(length)).unwrap();
    assert_eq!(expected, removal_set.len());
}

#[rstest]
fn isolating_a_vertex_is_the_cheapest_break() {
    // K(2, 5) loses its 4-cycles as a whole only after four edge removals,
    // but per component two removals strand a vertex of degree two
    let graph = complete_bipartite(2, 5);
    let property = MinCircumference::new(4);

    let whole = p_edge_connectivity(&graph, &property).unwrap();
    let (per_component, verdicts) = component_p_edge_connectivity(&graph, &property).unwrap();

    assert_eq!(4, whole.len());
    assert_eq!(2, per_component.len());
    assert_eq!(vec![true, false], verdicts);
}

#[rstest]
#[case(2, 2)]
#[case(2, 4)]
#[case(3, 3)]
#[case(3, 4)]
fn one_vertex_from_the_small_side_shortens_every_long_cycle(#[case] a: usize, #[case] b: usize) {
    let graph = complete_bipartite(a, b);
    let property = MinCircumference::new(2 * a);

    let whole = p_vertex_connectivity(&graph, &property).unwrap();
    let (per_component, _) = component_p_vertex_connectivity(&graph, &property).unwrap();

    assert_eq!(1, whole.len());
    assert_eq!(1, per_component.len());
    let residual = p_connectivity::connectivity::residual(&graph, whole.as_slice());
    assert!(!has_circumference_at_least(&residual, 2 * a));
}
