// End-to-end pipeline: flat table -> cost entries -> model -> solve -> plan.
// Runs against the bundled microlp backend, so no system solver is needed.

use freightopt::{
    MicrolpSolver, ModelBuilder, PlanOutcome, PlanStatus, ShipmentTable, SolverService,
};

fn table(columns: &[&str], rows: &[&[&str]]) -> ShipmentTable {
    ShipmentTable::new(
        columns.iter().map(|c| c.to_string()).collect(),
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
}

/// A merged marketplace export: extra columns, duplicate pairs, and a
/// fully priced 3-seller x 4-order grid.
fn marketplace_table() -> ShipmentTable {
    let columns = [
        "order_id",
        "product_id",
        "seller_id",
        "price",
        "freight_value",
    ];
    let mut rows: Vec<Vec<String>> = Vec::new();
    let costs: &[(&str, &str, f64)] = &[
        ("s1", "o1", 8.5),
        ("s1", "o2", 3.0),
        ("s1", "o3", 6.0),
        ("s1", "o4", 9.0),
        ("s2", "o1", 2.5),
        ("s2", "o2", 7.0),
        ("s2", "o3", 6.5),
        ("s2", "o4", 1.0),
        ("s3", "o1", 4.0),
        ("s3", "o2", 5.5),
        ("s3", "o3", 0.5),
        ("s3", "o4", 3.5),
    ];
    for (i, (seller, order, freight)) in costs.iter().enumerate() {
        rows.push(vec![
            order.to_string(),
            format!("p{}", i),
            seller.to_string(),
            "10.0".to_string(),
            freight.to_string(),
        ]);
    }
    ShipmentTable::new(
        columns.iter().map(|c| c.to_string()).collect(),
        rows,
    )
    .with_name("marketplace export")
}

fn run(table: &ShipmentTable) -> PlanOutcome {
    let entries = table.cost_entries().expect("table contract holds");
    let model = ModelBuilder::new().build(&entries).expect("model builds");
    MicrolpSolver::new().solve(&model).expect("solve runs")
}

#[test]
fn optimal_plan_fulfills_every_order() {
    let table = marketplace_table();
    let entries = table.cost_entries().unwrap();
    let model = ModelBuilder::new().build(&entries).unwrap();
    let outcome = MicrolpSolver::new().solve(&model).unwrap();

    assert_eq!(outcome.status, PlanStatus::Optimal);
    // Round-trip: sum over sellers >= 1 for every order of the input
    for order in model.orders() {
        let fulfilled: f64 = outcome
            .shipments
            .iter()
            .filter(|sh| &sh.order_id == order)
            .map(|sh| sh.units)
            .sum();
        assert!(
            fulfilled >= 1.0 - 1e-6,
            "order {} fulfilled only {}",
            order,
            fulfilled
        );
    }
}

#[test]
fn optimal_cost_is_the_sum_of_cheapest_pairs() {
    // With one >= 1 constraint per order and a fully priced grid, the
    // optimum assigns each order to its cheapest seller.
    let outcome = run(&marketplace_table());
    let expected = 2.5 + 3.0 + 0.5 + 1.0;
    assert!((outcome.total_cost.unwrap() - expected).abs() < 1e-6);
}

#[test]
fn rerunning_an_unchanged_table_is_idempotent() {
    let table = marketplace_table();
    let first = run(&table);
    let second = run(&table);
    assert_eq!(first.status, second.status);
    let (a, b) = (first.total_cost.unwrap(), second.total_cost.unwrap());
    assert!((a - b).abs() < 1e-9, "objective drifted: {} vs {}", a, b);
}

#[test]
fn shipments_are_emitted_in_stable_grid_order() {
    let table = marketplace_table();
    let entries = table.cost_entries().unwrap();
    let model = ModelBuilder::new().build(&entries).unwrap();
    let outcome = MicrolpSolver::new().solve(&model).unwrap();

    let grid_pos = |sh: &freightopt::Shipment| {
        let s = model.sellers().iter().position(|x| *x == sh.seller_id).unwrap();
        let o = model.orders().iter().position(|x| *x == sh.order_id).unwrap();
        s * model.num_orders() + o
    };
    let positions: Vec<usize> = outcome.shipments.iter().map(grid_pos).collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn duplicate_pair_rows_are_aggregated_through_the_pipeline() {
    // (s1, o1) appears twice: 2.0 + 3.0 = 5.0, so s2 at 4.0 wins
    let t = table(
        &["seller_id", "order_id", "freight_value"],
        &[
            &["s1", "o1", "2.0"],
            &["s1", "o1", "3.0"],
            &["s2", "o1", "4.0"],
        ],
    );
    let outcome = run(&t);
    assert_eq!(outcome.status, PlanStatus::Optimal);
    assert!((outcome.total_cost.unwrap() - 4.0).abs() < 1e-6);
    assert_eq!(outcome.shipments.len(), 1);
    assert_eq!(outcome.shipments[0].seller_id, "s2");
}

#[test]
fn empty_table_yields_a_trivially_optimal_empty_plan() {
    let t = table(&["seller_id", "order_id", "freight_value"], &[]);
    let outcome = run(&t);
    assert_eq!(outcome.status, PlanStatus::Optimal);
    assert_eq!(outcome.total_cost, Some(0.0));
    assert!(outcome.shipments.is_empty());
}

#[test]
fn variable_grid_matches_distinct_key_counts() {
    let table = marketplace_table();
    let entries = table.cost_entries().unwrap();
    let model = ModelBuilder::new().build(&entries).unwrap();
    assert_eq!(model.num_sellers(), 3);
    assert_eq!(model.num_orders(), 4);
    assert_eq!(model.num_variables(), 12);
    assert_eq!(model.num_constraints(), 4);
}
