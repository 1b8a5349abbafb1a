// microlp Solver Adapter
// Implements the SolverService interface on top of good_lp's bundled
// pure-Rust simplex. Always compiled, so the crate can solve without any
// system solver library installed.

use crate::domain::{
    model_builder::FreightModel,
    models::{PlanOutcome, PlanStatistics, Shipment, SHIPMENT_EPS},
    solver_service::{Result, SolverService},
    value_objects::PlanStatus,
};
use good_lp::{
    solvers::microlp, variable, variables, Expression, ResolutionError,
    Solution as GoodLpSolution, SolverModel, Variable as GoodLpVariable,
};
use std::time::Instant;

pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MicrolpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for MicrolpSolver {
    fn solve(&self, model: &FreightModel) -> Result<PlanOutcome> {
        self.validate(model)?;
        if let Some(outcome) = self.trivial_outcome(model) {
            return Ok(outcome);
        }

        let start_time = Instant::now();
        let num_orders = model.num_orders();

        // One continuous variable per (seller, order) pair of the dense
        // grid, lower bound 0, no upper bound.
        let mut vars = variables!();
        let mut grid: Vec<GoodLpVariable> = Vec::with_capacity(model.num_variables());
        for _ in model.pairs() {
            grid.push(vars.add(variable().min(0.0)));
        }

        // Minimize total freight cost. Pairs without cost rows keep
        // coefficient 0 and simply do not contribute a term.
        let mut objective: Expression = 0.into();
        for (s, o) in model.pairs() {
            let coeff = model.coefficient(s, o);
            if coeff != 0.0 {
                objective += coeff * grid[s * num_orders + o];
            }
        }

        // Each order must be fulfilled by at least one unit across sellers
        let mut lp = vars.minimise(objective).using(microlp::microlp);
        for o in 0..num_orders {
            let mut lhs: Expression = 0.into();
            for s in 0..model.num_sellers() {
                lhs += grid[s * num_orders + o];
            }
            lp = lp.with(lhs.geq(1.0));
        }

        let solved = lp.solve();
        let statistics = PlanStatistics {
            solve_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
            num_variables: model.num_variables() as u32,
            num_constraints: model.num_constraints() as u32,
        };

        match solved {
            Ok(sol) => {
                let mut total_cost = 0.0;
                let mut shipments = Vec::new();
                for (s, o) in model.pairs() {
                    let units = sol.value(grid[s * num_orders + o]);
                    total_cost += model.coefficient(s, o) * units;
                    if units > SHIPMENT_EPS {
                        shipments.push(Shipment {
                            seller_id: model.sellers()[s].clone(),
                            order_id: model.orders()[o].clone(),
                            units,
                        });
                    }
                }
                Ok(PlanOutcome::optimal(total_cost, shipments).with_statistics(statistics))
            }
            Err(ResolutionError::Infeasible) => Ok(PlanOutcome::new(
                PlanStatus::Infeasible,
                "No shipment plan satisfies every order-fulfillment constraint",
            )
            .with_statistics(statistics)),
            Err(ResolutionError::Unbounded) => Ok(PlanOutcome::new(
                PlanStatus::Unbounded,
                "Objective can be improved infinitely",
            )
            .with_statistics(statistics)),
            Err(e) => Ok(PlanOutcome::new(
                PlanStatus::SolverError,
                format!("microlp backend failed: {:?}", e),
            )
            .with_statistics(statistics)),
        }
    }

    fn name(&self) -> &str {
        "microlp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model_builder::ModelBuilder;
    use crate::domain::models::CostEntry;

    fn solve(rows: &[(&str, &str, f64)]) -> PlanOutcome {
        let entries: Vec<CostEntry> = rows
            .iter()
            .map(|(s, o, v)| CostEntry::new(*s, *o, *v))
            .collect();
        let model = ModelBuilder::new().build(&entries).unwrap();
        MicrolpSolver::new().solve(&model).unwrap()
    }

    #[test]
    fn test_single_pair_ships_exactly_one_unit() {
        let outcome = solve(&[("s1", "o1", 10.0)]);
        assert_eq!(outcome.status, PlanStatus::Optimal);
        assert!((outcome.total_cost.unwrap() - 10.0).abs() < 1e-6);
        assert_eq!(outcome.shipments.len(), 1);
        let shipment = &outcome.shipments[0];
        assert_eq!(shipment.seller_id, "s1");
        assert_eq!(shipment.order_id, "o1");
        assert!((shipment.units - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cheapest_seller_wins() {
        let outcome = solve(&[("s1", "o1", 5.0), ("s2", "o1", 3.0)]);
        assert_eq!(outcome.status, PlanStatus::Optimal);
        assert!((outcome.total_cost.unwrap() - 3.0).abs() < 1e-6);
        assert_eq!(outcome.shipments.len(), 1);
        assert_eq!(outcome.shipments[0].seller_id, "s2");
    }

    #[test]
    fn test_duplicate_rows_price_the_pair_as_their_sum() {
        // (s1, o1) costs 2 + 3 = 5, so s2 at 4 is cheaper
        let outcome = solve(&[("s1", "o1", 2.0), ("s1", "o1", 3.0), ("s2", "o1", 4.0)]);
        assert!((outcome.total_cost.unwrap() - 4.0).abs() < 1e-6);
        assert_eq!(outcome.shipments[0].seller_id, "s2");
    }

    #[test]
    fn test_unobserved_pairs_absorb_fulfillment_at_zero_cost() {
        // Grid is 2x2 but only (a, o1) and (b, o2) carry cost; the cross
        // pairs keep coefficient 0 and the whole plan is free.
        let outcome = solve(&[("a", "o1", 2.0), ("b", "o2", 4.0)]);
        assert_eq!(outcome.status, PlanStatus::Optimal);
        assert!(outcome.total_cost.unwrap().abs() < 1e-6);
        // both orders are still fulfilled
        for order in ["o1", "o2"] {
            let fulfilled: f64 = outcome
                .shipments
                .iter()
                .filter(|sh| sh.order_id == order)
                .map(|sh| sh.units)
                .sum();
            assert!(fulfilled >= 1.0 - 1e-6, "order {} not fulfilled", order);
        }
    }

    #[test]
    fn test_trivial_shapes_bypass_the_backend() {
        let no_orders = FreightModel::new(vec!["s1".into()], vec![]);
        let outcome = MicrolpSolver::new().solve(&no_orders).unwrap();
        assert_eq!(outcome.status, PlanStatus::Optimal);
        assert!(outcome.shipments.is_empty());

        let no_sellers = FreightModel::new(vec![], vec!["o1".into()]);
        let outcome = MicrolpSolver::new().solve(&no_sellers).unwrap();
        assert_eq!(outcome.status, PlanStatus::Infeasible);
    }

    #[test]
    fn test_shipments_come_out_in_grid_order() {
        let outcome = solve(&[
            ("s1", "o1", 1.0),
            ("s1", "o2", 1.0),
            ("s2", "o1", 9.0),
            ("s2", "o2", 9.0),
        ]);
        assert_eq!(outcome.status, PlanStatus::Optimal);
        let pairs: Vec<(&str, &str)> = outcome
            .shipments
            .iter()
            .map(|sh| (sh.seller_id.as_str(), sh.order_id.as_str()))
            .collect();
        assert_eq!(pairs, vec![("s1", "o1"), ("s1", "o2")]);
    }
}
