// COIN-OR CBC Solver Adapter (feature "coin-cbc")

use crate::domain::{
    model_builder::FreightModel,
    models::{PlanOutcome, PlanStatistics, Shipment, SHIPMENT_EPS},
    solver_service::{Result, SolverService},
    value_objects::PlanStatus,
};
use good_lp::{
    solvers::coin_cbc, variable, variables, Expression, ResolutionError,
    Solution as GoodLpSolution, SolverModel, Variable as GoodLpVariable,
};
use std::time::Instant;

pub struct CoinCbcSolver;

impl CoinCbcSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoinCbcSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for CoinCbcSolver {
    fn solve(&self, model: &FreightModel) -> Result<PlanOutcome> {
        self.validate(model)?;
        if let Some(outcome) = self.trivial_outcome(model) {
            return Ok(outcome);
        }

        let start_time = Instant::now();
        let num_orders = model.num_orders();

        let mut vars = variables!();
        let mut grid: Vec<GoodLpVariable> = Vec::with_capacity(model.num_variables());
        for _ in model.pairs() {
            grid.push(vars.add(variable().min(0.0)));
        }

        let mut objective: Expression = 0.into();
        for (s, o) in model.pairs() {
            let coeff = model.coefficient(s, o);
            if coeff != 0.0 {
                objective += coeff * grid[s * num_orders + o];
            }
        }

        let mut lp = vars.minimise(objective).using(coin_cbc::coin_cbc);
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
                format!("CBC backend failed: {:?}", e),
            )
            .with_statistics(statistics)),
        }
    }

    fn name(&self) -> &str {
        "COIN-OR CBC"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model_builder::ModelBuilder;
    use crate::domain::models::CostEntry;

    #[test]
    fn test_cbc_solves_the_single_pair_model() {
        let model = ModelBuilder::new()
            .build(&[CostEntry::new("s1", "o1", 10.0)])
            .unwrap();
        let outcome = CoinCbcSolver::new().solve(&model).unwrap();
        assert_eq!(outcome.status, PlanStatus::Optimal);
        assert!((outcome.total_cost.unwrap() - 10.0).abs() < 1e-6);
        assert!((outcome.shipments[0].units - 1.0).abs() < 1e-6);
    }
}
