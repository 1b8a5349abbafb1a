// HiGHS Solver Adapter (feature "highs")
// Translates the freight model to the HiGHS RowProblem API directly,
// bypassing good_lp.

use crate::domain::{
    model_builder::FreightModel,
    models::{PlanOutcome, PlanStatistics, Shipment, SHIPMENT_EPS},
    solver_service::{Result, SolverService},
    value_objects::PlanStatus,
};
use std::time::Instant;

pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for HighsSolver {
    fn solve(&self, model: &FreightModel) -> Result<PlanOutcome> {
        self.validate(model)?;
        if let Some(outcome) = self.trivial_outcome(model) {
            return Ok(outcome);
        }

        use highs::{HighsModelStatus, RowProblem, Sense};

        let start_time = Instant::now();
        let num_orders = model.num_orders();

        // Columns carry the objective coefficient directly
        let mut pb = RowProblem::default();
        let mut grid = Vec::with_capacity(model.num_variables());
        for (s, o) in model.pairs() {
            grid.push(pb.add_column(model.coefficient(s, o), 0.0..));
        }

        // One >= 1 fulfillment row per order
        for o in 0..num_orders {
            let terms: Vec<_> = (0..model.num_sellers())
                .map(|s| (grid[s * num_orders + o], 1.0))
                .collect();
            pb.add_row(1.0.., &terms);
        }

        let solved = pb.optimise(Sense::Minimise).solve();
        let statistics = PlanStatistics {
            solve_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
            num_variables: model.num_variables() as u32,
            num_constraints: model.num_constraints() as u32,
        };

        match solved.status() {
            HighsModelStatus::Optimal => {
                let values = solved.get_solution().columns().to_vec();
                let mut total_cost = 0.0;
                let mut shipments = Vec::new();
                for (s, o) in model.pairs() {
                    let units = values[s * num_orders + o];
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
            HighsModelStatus::Infeasible => Ok(PlanOutcome::new(
                PlanStatus::Infeasible,
                "No shipment plan satisfies every order-fulfillment constraint",
            )
            .with_statistics(statistics)),
            HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => {
                Ok(PlanOutcome::new(
                    PlanStatus::Unbounded,
                    "Objective can be improved infinitely",
                )
                .with_statistics(statistics))
            }
            status => Ok(PlanOutcome::new(
                PlanStatus::SolverError,
                format!("HiGHS backend returned status: {:?}", status),
            )
            .with_statistics(statistics)),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model_builder::ModelBuilder;
    use crate::domain::models::CostEntry;

    #[test]
    fn test_highs_solves_the_single_pair_model() {
        let model = ModelBuilder::new()
            .build(&[CostEntry::new("s1", "o1", 10.0)])
            .unwrap();
        let outcome = HighsSolver::new().solve(&model).unwrap();
        assert_eq!(outcome.status, PlanStatus::Optimal);
        assert!((outcome.total_cost.unwrap() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_highs_picks_the_cheapest_seller() {
        let model = ModelBuilder::new()
            .build(&[
                CostEntry::new("s1", "o1", 5.0),
                CostEntry::new("s2", "o1", 3.0),
            ])
            .unwrap();
        let outcome = HighsSolver::new().solve(&model).unwrap();
        assert!((outcome.total_cost.unwrap() - 3.0).abs() < 1e-6);
        assert_eq!(outcome.shipments[0].seller_id, "s2");
    }
}
