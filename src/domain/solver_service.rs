// Domain service interface for solving the assignment LP
// Defines the contract that any solver implementation must follow (Dependency Inversion Principle)

use super::model_builder::FreightModel;
use super::models::PlanOutcome;
use super::value_objects::PlanStatus;

/// Error types for the solver service
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Solver backend not available: {0}")]
    BackendUnavailable(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Domain service interface for LP backends
///
/// Any engine that accepts a continuous-variable LP with a linear minimize
/// objective and linear `>=` constraints qualifies. Swapping backends never
/// touches model-builder logic.
///
/// `Err` is reserved for conditions detected before the backend runs; a
/// backend failure during the solve is reported as
/// `PlanStatus::SolverError` in the outcome, because non-Optimal statuses
/// are data for the caller, not exceptions. The solve is a synchronous,
/// opaque blocking call with no retry; timeout policy belongs to callers.
pub trait SolverService: Send + Sync {
    /// Solve the assignment LP and extract the shipment plan
    fn solve(&self, model: &FreightModel) -> Result<PlanOutcome>;

    /// Get the name of this solver backend
    fn name(&self) -> &str;

    /// Validate a model without solving it
    fn validate(&self, model: &FreightModel) -> Result<()> {
        for (s, o) in model.pairs() {
            let coeff = model.coefficient(s, o);
            if !coeff.is_finite() || coeff < 0.0 {
                return Err(SolverError::InvalidModel(format!(
                    "coefficient for seller '{}' / order '{}' is {}",
                    model.sellers()[s],
                    model.orders()[o],
                    coeff
                )));
            }
        }
        Ok(())
    }

    /// Answer the degenerate model shapes without invoking a backend, so
    /// every implementation reports them identically.
    ///
    /// - No orders: nothing to fulfill, the all-zero assignment is optimal
    ///   and the positive-only plan is empty.
    /// - Orders but no sellers: every fulfillment constraint sums over an
    ///   empty variable set and can never reach 1.
    fn trivial_outcome(&self, model: &FreightModel) -> Option<PlanOutcome> {
        if model.num_orders() == 0 {
            let mut outcome = PlanOutcome::optimal(0.0, Vec::new());
            outcome.message = "No orders to fulfill; the empty plan is optimal".to_string();
            return Some(outcome);
        }
        if model.num_sellers() == 0 {
            return Some(PlanOutcome::new(
                PlanStatus::Infeasible,
                "No sellers available to fulfill the orders",
            ));
        }
        None
    }
}
