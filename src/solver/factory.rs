use crate::domain::{solver_service::SolverService, value_objects::SolverBackend};
use crate::solver::MicrolpSolver;
use std::sync::Arc;

#[cfg(feature = "coin-cbc")]
use crate::solver::CoinCbcSolver;

#[cfg(feature = "highs")]
use crate::solver::HighsSolver;

/// Factory for creating solver instances based on configuration
pub struct SolverFactory;

impl SolverFactory {
    /// Create a solver for a specific backend
    pub fn create(backend: SolverBackend) -> Arc<dyn SolverService> {
        match backend {
            SolverBackend::Auto => Self::default_solver(),
            SolverBackend::Microlp => Arc::new(MicrolpSolver::new()),
            #[cfg(feature = "coin-cbc")]
            SolverBackend::CoinCbc => Arc::new(CoinCbcSolver::new()),
            #[cfg(feature = "highs")]
            SolverBackend::Highs => Arc::new(HighsSolver::new()),
        }
    }

    /// Get the best backend compiled into this build (HiGHS > CBC > microlp)
    pub fn default_solver() -> Arc<dyn SolverService> {
        #[cfg(feature = "highs")]
        return Arc::new(HighsSolver::new());
        #[cfg(all(feature = "coin-cbc", not(feature = "highs")))]
        return Arc::new(CoinCbcSolver::new());
        #[cfg(not(any(feature = "highs", feature = "coin-cbc")))]
        return Arc::new(MicrolpSolver::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_microlp_solver() {
        let solver = SolverFactory::create(SolverBackend::Microlp);
        assert_eq!(solver.name(), "microlp");
    }

    #[test]
    fn test_auto_resolves_to_a_backend() {
        let solver = SolverFactory::create(SolverBackend::Auto);
        assert!(!solver.name().is_empty());
    }

    #[cfg(feature = "coin-cbc")]
    #[test]
    fn test_create_cbc_solver() {
        let solver = SolverFactory::create(SolverBackend::CoinCbc);
        assert_eq!(solver.name(), "COIN-OR CBC");
    }

    #[cfg(feature = "highs")]
    #[test]
    fn test_create_highs_solver() {
        let solver = SolverFactory::create(SolverBackend::Highs);
        assert_eq!(solver.name(), "HiGHS");
    }
}
