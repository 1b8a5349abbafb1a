// Domain layer: Business logic and rules
pub mod domain;

// Application layer: Use cases and service orchestration
#[cfg(feature = "server")]
pub mod application;

// Infrastructure layer: External concerns (gRPC, server)
#[cfg(feature = "server")]
pub mod infrastructure;

// Solver adapters: Concrete implementations of SolverService
pub mod solver;

// Re-export commonly used types
pub use domain::{
    CostEntry, FreightModel, ModelBuilder, ModelError, PlanOutcome, PlanStatistics, PlanStatus,
    Shipment, ShipmentTable, SolverBackend, SolverError, SolverService, TableError,
};

pub use solver::{MicrolpSolver, SolverFactory};

#[cfg(feature = "coin-cbc")]
pub use solver::CoinCbcSolver;

#[cfg(feature = "highs")]
pub use solver::HighsSolver;

#[cfg(feature = "server")]
pub use application::FreightPlannerService;

#[cfg(feature = "server")]
pub use infrastructure::{start_server, ServerConfig};
