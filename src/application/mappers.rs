// Mappers: Convert between gRPC protobuf types and domain models
// This keeps protobuf dependencies isolated from business logic (Dependency Inversion)

use crate::domain::{
    models::PlanOutcome,
    solver_service::SolverError,
    table::ShipmentTable,
    value_objects::{PlanStatus, SolverBackend},
};

pub mod freight_plan {
    tonic::include_proto!("freight_plan");
}

use freight_plan as proto;

/// Convert a protobuf table to the domain table
pub fn proto_to_domain_table(proto_table: proto::ShipmentTable) -> ShipmentTable {
    ShipmentTable::new(
        proto_table.columns,
        proto_table.rows.into_iter().map(|row| row.cells).collect(),
    )
    .with_name(proto_table.name)
}

/// Resolve the requested backend, rejecting backends not compiled into
/// this build. An unset config or an unknown wire value falls back to Auto.
pub fn proto_to_domain_backend(
    config: Option<&proto::SolverConfig>,
) -> Result<SolverBackend, SolverError> {
    let Some(cfg) = config else {
        return Ok(SolverBackend::Auto);
    };

    match proto::solver_config::Backend::try_from(cfg.backend) {
        Ok(proto::solver_config::Backend::Auto) | Err(_) => Ok(SolverBackend::Auto),
        Ok(proto::solver_config::Backend::Microlp) => Ok(SolverBackend::Microlp),
        Ok(proto::solver_config::Backend::CoinCbc) => cbc_backend(),
        Ok(proto::solver_config::Backend::Highs) => highs_backend(),
    }
}

#[cfg(feature = "coin-cbc")]
fn cbc_backend() -> Result<SolverBackend, SolverError> {
    Ok(SolverBackend::CoinCbc)
}

#[cfg(not(feature = "coin-cbc"))]
fn cbc_backend() -> Result<SolverBackend, SolverError> {
    Err(SolverError::BackendUnavailable(
        "COIN-OR CBC is not compiled into this server".to_string(),
    ))
}

#[cfg(feature = "highs")]
fn highs_backend() -> Result<SolverBackend, SolverError> {
    Ok(SolverBackend::Highs)
}

#[cfg(not(feature = "highs"))]
fn highs_backend() -> Result<SolverBackend, SolverError> {
    Err(SolverError::BackendUnavailable(
        "HiGHS is not compiled into this server".to_string(),
    ))
}

/// Hard variable-grid cap from the wire config (0 means no cap)
pub fn variable_limit(config: Option<&proto::SolverConfig>) -> Option<usize> {
    config
        .map(|cfg| cfg.variable_limit as usize)
        .filter(|&limit| limit > 0)
}

/// Convert a domain outcome to the protobuf result
pub fn domain_to_proto_result(outcome: PlanOutcome, backend: &str) -> proto::PlanResult {
    let status = match outcome.status {
        PlanStatus::Optimal => proto::PlanStatus::Optimal as i32,
        PlanStatus::Infeasible => proto::PlanStatus::Infeasible as i32,
        PlanStatus::Unbounded => proto::PlanStatus::Unbounded as i32,
        PlanStatus::SolverError => proto::PlanStatus::SolverError as i32,
    };

    proto::PlanResult {
        status,
        total_cost: outcome.total_cost,
        shipments: outcome
            .shipments
            .into_iter()
            .map(|shipment| proto::Shipment {
                seller_id: shipment.seller_id,
                order_id: shipment.order_id,
                units: shipment.units,
            })
            .collect(),
        message: outcome.message,
        statistics: Some(proto::PlanStatistics {
            solve_time_ms: outcome.statistics.solve_time_ms,
            num_variables: outcome.statistics.num_variables,
            num_constraints: outcome.statistics.num_constraints,
            backend: backend.to_string(),
        }),
    }
}
