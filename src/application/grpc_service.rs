use std::sync::Arc;

use tonic::{Request, Response, Status};

use super::mappers::{self, freight_plan};
use crate::domain::{
    model_builder::{ModelBuilder, DENSE_GRID_WARN_THRESHOLD},
    solver_service::SolverService,
    table::ShipmentTable,
    value_objects::SolverBackend,
};
use crate::solver::SolverFactory;

/// gRPC service implementation
///
/// Holds the server's default solver; per-request configuration can select
/// any other compiled-in backend. Each request builds an independent model
/// and shares no state with other runs.
pub struct FreightPlannerService {
    default_solver: Arc<dyn SolverService>,
}

impl FreightPlannerService {
    pub fn new(default_solver: Arc<dyn SolverService>) -> Self {
        Self { default_solver }
    }

    fn solver_for(&self, backend: SolverBackend) -> Arc<dyn SolverService> {
        match backend {
            SolverBackend::Auto => Arc::clone(&self.default_solver),
            other => SolverFactory::create(other),
        }
    }

    /// Shared solve path for the unary and streaming RPCs.
    ///
    /// Table and model errors are fatal for the request (InvalidArgument);
    /// solver statuses other than Optimal ride inside the result and the
    /// RPC itself succeeds.
    fn optimize(
        &self,
        table: ShipmentTable,
        config: Option<&freight_plan::SolverConfig>,
    ) -> Result<freight_plan::PlanResult, Status> {
        let backend = mappers::proto_to_domain_backend(config)
            .map_err(|e| Status::invalid_argument(e.to_string()))?;

        let entries = table
            .cost_entries()
            .map_err(|e| Status::invalid_argument(e.to_string()))?;

        let mut builder = ModelBuilder::new();
        if let Some(limit) = mappers::variable_limit(config) {
            builder = builder.with_variable_limit(limit);
        }
        let model = builder
            .build(&entries)
            .map_err(|e| Status::invalid_argument(e.to_string()))?;

        let solver = self.solver_for(backend);
        log::info!(
            "solving '{}': {} sellers x {} orders ({} variables) with {}",
            table.name,
            model.num_sellers(),
            model.num_orders(),
            model.num_variables(),
            solver.name()
        );

        let outcome = solver
            .solve(&model)
            .map_err(|e| Status::internal(e.to_string()))?;
        log::info!("'{}' finished: {}", table.name, outcome.status);

        Ok(mappers::domain_to_proto_result(outcome, solver.name()))
    }
}

#[tonic::async_trait]
impl freight_plan::freight_planner_server::FreightPlanner for FreightPlannerService {
    async fn optimize_plan(
        &self,
        request: Request<freight_plan::ShipmentTable>,
    ) -> Result<Response<freight_plan::PlanResult>, Status> {
        let proto_table = request.into_inner();
        let config = proto_table.solver_config.clone();
        let table = mappers::proto_to_domain_table(proto_table);

        let result = self.optimize(table, config.as_ref())?;
        Ok(Response::new(result))
    }

    async fn optimize_plan_stream(
        &self,
        request: Request<tonic::Streaming<freight_plan::TableChunk>>,
    ) -> Result<Response<freight_plan::PlanResult>, Status> {
        let mut stream = request.into_inner();

        let mut name = String::new();
        let mut config: Option<freight_plan::SolverConfig> = None;
        let mut columns: Vec<String> = Vec::new();
        let mut rows: Vec<Vec<String>> = Vec::new();

        // Collect all chunks
        while let Some(chunk) = stream.message().await? {
            match chunk.chunk {
                Some(freight_plan::table_chunk::Chunk::Metadata(metadata)) => {
                    name = metadata.name;
                    config = metadata.solver_config;
                }
                Some(freight_plan::table_chunk::Chunk::Header(header)) => {
                    columns = header.columns;
                }
                Some(freight_plan::table_chunk::Chunk::Rows(batch)) => {
                    rows.extend(batch.rows.into_iter().map(|row| row.cells));
                }
                None => {}
            }
        }

        let table = ShipmentTable::new(columns, rows).with_name(name);
        let result = self.optimize(table, config.as_ref())?;
        Ok(Response::new(result))
    }

    async fn validate_table(
        &self,
        request: Request<freight_plan::ShipmentTable>,
    ) -> Result<Response<freight_plan::TableValidation>, Status> {
        let table = mappers::proto_to_domain_table(request.into_inner());

        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut dimensions = (0u32, 0u32, 0u32);

        match table.cost_entries() {
            Ok(entries) => match ModelBuilder::new().build(&entries) {
                Ok(model) => {
                    if model.num_variables() > DENSE_GRID_WARN_THRESHOLD {
                        warnings.push(format!(
                            "Dense variable grid of {} variables may be slow to solve",
                            model.num_variables()
                        ));
                    }
                    if entries.is_empty() {
                        warnings.push("Table has no rows; the plan will be empty".to_string());
                    }
                    dimensions = (
                        model.num_sellers() as u32,
                        model.num_orders() as u32,
                        model.num_variables() as u32,
                    );
                }
                Err(e) => errors.push(e.to_string()),
            },
            Err(e) => errors.push(e.to_string()),
        }

        Ok(Response::new(freight_plan::TableValidation {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            num_sellers: dimensions.0,
            num_orders: dimensions.1,
            num_variables: dimensions.2,
        }))
    }

    async fn list_backends(
        &self,
        _request: Request<freight_plan::Empty>,
    ) -> Result<Response<freight_plan::AvailableBackends>, Status> {
        let backends = vec![
            freight_plan::BackendInfo {
                name: "microlp".to_string(),
                available: true,
                capabilities: vec![
                    "Linear Programming".to_string(),
                    "Pure Rust".to_string(),
                ],
            },
            freight_plan::BackendInfo {
                name: "COIN-OR CBC".to_string(),
                available: cfg!(feature = "coin-cbc"),
                capabilities: vec![
                    "Linear Programming".to_string(),
                    "Primal/Dual Simplex".to_string(),
                ],
            },
            freight_plan::BackendInfo {
                name: "HiGHS".to_string(),
                available: cfg!(feature = "highs"),
                capabilities: vec![
                    "Linear Programming".to_string(),
                    "Primal/Dual Simplex".to_string(),
                    "Interior Point Method".to_string(),
                ],
            },
        ];

        Ok(Response::new(freight_plan::AvailableBackends { backends }))
    }
}
