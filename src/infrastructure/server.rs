// Infrastructure: Server setup and configuration
// Single Responsibility: Manage server lifecycle and configuration

use std::net::SocketAddr;
use std::sync::Arc;
use tonic::transport::Server;

use crate::application::mappers::freight_plan::freight_planner_server::FreightPlannerServer;
use crate::application::FreightPlannerService;
use crate::domain::solver_service::SolverService;

pub struct ServerConfig {
    pub address: SocketAddr,
    pub solver: Arc<dyn SolverService>,
}

impl ServerConfig {
    pub fn new(address: SocketAddr, solver: Arc<dyn SolverService>) -> Self {
        Self { address, solver }
    }
}

pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    print_banner(&config.address, config.solver.name());
    log::info!(
        "starting freight planner on {} (default backend: {})",
        config.address,
        config.solver.name()
    );

    let service = FreightPlannerService::new(config.solver);

    Server::builder()
        .add_service(FreightPlannerServer::new(service))
        .serve(config.address)
        .await?;

    Ok(())
}

fn print_banner(address: &SocketAddr, backend: &str) {
    println!("\n╔════════════════════════════════════════════════════════════╗");
    println!("║  FreightOpt - Minimum-Cost Shipment Assignment             ║");
    println!("╠════════════════════════════════════════════════════════════╣");
    println!("║  Default backend: {:40} ║", backend);
    println!("║  Listening on:    {:40} ║", address);
    println!("╠════════════════════════════════════════════════════════════╣");
    println!("║  RPCs:                                                     ║");
    println!("║    ✓ OptimizePlan (unary table)                            ║");
    println!("║    ✓ OptimizePlanStream (chunked table)                    ║");
    println!("║    ✓ ValidateTable                                         ║");
    println!("║    ✓ ListBackends                                          ║");
    println!("╚════════════════════════════════════════════════════════════╝\n");
}
