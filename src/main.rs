use freightopt::{start_server, ServerConfig, SolverBackend, SolverFactory};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Address and default backend come from the environment
    let address = std::env::var("FREIGHTOPT_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:50051".to_string())
        .parse()?;

    let backend = match std::env::var("FREIGHTOPT_BACKEND") {
        Ok(name) => SolverBackend::parse(&name)
            .ok_or_else(|| format!("unknown solver backend '{}'", name))?,
        Err(_) => SolverBackend::Auto,
    };

    let solver = SolverFactory::create(backend);

    let config = ServerConfig::new(address, solver);
    start_server(config).await?;

    Ok(())
}
