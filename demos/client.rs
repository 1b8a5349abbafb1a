// Example client demonstrating how to use the FreightPlanner gRPC service
//
// Submits a small shipment-cost table and prints the optimized plan.
// The table intentionally carries extra columns (product_id, price) the
// way a merged marketplace export would; the planner ignores them.

use tonic::Request;

pub mod freight_plan {
    tonic::include_proto!("freight_plan");
}

use freight_plan::{
    freight_planner_client::FreightPlannerClient, solver_config::Backend, Empty, PlanStatus,
    ShipmentTable, SolverConfig, TableRow,
};

fn row(cells: &[&str]) -> TableRow {
    TableRow {
        cells: cells.iter().map(|c| c.to_string()).collect(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Connect to the gRPC server
    let mut client = FreightPlannerClient::connect("http://127.0.0.1:50051").await?;

    println!("=== Freight Assignment ===\n");

    // Show which backends this server was built with
    let backends = client
        .list_backends(Request::new(Empty {}))
        .await?
        .into_inner()
        .backends;
    println!("Backends:");
    for info in &backends {
        let marker = if info.available { "✓" } else { "✗" };
        println!("  {} {}", marker, info.name);
    }

    // A merged cost table: two sellers competing for three orders.
    // Note the duplicate (seller_a, order_1) rows; their freight values
    // are summed into one objective coefficient.
    let table = ShipmentTable {
        name: "demo shipment batch".to_string(),
        columns: vec![
            "order_id".to_string(),
            "product_id".to_string(),
            "seller_id".to_string(),
            "price".to_string(),
            "freight_value".to_string(),
        ],
        rows: vec![
            row(&["order_1", "p100", "seller_a", "55.90", "8.72"]),
            row(&["order_1", "p101", "seller_a", "21.00", "4.10"]),
            row(&["order_1", "p102", "seller_b", "60.00", "9.30"]),
            row(&["order_2", "p200", "seller_a", "12.50", "15.10"]),
            row(&["order_2", "p201", "seller_b", "13.00", "7.78"]),
            row(&["order_3", "p300", "seller_b", "80.00", "12.65"]),
        ],
        solver_config: Some(SolverConfig {
            backend: Backend::Auto as i32,
            variable_limit: 0,
        }),
    };

    println!("\nSending {} cost rows to the planner...\n", table.rows.len());
    let result = client
        .optimize_plan(Request::new(table))
        .await?
        .into_inner();

    match PlanStatus::try_from(result.status) {
        Ok(PlanStatus::Optimal) => {
            println!("✓ Optimal plan found");
            if let Some(total) = result.total_cost {
                println!("  Total freight cost: {:.2}", total);
            }
            println!("\nShipments:");
            for shipment in &result.shipments {
                println!(
                    "  {} -> {}: {:.2} units",
                    shipment.seller_id, shipment.order_id, shipment.units
                );
            }
        }
        Ok(status) => {
            println!("✗ No plan extracted: {:?}", status);
            println!("  {}", result.message);
        }
        Err(_) => println!("✗ Unknown status in response"),
    }

    if let Some(stats) = result.statistics {
        println!(
            "\nSolved {} variables / {} constraints in {:.2} ms ({})",
            stats.num_variables, stats.num_constraints, stats.solve_time_ms, stats.backend
        );
    }

    Ok(())
}
