// Example: streaming a large cost table to the FreightPlanner service
//
// Demonstrates the chunked upload path for tables exceeding message-size
// comfort: one metadata chunk, one header chunk, then row batches. The
// generated instance has 8 sellers x 40 orders, with each order priced by
// a rotating subset of sellers (the planner fills in the dense variable
// grid on its side).

use futures::stream;
use tonic::Request;

pub mod freight_plan {
    tonic::include_proto!("freight_plan");
}

use freight_plan::{
    freight_planner_client::FreightPlannerClient, solver_config::Backend, table_chunk::Chunk,
    PlanStatus, RowBatch, SolverConfig, TableChunk, TableHeader, TableMetadata, TableRow,
};

const NUM_SELLERS: usize = 8;
const NUM_ORDERS: usize = 40;
const ROWS_PER_BATCH: usize = 25;

fn generate_rows() -> Vec<TableRow> {
    let mut rows = Vec::new();
    for o in 0..NUM_ORDERS {
        // three candidate sellers per order, deterministic costs
        for k in 0..3 {
            let s = (o + k * 3) % NUM_SELLERS;
            let freight = 4.0 + ((o * 7 + s * 13) % 23) as f64 * 0.5;
            rows.push(TableRow {
                cells: vec![
                    format!("seller_{:02}", s),
                    format!("order_{:03}", o),
                    format!("{:.2}", freight),
                ],
            });
        }
    }
    rows
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut client = FreightPlannerClient::connect("http://127.0.0.1:50051").await?;

    println!("=== Freight Assignment (streaming upload) ===\n");

    let rows = generate_rows();
    println!(
        "Streaming {} cost rows ({} sellers, {} orders)...",
        rows.len(),
        NUM_SELLERS,
        NUM_ORDERS
    );

    let mut chunks = vec![
        TableChunk {
            chunk: Some(Chunk::Metadata(TableMetadata {
                name: "streamed shipment batch".to_string(),
                solver_config: Some(SolverConfig {
                    backend: Backend::Auto as i32,
                    variable_limit: 0,
                }),
            })),
        },
        TableChunk {
            chunk: Some(Chunk::Header(TableHeader {
                columns: vec![
                    "seller_id".to_string(),
                    "order_id".to_string(),
                    "freight_value".to_string(),
                ],
            })),
        },
    ];
    for batch in rows.chunks(ROWS_PER_BATCH) {
        chunks.push(TableChunk {
            chunk: Some(Chunk::Rows(RowBatch {
                rows: batch.to_vec(),
            })),
        });
    }
    println!("  {} chunks total\n", chunks.len());

    let result = client
        .optimize_plan_stream(Request::new(stream::iter(chunks)))
        .await?
        .into_inner();

    match PlanStatus::try_from(result.status) {
        Ok(PlanStatus::Optimal) => {
            println!("✓ Optimal plan found");
            if let Some(total) = result.total_cost {
                println!("  Total freight cost: {:.2}", total);
            }
            println!("  {} positive shipments", result.shipments.len());
            for shipment in result.shipments.iter().take(10) {
                println!(
                    "    {} -> {}: {:.2} units",
                    shipment.seller_id, shipment.order_id, shipment.units
                );
            }
            if result.shipments.len() > 10 {
                println!("    ... and {} more", result.shipments.len() - 10);
            }
        }
        Ok(status) => println!("✗ {:?}: {}", status, result.message),
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
