use super::value_objects::PlanStatus;

/// One observed freight-cost row: what it cost `seller_id` to ship for
/// `order_id`. Several rows for the same pair are legal and are summed into
/// a single objective coefficient by the model builder.
#[derive(Debug, Clone, PartialEq)]
pub struct CostEntry {
    pub seller_id: String,
    pub order_id: String,
    pub freight_value: f64,
}

impl CostEntry {
    pub fn new(
        seller_id: impl Into<String>,
        order_id: impl Into<String>,
        freight_value: f64,
    ) -> Self {
        Self {
            seller_id: seller_id.into(),
            order_id: order_id.into(),
            freight_value,
        }
    }
}

/// Tolerance below which a variable value counts as zero when extracting
/// shipments, so backend float noise cannot materialize phantom rows.
pub const SHIPMENT_EPS: f64 = 1e-9;

/// One positive row of the output table: units shipped from a seller
/// towards an order. Zero-valued pairs are never materialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Shipment {
    pub seller_id: String,
    pub order_id: String,
    pub units: f64,
}

/// Statistics about the solve process
#[derive(Debug, Clone, Default)]
pub struct PlanStatistics {
    pub solve_time_ms: f64,
    pub num_variables: u32,
    pub num_constraints: u32,
}

/// Result of one optimization run
///
/// A terminal record: statuses other than `Optimal` carry an empty shipment
/// list plus whatever diagnostic the backend produced. There is no retry or
/// resumption; a fresh run requires a fresh model build.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub status: PlanStatus,
    pub total_cost: Option<f64>,
    pub shipments: Vec<Shipment>,
    pub message: String,
    pub statistics: PlanStatistics,
}

impl PlanOutcome {
    pub fn new(status: PlanStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            total_cost: None,
            shipments: Vec::new(),
            message: message.into(),
            statistics: PlanStatistics::default(),
        }
    }

    pub fn optimal(total_cost: f64, shipments: Vec<Shipment>) -> Self {
        Self {
            status: PlanStatus::Optimal,
            total_cost: Some(total_cost),
            shipments,
            message: "Optimal shipment plan found".to_string(),
            statistics: PlanStatistics::default(),
        }
    }

    pub fn with_statistics(mut self, statistics: PlanStatistics) -> Self {
        self.statistics = statistics;
        self
    }

    pub fn is_optimal(&self) -> bool {
        self.status == PlanStatus::Optimal
    }
}
