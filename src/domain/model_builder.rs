// Model Builder: reduces the flat cost table into the assignment LP.
//
// Variables cover the full Cartesian product of distinct sellers and
// orders seen in the input, not just pairs with cost rows. A pair without
// rows keeps coefficient 0 and can absorb fulfillment at zero marginal
// cost; substituting an artificial large cost would change the optimum.

use std::collections::HashMap;

use super::models::CostEntry;

/// Grid size above which the builder logs a warning. The dense cross
/// product is the only real scaling risk in this model.
pub const DENSE_GRID_WARN_THRESHOLD: usize = 1_000_000;

/// Error types for model construction
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Freight value {value} for seller '{seller_id}' / order '{order_id}' is not a non-negative finite number")]
    InvalidCost {
        seller_id: String,
        order_id: String,
        value: f64,
    },

    #[error("Variable grid of {sellers} sellers x {orders} orders exceeds the limit of {limit} variables")]
    VariableLimitExceeded {
        sellers: usize,
        orders: usize,
        limit: usize,
    },
}

/// The assignment LP: a dense seller x order variable grid, aggregated
/// objective coefficients, and one implicit `>= 1` fulfillment constraint
/// per order.
///
/// Each variable is continuous with domain `[0, +inf)`; fractional and
/// arbitrarily large volumes are a deliberate simplification of the source
/// model, not something an adapter may tighten.
#[derive(Debug, Clone)]
pub struct FreightModel {
    sellers: Vec<String>,
    orders: Vec<String>,
    coefficients: HashMap<(usize, usize), f64>,
}

impl FreightModel {
    /// Model over explicit key sets, with every coefficient 0. This is the
    /// entry point for key sets known out-of-band; it is also the only way
    /// a model with orders but no sellers can exist, and such a model must
    /// solve to Infeasible.
    pub fn new(sellers: Vec<String>, orders: Vec<String>) -> Self {
        Self {
            sellers,
            orders,
            coefficients: HashMap::new(),
        }
    }

    pub fn sellers(&self) -> &[String] {
        &self.sellers
    }

    pub fn orders(&self) -> &[String] {
        &self.orders
    }

    pub fn num_sellers(&self) -> usize {
        self.sellers.len()
    }

    pub fn num_orders(&self) -> usize {
        self.orders.len()
    }

    /// One decision variable per (seller, order) pair of the dense grid
    pub fn num_variables(&self) -> usize {
        self.sellers.len() * self.orders.len()
    }

    /// One fulfillment constraint per distinct order
    pub fn num_constraints(&self) -> usize {
        self.orders.len()
    }

    /// Objective coefficient for a pair: the sum of every freight value
    /// observed for exactly that pair, 0.0 when no row matched.
    pub fn coefficient(&self, seller: usize, order: usize) -> f64 {
        self.coefficients
            .get(&(seller, order))
            .copied()
            .unwrap_or(0.0)
    }

    /// Full Cartesian product of seller and order indices, seller-major.
    /// Adapters materialize their variable grids by walking this iterator,
    /// which keeps the dense variable set explicit and the output order
    /// stable across runs.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let orders = self.orders.len();
        (0..self.sellers.len()).flat_map(move |s| (0..orders).map(move |o| (s, o)))
    }
}

/// Builds a `FreightModel` from cost entries.
///
/// Pure construction: distinct identifiers are interned in first-seen
/// order and duplicate (seller, order) rows are summed into one
/// coefficient. The optional variable limit fails the build instead of
/// ever truncating the grid, since truncation silently changes feasibility.
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    variable_limit: Option<usize>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hard cap on the seller x order grid size
    pub fn with_variable_limit(mut self, limit: usize) -> Self {
        self.variable_limit = Some(limit);
        self
    }

    pub fn build(&self, entries: &[CostEntry]) -> Result<FreightModel, ModelError> {
        let mut sellers: Vec<String> = Vec::new();
        let mut orders: Vec<String> = Vec::new();
        let mut seller_index: HashMap<String, usize> = HashMap::new();
        let mut order_index: HashMap<String, usize> = HashMap::new();
        let mut coefficients: HashMap<(usize, usize), f64> = HashMap::new();

        for entry in entries {
            if !entry.freight_value.is_finite() || entry.freight_value < 0.0 {
                return Err(ModelError::InvalidCost {
                    seller_id: entry.seller_id.clone(),
                    order_id: entry.order_id.clone(),
                    value: entry.freight_value,
                });
            }

            let s = *seller_index
                .entry(entry.seller_id.clone())
                .or_insert_with(|| {
                    sellers.push(entry.seller_id.clone());
                    sellers.len() - 1
                });
            let o = *order_index.entry(entry.order_id.clone()).or_insert_with(|| {
                orders.push(entry.order_id.clone());
                orders.len() - 1
            });

            *coefficients.entry((s, o)).or_insert(0.0) += entry.freight_value;
        }

        let grid = sellers.len() * orders.len();
        if let Some(limit) = self.variable_limit {
            if grid > limit {
                return Err(ModelError::VariableLimitExceeded {
                    sellers: sellers.len(),
                    orders: orders.len(),
                    limit,
                });
            }
        }
        if grid > DENSE_GRID_WARN_THRESHOLD {
            log::warn!(
                "dense variable grid: {} sellers x {} orders = {} variables",
                sellers.len(),
                orders.len(),
                grid
            );
        }

        Ok(FreightModel {
            sellers,
            orders,
            coefficients,
        })
    }
}
