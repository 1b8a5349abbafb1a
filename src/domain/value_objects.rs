// Domain value objects representing core business concepts

use std::fmt;

/// Outcome of a plan optimization run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanStatus {
    /// Found the minimum-cost shipment plan
    Optimal,
    /// No assignment satisfies every order-fulfillment constraint
    Infeasible,
    /// Objective can be improved infinitely (defensive: cannot occur while
    /// freight costs are non-negative, surfaced verbatim if a backend says so)
    Unbounded,
    /// The backend failed; diagnostic text is carried in the outcome message
    SolverError,
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanStatus::Optimal => write!(f, "Optimal"),
            PlanStatus::Infeasible => write!(f, "Infeasible"),
            PlanStatus::Unbounded => write!(f, "Unbounded"),
            PlanStatus::SolverError => write!(f, "Solver Error"),
        }
    }
}

/// Solver backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverBackend {
    /// Pick the best backend compiled into this build
    Auto,
    /// Bundled pure-Rust simplex (microlp via good_lp)
    Microlp,
    /// COIN-OR CBC
    #[cfg(feature = "coin-cbc")]
    CoinCbc,
    /// HiGHS
    #[cfg(feature = "highs")]
    Highs,
}

impl SolverBackend {
    /// Parse a backend name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(SolverBackend::Auto),
            "microlp" => Some(SolverBackend::Microlp),
            #[cfg(feature = "coin-cbc")]
            "cbc" | "coin-cbc" | "coin_cbc" => Some(SolverBackend::CoinCbc),
            #[cfg(feature = "highs")]
            "highs" => Some(SolverBackend::Highs),
            _ => None,
        }
    }
}

impl fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverBackend::Auto => write!(f, "Auto"),
            SolverBackend::Microlp => write!(f, "microlp"),
            #[cfg(feature = "coin-cbc")]
            SolverBackend::CoinCbc => write!(f, "COIN-OR CBC"),
            #[cfg(feature = "highs")]
            SolverBackend::Highs => write!(f, "HiGHS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parse_is_case_insensitive() {
        assert_eq!(SolverBackend::parse("auto"), Some(SolverBackend::Auto));
        assert_eq!(
            SolverBackend::parse("MicroLP"),
            Some(SolverBackend::Microlp)
        );
        #[cfg(feature = "coin-cbc")]
        assert_eq!(SolverBackend::parse("CBC"), Some(SolverBackend::CoinCbc));
        #[cfg(feature = "highs")]
        assert_eq!(SolverBackend::parse("HiGHS"), Some(SolverBackend::Highs));
        assert_eq!(SolverBackend::parse("simplexpress"), None);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(PlanStatus::Optimal.to_string(), "Optimal");
        assert_eq!(PlanStatus::SolverError.to_string(), "Solver Error");
    }
}
