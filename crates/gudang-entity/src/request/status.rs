//! Request status enumeration and transition rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical request lifecycle states.
///
/// The database and API speak this vocabulary exclusively. The legacy
/// client vocabulary (`denied`, `completed`) is accepted only as parse
/// aliases for compatibility with older callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "request_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Awaiting a manager's decision.
    Pending,
    /// Approved; stock has been deducted.
    Approved,
    /// Rejected by a manager.
    Rejected,
    /// Goods handed over to the requester.
    Fulfilled,
    /// Could not be approved because stock ran out.
    OutOfStock,
}

impl RequestStatus {
    /// Whether a transition from `self` to `target` is allowed.
    ///
    /// The stock deduction fires exactly once, on `Pending -> Approved`;
    /// every rule here exists to protect that.
    pub fn can_transition_to(&self, target: RequestStatus) -> bool {
        use RequestStatus::*;
        match (*self, target) {
            // No-op transitions are rejected so callers learn they raced.
            (a, b) if a == b => false,
            (Pending, Approved | Rejected | OutOfStock) => true,
            (Approved, Fulfilled) => true,
            // Terminal states.
            (Rejected | Fulfilled | OutOfStock, _) => false,
            _ => false,
        }
    }

    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Fulfilled | Self::OutOfStock)
    }

    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Fulfilled => "fulfilled",
            Self::OutOfStock => "out_of_stock",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = gudang_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            // legacy client vocabulary
            "rejected" | "denied" => Ok(Self::Rejected),
            "fulfilled" | "completed" => Ok(Self::Fulfilled),
            "out_of_stock" => Ok(Self::OutOfStock),
            _ => Err(gudang_core::AppError::validation(format!(
                "Invalid request status: '{s}'. Expected one of: pending, approved, rejected, fulfilled, out_of_stock"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_parse_to_canonical() {
        assert_eq!(
            "denied".parse::<RequestStatus>().unwrap(),
            RequestStatus::Rejected
        );
        assert_eq!(
            "completed".parse::<RequestStatus>().unwrap(),
            RequestStatus::Fulfilled
        );
        assert!("cancelled".parse::<RequestStatus>().is_err());
    }

    #[test]
    fn test_approval_fires_from_pending_only() {
        assert!(RequestStatus::Pending.can_transition_to(RequestStatus::Approved));
        assert!(!RequestStatus::Approved.can_transition_to(RequestStatus::Approved));
        assert!(!RequestStatus::Rejected.can_transition_to(RequestStatus::Approved));
        assert!(!RequestStatus::Fulfilled.can_transition_to(RequestStatus::Approved));
    }

    #[test]
    fn test_lifecycle() {
        assert!(RequestStatus::Pending.can_transition_to(RequestStatus::Rejected));
        assert!(RequestStatus::Pending.can_transition_to(RequestStatus::OutOfStock));
        assert!(RequestStatus::Approved.can_transition_to(RequestStatus::Fulfilled));
        assert!(!RequestStatus::Approved.can_transition_to(RequestStatus::Pending));
        assert!(RequestStatus::Fulfilled.is_terminal());
        assert!(!RequestStatus::Pending.is_terminal());
    }
}
