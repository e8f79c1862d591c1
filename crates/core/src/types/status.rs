//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Order fulfillment status.
///
/// The only exposed transition is `Pending -> Fulfilled`; there is no
/// cancellation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "sqlite", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlite", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Fulfilled,
}

impl OrderStatus {
    /// Whether a transition from `self` to `next` is allowed.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!((self, next), (Self::Pending, Self::Fulfilled))
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Fulfilled => write!(f, "fulfilled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "fulfilled" => Ok(Self::Fulfilled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Fulfilled));
        assert!(!OrderStatus::Fulfilled.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Pending));
    }

    #[test]
    fn test_round_trip() {
        let status: OrderStatus = "fulfilled".parse().unwrap();
        assert_eq!(status, OrderStatus::Fulfilled);
        assert_eq!(status.to_string(), "fulfilled");
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_serde() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"pending\""
        );
    }
}
