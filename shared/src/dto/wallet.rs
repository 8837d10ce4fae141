use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    Requested,
    Approved,
    Rejected,
    Paid,
}

impl WithdrawalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WithdrawalStatus::Requested => "Requested",
            WithdrawalStatus::Approved => "Approved",
            WithdrawalStatus::Rejected => "Rejected",
            WithdrawalStatus::Paid => "Paid",
        }
    }

    pub const ALL: [WithdrawalStatus; 4] = [
        WithdrawalStatus::Requested,
        WithdrawalStatus::Approved,
        WithdrawalStatus::Rejected,
        WithdrawalStatus::Paid,
    ];

    /// Whether an admin can still act on a request in this state.
    pub fn is_actionable(&self) -> bool {
        matches!(self, WithdrawalStatus::Requested)
    }
}

/// A court owner's wallet withdrawal request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalDto {
    pub id: i64,
    pub owner_name: String,
    pub amount: f64,
    pub requested_at: NaiveDateTime,
    pub status: WithdrawalStatus,
}

/// Filter for the withdrawal management screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalFilter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WithdrawalStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_requested_is_actionable() {
        assert!(WithdrawalStatus::Requested.is_actionable());
        assert!(!WithdrawalStatus::Approved.is_actionable());
        assert!(!WithdrawalStatus::Rejected.is_actionable());
        assert!(!WithdrawalStatus::Paid.is_actionable());
    }
}
