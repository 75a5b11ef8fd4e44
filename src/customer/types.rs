use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Risk classification derived from a credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskStatus {
    #[serde(rename = "High Risk", alias = "HighRisk")]
    HighRisk,
    #[serde(rename = "Low Risk", alias = "LowRisk")]
    LowRisk,
}

impl RiskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskStatus::HighRisk => "High Risk",
            RiskStatus::LowRisk => "Low Risk",
        }
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score and status computed together for one customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub score: i32,
    pub status: RiskStatus,
}

/// A customer record as stored in the master file and in reports.
///
/// The raw inputs are public and may be edited freely. `credit_score` and
/// `risk_status` are only written by the scoring module, so they can go stale
/// when a raw input changes after enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    #[serde(default = "Uuid::new_v4")]
    customer_id: Uuid,

    #[serde(default)]
    pub name: Option<String>,

    /// Percentage of payments made on time (0-100)
    #[serde(default)]
    pub payment_history: i32,

    /// Percentage of the credit limit in use (0-100)
    #[serde(default)]
    pub credit_utilization: i32,

    /// Years of credit history
    #[serde(default)]
    pub age_of_credit_history: i32,

    #[serde(default)]
    credit_score: i32,

    #[serde(default)]
    risk_status: Option<RiskStatus>,
}

impl Customer {
    /// Create an unscored customer with a fresh id.
    pub fn new(
        name: Option<String>,
        payment_history: i32,
        credit_utilization: i32,
        age_of_credit_history: i32,
    ) -> Self {
        Self {
            customer_id: Uuid::new_v4(),
            name,
            payment_history,
            credit_utilization,
            age_of_credit_history,
            credit_score: 0,
            risk_status: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.customer_id
    }

    /// Name for display, "(unnamed)" when absent
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }

    /// Last computed score, 0 if never scored
    pub fn credit_score(&self) -> i32 {
        self.credit_score
    }

    pub fn risk_status(&self) -> Option<RiskStatus> {
        self.risk_status
    }

    /// True while both derived fields still hold their unset sentinel.
    pub fn is_unscored(&self) -> bool {
        self.credit_score == 0 && self.risk_status.is_none()
    }

    pub(crate) fn record_assessment(&mut self, assessment: Assessment) {
        self.credit_score = assessment.score;
        self.risk_status = Some(assessment.status);
    }
}
