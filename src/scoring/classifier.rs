use crate::customer::RiskStatus;

/// Scores strictly below this are high risk.
pub const HIGH_RISK_THRESHOLD: i32 = 50;

pub fn classify(score: i32) -> RiskStatus {
    if score < HIGH_RISK_THRESHOLD {
        RiskStatus::HighRisk
    } else {
        RiskStatus::LowRisk
    }
}
