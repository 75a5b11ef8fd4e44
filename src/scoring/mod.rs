pub mod batch;
pub mod calculator;
pub mod classifier;

pub use batch::BatchProcessor;
pub use calculator::{calculate_credit_score, ScoreCalculator, MAX_CREDIT_AGE_YEARS};
pub use classifier::{classify, HIGH_RISK_THRESHOLD};
