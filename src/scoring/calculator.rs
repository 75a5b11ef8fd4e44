use super::classifier::classify;
use crate::customer::{Assessment, Customer};

/// Years of credit history beyond which age adds nothing to the score.
pub const MAX_CREDIT_AGE_YEARS: i32 = 10;

// Weights in tenths: 0.4, 0.3, 0.3
const PAYMENT_WEIGHT: i64 = 4;
const UTILIZATION_WEIGHT: i64 = 3;
const AGE_WEIGHT: i64 = 3;
const WEIGHT_SCALE: i64 = 10;

/// Weighted credit score:
///
/// ```text
/// trunc(0.4 * payment_history + 0.3 * (100 - credit_utilization) + 0.3 * min(age, 10))
/// ```
///
/// Computed in tenths with a single truncation toward zero at the end.
/// Valid inputs score within 0..=73. Inputs are not validated; values
/// outside their documented ranges give scores outside that range.
pub fn calculate_credit_score(
    payment_history: i32,
    credit_utilization: i32,
    age_of_credit_history: i32,
) -> i32 {
    let age = age_of_credit_history.min(MAX_CREDIT_AGE_YEARS);
    let weighted = PAYMENT_WEIGHT * i64::from(payment_history)
        + UTILIZATION_WEIGHT * (100 - i64::from(credit_utilization))
        + AGE_WEIGHT * i64::from(age);
    // |weighted| < 10 * 2^31 for any i32 inputs, so the quotient fits in i32
    (weighted / WEIGHT_SCALE) as i32
}

/// Stateless scorer handed to the batch processor and the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreCalculator;

impl ScoreCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(
        &self,
        payment_history: i32,
        credit_utilization: i32,
        age_of_credit_history: i32,
    ) -> i32 {
        calculate_credit_score(payment_history, credit_utilization, age_of_credit_history)
    }

    /// Score and classify a customer from its current raw fields.
    pub fn assess(&self, customer: &Customer) -> Assessment {
        let score = self.calculate(
            customer.payment_history,
            customer.credit_utilization,
            customer.age_of_credit_history,
        );
        Assessment {
            score,
            status: classify(score),
        }
    }
}
