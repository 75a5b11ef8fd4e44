use super::calculator::ScoreCalculator;
use crate::customer::Customer;
use tracing::debug;

/// Applies the calculator across a customer collection in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchProcessor {
    calculator: ScoreCalculator,
}

impl BatchProcessor {
    pub fn new(calculator: ScoreCalculator) -> Self {
        Self { calculator }
    }

    /// Recompute score and status for every customer, overwriting any
    /// previous values. Returns the number of customers processed.
    pub fn process(&self, customers: &mut [Customer]) -> usize {
        for customer in customers.iter_mut() {
            let assessment = self.calculator.assess(customer);
            customer.record_assessment(assessment);
        }
        debug!(count = customers.len(), "recomputed credit scores");
        customers.len()
    }

    /// Score only customers that were never scored (score 0 and no status).
    ///
    /// Already-scored customers keep their values even if their raw fields
    /// changed since. Returns the number of customers enriched.
    pub fn ensure(&self, customers: &mut [Customer]) -> usize {
        let mut enriched = 0;
        for customer in customers.iter_mut().filter(|c| c.is_unscored()) {
            let assessment = self.calculator.assess(customer);
            customer.record_assessment(assessment);
            enriched += 1;
        }
        debug!(enriched, total = customers.len(), "ensured credit data");
        enriched
    }
}
