//! Credit-risk scoring for customer lists.
//!
//! Customers are scored from payment history, credit utilization and age of
//! credit history, classified as high or low risk, and exported as JSON and
//! spreadsheet reports.

pub mod config;
pub mod customer;
pub mod menu;
pub mod opener;
pub mod output;
pub mod prompt;
pub mod report;
pub mod scoring;
pub mod session;
pub mod telemetry;

pub use customer::{Customer, RiskStatus};
pub use report::ReportExporter;
pub use scoring::{calculate_credit_score, classify, BatchProcessor, ScoreCalculator};
pub use session::{NewCustomer, ReportPaths, Session};
