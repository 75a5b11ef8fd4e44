use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::customer::{load_customers, save_customers, search_by_name, Customer};
use crate::report::ReportExporter;
use crate::scoring::{BatchProcessor, ScoreCalculator};

/// Paths of the two files written by one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub structured: PathBuf,
    pub tabular: PathBuf,
}

/// Raw fields for a customer entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: Option<String>,
    pub payment_history: i32,
    pub credit_utilization: i32,
    pub age_of_credit_history: i32,
}

/// The loaded customer collection together with the collaborators that act
/// on it.
///
/// The master file is rewritten after the startup ensure pass and after each
/// added customer. Report generation does not touch the master file.
#[derive(Debug)]
pub struct Session {
    master_path: PathBuf,
    customers: Vec<Customer>,
    calculator: ScoreCalculator,
    processor: BatchProcessor,
    exporter: ReportExporter,
}

impl Session {
    pub fn new(
        master_path: impl Into<PathBuf>,
        customers: Vec<Customer>,
        calculator: ScoreCalculator,
        exporter: ReportExporter,
    ) -> Self {
        Self {
            master_path: master_path.into(),
            customers,
            calculator,
            processor: BatchProcessor::new(calculator),
            exporter,
        }
    }

    /// Load the master file named by `config`, score any customers that were
    /// never scored, and write the collection back.
    pub fn open(config: &Config) -> Result<Self> {
        let master_path = config.master_path();
        let customers = load_customers(&master_path)?;
        let exporter = ReportExporter::new(&config.data_dir)
            .with_prefix(config.report_prefix.as_str())
            .with_tabular_writer(config.report_format.writer());

        let mut session = Self::new(master_path, customers, ScoreCalculator::new(), exporter);
        session.ensure_data()?;
        Ok(session)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn master_path(&self) -> &Path {
        &self.master_path
    }

    /// Score never-scored customers, then persist the whole collection.
    /// Returns the number of customers scored.
    pub fn ensure_data(&mut self) -> Result<usize> {
        let enriched = self.processor.ensure(&mut self.customers);
        save_customers(&self.master_path, &self.customers)?;
        debug!(enriched, "startup data ensured");
        Ok(enriched)
    }

    /// Rescore everyone, then write the JSON and spreadsheet reports.
    ///
    /// The per-customer summary lines go to `out`.
    pub fn generate_report<W: Write>(&mut self, out: &mut W) -> Result<ReportPaths> {
        self.processor.process(&mut self.customers);
        let structured = self.exporter.export_structured(&self.customers, out)?;
        let tabular = self.exporter.export_tabular(&self.customers)?;
        Ok(ReportPaths {
            structured,
            tabular,
        })
    }

    /// Score a new customer, append it, and rewrite the master file.
    pub fn add_customer(&mut self, new: NewCustomer) -> Result<&Customer> {
        let mut customer = Customer::new(
            new.name,
            new.payment_history,
            new.credit_utilization,
            new.age_of_credit_history,
        );
        let assessment = self.calculator.assess(&customer);
        customer.record_assessment(assessment);

        info!(
            id = %customer.id(),
            score = assessment.score,
            status = %assessment.status,
            "added customer"
        );
        self.customers.push(customer);
        save_customers(&self.master_path, &self.customers)?;

        Ok(&self.customers[self.customers.len() - 1])
    }

    pub fn search(&self, term: &str) -> Vec<&Customer> {
        search_by_name(&self.customers, term)
    }
}
