use clap::{Parser, Subcommand};
use std::path::PathBuf;

use credit_risk::config::{load_config, validate_config, write_default_config};
use credit_risk::output::{format_customer_detail, format_customer_table, format_tsv, should_use_colors};
use credit_risk::prompt::Prompter;
use credit_risk::{NewCustomer, Session};

const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive menu (default if no subcommand)
    Menu,
    /// Rescore all customers and write JSON and spreadsheet reports
    Report {
        /// Open the spreadsheet report when done
        #[arg(long)]
        open: bool,
    },
    /// Add a customer to the master file
    Add {
        /// Customer name and surname
        #[arg(long)]
        name: Option<String>,
        /// Percentage of payments made on time
        #[arg(long, value_parser = clap::value_parser!(i32).range(0..=100))]
        payment_history: i32,
        /// Percentage of the credit limit in use
        #[arg(long, value_parser = clap::value_parser!(i32).range(0..=100))]
        credit_utilization: i32,
        /// Age of credit history in years
        #[arg(long, value_parser = clap::value_parser!(i32).range(0..=100))]
        age: i32,
    },
    /// Find customers whose name contains TERM (case-insensitive)
    Search {
        term: String,
        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Write a config file with the default settings
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "credit-risk")]
#[command(about = "Customer credit-risk scoring and reporting", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/credit-risk/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Directory holding the master file and reports (overrides config)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Menu);
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init { force } = command {
        match write_default_config(config_path, force) {
            Ok(path) => {
                println!("Config written to {}", path.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    // Load config
    let mut config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    if let Err(errors) = validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if let Err(e) = credit_risk::telemetry::init(&config.log_level, cli.verbose) {
        eprintln!("Logging disabled: {:#}", e);
    }

    // Load customers and score any that were never scored
    let mut session = match Session::open(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load customer data: {:#}", e);
            std::process::exit(EXIT_IO);
        }
    };

    if cli.verbose {
        eprintln!(
            "Loaded {} customers from {}",
            session.customers().len(),
            session.master_path().display()
        );
    }

    let use_colors = should_use_colors();
    let result = match command {
        Commands::Menu => {
            let mut prompter = Prompter::stdio();
            credit_risk::menu::run_menu(&mut session, &mut prompter, use_colors).and_then(
                |open| match open {
                    Some(path) => credit_risk::opener::open_report(&path),
                    None => Ok(()),
                },
            )
        }
        Commands::Report { open } => {
            let mut stdout = std::io::stdout();
            session.generate_report(&mut stdout).and_then(|paths| {
                println!("JSON report saved at: {}", paths.structured.display());
                println!("Spreadsheet report saved at: {}", paths.tabular.display());
                if open {
                    credit_risk::opener::open_report(&paths.tabular)?;
                }
                Ok(())
            })
        }
        Commands::Add {
            name,
            payment_history,
            credit_utilization,
            age,
        } => session
            .add_customer(NewCustomer {
                name: name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
                payment_history,
                credit_utilization,
                age_of_credit_history: age,
            })
            .map(|customer| {
                println!("Customer added successfully.");
                println!("{}", format_customer_detail(customer, use_colors));
            }),
        Commands::Search { term, tsv } => {
            let matches = session.search(&term);
            if tsv {
                if !matches.is_empty() {
                    println!("{}", format_tsv(&matches));
                }
            } else if cli.verbose && !matches.is_empty() {
                // Verbose mode: detailed output per customer
                for customer in &matches {
                    println!("{}", format_customer_detail(customer, use_colors));
                    println!();
                }
            } else {
                println!("{}", format_customer_table(&matches, use_colors));
            }
            Ok(())
        }
        Commands::Init { .. } => unreachable!("handled before loading config"),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(EXIT_IO);
    }

    std::process::exit(EXIT_SUCCESS);
}
