use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::output::format_customer_table;
use crate::prompt::Prompter;
use crate::session::{NewCustomer, Session};

/// Upper bound accepted for age of credit history at the prompt
pub const MAX_AGE_INPUT: i32 = 100;

/// Run the interactive menu until the user exits.
///
/// Returns the spreadsheet path when the user asks to open the report and
/// close the application, `None` on a plain exit.
pub fn run_menu<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
    use_colors: bool,
) -> Result<Option<PathBuf>> {
    loop {
        prompter.say("Select an option:")?;
        prompter.say("1. View and Save Report")?;
        prompter.say("2. Add New Customer")?;
        prompter.say("3. Search for a Customer")?;
        prompter.say("4. Exit")?;
        let choice = prompter.read_reply()?;

        match choice.as_str() {
            "1" => {
                if let Some(path) = report(session, prompter)? {
                    return Ok(Some(path));
                }
            }
            "2" => add_customer(session, prompter)?,
            "3" => search(session, prompter, use_colors)?,
            "4" => return Ok(None),
            _ => prompter.say("Invalid choice. Please try again.")?,
        }
    }
}

fn report<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
) -> Result<Option<PathBuf>> {
    let paths = session.generate_report(prompter.output())?;
    prompter.say(&format!("JSON report saved at: {}", paths.structured.display()))?;
    prompter.say(&format!(
        "Spreadsheet report saved at: {}",
        paths.tabular.display()
    ))?;

    prompter.say("Choose an option:")?;
    prompter.say("1. Open spreadsheet report and close application")?;
    prompter.say("2. Back to main menu")?;
    let choice = prompter.read_reply()?;
    if choice == "1" {
        Ok(Some(paths.tabular))
    } else {
        Ok(None)
    }
}

fn add_customer<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let name = prompter.prompt("Enter customer name and surname:")?;
    let payment_history = prompter.prompt_bounded("Enter payment history (0%-100%):", 0, 100)?;
    let credit_utilization =
        prompter.prompt_bounded("Enter credit utilization (0%-100%):", 0, 100)?;
    let age_of_credit_history =
        prompter.prompt_bounded("Enter age of credit history in years:", 0, MAX_AGE_INPUT)?;

    session.add_customer(NewCustomer {
        name: (!name.is_empty()).then_some(name),
        payment_history,
        credit_utilization,
        age_of_credit_history,
    })?;
    prompter.say("Customer added successfully.")
}

fn search<R: BufRead, W: Write>(
    session: &Session,
    prompter: &mut Prompter<R, W>,
    use_colors: bool,
) -> Result<()> {
    let term = prompter.prompt("Enter part of the customer's name to search:")?;
    let matches = session.search(&term);
    prompter.say(&format_customer_table(&matches, use_colors))
}
