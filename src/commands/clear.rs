use anyhow::Result;
use std::io::{self, BufRead, Write};

use smartcity::issues::IssueStore;

pub fn run(issues: &IssueStore<'_>, force: bool) -> Result<()> {
    let stdin = io::stdin();
    run_with_input(issues, force, &mut stdin.lock())
}

fn run_with_input(issues: &IssueStore<'_>, force: bool, input: &mut impl BufRead) -> Result<()> {
    let count = issues.list_all()?.len();

    if !force {
        print!("Clear all {} issues? [y/N] ", count);
        io::stdout().flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;

        if !answer.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    issues.clear_all()?;
    println!("Cleared {} issues.", count);
    Ok(())
}
