//! Interactive query loop.

use std::io::{BufRead, Write};

use factbot_core::{DispatchTable, Resolution, normalize};
use tracing::debug;

const WELCOME: &str = "Welcome to the Wikipedia database!";
const FAREWELL: &str = "So long!";
const PROMPT: &str = "Your query? ";

/// Read queries until the exit pattern matches or input ends.
///
/// A failed lookup is reported for that query only; the loop keeps going.
pub async fn run(table: &DispatchTable) -> anyhow::Result<()> {
    println!("{WELCOME}\n");

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("{PROMPT}");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input counts as a goodbye.
            break;
        }

        let tokens = normalize(&line);
        if tokens.is_empty() {
            continue;
        }
        debug!("Query tokens: {tokens:?}");

        match table.resolve(&tokens).await {
            Ok(Resolution::Answers(answers)) => {
                for answer in answers {
                    println!("{answer}");
                }
                println!();
            }
            Ok(Resolution::Terminate) => break,
            Err(e) => eprintln!("Lookup failed: {e}"),
        }
    }

    println!("\n{FAREWELL}");
    Ok(())
}

/// Answer a single query and return.
pub async fn ask_once(table: &DispatchTable, message: &str) -> anyhow::Result<()> {
    let tokens = normalize(message);
    if let Resolution::Answers(answers) = table.resolve(&tokens).await? {
        for answer in answers {
            println!("{answer}");
        }
    }
    Ok(())
}
