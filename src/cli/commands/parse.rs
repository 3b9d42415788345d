use crate::cli::parser::Commands;
use crate::core::parser::{Notation, parse_with_notation};
use crate::errors::{AppError, AppResult};
use crate::models::RawCell;
use crate::utils::time::format_hms;
use serde::Serialize;

#[derive(Serialize)]
struct ParsedValue {
    input: String,
    notation: Option<Notation>,
    hours: Option<f64>,
    clock: Option<String>,
}

/// Handle the `parse` subcommand
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Parse { values, json } = cmd {
        let parsed: Vec<ParsedValue> = values.iter().map(String::as_str).map(interpret).collect();

        if *json {
            let out = serde_json::to_string_pretty(&parsed)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{out}");
            return Ok(());
        }

        for p in &parsed {
            match (&p.notation, p.hours, &p.clock) {
                (Some(n), Some(h), Some(c)) => {
                    println!("{:>14}  →  {:>10}  {:>10.6}h  ({})", p.input, c, h, n)
                }
                _ => println!("{:>14}  →  unparseable", p.input),
            }
        }
    }
    Ok(())
}

fn interpret(value: &str) -> ParsedValue {
    let parsed = parse_with_notation(&RawCell::text(value));
    ParsedValue {
        input: value.to_string(),
        notation: parsed.map(|(_, n)| n),
        hours: parsed.map(|(t, _)| t.hours()),
        clock: parsed.map(|(t, _)| format_hms(t.hours())),
    }
}
