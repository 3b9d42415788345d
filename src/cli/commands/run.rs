use crate::cli::parser::RunArgs;
use crate::config::Config;
use crate::core::logic::{Core, RunOptions};
use crate::core::runlog::Level;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use crate::utils::path::expand_tilde;

/// Handle the `run` command (also the default when no command is given)
pub fn handle(args: &RunArgs, cfg: &Config) -> AppResult<()> {
    let opts = RunOptions {
        dir: expand_tilde(&args.dir),
        file: args.file.as_deref().map(expand_tilde),
        copy_original: !args.no_copy,
    };

    let report = Core::execute(cfg, &opts);

    match &report.log_path {
        Some(p) => info(format!("Log file: {}", p.display())),
        None => error("Run log could not be written anywhere"),
    }

    let outcome = report.outcome?;

    if args.print {
        println!("{}", outcome.report);
    }

    let warnings = report.log.count(Level::Warn);
    if warnings > 0 {
        warning(format!("{warnings} warning(s), see the log for details"));
    }
    if opts.copy_original && outcome.copied_original.is_none() {
        warning("Original file was not copied into the archive");
    }

    success(format!(
        "{} employee(s) over {} data row(s) processed from {}",
        outcome.result.employees.len(),
        outcome.result.data_rows,
        outcome.source.display()
    ));
    success(format!("Report: {}", outcome.report_path.display()));
    Ok(())
}
