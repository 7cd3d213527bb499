use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use ansi_term::Colour;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// ANSI color per operation kind
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "world_add" | "world_set" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Handle the `log` command: print the internal audit log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let rows = queries::load_log(&mut pool)?;

        if rows.is_empty() {
            println!("Log is empty.");
            return Ok(());
        }

        for (id, date, operation, target, message) in rows {
            let colored = color_for_operation(&operation)
                .paint(operation.clone())
                .to_string();
            // pad on the stripped width, ANSI escapes don't count
            let pad = 20usize.saturating_sub(strip_ansi(&colored).len());

            println!(
                "{:>5}  {}  {}{}  {}  {}",
                id,
                date,
                colored,
                " ".repeat(pad),
                target,
                message
            );
        }
    }
    Ok(())
}
