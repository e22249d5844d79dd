use clap::{Parser, Subcommand};
use std::io::Write;
use tipboard_cli::CliContext;
use tipboard_cli::commands;
use tipboard_cli::logging;
use tipboard_cli::readline;

fn main() -> Result<(), String> {
    let _log_guard = logging::init();
    let mut ctx = CliContext::load();

    commands::show(&ctx);

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut ctx) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "tipboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the inclusive bill range
    Bill {
        #[arg(allow_negative_numbers = true)]
        min: f64,
        #[arg(allow_negative_numbers = true)]
        max: f64,
    },
    /// Select server genders (none to deselect all)
    Gender { genders: Vec<String> },
    /// Select service times (none to deselect all)
    Time { times: Vec<String> },
    Show,
    Table {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    State,
    Snapshot,
    Reset,
    Config,
    Exit,
}

fn respond(line: &str, ctx: &mut CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "tipboard".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Bill { min, max }) => {
            commands::set_bill(ctx, *min, *max)?;
        }
        Some(Commands::Gender { genders }) => {
            commands::set_genders(ctx, genders)?;
        }
        Some(Commands::Time { times }) => {
            commands::set_times(ctx, times)?;
        }
        Some(Commands::Show) => commands::show(ctx),
        Some(Commands::Table { limit }) => commands::show_table(ctx, *limit),
        Some(Commands::State) => commands::show_state(ctx),
        Some(Commands::Snapshot) => println!("{}", commands::snapshot_json(ctx)?),
        Some(Commands::Reset) => {
            commands::reset(ctx);
        }
        Some(Commands::Config) => commands::show_config(ctx)?,
        Some(Commands::Exit) => {
            commands::exit()?;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Cli, String> {
        let mut args = shlex::split(line).ok_or("bad quoting")?;
        args.insert(0, "tipboard".to_string());
        Cli::try_parse_from(args).map_err(|e| e.to_string())
    }

    #[test]
    fn test_parse_bill() {
        match parse("bill 10 25.5").unwrap().command {
            Some(Commands::Bill { min, max }) => assert_eq!((min, max), (10.0, 25.5)),
            _ => panic!("expected bill command"),
        }
        assert!(parse("bill 10").is_err());
    }

    #[test]
    fn test_parse_empty_selection() {
        match parse("gender").unwrap().command {
            Some(Commands::Gender { genders }) => assert!(genders.is_empty()),
            _ => panic!("expected gender command"),
        }
        match parse("time lunch dinner").unwrap().command {
            Some(Commands::Time { times }) => assert_eq!(times, vec!["lunch", "dinner"]),
            _ => panic!("expected time command"),
        }
    }

    #[test]
    fn test_parse_table_limit() {
        match parse("table --limit 5").unwrap().command {
            Some(Commands::Table { limit }) => assert_eq!(limit, Some(5)),
            _ => panic!("expected table command"),
        }
    }
}
