use clap::{Parser, Subcommand};
use serde::Serialize;

use commands::{CmdResult, GlobalArgs};

mod commands;
mod output;

use commands::rename;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "manifest-rename")]
#[command(version = VERSION)]
#[command(about = "Correct a misspelled term in the base name of every path listed in a manifest")]
struct Cli {
    /// Print a JSON result envelope on stdout
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename every manifest entry whose base name contains a pattern (default)
    Run(rename::RunArgs),
    /// Show the ordered substitution list that a run would apply
    Variants(rename::VariantsArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs { json: cli.json };

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Run(rename::RunArgs::default()));

    let exit_code = match command {
        Commands::Run(args) => finish(rename::run(args, &global), &global, |_| Ok(())),
        Commands::Variants(args) => finish(rename::variants(args), &global, |out| {
            let lines: Vec<String> = out
                .substitutions
                .iter()
                .map(|sub| {
                    if sub.label.is_empty() {
                        format!("{} -> {}", sub.from, sub.to)
                    } else {
                        format!("{} -> {} ({})", sub.from, sub.to, sub.label)
                    }
                })
                .collect();
            output::print_text(&lines.join("\n"))
        }),
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

/// Report a command result in the selected mode and return its exit code.
fn finish<T: Serialize>(
    result: CmdResult<T>,
    global: &GlobalArgs,
    render: impl FnOnce(&T) -> manifest_rename::Result<()>,
) -> i32 {
    if global.json {
        let (json_result, exit_code) = output::map_cmd_result_to_json(result);
        if let Err(err) = output::print_json_result(json_result) {
            output::print_error(&err);
            return 1;
        }
        return exit_code;
    }

    match result {
        Ok((data, exit_code)) => match render(&data) {
            Ok(()) => exit_code,
            Err(err) => {
                output::print_error(&err);
                output::exit_code_for_error(err.code)
            }
        },
        Err(err) => {
            output::print_error(&err);
            output::exit_code_for_error(err.code)
        }
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
