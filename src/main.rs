use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use polychat_translate::cli::commands::{configure, policies, translate};
use polychat_translate::cli::{Args, Command};
use polychat_translate::output::{self, OutputConfig};
use polychat_translate::translation::print_languages;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let resolve = args.resolve_options();

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Policies { name }) => match name {
            Some(name) => policies::show_policy(&name)?,
            None => policies::list_policies(),
        },
        Some(Command::Configure { show }) => {
            if show {
                configure::show_settings(&resolve)?;
            } else {
                configure::run_configure()?;
            }
        }
        None => {
            let options = translate::TranslateOptions {
                text: args.text,
                file: args.file,
                to: args.to,
                glossary: args.glossary,
                resolve,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
