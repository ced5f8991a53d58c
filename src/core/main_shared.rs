use clap::Parser;
use log::debug;

use crate::core::cli::{Args, Commands, PrintArgs};
use crate::core::cmds;
use crate::core::logging::init_logging;
use crate::types::AppResult;
use crate::types::config::{CliOverrides, config, init_with_overrides};

pub async fn run_main() -> AppResult<()> {
    let args = Args::parse();

    // Build CLI overrides for config precedence
    let mut cli_overrides = CliOverrides {
        config: args.config.clone(),
        log_level: args.log_level.clone(),
        log_color: args.log_color.clone(),
        ..Default::default()
    };
    if let Commands::Report(report_args) = &args.command {
        cli_overrides.all_reviewers = report_args.all_reviewers;
        cli_overrides.name_width = report_args.name_width;
        cli_overrides.seed = report_args.seed;
        cli_overrides.no_badge = report_args.no_badge;
        cli_overrides.repositories = report_args.repositories.clone();
        cli_overrides.status = report_args.status.clone();
    }

    // Initialize configuration (file, then CLI overrides)
    init_with_overrides(&cli_overrides)?;

    // Initialize logging after config so level/color are applied
    init_logging();
    debug!("Effective config: {:?}", config());

    // Dispatch to appropriate command
    match args.command {
        Commands::Init => cmds::execute_init().await?,
        Commands::Report(report_args) => {
            cmds::execute_report(report_args.input, &report_args.format, config()).await?
        }
        Commands::Print {
            command: print_args,
        } => {
            let command = match print_args {
                PrintArgs::Config(args) => cmds::print::PrintCommand::Config(args.format),
                PrintArgs::Badges(args) => cmds::print::PrintCommand::Badges(args.format),
            };
            cmds::execute_print(command, config()).await?
        }
    }

    Ok(())
}
