use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging::{self, LogTarget};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let interactive = matches!(cli.command, None | Some(Commands::Tui { .. }));
    let log_target = if interactive {
        LogTarget::Discard
    } else {
        LogTarget::Stderr
    };
    logging::init(cli.log_level, log_target);

    let ctx = ExecutionContext::load(cli.config.as_deref(), cli.format)?;

    let Some(command) = cli.command else {
        return handlers::tui::handle(&ctx, "home", None);
    };

    match command {
        Commands::Tui { route, movie_id } => handlers::tui::handle(&ctx, &route, movie_id),

        Commands::List { title, min_rating } => handlers::list::handle(&ctx, title, &min_rating),

        Commands::Show { id } => handlers::show::handle(&ctx, id),

        Commands::Open { route, movie_id } => handlers::open::handle(&ctx, &route, movie_id),

        Commands::Config { command } => match command {
            ConfigCommand::Init { force } => handlers::config::init(&ctx, force),
            ConfigCommand::Show => handlers::config::show(&ctx),
        },
    }
}
