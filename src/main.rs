use anyhow::Result;
use clap::Parser;

use notion_graphql::cli::handlers::{CommandContext, handle_query, handle_schema, handle_serve};
use notion_graphql::cli::{Cli, Commands};
use notion_graphql::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let ctx = CommandContext::load(cli.config.as_deref(), cli.token.clone())?;

    match cli.command {
        Commands::Serve { port, host } => handle_serve(ctx, host, port),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Schema => handle_schema(ctx),
    }
}
