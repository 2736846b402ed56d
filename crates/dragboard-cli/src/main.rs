mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("DRAGBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        output::output_error(&e.to_string());
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            "dragboard",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    let file_path = cli
        .file
        .ok_or_else(|| anyhow::anyhow!("--file is required (or set DRAGBOARD_FILE)"))?;

    match cli.command {
        Commands::Init { columns, force } => {
            handlers::board::handle_init(&file_path, columns, force).await?;
        }
        Commands::Journal => {
            handlers::board::handle_journal(&file_path).await?;
        }
        Commands::Completions { .. } => {}
        cmd => {
            let mut ctx = CliContext::load(&file_path).await?;
            match cmd {
                Commands::Show => handlers::board::handle_show(&ctx),
                Commands::AddCard {
                    column,
                    title,
                    description,
                } => {
                    handlers::board::handle_add_card(&mut ctx, column, title, description).await?;
                }
                Commands::MoveCard(args) => {
                    handlers::drag::handle_move_card(&mut ctx, args).await?;
                }
                Commands::MoveColumn {
                    from_index,
                    to_index,
                } => {
                    handlers::drag::handle_move_column(&mut ctx, from_index, to_index).await?;
                }
                Commands::Drag { json } => {
                    handlers::drag::handle_raw(&mut ctx, &json).await?;
                }
                Commands::Init { .. } | Commands::Journal | Commands::Completions { .. } => {}
            }
        }
    }

    Ok(())
}
