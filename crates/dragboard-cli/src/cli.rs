use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dragboard")]
#[command(about = "Apply drag-and-drop moves to a kanban board file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to board file (or set DRAGBOARD_FILE env var)
    #[arg(short, long, value_name = "FILE", env = "DRAGBOARD_FILE", global = true)]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new board file
    Init {
        /// Column as KEY=TITLE; repeat for each column (default: todo, doing, done)
        #[arg(long = "column", value_name = "KEY=TITLE", value_parser = parse_column)]
        columns: Vec<(String, String)>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the board
    Show,
    /// Append a card to a column
    AddCard {
        #[arg(long)]
        column: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Drag a card to a column and index
    MoveCard(MoveCardArgs),
    /// Drag a column to a new position
    MoveColumn {
        #[arg(long)]
        from_index: usize,
        #[arg(long)]
        to_index: usize,
    },
    /// Apply a raw drag result, e.g. '{"source":{"columnId":"todo","index":0},"destination":null}'
    Drag {
        #[arg(long)]
        json: String,
    },
    /// List journaled card moves
    Journal,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct MoveCardArgs {
    #[arg(long)]
    pub from_column: String,
    #[arg(long)]
    pub from_index: usize,
    #[arg(long)]
    pub to_column: String,
    #[arg(long)]
    pub to_index: usize,
    /// Treat the drop as cancelled
    #[arg(long)]
    pub ignore_drop: bool,
}

fn parse_column(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((key, title)) if !key.trim().is_empty() => {
            let title = if title.trim().is_empty() { key } else { title };
            Ok((key.trim().to_string(), title.trim().to_string()))
        }
        _ => Err(format!("expected KEY=TITLE, got `{}`", value)),
    }
}
