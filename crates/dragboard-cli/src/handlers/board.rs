use crate::context::CliContext;
use crate::output;
use dragboard_core::{AppConfig, BoardError};
use dragboard_domain::{ColumnSpec, Positioned, Task};
use dragboard_persistence::{BoardFileStore, JournalSink};
use serde_json::json;

const DEFAULT_COLUMNS: [(&str, &str); 3] = [("todo", "To Do"), ("doing", "Doing"), ("done", "Done")];

pub async fn handle_init(
    file_path: &str,
    columns: Vec<(String, String)>,
    force: bool,
) -> anyhow::Result<()> {
    let store = BoardFileStore::new(file_path);
    if store.exists().await && !force {
        return Err(BoardError::Validation(format!(
            "{} already exists (use --force to overwrite)",
            file_path
        ))
        .into());
    }

    let columns: Vec<ColumnSpec<Task>> = if columns.is_empty() {
        DEFAULT_COLUMNS
            .iter()
            .map(|(key, title)| ColumnSpec::empty(*key, *title))
            .collect()
    } else {
        columns
            .into_iter()
            .map(|(key, title)| ColumnSpec::empty(key, title))
            .collect()
    };

    let state = dragboard_domain::BoardState::from_columns(columns.clone());
    state.validate()?;
    state.reject_column_key(AppConfig::load().effective_board_context_id())?;
    store.create(columns).await?;
    tracing::info!("Created board file: {}", file_path);

    output::output_success(json!({
        "file": file_path,
        "columns": state.column_order(),
    }));
    Ok(())
}

pub fn handle_show(ctx: &CliContext) {
    output::output_success(ctx.state().to_columns());
}

pub async fn handle_add_card(
    ctx: &mut CliContext,
    column: String,
    title: String,
    description: Option<String>,
) -> anyhow::Result<()> {
    let position = ctx
        .state()
        .cards(&column)
        .and_then(|cards| cards.last())
        .map(|last| last.position() + 1.0)
        .unwrap_or(0.0);

    let mut task = Task::new(title, position);
    task.update_description(description);

    let mut state = ctx.state().clone();
    let index = state.push_card(&column, task.clone())?;
    ctx.controller.replace_columns(state.into_columns());
    ctx.save().await?;
    tracing::info!("Added card {} to {}", task.id, column);

    output::output_success(json!({
        "column": column,
        "index": index,
        "card": task,
    }));
    Ok(())
}

pub async fn handle_journal(file_path: &str) -> anyhow::Result<()> {
    let entries = JournalSink::beside(file_path).read_entries().await?;
    output::output_list(entries);
    Ok(())
}
