use crate::cli::MoveCardArgs;
use crate::context::CliContext;
use crate::output;
use dragboard_core::{BoardError, LogEntry, Loggable};
use dragboard_domain::{DragResult, RawDragResult, Task, Transition};
use serde::Serialize;

#[derive(Serialize)]
struct MoveOutput<'a> {
    transition: &'a Transition<Task>,
    column_order: &'a [String],
    activity: &'a [LogEntry],
}

pub async fn handle_move_card(ctx: &mut CliContext, args: MoveCardArgs) -> anyhow::Result<()> {
    ctx.controller.set_ignore_drop(args.ignore_drop);
    let drag = DragResult::card_move(
        args.from_column,
        args.from_index,
        args.to_column,
        args.to_index,
    );
    apply_and_report(ctx, &drag).await
}

pub async fn handle_move_column(
    ctx: &mut CliContext,
    from_index: usize,
    to_index: usize,
) -> anyhow::Result<()> {
    let drag = DragResult::column_move(ctx.board_context_id(), from_index, to_index);
    apply_and_report(ctx, &drag).await
}

pub async fn handle_raw(ctx: &mut CliContext, json: &str) -> anyhow::Result<()> {
    let raw: RawDragResult =
        serde_json::from_str(json).map_err(|e| BoardError::Serialization(e.to_string()))?;
    let drag = raw.classify(ctx.board_context_id());
    apply_and_report(ctx, &drag).await
}

async fn apply_and_report(ctx: &mut CliContext, drag: &DragResult) -> anyhow::Result<()> {
    let transition = ctx.apply(drag).await?;
    tracing::info!("{}", transition.describe());

    output::output_success(MoveOutput {
        transition: &transition,
        column_order: ctx.state().column_order(),
        activity: ctx.controller.get_logs(),
    });
    Ok(())
}
