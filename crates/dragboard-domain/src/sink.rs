use crate::ChangePayload;
use async_trait::async_trait;
use dragboard_core::BoardResult;

/// Receives card moves for persistence.
///
/// Column reorders never reach a sink.
#[async_trait]
pub trait ChangeSink<C>: Send + Sync
where
    C: Send + Sync,
{
    async fn card_moved(&self, change: &ChangePayload<C>) -> BoardResult<()>;
}

/// Sink that accepts every move and stores nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

#[async_trait]
impl<C> ChangeSink<C> for DiscardSink
where
    C: Send + Sync,
{
    async fn card_moved(&self, _change: &ChangePayload<C>) -> BoardResult<()> {
        Ok(())
    }
}
