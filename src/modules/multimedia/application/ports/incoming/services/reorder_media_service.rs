use async_trait::async_trait;
use tracing::{debug, info};

use crate::multimedia::application::{
    domain::policies::ordering_policy::{plan_shift, validate_target_position},
    ports::{
        incoming::use_cases::{ReorderMediaCommand, ReorderMediaError, ReorderMediaUseCase},
        outgoing::db::{PositionStore, PositionTxn},
    },
};

pub struct ReorderMediaService<S>
where
    S: PositionStore,
{
    store: S,
}

impl<S> ReorderMediaService<S>
where
    S: PositionStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns `false` when the item already sits at the target.
    async fn move_item(
        txn: &mut S::Txn,
        command: ReorderMediaCommand,
    ) -> Result<bool, ReorderMediaError> {
        let ReorderMediaCommand {
            parent,
            media_id,
            new_position,
        } = command;

        txn.lock_parent(parent).await?;

        let current = txn
            .current_position(parent, media_id)
            .await?
            .ok_or(ReorderMediaError::AttachmentNotFound)?;
        let max = txn.max_position(parent).await?.unwrap_or(current);
        validate_target_position(new_position, max)?;

        let Some(shift) = plan_shift(current, new_position) else {
            return Ok(false);
        };
        txn.shift_positions(parent, shift).await?;
        txn.set_position(parent, media_id, new_position).await?;
        Ok(true)
    }
}

#[async_trait]
impl<S> ReorderMediaUseCase for ReorderMediaService<S>
where
    S: PositionStore,
{
    async fn execute(&self, command: ReorderMediaCommand) -> Result<(), ReorderMediaError> {
        let mut txn = self.store.begin().await?;
        let moved = match Self::move_item(&mut txn, command).await {
            Ok(moved) => moved,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(e);
            }
        };
        txn.commit().await?;

        if moved {
            info!(
                parent = %command.parent,
                media_id = command.media_id,
                position = command.new_position,
                "Media reordered"
            );
        } else {
            debug!(parent = %command.parent, media_id = command.media_id, "Reorder was a no-op");
        }
        Ok(())
    }
}
