use async_trait::async_trait;
use tracing::info;

use crate::multimedia::application::{
    domain::{entities::AttachmentPosition, policies::ordering_policy::validate_full_order},
    ports::{
        incoming::use_cases::{
            UpdatePositionsCommand, UpdatePositionsError, UpdatePositionsUseCase,
        },
        outgoing::db::{PositionStore, PositionTxn},
    },
};

pub struct UpdatePositionsService<S>
where
    S: PositionStore,
{
    store: S,
}

impl<S> UpdatePositionsService<S>
where
    S: PositionStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    async fn stamp(
        txn: &mut S::Txn,
        command: &UpdatePositionsCommand,
    ) -> Result<Vec<AttachmentPosition>, UpdatePositionsError> {
        let parent = command.parent;
        txn.lock_parent(parent).await?;

        let attached = txn.attached_media_ids(parent).await?;
        let order = validate_full_order(&command.ordered_media_ids, &attached)?;

        // Uniqueness is on (parent, media), so stamping in place cannot collide.
        let mut stamped = Vec::with_capacity(order.len());
        for (index, media_id) in order.into_iter().enumerate() {
            let position = i32::try_from(index).map_err(|_| {
                UpdatePositionsError::InvalidOrdering("too many media ids".to_string())
            })?;
            txn.set_position(parent, media_id, position).await?;
            stamped.push(AttachmentPosition { media_id, position });
        }
        Ok(stamped)
    }
}

#[async_trait]
impl<S> UpdatePositionsUseCase for UpdatePositionsService<S>
where
    S: PositionStore,
{
    async fn execute(
        &self,
        command: UpdatePositionsCommand,
    ) -> Result<Vec<AttachmentPosition>, UpdatePositionsError> {
        let mut txn = self.store.begin().await?;
        let stamped = match Self::stamp(&mut txn, &command).await {
            Ok(stamped) => stamped,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(e);
            }
        };
        txn.commit().await?;

        info!(parent = %command.parent, count = stamped.len(), "Media positions updated");
        Ok(stamped)
    }
}
