use async_trait::async_trait;
use tracing::info;

use crate::multimedia::application::{
    domain::{
        entities::{AttachmentPosition, ParentRef},
        policies::ordering_policy::dedup_order,
    },
    ports::{
        incoming::use_cases::{AttachMediaCommand, AttachMediaError, AttachMediaUseCase},
        outgoing::db::{PositionStore, PositionStoreError, PositionTxn},
    },
};

pub struct AttachMediaService<S>
where
    S: PositionStore,
{
    store: S,
}

impl<S> AttachMediaService<S>
where
    S: PositionStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    async fn append(
        txn: &mut S::Txn,
        parent: ParentRef,
        media_ids: &[i32],
    ) -> Result<Vec<AttachmentPosition>, PositionStoreError> {
        txn.lock_parent(parent).await?;

        // An already attached item is moved to the end.
        let mut next = txn.next_position(parent).await?;
        let mut assigned = Vec::with_capacity(media_ids.len());
        for &media_id in media_ids {
            txn.upsert_position(parent, media_id, next).await?;
            assigned.push(AttachmentPosition {
                media_id,
                position: next,
            });
            next += 1;
        }
        Ok(assigned)
    }
}

#[async_trait]
impl<S> AttachMediaUseCase for AttachMediaService<S>
where
    S: PositionStore,
{
    async fn execute(
        &self,
        command: AttachMediaCommand,
    ) -> Result<Vec<AttachmentPosition>, AttachMediaError> {
        let media_ids = dedup_order(&command.media_ids);
        if media_ids.is_empty() {
            return Err(AttachMediaError::EmptySelection);
        }

        let mut txn = self.store.begin().await?;
        let assigned = match Self::append(&mut txn, command.parent, &media_ids).await {
            Ok(assigned) => assigned,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(e.into());
            }
        };
        txn.commit().await?;

        info!(parent = %command.parent, count = assigned.len(), "Media attached");
        Ok(assigned)
    }
}
