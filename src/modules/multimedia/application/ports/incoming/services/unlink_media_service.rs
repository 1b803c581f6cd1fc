use async_trait::async_trait;
use tracing::{debug, info};

use crate::multimedia::application::{
    domain::entities::ParentRef,
    ports::{
        incoming::use_cases::{UnlinkMediaError, UnlinkMediaUseCase},
        outgoing::db::{PositionStore, PositionStoreError, PositionTxn},
    },
};

pub struct UnlinkMediaService<S>
where
    S: PositionStore,
{
    store: S,
}

impl<S> UnlinkMediaService<S>
where
    S: PositionStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    async fn unlink(
        txn: &mut S::Txn,
        parent: ParentRef,
        media_id: i32,
    ) -> Result<u64, PositionStoreError> {
        txn.lock_parent(parent).await?;
        let deleted = txn.delete_attachment(parent, media_id).await?;
        txn.clear_cover_if(parent, media_id).await?;
        Ok(deleted)
    }
}

#[async_trait]
impl<S> UnlinkMediaUseCase for UnlinkMediaService<S>
where
    S: PositionStore,
{
    async fn execute(&self, parent: ParentRef, media_id: i32) -> Result<(), UnlinkMediaError> {
        let mut txn = self.store.begin().await?;
        let deleted = match Self::unlink(&mut txn, parent, media_id).await {
            Ok(deleted) => deleted,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(e.into());
            }
        };
        txn.commit().await?;

        if deleted == 0 {
            debug!(%parent, media_id, "Unlink of media that was not attached");
        } else {
            info!(%parent, media_id, "Media unlinked");
        }
        Ok(())
    }
}
