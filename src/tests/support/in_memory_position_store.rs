use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::multimedia::application::domain::entities::{ParentKind, ParentRef};
use crate::multimedia::application::domain::policies::ordering_policy::PositionShift;
use crate::multimedia::application::ports::outgoing::db::{
    PositionStore, PositionStoreError, PositionTxn,
};

/// Primitive that fails once a transaction reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    Begin,
    Upsert,
    SetPosition,
    Shift,
    Delete,
    Commit,
}

#[derive(Debug, Clone, Default)]
struct StoreState {
    positions: BTreeMap<(ParentKind, i32, i32), i32>,
    covers: BTreeMap<(ParentKind, i32), i32>,
}

impl StoreState {
    fn rows(&self, parent: ParentRef) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.positions
            .iter()
            .filter(move |((kind, parent_id, _), _)| *kind == parent.kind && *parent_id == parent.id)
            .map(|((_, _, media_id), position)| (*media_id, *position))
    }

    fn ordered(&self, parent: ParentRef) -> Vec<(i32, i32)> {
        let mut rows: Vec<(i32, i32)> = self.rows(parent).collect();
        rows.sort_by_key(|(media_id, position)| (*position, *media_id));
        rows
    }
}

/// Join tables held in memory with serializable transactions.
///
/// `begin` waits for the previous transaction to finish, writes go to a
/// working copy and only `commit` publishes them.
#[derive(Clone, Default)]
pub struct InMemoryPositionStore {
    state: Arc<Mutex<StoreState>>,
    fail_at: Arc<StdMutex<Option<FailPoint>>>,
    begin_calls: Arc<AtomicUsize>,
    lock_calls: Arc<AtomicUsize>,
}

impl InMemoryPositionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `(media_id, position)` rows for a parent.
    pub fn with_attachments(self, parent: ParentRef, rows: &[(i32, i32)]) -> Self {
        {
            let mut state = self.state.try_lock().expect("store is not in use yet");
            for (media_id, position) in rows {
                state
                    .positions
                    .insert((parent.kind, parent.id, *media_id), *position);
            }
        }
        self
    }

    pub fn with_cover(self, parent: ParentRef, media_id: i32) -> Self {
        {
            let mut state = self.state.try_lock().expect("store is not in use yet");
            state.covers.insert((parent.kind, parent.id), media_id);
        }
        self
    }

    pub fn fail_on(&self, point: FailPoint) {
        *self.fail_at.lock().unwrap() = Some(point);
    }

    /// Committed `(media_id, position)` rows ordered by position.
    pub async fn positions(&self, parent: ParentRef) -> Vec<(i32, i32)> {
        self.state.lock().await.ordered(parent)
    }

    /// Committed media ids ordered by position.
    pub async fn order(&self, parent: ParentRef) -> Vec<i32> {
        self.positions(parent)
            .await
            .into_iter()
            .map(|(media_id, _)| media_id)
            .collect()
    }

    pub async fn cover(&self, parent: ParentRef) -> Option<i32> {
        self.state
            .lock()
            .await
            .covers
            .get(&(parent.kind, parent.id))
            .copied()
    }

    pub fn begin_calls(&self) -> usize {
        self.begin_calls.load(Ordering::SeqCst)
    }

    pub fn lock_calls(&self) -> usize {
        self.lock_calls.load(Ordering::SeqCst)
    }

    fn armed(&self) -> Option<FailPoint> {
        *self.fail_at.lock().unwrap()
    }
}

fn injected(point: FailPoint) -> PositionStoreError {
    PositionStoreError::DatabaseError(format!("injected failure at {point:?}"))
}

#[async_trait]
impl PositionStore for InMemoryPositionStore {
    type Txn = InMemoryPositionTxn;

    async fn begin(&self) -> Result<Self::Txn, PositionStoreError> {
        self.begin_calls.fetch_add(1, Ordering::SeqCst);
        let fail_at = self.armed();
        if fail_at == Some(FailPoint::Begin) {
            return Err(injected(FailPoint::Begin));
        }

        let committed = self.state.clone().lock_owned().await;
        let working = committed.clone();
        Ok(InMemoryPositionTxn {
            committed,
            working,
            fail_at,
            lock_calls: self.lock_calls.clone(),
        })
    }

    async fn next_position(&self, parent: ParentRef) -> Result<i32, PositionStoreError> {
        let state = self.state.lock().await;
        Ok(state.rows(parent).map(|(_, p)| p).max().map_or(0, |max| max + 1))
    }
}

pub struct InMemoryPositionTxn {
    committed: OwnedMutexGuard<StoreState>,
    working: StoreState,
    fail_at: Option<FailPoint>,
    lock_calls: Arc<AtomicUsize>,
}

impl InMemoryPositionTxn {
    fn check(&self, point: FailPoint) -> Result<(), PositionStoreError> {
        if self.fail_at == Some(point) {
            return Err(injected(point));
        }
        Ok(())
    }
}

#[async_trait]
impl PositionTxn for InMemoryPositionTxn {
    async fn lock_parent(&mut self, _parent: ParentRef) -> Result<(), PositionStoreError> {
        self.lock_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn next_position(&mut self, parent: ParentRef) -> Result<i32, PositionStoreError> {
        Ok(self
            .working
            .rows(parent)
            .map(|(_, p)| p)
            .max()
            .map_or(0, |max| max + 1))
    }

    async fn current_position(
        &mut self,
        parent: ParentRef,
        media_id: i32,
    ) -> Result<Option<i32>, PositionStoreError> {
        Ok(self
            .working
            .positions
            .get(&(parent.kind, parent.id, media_id))
            .copied())
    }

    async fn max_position(&mut self, parent: ParentRef) -> Result<Option<i32>, PositionStoreError> {
        Ok(self.working.rows(parent).map(|(_, p)| p).max())
    }

    async fn attached_media_ids(
        &mut self,
        parent: ParentRef,
    ) -> Result<Vec<i32>, PositionStoreError> {
        Ok(self
            .working
            .ordered(parent)
            .into_iter()
            .map(|(media_id, _)| media_id)
            .collect())
    }

    async fn upsert_position(
        &mut self,
        parent: ParentRef,
        media_id: i32,
        position: i32,
    ) -> Result<(), PositionStoreError> {
        self.check(FailPoint::Upsert)?;
        self.working
            .positions
            .insert((parent.kind, parent.id, media_id), position);
        Ok(())
    }

    async fn set_position(
        &mut self,
        parent: ParentRef,
        media_id: i32,
        position: i32,
    ) -> Result<u64, PositionStoreError> {
        self.check(FailPoint::SetPosition)?;
        match self
            .working
            .positions
            .get_mut(&(parent.kind, parent.id, media_id))
        {
            Some(current) => {
                *current = position;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn shift_positions(
        &mut self,
        parent: ParentRef,
        shift: PositionShift,
    ) -> Result<u64, PositionStoreError> {
        self.check(FailPoint::Shift)?;
        let mut affected = 0;
        for ((kind, parent_id, _), position) in self.working.positions.iter_mut() {
            if *kind == parent.kind
                && *parent_id == parent.id
                && (shift.from..=shift.to).contains(position)
            {
                *position += shift.delta;
                affected += 1;
            }
        }
        Ok(affected)
    }

    async fn delete_attachment(
        &mut self,
        parent: ParentRef,
        media_id: i32,
    ) -> Result<u64, PositionStoreError> {
        self.check(FailPoint::Delete)?;
        let removed = self
            .working
            .positions
            .remove(&(parent.kind, parent.id, media_id));
        Ok(u64::from(removed.is_some()))
    }

    async fn clear_cover_if(
        &mut self,
        parent: ParentRef,
        media_id: i32,
    ) -> Result<u64, PositionStoreError> {
        let key = (parent.kind, parent.id);
        if self.working.covers.get(&key) == Some(&media_id) {
            self.working.covers.remove(&key);
            return Ok(1);
        }
        Ok(0)
    }

    async fn commit(mut self) -> Result<(), PositionStoreError> {
        self.check(FailPoint::Commit)?;
        *self.committed = self.working;
        Ok(())
    }

    async fn rollback(self) -> Result<(), PositionStoreError> {
        Ok(())
    }
}
