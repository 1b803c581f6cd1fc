use async_trait::async_trait;

use crate::multimedia::application::{
    domain::entities::ParentRef,
    ports::{
        incoming::use_cases::{NextPositionError, NextPositionUseCase},
        outgoing::db::PositionStore,
    },
};

pub struct NextPositionService<S>
where
    S: PositionStore,
{
    store: S,
}

impl<S> NextPositionService<S>
where
    S: PositionStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> NextPositionUseCase for NextPositionService<S>
where
    S: PositionStore,
{
    async fn execute(&self, parent: ParentRef) -> Result<i32, NextPositionError> {
        Ok(self.store.next_position(parent).await?)
    }
}
