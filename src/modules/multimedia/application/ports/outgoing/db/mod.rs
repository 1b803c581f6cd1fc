mod media_query;
mod parent_repository;
mod position_store;

pub use media_query::{MediaQuery, MediaQueryError};
pub use parent_repository::{ParentRepository, ParentRepositoryError};
pub use position_store::{PositionStore, PositionStoreError, PositionTxn};
