mod media_query_postgres;
mod parent_repository_postgres;
mod position_store_postgres;

pub use media_query_postgres::MediaQueryPostgres;
pub use parent_repository_postgres::ParentRepositoryPostgres;
pub use position_store_postgres::{PositionStorePostgres, PositionTxnPostgres};
