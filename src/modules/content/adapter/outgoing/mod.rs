mod content_query_postgres;
mod content_repository_postgres;
mod row_mapping;
pub mod sea_orm_entity;

pub use content_query_postgres::ContentQueryPostgres;
pub use content_repository_postgres::ContentRepositoryPostgres;
