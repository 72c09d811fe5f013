pub use sea_orm_migration::prelude::*;

mod shared;

mod m20250601_000001_create_updated_at_function;
mod m20250601_000010_create_services_table;
mod m20250601_000020_create_hero_slides_table;
mod m20250601_000030_create_projects_table;
mod m20250601_000040_create_testimonials_table;
mod m20250601_000050_create_faqs_table;
mod m20250601_000060_create_service_features_table;
mod m20250601_000070_create_company_info_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_updated_at_function::Migration),
            Box::new(m20250601_000010_create_services_table::Migration),
            Box::new(m20250601_000020_create_hero_slides_table::Migration),
            Box::new(m20250601_000030_create_projects_table::Migration),
            Box::new(m20250601_000040_create_testimonials_table::Migration),
            Box::new(m20250601_000050_create_faqs_table::Migration),
            Box::new(m20250601_000060_create_service_features_table::Migration),
            Box::new(m20250601_000070_create_company_info_table::Migration),
        ]
    }
}
