pub use sea_orm_migration::prelude::*;

pub mod settings;
pub mod utils;

mod m20250412_101500_create_users_table;
mod m20250412_102200_create_health_units_table;
mod m20250412_103014_create_professionals_table;
mod m20250419_143000_create_appointments_table;
mod m20250419_144512_create_referrals_table;
mod m20250426_091200_create_medical_records_table;
mod m20250426_092330_create_medications_table;
mod m20250605_012105_add_health_unit_to_professionals;
mod m20250712_143000_add_photo_url_to_medications;
mod m20250712_143822_add_photo_url_to_health_units;
mod m20251015_090500_add_appointment_and_referral_links;
mod m20251104_083000_add_health_unit_to_users;

#[cfg(test)]
mod tests;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250412_101500_create_users_table::Migration),
            Box::new(m20250412_102200_create_health_units_table::Migration),
            Box::new(m20250412_103014_create_professionals_table::Migration),
            Box::new(m20250419_143000_create_appointments_table::Migration),
            Box::new(m20250419_144512_create_referrals_table::Migration),
            Box::new(m20250426_091200_create_medical_records_table::Migration),
            Box::new(m20250426_092330_create_medications_table::Migration),
            Box::new(m20250605_012105_add_health_unit_to_professionals::Migration),
            Box::new(m20250712_143000_add_photo_url_to_medications::Migration),
            Box::new(m20250712_143822_add_photo_url_to_health_units::Migration),
            Box::new(m20251015_090500_add_appointment_and_referral_links::Migration),
            Box::new(m20251104_083000_add_health_unit_to_users::Migration),
        ]
    }
}
