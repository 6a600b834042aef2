use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement,
};

use crate::Migrator;

#[test]
fn migration_names_sort_in_application_order() {
    let names: Vec<String> = Migrator::migrations()
        .iter()
        .map(|m| m.name().to_string())
        .collect();

    let mut sorted = names.clone();
    sorted.sort();
    sorted.dedup();

    assert_eq!(names, sorted, "migration names must be unique and ordered");
}

#[test]
fn migration_names_follow_timestamp_convention() {
    for migration in Migrator::migrations() {
        let name = migration.name().to_string();
        let bytes = name.as_bytes();

        assert!(
            name.starts_with('m') && bytes.len() > 17,
            "unexpected migration name: {name}"
        );
        assert!(
            bytes[1..9].iter().all(|b| b.is_ascii_digit())
                && bytes[9] == b'_'
                && bytes[10..16].iter().all(|b| b.is_ascii_digit())
                && bytes[16] == b'_',
            "migration name is not timestamp-prefixed: {name}"
        );
    }
}

// Database tests share one live schema and must not interleave.
fn db_guard() -> std::sync::MutexGuard<'static, ()> {
    static GUARD: std::sync::Mutex<()> = std::sync::Mutex::new(());
    GUARD.lock().unwrap_or_else(|e| e.into_inner())
}

async fn connect() -> Option<DatabaseConnection> {
    let url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("TEST_DATABASE_URL not set, skipping database test");
            return None;
        }
    };

    let db = Database::connect(url)
        .await
        .expect("Failed to connect to test database");
    Some(db)
}

async fn query_rows(db: &DatabaseConnection, sql: &str) -> Vec<sea_orm_migration::sea_orm::QueryResult> {
    db.query_all(Statement::from_string(DbBackend::Postgres, sql))
        .await
        .expect("Failed to query schema catalog")
}

/// Structural snapshot of the public schema: columns with nullability,
/// foreign keys with their referential actions, and indexes. The runner's
/// own bookkeeping table is excluded.
async fn schema_snapshot(db: &DatabaseConnection) -> Vec<String> {
    let mut snapshot = Vec::new();

    let columns = query_rows(
        db,
        "SELECT table_name, column_name, data_type, is_nullable
         FROM information_schema.columns
         WHERE table_schema = 'public' AND table_name <> 'seaql_migrations'
         ORDER BY table_name, column_name",
    )
    .await;
    for row in columns {
        let table: String = row.try_get("", "table_name").unwrap();
        let column: String = row.try_get("", "column_name").unwrap();
        let data_type: String = row.try_get("", "data_type").unwrap();
        let nullable: String = row.try_get("", "is_nullable").unwrap();
        snapshot.push(format!("column {table}.{column} {data_type} {nullable}"));
    }

    let foreign_keys = query_rows(
        db,
        "SELECT tc.table_name, kcu.column_name, rc.update_rule, rc.delete_rule
         FROM information_schema.table_constraints tc
         JOIN information_schema.key_column_usage kcu
           ON kcu.constraint_name = tc.constraint_name
          AND kcu.table_schema = tc.table_schema
         JOIN information_schema.referential_constraints rc
           ON rc.constraint_name = tc.constraint_name
          AND rc.constraint_schema = tc.table_schema
         WHERE tc.constraint_type = 'FOREIGN KEY' AND tc.table_schema = 'public'
         ORDER BY tc.table_name, kcu.column_name",
    )
    .await;
    for row in foreign_keys {
        let table: String = row.try_get("", "table_name").unwrap();
        let column: String = row.try_get("", "column_name").unwrap();
        let update_rule: String = row.try_get("", "update_rule").unwrap();
        let delete_rule: String = row.try_get("", "delete_rule").unwrap();
        snapshot.push(format!(
            "foreign key {table}.{column} on update {update_rule} on delete {delete_rule}"
        ));
    }

    let indexes = query_rows(
        db,
        "SELECT tablename, indexname
         FROM pg_indexes
         WHERE schemaname = 'public' AND tablename <> 'seaql_migrations'
         ORDER BY tablename, indexname",
    )
    .await;
    for row in indexes {
        let table: String = row.try_get("", "tablename").unwrap();
        let index: String = row.try_get("", "indexname").unwrap();
        snapshot.push(format!("index {table}.{index}"));
    }

    snapshot
}

async fn column_entry(db: &DatabaseConnection, table: &str, column: &str) -> Option<String> {
    schema_snapshot(db)
        .await
        .into_iter()
        .find(|entry| entry.starts_with(&format!("column {table}.{column} ")))
}

async fn foreign_key_entry(db: &DatabaseConnection, table: &str, column: &str) -> Option<String> {
    schema_snapshot(db)
        .await
        .into_iter()
        .find(|entry| entry.starts_with(&format!("foreign key {table}.{column} ")))
}

async fn has_index(db: &DatabaseConnection, table: &str, index: &str) -> bool {
    schema_snapshot(db)
        .await
        .contains(&format!("index {table}.{index}"))
}

async fn assert_unit_effects(db: &DatabaseConnection, name: &str) {
    match name {
        "m20250605_012105_add_health_unit_to_professionals" => {
            assert_eq!(
                column_entry(db, "professionals", "health_unit_id").await.as_deref(),
                Some("column professionals.health_unit_id integer YES"),
            );
            assert_eq!(
                foreign_key_entry(db, "professionals", "health_unit_id").await.as_deref(),
                Some("foreign key professionals.health_unit_id on update CASCADE on delete SET NULL"),
            );
        }
        "m20250712_143000_add_photo_url_to_medications" => {
            assert_eq!(
                column_entry(db, "medications", "photo_url").await.as_deref(),
                Some("column medications.photo_url character varying YES"),
            );
        }
        "m20250712_143822_add_photo_url_to_health_units" => {
            assert_eq!(
                column_entry(db, "health_units", "photo_url").await.as_deref(),
                Some("column health_units.photo_url character varying YES"),
            );
        }
        "m20251015_090500_add_appointment_and_referral_links" => {
            assert_eq!(
                column_entry(db, "referrals", "appointment_id").await.as_deref(),
                Some("column referrals.appointment_id integer YES"),
            );
            assert_eq!(
                column_entry(db, "medical_records", "referral_id").await.as_deref(),
                Some("column medical_records.referral_id integer YES"),
            );
            assert_eq!(
                foreign_key_entry(db, "medical_records", "referral_id").await.as_deref(),
                Some("foreign key medical_records.referral_id on update CASCADE on delete SET NULL"),
            );
        }
        "m20251104_083000_add_health_unit_to_users" => {
            assert_eq!(
                column_entry(db, "users", "health_unit_id").await.as_deref(),
                Some("column users.health_unit_id integer YES"),
            );
            assert!(has_index(db, "users", "idx-users-health-unit").await);
        }
        _ => {}
    }
}

#[async_std::test]
async fn history_round_trips_unit_by_unit() {
    let _guard = db_guard();
    let Some(db) = connect().await else { return };

    Migrator::reset(&db).await.expect("Failed to reset schema");

    let names: Vec<String> = Migrator::migrations()
        .iter()
        .map(|m| m.name().to_string())
        .collect();

    for name in &names {
        let before = schema_snapshot(&db).await;

        Migrator::up(&db, Some(1)).await.expect("Failed to apply migration");
        assert_unit_effects(&db, name).await;

        Migrator::down(&db, Some(1)).await.expect("Failed to revert migration");
        let reverted = schema_snapshot(&db).await;
        assert_eq!(before, reverted, "{name} did not revert to the prior schema");

        Migrator::up(&db, Some(1)).await.expect("Failed to re-apply migration");
    }

    // A removed link leaves no trace: after reverting the users unit the
    // index is gone along with the column.
    Migrator::down(&db, Some(1)).await.expect("Failed to revert migration");
    assert!(column_entry(&db, "users", "health_unit_id").await.is_none());
    assert!(!has_index(&db, "users", "idx-users-health-unit").await);
    Migrator::up(&db, Some(1)).await.expect("Failed to re-apply migration");

    Migrator::reset(&db).await.expect("Failed to reset schema");
    assert!(
        schema_snapshot(&db).await.is_empty(),
        "reverting the full history must leave an empty schema"
    );
}

#[async_std::test]
async fn reapply_and_stray_revert_are_rejected() {
    let _guard = db_guard();
    let Some(db) = connect().await else { return };

    Migrator::refresh(&db).await.expect("Failed to refresh schema");

    let manager = SchemaManager::new(&db);
    let unit = crate::m20250712_143000_add_photo_url_to_medications::Migration;

    // Forward against an already-migrated schema: duplicate column.
    assert!(unit.up(&manager).await.is_err());

    // Inverse without a matching forward: the column is already gone.
    unit.down(&manager).await.expect("Failed to revert migration");
    assert!(unit.down(&manager).await.is_err());

    unit.up(&manager).await.expect("Failed to re-apply migration");

    Migrator::reset(&db).await.expect("Failed to reset schema");
}
