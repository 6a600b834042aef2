use secrecy::ExposeSecret;

use tracing::debug;

use sea_orm_migration::MigratorTrait;
use sea_orm_migration::sea_orm::Database;

use migration::Migrator;
use migration::settings::Settings;
use migration::utils;

#[async_std::main]
async fn main() {
    let settings = Settings::new().expect("Failed to initialize settings");

    utils::init_tracing("info");

    debug!("{:?}", settings);

    let conn_str = settings.database.connection_string();
    let conn = Database::connect(conn_str.expose_secret())
        .await
        .expect("Failed to connect to database");

    match std::env::args().nth(1).as_deref() {
        Some("up") | None => Migrator::up(&conn, None).await,
        Some("down") => Migrator::down(&conn, Some(1)).await,
        Some("status") => Migrator::status(&conn).await,
        Some(other) => panic!("Unknown command `{other}`, expected up, down or status"),
    }
    .expect("Migration failed");
}
