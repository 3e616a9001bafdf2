mod model;
mod notification;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

#[rustfmt::skip]
pub use {
    notification::SqliteNotificationRepo,
};

/// Open the database and create the `notifications` table if missing.
pub async fn connect(url: &str) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(url.to_owned());
    options.sqlx_logging(false);
    if url.contains(":memory:") {
        // in-memory databases are per connection
        options.max_connections(1).min_connections(1);
    }
    let db = Database::connect(options).await?;

    let backend = db.get_database_backend();
    let mut create = Schema::new(backend).create_table_from_entity(model::Entity);
    create.if_not_exists();
    db.execute(backend.build(&create)).await?;
    Ok(db)
}
