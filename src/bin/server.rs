use trivia_api::db;
use trivia_api::server::run_server;
use trivia_api::settings;
use trivia_api::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let settings = settings::load()?;
    let pool = db::establish_connection(&settings.db_path).await?;
    db::run_migrations(&pool).await?;
    run_server(pool, &settings).await
}
