use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = credsync::config::Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        cred_path = %cfg.cred_path.display(),
        user_id = cfg.user_id,
        category = %cfg.category,
        config_key = %cfg.config_key
    );

    let blob = credsync::service::credential_loader::load_file(&cfg.cred_path)?;
    info!(
        path = %cfg.cred_path.display(),
        chars = blob.chars().count(),
        "credential file loaded"
    );

    let pool = credsync::db::connect(&cfg.database_url).await?;
    let storage = credsync::db::SettingsStorage::new(pool);

    let affected = storage
        .set_config_value(&cfg.settings_key(), &blob)
        .await?;
    info!(rows = affected, "settings row updated");

    let rows = storage.category_report(cfg.user_id, &cfg.category).await?;
    print!("{}", credsync::service::report::render(&rows));

    storage.pool().close().await;
    Ok(())
}
