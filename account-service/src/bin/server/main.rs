use std::sync::Arc;

use account_service::config::Config;
use account_service::domain::credential::service::CredentialService;
use account_service::domain::user::service::ProfileService;
use account_service::inbound::http::middleware::AuthGate;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::PostgresUserRepository;
use auth::Authenticator;
use auth::PasswordHasher;
use auth::TokenCodec;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "account-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        store_timeout_ms = config.database.store_timeout_ms,
        access_token_ttl_minutes = config.auth.access_token_ttl_minutes,
        refresh_token_ttl_days = config.auth.refresh_token_ttl_days,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.store_timeout())
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let password_hasher = PasswordHasher::with_params(config.auth.password_hashing)?;
    let token_codec = TokenCodec::new(config.auth.token_codec_config());
    let authenticator = Arc::new(Authenticator::new(password_hasher, token_codec)?);
    tracing::info!(
        memory_kib = config.auth.password_hashing.memory_kib,
        iterations = config.auth.password_hashing.iterations,
        parallelism = config.auth.password_hashing.parallelism,
        "Password hashing configured"
    );

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));
    let store_timeout = config.database.store_timeout();

    let credential_service = Arc::new(CredentialService::new(
        Arc::clone(&user_repository),
        Arc::clone(&authenticator),
        store_timeout,
    ));
    let profile_service = Arc::new(ProfileService::new(user_repository, store_timeout));
    let auth_gate = Arc::new(AuthGate::new(authenticator));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(credential_service, profile_service, auth_gate);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");
    Ok(())
}
