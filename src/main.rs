use anyhow::Result;
use axum::http::{HeaderValue, Method, header};
use clap::{Parser, Subcommand};
use contact_api::email::EmailService;
use contact_api::routes::{AppState, router};
use sqlx::migrate::MigrateDatabase;
use tower_http::cors::CorsLayer;

/// contact-api - Contact form backend
#[derive(Parser)]
#[command(name = "contact-api")]
#[command(about = "Contact form submission and notification API", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = contact_api::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize tracing and logging
    contact_api::observability::init_observability(
        "contact-api",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        &config.environment,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Migrate => migrate_command(config).await,
        Commands::Reset => reset_command(config).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: contact_api::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting contact-api server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or(config.server.host);
    let port = port_override.unwrap_or(config.server.port);

    // Set up database connection pool
    let pool =
        contact_api::db::create_pool(&config.database.url, config.database.max_connections).await?;

    // The email service is constructed here and injected into the handlers;
    // missing credentials are reported per request, not at startup.
    let email = EmailService::new(&config.email)?;

    let state = AppState {
        pool,
        email,
        environment: config.environment.clone(),
    };

    let mut app = router(state);

    // Allow the configured browser origin for cross-origin form posts
    if let Some(origin) = &config.cors.client_origin {
        let origin = origin
            .parse::<HeaderValue>()
            .map_err(|e| anyhow::anyhow!("invalid cors.client_origin {origin:?}: {e}"))?;
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true),
        );
    }

    // Start server
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn migrate_command(config: contact_api::config::Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    // Create database if it doesn't exist
    if !sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Database does not exist, creating: {}", config.database.url);
        sqlx::Sqlite::create_database(&config.database.url).await?;
    }

    let pool = contact_api::db::create_pool(&config.database.url, 1).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn reset_command(config: contact_api::config::Config) -> Result<()> {
    tracing::info!("Resetting database...");

    // Drop database if it exists
    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
        tracing::info!("Database dropped successfully");
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    // Run migrate command to recreate and apply migrations
    migrate_command(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}
