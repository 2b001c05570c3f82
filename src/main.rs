use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use goal_keeper::adapters::http::{app_router, GoalHandlers};
use goal_keeper::adapters::postgres::{self, PostgresGoalStore};
use goal_keeper::adapters::seed;
use goal_keeper::adapters::storage::InMemoryGoalStore;
use goal_keeper::adapters::JwtIdentityResolver;
use goal_keeper::application::GoalLifecycleService;
use goal_keeper::config::{AppConfig, Environment};
use goal_keeper::ports::GoalStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let store: Arc<dyn GoalStore> = match config.database.url() {
        Some(url) => {
            let pool = postgres::create_pool(&config.database, url).await?;
            tracing::info!("Database connection pool created");
            if config.database.run_migrations {
                postgres::run_migrations(&pool).await?;
                tracing::info!("Database migrations applied");
            }
            Arc::new(PostgresGoalStore::new(pool))
        }
        None => {
            tracing::warn!("No database URL configured, goals are kept in memory");
            Arc::new(InMemoryGoalStore::new())
        }
    };

    let resolver = Arc::new(JwtIdentityResolver::new(&config.auth));
    let service = Arc::new(GoalLifecycleService::new(resolver, store));

    let seeded = seed::run_seed(&config.seed, &service).await?;
    if seeded > 0 {
        tracing::info!(seeded, "Startup fixtures applied");
    }

    let handlers = GoalHandlers::new(service)
        .with_forbidden_masked(config.server.mask_forbidden_as_not_found);
    let app = app_router(handlers, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Goal Keeper listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.server.environment != Environment::Development {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
