//! Server binary: open the store, ensure the schema, mount routes, serve.

use resourcify::{connect, ensure_schema, routes, AppState};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("resourcify=info".parse()?))
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:resourcify.db".into());
    let pool = connect(&database_url).await?;
    ensure_schema(&pool).await?;

    let state = AppState { pool };
    let app = routes::app(state).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind("0.0.0.0:8000").await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
