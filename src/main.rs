use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todo_agenda::TodoStore;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let db_url =
        std::env::var("TODO_DATABASE_URL").unwrap_or_else(|_| "sqlite:todo.db".to_string());
    let store = match TodoStore::open(&db_url).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, url = %db_url, "failed to open database");
            std::process::exit(1);
        }
    };

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    todo_agenda::run(listener, store).await
}
