use todo_server::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    todo_server::init_tracing();

    let config = Config::from_env()?;
    todo_server::run_server(config).await
}
