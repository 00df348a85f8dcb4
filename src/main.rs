use greenmind::{config, dataset, routes, state};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");

    let loader = dataset::DatasetLoader::new(&config.catalog_path, &config.faq_path);
    let dataset = match loader.load().await {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!(error = %e, "cannot start without the dataset");
            std::process::exit(1);
        }
    };

    let state = state::AppState::new(dataset, config.session_idle_ttl, config.cookie_secure);

    let app = routes::app(state, config.website_dir.clone());
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "greenmind listening");
    axum::serve(listener, app).await.expect("server failed");
}
