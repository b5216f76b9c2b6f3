use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    app::App,
    config::Config,
    environment::Environment,
    router::router,
    schedule::{scheduler::Scheduler, trigger::default_schedule},
};

pub async fn handle_serve_command(environment: Environment, config: Config) {
    let port = config.server.port;

    let app = App::new(config, environment);

    // Spawn the cron scheduler in the background; dispatch failures stay
    // inside their own tasks and never reach the server.
    let scheduler_app = app.clone();
    tokio::spawn(async move {
        Scheduler::new(scheduler_app, default_schedule()).run().await;
    });

    let router = router(app);
    start_server(router, port).await;
}

async fn start_server(router: Router, port: u16) {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await.unwrap();

    info!("🌐 Server starting on http://{}", addr);
    info!("   Health endpoint: GET /health");
    axum::serve(listener, router).await.unwrap();
}
