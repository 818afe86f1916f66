use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};

use recruitdesk::config::ConsoleConfig;
use recruitdesk::console::{ConsoleState, scheduler};
use recruitdesk::gateway::HttpGateway;
use recruitdesk::handlers;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = ConsoleConfig::from_env().map_err(|e| {
        log::error!("{e}");
        std::io::Error::other(e.to_string())
    })?;

    let gateway = HttpGateway::new(&config.gateway).map_err(|e| {
        log::error!("{e}");
        std::io::Error::other(e.to_string())
    })?;

    let state = web::Data::new(ConsoleState::new(Arc::new(gateway), config.flash_ttl));

    // Initial load of the user directory; a failure only fills its error slot
    state.refresh_users().await;

    scheduler::spawn_ticker(state.clone());

    log::info!("Starting console at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(handlers::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
