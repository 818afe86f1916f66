use std::time::Duration;

use actix_web::web;
use chrono::Utc;

use super::ConsoleState;

/// Expire transient messages once a second.
pub fn spawn_ticker(state: web::Data<ConsoleState>) {
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        loop {
            interval.tick().await;
            state.tick(Utc::now()).await;
        }
    });
}
