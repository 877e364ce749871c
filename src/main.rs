#[tokio::main]
async fn main() {
    let _ = app::run().await;
}

mod api;
mod app;
mod auth;
mod dto;
mod error;
mod models;
mod repositories;
mod services;
mod telemetry;
mod usecases;
