//! RoomComfort service binary
//!
//! ```bash
//! COMFORT_ADDR=127.0.0.1:3000 RUST_LOG=debug cargo run -p comfort-service
//! ```

use comfort_service::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env()?;
    let room = settings.load_room()?;
    let state = AppState::new(room)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(settings.addr).await?;
    log::info!("RoomComfort listening on {}", settings.addr);

    axum::serve(listener, app).await?;
    Ok(())
}
