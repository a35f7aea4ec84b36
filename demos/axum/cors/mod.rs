pub mod middleware;

use reflect_cors_rs::{Cors, CorsOptions, Origin};
use std::sync::Arc;

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
}

pub fn build_state() -> AppState {
    let cors = Cors::new(CorsOptions {
        origin: Origin::list(["gehenna.sh", "saltyaom.com"]),
        ..CorsOptions::default()
    });

    AppState {
        cors: Arc::new(cors),
    }
}
