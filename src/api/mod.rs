pub mod handlers;
pub mod routes;

pub use routes::*;

use crate::search::SearchService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub search: SearchService,
}

impl AppState {
    pub fn new(search: SearchService) -> Self {
        Self { search }
    }
}
