pub mod errors;
pub mod handlers;
pub mod health_handlers;
pub mod meta_handlers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod routes;
pub mod state;

pub use errors::ApiError;
pub use openapi::ApiDoc;
pub use responses::*;
pub use routes::create_router;
pub use state::AppState;
