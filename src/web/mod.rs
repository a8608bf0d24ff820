//! Web API module for zencloud.
//!
//! REST API for uploading, listing, downloading and deleting files.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::{create_health_router, create_router};
pub use server::WebServer;
