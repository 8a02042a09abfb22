//! HTTP 接入层

mod extract;
mod health;
mod middleware;
mod oauth2;
mod routes;
mod state;

pub use extract::{AppJson, AppPath, AppQuery};
pub use middleware::{AUTH_TOKEN_HEADER, AuthUser, auth_middleware};
pub use oauth2::{OAuth2Principal, OAuth2SuccessHandler};
pub use routes::router;
pub use state::AppState;
