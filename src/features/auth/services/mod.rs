mod auth_service;
mod token_service;
mod user_resolver;

pub use auth_service::AuthService;
pub use token_service::TokenService;
pub use user_resolver::UserResolver;
