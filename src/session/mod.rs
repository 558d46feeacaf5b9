/// Access-token cache and refresh
pub mod token;

pub use token::TokenStore;
