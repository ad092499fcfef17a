pub mod docs;
pub mod error;
pub mod health;
pub mod items;
pub mod root;
pub mod session;

pub use error::ApiError;
