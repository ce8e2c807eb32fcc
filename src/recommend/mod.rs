pub mod error;
pub mod extract;
pub mod handlers;
pub mod prompt;
pub mod service;
pub mod types;

pub use error::*;
pub use extract::first_json_object;
pub use handlers::*;
pub use prompt::build_prompt;
pub use service::Recommender;
pub use types::*;
