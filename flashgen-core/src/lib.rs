pub mod errors;
pub mod models;
pub mod parser;
pub mod session;

pub use errors::*;
pub use models::*;
pub use parser::*;
pub use session::*;
