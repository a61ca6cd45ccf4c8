pub mod global_config;
pub mod participation;
pub mod project;
pub mod star_account;
pub mod symbol_guard;

pub use global_config::*;
pub use participation::*;
pub use project::*;
pub use star_account::*;
pub use symbol_guard::*;
