// Utils compartidos

pub mod constants;
pub mod errors;
pub mod storage;

pub use constants::*;
pub use errors::error_message;
pub use storage::{load_from_storage, remove_from_storage, save_to_storage};
