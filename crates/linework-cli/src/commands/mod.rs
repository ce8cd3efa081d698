//! Command implementations.

pub mod create;
pub mod extract;
pub mod setup;
pub mod update;
pub mod validate;

pub use self::create::execute_create;
pub use self::extract::execute_extract;
pub use self::setup::execute_setup;
pub use self::update::execute_update;
pub use self::validate::execute_validate;
