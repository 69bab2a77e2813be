//! CLI command implementations

mod batch;
mod convert;
mod import;
mod info;
mod validate;

pub use batch::batch;
pub use convert::convert;
pub use import::import;
pub use info::info;
pub use validate::validate;
