//! CLI command implementations

mod check;
mod session;

pub use check::check;
pub use session::session;
