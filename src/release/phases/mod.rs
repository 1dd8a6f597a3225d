//! Pipeline phases that drive external tools.

mod executable;
mod installer;

pub use executable::build_executable;
pub use installer::build_installer;
