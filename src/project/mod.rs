mod packages;
mod root;

pub use packages::*;
pub use root::find_project_root;
