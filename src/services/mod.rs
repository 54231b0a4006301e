pub mod backup;
pub mod env_file;
pub mod install_state;

pub use backup::{backup, backup_if_present};
pub use install_state::InstallState;
