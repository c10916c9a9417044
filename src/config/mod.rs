//! Config module.
//! Provides configuration types, default paths, XML loading, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel, RenameEntry};
pub use xml::{
    create_template_config, ensure_default_config_exists, load_config, load_config_from_path,
};

/// Defaults shared across submodules.
pub const SOURCE_DIR_DEFAULT: &str = "/srv/certs/inbox";
/// Destination defaults to a subdirectory of the source directory.
pub const DEST_SUBDIR_DEFAULT: &str = "certs";
/// Every destination name is forced to carry this extension unless configured.
pub const TARGET_EXT_DEFAULT: &str = "png";
