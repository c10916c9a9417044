//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - Creates a commented template if missing (unless CERT_MOVE_CONFIG is set).
//!
//! The rename table is carried as repeated `<rename><from>..</from><to>..</to></rename>`
//! elements; when none are declared, the built-in certificate table applies.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel, RenameEntry};
use super::{DEST_SUBDIR_DEFAULT, SOURCE_DIR_DEFAULT, TARGET_EXT_DEFAULT};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    source_dir: Option<String>,
    dest_dir: Option<String>,
    target_ext: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
    #[serde(rename = "rename", default)]
    renames: Vec<XmlRename>,
}

#[derive(Debug, Deserialize)]
struct XmlRename {
    from: String,
    to: String,
}

fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    if let Some(s) = parsed.source_dir.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.source_dir = PathBuf::from(trimmed);
            // keep the default nested layout unless dest_dir is set explicitly
            cfg.dest_dir = cfg.source_dir.join(DEST_SUBDIR_DEFAULT);
        }
    }
    if let Some(s) = parsed.dest_dir.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.dest_dir = PathBuf::from(trimmed);
        }
    }
    if let Some(s) = parsed.target_ext.as_deref() {
        let trimmed = s.trim().trim_start_matches('.');
        if !trimmed.is_empty() {
            cfg.target_ext = trimmed.to_ascii_lowercase();
        }
    }
    if let Some(s) = parsed.log_level.as_deref() {
        if let Ok(level) = s.trim().parse::<LogLevel>() {
            cfg.log_level = level;
        }
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }
    if !parsed.renames.is_empty() {
        cfg.renames = parsed
            .renames
            .into_iter()
            .map(|r| RenameEntry::new(r.from.trim(), r.to.trim()))
            .collect();
    }

    cfg
}

/// Load a Config from a specific XML file path (quick_xml).
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(xml_to_config(parsed))
}

/// Load the config from CERT_MOVE_CONFIG (if set) or the platform default path.
/// Returns Ok(None) when no config file exists; parse failures are hard errors.
pub fn load_config() -> Result<Option<Config>> {
    let path = match env::var_os("CERT_MOVE_CONFIG").map(PathBuf::from) {
        Some(p) => p,
        None => match default_config_path() {
            Some(p) => p,
            None => return Ok(None),
        },
    };

    if !path.exists() {
        return Ok(None);
    }

    debug!(path = %path.display(), "loading config");
    load_config_from_path(&path).map(Some)
}

/// Create default template config file and parent directory (best-effort permissions).
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        anyhow::bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = fs::set_permissions(parent, fs::Permissions::from_mode(0o700));
        }
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "/path/to/cert_move.log".into());

    let content = format!(
        "<!--\n  cert_move configuration (XML)\n\n  Fields:\n    source_dir  -> directory the certificate images are picked up from\n    dest_dir    -> directory the renamed images land in (created if missing)\n    target_ext  -> extension forced onto every destination name\n    log_level   -> quiet | normal | info | debug\n    log_file    -> path to log file (optional; stdout/stderr still used)\n    rename      -> repeated mapping entries, processed in declaration order\n\n  Notes:\n    - CLI flags override XML values.\n    - When no <rename> entries are declared, the built-in certificate table is used.\n    - Example entry:\n        <rename>\n          <from>1min.png</from>\n          <to>typing_37wpm_2024.png</to>\n        </rename>\n-->\n<config>\n  <source_dir>{}</source_dir>\n  <dest_dir>{}/{}</dest_dir>\n  <target_ext>{}</target_ext>\n  <log_level>normal</log_level>\n  <log_file>{}</log_file>\n</config>\n",
        SOURCE_DIR_DEFAULT, SOURCE_DIR_DEFAULT, DEST_SUBDIR_DEFAULT, TARGET_EXT_DEFAULT, suggested_log
    );

    fs::write(path, content)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }

    info!("Created template config at {}", path.display());
    Ok(())
}

/// Create default config if CERT_MOVE_CONFIG not set; return created path so
/// the CLI can inform the user.
pub fn ensure_default_config_exists() -> Option<PathBuf> {
    if env::var_os("CERT_MOVE_CONFIG").is_some() {
        return None;
    }

    let cfg_path = default_config_path()?;
    if cfg_path.exists() {
        return None;
    }

    match create_template_config(&cfg_path) {
        Ok(()) => Some(cfg_path),
        Err(e) => {
            eprintln!(
                "Failed to create template config at {}: {}",
                cfg_path.display(),
                e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let xml = r#"
            <config>
              <source_dir>/data/in</source_dir>
              <dest_dir>/data/out</dest_dir>
              <target_ext>.PNG</target_ext>
              <log_level>debug</log_level>
              <rename><from>a.jpg</from><to>b.png</to></rename>
              <rename><from>c.png</from><to>d.png</to></rename>
            </config>
        "#;
        let parsed: XmlConfig = from_xml_str(xml).unwrap();
        let cfg = xml_to_config(parsed);
        assert_eq!(cfg.source_dir, PathBuf::from("/data/in"));
        assert_eq!(cfg.dest_dir, PathBuf::from("/data/out"));
        assert_eq!(cfg.target_ext, "png");
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.renames.len(), 2);
        assert_eq!(cfg.renames[0], RenameEntry::new("a.jpg", "b.png"));
    }

    #[test]
    fn source_only_derives_nested_dest() {
        let xml = "<config><source_dir>/data/in</source_dir></config>";
        let parsed: XmlConfig = from_xml_str(xml).unwrap();
        let cfg = xml_to_config(parsed);
        assert_eq!(cfg.dest_dir, PathBuf::from("/data/in").join("certs"));
    }

    #[test]
    fn empty_rename_table_falls_back_to_builtin() {
        let xml = "<config><source_dir>/data/in</source_dir></config>";
        let parsed: XmlConfig = from_xml_str(xml).unwrap();
        let cfg = xml_to_config(parsed);
        assert!(!cfg.renames.is_empty());
        assert_eq!(cfg.renames[0].from, "1min.png");
    }
}
