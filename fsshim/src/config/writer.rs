//! INI serialization logic for converting `ConfigFile` → INI string.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
///
/// Values are escaped so `rust-ini` reads back exactly what was written.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let mount_point = config
        .mount
        .mount_point
        .as_ref()
        .map(|p| escape_value(&path_to_string(p)))
        .unwrap_or_default();

    format!(
        r#"[mount]
; Directory where the virtual filesystem is mounted (leave empty if unset)
mount_point = {}
; Owner reported for the mount
uid = {}
gid = {}

[logging]
; Directory for log files (relative paths resolve against the working directory)
directory = {}
; Log file name, cleared at the start of each session
file = {}
"#,
        mount_point,
        config.mount.uid,
        config.mount.gid,
        escape_value(&path_to_string(&config.logging.directory)),
        escape_value(&config.logging.file),
    )
}

/// Escape characters the INI reader would otherwise unescape, unquote or
/// split on.
fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\\' | ';' | '#' | '"' | '\'' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_string() {
        let s = to_config_string(&ConfigFile::default());
        assert!(s.contains("[mount]"));
        assert!(s.contains("mount_point = \n"));
        assert!(s.contains("uid = 0"));
        assert!(s.contains("[logging]"));
        assert!(s.contains("file = fsshim.log"));
    }

    #[test]
    fn test_home_paths_are_abbreviated() {
        if let Some(home) = dirs::home_dir() {
            let mut config = ConfigFile::default();
            config.mount.mount_point = Some(home.join("repo"));
            let s = to_config_string(&config);
            assert!(s.contains("mount_point = ~/repo"));
        }
    }

    #[test]
    fn test_escape_value() {
        assert_eq!(escape_value("/mnt/repo"), "/mnt/repo");
        assert_eq!(escape_value(r"C:\mnt\repo"), r"C:\\mnt\\repo");
        assert_eq!(escape_value("a;b#c"), r"a\;b\#c");
        assert_eq!(escape_value("\"quoted'"), r#"\"quoted\'"#);
    }

    #[test]
    fn test_absolute_path_kept() {
        let mut config = ConfigFile::default();
        config.mount.mount_point = Some(PathBuf::from("/mnt/repo"));
        let s = to_config_string(&config);
        assert!(s.contains("mount_point = /mnt/repo"));
    }
}
