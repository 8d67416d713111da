//! INI parsing: `Ini` → `ConfigFile`.
//!
//! The single place where INI key names are mapped to struct fields.

use std::path::PathBuf;

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [render] section
    if let Some(section) = ini.section(Some("render")) {
        if let Some(v) = section.get("width") {
            config.render.width = parse_positive("render", "width", v)?;
        }
        if let Some(v) = section.get("height") {
            config.render.height = parse_positive("render", "height", v)?;
        }
        if let Some(v) = section.get("dpi") {
            config.render.dpi = parse_positive("render", "dpi", v)?;
        }
    }

    // [tiles] section
    if let Some(section) = ini.section(Some("tiles")) {
        if let Some(v) = section.get("size") {
            config.tiles.size = parse_positive("tiles", "size", v)?;
        }
        if let Some(v) = section.get("export_dir") {
            let v = v.trim();
            if !v.is_empty() {
                config.tiles.export_dir = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("parallel") {
            config.tiles.parallel = parse_bool("tiles", "parallel", v)?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
    }

    Ok(config)
}

fn parse_positive(section: &str, key: &str, value: &str) -> Result<u32, ConfigFileError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: "must be a positive integer".to_string(),
        }),
    }
}

fn parse_bool(section: &str, key: &str, value: &str) -> Result<bool, ConfigFileError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: "must be true or false".to_string(),
        }),
    }
}

/// Expand a leading `~` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<ConfigFile, ConfigFileError> {
        parse_ini(&Ini::load_from_str(text).unwrap())
    }

    #[test]
    fn test_empty_ini_gives_defaults() {
        assert_eq!(parse("").unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_overlays_values() {
        let config = parse(
            "[render]\nwidth = 16384\nheight = 8192\n\n[tiles]\nsize = 512\nexport_dir = out\nparallel = yes\n",
        )
        .unwrap();
        assert_eq!(config.render.width, 16384);
        assert_eq!(config.render.height, 8192);
        assert_eq!(config.render.dpi, 100);
        assert_eq!(config.tiles.size, 512);
        assert_eq!(config.tiles.export_dir, PathBuf::from("out"));
        assert!(config.tiles.parallel);
    }

    #[test]
    fn test_rejects_zero_tile_size() {
        let err = parse("[tiles]\nsize = 0\n").unwrap_err();
        assert!(err.to_string().contains("tiles.size"));
    }

    #[test]
    fn test_rejects_negative_width() {
        let err = parse("[render]\nwidth = -5\n").unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidValue { .. }));
    }

    #[test]
    fn test_rejects_bad_bool() {
        assert!(parse("[tiles]\nparallel = maybe\n").is_err());
    }

    #[test]
    fn test_blank_paths_keep_defaults() {
        let config = parse("[tiles]\nexport_dir =\n[logging]\nfile =\n").unwrap();
        assert_eq!(config.tiles.export_dir, PathBuf::from("exported_maps"));
        assert_eq!(config.logging.file, "worldtiles.log");
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/maps"), home.join("maps"));
        }
        assert_eq!(expand_tilde("/abs/maps"), PathBuf::from("/abs/maps"));
    }
}
