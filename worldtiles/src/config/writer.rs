//! INI serialization: `ConfigFile` → commented INI string.

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to the commented INI text written to `config.ini`.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[render]
; Raster size in pixels. World maps are 2:1 (e.g. 8192 x 4096 or 16384 x 8192).
width = {}
height = {}
; Dots per inch passed to the renderer. Does not affect slicing.
dpi = {}

[tiles]
; Tile edge length in pixels. Edge strips smaller than a tile are dropped.
size = {}
; Root directory; each map is written to <export_dir>/<name>/
export_dir = {}
; Write tiles on all CPU cores
parallel = {}

[logging]
directory = {}
file = {}
"#,
        config.render.width,
        config.render.height,
        config.render.dpi,
        config.tiles.size,
        config.tiles.export_dir.to_string_lossy(),
        config.tiles.parallel,
        config.logging.directory.to_string_lossy(),
        config.logging.file,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ini::Ini;

    #[test]
    fn test_output_parses_back() {
        let mut config = ConfigFile::default();
        config.tiles.size = 2048;
        config.tiles.parallel = true;

        let text = to_config_string(&config);
        let parsed = super::super::parser::parse_ini(&Ini::load_from_str(&text).unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
