//! Output layout and file emission.
//!
//! ```text
//! {root}/{name}/full_map.png
//! {root}/{name}/{name}_{x}_{y}.png
//! ```
//!
//! Files are encoded to memory first, written to a `.tmp` sibling and then
//! renamed into place, so an interrupted run never leaves a truncated PNG
//! under a final name.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use super::error::{SliceError, SliceResult};
use super::grid::{TileCoord, TileGrid};

/// File name of the full-resolution reference copy.
pub const FULL_MAP_FILE_NAME: &str = "full_map.png";

/// File name of the tile at `coord` for the map `name`.
///
/// Indices are plain decimal with no zero padding.
pub fn tile_file_name(name: &str, coord: TileCoord) -> String {
    format!("{}_{}_{}.png", name, coord.x, coord.y)
}

/// Directory holding every file for the map `name`.
pub fn output_dir(root: &Path, name: &str) -> PathBuf {
    root.join(name)
}

/// Create `dir` and any missing parents. An existing directory is reused.
pub(crate) fn ensure_dir(dir: &Path) -> SliceResult<()> {
    fs::create_dir_all(dir).map_err(|source| SliceError::CreateDirectoryFailed {
        path: dir.to_path_buf(),
        source,
    })
}

/// Encode `image` as PNG and write it to `path`, replacing any existing file.
pub(crate) fn write_png(image: &RgbaImage, path: &Path) -> SliceResult<()> {
    let mut encoded = Cursor::new(Vec::new());
    image
        .write_to(&mut encoded, ImageFormat::Png)
        .map_err(|source| SliceError::EncodeFailed {
            path: path.to_path_buf(),
            source,
        })?;

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, encoded.into_inner()).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        SliceError::WriteFailed {
            path: temp_path.clone(),
            source,
        }
    })?;

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        SliceError::WriteFailed {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Tile files for `name` in `dir` whose coordinates fall outside `grid`.
///
/// These are left over from an earlier run with a smaller tile size. A
/// directory that cannot be listed yields nothing.
pub(crate) fn stale_tiles(dir: &Path, name: &str, grid: &TileGrid) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut stale: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|entry| {
            let file_name = entry.file_name();
            file_name
                .to_str()
                .and_then(|f| parse_tile_file_name(name, f))
                .is_some_and(|coord| !grid.contains(coord))
        })
        .map(|entry| entry.path())
        .collect();
    stale.sort();
    stale
}

/// Inverse of [`tile_file_name`]. Returns `None` for any other file.
fn parse_tile_file_name(name: &str, file_name: &str) -> Option<TileCoord> {
    let indices = file_name
        .strip_prefix(name)?
        .strip_prefix('_')?
        .strip_suffix(".png")?;
    let (x, y) = indices.split_once('_')?;
    Some(TileCoord::new(x.parse().ok()?, y.parse().ok()?))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().unwrap_or_default().to_os_string();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}
