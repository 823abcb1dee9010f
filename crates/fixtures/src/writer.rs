//! Writing fixture files to disk.
//!
//! Both documents are rendered in memory first, then staged as temp files
//! in the output directory and renamed into place. A failure at any point
//! leaves no fixture file behind from this run.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{FixtureError, Result};
use crate::types::Fixtures;

pub const PRODUCTS_FILE: &str = "products.json";
pub const ADS_FILE: &str = "ads.json";

/// Render a value as JSON with sorted keys and 4-space indentation.
///
/// Going through `serde_json::Value` sorts object keys, since its map is
/// ordered.
pub fn render_json<T: Serialize>(file: &'static str, value: &T) -> Result<Vec<u8>> {
    let to_error = |source| FixtureError::Serialize { file, source };

    let value = serde_json::to_value(value).map_err(to_error)?;
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer).map_err(to_error)?;
    Ok(buf)
}

/// Write `products.json` and `ads.json` into `output_dir`.
pub fn write_fixtures(output_dir: &Path, fixtures: &Fixtures) -> Result<()> {
    let products = render_json(PRODUCTS_FILE, &fixtures.catalog)?;
    let ads = render_json(ADS_FILE, &fixtures.ads)?;

    let staged_products = stage(output_dir, &products)?;
    let staged_ads = stage(output_dir, &ads)?;

    let products_path = output_dir.join(PRODUCTS_FILE);
    persist(staged_products, &products_path)?;
    if let Err(e) = persist(staged_ads, &output_dir.join(ADS_FILE)) {
        warn!("Removing {} after failed write of {}", products_path.display(), ADS_FILE);
        let _ = fs::remove_file(&products_path);
        return Err(e);
    }

    debug!(
        "Wrote {} ({} bytes) and {} ({} bytes) to {}",
        PRODUCTS_FILE,
        products.len(),
        ADS_FILE,
        ads.len(),
        output_dir.display()
    );
    Ok(())
}

/// Write `contents` to a fresh temp file in `dir`. The file is deleted on drop
/// unless persisted.
fn stage(dir: &Path, contents: &[u8]) -> Result<NamedTempFile> {
    let io_error = |source| FixtureError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
    file.write_all(contents).map_err(io_error)?;
    file.as_file().sync_all().map_err(io_error)?;
    Ok(file)
}

fn persist(file: NamedTempFile, target: &Path) -> Result<()> {
    file.persist(target).map_err(|e| FixtureError::Io {
        path: target.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}
