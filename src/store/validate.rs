use std::fs;
use std::path::Path;

use crate::reply::Reply;
use crate::store::error::StoreError;
use crate::store::name;

/// Check that every file name in `files` carries one of the allowed
/// `extensions` (compared without the leading dot, case-sensitive).
///
/// The first offending file is reported.
pub fn validate<P: AsRef<Path>>(files: &[P], extensions: &[&str]) -> Result<Reply, StoreError> {
    for file in files {
        let ext = name::get_extension(file.as_ref());
        if !extensions.contains(&ext.as_str()) {
            return Err(StoreError::ExtensionRejected(file.as_ref().to_path_buf()));
        }
    }

    Ok(Reply::success("files have the required extension"))
}

/// Check that the file at `path` weighs at most `max_kb` kilobytes.
pub fn size<P: AsRef<Path>>(path: P, max_kb: f64) -> Result<Reply, StoreError> {
    let p = path.as_ref();
    let weight_kb = fs::metadata(p)?.len() as f64 / 1024.0;

    if weight_kb > max_kb {
        return Err(StoreError::SizeExceeded(p.to_path_buf()));
    }

    Ok(Reply::success(format!(
        "the file '{}' meets the requested size",
        p.display()
    )))
}

/// Check that the image at `dir/name` has the pixel dimensions described by
/// `expected` (a `WIDTHxHEIGHT` string such as `100x100`).
pub fn image_size<P: AsRef<Path>>(dir: P, name: &str, expected: &str) -> Result<Reply, StoreError> {
    let path = dir.as_ref().join(name);

    let probed = imagesize::size(&path).map_err(|e| StoreError::ImageProbe {
        file: name.to_string(),
        reason: e.to_string(),
    })?;

    let actual = format!("{}x{}", probed.width, probed.height);
    if actual != expected {
        return Err(StoreError::DimensionsMismatch {
            file: name.to_string(),
            expected: expected.to_string(),
        });
    }

    Ok(Reply::success(format!(
        "the file '{name}' meets the requested dimensions '{expected}'"
    )))
}
