use std::path::Path;

use rand::Rng;

/// Extension of `path` without the leading dot, or an empty string when the
/// path has none.
pub fn get_extension<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// File stem of `path` (final component minus its extension).
pub fn get_name<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Final component of `path`, extension included.
pub fn get_basename<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Produce a fresh randomized name for `file`, keeping its extension.
///
/// The body is a 32-character lowercase hex token; when `indicative` is
/// given it is prefixed as `{indicative}-{token}`. Files without an
/// extension get the bare token.
pub fn rename_file(file: &str, indicative: Option<&str>) -> String {
    let token = hex_token();
    let stem = match indicative {
        Some(tag) => format!("{tag}-{token}"),
        None => token,
    };

    let ext = get_extension(file);
    if ext.is_empty() {
        stem
    } else {
        format!("{stem}.{ext}")
    }
}

// 16 random bytes rendered as 32 lowercase hex chars.
fn hex_token() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_name_basename() {
        assert_eq!(get_extension("storage/image.png"), "png");
        assert_eq!(get_name("storage/image.png"), "image");
        assert_eq!(get_basename("storage/image.png"), "image.png");
    }

    #[test]
    fn extensionless_path() {
        assert_eq!(get_extension("storage/README"), "");
        assert_eq!(get_name("storage/README"), "README");
        assert_eq!(get_basename("storage/README"), "README");
    }

    #[test]
    fn rename_without_indicative_matches_pattern() {
        let name = rename_file("image.png", None);
        let (stem, ext) = name.split_once('.').expect("dot separator");
        assert_eq!(ext, "png");
        assert_eq!(stem.len(), 32);
        assert!(stem.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn rename_with_indicative_prefixes_tag() {
        let name = rename_file("image.png", Some("FILE"));
        assert!(name.starts_with("FILE-"));
        assert!(name.ends_with(".png"));
        let token = &name["FILE-".len()..name.len() - ".png".len()];
        assert_eq!(token.len(), 32);
    }

    #[test]
    fn rename_is_randomized() {
        assert_ne!(rename_file("a.txt", None), rename_file("a.txt", None));
    }
}
