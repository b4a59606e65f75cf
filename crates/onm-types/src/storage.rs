use std::path::{Path, PathBuf};

/// Default root directory for persisted mapping files.
pub const DEFAULT_PERSIST_DIR: &str = "./storage";

/// Default filename of a persisted object/node mapping.
pub const DEFAULT_MAPPING_FILENAME: &str = "object_node_mapping.bin";

/// Join a persist directory and a filename with exactly one separator.
///
/// Trailing and doubled separators on `dir` are dropped before joining, so
/// `"a/"` and `"a"` produce the same path. An empty `dir` yields the bare
/// filename. The directory's bytes are kept as-is, UTF-8 or not.
pub fn concat_dirs(dir: impl AsRef<Path>, name: &str) -> PathBuf {
    let dir = dir.as_ref();
    if dir.as_os_str().is_empty() {
        return PathBuf::from(name);
    }
    dir.components().collect::<PathBuf>().join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_trailing_separator() {
        assert_eq!(
            concat_dirs("storage", "map.bin"),
            PathBuf::from("storage/map.bin")
        );
    }

    #[test]
    fn joins_with_trailing_separator() {
        assert_eq!(
            concat_dirs("storage/", "map.bin"),
            PathBuf::from("storage/map.bin")
        );
        assert_eq!(
            concat_dirs("storage//", "map.bin"),
            PathBuf::from("storage/map.bin")
        );
    }

    #[test]
    fn default_paths() {
        let path = concat_dirs(DEFAULT_PERSIST_DIR, DEFAULT_MAPPING_FILENAME);
        assert_eq!(path, PathBuf::from("./storage/object_node_mapping.bin"));
    }

    #[test]
    fn empty_dir_yields_filename() {
        assert_eq!(concat_dirs("", "map.bin"), PathBuf::from("map.bin"));
    }

    #[test]
    fn root_dir() {
        assert_eq!(concat_dirs("/", "map.bin"), PathBuf::from("/map.bin"));
    }

    #[cfg(unix)]
    #[test]
    fn keeps_non_utf8_directory_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = Path::new("/tmp").join(OsStr::from_bytes(b"idx-\xff"));
        assert_eq!(concat_dirs(&dir, "map.bin"), dir.join("map.bin"));

        let with_slash = PathBuf::from(OsStr::from_bytes(b"/tmp/idx-\xff/"));
        assert_eq!(concat_dirs(&with_slash, "map.bin"), dir.join("map.bin"));
    }
}
