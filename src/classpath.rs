//! Classpath discovery: every `*.jar` under `<search-dir>/lib/`.

use std::fs;
use std::path::{Path, PathBuf};

/// Separator used when the classpath is handed to the interpreter.
pub const CLASSPATH_SEPARATOR: &str = "|";

const LIB_DIR: &str = "lib";
const ARCHIVE_SUFFIX: &str = ".jar";

/// Collect archive files from each search-path entry, in order.
///
/// Entries within one `lib/` directory keep filesystem enumeration order.
/// Duplicates across search-path entries are kept. A missing or unreadable
/// `lib/` contributes nothing.
pub fn discover<S: AsRef<str>>(search_paths: &[S]) -> Vec<PathBuf> {
    let mut entries = Vec::new();

    for search_dir in search_paths {
        let lib_dir = Path::new(search_dir.as_ref()).join(LIB_DIR);
        let before = entries.len();
        collect_archives(&lib_dir, &mut entries);
        tracing::debug!(
            "{}: {} archive(s)",
            lib_dir.display(),
            entries.len() - before
        );
    }

    entries
}

/// Join discovered entries into the `-Done-jar.class.path` value.
pub fn join(entries: &[PathBuf]) -> String {
    entries
        .iter()
        .map(|p| p.to_string_lossy())
        .collect::<Vec<_>>()
        .join(CLASSPATH_SEPARATOR)
}

fn collect_archives(lib_dir: &Path, out: &mut Vec<PathBuf>) {
    let listing = match fs::read_dir(lib_dir) {
        Ok(listing) => listing,
        Err(e) => {
            tracing::debug!("Skipping {}: {}", lib_dir.display(), e);
            return;
        }
    };

    for entry in listing.flatten() {
        let path = entry.path();
        if is_archive_name(&entry.file_name().to_string_lossy()) && path.is_file() {
            out.push(path);
        }
    }
}

fn is_archive_name(name: &str) -> bool {
    name.ends_with(ARCHIVE_SUFFIX)
}
