//! Tests for launcher identity resolution.

use esxx_launcher::identity::{MAX_MODULE_PATH, SCRIPT_MODE_NAME};
use esxx_launcher::{LauncherIdentity, PathResolutionError};

#[test]
fn splits_forward_slash_path() {
    let id = LauncherIdentity::from_exe_path("/opt/esxx/bin/esxx").unwrap();
    assert_eq!(id.directory(), "/opt/esxx/bin/");
    assert_eq!(id.base_name(), "esxx");
    assert_eq!(id.program(), "esxx");
}

#[test]
fn splits_backslash_path_and_lowercases() {
    let id = LauncherIdentity::from_exe_path(r"C:\Program Files\ESXX\ESXX-JS.EXE").unwrap();
    assert_eq!(id.directory(), r"C:\Program Files\ESXX\");
    assert_eq!(id.base_name(), "esxx-js");
    assert_eq!(id.program(), "ESXX-JS.EXE");
    assert!(id.is_script_mode());
}

#[test]
fn last_separator_wins_with_mixed_styles() {
    let id = LauncherIdentity::from_exe_path(r"C:/tools\esxx/Launcher.exe").unwrap();
    assert_eq!(id.directory(), r"C:/tools\esxx/");
    assert_eq!(id.base_name(), "launcher");
}

#[test]
fn base_name_stops_at_first_dot() {
    let id = LauncherIdentity::from_exe_path("/usr/bin/esxx.v2.exe").unwrap();
    assert_eq!(id.base_name(), "esxx");
    assert!(!id.base_name().contains('.'));
}

#[test]
fn directory_always_ends_with_separator() {
    for path in ["/esxx", "C:\\esxx.exe", "a/b/c/esxx", "./esxx-js"] {
        let id = LauncherIdentity::from_exe_path(path).unwrap();
        assert!(
            id.directory().ends_with('/') || id.directory().ends_with('\\'),
            "{path}: {}",
            id.directory()
        );
        assert!(!id.base_name().contains('/') && !id.base_name().contains('\\'));
    }
}

#[test]
fn path_without_separator_is_rejected() {
    let err = LauncherIdentity::from_exe_path("esxx.exe").unwrap_err();
    assert!(matches!(err, PathResolutionError::NoSeparator { ref path } if path == "esxx.exe"));
    assert!(err.to_string().contains("esxx.exe"));
}

#[test]
fn overlong_path_is_rejected_not_truncated() {
    let long = format!("/{}", "a".repeat(MAX_MODULE_PATH));
    let err = LauncherIdentity::from_exe_path(&long).unwrap_err();
    assert!(matches!(err, PathResolutionError::TooLong { len, .. } if len == long.len()));

    let fits = format!("/{}", "a".repeat(MAX_MODULE_PATH - 2));
    assert!(LauncherIdentity::from_exe_path(&fits).is_ok());
}

#[test]
fn script_mode_is_selected_by_base_name_only() {
    let script = LauncherIdentity::from_exe_path(&format!("/x/{SCRIPT_MODE_NAME}.exe")).unwrap();
    assert!(script.is_script_mode());

    let normal = LauncherIdentity::from_exe_path("/x/esxx-js-old").unwrap();
    assert!(!normal.is_script_mode());
}

#[test]
fn current_executable_resolves() {
    let id = LauncherIdentity::current().unwrap();
    assert!(!id.base_name().is_empty());
}

#[cfg(unix)]
#[test]
fn symlinked_name_resolves_to_the_target() {
    use std::os::unix::fs::symlink;

    let dir = tempfile::TempDir::new().unwrap();
    let target = dir.path().join("esxx");
    std::fs::write(&target, b"").unwrap();
    let link = dir.path().join(SCRIPT_MODE_NAME);
    symlink(&target, &link).unwrap();

    // What the platform self-path query reports for a symlinked launcher.
    let resolved = std::fs::canonicalize(&link).unwrap();
    let id = LauncherIdentity::from_exe_path(resolved.to_str().unwrap()).unwrap();
    assert_eq!(id.base_name(), "esxx");
    assert!(!id.is_script_mode());

    // A renamed copy keeps its own name.
    let copy = dir.path().join(format!("{SCRIPT_MODE_NAME}.exe"));
    std::fs::copy(&target, &copy).unwrap();
    let id = LauncherIdentity::from_exe_path(copy.to_str().unwrap()).unwrap();
    assert!(id.is_script_mode());
}
