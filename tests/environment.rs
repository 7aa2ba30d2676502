//! Tests for the environment resolver.

use std::collections::HashMap;
use std::path::MAIN_SEPARATOR;

use esxx_launcher::config::{EnvironmentConfig, LauncherConfig, JAVA_HOME_VAR, SEARCH_PATH_VAR};
use esxx_launcher::LauncherIdentity;

fn identity(path: &str) -> LauncherIdentity {
    LauncherIdentity::from_exe_path(path).unwrap()
}

fn env_of(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn defaults_without_overrides() {
    let id = identity("/opt/esxx/esxx");
    let env = EnvironmentConfig::resolve(&id, env_of(&[]));

    assert_eq!(env.interpreter_path, "java");
    assert_eq!(env.interpreter_extra_args, "");
    assert_eq!(
        env.library_search_path,
        vec![
            "/opt/esxx/share".to_string(),
            format!("/opt/esxx/share{MAIN_SEPARATOR}site"),
        ]
    );
}

#[test]
fn java_home_override() {
    let id = identity("/opt/esxx/esxx");
    let env = EnvironmentConfig::resolve(&id, env_of(&[(JAVA_HOME_VAR, "/usr/lib/jvm/jdk")]));

    assert_eq!(
        env.interpreter_path,
        format!("/usr/lib/jvm/jdk{MAIN_SEPARATOR}bin{MAIN_SEPARATOR}java")
    );
}

#[test]
fn search_path_override_replaces_defaults() {
    let id = identity("/opt/esxx/esxx");
    let env = EnvironmentConfig::resolve(&id, env_of(&[(SEARCH_PATH_VAR, "A;B")]));

    assert_eq!(env.library_search_path, vec!["A", "B"]);
}

#[test]
fn empty_variables_count_as_absent() {
    let id = identity("/opt/esxx/esxx");
    let env = EnvironmentConfig::resolve(
        &id,
        env_of(&[(JAVA_HOME_VAR, ""), (SEARCH_PATH_VAR, "")]),
    );

    assert_eq!(env.interpreter_path, "java");
    assert_eq!(env.library_search_path.len(), 2);
}

#[test]
fn search_path_of_only_separators_keeps_defaults() {
    let id = identity("/opt/esxx/esxx");
    let env = EnvironmentConfig::resolve(&id, env_of(&[(SEARCH_PATH_VAR, ";;")]));

    assert_eq!(env.library_search_path[0], "/opt/esxx/share");
    assert!(!env.library_search_path.is_empty());
}

#[test]
fn script_mode_defaults_to_client_vm() {
    let id = identity("/opt/esxx/esxx-js");
    let env = EnvironmentConfig::resolve(&id, env_of(&[]));

    assert_eq!(env.interpreter_extra_args, "-client");
}

#[test]
fn overlay_overrides_defaults_and_environment() {
    let id = identity("/opt/esxx/esxx-js");
    let overlay = LauncherConfig {
        java_home: Some("/from/file".into()),
        jvmargs: Some("-Xmx512m".into()),
        search_path: Some(vec!["/srv/esxx".into()]),
    };

    let env = EnvironmentConfig::resolve_with(&id, &overlay, env_of(&[]));
    assert!(env.interpreter_path.starts_with("/from/file"));
    assert_eq!(env.interpreter_extra_args, "-Xmx512m");
    assert_eq!(env.library_search_path, vec!["/srv/esxx"]);

    let env = EnvironmentConfig::resolve_with(
        &id,
        &overlay,
        env_of(&[(JAVA_HOME_VAR, "/from/env"), (SEARCH_PATH_VAR, "X")]),
    );
    assert!(env.interpreter_path.starts_with("/from/file"));
    assert_eq!(env.library_search_path, vec!["/srv/esxx"]);
    assert_eq!(env.interpreter_extra_args, "-Xmx512m");
}

#[test]
fn environment_fills_fields_the_overlay_leaves_out() {
    let id = identity("/opt/esxx/esxx");
    let overlay = LauncherConfig {
        jvmargs: Some("-server".into()),
        ..LauncherConfig::default()
    };

    let env = EnvironmentConfig::resolve_with(
        &id,
        &overlay,
        env_of(&[(JAVA_HOME_VAR, "/from/env"), (SEARCH_PATH_VAR, "X;Y")]),
    );
    assert!(env.interpreter_path.starts_with("/from/env"));
    assert_eq!(env.library_search_path, vec!["X", "Y"]);
    assert_eq!(env.interpreter_extra_args, "-server");
}

#[test]
fn empty_overlay_search_path_falls_back_to_environment() {
    let id = identity("/opt/esxx/esxx");
    let overlay = LauncherConfig {
        search_path: Some(vec![String::new()]),
        ..LauncherConfig::default()
    };

    let env = EnvironmentConfig::resolve_with(&id, &overlay, env_of(&[(SEARCH_PATH_VAR, "A")]));
    assert_eq!(env.library_search_path, vec!["A"]);
}

#[test]
fn resolution_is_deterministic() {
    let id = identity("/opt/esxx/esxx");
    let vars = [(JAVA_HOME_VAR, "/jdk"), (SEARCH_PATH_VAR, "A;B")];
    assert_eq!(
        EnvironmentConfig::resolve(&id, env_of(&vars)),
        EnvironmentConfig::resolve(&id, env_of(&vars))
    );
}
