use std::collections::HashMap;

use super::*;
use crate::error::ErrorCode;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = EditorConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, EditorConfig::default());
    assert_eq!(cfg.h_spacing, DEFAULT_H_SPACING);
    assert_eq!(cfg.history_capacity, DEFAULT_HISTORY_CAPACITY);
}

#[test]
fn parses_overrides() {
    let cfg = EditorConfig::from_lookup(lookup(&[
        (ENV_H_SPACING, "4"),
        (ENV_V_SPACING, " -2 "),
        (ENV_HISTORY_CAPACITY, "16"),
        (ENV_PROMPT_ATTEMPTS, "1"),
    ]))
    .unwrap();
    assert_eq!(cfg, EditorConfig { h_spacing: 4, v_spacing: -2, history_capacity: 16, prompt_attempts: 1 });
}

#[test]
fn rejects_malformed_spacing() {
    let err = EditorConfig::from_lookup(lookup(&[(ENV_H_SPACING, "wide")])).unwrap_err();
    assert_eq!(err, ConfigError::Parse { var: ENV_H_SPACING, value: "wide".into() });
}

#[test]
fn rejects_zero_capacity() {
    let err = EditorConfig::from_lookup(lookup(&[(ENV_HISTORY_CAPACITY, "0")])).unwrap_err();
    assert_eq!(err, ConfigError::Zero { var: ENV_HISTORY_CAPACITY });
}

#[test]
fn rejects_negative_attempts() {
    let err = EditorConfig::from_lookup(lookup(&[(ENV_PROMPT_ATTEMPTS, "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { var: ENV_PROMPT_ATTEMPTS, .. }));
}

#[test]
fn config_answers_preferences() {
    let cfg = EditorConfig { h_spacing: 3, v_spacing: 6, history_capacity: 10, prompt_attempts: 2 };
    let prefs: &dyn Preferences = &cfg;
    assert_eq!(prefs.default_h_spacing(), 3);
    assert_eq!(prefs.default_v_spacing(), 6);
    assert_eq!(prefs.prompt_attempts(), 2);
}

#[test]
fn preferences_default_to_single_attempt() {
    struct Fixed;
    impl Preferences for Fixed {
        fn default_h_spacing(&self) -> i32 {
            1
        }
        fn default_v_spacing(&self) -> i32 {
            2
        }
    }
    assert_eq!(Fixed.prompt_attempts(), 1);
}

#[test]
fn unset_process_variable_reads_as_none() {
    assert_eq!(env_var("LAYOUT_CONFIG_TEST_NEVER_SET"), Ok(None));
}

#[cfg(unix)]
#[test]
fn non_utf8_process_variable_is_a_parse_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    const VAR: &str = "LAYOUT_CONFIG_TEST_NON_UTF8";
    // SAFETY: no other test reads or writes this variable.
    unsafe { std::env::set_var(VAR, OsStr::from_bytes(b"1\xff")) };
    let err = env_var(VAR).unwrap_err();
    unsafe { std::env::remove_var(VAR) };
    assert!(matches!(err, ConfigError::Parse { var: VAR, .. }));
    assert_eq!(err.error_code(), "E_CONFIG_PARSE");
}
