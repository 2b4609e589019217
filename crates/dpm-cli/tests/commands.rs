//! End-to-end command runs against a file-backed store.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use dpm_cli::cli::Cli;
use dpm_cli::commands::{Environment, run};
use dpm_cli::config::Config;
use dpm_state::{AUTH_KEY, FileStore, KeyValueStore, THEME_KEY};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}-{nanos}"));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn dpm(dir: &Path, args: &[&str]) -> anyhow::Result<String> {
    let mut argv = vec!["dpm", "--storage-dir", dir.to_str().unwrap()];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    let env = Environment::resolve(&cli, &Config::default()).unwrap();
    let mut ctx = env.restore_context();
    run(&cli.command, &mut ctx, &env)
}

#[test]
fn login_persists_across_invocations() {
    let dir = unique_temp_dir("dpm-cli");
    dpm(&dir, &["session", "login", "--email", "tech@hospital.com", "--password", "tech123"])
        .unwrap();

    insta::assert_snapshot!(dpm(&dir, &["session", "show"]).unwrap(), @r"
    signed in: James Wilson (tech@hospital.com)
    role:      Technician
    initials:  JW
    timeout:   3600s
    ");

    let raw = FileStore::open(&dir).get(AUTH_KEY).unwrap().unwrap();
    assert!(raw.contains("\"isAuthenticated\":true"));

    assert_eq!(dpm(&dir, &["session", "logout"]).unwrap(), "signed out");
    assert_eq!(dpm(&dir, &["session", "show"]).unwrap(), "signed out");
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn rejected_logins_are_errors() {
    let dir = unique_temp_dir("dpm-cli");
    let err = dpm(&dir, &["session", "login", "--email", "admin@hospital.com", "--password", "nope"])
        .unwrap_err();
    assert!(format!("{err:#}").starts_with("sign-in rejected"));

    let err = dpm(&dir, &["session", "login", "--as", "viewer"]).unwrap_err();
    assert_eq!(err.to_string(), "no demo account for role Viewer");
    assert_eq!(dpm(&dir, &["session", "show"]).unwrap(), "signed out");
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn open_reports_redirects_without_failing() {
    let dir = unique_temp_dir("dpm-cli");
    assert_eq!(
        dpm(&dir, &["open", "/studies"]).unwrap(),
        "redirect /studies -> /login"
    );
    assert_eq!(dpm(&dir, &["open", "/login"]).unwrap(), "render   /login");

    dpm(&dir, &["session", "login", "--as", "technician"]).unwrap();
    assert_eq!(
        dpm(&dir, &["open", "/users"]).unwrap(),
        "redirect /users -> /dashboard"
    );
    assert_eq!(
        dpm(&dir, &["open", "/studies/STU-7/"]).unwrap(),
        "render   /studies/STU-7"
    );
    assert_eq!(dpm(&dir, &["open", "/"]).unwrap(), "redirect / -> /dashboard");
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn menu_follows_role_and_query() {
    let dir = unique_temp_dir("dpm-cli");
    dpm(&dir, &["session", "login", "--as", "Administrator"]).unwrap();
    let all = dpm(&dir, &["menu"]).unwrap();
    for label in ["Dashboard", "Users", "Audit Logs", "Settings"] {
        assert!(all.contains(label), "{label} missing from\n{all}");
    }

    dpm(&dir, &["session", "login", "--as", "Radiologist"]).unwrap();
    let reports = dpm(&dir, &["menu", "--query", "REP"]).unwrap();
    assert!(reports.contains("Reports"));
    assert!(!reports.contains("Dashboard"));
    assert_eq!(
        dpm(&dir, &["menu", "--query", "settings"]).unwrap(),
        "no matching entries"
    );
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn theme_is_stored_and_restored() {
    let dir = unique_temp_dir("dpm-cli");
    assert_eq!(dpm(&dir, &["theme", "show"]).unwrap(), "dark");
    assert_eq!(dpm(&dir, &["theme", "toggle"]).unwrap(), "light");
    assert_eq!(dpm(&dir, &["theme", "show"]).unwrap(), "light");
    assert_eq!(
        FileStore::open(&dir).get(THEME_KEY).unwrap().as_deref(),
        Some("light")
    );
    assert_eq!(dpm(&dir, &["theme", "set", "dark"]).unwrap(), "dark");
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn unreadable_theme_is_repaired_on_start() {
    let dir = unique_temp_dir("dpm-cli");
    FileStore::open(&dir).set(THEME_KEY, "sepia").unwrap();
    assert_eq!(dpm(&dir, &["theme", "show"]).unwrap(), "dark");
    assert_eq!(
        FileStore::open(&dir).get(THEME_KEY).unwrap().as_deref(),
        Some("dark")
    );
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn layout_freeze_holds_sidebar_after_leave() {
    let dir = unique_temp_dir("dpm-cli");
    let out = dpm(&dir, &["layout", "enter", "freeze", "leave"]).unwrap();
    insta::assert_snapshot!(out, @r"
    viewport: 1280px (desktop)
    sidebar:  expanded (frozen), 256px
    drawer:   closed
    header:   offset 256px, height 64px
    content:  offset 256px
    theme:    dark
    ");
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn layout_mobile_drawer() {
    let dir = unique_temp_dir("dpm-cli");
    let out = dpm(&dir, &["--width", "375", "layout", "menu"]).unwrap();
    insta::assert_snapshot!(out, @r"
    viewport: 375px (mobile)
    sidebar:  hidden
    drawer:   open, 288px
    header:   offset 0px, height 64px
    content:  offset 0px
    theme:    dark
    ");

    let out = dpm(&dir, &["--width", "375", "layout", "menu", "nav"]).unwrap();
    assert!(out.contains("drawer:   closed"));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn layout_resize_round_trip_closes_drawer() {
    let dir = unique_temp_dir("dpm-cli");
    let out = dpm(
        &dir,
        &["layout", "pin", "resize=400", "menu", "resize=1024", "theme"],
    )
    .unwrap();
    insta::assert_snapshot!(out, @r"
    viewport: 1024px (desktop)
    sidebar:  expanded (pinned), 256px
    drawer:   closed
    header:   offset 256px, height 64px
    content:  offset 256px
    theme:    light
    ");
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn header_button_pins_collapsed_sidebar() {
    let dir = unique_temp_dir("dpm-cli");
    let out = dpm(&dir, &["layout", "header"]).unwrap();
    assert!(out.contains("sidebar:  expanded (pinned), 256px"));
    let out = dpm(&dir, &["layout", "header", "header"]).unwrap();
    assert!(out.contains("sidebar:  collapsed, 80px"));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn bad_arguments_are_rejected_by_the_parser() {
    assert!(Cli::try_parse_from(["dpm", "layout", "wiggle"]).is_err());
    assert!(Cli::try_parse_from(["dpm", "layout", "resize=wide"]).is_err());
    assert!(Cli::try_parse_from(["dpm", "session", "login"]).is_err());
    assert!(Cli::try_parse_from(["dpm", "session", "login", "--email", "a@b.c"]).is_err());
    assert!(Cli::try_parse_from(["dpm", "theme", "set", "sepia"]).is_err());
}
