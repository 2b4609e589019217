//! CLI argument definitions for the pipeline monitor.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use dpm_model::{Role, Theme};
use dpm_state::LayoutMessage;

use crate::events::parse_event;

#[derive(Parser)]
#[command(
    name = "dpm",
    version,
    about = "DICOM Pipeline Monitor - drive the dashboard's client state",
    long_about = "Drive the DICOM Pipeline Monitor's client state from a terminal.\n\n\
                  Sign in with a demo account, switch theme, list the menu, check\n\
                  route access, and replay sidebar/drawer interactions. State is\n\
                  kept in storage.json, standing in for browser local storage."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Read configuration from this file instead of the platform default.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding storage.json (overrides the config file).
    #[arg(long = "storage-dir", value_name = "DIR", global = true)]
    pub storage_dir: Option<PathBuf>,

    /// Viewport width in CSS pixels (overrides the config file).
    #[arg(long = "width", value_name = "PX", global = true)]
    pub width: Option<u32>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sign in, sign out, or show the current user.
    #[command(subcommand)]
    Session(SessionCommand),

    /// Show or change the colour theme.
    #[command(subcommand)]
    Theme(ThemeCommand),

    /// List the menu entries visible to the current user.
    Menu(MenuArgs),

    /// Resolve a path through the route guard.
    Open(OpenArgs),

    /// Replay layout events and print the resulting layout.
    Layout(LayoutArgs),
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Sign in with a demo account.
    Login(LoginArgs),

    /// Sign out and close the mobile menu.
    Logout,

    /// Print the signed-in user.
    Show,
}

#[derive(Args)]
#[command(group(
    clap::ArgGroup::new("method")
        .required(true)
        .args(["email", "quick"]),
))]
pub struct LoginArgs {
    /// Account e-mail address.
    #[arg(long = "email", requires = "password")]
    pub email: Option<String>,

    /// Account password.
    #[arg(long = "password", requires = "email")]
    pub password: Option<String>,

    /// Sign in as the demo account for this role.
    #[arg(long = "as", value_name = "ROLE")]
    pub quick: Option<Role>,
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    /// Print the current theme.
    Show,

    /// Switch between dark and light.
    Toggle,

    /// Set the theme explicitly.
    Set {
        #[arg(value_name = "THEME")]
        theme: Theme,
    },
}

#[derive(Args)]
pub struct MenuArgs {
    /// Case-insensitive search over entry labels.
    #[arg(long = "query", default_value = "")]
    pub query: String,
}

#[derive(Args)]
pub struct OpenArgs {
    /// Address-bar path, e.g. /studies/STU-0042.
    #[arg(value_name = "PATH")]
    pub path: String,
}

#[derive(Args)]
pub struct LayoutArgs {
    /// Events applied in order: enter, leave, pin, unpin, toggle-pin,
    /// freeze, unfreeze, toggle-freeze, header, resize=<W>, menu,
    /// close-menu, backdrop, nav, theme.
    #[arg(value_name = "EVENT", value_parser = parse_event)]
    pub events: Vec<LayoutMessage>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
