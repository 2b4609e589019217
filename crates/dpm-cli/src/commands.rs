//! Command execution against a restored application context.

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

use dpm_model::LoginRequest;
use dpm_nav::{Router, standard_menu, visible_items};
use dpm_state::{AppContext, DemoDirectory, FileStore, KeyValueStore, LayoutMessage};

use crate::cli::{Cli, Command, LoginArgs, SessionCommand, ThemeCommand};
use crate::config::Config;
use crate::render::{layout_summary, menu_table, navigation_summary, session_summary};

/// Settings resolved from flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub storage_dir: PathBuf,
    pub viewport_width: u32,
    pub session_timeout_secs: u64,
}

impl Environment {
    /// Flags win over the config file.
    ///
    /// # Errors
    ///
    /// Fails when no storage directory is given and the platform data
    /// directory cannot be determined.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let storage_dir = cli
            .storage_dir
            .clone()
            .or_else(|| config.storage_dir())
            .ok_or_else(|| anyhow!("could not determine storage directory, pass --storage-dir"))?;
        Ok(Self {
            storage_dir,
            viewport_width: cli.width.unwrap_or(config.viewport.width),
            session_timeout_secs: config.security.session_timeout_secs,
        })
    }

    /// Restore both stores from `storage.json` in the storage directory.
    pub fn restore_context(&self) -> AppContext {
        let storage: Rc<dyn KeyValueStore> = Rc::new(FileStore::open(&self.storage_dir));
        AppContext::restore(storage, self.viewport_width)
    }
}

/// Run one command and return the text to print.
///
/// # Errors
///
/// Fails on rejected credentials, an unknown quick-login role, or a
/// login request whose role does not validate. Guard redirects are
/// reported as output, not as errors.
pub fn run(command: &Command, ctx: &mut AppContext, env: &Environment) -> Result<String> {
    match command {
        Command::Session(SessionCommand::Login(args)) => run_login(args, ctx, env),
        Command::Session(SessionCommand::Logout) => {
            ctx.logout();
            Ok("signed out".to_string())
        }
        Command::Session(SessionCommand::Show) => {
            Ok(session_summary(ctx.session.session(), env.session_timeout_secs))
        }
        Command::Theme(theme) => Ok(run_theme(theme, ctx)),
        Command::Menu(args) => {
            let router = Router::default();
            let items = standard_menu(router.permissions());
            let visible = visible_items(&items, ctx.session.role(), &args.query);
            debug!(query = %args.query, shown = visible.len(), "Menu filtered");
            if visible.is_empty() {
                return Ok("no matching entries".to_string());
            }
            Ok(menu_table(&visible).to_string())
        }
        Command::Open(args) => {
            let navigation = Router::default().navigate(&args.path, ctx.session.session());
            Ok(navigation_summary(&args.path, &navigation))
        }
        Command::Layout(args) => {
            for &message in &args.events {
                ctx.layout.update(message);
            }
            Ok(layout_summary(ctx.layout.state()))
        }
    }
}

fn run_login(args: &LoginArgs, ctx: &mut AppContext, env: &Environment) -> Result<String> {
    let request: LoginRequest = match (&args.email, &args.password, args.quick) {
        (Some(email), Some(password), _) => DemoDirectory
            .authenticate(email, password)
            .context("sign-in rejected")?,
        (_, _, Some(role)) => DemoDirectory
            .quick_login(role)
            .ok_or_else(|| anyhow!("no demo account for role {role}"))?,
        _ => return Err(anyhow!("pass --email and --password, or --as <ROLE>")),
    };
    ctx.login(request).context("sign-in failed")?;
    info!("Signed in from command line");
    Ok(session_summary(
        ctx.session.session(),
        env.session_timeout_secs,
    ))
}

fn run_theme(command: &ThemeCommand, ctx: &mut AppContext) -> String {
    match command {
        ThemeCommand::Show => {}
        ThemeCommand::Toggle => {
            ctx.layout.update(LayoutMessage::ToggleTheme);
        }
        ThemeCommand::Set { theme } => {
            ctx.layout.update(LayoutMessage::SetTheme(*theme));
        }
    }
    ctx.layout.theme().to_string()
}
