#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::{
    env,
    io::{self, Write},
    path::PathBuf,
    sync::{Arc, Mutex},
};

use anyhow::Context;
use chrono::Local;
use log::{debug, warn};

use liftlog_app as app;
use liftlog_domain as domain;
use liftlog_storage as storage;

use shell::Shell;

mod command;
mod shell;

const SETTINGS_VAR: &str = "LIFTLOG_SETTINGS";

fn main() -> anyhow::Result<()> {
    let settings = load_settings()?;

    let log = storage::memory::Log::default();
    if app::log::init(Arc::new(Mutex::new(log.clone())), settings.log_level.into()).is_err() {
        warn!("logger already initialized");
    }
    debug!("{settings:?}");

    let mut shell = Shell::new(
        domain::Service::new(storage::memory::Workouts::seeded()),
        app::Service::new(storage::memory::Settings::new(settings)),
        app::Service::new(log),
        Local::now().date_naive(),
    );

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Type \"help\" for a list of commands.")?;
    shell
        .run(io::stdin().lock(), &mut stdout)
        .context("terminal input or output failed")?;
    writeln!(stdout)?;

    Ok(())
}

fn load_settings() -> anyhow::Result<app::Settings> {
    match env::var_os(SETTINGS_VAR).map(PathBuf::from) {
        Some(path) => app::Settings::load(&path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => Ok(app::Settings::default()),
    }
}
