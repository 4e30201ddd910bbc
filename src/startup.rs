//! Process bootstrap: configuration, logging, store, screens, then the UI loop.
//!
//! Any failure before or during the loop ends the process with one generic
//! notification. Details only go to the log file.

use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::config::{Config, LoggingConfig};
use crate::factory::ScreenFactory;
use crate::logging::init_tracing;
use crate::model::LexiconEntry;
use crate::navigation::{NavigationController, WORD_LIST_SCREEN};
use crate::persistence::JsonFileUnitOfWork;
use crate::service::{share, SharedService, UnitOfWorkService};
use crate::ui::runtime;
use crate::ui::view::ScreenView;

pub const ERR_GENERAL_CAPTION: &str = "Issue initializing Lexicon application";
pub const ERR_GENERAL: &str = "Please contact system administrator.";

pub fn launch() -> ExitCode {
    let config = Config::load();
    let logging = match &config {
        Ok(config) => config.logging.clone(),
        Err(_) => LoggingConfig::default(),
    };
    let log_path = init_tracing(&logging).ok();

    tracing::info!("== Begin Logging [{}] ==", chrono::Local::now().to_rfc3339());
    if let Some(path) = &log_path {
        tracing::debug!(path = %path.display(), "Log file opened");
    }

    let result = config
        .context("Loading configuration")
        .and_then(|config| run_program(&config));

    match result {
        Ok(()) => {
            tracing::info!("== End Logging ==");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("Application terminated: {err:#}");
            notify_failure();
            ExitCode::FAILURE
        }
    }
}

fn run_program(config: &Config) -> Result<()> {
    let service = open_service(config)?;

    let result = run_screens(config, &service);
    service.lock().dispose();
    result
}

pub(crate) fn open_service(config: &Config) -> Result<SharedService> {
    let store = JsonFileUnitOfWork::<LexiconEntry>::open(&config.store.path)
        .with_context(|| format!("Opening store {}", config.store.path.display()))?;
    Ok(share(UnitOfWorkService::new(store)))
}

fn run_screens(config: &Config, service: &SharedService) -> Result<()> {
    let factory = ScreenFactory::new(config.application.title_prefix());
    let mut controller: NavigationController<dyn ScreenView> = NavigationController::new();
    factory
        .install_all(service, &mut controller)
        .context("Registering screens")?;
    if !controller.show_screen(WORD_LIST_SCREEN) {
        anyhow::bail!("Screen {WORD_LIST_SCREEN} is not registered");
    }

    runtime::run(&mut controller).context("Running terminal UI")?;
    Ok(())
}

/// Runs after the terminal guard has restored the screen.
fn notify_failure() {
    eprintln!("{ERR_GENERAL_CAPTION}");
    eprintln!("{ERR_GENERAL}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::PersistenceError;
    use std::fs;
    use tempfile::TempDir;

    fn config_with_store(dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.store.path = dir.path().join("lexicon.json");
        config
    }

    #[test]
    fn corrupt_store_fails_with_context() {
        let dir = TempDir::new().unwrap();
        let config = config_with_store(&dir);
        fs::write(&config.store.path, "{ not json").unwrap();

        let err = open_service(&config).err().unwrap();

        assert!(format!("{err:#}").starts_with("Opening store"));
        assert!(matches!(
            err.downcast_ref::<PersistenceError>(),
            Some(PersistenceError::Parse { .. })
        ));
    }

    #[test]
    fn run_program_reports_corrupt_store_without_panicking() {
        let dir = TempDir::new().unwrap();
        let config = config_with_store(&dir);
        fs::write(&config.store.path, "{ not json").unwrap();

        let err = run_program(&config).unwrap_err();

        assert!(err.to_string().starts_with("Opening store"));
    }

    #[test]
    fn missing_store_opens_a_live_service() {
        let dir = TempDir::new().unwrap();
        let service = open_service(&config_with_store(&dir)).unwrap();

        assert!(!service.lock().is_disposed());
        assert!(service.lock().get_sorted_items().unwrap().is_empty());
        service.lock().dispose();
        assert!(service.lock().is_disposed());
    }
}
