//! Drives the contact form and theme toggle through a scripted session,
//! logging every presentation update to the terminal.
//!
//! Run with: `cargo run -p vitrine --example contact_form`

use std::fs::{self, File};

use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use vitrine::paths;
use vitrine::prelude::*;
use vitrine::settings::SqliteBackend;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(path) = paths::log_file() {
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        if let Ok(file) = File::create(&path) {
            loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file));
        }
    }
    CombinedLogger::init(loggers).expect("Failed to initialize logger");

    let settings = match paths::settings_db() {
        Some(path) => {
            if let Some(dir) = path.parent() {
                let _ = fs::create_dir_all(dir);
            }
            match SqliteBackend::open(&path).await {
                Ok(backend) => SettingsProvider::new(backend),
                Err(e) => {
                    log::warn!("falling back to in-memory settings: {}", e);
                    SettingsProvider::in_memory()
                }
            }
        }
        None => SettingsProvider::in_memory(),
    };

    let mut theme = ThemePreference::load(settings).await;
    log::info!("theme on load: {} ({})", theme.current(), theme.current().icon());
    if let Err(e) = theme.toggle().await {
        log::error!("could not save theme: {}", e);
    }

    let mut form = ContactForm::new(LogPresenter, LogNotifier, LogSubmitter);

    form.input(FieldId::Name, "Al");
    form.blur(FieldId::Name);
    form.input(FieldId::Email, "not-an-email");
    form.blur(FieldId::Email);
    form.submit();

    form.input(FieldId::Name, "Ana Silva");
    form.input(FieldId::Email, "ana@example.com");
    form.input(FieldId::Phone, "11987654321");
    form.input(FieldId::Message, "Hello there, I'd like a quote.");

    let outcome = form.submit();
    log::info!("accepted: {}", outcome.is_accepted());
}
