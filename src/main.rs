use workout_journal::app::App;
use workout_journal::config::AppConfig;
use workout_journal::{error, logging, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}", error::user_friendly_message(&e));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = AppConfig::load()?;
    logging::init(&config)?;
    log::info!("Starting with {:?} layout", config.variant);

    let mut app = App::new(&config)?;
    app.init()?;

    let outcome = app.run().await;
    if let Err(e) = &outcome {
        log::error!("Event loop stopped: {}", e);
    }

    app.shutdown()?;
    outcome
}
