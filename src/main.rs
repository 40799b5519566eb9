use clap::Parser;
use station_tracker::config::Command;
use station_tracker::core::session;
use station_tracker::core::views::{commodity_options, station_list};
use station_tracker::core::ConfigProvider;
use station_tracker::utils::error::ErrorSeverity;
use station_tracker::utils::{logger, validation::Validate};
use station_tracker::{
    CliConfig, Dashboard, DashboardSettings, LocalStorage, LoginGate, RecordingMap, Result,
    StaticCredentials, VERSION,
};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting station-tracker {}", VERSION);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ {} (severity: {:?})", e, e.severity());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> Result<()> {
    let settings = config.load_settings()?;
    settings.validate()?;

    let mut storage = LocalStorage::new(settings.data_dir().to_string());

    match &config.command {
        Command::Login { username, password } => {
            let gate = LoginGate::new(StaticCredentials::from_config(&settings));
            gate.login(&mut storage, username, password)?;
            println!("✅ Logged in");
            return Ok(());
        }
        Command::Logout => {
            session::logout(&mut storage)?;
            println!("Logged out");
            return Ok(());
        }
        _ => {}
    }

    let mut dashboard = Dashboard::open(
        storage,
        RecordingMap::new(),
        DashboardSettings::from_config(&settings),
    )?;

    if let Some(action) = config.command.to_action() {
        dashboard.dispatch(action)?;
    }

    match &config.command {
        Command::Types => {
            for name in commodity_options(dashboard.store()) {
                println!("{}", name);
            }
        }
        Command::Markers { html } => print_markers(&dashboard, *html),
        _ => {
            for item in station_list(dashboard.store()) {
                println!("{}", item);
            }
        }
    }

    Ok(())
}

fn print_markers(dashboard: &Dashboard<LocalStorage, RecordingMap>, html: bool) {
    for (key, placed) in dashboard.map().markers() {
        if html {
            println!("{}", placed.tooltip.to_html());
            continue;
        }
        println!("📍 {} ({}, {})", key, placed.lat, placed.lon);
        for entry in &placed.tooltip.entries {
            println!("  {} {}: {}", entry.color, entry.commodity, entry.quantity);
        }
    }

    if let Some(bounds) = dashboard.markers().bounds() {
        println!(
            "View: south {} west {} north {} east {}",
            bounds.south, bounds.west, bounds.north, bounds.east
        );
    }
}
