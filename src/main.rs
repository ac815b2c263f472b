use chrono::{Datelike, Local};
use clap::Parser;
use shabbat_times::config::settings::Settings;
use shabbat_times::core::calendar::is_shabbat_window;
use shabbat_times::domain::model::{Language, Location, ShabbatTime};
use shabbat_times::domain::ports::{ConfigProvider, LocationSource};
use shabbat_times::utils::{logger, validation::Validate};
use shabbat_times::{
    CliConfig, DirStore, FixedLocator, IpLocator, ParashaTable, ScheduleCalculator,
    ScheduleEngine, ScheduleOutcome, ScheduleSource, SpaSunsets,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting shabbat-times");

    if let Some(path) = config.config.clone() {
        let settings = Settings::from_path(&path)?;
        config = config.merge_settings(settings);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let portions = match config.portions_file() {
        Some(path) => ParashaTable::from_path(path)?,
        None => ParashaTable::builtin().clone(),
    };
    tracing::debug!("Portion table holds {} weeks", portions.len());

    let outcome = match config.fixed_coordinate() {
        Some(coordinate) => {
            let city = config.city.clone().unwrap_or_else(|| "Custom".to_string());
            run_engine(
                FixedLocator::new(Location::new(coordinate, city)),
                &config,
                portions,
            )
            .await?
        }
        None => run_engine(IpLocator::new(config.geoip_endpoint()), &config, portions).await?,
    };

    match outcome.source {
        ScheduleSource::Cache => tracing::info!("Schedule served from cache"),
        ScheduleSource::Computed => tracing::info!("Schedule recomputed"),
    }

    print_outcome(&outcome, &config);
    Ok(())
}

async fn run_engine<L: LocationSource>(
    locator: L,
    config: &impl ConfigProvider,
    portions: ParashaTable,
) -> shabbat_times::Result<ScheduleOutcome> {
    let store = DirStore::new(config.store_dir());
    let calculator = ScheduleCalculator::new(SpaSunsets, portions);
    ScheduleEngine::new(locator, store, calculator)
        .with_refresh(config.force_refresh())
        .run()
        .await
}

struct Labels {
    location: &'static str,
    shabbat: &'static str,
    candle_lighting: &'static str,
    havdalah: &'static str,
    portion: &'static str,
    greeting: &'static str,
    upcoming: &'static str,
    no_upcoming: &'static str,
}

impl Labels {
    fn for_language(language: Language) -> Self {
        match language {
            Language::En => Labels {
                location: "Location",
                shabbat: "Shabbat",
                candle_lighting: "Candle lighting",
                havdalah: "Havdalah",
                portion: "Torah portion",
                greeting: "Shabbat Shalom!",
                upcoming: "Coming weeks",
                no_upcoming: "No upcoming Shabbat in the computed horizon",
            },
            Language::He => Labels {
                location: "מיקום",
                shabbat: "שבת",
                candle_lighting: "הדלקת נרות",
                havdalah: "הבדלה",
                portion: "פרשת השבוע",
                greeting: "שבת שלום!",
                upcoming: "השבועות הבאים",
                no_upcoming: "אין שבת קרובה בטווח שחושב",
            },
        }
    }
}

fn portion_name(entry: &ShabbatTime, language: Language) -> &str {
    let name = match language {
        Language::En => &entry.torah_en,
        Language::He => &entry.torah_hw,
    };
    if name.is_empty() {
        // Fall back to the other column before giving up.
        match language {
            Language::En => &entry.torah_hw,
            Language::He => &entry.torah_en,
        }
    } else {
        name
    }
}

fn print_outcome(outcome: &ScheduleOutcome, config: &CliConfig) {
    let language = config.language();
    let labels = Labels::for_language(language);

    println!("{}: {}", labels.location, outcome.location.city);

    match &outcome.current {
        Some(current) => {
            if is_shabbat_window(Local::now().date_naive().weekday()) {
                println!("{}", labels.greeting);
            }
            println!("{} {}", labels.shabbat, current.date.format("%Y-%m-%d"));
            println!("  {}: {}", labels.candle_lighting, current.candle_lighting);
            println!("  {}: {}", labels.havdalah, current.havdalah);
            let portion = portion_name(current, language);
            if !portion.is_empty() {
                println!("  {}: {}", labels.portion, portion);
            }
        }
        None => println!("{}", labels.no_upcoming),
    }

    let upcoming: Vec<&ShabbatTime> = outcome
        .schedule
        .iter()
        .filter(|entry| Some(entry.date) > outcome.current.as_ref().map(|c| c.date))
        .take(config.display_weeks())
        .collect();

    if !upcoming.is_empty() {
        println!();
        println!("{}:", labels.upcoming);
        for entry in upcoming {
            println!(
                "  {}  {} {}  {} {}  {}",
                entry.date.format("%Y-%m-%d"),
                labels.candle_lighting,
                entry.candle_lighting,
                labels.havdalah,
                entry.havdalah,
                portion_name(entry, language),
            );
        }
    }
}
