use anyhow::{Context, Result};
use chrono::Utc;
use csv::Writer;
use log::{debug, info, warn};
use serde::Deserialize;
use signal::{evaluate, LightState, SignalRecommendation, TrafficReading};
use std::env;
use std::io::{self, BufRead, Write as IoWrite};

const MISSING_DATA_MESSAGE: &str = "Missing data. Please fill in all traffic parameters.";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let json_output = args.contains(&"--json".to_string());

    if let Some(path) = flag_value(&args, "--batch=") {
        return run_batch(&path);
    }

    if has_reading_flags(&args) {
        let reading = reading_from_flags(&args);
        debug!("one-shot reading: {:?}", reading);
        report(&evaluate(&reading), json_output)?;
        return Ok(());
    }

    run_interactive(json_output)
}

fn flag_value(args: &[String], prefix: &str) -> Option<String> {
    args.iter()
        .find(|arg| arg.starts_with(prefix))
        .map(|arg| arg[prefix.len()..].to_string())
}

fn has_reading_flags(args: &[String]) -> bool {
    ["--cars=", "--pedestrians=", "--hour=", "--weather="]
        .iter()
        .any(|prefix| args.iter().any(|arg| arg.starts_with(prefix)))
}

// A flag that is absent or fails to parse falls back to the same defaults
// the interactive prompt uses for unparseable answers.
fn reading_from_flags(args: &[String]) -> TrafficReading {
    let defaults = TrafficReading::default();
    TrafficReading {
        car_density: numeric_flag(args, "--cars=", defaults.car_density),
        pedestrian_count: numeric_flag(args, "--pedestrians=", defaults.pedestrian_count),
        time_of_day: numeric_flag(args, "--hour=", defaults.time_of_day),
        weather_severity: numeric_flag(args, "--weather=", defaults.weather_severity),
    }
}

fn numeric_flag(args: &[String], prefix: &str, default: f64) -> f64 {
    flag_value(args, prefix)
        .map(|raw| coerce_numeric(&raw, default))
        .unwrap_or(default)
}

fn coerce_numeric(raw: &str, default: f64) -> f64 {
    raw.trim().parse().unwrap_or(default)
}

fn run_interactive(json_output: bool) -> Result<()> {
    info!("Fuzzy traffic signal console. Answer the four prompts, or type 'quit'.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let defaults = TrafficReading::default();

    loop {
        let answers = [
            ("Car density (vehicles/minute, 0-50)", defaults.car_density),
            ("Pedestrian count (per minute, 0-25)", defaults.pedestrian_count),
            ("Time of day (24-hour format, 0-23)", defaults.time_of_day),
            ("Weather condition (1=clear, 5=severe)", defaults.weather_severity),
        ];

        let mut values = [0.0f64; 4];
        let mut blank_answer = false;
        let mut quit = false;

        for (slot, (label, default)) in values.iter_mut().zip(answers) {
            print!("{}: ", label);
            io::stdout().flush()?;

            let line = match lines.next() {
                Some(line) => line.context("reading stdin")?,
                None => {
                    quit = true;
                    break;
                }
            };
            let trimmed = line.trim();

            if trimmed.eq_ignore_ascii_case("quit") {
                quit = true;
                break;
            }
            if trimmed.is_empty() {
                blank_answer = true;
                break;
            }
            *slot = coerce_numeric(trimmed, default);
        }

        if quit {
            info!("Console exiting");
            return Ok(());
        }
        if blank_answer {
            warn!("{}", MISSING_DATA_MESSAGE);
            continue;
        }

        let reading = TrafficReading::new(values[0], values[1], values[2], values[3]);
        debug!("interactive reading: {:?}", reading);
        report(&evaluate(&reading), json_output)?;
    }
}

fn report(recommendation: &SignalRecommendation, json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(recommendation)?);
    } else {
        render_light(recommendation);
    }
    Ok(())
}

fn render_light(recommendation: &SignalRecommendation) {
    let lamp = |state| {
        if recommendation.light == state {
            "(#)"
        } else {
            "( )"
        }
    };

    println!();
    println!("  +-----+");
    println!("  | {} |  red", lamp(LightState::Red));
    println!("  | {} |  yellow", lamp(LightState::Yellow));
    println!("  | {} |  green", lamp(LightState::Green));
    println!("  +-----+");
    println!();
    println!("  Green duration: {} seconds", recommendation.duration_seconds);
    println!("  {}", recommendation.recommendation);
    println!();
}

// Blank CSV cells deserialize to None and take the caller-side defaults,
// matching the interactive prompt's treatment of unset fields.
#[derive(Debug, Deserialize)]
struct ScenarioRow {
    car_density: Option<f64>,
    pedestrian_count: Option<f64>,
    time_of_day: Option<f64>,
    weather_severity: Option<f64>,
}

impl ScenarioRow {
    fn into_reading(self) -> TrafficReading {
        let defaults = TrafficReading::default();
        TrafficReading {
            car_density: self.car_density.unwrap_or(defaults.car_density),
            pedestrian_count: self.pedestrian_count.unwrap_or(defaults.pedestrian_count),
            time_of_day: self.time_of_day.unwrap_or(defaults.time_of_day),
            weather_severity: self.weather_severity.unwrap_or(defaults.weather_severity),
        }
    }
}

fn run_batch(path: &str) -> Result<()> {
    info!("Evaluating scenarios from {}", path);

    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("open scenario file {}", path))?;

    let mut evaluated = Vec::new();
    for (index, row) in reader.deserialize::<ScenarioRow>().enumerate() {
        let row = row.with_context(|| format!("scenario row {}", index + 1))?;
        let reading = row.into_reading();
        let recommendation = evaluate(&reading);
        debug!(
            "row {}: {:?} -> {} for {}s",
            index + 1,
            reading,
            recommendation.light,
            recommendation.duration_seconds
        );
        evaluated.push((reading, recommendation));
    }

    if evaluated.is_empty() {
        warn!("No scenarios found in {}", path);
        return Ok(());
    }

    let filename = write_timing_csv(&evaluated)?;
    info!(
        "Evaluated {} scenario(s), results saved to {}",
        evaluated.len(),
        filename
    );
    Ok(())
}

fn write_timing_csv(results: &[(TrafficReading, SignalRecommendation)]) -> Result<String> {
    std::fs::create_dir_all("logs")?;

    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("logs/timing_{}.csv", timestamp);

    let mut writer =
        Writer::from_path(&filename).with_context(|| format!("create {}", filename))?;

    writer.write_record([
        "car_density",
        "pedestrian_count",
        "time_of_day",
        "weather_severity",
        "light",
        "duration_seconds",
        "recommendation",
    ])?;

    for (reading, recommendation) in results {
        writer.write_record([
            &reading.car_density.to_string(),
            &reading.pedestrian_count.to_string(),
            &reading.time_of_day.to_string(),
            &reading.weather_severity.to_string(),
            &recommendation.light.to_string(),
            &recommendation.duration_seconds.to_string(),
            &recommendation.recommendation,
        ])?;
    }

    writer.flush()?;
    Ok(filename)
}
