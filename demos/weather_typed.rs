//! Weather Typed - fetch a forecast into Rust structs
//!
//! Same request as `weather_console`, decoded into a typed model and
//! summarized line by line. Request/response events are logged at debug
//! level when `JSON_HTTP_LOG_LEVEL=debug` is set.
//!
//! ## Run
//! ```bash
//! JSON_HTTP_LOG_LEVEL=debug cargo run --example weather_typed
//! ```

use json_http_client::prelude::*;
use json_http_client::telemetry;
use serde::Deserialize;

const URL: &str = "https://samples.openweathermap.org/data/2.5/forecast?id=524901&appid=b1b15e88fa797225412429c1c50c122a1";

#[derive(Debug, Default, Deserialize)]
struct Forecast {
    #[serde(default)]
    cnt: u32,
    #[serde(default)]
    list: Vec<Entry>,
    city: Option<City>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    dt: i64,
    main: Readings,
    #[serde(default)]
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct Readings {
    temp: f64,
    humidity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct City {
    name: String,
    country: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = telemetry::init_from_env()?;

    let client = JsonHttpClient::new()?;
    let logger = TracingLogger::with_source("weather_typed");
    let forecast: Forecast = client.get_json(URL, None, Some(&logger)).await?;

    match &forecast.city {
        Some(city) => println!(
            "Forecast for {} ({}): {} entries",
            city.name,
            city.country.as_deref().unwrap_or("?"),
            forecast.cnt
        ),
        None => println!("No forecast available"),
    }

    for entry in forecast.list.iter().take(8) {
        let when = chrono::DateTime::from_timestamp(entry.dt, 0)
            .map(|d| utc_web_date(&d))
            .unwrap_or_else(|| entry.dt.to_string());
        let description = entry
            .weather
            .first()
            .map(|c| c.description.as_str())
            .unwrap_or("-");
        let humidity = entry
            .main
            .humidity
            .map(|h| format!("{h:.0}%"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{when}  {:>7.2} K  {humidity:>4}  {description}",
            entry.main.temp
        );
    }

    Ok(())
}
