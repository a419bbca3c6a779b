//! Weather Console - fetch a forecast as untyped JSON
//!
//! Issues one GET against the OpenWeatherMap sample endpoint and prints the
//! decoded document.
//!
//! ## Run
//! ```bash
//! cargo run --example weather_console
//! ```

use json_http_client::prelude::*;
use json_http_client::telemetry;

const URL: &str = "https://samples.openweathermap.org/data/2.5/forecast?id=524901&appid=b1b15e88fa797225412429c1c50c122a1";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = telemetry::init_from_env()?;

    println!("Weather forecast (raw JSON)\n");
    let client = JsonHttpClient::new()?;
    let logger = TracingLogger::with_source("weather_console");

    let forecast: serde_json::Value = client.get_json(URL, None, Some(&logger)).await?;
    println!("{}", serde_json::to_string_pretty(&forecast)?);

    Ok(())
}
