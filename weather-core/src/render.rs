//! Markdown rendering of the weather card.
//!
//! The output is byte-for-byte deterministic for a given response and location:
//! temperatures always carry one decimal digit, every other number is shown as
//! the API sent it.

use crate::{
    config::LocationConfig,
    lexicon::{self, Condition},
    model::{CurrentObservation, DailyForecast, ForecastResponse, Quantity, TIME_FORMAT},
};

/// Upcoming days listed in the table.
pub const TABLE_DAYS: usize = 3;

pub const TABLE_HEADER: &str = "| 日期 | 天气 | 最低/最高 | 降水量 |";
pub const TABLE_SEPARATOR: &str = "|---|---|---|---|";

/// Render the full card. Lines are joined with `\n`, without a trailing newline.
pub fn render(response: &ForecastResponse, config: &LocationConfig) -> String {
    let mut lines = vec![
        updated_line(response),
        String::new(),
        current_line(&response.current, config),
        today_line(&response.today, response.current.weather_code, config),
        String::new(),
        TABLE_HEADER.to_string(),
        TABLE_SEPARATOR.to_string(),
    ];

    lines.extend(
        response
            .upcoming
            .iter()
            .take(TABLE_DAYS)
            .map(|day| table_row(day, config)),
    );

    lines.join("\n")
}

fn updated_line(response: &ForecastResponse) -> String {
    format!(
        "数据更新：`{} {}`",
        response.current.time.format(TIME_FORMAT),
        response.timezone_abbreviation
    )
}

fn current_line(current: &CurrentObservation, config: &LocationConfig) -> String {
    let Condition { text, icon } = current.condition();
    let unit = config.temperature_unit.symbol();

    format!(
        "{icon} **{name} 当前** · {text} ｜ {temp:.1}{unit}（体感 {feel:.1}{unit}）｜ 湿度 {hum}% ｜ 风速 {wind} {wind_unit} ｜ 云量 {cloud}% ｜ 降水 {prec} mm",
        name = config.name,
        temp = current.temperature,
        feel = current.apparent_temperature,
        hum = current.relative_humidity,
        wind = current.wind_speed,
        wind_unit = config.wind_speed_unit,
        cloud = current.cloud_cover,
        prec = current.precipitation,
    )
}

/// `fallback_code` stands in when the daily forecast has no code for today.
fn today_line(today: &DailyForecast, fallback_code: i64, config: &LocationConfig) -> String {
    let Condition { text, icon } = lexicon::lookup(today.weather_code.unwrap_or(fallback_code));
    let unit = config.temperature_unit.symbol();

    let mut line = format!(
        "{icon} **今日** · {text} ｜ {min:.1}{unit} ~ {max:.1}{unit} ｜ 降水量 {rain} mm",
        min = today.temperature_min,
        max = today.temperature_max,
        rain = precipitation(today),
    );

    if let Some(uv) = &today.uv_index_max {
        line.push_str(&format!(" ｜ UV 指数 {uv}"));
    }

    line
}

fn table_row(day: &DailyForecast, config: &LocationConfig) -> String {
    let Condition { text, icon } = lexicon::lookup(day.weather_code.unwrap_or(0));
    let unit = config.temperature_unit.symbol();

    format!(
        "| {date} | {icon} {text} | {min:.1}{unit} ~ {max:.1}{unit} | {rain} mm |",
        date = day.date.format("%Y-%m-%d"),
        min = day.temperature_min,
        max = day.temperature_max,
        rain = precipitation(day),
    )
}

fn precipitation(day: &DailyForecast) -> Quantity {
    day.precipitation_sum.clone().unwrap_or_else(|| Quantity::from(0))
}
