//! HTML report rendering.
//!
//! The template is plain text with `{{ Name }}` tokens. Tokens are replaced in
//! one left-to-right pass, so text inserted for one token is never scanned
//! for further tokens.

use std::fmt::{Display, Write};

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use crate::model::{Condition, ForecastDay, HourlyReading, Location};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const UPDATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub const CITY: &str = "{{ City }}";
pub const COUNTRY: &str = "{{ Country }}";
pub const TODAY_DATE: &str = "{{ TodayWeatherDate }}";
pub const TODAY_ICON: &str = "{{ TodayWeatherIcon }}";
pub const TODAY_CONDITION: &str = "{{ TodayWeatherCondition }}";
pub const TODAY_CONDITION_ICON: &str = "{{ TodayWeatherConditionIcon }}";
pub const WEATHERS_TABLE: &str = "{{ WeathersTable }}";
pub const UPDATED_DATE_TIME: &str = "{{ UpdatedDateTime }}";

const TOKEN_OPEN: &str = "{{";

/// Renders `template` for the given day and location.
#[instrument(skip_all, fields(city = %location.name, date = %day.date))]
pub fn render(
    day: &ForecastDay,
    location: &Location,
    template: &str,
    updated_at: DateTime<Utc>,
) -> String {
    let pairs = placeholders(day, location, updated_at);
    let rendered = substitute(template, &pairs);
    debug!(template_len = template.len(), rendered_len = rendered.len(), "Report rendered");
    rendered
}

/// Placeholder/value pairs in substitution order.
pub fn placeholders(
    day: &ForecastDay,
    location: &Location,
    updated_at: DateTime<Utc>,
) -> Vec<(&'static str, String)> {
    vec![
        (CITY, location.name.clone()),
        (COUNTRY, location.country.clone()),
        (TODAY_DATE, day.date.format(DATE_FORMAT).to_string()),
        (TODAY_ICON, daily_icon_url(&day.day.condition)),
        (TODAY_CONDITION, day.day.condition.text.clone()),
        (TODAY_CONDITION_ICON, daily_icon_url(&day.day.condition)),
        (WEATHERS_TABLE, hourly_table(&day.hour)),
        (UPDATED_DATE_TIME, updated_at.format(UPDATED_FORMAT).to_string()),
    ]
}

/// Plain `https` prepended to the provider path. The path already starts
/// with `//`, so the result reads `https//...`; templates depend on this form.
pub fn daily_icon_url(condition: &Condition) -> String {
    format!("https{}", condition.icon)
}

/// Replaces every placeholder occurrence in a single pass over `template`.
///
/// When several placeholders match at the same position the earliest pair wins.
pub fn substitute(template: &str, pairs: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(TOKEN_OPEN) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match pairs.iter().find(|(token, _)| rest.starts_with(token)) {
            Some((token, value)) => {
                out.push_str(value);
                rest = &rest[token.len()..];
            }
            None => {
                out.push_str(TOKEN_OPEN);
                rest = &rest[TOKEN_OPEN.len()..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Five-row HTML table with one column per hourly reading.
pub fn hourly_table(hours: &[HourlyReading]) -> String {
    let mut table = String::from("<table>\n");

    push_row(&mut table, "Hour", hours, |h| h.hour_of_day().to_string());
    push_row(&mut table, "Weather", hours, |h| {
        format!("<img src=\"{}\" alt=\"Weather Icon\">", h.condition.icon)
    });
    push_row(&mut table, "Condition", hours, |h| h.condition.text.clone());
    push_row(&mut table, "Temperature", hours, |h| with_unit(h.temp_c, "°C"));
    push_row(&mut table, "Wind", hours, |h| with_unit(h.wind_kph, "kph"));

    table.push_str("</table>\n");
    table
}

fn push_row<F>(table: &mut String, label: &str, hours: &[HourlyReading], cell: F)
where
    F: Fn(&HourlyReading) -> String,
{
    // Writing into a String cannot fail.
    let _ = writeln!(table, "<tr><th>{label}</th>");
    for hour in hours {
        let _ = writeln!(table, "<td>{}</td>", cell(hour));
    }
    table.push_str("</tr>\n");
}

fn with_unit(value: impl Display, unit: &str) -> String {
    format!("{value} {unit}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::sample_response;
    use chrono::TimeZone;

    fn updated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 6, 30, 5).unwrap()
    }

    fn reading(time: &str) -> HourlyReading {
        HourlyReading {
            time: time.to_string(),
            condition: Condition {
                text: "Partly cloudy".to_string(),
                icon: "//cdn.example.com/64x64/116.png".to_string(),
            },
            temp_c: 12.5,
            wind_kph: 10.0,
        }
    }

    fn cells(table: &str, label: &str) -> Vec<String> {
        let header = format!("<tr><th>{label}</th>");
        table
            .lines()
            .skip_while(|line| *line != header)
            .skip(1)
            .take_while(|line| *line != "</tr>")
            .map(|line| line.trim_start_matches("<td>").trim_end_matches("</td>").to_string())
            .collect()
    }

    #[test]
    fn renders_today_date_only() {
        let response = sample_response();
        let day = response.today().unwrap();

        let out = render(day, &response.location, "{{ TodayWeatherDate }}", updated_at());
        assert_eq!(out, "2024-03-01");
    }

    #[test]
    fn daily_icon_keeps_provider_path_verbatim() {
        let response = sample_response();
        let day = response.today().unwrap();

        let out = render(
            day,
            &response.location,
            "{{ TodayWeatherIcon }}|{{ TodayWeatherConditionIcon }}",
            updated_at(),
        );
        assert_eq!(
            out,
            "https//cdn.example.com/64x64/113.png|https//cdn.example.com/64x64/113.png"
        );
    }

    #[test]
    fn renders_every_placeholder() {
        let response = sample_response();
        let day = response.today().unwrap();
        let template = "<h1>{{ City }}, {{ Country }}</h1>\n\
                        <p>{{ TodayWeatherCondition }}</p>\n\
                        {{ WeathersTable }}<footer>{{ UpdatedDateTime }}</footer>";

        let out = render(day, &response.location, template, updated_at());

        assert!(out.starts_with("<h1>Paris, France</h1>\n<p>Sunny</p>\n<table>\n"));
        assert!(out.ends_with("</table>\n<footer>2024-03-01T06:30:05Z</footer>"));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        let response = sample_response();
        let day = response.today().unwrap();
        let template = "<html>{{ Unknown }} {{City}} {{ city }} }} {{</html>";

        assert_eq!(render(day, &response.location, template, updated_at()), template);
    }

    #[test]
    fn substitute_replaces_all_occurrences() {
        let pairs = vec![(CITY, "Oslo".to_string())];
        assert_eq!(substitute("{{ City }}/{{ City }}", &pairs), "Oslo/Oslo");
    }

    #[test]
    fn substitute_does_not_rescan_inserted_values() {
        let pairs = vec![
            (CITY, "{{ Country }}".to_string()),
            (COUNTRY, "Norway".to_string()),
        ];

        assert_eq!(
            substitute("{{ City }} in {{ Country }}", &pairs),
            "{{ Country }} in Norway"
        );
    }

    #[test]
    fn condition_and_condition_icon_do_not_clash() {
        let response = sample_response();
        let day = response.today().unwrap();

        let out = render(
            day,
            &response.location,
            "{{ TodayWeatherConditionIcon }} {{ TodayWeatherCondition }}",
            updated_at(),
        );
        assert_eq!(out, "https//cdn.example.com/64x64/113.png Sunny");
    }

    #[test]
    fn hour_row_lists_times_in_order() {
        let hours: Vec<_> = (0..24)
            .map(|h| reading(&format!("2024-03-01 {h:02}:00")))
            .collect();

        let table = hourly_table(&hours);
        let expected: Vec<String> = (0..24).map(|h| format!("{h:02}:00")).collect();

        assert_eq!(cells(&table, "Hour"), expected);
    }

    #[test]
    fn every_row_has_one_cell_per_reading() {
        let hours: Vec<_> = (0..24)
            .map(|h| reading(&format!("2024-03-01 {h:02}:00")))
            .collect();
        let table = hourly_table(&hours);

        for label in ["Hour", "Weather", "Condition", "Temperature", "Wind"] {
            assert_eq!(cells(&table, label).len(), 24, "row {label}");
        }
        assert_eq!(table.matches("<tr>").count(), 5);
        assert!(table.starts_with("<table>\n"));
        assert!(table.ends_with("</tr>\n</table>\n"));
    }

    #[test]
    fn table_cells_render_exact_markup() {
        let table = hourly_table(&[reading("2024-03-01 07:00")]);

        assert_eq!(
            table,
            "<table>\n\
             <tr><th>Hour</th>\n<td>07:00</td>\n</tr>\n\
             <tr><th>Weather</th>\n<td><img src=\"//cdn.example.com/64x64/116.png\" alt=\"Weather Icon\"></td>\n</tr>\n\
             <tr><th>Condition</th>\n<td>Partly cloudy</td>\n</tr>\n\
             <tr><th>Temperature</th>\n<td>12.5 °C</td>\n</tr>\n\
             <tr><th>Wind</th>\n<td>10 kph</td>\n</tr>\n\
             </table>\n"
        );
    }
}
