//! Raw DWML (Digital Weather Markup Language) shape, as served by
//! `forecast.weather.gov/MapClick.php?FcstType=dwml`, and its reduction into a
//! [`WeatherDocument`].
//!
//! The feed carries two `<data>` sections, the forecast and the
//! "current observations". Both are folded into one document in document order.

use serde::Deserialize;

use crate::{
    error::Result,
    model::{Condition, Period, Place, WeatherDocument},
    xml,
};

#[derive(Debug, Default, Deserialize)]
struct Dwml {
    #[serde(default)]
    head: Option<Head>,
    #[serde(default)]
    data: Vec<Data>,
}

#[derive(Debug, Default, Deserialize)]
struct Head {
    #[serde(default)]
    product: Option<Product>,
}

#[derive(Debug, Default, Deserialize)]
struct Product {
    #[serde(rename = "creation-date", default)]
    creation_date: Vec<Text>,
}

/// Element whose attributes are irrelevant and whose text is the value.
///
/// Optional elements are collected as `Vec<Text>` rather than `Option<Text>`:
/// the deserializer turns `xsi:nil="true"` into `None` even when the element
/// has text, and NWS sets that attribute on elements that do carry values.
#[derive(Debug, Default, Deserialize)]
struct Text {
    #[serde(rename = "$text", default)]
    value: String,
}

#[derive(Debug, Default, Deserialize)]
struct Data {
    #[serde(default)]
    location: Vec<Location>,
    #[serde(rename = "time-layout", default)]
    time_layout: Vec<TimeLayout>,
    #[serde(default)]
    parameters: Vec<Parameters>,
}

#[derive(Debug, Default, Deserialize)]
struct Location {
    #[serde(default)]
    description: Vec<Text>,
    #[serde(rename = "area-description", default)]
    area_description: Vec<Text>,
}

#[derive(Debug, Default, Deserialize)]
struct TimeLayout {
    #[serde(rename = "start-valid-time", default)]
    start_valid_time: Vec<StartValidTime>,
}

#[derive(Debug, Default, Deserialize)]
struct StartValidTime {
    #[serde(rename = "@period-name", default)]
    period_name: String,
}

/// `<temperature>`, `<wind-speed>`, `<humidity>` and friends: a `<name>` and a
/// run of `<value>`s. The `type` attribute is not reliable enough to key on.
#[derive(Debug, Default, Deserialize)]
struct Series {
    #[serde(default)]
    value: Vec<Text>,
}

#[derive(Debug, Default, Deserialize)]
struct Parameters {
    #[serde(default)]
    temperature: Vec<Series>,
    #[serde(default)]
    weather: Vec<Weather>,
    #[serde(default)]
    humidity: Vec<Series>,
    #[serde(default)]
    direction: Vec<Series>,
    #[serde(rename = "wind-speed", default)]
    wind_speed: Vec<Series>,
    #[serde(default)]
    pressure: Vec<Series>,
    #[serde(rename = "wordedForecast", default)]
    worded_forecast: Vec<WordedForecast>,
}

#[derive(Debug, Default, Deserialize)]
struct Weather {
    #[serde(rename = "weather-conditions", default)]
    weather_conditions: Vec<WeatherConditions>,
}

#[derive(Debug, Default, Deserialize)]
struct WeatherConditions {
    #[serde(rename = "@weather-summary", default)]
    weather_summary: String,
    #[serde(default)]
    value: Vec<ConditionValue>,
}

#[derive(Debug, Default, Deserialize)]
struct ConditionValue {
    #[serde(default)]
    visibility: Vec<Text>,
}

#[derive(Debug, Default, Deserialize)]
struct WordedForecast {
    #[serde(default)]
    text: Vec<Text>,
}

/// Decode a DWML payload into a [`WeatherDocument`].
pub(crate) fn parse(bytes: &[u8]) -> Result<WeatherDocument> {
    let dwml: Dwml = xml::from_bytes(bytes, "forecast")?;
    Ok(dwml.into_document())
}

/// Overwrite `slot` with the last value of every series, if any.
fn last_value(slot: &mut String, series: Vec<Series>) {
    if let Some(text) = series.into_iter().flat_map(|s| s.value).last() {
        *slot = text.value;
    }
}

fn values(series: Vec<Series>) -> impl Iterator<Item = String> {
    series.into_iter().flat_map(|s| s.value).map(|t| t.value)
}

impl Dwml {
    fn into_document(self) -> WeatherDocument {
        let mut doc = WeatherDocument {
            issued_at: self
                .head
                .and_then(|h| h.product)
                .and_then(|p| p.creation_date.into_iter().last())
                .map(|t| t.value)
                .unwrap_or_default(),
            ..Default::default()
        };

        for data in self.data {
            for location in data.location {
                location.merge_into(&mut doc.place);
            }

            doc.periods.extend(
                data.time_layout
                    .into_iter()
                    .flat_map(|l| l.start_valid_time)
                    .map(|s| Period { label: s.period_name }),
            );

            for parameters in data.parameters {
                doc.temperatures.extend(values(parameters.temperature));
                doc.wind_speeds.extend(values(parameters.wind_speed));
                doc.narratives.extend(
                    parameters
                        .worded_forecast
                        .into_iter()
                        .flat_map(|w| w.text)
                        .map(|t| t.value),
                );
                doc.conditions.extend(
                    parameters
                        .weather
                        .into_iter()
                        .flat_map(|w| w.weather_conditions)
                        .map(WeatherConditions::into_condition),
                );

                last_value(&mut doc.humidity, parameters.humidity);
                last_value(&mut doc.wind_direction, parameters.direction);
                last_value(&mut doc.pressure, parameters.pressure);
            }
        }

        doc
    }
}

impl Location {
    fn merge_into(self, place: &mut Place) {
        if let Some(description) = self.description.into_iter().last() {
            place.primary = Some(description.value);
        }
        if let Some(area) = self.area_description.into_iter().last() {
            place.fallback = Some(area.value);
        }
    }
}

impl WeatherConditions {
    fn into_condition(self) -> Condition {
        Condition {
            summary: self.weather_summary,
            visibility: self
                .value
                .into_iter()
                .flat_map(|v| v.visibility)
                .last()
                .map(|t| t.value)
                .unwrap_or_default(),
        }
    }
}
