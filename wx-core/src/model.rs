use crate::error::{Result, WxError};

/// Latitude/longitude exactly as the geocoding service spelled them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub lat: String,
    pub lon: String,
}

/// Location description with a secondary, area-level fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Place {
    pub primary: Option<String>,
    pub fallback: Option<String>,
}

impl Place {
    /// The primary description if non-empty, else the fallback.
    pub fn name(&self) -> &str {
        self.primary
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.fallback.as_deref())
            .unwrap_or_default()
    }
}

/// Half-day forecast period, e.g. "Today" or "Tonight".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Period {
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Condition {
    pub summary: String,
    /// Statute miles.
    pub visibility: String,
}

/// Decoded NWS DWML document. Every value is upstream text, untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherDocument {
    pub place: Place,
    pub issued_at: String,
    pub periods: Vec<Period>,
    /// Relative, percent.
    pub humidity: String,
    pub conditions: Vec<Condition>,
    /// Degrees true.
    pub wind_direction: String,
    /// Knots; gust first, then sustained.
    pub wind_speeds: Vec<String>,
    /// Inches of mercury.
    pub pressure: String,
    /// Fahrenheit; the observed temperature and the dew point come last.
    pub temperatures: Vec<String>,
    pub narratives: Vec<String>,
}

/// One row of the worded forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastRow<'a> {
    pub label: &'a str,
    pub text: &'a str,
}

/// Latest observation, picked out of the document's repeated values by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentConditions<'a> {
    pub summary: &'a str,
    pub temperature: &'a str,
    pub dew_point: &'a str,
    pub humidity: &'a str,
    pub visibility: &'a str,
    pub wind_gust: &'a str,
    pub wind_sustained: &'a str,
    pub pressure: &'a str,
}

impl WeatherDocument {
    /// Worded forecast rows.
    ///
    /// The document carries more period labels than narratives; only the
    /// first `narratives.len()` labels are paired, in order.
    pub fn forecast(&self) -> Result<Vec<ForecastRow<'_>>> {
        let n = self.narratives.len();
        let periods = self.periods.get(..n).ok_or_else(|| {
            WxError::Structural(format!(
                "{n} worded forecasts but only {} period names",
                self.periods.len()
            ))
        })?;

        Ok(periods
            .iter()
            .zip(&self.narratives)
            .map(|(period, text)| ForecastRow {
                label: period.label.as_str(),
                text: text.as_str(),
            })
            .collect())
    }

    /// Current observation.
    ///
    /// Upstream appends the observed temperature and then the dew point to the
    /// temperature series, lists gust before sustained wind speed, and keeps the
    /// observed weather summary and visibility at the same positions as those
    /// last two temperatures in the conditions list.
    pub fn current(&self) -> Result<CurrentConditions<'_>> {
        let t = self.temperatures.len();
        if t < 2 {
            return Err(WxError::Structural(format!(
                "expected at least 2 temperature values, found {t}"
            )));
        }
        if self.conditions.len() < t {
            return Err(WxError::Structural(format!(
                "expected at least {t} weather conditions, found {}",
                self.conditions.len()
            )));
        }
        let [wind_gust, wind_sustained, ..] = self.wind_speeds.as_slice() else {
            return Err(WxError::Structural(format!(
                "expected at least 2 wind speed values, found {}",
                self.wind_speeds.len()
            )));
        };

        Ok(CurrentConditions {
            summary: &self.conditions[t - 2].summary,
            temperature: &self.temperatures[t - 2],
            dew_point: &self.temperatures[t - 1],
            humidity: &self.humidity,
            visibility: &self.conditions[t - 1].visibility,
            wind_gust: wind_gust.as_str(),
            wind_sustained: wind_sustained.as_str(),
            pressure: &self.pressure,
        })
    }
}
