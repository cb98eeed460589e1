use std::fmt;

use crate::{error::Result, model::WeatherDocument};

/// Which slice of the document to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Multi-day worded forecast.
    Forecast,
    /// Latest observation.
    Current,
}

impl View {
    pub fn render(self, doc: &WeatherDocument) -> Result<String> {
        match self {
            View::Forecast => ForecastPresenter.render(doc),
            View::Current => CurrentPresenter.render(doc),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            View::Forecast => "forecast",
            View::Current => "current conditions",
        })
    }
}

/// Read-only text view over a [`WeatherDocument`].
pub trait Presenter {
    fn render(&self, doc: &WeatherDocument) -> Result<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastPresenter;

#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentPresenter;

fn header(doc: &WeatherDocument) -> String {
    format!("{} @ {}\n", doc.place.name(), doc.issued_at)
}

impl Presenter for ForecastPresenter {
    fn render(&self, doc: &WeatherDocument) -> Result<String> {
        let rows = doc.forecast()?;

        let mut out = header(doc);
        for row in rows {
            out.push_str(&format!("{}: {}\n", row.label, row.text));
        }
        Ok(out)
    }
}

impl Presenter for CurrentPresenter {
    fn render(&self, doc: &WeatherDocument) -> Result<String> {
        let now = doc.current()?;

        let lines = [
            ("Summary", now.summary),
            ("Temperature (F)", now.temperature),
            ("Dew Point (F)", now.dew_point),
            ("Humidity", now.humidity),
            ("Visibility", now.visibility),
            ("Wind Gust (max, knots)", now.wind_gust),
            ("Wind Sustained (knots)", now.wind_sustained),
            ("Pressure (in)", now.pressure),
        ];

        let mut out = header(doc);
        for (label, value) in lines {
            out.push_str(&format!("  {label}: {value}\n"));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ErrorKind,
        model::tests::{condition, observed, periods, strings},
    };

    #[test]
    fn forecast_emits_one_line_per_narrative() {
        let mut doc = observed();
        doc.narratives = strings(&["sunny", "clear"]);
        doc.periods = periods(&["Today", "Tonight", "Monday"]);

        let text = ForecastPresenter.render(&doc).unwrap();

        assert_eq!(
            text,
            "Chico CA @ 2015-03-01T10:00:00-08:00\nToday: sunny\nTonight: clear\n"
        );
        assert!(!text.contains("Monday"));
    }

    #[test]
    fn forecast_without_narratives_is_just_the_header() {
        let mut doc = observed();
        doc.narratives.clear();

        let text = View::Forecast.render(&doc).unwrap();

        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn current_reports_positional_values() {
        let text = CurrentPresenter.render(&observed()).unwrap();

        assert_eq!(
            text,
            "Chico CA @ 2015-03-01T10:00:00-08:00\n  \
             Summary: Clear\n  \
             Temperature (F): 60\n  \
             Dew Point (F): 40\n  \
             Humidity: 58\n  \
             Visibility: 9\n  \
             Wind Gust (max, knots): 12\n  \
             Wind Sustained (knots): 5\n  \
             Pressure (in): 30.17\n"
        );
    }

    #[test]
    fn header_uses_fallback_place_verbatim() {
        let mut doc = observed();
        doc.place.primary = Some(String::new());

        let text = View::Current.render(&doc).unwrap();

        assert!(text.starts_with("Chico Municipal Airport @ 2015-03-01T10:00:00-08:00\n"));
    }

    #[test]
    fn current_with_one_temperature_is_structural() {
        let mut doc = observed();
        doc.temperatures = strings(&["40"]);
        doc.conditions = vec![condition("Clear", "10")];

        let err = View::Current.render(&doc).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Structural);
    }

    #[test]
    fn rendering_is_repeatable() {
        let doc = observed();

        for view in [View::Forecast, View::Current] {
            assert_eq!(view.render(&doc).unwrap(), view.render(&doc).unwrap());
        }
    }

    #[test]
    fn view_names_read_naturally() {
        assert_eq!(View::Forecast.to_string(), "forecast");
        assert_eq!(View::Current.to_string(), "current conditions");
    }
}
