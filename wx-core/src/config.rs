use crate::model::Coordinates;

/// ZIP code used when the caller does not name one (Chico, CA).
pub const DEFAULT_ZIP: &str = "95926";

const GEOCODE_URL: &str =
    "https://graphical.weather.gov/xml/SOAP_server/ndfdXMLclient.php?listZipCodeList={zip}";

const FORECAST_URL: &str =
    "https://forecast.weather.gov/MapClick.php?lat={lat}&lon={lon}&unit=0&lg=english&FcstType=dwml";

/// URL templates for the two upstream calls.
///
/// `geocode` takes a `{zip}` placeholder, `forecast` takes `{lat}` and `{lon}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub geocode: String,
    pub forecast: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocode: GEOCODE_URL.to_string(),
            forecast: FORECAST_URL.to_string(),
        }
    }
}

impl Endpoints {
    pub fn geocode_url(&self, zip: &str) -> String {
        self.geocode.replace("{zip}", zip)
    }

    pub fn forecast_url(&self, coordinates: &Coordinates) -> String {
        self.forecast
            .replace("{lat}", &coordinates.lat)
            .replace("{lon}", &coordinates.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocode_url_substitutes_zip() {
        let url = Endpoints::default().geocode_url("95926");

        assert!(url.ends_with("ndfdXMLclient.php?listZipCodeList=95926"));
    }

    #[test]
    fn forecast_url_keeps_coordinates_verbatim() {
        let coordinates = Coordinates {
            lat: "39.7301".into(),
            lon: "-121.8414".into(),
        };

        let url = Endpoints::default().forecast_url(&coordinates);

        assert_eq!(
            url,
            "https://forecast.weather.gov/MapClick.php?lat=39.7301&lon=-121.8414&unit=0&lg=english&FcstType=dwml"
        );
    }

    #[test]
    fn custom_templates_are_honoured() {
        let endpoints = Endpoints {
            geocode: "http://localhost/zip/{zip}".into(),
            forecast: "http://localhost/wx/{lat}/{lon}".into(),
        };
        let coordinates = Coordinates {
            lat: "1".into(),
            lon: "2".into(),
        };

        assert_eq!(endpoints.geocode_url("12345"), "http://localhost/zip/12345");
        assert_eq!(endpoints.forecast_url(&coordinates), "http://localhost/wx/1/2");
    }
}
