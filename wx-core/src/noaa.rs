use log::debug;

use crate::{
    config::Endpoints,
    error::Result,
    fetch::Fetcher,
    model::{Coordinates, WeatherDocument},
    present::View,
};

mod dwml;
mod geocode;

/// National Weather Service client: ZIP code lookup plus DWML forecast.
#[derive(Debug, Clone)]
pub struct NoaaClient<F> {
    fetcher: F,
    endpoints: Endpoints,
}

impl<F: Fetcher> NoaaClient<F> {
    pub fn new(fetcher: F, endpoints: Endpoints) -> Self {
        Self { fetcher, endpoints }
    }

    /// Resolve a five character ZIP code into coordinates.
    pub async fn resolve(&self, zip: &str) -> Result<Coordinates> {
        geocode::validate_zip(zip)?;

        let body = self.fetcher.fetch(&self.endpoints.geocode_url(zip)).await?;
        let coordinates = geocode::parse(&body)?;

        debug!("{zip} resolved to {},{}", coordinates.lat, coordinates.lon);
        Ok(coordinates)
    }

    /// Fetch and decode the DWML document for `coordinates`.
    pub async fn read(&self, coordinates: &Coordinates) -> Result<WeatherDocument> {
        let body = self.fetcher.fetch(&self.endpoints.forecast_url(coordinates)).await?;
        let doc = dwml::parse(&body)?;

        debug!(
            "decoded {} periods, {} narratives, {} temperatures",
            doc.periods.len(),
            doc.narratives.len(),
            doc.temperatures.len()
        );
        Ok(doc)
    }

    /// Full pipeline: ZIP code to rendered text.
    pub async fn report(&self, view: View, zip: &str) -> Result<String> {
        let coordinates = self.resolve(zip).await?;
        let doc = self.read(&coordinates).await?;
        view.render(&doc)
    }
}
