use serde::Deserialize;

use crate::{
    error::{Result, WxError},
    model::Coordinates,
    xml,
};

/// `<dwml><latLonList>39.7301,-121.8414</latLonList></dwml>`
#[derive(Debug, Deserialize)]
struct LatLonEnvelope {
    #[serde(rename = "latLonList", default)]
    lat_lon_list: String,
}

/// Reject anything that is not exactly five characters.
pub(crate) fn validate_zip(zip: &str) -> Result<()> {
    if zip.chars().count() != 5 {
        return Err(WxError::InvalidZip(zip.to_string()));
    }
    Ok(())
}

pub(crate) fn parse(bytes: &[u8]) -> Result<Coordinates> {
    let envelope: LatLonEnvelope = xml::from_bytes(bytes, "ZIP code lookup")?;
    split_lat_lon(&envelope.lat_lon_list)
}

fn split_lat_lon(list: &str) -> Result<Coordinates> {
    match list.split(',').collect::<Vec<_>>()[..] {
        [lat, lon] if !lat.is_empty() && !lon.is_empty() => Ok(Coordinates {
            lat: lat.to_string(),
            lon: lon.to_string(),
        }),
        _ => Err(WxError::LatLon(list.to_string())),
    }
}
