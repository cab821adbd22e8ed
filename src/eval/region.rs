use serde::{Deserialize, Serialize};

use crate::data::selection::AxisSlice;

fn default_threshold_lat() -> f64 {
    20.0
}

fn default_land_threshold() -> f64 {
    0.5
}

/// Spatial region over which scores are aggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Region {
    /// The whole globe, no masking.
    Global,
    /// Latitude/longitude box.
    Slice {
        #[serde(default)]
        lat_slice: AxisSlice<f64>,
        #[serde(default)]
        lon_slice: AxisSlice<f64>,
    },
    /// Everything poleward of `threshold_lat` in both hemispheres.
    ExtraTropical {
        #[serde(default = "default_threshold_lat")]
        threshold_lat: f64,
        #[serde(default)]
        lon_slice: AxisSlice<f64>,
    },
    /// Grid points whose land fraction exceeds `threshold`, optionally
    /// intersected with another region.
    Land {
        land_sea_mask: String,
        #[serde(default = "default_land_threshold")]
        threshold: f64,
        #[serde(default)]
        extra_region: Option<Box<Region>>,
    },
}

impl Region {
    pub fn extra_tropical() -> Self {
        Region::ExtraTropical {
            threshold_lat: default_threshold_lat(),
            lon_slice: AxisSlice::full(),
        }
    }

    pub fn land(land_sea_mask: impl Into<String>) -> Self {
        Region::Land {
            land_sea_mask: land_sea_mask.into(),
            threshold: default_land_threshold(),
            extra_region: None,
        }
    }

    /// Whether a grid point falls inside the region.
    ///
    /// Slice bounds are half-open: a point on the `stop` latitude or
    /// longitude is outside, so a `-20..20` box leaves out the 20° row.
    /// Returns `None` for land regions, which need the mask values.
    pub fn contains_point(&self, lat: f64, lon: f64) -> Option<bool> {
        match self {
            Region::Global => Some(true),
            Region::Slice {
                lat_slice,
                lon_slice,
            } => Some(lat_slice.contains(&lat) && lon_slice.contains(&lon)),
            Region::ExtraTropical {
                threshold_lat,
                lon_slice,
            } => Some(lat.abs() >= *threshold_lat && lon_slice.contains(&lon)),
            Region::Land { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_contains_everything() {
        assert_eq!(Region::Global.contains_point(-90.0, 359.0), Some(true));
    }

    #[test]
    fn test_slice_region() {
        let tropics = Region::Slice {
            lat_slice: AxisSlice::new(-20.0, 20.0),
            lon_slice: AxisSlice::full(),
        };
        assert_eq!(tropics.contains_point(0.0, 100.0), Some(true));
        assert_eq!(tropics.contains_point(45.0, 100.0), Some(false));
    }

    #[test]
    fn test_slice_region_excludes_stop_bound() {
        let tropics = Region::Slice {
            lat_slice: AxisSlice::new(-20.0, 20.0),
            lon_slice: AxisSlice::full(),
        };
        assert_eq!(tropics.contains_point(-20.0, 0.0), Some(true));
        assert_eq!(tropics.contains_point(20.0, 0.0), Some(false));
    }

    #[test]
    fn test_extra_tropical_region() {
        let region = Region::extra_tropical();
        assert_eq!(region.contains_point(20.0, 0.0), Some(true));
        assert_eq!(region.contains_point(-60.0, 0.0), Some(true));
        assert_eq!(region.contains_point(10.0, 0.0), Some(false));
    }

    #[test]
    fn test_land_region_needs_mask() {
        assert_eq!(Region::land("lsm.zarr").contains_point(50.0, 10.0), None);
    }

    #[test]
    fn test_defaults_applied_on_parse() {
        let parsed: Region =
            serde_json::from_str(r#"{"type": "land", "land_sea_mask": "gs://lsm.zarr"}"#).unwrap();
        assert_eq!(parsed, Region::land("gs://lsm.zarr"));

        let parsed: Region = serde_json::from_str(r#"{"type": "extra_tropical"}"#).unwrap();
        assert_eq!(parsed, Region::extra_tropical());
    }
}
