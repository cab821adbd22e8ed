use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AxisSlice – a half-open range along one dataset axis
// ---------------------------------------------------------------------------

/// Half-open range `[start, stop)` along a single axis.
///
/// A missing bound does not restrict that side; with both bounds missing the
/// slice covers the entire axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisSlice<T> {
    pub start: Option<T>,
    pub stop: Option<T>,
}

impl<T> Default for AxisSlice<T> {
    fn default() -> Self {
        Self::full()
    }
}

impl<T> AxisSlice<T> {
    /// Unrestricted slice covering the whole axis.
    pub fn full() -> Self {
        Self {
            start: None,
            stop: None,
        }
    }

    pub fn new(start: T, stop: T) -> Self {
        Self {
            start: Some(start),
            stop: Some(stop),
        }
    }

    /// Everything from `start` onwards.
    pub fn starting_at(start: T) -> Self {
        Self {
            start: Some(start),
            stop: None,
        }
    }

    /// Everything before `stop`.
    pub fn until(stop: T) -> Self {
        Self {
            start: None,
            stop: Some(stop),
        }
    }

    /// Whether neither bound is set.
    pub fn is_unrestricted(&self) -> bool {
        self.start.is_none() && self.stop.is_none()
    }
}

impl<T: PartialOrd> AxisSlice<T> {
    /// Half-open membership test. Unset bounds never exclude a value.
    pub fn contains(&self, value: &T) -> bool {
        let above_start = self.start.as_ref().map_or(true, |s| value >= s);
        let below_stop = self.stop.as_ref().map_or(true, |s| value < s);
        above_start && below_stop
    }
}

// ---------------------------------------------------------------------------
// Selection – which part of a dataset to read
// ---------------------------------------------------------------------------

/// Subset of a dataset: variables, time range, pressure levels and a
/// latitude/longitude box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Variable names, in the order they should be processed.
    pub variables: Vec<String>,
    /// Time range expressed as opaque labels (e.g. `"2020-01-01"`).
    pub time_slice: AxisSlice<String>,
    /// Pressure levels in hPa; `None` keeps every level.
    #[serde(default)]
    pub levels: Option<Vec<i64>>,
    #[serde(default)]
    pub lat_slice: AxisSlice<f64>,
    #[serde(default)]
    pub lon_slice: AxisSlice<f64>,
}

impl Selection {
    pub fn new<I, S>(variables: I, time_slice: AxisSlice<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            variables: variables.into_iter().map(Into::into).collect(),
            time_slice,
            levels: None,
            lat_slice: AxisSlice::full(),
            lon_slice: AxisSlice::full(),
        }
    }

    pub fn with_levels(mut self, levels: Vec<i64>) -> Self {
        self.levels = Some(levels);
        self
    }

    pub fn with_lat_slice(mut self, lat_slice: AxisSlice<f64>) -> Self {
        self.lat_slice = lat_slice;
        self
    }

    pub fn with_lon_slice(mut self, lon_slice: AxisSlice<f64>) -> Self {
        self.lon_slice = lon_slice;
        self
    }

    /// Whether `level` is kept: always true when no levels are listed.
    pub fn selects_level(&self, level: i64) -> bool {
        self.levels
            .as_ref()
            .map_or(true, |levels| levels.contains(&level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year_2020() -> AxisSlice<String> {
        AxisSlice::new("2020-01-01".to_string(), "2021-01-01".to_string())
    }

    #[test]
    fn test_default_lat_lon_are_unrestricted() {
        let sel = Selection::new(["geopotential"], year_2020());
        assert!(sel.lat_slice.is_unrestricted());
        assert!(sel.lon_slice.is_unrestricted());
        assert_eq!(sel.levels, None);
    }

    #[test]
    fn test_default_slices_are_independent() {
        let mut a = Selection::new(["t2m"], year_2020());
        let b = Selection::new(["t2m"], year_2020());

        a.lat_slice.start = Some(-30.0);

        assert_eq!(a.lat_slice.start, Some(-30.0));
        assert!(b.lat_slice.is_unrestricted());
    }

    #[test]
    fn test_full_slice_is_not_empty() {
        let full: AxisSlice<f64> = AxisSlice::full();
        assert!(full.contains(&-90.0));
        assert!(full.contains(&0.0));
        assert!(full.contains(&90.0));
    }

    #[test]
    fn test_contains_is_half_open() {
        let s = AxisSlice::new(10.0, 20.0);
        assert!(s.contains(&10.0));
        assert!(s.contains(&19.99));
        assert!(!s.contains(&20.0));
        assert!(!s.contains(&9.0));

        assert!(AxisSlice::starting_at(5).contains(&1000));
        assert!(!AxisSlice::until(5).contains(&5));
    }

    #[test]
    fn test_selects_level() {
        let all = Selection::new(["temperature"], year_2020());
        assert!(all.selects_level(850));

        let some = all.with_levels(vec![500, 850]);
        assert!(some.selects_level(500));
        assert!(!some.selects_level(700));
    }

    #[test]
    fn test_fields_read_back_unchanged() {
        let sel = Selection::new(["u", "v", "u"], year_2020())
            .with_levels(vec![1000, 250])
            .with_lat_slice(AxisSlice::new(-20.0, 20.0))
            .with_lon_slice(AxisSlice::until(180.0));

        assert_eq!(sel.variables, vec!["u", "v", "u"]);
        assert_eq!(sel.time_slice, year_2020());
        assert_eq!(sel.levels, Some(vec![1000, 250]));
        assert_eq!(sel.lat_slice, AxisSlice::new(-20.0, 20.0));
        assert_eq!(sel.lon_slice, AxisSlice::until(180.0));
    }
}
