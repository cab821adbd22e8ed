use serde::{Deserialize, Serialize};

/// A variable computed from other variables before scoring.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DerivedVariable {
    WindSpeed { u_name: String, v_name: String },
    WindDivergence { u_name: String, v_name: String },
    WindVorticity { u_name: String, v_name: String },
    /// Precipitation accumulated over a fixed window from a running total.
    PrecipitationAccumulation {
        total_precipitation_name: String,
        accumulation_hours: u32,
    },
    ZonalEnergySpectrum { variable_name: String },
}

impl DerivedVariable {
    /// Name the computed variable is stored under.
    pub fn name(&self) -> String {
        match self {
            DerivedVariable::WindSpeed { .. } => "wind_speed".to_string(),
            DerivedVariable::WindDivergence { .. } => "divergence".to_string(),
            DerivedVariable::WindVorticity { .. } => "vorticity".to_string(),
            DerivedVariable::PrecipitationAccumulation {
                accumulation_hours,
                ..
            } => format!("total_precipitation_{accumulation_hours}hr"),
            DerivedVariable::ZonalEnergySpectrum { variable_name } => {
                format!("{variable_name}_zonal_power_spectrum")
            }
        }
    }

    /// Input variables that must be loaded to compute this one.
    pub fn base_variables(&self) -> Vec<&str> {
        match self {
            DerivedVariable::WindSpeed { u_name, v_name }
            | DerivedVariable::WindDivergence { u_name, v_name }
            | DerivedVariable::WindVorticity { u_name, v_name } => {
                vec![u_name.as_str(), v_name.as_str()]
            }
            DerivedVariable::PrecipitationAccumulation {
                total_precipitation_name,
                ..
            } => vec![total_precipitation_name.as_str()],
            DerivedVariable::ZonalEnergySpectrum { variable_name } => vec![variable_name.as_str()],
        }
    }
}
