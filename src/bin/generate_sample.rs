use std::path::PathBuf;

use serde_json::json;

use wxbench::data::loader::save_file;
use wxbench::{
    AxisSlice, DataConfig, DerivedVariable, EvalConfig, ExperimentConfig, Metric, PanelConfig,
    Paths, Region, Selection, VizConfig,
};

fn main() {
    env_logger::init();

    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_config.json"));

    let selection = Selection::new(
        [
            "geopotential",
            "temperature",
            "2m_temperature",
            "u_component_of_wind",
            "v_component_of_wind",
        ],
        AxisSlice::new("2020-01-01".to_string(), "2021-01-01".to_string()),
    )
    .with_levels(vec![500, 700, 850]);

    let paths = Paths::new(
        "gs://forecasts/hres_2020_64x32.zarr",
        "gs://observations/era5_64x32.zarr",
        "results",
    )
    .with_output_file_prefix("hres_vs_era5_")
    .with_climatology("gs://climatology/era5_1990-2019_64x32.zarr");

    let data = DataConfig::new(selection, paths).with_rename_variables([("t2m", "2m_temperature")]);

    let regions = [
        ("global", Region::Global),
        (
            "tropics",
            Region::Slice {
                lat_slice: AxisSlice::new(-20.0, 20.0),
                lon_slice: AxisSlice::full(),
            },
        ),
        ("extra-tropics", Region::extra_tropical()),
    ];

    let deterministic = EvalConfig::new([
        ("rmse", Metric::Rmse),
        ("acc", Metric::Acc),
        ("bias", Metric::Bias),
    ])
    .with_regions(regions.clone())
    .with_persistence(true)
    .with_climatology(true)
    .with_derived_variables(vec![DerivedVariable::WindSpeed {
        u_name: "u_component_of_wind".into(),
        v_name: "v_component_of_wind".into(),
    }]);

    let probabilistic = EvalConfig::new([
        ("crps", Metric::Crps),
        ("ensemble_mean_rmse", Metric::EnsembleMeanRmse),
    ])
    .with_regions(regions)
    .with_probabilistic_climatology(1990, 2019, 6);

    let viz = VizConfig::new([
        ("hres", "results/hres_vs_era5_deterministic.nc"),
        ("ens", "results/hres_vs_era5_probabilistic.nc"),
    ])
    .with_label("hres", "IFS HRES")
    .with_color("hres", "black")
    .with_layout(1, 2)
    .with_figsize(12, 4)
    .with_save_kwarg("dpi", json!(150));

    let config = ExperimentConfig::new(data)
        .with_eval("deterministic", deterministic)
        .with_eval("probabilistic", probabilistic)
        .with_viz(viz)
        .with_panel(
            PanelConfig::new("rmse", "geopotential")
                .with_level(500)
                .with_region("extra-tropics")
                .with_axis_labels("Lead time [days]", "RMSE [m²/s²]"),
        )
        .with_panel(
            PanelConfig::new("crps", "2m_temperature")
                .with_region("tropics")
                .with_ylim(0.0, 3.0),
        );

    save_file(&config, &output_path).expect("Failed to write sample config");

    println!(
        "Wrote {} eval config(s) and {} panel(s) to {}",
        config.eval.len(),
        config.panels.len(),
        output_path.display()
    );
}
