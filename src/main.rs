// src/main.rs
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use anyhow::{Context, Result};
use log::info;
use signal_mapper::{
    render_heatmap_png, HeatmapPipeline, MapperConfig, SampleStore, SurveyFile, SyntheticSurvey,
};
// signal-mapper [SURVEY_JSON] [OUT_PNG]
fn main() -> Result<()> {
    env_logger::init();
    let mut args = std::env::args_os().skip(1);
    let survey_path = args.next().map(PathBuf::from);
    let png_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("heatmap.png"));
    let config = MapperConfig::load_or_default();
    let store = match &survey_path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open survey {}", path.display()))?;
            let survey = SurveyFile::read_from(file)
                .with_context(|| format!("cannot import survey {}", path.display()))?;
            let mut store = SampleStore::new(config.grid_size);
            store
                .import(&survey)
                .with_context(|| format!("cannot import survey {}", path.display()))?;
            store
        }
        None => {
            let survey = SyntheticSurvey::new(config.synthetic.clone(), config.grid_size);
            info!(
                "no survey given; simulating access point at {:?}",
                survey.access_point()
            );
            let mut pipeline = HeatmapPipeline::new(survey, SampleStore::new(config.grid_size));
            pipeline.pump_all().context("synthetic survey failed")?;
            let store = pipeline.into_store();
            let json_path = png_path.with_extension("json");
            let out = File::create(&json_path)
                .with_context(|| format!("cannot create {}", json_path.display()))?;
            store
                .export()
                .write_to(BufWriter::new(out))
                .context("cannot write survey file")?;
            info!("survey written to {}", json_path.display());
            store
        }
    };
    let grid = store.build_grid();
    let stats = grid.stats();
    info!(
        "{n}x{n} grid from {} samples: min {:.1} dBm, max {:.1} dBm, mean {:.1} dBm",
        store.len(),
        stats.min,
        stats.max,
        stats.mean,
        n = grid.size()
    );
    info!(
        "coverage at {} dBm: {:.0}%",
        config.coverage_threshold_dbm,
        grid.coverage(config.coverage_threshold_dbm) * 100.0
    );
    for (quality, cells) in grid.quality_histogram() {
        info!("  {:<9} {cells} cells", quality.label());
    }
    let png = render_heatmap_png(&grid, store.samples(), config.heatmap.clone())
        .context("cannot render heatmap")?;
    std::fs::write(&png_path, png)
        .with_context(|| format!("cannot write {}", png_path.display()))?;
    info!("heatmap written to {}", png_path.display());
    Ok(())
}
