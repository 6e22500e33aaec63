use lamesim::prelude::*;
use plotpy::{Curve, Plot};
use std::path::Path;

const OUT_DIR: &str = "/tmp/lamesim/demos";

fn main() -> Result<(), StrError> {
    // model B2 and model A4 with the reference geometry
    let configs = [
        ("B2", SampleParams::config_reference(SampleParams::param_model_b(), 2)),
        ("A4", SampleParams::config_reference(SampleParams::param_model_a(), 4)),
    ];

    // run the sweeps and draw the curves
    let mut plot = Plot::new();
    for (label, config) in &configs {
        let mut results = SweepResults::new(config);
        let mut sweep = StretchSweep::new(config)?;
        let summary = sweep.run(&mut results)?;
        println!("{}: {} of {} steps reported", label, summary.n_reported, summary.n_steps);
        let mut curve = Curve::new();
        curve.set_label(label).draw(&results.stretches(), &results.forces());
        plot.add(&curve);
    }
    plot.grid_and_labels("stretch $k$", "axial force $T_{zz}$").legend();

    // save figure
    let path = Path::new(OUT_DIR).join("plot_force_stretch.svg");
    plot.save(&path)?;
    println!("figure saved to {}", path.display());
    Ok(())
}
