use lamesim::prelude::*;
use lamesim::util::TeeSink;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "lame_sweep",
    about = "Runs the Lame task of a thick-walled hyperelastic tube over a sweep of axial stretches"
)]
struct Options {
    /// JSON file with the configuration (defaults are used if absent)
    #[structopt(short, long)]
    config: Option<String>,

    /// Model name such as A2 or B5 (requires param1 and param2)
    #[structopt(short, long)]
    model: Option<String>,

    /// First material parameter (λ for A; μ for B)
    #[structopt(long)]
    param1: Option<f64>,

    /// Second material parameter (μ for A; β for B)
    #[structopt(long)]
    param2: Option<f64>,

    /// Output directory
    #[structopt(short, long)]
    out_dir: Option<String>,

    /// Prints the load steps
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> Result<(), StrError> {
    env_logger::init();

    // parse options
    let options = Options::from_args();

    // configuration
    let mut config = match &options.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::new(),
    };
    if let Some(name) = &options.model {
        let (param1, param2) = match (options.param1, options.param2) {
            (Some(p1), Some(p2)) => (p1, p2),
            _ => return Err("the model option requires param1 and param2"),
        };
        config.set_model_name(name, param1, param2)?;
    }
    if options.verbose {
        config.set_verbose(false, true)?;
    }
    config.validate()?;
    log::info!("\n{}", config);

    // run
    let out_dir = options.out_dir.as_deref().unwrap_or(DEFAULT_OUT_DIR);
    let mut text = TextReport::new(out_dir, &config)?;
    let mut results = SweepResults::new(&config);
    let mut sweep = StretchSweep::new(&config)?;
    let summary = {
        let sinks: Vec<&mut dyn ReportSink> = vec![&mut text, &mut results];
        let mut tee = TeeSink::new(sinks);
        sweep.run(&mut tee)?
    };
    text.flush()?;

    // JSON file next to the text report
    let path_json = text.path().with_extension("json");
    results.write(&path_json)?;

    // message
    let path_txt = format!("{}", text.path().display());
    let thin_line = format!("{:─^1$}", "", path_txt.len());
    println!("\n\n{}", thin_line);
    println!(
        "{} of {} steps reported ({} dropped, {} singular, {} not converged); the report file is:",
        summary.n_reported, summary.n_steps, summary.n_dropped, summary.n_singular, summary.n_not_converged
    );
    println!("{}", path_txt);
    println!("{}", path_json.display());
    println!("{}\n\n", thin_line);
    Ok(())
}
