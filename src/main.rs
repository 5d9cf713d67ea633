use clap::Parser;

mod fmt;
mod log;
mod model;
mod render;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "cu-log-viewer")]
#[command(about = "Render compute-unit measurement logs as tables", long_about = None)]
struct Cli {
    /// Path to the compute-unit log file (a JSON array of run records).
    /// Relative paths resolve against the current working directory.
    #[arg(long, default_value = "cu_logs.json")]
    log: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) Load the log. A missing file is recovered with an empty log.
    let runs = log::load_log_file(&cli.log)?;

    // 2) Render the first three runs in file order; the rest are omitted.
    for run in model::select_runs(&runs) {
        let view = model::build_run_view(run);
        print!("{}", render::render_run(&view));
    }

    Ok(())
}
