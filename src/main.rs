use clap::Parser;
use storefront_ui::cli::commands::{cmd_fields, cmd_render, cmd_run};
use storefront_ui::cli::config::{Cli, Commands, load_config};
use storefront_ui::trace::logger::TraceLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Trace file: CLI > config > disabled
    let tracer = match cli.trace.as_deref().or(config.trace.path.as_deref()) {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    match cli.command {
        Commands::Run {
            scenario,
            format,
            output,
        } => {
            let all_passed = cmd_run(
                &scenario,
                format.as_deref(),
                output.as_deref(),
                &config,
                cli.hide_delay_ms,
                &tracer,
                cli.verbose,
            )?;
            if cli.verbose > 0 {
                if let Some((path, written)) = tracer.summary() {
                    eprintln!("Wrote {} trace events to {}", written, path);
                }
            }
            if !all_passed {
                std::process::exit(1);
            }
        }
        Commands::Render { page, collection } => {
            cmd_render(&page, collection.as_deref(), &config, cli.verbose)?;
        }
        Commands::Fields { page } => {
            cmd_fields(&page, &config, cli.verbose)?;
        }
    }

    Ok(())
}
