use hermes_runner::{HermesConfig, SinkKind, build_scheduler, build_sink};

fn print_help() {
    eprintln!(
        r#"Hermes - crypto venue telemetry simulator

USAGE:
    hermes [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --ticks <N>         Stop after N events (default: run forever)
    --console           Print records to stdout instead of pushing to Loki
    --help              Print this help message

ENVIRONMENT VARIABLES:
    LOKI_URL            Loki push endpoint (default: http://localhost:3100/loki/api/v1/push)
    HERMES_JOB          Value of the job label (default: crypto-exchange)
    HERMES_SEED         Fixed RNG seed for reproducible runs
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    # Push to a local Loki forever
    hermes

    # Twenty events on stdout, reproducible
    HERMES_SEED=42 hermes --console --ticks 20

    # Run with config file
    hermes --config hermes.json
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut ticks: Option<u64> = None;
    let mut console = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            "--ticks" | "-n" => {
                i += 1;
                match args.get(i).and_then(|n| n.parse::<u64>().ok()) {
                    Some(n) => ticks = Some(n),
                    None => {
                        eprintln!("Error: --ticks requires a non-negative integer");
                        std::process::exit(1);
                    }
                }
            }
            "--console" => console = true,
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            HermesConfig::from_file(&path)?
        }
        None => HermesConfig::default(),
    }
    .apply_env()?;

    if console {
        config.sink.kind = SinkKind::Console;
    }
    if ticks.is_some() {
        config.schedule.max_ticks = ticks;
    }

    log::info!("Job: {}", config.sink.job);
    log::info!(
        "Delay: {}ms..={}ms",
        config.schedule.min_delay_ms,
        config.schedule.max_delay_ms
    );

    let sink = build_sink(&config)?;
    let scheduler = build_scheduler(&config, sink)?;
    let stats = scheduler.run().await?;

    log::info!(
        "Done: {} events, {} delivered, {} failed",
        stats.ticks,
        stats.delivered,
        stats.failed
    );
    Ok(())
}
