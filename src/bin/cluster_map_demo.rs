use cluster_map::config::{self, RuntimeConfig};
use cluster_map::io::{load_label_font, load_rgba_image, save_rgba_image, write_json_file};
use cluster_map::{ClusterMapper, MapReport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config = config::load_config(&parse_args()?)?;

    let mut canvas = load_rgba_image(&config.input)?;
    let mut mapper = ClusterMapper::new(config.pipeline.resolve());
    if let Some(font_path) = &config.font {
        mapper = mapper.with_font(load_label_font(font_path)?);
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let report = mapper.process(&mut canvas, &mut rng);

    save_rgba_image(&canvas, &config.output.image_out)?;
    print_summary(&config, &report);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

fn parse_args() -> Result<PathBuf, String> {
    let mut args = env::args().skip(1);
    let mut config_path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                config_path = Some(PathBuf::from(
                    args.next().ok_or("--config requires a path")?,
                ));
            }
            "--help" | "-h" => {
                println!("Usage: cluster_map_demo --config <run.json>");
                std::process::exit(0);
            }
            other => return Err(format!("Unknown argument: {other}")),
        }
    }
    config_path.ok_or_else(|| "Missing required --config <run.json>".to_string())
}

fn print_summary(config: &RuntimeConfig, report: &MapReport) {
    println!("Cluster map summary");
    println!("  points sampled: {}", report.total_points);
    println!("  clusters drawn: {}", report.cluster_count);
    println!(
        "  clustered/dropped: {}/{}",
        report.clustered_points, report.dropped_points
    );
    println!(
        "  cluster sizes: {}..{}",
        report.min_cluster_size, report.max_cluster_size
    );
    println!("  latency_ms: {:.3}", report.latency_ms);
    println!("Map written to {}", config.output.image_out.display());
}
