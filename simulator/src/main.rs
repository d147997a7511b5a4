use anyhow::Context;
use clap::Parser;
use generator::profile::{build_session_from_config, GeneratorConfig};
use gui_bridge::bridge::GuiBridge;
use gui_bridge::model::ScreenModel;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::ViewerConfig;
use workflow::runner::Runner;

mod generator;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Rust-facing ECG viewer workflow driver")]
struct Args {
    /// Run a single offline session and emit a screen summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a viewer config from YAML
    #[arg(long)]
    viewer: Option<PathBuf>,
    #[arg(long, default_value_t = 400)]
    window_samples: usize,
    #[arg(long, default_value_t = 800.0)]
    plot_width: f32,
    #[arg(long, default_value_t = 4.0)]
    amplitude_span: f32,
    /// Samples per synthetic lead for the offline session
    #[arg(long, default_value_t = 1000)]
    samples_per_lead: usize,
    /// Keep the GUI bridge alive for incoming real-time sessions
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let viewer_config = if let Some(path) = args.viewer {
        ViewerConfig::load(path)?
    } else {
        ViewerConfig::from_args(args.window_samples, args.plot_width, args.amplitude_span)
    };

    let runner = Runner::new(viewer_config.clone());
    let gui_bridge = GuiBridge::new(Arc::new(runner.clone()));
    let generator_config = GeneratorConfig {
        samples_per_lead: args.samples_per_lead,
        ..Default::default()
    };
    let session = build_session_from_config(&generator_config)?;

    if args.offline {
        let result = runner.execute(&session)?;

        println!(
            "Offline run -> {} bpm, rhythm {}, quality {}%, {}",
            result.display.heart_rate_bpm,
            result.display.rhythm_label,
            result.display.quality_percent,
            result.display.risk_tier
        );
        for strip in &result.strips {
            println!(
                "  lead {}: {} points, grid {}",
                strip.label,
                strip.point_count(),
                strip.show_axis_grid
            );
        }

        let model = ScreenModel::from_workflow(&result, &session.result);
        gui_bridge.publish(&model)?;
        gui_bridge.publish_status("Offline screen ready.");

        let (derived, rejected) = runner.metrics_snapshot();
        log::info!("workflow metrics: derived {}, rejected {}", derived, rejected);

        let report = format!(
            "bpm={} rhythm={} quality={} risk={} strip_points={:?}\n",
            result.display.heart_rate_bpm,
            result.display.rhythm_label,
            result.display.quality_percent,
            result.display.risk_tier,
            result
                .strips
                .iter()
                .map(|strip| strip.point_count())
                .collect::<Vec<_>>()
        );
        let report_path = PathBuf::from("tools/data/offline_screen.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(report.as_bytes())?;
    }
    if args.serve {
        gui_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
