use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::utils::plot::{self, PlotOptions};
use crate::utils::progress::CliProgressHandler;
use crate::utils::selection;
use clashtrace::core::io::{collisions::ClashRegistry, frames, report};
use clashtrace::engine::catalog::FrameCatalog;
use clashtrace::engine::config::FollowConfigBuilder;
use clashtrace::engine::progress::ProgressReporter;
use clashtrace::workflows::follow;
use std::io::{BufWriter, Write};
use tracing::{info, warn};

pub fn run(args: Cli) -> Result<()> {
    info!("Loading collision list from {:?}", &args.collisions);
    let registry =
        ClashRegistry::read_from_path(&args.collisions).map_err(|e| CliError::FileParsing {
            path: args.collisions.clone(),
            source: e.into(),
        })?;
    info!("Processing {} collisions.", registry.len());

    info!("Loading frame index from {:?}", &args.dist);
    let all_frames =
        frames::read_frame_index_from_path(&args.dist).map_err(|e| CliError::FileParsing {
            path: args.dist.clone(),
            source: e.into(),
        })?;

    let selected = if args.check_all {
        selection::every_nth(&all_frames, args.freq)
    } else {
        selection::select_frames(&all_frames, args.min, args.max, args.freq)
    };
    if selected.is_empty() {
        return Err(CliError::Argument(format!(
            "No frames selected from '{}'; check --min/--max/--freq against the frame index",
            args.dist.display()
        )));
    }
    info!(
        selected = selected.len(),
        total = all_frames.len(),
        "Frame selection complete."
    );

    let config = FollowConfigBuilder::new()
        .frames_dir(args.frames.clone())
        .collision_threshold(args.thres)
        .build()
        .map_err(|e| CliError::Argument(e.to_string()))?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let catalog = FrameCatalog::load(&config.frames_dir, &selected, &reporter)?;

    let clashes = registry.clashes();
    let outcome = follow::run(&catalog, &clashes, &config, &reporter)?;
    let sorted = report::sort_transitions(outcome.found());
    if sorted.is_empty() {
        warn!("No transitions classified; nothing beyond the report header was written.");
    }

    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    report::write_transitions(sorted.clone(), catalog.residue_names(), &mut writer)?;
    writer.flush()?;

    if let Some(prefix) = &args.plotfile {
        info!("Writing gnuplot data and scripts with prefix {:?}", prefix);
        let options = PlotOptions {
            prefix: prefix.clone(),
            min_threshold: args.minthres,
            max_per_plot: args.max_plot,
            rmsd_min: args.min,
            rmsd_max: args.max,
        };
        plot::write_plots(&sorted, &selected, &options)?;
    }

    Ok(())
}
