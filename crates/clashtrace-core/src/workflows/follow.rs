use crate::core::models::clash::Clash;
use crate::core::models::transition::{FrameResult, Transition};
use crate::engine::catalog::FrameCatalog;
use crate::engine::config::FollowConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks::{classify, distance};
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The aggregate of a follow run.
///
/// `transitions` holds one slot per input clash, in input order regardless of
/// worker completion order; `None` marks a clash whose transition frame was not
/// found in the sampled range.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowOutcome {
    pub transitions: Vec<Option<Transition>>,
    pub misses: usize,
}

impl FollowOutcome {
    /// The non-absent transitions, still in input clash order.
    pub fn found(self) -> Vec<Transition> {
        self.transitions.into_iter().flatten().collect()
    }
}

/// Classifies every clash against the preloaded frame catalog.
///
/// Each per-clash task is pure and CPU-bound: it evaluates the minimal
/// inter-residue distance for every selected frame and applies the
/// category's scan rule. Tasks share only the read-only catalog, so the fan-out
/// needs no coordination; results are collected at index-stable slots.
///
/// A degenerate residue anywhere aborts the whole run. Classification misses
/// accumulate silently and are summarized once as a warning.
#[instrument(skip_all, name = "follow_workflow", fields(clashes = clashes.len()))]
pub fn run(
    catalog: &FrameCatalog,
    clashes: &[Clash],
    config: &FollowConfig,
    reporter: &ProgressReporter,
) -> Result<FollowOutcome, EngineError> {
    info!(
        clashes = clashes.len(),
        threshold = config.collision_threshold,
        "Checking collisions."
    );
    reporter.report(Progress::PhaseStart {
        name: "Checking collisions",
    });
    reporter.report(Progress::TaskStart {
        total_steps: clashes.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = clashes.iter();

    #[cfg(feature = "parallel")]
    let iterator = clashes.par_iter();

    let transitions: Vec<Option<Transition>> = iterator
        .map(|clash| {
            let result = follow_clash(catalog, clash, config.collision_threshold);
            reporter.report(Progress::TaskIncrement);
            result
        })
        .collect::<Result<_, _>>()?;

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    let misses = transitions.iter().filter(|t| t.is_none()).count();
    if misses > 0 {
        warn!(
            misses,
            "Transitions not found in frames. The sampling frequency may have \
             changed since clash detection, or the transition may occur out of range."
        );
    }
    info!(
        found = transitions.len() - misses,
        misses, "Collision check complete."
    );

    Ok(FollowOutcome { transitions, misses })
}

/// Builds one clash's full per-frame distance series and classifies it.
fn follow_clash(
    catalog: &FrameCatalog,
    clash: &Clash,
    threshold: f64,
) -> Result<Option<Transition>, EngineError> {
    let mut series = Vec::with_capacity(catalog.frames().len());
    for frame in catalog.frames() {
        let residues = catalog
            .residues(frame.id)
            .expect("catalog contains every selected frame");
        let result: FrameResult =
            distance::min_residue_distance(residues, clash.res1, clash.res2, *frame)?;
        series.push(result);
    }
    Ok(classify::classify(clash, &series, threshold))
}
