use std::path::PathBuf;

use anyhow::Context;
use haig_core::AlliancePosition;
use haig_evaluator::forward;
use haig_training::adjuster::{DEFAULT_MAX_ITERATIONS, DEFAULT_STEP, Verdict, WeightAdjuster};

use crate::{command::recommend, model::strategy_model::StrategyModel, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TrainArg {
    /// Path to the model file (JSON format)
    #[arg(long)]
    model: PathBuf,
    /// Path to the match file with the play-style of every team (JSON format)
    #[arg(long = "match")]
    match_path: PathBuf,
    /// Your position in the match (Red 1, Red 2, Blue 1 or Blue 2)
    #[arg(long)]
    position: AlliancePosition,
    /// Whether the recommended strategy is good (good/bad, yes/no)
    #[arg(long)]
    verdict: Verdict,
    /// Weight change per adjustment step
    #[arg(long, default_value_t = DEFAULT_STEP)]
    step: f64,
    /// Give up after this many adjustment steps
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,
    /// Output file path (defaults to the model file)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Also print strategy scores before and after adjustment
    #[arg(long, default_value_t = false)]
    scores: bool,
}

pub(crate) fn run(arg: &TrainArg) -> anyhow::Result<()> {
    let TrainArg {
        model: model_path,
        match_path,
        position,
        verdict,
        step,
        max_iterations,
        output,
        scores,
    } = arg;
    anyhow::ensure!(
        step.is_finite() && *step > 0.0,
        "step must be a positive number, got {step}"
    );
    anyhow::ensure!(*max_iterations > 0, "max-iterations must be at least 1");

    let mut model = StrategyModel::open(model_path)?;
    let styles = util::read_match_file(match_path)?;
    let slots = styles.canonicalize(*position);

    let evaluation = forward::evaluate(&slots, &model.weights);
    recommend::present(&evaluation, *scores);
    let chosen = evaluation.best;

    let adjuster = WeightAdjuster {
        step: *step,
        max_iterations: *max_iterations,
    };
    let adjustment = adjuster
        .adjust(&slots, &model.weights, chosen, *verdict)
        .context("Adjustment discarded, model file left unchanged")?;

    eprintln!(
        "Adjusted weights for {verdict} verdict in {} iteration(s)",
        adjustment.iterations
    );
    if *scores {
        recommend::present(&adjustment.evaluation, true);
    }

    model.weights = adjustment.weights;
    model.last_evaluation = Some(adjustment.evaluation);
    let output_path = output.as_ref().unwrap_or(model_path);
    model.save(Some(output_path.as_path()))?;

    eprintln!();
    eprintln!("Model saved successfully");
    eprintln!("  Path: {}", output_path.display());
    match model.last_evaluation.as_ref().and_then(|e| e.best) {
        Some(strategy) => eprintln!("  Now recommending: {}", strategy.name()),
        None => eprintln!("  Now recommending: no strategy"),
    }

    Ok(())
}
