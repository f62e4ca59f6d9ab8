use std::path::PathBuf;

use haig_core::AlliancePosition;
use haig_evaluator::forward::{self, Evaluation};

use crate::{model::strategy_model::StrategyModel, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RecommendArg {
    /// Path to the model file (JSON format)
    #[arg(long)]
    model: PathBuf,
    /// Path to the match file with the play-style of every team (JSON format)
    #[arg(long = "match")]
    match_path: PathBuf,
    /// Your position in the match (Red 1, Red 2, Blue 1 or Blue 2)
    #[arg(long)]
    position: AlliancePosition,
    /// Also print the score of every strategy
    #[arg(long, default_value_t = false)]
    scores: bool,
}

pub(crate) fn run(arg: &RecommendArg) -> anyhow::Result<()> {
    let RecommendArg {
        model,
        match_path,
        position,
        scores,
    } = arg;

    let model = StrategyModel::open(model)?;
    let styles = util::read_match_file(match_path)?;
    let slots = styles.canonicalize(*position);

    let evaluation = forward::evaluate(&slots, &model.weights);
    present(&evaluation, *scores);
    Ok(())
}

pub(crate) fn present(evaluation: &Evaluation, show_scores: bool) {
    match evaluation.best {
        Some(strategy) => println!("The best strategy is {}.", strategy.description()),
        None => println!("No strategy selected."),
    }
    if show_scores {
        for (strategy, score) in evaluation.scores.iter() {
            println!("  {:>2} {score:>12.6}  {}", strategy.id(), strategy.name());
        }
    }
}
