use std::path::PathBuf;

use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;

use crate::model::strategy_model::StrategyModel;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct InitArg {
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Seed for reproducible weights
    #[arg(long)]
    seed: Option<u64>,
}

pub(crate) fn run(arg: &InitArg) -> anyhow::Result<()> {
    let InitArg { output, seed } = arg;

    let model = match seed {
        Some(seed) => StrategyModel::untrained(&mut Pcg64Mcg::seed_from_u64(*seed)),
        None => StrategyModel::untrained(&mut rand::rng()),
    };
    model.save(output.as_deref())?;

    if let Some(path) = output {
        eprintln!("Untrained model saved successfully");
        eprintln!("  Path: {}", path.display());
        if let Some(seed) = seed {
            eprintln!("  Seed: {seed}");
        }
    }

    Ok(())
}
