use haig_core::{questions, strategies};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct QuestionsArg {}

pub(crate) fn run(_arg: &QuestionsArg) {
    println!("Play-style questions:");
    for feature in questions() {
        println!("  {:<12} {}", feature.key(), feature.question());
    }

    println!();
    println!("Strategies:");
    for strategy in strategies() {
        println!("  {}: {}", strategy.id(), strategy.description());
    }
}
