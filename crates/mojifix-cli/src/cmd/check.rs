use clap::Args;

use crate::run::{process, Mode, TargetArgs};

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    process(&args.target, Mode::DryRun)
}
