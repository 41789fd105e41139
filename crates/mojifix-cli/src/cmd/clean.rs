use clap::Args;

use crate::run::{process, Mode, TargetArgs};

#[derive(Args, Debug)]
pub struct CleanArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

pub fn run(args: CleanArgs) -> anyhow::Result<()> {
    process(&args.target, Mode::Write)
}
