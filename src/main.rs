use std::process::ExitCode;

use linked_bst::demo::{self, DemoConfig};
use log::error;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> demo::Result<()> {
    let config = DemoConfig::from_args(std::env::args().skip(1))?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = demo::run(&config, &mut rng)?;
    println!("{report}");
    Ok(())
}
