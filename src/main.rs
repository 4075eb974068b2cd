use cpu_scheduling_sim::{
    config::SimulationConfig,
    input, logging,
    replay::{Replay, ReplayRunner},
    report, ProcessSet,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = SimulationConfig::from_args();
    logging::init(logging::level_for_verbosity(config.verbosity))?;

    let processes = match &config.input {
        Some(path) => input::load_process_file(path)?,
        None => ProcessSet::new(input::demo_processes())?,
    };

    // The whole schedule is computed before anything is displayed.
    let result = config.policy.run(&processes, config.selection)?;

    if config.headless {
        print!("{}", report::render(&result));
        return Ok(());
    }

    let mut runner = ReplayRunner::new(Replay::new(result), config.tick_rate)?;
    while runner.run()? {}

    Ok(())
}
