//! Basic example of using the SLS-PDP library.

use sls_pdp::config::Config;
use sls_pdp::problem::Problem;
use sls_pdp::utils::{format_duration, save_plan, SearchStatistics};
use std::env;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get instance path from command line or use default
    let args: Vec<String> = env::args().collect();
    let instance_path = if args.len() > 1 {
        &args[1]
    } else {
        "instances/pd-n20-v4.txt"
    };

    // Load problem
    println!("Loading problem from: {}", instance_path);
    let problem = Problem::from_file(instance_path)?;
    println!(
        "Loaded problem: {} with {} tasks and {} vehicles",
        problem.name,
        problem.tasks.len(),
        problem.vehicles.len()
    );

    // Configure algorithm
    let config = Config::new()
        .with_sls_probability(0.4)
        .with_max_loops(10_000)
        .with_max_cost_repetition(1_000)
        .with_time_limit(Duration::from_secs(30));

    // Create and run algorithm
    println!("Starting search (time limit: 30s)");
    let mut algorithm = sls_pdp::SlsAlgorithm::new(problem.clone(), config);
    let best_state = algorithm.run().clone();

    // Print results
    let stats = SearchStatistics::from_state(
        &best_state,
        &problem,
        algorithm.iterations,
        algorithm.run_time,
    );
    println!("Search completed in {}", format_duration(algorithm.run_time));
    println!("{}", stats.format());

    // Dump the per-vehicle plan as JSON
    let plans = best_state.vehicle_plans();
    println!("{}", serde_json::to_string_pretty(&plans)?);

    // Save solution
    let output_path = format!("{}.plan", problem.name);
    println!("Saving plan to: {}", output_path);
    save_plan(&best_state, &problem, &output_path)?;

    Ok(())
}
