use challenge_rated::{
    args::Args,
    model::{decay::DecayTable, EncounterCalculator, Result},
    utils::output_utils::render
};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let encounter = args.encounter()?;

    let custom_table;
    let calculator = match &args.decay_table {
        Some(path) => {
            custom_table = DecayTable::from_file(path)?;
            EncounterCalculator::with_decay_table(&custom_table)
        }
        None => EncounterCalculator::new()?
    };

    info!(
        "Scoring {} wave(s) against a party of {} with {} allies",
        encounter.waves.len(),
        encounter.party_levels.len(),
        encounter.ally_challenge_ratings.len()
    );

    let summary = encounter.evaluate(&calculator)?;
    println!("{}", render(&summary, args.format)?);

    Ok(())
}
