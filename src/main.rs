use std::io;

use hoops_roster::config::Config;
use hoops_roster::console::Session;
use hoops_roster::domain::Team;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing on stderr so reports on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    tracing::info!(team = %config.team_name, "Scorekeeper started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(Team::with_name(config.team_name.as_str()), stdout.lock());
    session.run(stdin.lock(), &config.prompt)?;

    let team = session.into_team();
    println!();
    team.display_team_stats();
    tracing::info!(
        players = team.len(),
        fouls = team.team_fouls(),
        points = team.team_points(),
        "Scorekeeper finished"
    );

    Ok(())
}
