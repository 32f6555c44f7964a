//! Command-line driver for a single league season.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};
use env_logger::Env;
use log::{info, warn};

use league_core::constants::{DEFAULT_AWAY_GOAL_RATE, DEFAULT_HOME_GOAL_RATE, DEFAULT_MAX_GOALS};
use league_core::{make_rng, parse_goals, League, LeagueError, ScoreModel};

#[derive(Parser)]
#[command(name = "league")]
#[command(about = "Round-robin league fixtures and standings", long_about = None)]
struct Cli {
    /// Seed for the schedule shuffle and simulated scores (system entropy if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter every result by hand, showing the table after each match
    Play {
        /// Comma-separated team names (prompted for if omitted)
        #[arg(long, value_delimiter = ',')]
        teams: Vec<String>,
    },
    /// Play the whole season with random scores
    Simulate {
        /// Comma-separated team names
        #[arg(long, value_delimiter = ',', required = true)]
        teams: Vec<String>,
        /// Highest score per side for uniform scores
        #[arg(long, default_value_t = DEFAULT_MAX_GOALS)]
        max_goals: u32,
        /// Draw scores from Poisson distributions instead
        #[arg(long)]
        poisson: bool,
        #[arg(long, default_value_t = DEFAULT_HOME_GOAL_RATE)]
        home_rate: f64,
        #[arg(long, default_value_t = DEFAULT_AWAY_GOAL_RATE)]
        away_rate: f64,
    },
    /// Apply a results file (home,away,home_goals,away_goals per line)
    Results {
        /// Comma-separated team names
        #[arg(long, value_delimiter = ',', required = true)]
        teams: Vec<String>,
        #[arg(long)]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    match cli.command {
        Commands::Play { teams } => {
            let teams = if teams.is_empty() {
                prompt_roster(&mut input)?
            } else {
                teams
            };
            let mut league = build_league(&teams, cli.seed)?;
            print_fixtures(&league);
            play_interactively(&mut league, &mut input)?;
        }
        Commands::Simulate {
            teams,
            max_goals,
            poisson,
            home_rate,
            away_rate,
        } => {
            let model = if poisson {
                ScoreModel::poisson(home_rate, away_rate)?
            } else {
                ScoreModel::uniform(max_goals)
            };

            let mut league = build_league(&teams, cli.seed)?;
            print_fixtures(&league);

            let mut rng = make_rng(cli.seed);
            let results = league.simulate_season(&model, &mut rng)?;
            for (fixture, result) in league.fixtures().iter().zip(&results) {
                if let Some((home, away)) = league.fixture_names(fixture) {
                    println!("{} {}-{} {}", home, result.home_goals, result.away_goals, away);
                }
            }
            print_standings(&league);
        }
        Commands::Results { teams, file } => {
            let mut league = build_league(&teams, cli.seed)?;
            let applied = league.apply_results_file(&file)?;
            info!("applied {} results from {}", applied, file.display());
            print_standings(&league);
        }
    }

    Ok(())
}

fn build_league(teams: &[String], seed: Option<u64>) -> Result<League> {
    let mut league = League::new(teams.len())?;
    for name in teams {
        league.add_team(name.as_str())?;
    }
    league.generate_fixtures_seeded(seed)?;
    Ok(league)
}

fn prompt<R: BufRead>(input: &mut R, message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(eyre!("unexpected end of input"));
    }
    Ok(line.trim().to_string())
}

fn prompt_roster<R: BufRead>(input: &mut R) -> Result<Vec<String>> {
    let count: usize = loop {
        match prompt(input, "Enter the number of teams in the league: ")?.parse() {
            Ok(n) => break n,
            Err(_) => println!("Please enter a whole number."),
        }
    };

    let mut names = Vec::with_capacity(count);
    for i in 0..count {
        names.push(prompt(input, &format!("Enter the name of team {}: ", i + 1))?);
    }
    Ok(names)
}

fn prompt_goals<R: BufRead>(input: &mut R, team: &str) -> Result<u32> {
    loop {
        match parse_goals(&prompt(input, &format!("Goals for {}: ", team))?) {
            Ok(goals) => return Ok(goals),
            Err(e @ LeagueError::InvalidScore(_)) => warn!("{}", e),
            Err(e) => return Err(e.into()),
        }
    }
}

fn play_interactively<R: BufRead>(league: &mut League, input: &mut R) -> Result<()> {
    for index in 0..league.fixtures().len() {
        let fixture = league.fixtures()[index];
        let (home, away) = league
            .fixture_names(&fixture)
            .map(|(h, a)| (h.to_string(), a.to_string()))
            .ok_or(LeagueError::UnknownFixture(index))?;

        println!("Enter the result for the match between {} and {}", home, away);
        let home_goals = prompt_goals(input, &home)?;
        let away_goals = prompt_goals(input, &away)?;

        league.record_result(index, home_goals, away_goals)?;
        print_standings(league);
    }
    Ok(())
}

fn print_fixtures(league: &League) {
    println!("Fixtures generated:");
    for (i, fixture) in league.fixtures().iter().enumerate() {
        if let Some((home, away)) = league.fixture_names(fixture) {
            println!("Week {}: {} vs {}", i + 1, home, away);
        }
    }
}

fn print_standings(league: &League) {
    println!("League Standings:");
    for row in league.standings() {
        println!("{}", row);
    }
}
