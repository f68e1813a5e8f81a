//! Barracks - Entry Point
//!
//! Command-line front to the evaluation engine: price a statline, reroll
//! random units or squads, and list the ability catalog.

use barracks::core::error::{BarracksError, Result};
use barracks::core::types::Locale;
use barracks::engine::{Archetype, EvaluationEngine, RulesetEngine};
use barracks::unit::{Rank, UnitStats};

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

#[derive(Parser)]
#[command(name = "barracks", about = "Escarmouche unit and squad balancing tools")]
struct Cli {
    /// Fixed RNG seed for reproducible generation
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a statline into a rank and point cost
    Evaluate {
        #[arg(long, default_value_t = 1)]
        health: u32,
        #[arg(long, default_value_t = 1)]
        range: u32,
        #[arg(long, default_value_t = 1)]
        r#move: u32,
        #[arg(long, default_value_t = 1)]
        power: u32,
        /// Ability id, repeatable (at most twice)
        #[arg(long = "ability")]
        abilities: Vec<String>,
    },
    /// Generate a random unit for a rank and archetype
    GenerateUnit {
        #[arg(long)]
        rank: String,
        #[arg(long, default_value = "balanced")]
        archetype: String,
    },
    /// Generate a full squad within the rank-point budget
    GenerateSquad,
    /// List the ability catalog
    Abilities {
        #[arg(long, default_value = "fr-FR")]
        locale: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "barracks=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let engine = match cli.seed {
        Some(seed) => RulesetEngine::with_seed(seed)?,
        None => RulesetEngine::new()?,
    };

    let rt = Runtime::new()?;
    rt.block_on(run(&engine, cli.command))
}

async fn run(engine: &RulesetEngine, command: Command) -> Result<()> {
    match command {
        Command::Evaluate {
            health,
            range,
            r#move,
            power,
            abilities,
        } => {
            let stats = build_stats(health, range, r#move, power, &abilities)?;
            let evaluation = engine.evaluate_unit(&stats).await?;
            println!("rank: {}", evaluation.rank);
            println!("cost: {}", evaluation.cost);
        }
        Command::GenerateUnit { rank, archetype } => {
            let rank = Rank::parse(&rank)?;
            let archetype = Archetype::parse(&archetype)?;
            let unit = engine.generate_unit(rank, archetype).await?;
            print_generated(&unit);
        }
        Command::GenerateSquad => {
            let squad = engine.generate_squad().await?;
            let limits = engine.limits();
            let total: u32 = squad.iter().map(|u| limits.rank_points(u.rank)).sum();
            for (index, unit) in squad.iter().enumerate() {
                println!("--- member {} ---", index + 1);
                print_generated(unit);
            }
            println!(
                "total rank points: {}/{}",
                total, limits.max_squad_rank_points
            );
        }
        Command::Abilities { locale } => {
            let locale = Locale::from_tag(&locale);
            for ability in engine.available_abilities(locale).await? {
                println!(
                    "{} ({} pts): {} - {}",
                    ability.id, ability.cost, ability.label, ability.description
                );
            }
        }
    }

    Ok(())
}

/// Assemble a statline from the command-line flags, rejecting values the
/// authoring rules would never allow (stats outside 1..=10, more than two
/// abilities, duplicates).
fn build_stats(
    health: u32,
    range: u32,
    movement: u32,
    power: u32,
    abilities: &[String],
) -> Result<UnitStats> {
    let stats = UnitStats {
        health,
        range,
        movement,
        power,
        abilities: abilities.iter().map(|id| id.as_str().into()).collect(),
    };
    if !stats.is_well_formed() {
        return Err(BarracksError::InvalidStats(format!(
            "health {} / range {} / move {} / power {} with {} abilities",
            health,
            range,
            movement,
            power,
            abilities.len()
        )));
    }
    Ok(stats)
}

fn print_generated(unit: &barracks::engine::GeneratedUnit) {
    println!("rank:      {}", unit.rank);
    println!("archetype: {}", unit.archetype);
    println!("cost:      {}", unit.cost);
    println!(
        "stats:     health {} / range {} / move {} / power {}",
        unit.stats.health, unit.stats.range, unit.stats.movement, unit.stats.power
    );
    if !unit.stats.abilities.is_empty() {
        let ids: Vec<&str> = unit.stats.abilities.iter().map(|a| a.as_str()).collect();
        println!("abilities: {}", ids.join(", "));
    }
}
