use crate::infra::{init_command, load_history};
use clap::Args;
use std::path::PathBuf;
use tracing::info;
use voyage_rating::error::AppError;
use voyage_rating::species::{self, Bird};
use voyage_rating::voyage::{
    bulk_breakdowns, select_rating, HistoryEntry, RatingBreakdown, Voyage, VoyageImporter,
};

#[derive(Args, Debug)]
pub(crate) struct RateArgs {
    /// Route of the planned voyage (e.g. china, east-indies)
    #[arg(long)]
    pub(crate) zone: String,
    /// Voyage length; omit when not yet known
    #[arg(long)]
    pub(crate) length: Option<u32>,
    /// Captain history CSV with `zone,profit` columns
    #[arg(long)]
    pub(crate) history: Option<PathBuf>,
    /// Print the intermediate risk and profit quantities
    #[arg(long)]
    pub(crate) explain: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Voyage CSV with `name,zone,length` columns
    #[arg(long)]
    pub(crate) voyages: PathBuf,
    /// Captain history CSV shared by every voyage in the batch
    #[arg(long)]
    pub(crate) history: Option<PathBuf>,
    /// Print the intermediate risk and profit quantities
    #[arg(long)]
    pub(crate) explain: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BirdArgs {
    /// JSON array of birds (`name`, `type`, `numberOfCoconuts`, `voltage`, `isNailed`)
    #[arg(long)]
    pub(crate) input: PathBuf,
}

pub(crate) fn run_rate(args: RateArgs) -> Result<(), AppError> {
    let RateArgs {
        zone,
        length,
        history,
        explain,
    } = args;

    let config = init_command()?;
    let mut voyage = Voyage::new(zone.as_str(), length);
    let mut history = load_history(history.as_deref())?;

    if config.rating.normalize_zones {
        voyage.normalize_zone();
        history.iter_mut().for_each(HistoryEntry::normalize_zone);
    }

    let breakdown = select_rating(&voyage, &history).breakdown();
    info!(zone = %voyage.zone, grade = %breakdown.grade, "voyage rated");

    println!("{}", breakdown.grade);
    if explain {
        render_breakdown(&breakdown, "");
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs {
        voyages,
        history,
        explain,
    } = args;

    let config = init_command()?;
    let history = load_history(history.as_deref())?;
    let mut requests = VoyageImporter::voyages_from_path(voyages, &history)?;

    if config.rating.normalize_zones {
        requests
            .iter_mut()
            .for_each(|request| request.normalize_zones());
    }

    let breakdowns = bulk_breakdowns(&requests);
    info!(voyages = breakdowns.len(), "batch rated");

    for (name, breakdown) in &breakdowns {
        println!("{}: {}", name, breakdown.grade);
        if explain {
            render_breakdown(breakdown, "  ");
        }
    }

    Ok(())
}

pub(crate) fn run_birds(args: BirdArgs) -> Result<(), AppError> {
    init_command()?;
    let raw = std::fs::read_to_string(args.input)?;
    let birds: Vec<Bird> = serde_json::from_str(&raw)?;

    let plumages = species::plumages(&birds);
    let speeds = species::speeds(&birds);

    for ((name, plumage), (_, speed)) in plumages.iter().zip(speeds.iter()) {
        match speed {
            Some(speed) => println!("{}: {} plumage, air speed {}", name, plumage, speed),
            None => println!("{}: {} plumage, air speed unknown", name, plumage),
        }
    }

    Ok(())
}

fn render_breakdown(breakdown: &RatingBreakdown, indent: &str) {
    println!("{indent}{}", breakdown.summary());
    println!("{indent}- voyage risk: {}", breakdown.voyage_risk);
    println!(
        "{indent}- captain history risk: {}",
        breakdown.captain_history_risk
    );
    println!(
        "{indent}- history length factor: {}",
        breakdown.history_length_factor
    );
    println!(
        "{indent}- voyage length factor: {}",
        breakdown.voyage_length_factor
    );
    println!(
        "{indent}- voyage profit factor: {}",
        breakdown.voyage_profit_factor
    );
}
