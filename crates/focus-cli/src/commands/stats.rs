use clap::Subcommand;
use focus_core::store::SqliteStore;
use focus_core::StatsTracker;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Current streak and sessions-today view
    Show,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open()?;

    match action {
        StatsAction::Show => {
            let stats = StatsTracker::new(&store).load();
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}
