use clap::Subcommand;
use focus_core::store::SqliteStore;
use focus_core::sounds;

#[derive(Subcommand)]
pub enum SoundsAction {
    /// List the ambient playlist
    List,
    /// Select a track by id
    Select {
        /// Track id
        id: String,
    },
    /// Show the currently selected track
    Current,
}

pub fn run(action: SoundsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open()?;

    match action {
        SoundsAction::List => {
            println!("{}", serde_json::to_string_pretty(&sounds::PLAYLIST)?);
        }
        SoundsAction::Select { id } => match sounds::select(&store, &id)? {
            Some(track) => println!("{}", serde_json::to_string_pretty(&track)?),
            None => {
                eprintln!("no track with id {id}");
                std::process::exit(1);
            }
        },
        SoundsAction::Current => {
            let track = sounds::selected(&store);
            println!("{}", serde_json::to_string_pretty(&track)?);
        }
    }
    Ok(())
}
