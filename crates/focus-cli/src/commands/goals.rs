use clap::Subcommand;
use focus_core::store::SqliteStore;
use focus_core::GoalList;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum GoalsAction {
    /// Add a goal
    Add {
        /// Goal text
        text: Vec<String>,
    },
    /// List all goals as JSON
    List,
    /// Toggle a goal's completed flag
    Toggle {
        /// Goal id
        id: Uuid,
    },
    /// Remove a goal
    Remove {
        /// Goal id
        id: Uuid,
    },
}

pub fn run(action: GoalsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open()?;
    let goals = GoalList::new(&store);

    match action {
        GoalsAction::Add { text } => {
            let goal = goals.add(&text.join(" "))?;
            println!("{}", serde_json::to_string_pretty(&goal)?);
        }
        GoalsAction::List => {
            let list = goals.load();
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
        GoalsAction::Toggle { id } => match goals.toggle(id)? {
            Some(goal) => println!("{}", serde_json::to_string_pretty(&goal)?),
            None => {
                eprintln!("no goal with id {id}");
                std::process::exit(1);
            }
        },
        GoalsAction::Remove { id } => {
            if goals.remove(id)? {
                println!("removed");
            } else {
                eprintln!("no goal with id {id}");
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
