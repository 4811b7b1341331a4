use crate::cli::Commands;
use crate::commands::find::Query;
use crate::commands::{add, delete, find, init};
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext) -> anyhow::Result<()> {
    match command {
        Commands::Init => init::run(ctx),
        Commands::Add {
            name,
            description,
            status,
            tag,
        } => add::run(name, description.as_deref(), status.as_deref(), tag, ctx),
        Commands::Get { pet_id } => find::run(Query::Id(*pet_id), ctx),
        Commands::List => find::run(Query::All, ctx),
        Commands::FindByStatus { status } => find::run(Query::Status(status), ctx),
        Commands::FindByTags { tags } => find::run(Query::Tags(tags), ctx),
        Commands::FindByTag { tag } => find::run(Query::Tag(tag), ctx),
        Commands::Delete { pet_id, api_key } => delete::run(*pet_id, api_key.as_deref(), ctx),
        Commands::Update { .. } | Commands::UpdateForm { .. } | Commands::UploadImage { .. } => {
            unreachable!("stub commands are answered in main")
        }
    }
}
