use std::fmt::Write as _;

use cabins_app::domain::cabins::{CabinsServiceError, records::CabinRecord};
use clap::{Args, Subcommand};

mod create;
mod delete;
mod list;

#[derive(Debug, Args)]
pub(crate) struct CabinCommand {
    #[command(subcommand)]
    command: CabinSubcommand,
}

#[derive(Debug, Subcommand)]
enum CabinSubcommand {
    List(list::ListCabinsArgs),
    Create(create::CreateCabinArgs),
    Delete(delete::DeleteCabinArgs),
}

pub(crate) async fn run(command: CabinCommand) -> Result<String, String> {
    match command.command {
        CabinSubcommand::List(args) => list::run(args).await,
        CabinSubcommand::Create(args) => create::run(args).await,
        CabinSubcommand::Delete(args) => delete::run(args).await,
    }
}

fn render_cabin(output: &mut String, cabin: &CabinRecord) {
    _ = writeln!(output, "cabin_id: {}", cabin.id);
    _ = writeln!(output, "name: {}", cabin.name);
    _ = writeln!(output, "max_capacity: {}", cabin.max_capacity);
    _ = writeln!(output, "regular_price: {}", cabin.regular_price);
    _ = writeln!(output, "discount: {}", cabin.discount);
    _ = writeln!(output, "description: {}", cabin.description);
    _ = writeln!(output, "image: {}", cabin.image_path);
    _ = writeln!(output, "created_at: {}", cabin.created_at);
}

/// Field errors become one `field: message` line each; store failures keep
/// their presentable message.
fn describe_error(error: &CabinsServiceError) -> String {
    match error {
        CabinsServiceError::Validation(errors) => errors
            .iter()
            .map(|error| format!("{}: {}", error.field, error.message))
            .collect::<Vec<_>>()
            .join("\n"),
        CabinsServiceError::RecordQuery(_)
        | CabinsServiceError::RecordCreate(_)
        | CabinsServiceError::ImageUpload(_)
        | CabinsServiceError::RecordDelete(_)
        | CabinsServiceError::NotFound => error.to_string(),
    }
}
