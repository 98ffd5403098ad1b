use cabins_app::domain::cabins::CabinsService;
use clap::Args;

use crate::cli::StoreArgs;

use super::{describe_error, render_cabin};

#[derive(Debug, Args)]
pub(crate) struct ListCabinsArgs {
    #[command(flatten)]
    stores: StoreArgs,
}

pub(crate) async fn run(args: ListCabinsArgs) -> Result<String, String> {
    let context = args.stores.connect().await?;

    list_cabins(context.cabins.as_ref()).await
}

async fn list_cabins(service: &dyn CabinsService) -> Result<String, String> {
    let cabins = service
        .list_cabins()
        .await
        .map_err(|error| describe_error(&error))?;

    if cabins.is_empty() {
        return Ok("no cabins found\n".to_string());
    }

    let mut output = String::new();

    for cabin in &cabins {
        render_cabin(&mut output, cabin);
        output.push('\n');
    }

    Ok(output)
}
