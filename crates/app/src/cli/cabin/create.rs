use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use cabins_app::domain::cabins::{
    CabinsService, CabinsServiceError,
    data::{CabinForm, CabinImage},
    validation::validate,
};
use clap::Args;

use crate::cli::StoreArgs;

use super::{describe_error, render_cabin};

#[derive(Debug, Args)]
pub(crate) struct CreateCabinArgs {
    #[command(flatten)]
    stores: StoreArgs,

    /// Cabin name
    #[arg(long, default_value = "")]
    name: String,

    /// Maximum number of guests
    #[arg(long, default_value = "")]
    max_capacity: String,

    /// Regular price per night
    #[arg(long, default_value = "")]
    regular_price: String,

    /// Discount, at most the regular price
    #[arg(long, default_value = "0")]
    discount: String,

    /// Description for the website
    #[arg(long, default_value = "")]
    description: String,

    /// Path to the cabin photo
    #[arg(long)]
    image: Option<PathBuf>,
}

pub(crate) async fn run(args: CreateCabinArgs) -> Result<String, String> {
    let image = match args.image.as_deref() {
        Some(path) => Some(read_image(path).await?),
        None => None,
    };

    let form = CabinForm {
        name: args.name,
        max_capacity: args.max_capacity,
        regular_price: args.regular_price,
        discount: args.discount,
        description: args.description,
        image,
    };

    let stores = args.stores;

    submit(form, || async move {
        stores.connect().await.map(|context| context.cabins)
    })
    .await
}

/// Checks the form before `connect` is called, so field errors never wait on
/// the stores.
async fn submit<C, F>(form: CabinForm, connect: C) -> Result<String, String>
where
    C: FnOnce() -> F,
    F: Future<Output = Result<Arc<dyn CabinsService>, String>>,
{
    if let Err(errors) = validate(&form) {
        return Err(describe_error(&CabinsServiceError::Validation(errors)));
    }

    let cabins = connect().await?;

    create_cabin(cabins.as_ref(), form).await
}

async fn read_image(path: &Path) -> Result<CabinImage, String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|error| format!("failed to read image {}: {error}", path.display()))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let content_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    Ok(CabinImage {
        file_name,
        content_type,
        bytes,
    })
}

async fn create_cabin(service: &dyn CabinsService, form: CabinForm) -> Result<String, String> {
    let cabin = service
        .create_cabin(form)
        .await
        .map_err(|error| describe_error(&error))?;

    let mut output = "New cabin successfully created\n".to_string();

    render_cabin(&mut output, &cabin);

    Ok(output)
}
