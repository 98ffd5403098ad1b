use cabins_app::domain::cabins::{CabinsService, records::CabinId};
use clap::Args;

use crate::cli::StoreArgs;

use super::describe_error;

#[derive(Debug, Args)]
pub(crate) struct DeleteCabinArgs {
    #[command(flatten)]
    stores: StoreArgs,

    /// Id of the cabin to delete
    #[arg(long)]
    id: i64,
}

pub(crate) async fn run(args: DeleteCabinArgs) -> Result<String, String> {
    let context = args.stores.connect().await?;

    delete_cabin(context.cabins.as_ref(), CabinId::from_i64(args.id)).await
}

async fn delete_cabin(service: &dyn CabinsService, cabin: CabinId) -> Result<String, String> {
    service
        .delete_cabin(cabin)
        .await
        .map_err(|error| describe_error(&error))?;

    Ok(format!("deleted cabin {cabin}\n"))
}

#[cfg(test)]
mod tests {
    use cabins_app::domain::cabins::{CabinsServiceError, MockCabinsService};
    use mockall::predicate::eq;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn deletes_by_id() -> TestResult {
        let mut service = MockCabinsService::new();

        service
            .expect_delete_cabin()
            .once()
            .with(eq(CabinId::from_i64(9)))
            .returning(|_| Ok(()));

        let output = delete_cabin(&service, CabinId::from_i64(9)).await?;

        assert_eq!(output, "deleted cabin 9\n");

        Ok(())
    }

    #[tokio::test]
    async fn unknown_cabin_is_reported() {
        let mut service = MockCabinsService::new();

        service
            .expect_delete_cabin()
            .once()
            .returning(|_| Err(CabinsServiceError::NotFound));

        let result = delete_cabin(&service, CabinId::from_i64(9)).await;

        assert_eq!(result, Err("Cabin not found".to_string()));
    }
}
