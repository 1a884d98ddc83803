/*---------- Imports ----------*/
use customer_records_api::config::Config;
use customer_records_api::handlers;
use customer_records_api::store::DynamoDbStore;
use customer_records_api::utils::logging;
use lambda_http::{service_fn, Error, IntoResponse, Request};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    let config = Config::from_env()?;
    let sdk_config = aws_config::load_from_env().await;
    let dynamodb_client = aws_sdk_dynamodb::Client::new(&sdk_config);
    let store = DynamoDbStore::new(dynamodb_client, config.table_name);

    info!(table = store.table_name(), "get-customer ready");

    let handler = service_fn(|request| handler_fn(&store, request));

    lambda_http::run(handler).await?;

    Ok(())
}

async fn handler_fn(store: &DynamoDbStore, request: Request) -> Result<impl IntoResponse, Error> {
    handlers::get::handle(store, request).await
}
