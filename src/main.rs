use lambda_runtime::{LambdaEvent, service_fn, tracing};
use lookup::runtime::LookupRuntime;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    tracing::init_default_subscriber();

    // Fails before serving if REGION or PRODUCT_TABLE is missing
    let runtime: &'static LookupRuntime = lookup::runtime::init().await?;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        runtime.invoke(event)
    }))
    .await
}
