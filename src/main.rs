use anyhow::Context;
use orders_contract::{
    check::{render_payload, verify_order_list, CheckOutcome},
    client::OrdersClient,
    configuration::get_configuration,
    telemetry::{get_subscriber, init_subscriber},
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let subscriber = get_subscriber("orders-contract".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration")?;
    let timeout = configuration.orders_api.timeout();
    let client = OrdersClient::new(configuration.orders_api.base_url, timeout);

    tracing::info!("Checking order list contract at {}", client.base_url());

    match verify_order_list(&client).await? {
        CheckOutcome::Passed { payload } => {
            println!("Response: {}", render_payload(&payload)?);
            Ok(ExitCode::SUCCESS)
        }
        CheckOutcome::Violation(violation) => {
            println!("Order list check failed: {violation}");
            tracing::error!("Contract violation: {violation}");
            Ok(ExitCode::FAILURE)
        }
    }
}
