#[tokio::main]
async fn main() {
    // Errors are already logged where they happen.
    if shop_gateway::run_with_config().await.is_err() {
        std::process::exit(1);
    }
}
