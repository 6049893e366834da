#[tokio::main]
async fn main() -> std::io::Result<()> {
    auth_portal::run_with_config().await
}
