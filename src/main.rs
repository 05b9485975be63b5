#[tokio::main]
async fn main() {
    if let Err(e) = decodify::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
