#[tokio::main]
async fn main() {
    if let Err(e) = confgate::run().await {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}
