#[tokio::main]
async fn main() {
    watchlist_be::start_server().await;
}
