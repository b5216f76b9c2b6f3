#[tokio::main]
async fn main() {
    stoker::boot::boot().await;
}
