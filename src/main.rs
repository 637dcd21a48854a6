mod app;
mod prompting;
mod types;

#[tokio::main]
async fn main() {
    app::run().await;
}
