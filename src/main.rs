#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pmajay_portal::app::run().await
}
