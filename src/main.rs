use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;

use mergington_activities::store::ActivityStore;
use mergington_activities::web;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt::init();

    // All state lives in this process; restarts reset to the seed catalog.
    let store = ActivityStore::seeded();
    let app = web::app(store);

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("invalid HOST/PORT");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::warn!("could not bind {}: {}. trying {}:{}", addr, e, host, port + 1);
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("invalid fallback address");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("could not bind fallback port")
        }
    };

    let bound_addr = listener.local_addr().expect("listener has no local addr");
    println!("🚀 Mergington High School API on http://{}", bound_addr);
    println!("📍 Activities UI at http://{}/static/index.html", bound_addr);

    axum::serve(listener, app).await.expect("server error");
}
