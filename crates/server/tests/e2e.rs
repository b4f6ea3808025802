use std::net::SocketAddr;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use models::db::DatabaseConfig;
use server::{routes, state::AppState};
use service::{runtime, seed};

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = runtime::open_store(&cfg).await?;
    let state = AppState::from_db(db);
    seed::seed_defaults(state.services.as_ref(), state.providers.as_ref()).await?;

    let app: Router = routes::build_router(state, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_book_a_seeded_maid() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    // The app's flow: pick a service, list its providers, book one.
    let services = c.get(format!("{}/api/services", app.base_url)).send().await?
        .json::<Vec<serde_json::Value>>().await?;
    assert_eq!(services.len(), 9);
    let maid = services.iter().find(|s| s["name"] == "Maid").expect("Maid service seeded");

    let providers = c.get(format!("{}/api/providers", app.base_url))
        .query(&[("serviceType", maid["name"].as_str().unwrap_or_default())])
        .send().await?
        .json::<Vec<serde_json::Value>>().await?;
    assert_eq!(providers.len(), 1);
    assert_eq!(providers[0]["name"], "Asha");

    let booking = json!({"providerId": providers[0]["id"], "service": "Maid", "time": "09:00"});
    let res = c.post(format!("{}/api/bookings", app.base_url)).json(&booking).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<serde_json::Value>().await?;
    assert_eq!(created["providerId"], providers[0]["id"]);
    assert_eq!(created["time"], "09:00");

    let listed = c.get(format!("{}/api/bookings", app.base_url)).send().await?
        .json::<Vec<serde_json::Value>>().await?;
    assert_eq!(listed, vec![created]);
    Ok(())
}
