//! Single binary web server: stateless JSON API over the match scoring engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{get, post, web::Json, App, HttpResponse, HttpServer, Responder};
use golf_league_web::{score_team_match, validate_course, Hole, PlayerScoreInput};
use serde::Deserialize;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Everything needed to score one team match. Callers fetch these rows and persist the result.
#[derive(Deserialize)]
struct ScoreMatchBody {
    holes: Vec<Hole>,
    team_1: Vec<PlayerScoreInput>,
    team_2: Vec<PlayerScoreInput>,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "golf-league-web",
    })
}

/// Score a team match from hole data and both teams' scorecards.
#[post("/api/matches/score")]
async fn api_score_match(body: Json<ScoreMatchBody>) -> HttpResponse {
    let result = validate_course(&body.holes)
        .and_then(|()| score_team_match(&body.holes, &body.team_1, &body.team_2));
    match result {
        Ok(r) => HttpResponse::Ok().json(r),
        Err(e) => {
            log::warn!("Rejected match scoring request: {}", e);
            HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(|| App::new().service(api_health).service(api_score_match))
        .bind(bind)?
        .run()
        .await
}
