//! Single binary web server: cup bracket, league player and match pages as JSON, static assets.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT, CUP_FIXTURE,
//! LEAGUE_FIXTURE, STATIC_DIR.

use actix_files::Files;
use actix_web::{
    get,
    http::header::{CacheControl, CacheDirective},
    web::{Data, Path},
    App, HttpResponse, HttpServer, Responder,
};
use cup_site_web::{
    cup_page, league_players, load_cup_document, load_document, match_report, player_profile,
    write_stats_csv, FixtureDocument, SiteConfig,
};
use serde::Deserialize;

/// App state: read-only configuration. Fixtures are re-read on every request.
type AppState = Data<SiteConfig>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Path segment: player slug (e.g. /api/players/{slug})
#[derive(Deserialize)]
struct PlayerPath {
    slug: String,
}

/// Path segment: match id (e.g. /api/matches/{id})
#[derive(Deserialize)]
struct MatchPath {
    id: String,
}

fn no_store() -> CacheControl {
    CacheControl(vec![CacheDirective::NoStore])
}

fn error_json(mut builder: actix_web::HttpResponseBuilder, message: &str) -> HttpResponse {
    builder
        .insert_header(no_store())
        .json(serde_json::json!({ "error": message }))
}

/// Load the league fixture, or the error response to send instead.
async fn league_document(state: &SiteConfig, page: &str) -> Result<FixtureDocument, HttpResponse> {
    load_document(&state.league_fixture).await.map_err(|e| {
        log::error!("Failed to load {} data: {}", page, e);
        error_json(
            HttpResponse::InternalServerError(),
            &format!("Error loading {} data.", page),
        )
    })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "cup-site-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Cup page: outer slots, bracket cards, resolved matches and fixture list.
/// Never fails: an unreadable fixture is replaced by the fallback document.
#[get("/api/cup")]
async fn api_cup(state: AppState) -> HttpResponse {
    let doc = load_cup_document(&state.cup_fixture).await;
    HttpResponse::Ok()
        .insert_header(no_store())
        .json(cup_page(&doc))
}

/// All league players with recomputed counters.
#[get("/api/players")]
async fn api_players(state: AppState) -> HttpResponse {
    let doc = match league_document(&state, "player").await {
        Ok(doc) => doc,
        Err(resp) => return resp,
    };
    HttpResponse::Ok()
        .insert_header(no_store())
        .json(league_players(&doc))
}

/// League player stats as CSV.
#[get("/api/players.csv")]
async fn api_players_csv(state: AppState) -> HttpResponse {
    let doc = match league_document(&state, "player").await {
        Ok(doc) => doc,
        Err(resp) => return resp,
    };
    let mut body = Vec::new();
    if let Err(e) = write_stats_csv(&league_players(&doc), &mut body) {
        log::error!("Failed to write stats CSV: {}", e);
        return error_json(HttpResponse::InternalServerError(), "Error writing stats.");
    }
    HttpResponse::Ok()
        .insert_header(no_store())
        .content_type("text/csv; charset=utf-8")
        .body(body)
}

/// Player profile by name slug (404 if not found).
#[get("/api/players/{slug}")]
async fn api_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let doc = match league_document(&state, "player").await {
        Ok(doc) => doc,
        Err(resp) => return resp,
    };
    match player_profile(&doc, &path.slug) {
        Some(profile) => HttpResponse::Ok().insert_header(no_store()).json(profile),
        None => error_json(HttpResponse::NotFound(), "Player not found"),
    }
}

/// Match report by id (404 if not found).
#[get("/api/matches/{id}")]
async fn api_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let doc = match league_document(&state, "match").await {
        Ok(doc) => doc,
        Err(resp) => return resp,
    };
    match match_report(&doc, &path.id) {
        Some(report) => HttpResponse::Ok().insert_header(no_store()).json(report),
        None => error_json(HttpResponse::NotFound(), "Match not found."),
    }
}

async fn serve_index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "pages": ["/api/cup", "/api/players", "/api/players/{slug}", "/api/matches/{id}"]
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = SiteConfig::from_env();
    log::info!(
        "Starting server at http://{}:{} (cup fixture {}, league fixture {})",
        config.host,
        config.port,
        config.cup_fixture.display(),
        config.league_fixture.display()
    );
    let bind = (config.host.clone(), config.port);
    let static_dir = config.static_dir.clone();
    let state = Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", actix_web::web::get().to(serve_index))
            .service(api_health)
            .service(favicon)
            .service(api_cup)
            .service(api_players_csv)
            .service(api_players)
            .service(api_player)
            .service(api_match)
            .service(Files::new("/assets", static_dir.clone()))
    })
    .bind(bind)?
    .run()
    .await
}
