//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT. Log level via RUST_LOG.

use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    delete, get, post,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use match_scoreboard_web::{
    export_results_csv, MatchId, PairingMode, RandomIds, Scoreboard, ScoreboardError, ScoreboardId,
    Side,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-scoreboard entry: scoreboard data + last activity time (for auto-cleanup).
struct ScoreboardEntry {
    scoreboard: Scoreboard,
    last_activity: Instant,
}

/// In-memory state: scoreboards by id. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<ScoreboardId, ScoreboardEntry>>>;

/// Inactivity threshold: scoreboards not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// How often idle scoreboards are swept.
const SWEEP_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Cookie session key holding the browser's current scoreboard id.
const SESSION_SCOREBOARD: &str = "scoreboard_id";

/// Bind address, from env.
struct ServerConfig {
    host: String,
    port: u16,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateScoreboardBody {
    /// Team names, one per line.
    teams: String,
    #[serde(default)]
    mode: Option<PairingMode>,
    /// Older clients send a best-of-three checkbox instead of `mode`.
    #[serde(default)]
    best_of_three: Option<bool>,
}

impl CreateScoreboardBody {
    fn mode(&self) -> PairingMode {
        self.mode
            .or_else(|| self.best_of_three.map(PairingMode::from_best_of_three))
            .unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct PointBody {
    side: Side,
}

/// Path segment: scoreboard id (e.g. /api/scoreboards/{id})
#[derive(Deserialize)]
struct ScoreboardPath {
    id: ScoreboardId,
}

/// Path segments: scoreboard id and match id (e.g. /api/scoreboards/{id}/matches/{match_id})
#[derive(Deserialize)]
struct ScoreboardMatchPath {
    id: ScoreboardId,
    match_id: MatchId,
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

fn not_found(what: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": what }))
}

fn error_response(e: ScoreboardError) -> HttpResponse {
    match e {
        ScoreboardError::MatchNotFound(_) => not_found(&e.to_string()),
        ScoreboardError::NotEnoughTeams { .. } => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// Run `f` on a scoreboard (404 if not found). Touching it refreshes last_activity.
fn with_scoreboard<F>(state: &AppState, id: ScoreboardId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Scoreboard) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(&mut entry.scoreboard)
        }
        None => not_found("No scoreboard"),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "match-scoreboard-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a scoreboard from the team-name text and pair the teams. Remembered in the cookie session.
#[post("/api/scoreboards")]
async fn api_create_scoreboard(
    state: AppState,
    session: Session,
    body: Json<CreateScoreboardBody>,
) -> HttpResponse {
    let scoreboard = match Scoreboard::from_input(&body.teams, body.mode()) {
        Ok(s) => s,
        Err(e) => return error_response(e),
    };
    let id = scoreboard.id;
    log::info!(
        "Created scoreboard {} ({:?}, {} team(s), {} match(es))",
        id,
        scoreboard.mode,
        scoreboard.teams.len(),
        scoreboard.matches.len()
    );
    if let Err(e) = session.insert(SESSION_SCOREBOARD, id) {
        log::warn!("Could not remember scoreboard {} in session: {}", id, e);
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let response = HttpResponse::Ok().json(&scoreboard);
    g.insert(
        id,
        ScoreboardEntry {
            scoreboard,
            last_activity: Instant::now(),
        },
    );
    response
}

/// The scoreboard this browser created last (404 if none or expired).
#[get("/api/scoreboards/current")]
async fn api_current_scoreboard(state: AppState, session: Session) -> HttpResponse {
    match session.get::<ScoreboardId>(SESSION_SCOREBOARD) {
        Ok(Some(id)) => with_scoreboard(&state, id, |s| HttpResponse::Ok().json(s)),
        _ => not_found("No scoreboard"),
    }
}

#[get("/api/scoreboards/{id}")]
async fn api_get_scoreboard(state: AppState, path: Path<ScoreboardPath>) -> HttpResponse {
    with_scoreboard(&state, path.id, |s| HttpResponse::Ok().json(s))
}

/// Discard a scoreboard (the only way to start over with different teams).
#[delete("/api/scoreboards/{id}")]
async fn api_delete_scoreboard(
    state: AppState,
    session: Session,
    path: Path<ScoreboardPath>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if g.remove(&path.id).is_none() {
        return not_found("No scoreboard");
    }
    if let Ok(Some(current)) = session.get::<ScoreboardId>(SESSION_SCOREBOARD) {
        if current == path.id {
            session.remove(SESSION_SCOREBOARD);
        }
    }
    log::info!("Deleted scoreboard {}", path.id);
    HttpResponse::NoContent().finish()
}

/// Pair the same teams again with all scores reset.
#[post("/api/scoreboards/{id}/restart")]
async fn api_restart_scoreboard(state: AppState, path: Path<ScoreboardPath>) -> HttpResponse {
    with_scoreboard(&state, path.id, |s| {
        s.restart(&mut RandomIds, &mut rand::thread_rng());
        HttpResponse::Ok().json(s)
    })
}

#[get("/api/scoreboards/{id}/matches/{match_id}")]
async fn api_get_match(state: AppState, path: Path<ScoreboardMatchPath>) -> HttpResponse {
    with_scoreboard(&state, path.id, |s| match s.find_match(path.match_id) {
        Some(m) => HttpResponse::Ok().json(m),
        None => error_response(ScoreboardError::MatchNotFound(path.match_id)),
    })
}

/// Score one point for a side. Points on a finished match leave it unchanged.
#[post("/api/scoreboards/{id}/matches/{match_id}/points")]
async fn api_score_point(
    state: AppState,
    path: Path<ScoreboardMatchPath>,
    body: Json<PointBody>,
) -> HttpResponse {
    with_scoreboard(&state, path.id, |s| match s.score_point(path.match_id, body.side) {
        Ok(m) => HttpResponse::Ok().json(m),
        Err(e) => error_response(e),
    })
}

/// Results as a CSV download.
#[get("/api/scoreboards/{id}/results.csv")]
async fn api_export_results(state: AppState, path: Path<ScoreboardPath>) -> HttpResponse {
    with_scoreboard(&state, path.id, |s| match export_results_csv(s) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                "attachment; filename=\"results.csv\"",
            ))
            .body(csv),
        Err(e) => {
            log::error!("CSV export of scoreboard {} failed: {}", path.id, e);
            HttpResponse::InternalServerError().body("export error")
        }
    })
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("scoreboard".to_string())
        .cookie_secure(false)
        .build()
}

/// Page and API routes (static files are added in `main`).
fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(serve_index_async))
        .service(api_health)
        .service(favicon)
        .service(api_create_scoreboard)
        .service(api_current_scoreboard)
        .service(api_get_scoreboard)
        .service(api_delete_scoreboard)
        .service(api_restart_scoreboard)
        .service(api_get_match)
        .service(api_score_point)
        .service(api_export_results);
}

/// Every SWEEP_INTERVAL, remove scoreboards inactive for INACTIVITY_TIMEOUT.
async fn sweep_idle_scoreboards(state: AppState) {
    let mut interval = tokio::time::interval(SWEEP_INTERVAL);
    loop {
        interval.tick().await;
        let mut g = match state.write() {
            Ok(guard) => guard,
            Err(_) => continue,
        };
        let before = g.len();
        g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
        let removed = before - g.len();
        if removed > 0 {
            log::info!("Cleaned up {} inactive scoreboard(s) (no activity for 12h)", removed);
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state: AppState = Data::new(RwLock::new(HashMap::new()));
    actix_web::rt::spawn(sweep_idle_scoreboards(state.clone()));

    // Sessions do not outlive the process, so a per-process key is enough.
    let key = Key::generate();

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(key.clone()))
            .app_data(state.clone())
            .configure(routes)
            .service(Files::new("/static", "static"))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
