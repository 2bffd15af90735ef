//! Single binary web server exposing the fixture pipeline as a JSON API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).
//!
//! The server keeps no tournament state: every request carries its own snapshot.

use actix_web::{
    get, post,
    web::{self, Json},
    App, HttpResponse, HttpServer, Responder,
};
use evita_fixture::{
    assign_days_and_schedule, build_day_configs_from_strings, build_fixture, from_records,
    generate_bracket, read_teams_csv, renumber_matches, to_records, validate_references,
    BracketOptions, DayConfig, DayWindow, Field, FixtureError, FixtureResponse, FormatProfile,
    MatchRecord, ScheduleOptions, ScheduleReport, Team, TournamentSnapshot,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayConfigsBody {
    date_start: String,
    date_end: String,
    #[serde(default)]
    window: Option<DayWindow>,
    /// Existing days whose overrides are kept by date.
    #[serde(default)]
    previous: Vec<DayConfig>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BracketBody {
    teams: Vec<Team>,
    #[serde(default)]
    double_round: bool,
}

fn default_format() -> String {
    FormatProfile::default().to_string()
}

fn default_duration() -> u32 {
    ScheduleOptions::default().match_duration_minutes
}

fn default_rest() -> u32 {
    ScheduleOptions::default().rest_min_minutes
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleBody {
    matches: Vec<MatchRecord>,
    day_configs: Vec<DayConfig>,
    #[serde(default)]
    fields: Vec<Field>,
    #[serde(default = "default_format")]
    format: String,
    #[serde(default = "default_duration")]
    match_duration_minutes: u32,
    #[serde(default = "default_rest")]
    rest_min_minutes: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleResponse {
    matches: Vec<MatchRecord>,
    report: ScheduleReport,
}

#[derive(Deserialize)]
struct RenumberBody {
    matches: Vec<MatchRecord>,
}

fn bad_request(e: FixtureError) -> HttpResponse {
    log::info!("Rejected request: {}", e);
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "evita-fixture",
    })
}

/// Build the day list for a date range, keeping overrides of days already configured.
#[post("/api/day-configs")]
async fn api_day_configs(body: Json<DayConfigsBody>) -> HttpResponse {
    let window = body.window.unwrap_or_default();
    match build_day_configs_from_strings(&body.date_start, &body.date_end, &window, &body.previous) {
        Ok(days) => HttpResponse::Ok().json(days),
        Err(e) => bad_request(e),
    }
}

/// Parse a roster CSV (request body) into teams.
#[post("/api/teams/csv")]
async fn api_teams_csv(body: String) -> HttpResponse {
    match read_teams_csv(body.as_bytes()) {
        Ok(teams) => HttpResponse::Ok().json(teams),
        Err(e) => bad_request(e),
    }
}

/// Full pipeline: generate, anchor days, schedule, renumber.
#[post("/api/fixtures")]
async fn api_build_fixture(body: Json<TournamentSnapshot>) -> HttpResponse {
    match build_fixture(&body) {
        Ok(fixture) => HttpResponse::Ok().json(FixtureResponse::from(&fixture)),
        Err(e) => bad_request(e),
    }
}

/// Generation stage only: abstract matches with structural codes.
#[post("/api/fixtures/bracket")]
async fn api_generate_bracket(body: Json<BracketBody>) -> HttpResponse {
    let options = BracketOptions {
        double_round: body.double_round,
    };
    match generate_bracket(&body.teams, options) {
        Ok(matches) => HttpResponse::Ok().json(to_records(&matches)),
        Err(e) => bad_request(e),
    }
}

/// Day anchoring and scheduling of previously generated matches.
#[post("/api/fixtures/schedule")]
async fn api_schedule(body: Json<ScheduleBody>) -> HttpResponse {
    let body = body.into_inner();
    let result = body.format.parse::<FormatProfile>().and_then(|profile| {
        let matches = from_records(body.matches)?;
        let options = ScheduleOptions {
            match_duration_minutes: body.match_duration_minutes,
            rest_min_minutes: body.rest_min_minutes,
        };
        assign_days_and_schedule(matches, &body.day_configs, &body.fields, profile, options)
    });
    match result {
        Ok((matches, report)) => HttpResponse::Ok().json(ScheduleResponse {
            matches: to_records(&matches),
            report,
        }),
        Err(e) => bad_request(e),
    }
}

/// Chronological renumbering of scheduled matches.
#[post("/api/fixtures/renumber")]
async fn api_renumber(body: Json<RenumberBody>) -> HttpResponse {
    let result = from_records(body.into_inner().matches)
        .and_then(|matches| validate_references(&matches).map(|()| matches));
    match result {
        Ok(mut matches) => {
            renumber_matches(&mut matches);
            HttpResponse::Ok().json(to_records(&matches))
        }
        Err(e) => bad_request(e),
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

    HttpServer::new(|| {
        App::new()
            .app_data(web::JsonConfig::default().limit(1 << 20))
            .service(api_health)
            .service(api_day_configs)
            .service(api_teams_csv)
            .service(api_build_fixture)
            .service(api_generate_bracket)
            .service(api_schedule)
            .service(api_renumber)
    })
    .bind(bind)?
    .run()
    .await
}
