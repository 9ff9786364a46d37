// app.rs - Router assembly
//
// Request path through the layers, outermost first:
//   trace -> CORS -> token authentication -> authorization gate -> handler

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::config::SecurityConfig;
use crate::handlers;
use crate::middleware::{authenticate, require_identity};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let authenticator = state.authenticator.clone();
    let cors = cors_layer(&state.config.security);

    Router::new()
        .merge(public_routes())
        .merge(auth_routes())
        .merge(resource_routes())
        .layer(middleware::from_fn_with_state(authenticator.clone(), require_identity))
        .layer(middleware::from_fn_with_state(authenticator, authenticate))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Browser access for the Festify frontends. Preflight requests are answered
/// here and never reach authentication.
pub fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

fn public_routes() -> Router<AppState> {
    use handlers::public;

    Router::new()
        .route("/api/hello", get(public::hello_get))
        .route("/api/health", get(public::health_get))
        .route("/actuator/health", get(public::health_get))
}

fn auth_routes() -> Router<AppState> {
    use handlers::auth;

    Router::new()
        .route("/api/auth/me", get(auth::session_me))
        .route("/api/auth/check", get(auth::session_check))
}

fn resource_routes() -> Router<AppState> {
    use handlers::resources::{
        categories, colleges, events, payments, profiles, registrations, reviews, team_members,
        teams, tickets,
    };

    Router::new()
        // Colleges and categories
        .route("/api/colleges", get(colleges::list).post(colleges::create))
        .route(
            "/api/colleges/:id",
            get(colleges::get).put(colleges::update).delete(colleges::delete),
        )
        .route("/api/categories", get(categories::list).post(categories::create))
        .route(
            "/api/categories/:id",
            get(categories::get).put(categories::update).delete(categories::delete),
        )
        // Events
        .route("/api/events", get(events::list).post(events::create))
        .route("/api/events/upcoming", get(events::upcoming))
        .route("/api/events/college/:college_id", get(events::by_college))
        .route("/api/events/category/:category_id", get(events::by_category))
        .route("/api/events/organizer/:organizer_id", get(events::by_organizer))
        .route("/api/events/status/:status", get(events::by_status))
        .route(
            "/api/events/:id",
            get(events::get).put(events::update).delete(events::delete),
        )
        // Profiles
        .route("/api/profiles", get(profiles::list).post(profiles::create))
        .route("/api/profiles/user/:user_id", get(profiles::by_user))
        .route("/api/profiles/email/:email", get(profiles::by_email))
        .route(
            "/api/profiles/:id",
            get(profiles::get).put(profiles::update).delete(profiles::delete),
        )
        // Registrations and reviews
        .route("/api/registrations", get(registrations::list).post(registrations::create))
        .route("/api/registrations/event/:event_id", get(registrations::by_event))
        .route("/api/registrations/user/:user_id", get(registrations::by_user))
        .route(
            "/api/registrations/:id",
            get(registrations::get)
                .put(registrations::update)
                .delete(registrations::delete),
        )
        .route("/api/reviews", get(reviews::list).post(reviews::create))
        .route("/api/reviews/event/:event_id", get(reviews::by_event))
        .route("/api/reviews/user/:user_id", get(reviews::by_user))
        .route(
            "/api/reviews/:id",
            get(reviews::get).put(reviews::update).delete(reviews::delete),
        )
        // Teams
        .route("/api/teams", get(teams::list).post(teams::create))
        .route("/api/teams/event/:event_id", get(teams::by_event))
        .route("/api/teams/leader/:leader_id", get(teams::by_leader))
        .route(
            "/api/teams/:id",
            get(teams::get).put(teams::update).delete(teams::delete),
        )
        .route("/api/team-members", get(team_members::list).post(team_members::create))
        .route("/api/team-members/team/:team_id", get(team_members::by_team))
        .route(
            "/api/team-members/:id",
            get(team_members::get)
                .put(team_members::update)
                .delete(team_members::delete),
        )
        // Tickets and payments
        .route("/api/tickets", get(tickets::list).post(tickets::create))
        .route("/api/tickets/registration/:registration_id", get(tickets::by_registration))
        .route("/api/tickets/event/:event_id", get(tickets::by_event))
        .route(
            "/api/tickets/:id",
            get(tickets::get).put(tickets::update).delete(tickets::delete),
        )
        .route("/api/payments", get(payments::list).post(payments::create))
        .route("/api/payments/registration/:registration_id", get(payments::by_registration))
        .route("/api/payments/transaction/:transaction_id", get(payments::by_transaction))
        .route(
            "/api/payments/:id",
            get(payments::get).put(payments::update).delete(payments::delete),
        )
}
