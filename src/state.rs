use std::sync::Arc;

use serde::Serialize;
use sqlx::{postgres::PgRow, FromRow, PgPool};

use crate::auth::{Authenticator, RouteTable, TokenVerifier};
use crate::config::AppConfig;
use crate::database::Repository;

/// Shared application state handed to every handler and middleware.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: PgPool,
    pub authenticator: Arc<Authenticator>,
}

impl AppState {
    pub fn new(config: AppConfig, db: PgPool) -> Self {
        let verifier = TokenVerifier::new(&config.security.jwt_secret);
        let authenticator = Authenticator::new(RouteTable::festify(), verifier);

        Self {
            config: Arc::new(config),
            db,
            authenticator: Arc::new(authenticator),
        }
    }

    pub fn repository<T>(&self, table_name: &'static str) -> Repository<T>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin + Serialize,
    {
        Repository::new(table_name, self.db.clone())
    }
}
