use std::sync::Arc;

use ayurdiet_core::{
    application::AyurDietService, infrastructure::auth::jwt::JwtTokenVerifier,
};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: AyurDietService,
    pub token_verifier: Arc<JwtTokenVerifier>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: AyurDietService, token_verifier: JwtTokenVerifier) -> Self {
        Self {
            args,
            service,
            token_verifier: Arc::new(token_verifier),
        }
    }
}
