use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use crate::domain::{
    authentication::{entities::JwtClaim, ports::TokenVerifier, value_objects::Identity},
    common::{AuthConfig, entities::app_errors::CoreError},
};

/// Verifies HS256 access tokens signed with the auth provider's shared secret.
#[derive(Clone)]
pub struct JwtTokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);

        Self {
            key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<Identity, CoreError> {
        let data = decode::<JwtClaim>(token, &self.key, &self.validation).map_err(|e| {
            debug!("rejected access token: {}", e);
            CoreError::Unauthenticated
        })?;

        Ok(Identity::from(data.claims))
    }
}
