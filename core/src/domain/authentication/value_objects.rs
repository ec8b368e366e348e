use uuid::Uuid;

use crate::domain::authentication::entities::JwtClaim;

/// The authenticated actor behind a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: Option<String>,
}

impl Identity {
    pub fn id(&self) -> Uuid {
        self.user_id
    }
}

impl From<JwtClaim> for Identity {
    fn from(claims: JwtClaim) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
        }
    }
}
