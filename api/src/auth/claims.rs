use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i64,
    pub exp: usize,
    pub admin: bool,
}

/// The resolved principal for the current request, carried in request
/// extensions by the auth guards.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
