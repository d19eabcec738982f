use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::entities::ClientId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Client,
    Admin,
}

/// The acting user, passed explicitly into every mutating operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub role: Role,
}

impl Session {
    pub fn admin() -> Self {
        Self {
            user_id: "admin".to_string(),
            role: Role::Admin,
        }
    }

    pub fn client(client_id: impl Into<ClientId>) -> Self {
        Self {
            user_id: client_id.into(),
            role: Role::Client,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            Role::Admin => write!(f, "admin"),
            Role::Client => write!(f, "client:{}", self.user_id),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid session `{0}`, expected `admin` or `client:<id>`")]
pub struct ParseSessionError(String);

impl FromStr for Session {
    type Err = ParseSessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            None if s == "admin" => Ok(Session::admin()),
            Some(("client", id)) if !id.trim().is_empty() => Ok(Session::client(id.trim())),
            _ => Err(ParseSessionError(s.to_string())),
        }
    }
}
