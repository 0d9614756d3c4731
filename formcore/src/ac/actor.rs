//! The requester being authorized.
//!
//! Human users, anonymous visitors and machine clients all arrive as an
//! [`Actor`]; the [`ActorKind`] decides which rule set applies to them.

use serde::{Deserialize, Serialize};
use serde_json::{
    Map,
    Value,
};

/// The class of actor making a request.
///
/// Any type tag outside of the three recognised ones is kept verbatim
/// as `Other`, e.g. tokens minted by the gateway.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ActorKind {
    Api,
    Public,
    User,
    Other(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorMetadata {
    /// Whether an API actor may reach submitted files; unset means allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_api_access: Option<bool>,
    /// Any other entries, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A bare string in place of the full record denotes a non-human actor
/// that is only known by its tag, which becomes an `ActorKind::Other`
/// with no id.  Such an actor serializes back to the same string unless
/// it has since been given an id, the admin flag or metadata.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "repr::ActorRepr", into = "repr::ActorRepr")]
pub struct Actor {
    pub kind: ActorKind,
    pub id: Option<String>,
    pub is_admin: bool,
    pub metadata: ActorMetadata,
    bare: bool,
}

/// Wrapper for the actor as carried by the request context.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Who {
    pub actor: Actor,
}

/// How the actor is identified in an enrichment result: the id when the
/// actor carries one, otherwise the actor itself.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ActorId {
    Id(String),
    Actor(Actor),
}

mod impls;
mod repr;
