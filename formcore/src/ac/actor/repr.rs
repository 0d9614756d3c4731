use serde::{Deserialize, Serialize};
use super::{
    Actor,
    ActorKind,
    ActorMetadata,
};

#[derive(Deserialize, Serialize)]
#[serde(untagged)]
pub(super) enum ActorRepr {
    Bare(String),
    Record(ActorRecord),
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ActorRecord {
    #[serde(rename = "type")]
    kind: ActorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default)]
    is_admin: bool,
    #[serde(default)]
    metadata: ActorMetadata,
}

impl From<ActorRepr> for Actor {
    fn from(value: ActorRepr) -> Self {
        match value {
            ActorRepr::Bare(tag) => Actor::bare(tag),
            ActorRepr::Record(ActorRecord { kind, id, is_admin, metadata }) => Actor {
                kind,
                id,
                is_admin,
                metadata,
                bare: false,
            },
        }
    }
}

impl From<Actor> for ActorRepr {
    fn from(value: Actor) -> Self {
        let Actor { kind, id, is_admin, metadata, bare } = value;
        if bare && id.is_none() && !is_admin && metadata == ActorMetadata::default() {
            ActorRepr::Bare(kind.into())
        } else {
            ActorRepr::Record(ActorRecord { kind, id, is_admin, metadata })
        }
    }
}
