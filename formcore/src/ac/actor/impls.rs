use std::fmt;
use super::*;

impl From<String> for ActorKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "api" => ActorKind::Api,
            "public" => ActorKind::Public,
            "user" => ActorKind::User,
            _ => ActorKind::Other(value),
        }
    }
}

impl From<&str> for ActorKind {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

impl From<ActorKind> for String {
    fn from(value: ActorKind) -> Self {
        match value {
            ActorKind::Other(tag) => tag,
            kind => kind.to_string(),
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ActorKind::Api => "api",
            ActorKind::Public => "public",
            ActorKind::User => "user",
            ActorKind::Other(tag) => tag,
        })
    }
}

impl Actor {
    fn new(kind: ActorKind, id: Option<String>) -> Self {
        Self {
            kind,
            id,
            is_admin: false,
            metadata: ActorMetadata::default(),
            bare: false,
        }
    }

    pub fn api(id: impl Into<String>) -> Self {
        Self::new(ActorKind::Api, Some(id.into()))
    }

    pub fn public() -> Self {
        Self::new(ActorKind::Public, None)
    }

    pub fn user(id: impl Into<String>) -> Self {
        Self::new(ActorKind::User, Some(id.into()))
    }

    pub fn other(tag: impl Into<String>) -> Self {
        Self::new(ActorKind::Other(tag.into()), None)
    }

    /// An actor known only by its tag, as when given as a bare string.
    pub fn bare(tag: impl Into<String>) -> Self {
        Self {
            bare: true,
            .. Self::other(tag)
        }
    }

    pub fn id(mut self, val: impl Into<String>) -> Self {
        self.id = Some(val.into());
        self
    }

    pub fn admin(mut self, val: bool) -> Self {
        self.is_admin = val;
        self
    }

    pub fn files_api_access(mut self, val: Option<bool>) -> Self {
        self.metadata.files_api_access = val;
        self
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "<Actor:{}:{id}>", self.kind),
            None => write!(f, "<Actor:{}>", self.kind),
        }
    }
}

impl From<Actor> for Who {
    fn from(actor: Actor) -> Self {
        Self { actor }
    }
}

impl From<&Actor> for ActorId {
    fn from(actor: &Actor) -> Self {
        match &actor.id {
            Some(id) => ActorId::Id(id.clone()),
            None => ActorId::Actor(actor.clone()),
        }
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ActorId::Id(id) => f.write_str(id),
            ActorId::Actor(actor) => fmt::Display::fmt(actor, f),
        }
    }
}
