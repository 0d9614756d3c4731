use crate::ac::{
    decision::Predicate,
    role::Role,
};
use super::*;

impl EnrichmentResult {
    pub fn actor_id(&self) -> &ActorId {
        &self.actor_id
    }

    pub fn required(&self) -> &[Permission] {
        &self.required
    }

    pub fn permissions(&self) -> &Permissions {
        &self.permissions
    }

    pub fn roles(&self) -> &Roles {
        &self.roles
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    /// The result of the given predicate, or `None` if it was never
    /// evaluated.
    pub fn decision(&self, predicate: Predicate) -> Option<bool> {
        self.decisions
            .iter()
            .find(|decision| decision.predicate == predicate)
            .map(|decision| decision.result)
    }

    /// The required permissions that were not granted.
    pub fn missing_permissions(&self) -> Permissions {
        self.required
            .iter()
            .copied()
            .filter(|permission| !self.permissions.contains(*permission))
            .collect()
    }
}

impl EnrichmentBuilder {
    pub fn new(actor_id: ActorId, required: Vec<Permission>) -> Self {
        Self {
            actor_id,
            required,
            permissions: Permissions::default(),
            roles: Roles::default(),
            decisions: Vec::new(),
        }
    }

    pub fn grant(&mut self, permission: Permission) -> &mut Self {
        self.permissions.insert(permission);
        self
    }

    pub fn grant_all(
        &mut self,
        permissions: impl IntoIterator<Item=Permission>,
    ) -> &mut Self {
        self.permissions.extend(permissions);
        self
    }

    pub fn add_role(&mut self, role: Role) -> &mut Self {
        self.roles.insert(role);
        self
    }

    pub fn add_roles(
        &mut self,
        roles: impl IntoIterator<Item=Role>,
    ) -> &mut Self {
        self.roles.extend(roles);
        self
    }

    pub fn decide(&mut self, predicate: Predicate, result: bool) -> &mut Self {
        self.push(Decision::new(predicate, result))
    }

    pub fn decide_with(
        &mut self,
        predicate: Predicate,
        result: bool,
        metadata: serde_json::Value,
    ) -> &mut Self {
        self.push(Decision::with_metadata(predicate, result, metadata))
    }

    fn push(&mut self, decision: Decision) -> &mut Self {
        log::trace!("{}: {decision}", self.actor_id);
        self.decisions.push(decision);
        self
    }

    pub fn finish(self) -> EnrichmentResult {
        EnrichmentResult {
            actor_id: self.actor_id,
            required: self.required,
            permissions: self.permissions,
            roles: self.roles,
            decisions: self.decisions,
        }
    }
}
