use enumset::EnumSet;
use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;
use super::{
    Role,
    Roles,
};

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(<&'static str>::from(*self))
    }
}

impl From<Role> for &'static str {
    fn from(role: Role) -> &'static str {
        match role {
            Role::Owner => "owner",
            Role::TeamManager => "team_manager",
            Role::FormDesigner => "form_designer",
            Role::SubmissionReviewer => "submission_reviewer",
            Role::SubmissionApprover => "submission_approver",
            Role::FormSubmitter => "form_submitter",
            Role::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Role::Owner),
            "team_manager" => Ok(Role::TeamManager),
            "form_designer" => Ok(Role::FormDesigner),
            "submission_reviewer" => Ok(Role::SubmissionReviewer),
            "submission_approver" => Ok(Role::SubmissionApprover),
            "form_submitter" => Ok(Role::FormSubmitter),
            "admin" => Ok(Role::Admin),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

impl Roles {
    pub fn all() -> Self {
        Self(EnumSet::all())
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(role)
    }

    pub fn insert(&mut self, role: Role) -> bool {
        self.0.insert(role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> {
        self.0.iter()
    }
}

impl FromIterator<Role> for Roles {
    fn from_iter<I: IntoIterator<Item=Role>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Role> for Roles {
    fn extend<I: IntoIterator<Item=Role>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl From<Vec<Role>> for Roles {
    fn from(value: Vec<Role>) -> Self {
        value.into_iter().collect()
    }
}

impl From<Roles> for Vec<Role> {
    fn from(value: Roles) -> Self {
        value.iter().collect()
    }
}

impl<const N: usize> From<[Role; N]> for Roles {
    fn from(value: [Role; N]) -> Self {
        value.into_iter().collect()
    }
}
