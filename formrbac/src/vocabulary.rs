use formcore::ac::{
    Permission,
    Permissions,
    Role,
};

/// The grants applied by the enricher that do not come from a lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    /// Granted to every API actor.
    pub api_full_access: Permissions,
    /// Granted to every anonymous actor.
    pub public_base_access: Permissions,
    /// Given to authenticated users flagged as administrators.
    pub admin_role: Role,
}

impl Vocabulary {
    pub fn standard() -> Self {
        Self {
            api_full_access: Permissions::from([
                Permission::FormRead,
                Permission::FormUpdate,
                Permission::SubmissionRead,
                Permission::DesignRead,
                Permission::DocumentTemplateRead,
            ]),
            public_base_access: Permissions::from([
                Permission::FormRead,
                Permission::SubmissionCreate,
                Permission::DocumentTemplateRead,
            ]),
            admin_role: Role::Admin,
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}
