//! # Resource Definition
//!
//! Explicit schema registry for the GitHub auth backend resource.
//!
//! The definition is constructed at startup and passed to whichever entry
//! point drives the lifecycle handlers, instead of living in a global
//! framework-managed table.

use crate::constants::DEFAULT_MOUNT_PATH;

/// Schema metadata for one declared field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Field name as it appears in the declared configuration
    pub name: &'static str,
    /// Whether the field must be present in the declared configuration
    pub required: bool,
    /// Whether a change to the field replaces the resource instead of
    /// updating it in place
    pub force_new: bool,
    /// Static default applied when the field is omitted
    pub default: Option<&'static str>,
}

/// Schema definition for one resource type
#[derive(Debug, Clone, Copy)]
pub struct ResourceDefinition {
    /// Resource type name
    pub type_name: &'static str,
    /// Declared fields in schema order
    pub fields: &'static [FieldSchema],
}

impl ResourceDefinition {
    /// Names of the fields whose change forces a replacement
    pub fn force_new_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|f| f.force_new)
            .map(|f| f.name)
    }

    /// Look up one field's schema by name
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }
}

const GITHUB_AUTH_BACKEND_FIELDS: &[FieldSchema] = &[
    FieldSchema {
        name: "path",
        required: false,
        force_new: true,
        default: Some(DEFAULT_MOUNT_PATH),
    },
    FieldSchema {
        name: "description",
        required: false,
        force_new: true,
        default: None,
    },
    FieldSchema {
        name: "organization",
        required: true,
        force_new: false,
        default: None,
    },
    FieldSchema {
        name: "base_url",
        required: false,
        force_new: false,
        default: None,
    },
    FieldSchema {
        name: "bypass_github_mfa",
        required: false,
        force_new: false,
        default: None,
    },
    FieldSchema {
        name: "ttl",
        required: false,
        force_new: false,
        default: None,
    },
    FieldSchema {
        name: "max_ttl",
        required: false,
        force_new: false,
        default: None,
    },
];

/// The GitHub auth backend resource definition
pub fn github_auth_backend_definition() -> ResourceDefinition {
    ResourceDefinition {
        type_name: "github_auth_backend",
        fields: GITHUB_AUTH_BACKEND_FIELDS,
    }
}
