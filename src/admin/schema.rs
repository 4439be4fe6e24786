//! Declarative per-field schema descriptors
//!
//! Each managed resource declares its attributes once, as a static table.
//! The lifecycle driver uses the table to validate configuration, to carry
//! computed values forward from prior state, and to decide whether a change
//! can be applied in place or needs the entity to be replaced.

use serde_json::{Map, Value};

use crate::error::{AdminError, Result};

/// Who provides a field's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMode {
    /// Must be configured
    Required,
    /// Assigned by the server, never configured
    Computed,
}

/// Static description of one resource attribute
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub mode: FieldMode,
    /// Changing the value forces the entity to be recreated
    pub requires_replace: bool,
    /// Accepted values; empty means any string
    pub allowed_values: &'static [&'static str],
}

impl FieldDescriptor {
    pub const fn required(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, FieldMode::Required)
    }

    pub const fn computed(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, FieldMode::Computed)
    }

    const fn new(name: &'static str, description: &'static str, mode: FieldMode) -> Self {
        Self {
            name,
            description,
            mode,
            requires_replace: false,
            allowed_values: &[],
        }
    }

    /// Mark the field immutable after create
    pub const fn requires_replace(self) -> Self {
        Self {
            requires_replace: true,
            ..self
        }
    }

    /// Restrict the field to a fixed set of values
    pub const fn one_of(self, allowed_values: &'static [&'static str]) -> Self {
        Self {
            allowed_values,
            ..self
        }
    }

    /// True if the user may set this field
    pub fn is_configurable(&self) -> bool {
        self.mode != FieldMode::Computed
    }
}

/// What applying a configuration to existing state requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    /// Configuration matches state
    NoOp,
    /// Mutable fields changed
    Update,
    /// An immutable field changed
    Replace,
}

impl std::fmt::Display for PlanAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanAction::NoOp => write!(f, "no-op"),
            PlanAction::Update => write!(f, "update"),
            PlanAction::Replace => write!(f, "replace"),
        }
    }
}

/// Schema of one managed resource type
#[derive(Debug)]
pub struct ResourceSchema {
    pub type_name: &'static str,
    pub description: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl ResourceSchema {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check a user configuration against the field table
    pub fn validate_config(&self, config: &Map<String, Value>) -> Result<()> {
        for key in config.keys() {
            let field = self.field(key).ok_or_else(|| {
                AdminError::Validation(format!(
                    "unknown attribute '{}' for {} (expected one of: {})",
                    key,
                    self.type_name,
                    self.configurable_names().join(", ")
                ))
            })?;
            if !field.is_configurable() {
                return Err(AdminError::Validation(format!(
                    "attribute '{}' of {} is computed and cannot be configured",
                    key, self.type_name
                )));
            }
        }

        for field in self.fields.iter().filter(|f| f.is_configurable()) {
            let value = match config.get(field.name) {
                None | Some(Value::Null) => {
                    return Err(AdminError::Validation(format!(
                        "missing required attribute '{}' for {} ({})",
                        field.name, self.type_name, field.description
                    )));
                }
                Some(value) => value,
            };

            let value = value.as_str().ok_or_else(|| {
                AdminError::Validation(format!(
                    "attribute '{}' of {} must be a string",
                    field.name, self.type_name
                ))
            })?;

            if value.is_empty() {
                return Err(AdminError::Validation(format!(
                    "attribute '{}' of {} must not be empty",
                    field.name, self.type_name
                )));
            }

            if !field.allowed_values.is_empty() && !field.allowed_values.contains(&value) {
                return Err(AdminError::Validation(format!(
                    "attribute '{}' of {} must be one of {}, got '{}'",
                    field.name,
                    self.type_name,
                    field.allowed_values.join(", "),
                    value
                )));
            }
        }

        Ok(())
    }

    /// Compare prior state with a new configuration
    pub fn plan(&self, prior: &Map<String, Value>, config: &Map<String, Value>) -> PlanAction {
        let changed: Vec<&FieldDescriptor> = self
            .fields
            .iter()
            .filter(|f| f.is_configurable())
            .filter(|f| normalized(prior.get(f.name)) != normalized(config.get(f.name)))
            .collect();

        if changed.iter().any(|f| f.requires_replace) {
            PlanAction::Replace
        } else if changed.is_empty() {
            PlanAction::NoOp
        } else {
            PlanAction::Update
        }
    }

    /// Desired attributes for an in-place update
    ///
    /// Configurable fields come from `config`, computed fields keep their
    /// prior values.
    pub fn merge(&self, prior: &Map<String, Value>, config: &Map<String, Value>) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|f| {
                let source = if f.is_configurable() { config } else { prior };
                let value = source.get(f.name).cloned().unwrap_or(Value::Null);
                (f.name.to_string(), value)
            })
            .collect()
    }

    fn configurable_names(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.is_configurable())
            .map(|f| f.name)
            .collect()
    }
}

/// Treat a missing attribute and an explicit null the same
fn normalized(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}
