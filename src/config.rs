//! Task configuration: what to extract, how to name it, where to publish.
//!
//! Configurations can be built directly or parsed from the host's flat
//! string map (the form the build orchestrator hands to a task). Map keys
//! and their encoded values are kept verbatim for host parity.

use crate::error::ExtractorError;
use std::collections::HashMap;
use std::fmt;

pub const EXTRACT_MODE: &str = "gavOrCustom";
pub const EXTRACT_MODE_GAV: &str = "0";
pub const EXTRACT_MODE_CUSTOM: &str = "1";

pub const PREFIX_OPTION: &str = "prefixOption";
pub const PREFIX_OPTION_DEFAULT: &str = "1";
pub const PREFIX_OPTION_CUSTOM: &str = "0";
pub const PREFIX_OPTION_CUSTOM_VALUE: &str = "customPrefix";

pub const CUSTOM_VARIABLE_NAME: &str = "customVariableName";
pub const CUSTOM_ELEMENT: &str = "customElement";

pub const STRIP_SNAPSHOT: &str = "stripSnapshot";

pub const VARIABLE_TYPE: &str = "variableType";
pub const VARIABLE_TYPE_JOB: &str = "0";
pub const VARIABLE_TYPE_PLAN: &str = "1";
pub const VARIABLE_TYPE_RESULT: &str = "2";

pub const PROJECT_FILE: &str = "projectFile";

/// How variable names are prefixed in GAV mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixPolicy {
    /// The literal prefix `maven.`.
    Default,
    /// A caller-supplied prefix, possibly empty (bare field names).
    Custom(String),
}

/// What to extract from the descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractMode {
    /// The three fixed coordinates: `groupId`, `artifactId`, `version`.
    Gav {
        prefix: PrefixPolicy,
        strip_snapshot: bool,
    },
    /// A single caller-chosen element published under a caller-chosen name.
    Custom {
        variable_name: String,
        element: String,
    },
}

/// Lifetime/visibility tier the produced variables are written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableScope {
    JobLocal,
    JobResult,
    Plan,
}

impl fmt::Display for VariableScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableScope::JobLocal => write!(f, "job"),
            VariableScope::JobResult => write!(f, "result"),
            VariableScope::Plan => write!(f, "plan"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskConfiguration {
    /// Project file path relative to the task's base directory. `None`
    /// falls back to `pom.xml`.
    pub project_file: Option<String>,
    pub mode: ExtractMode,
    pub scope: VariableScope,
}

impl TaskConfiguration {
    /// Parses the host orchestrator's flat string configuration map.
    ///
    /// Custom extraction requires both a variable name and an element path;
    /// anything else is rejected up front so the task never runs half
    /// configured. A missing `variableType` defaults to the job scope to
    /// keep tasks configured by older plugin versions working.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, ExtractorError> {
        let get = |key: &str| map.get(key).map(String::as_str).unwrap_or("");

        let mode = if get(EXTRACT_MODE) == EXTRACT_MODE_CUSTOM {
            let variable_name = get(CUSTOM_VARIABLE_NAME);
            let element = get(CUSTOM_ELEMENT);
            if variable_name.is_empty() {
                return Err(ExtractorError::InvalidConfiguration(
                    "custom extraction requires a variable name".to_string(),
                ));
            }
            if element.is_empty() {
                return Err(ExtractorError::InvalidConfiguration(
                    "custom extraction requires an element path".to_string(),
                ));
            }
            ExtractMode::Custom {
                variable_name: variable_name.to_string(),
                element: element.to_string(),
            }
        } else {
            let prefix = if get(PREFIX_OPTION) == PREFIX_OPTION_CUSTOM {
                PrefixPolicy::Custom(get(PREFIX_OPTION_CUSTOM_VALUE).to_string())
            } else {
                PrefixPolicy::Default
            };
            ExtractMode::Gav {
                prefix,
                strip_snapshot: get(STRIP_SNAPSHOT) == "true",
            }
        };

        let scope = match get(VARIABLE_TYPE) {
            VARIABLE_TYPE_PLAN => VariableScope::Plan,
            VARIABLE_TYPE_RESULT => VariableScope::JobResult,
            _ => VariableScope::JobLocal,
        };

        let project_file = map
            .get(PROJECT_FILE)
            .filter(|p| !p.is_empty())
            .map(String::clone);

        Ok(TaskConfiguration {
            project_file,
            mode,
            scope,
        })
    }
}
