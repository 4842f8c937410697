//! Extracts values from a Maven project descriptor (`pom.xml`) and publishes
//! them as named CI build variables.
//!
//! The library resolves dotted/indexed path expressions
//! (`dependencies[3].groupId`, `properties(source.code.level)`) against a
//! parsed descriptor tree, names the results through a prefix policy, and
//! hands the ordered variable set to a publisher for one of three scopes:
//! job-local, job-result, or plan-wide. Host-orchestrator concerns (build
//! log, plan persistence, remote delivery) stay behind traits.

pub mod config;
pub mod error;
pub mod extract;
pub mod logger;
pub mod model;
pub mod naming;
pub mod path;
pub mod publisher;
pub mod task;
pub mod variables;

pub use config::{ExtractMode, PrefixPolicy, TaskConfiguration, VariableScope};
pub use error::ExtractorError;
pub use extract::PomValueExtractor;
pub use logger::{BuildLogger, MemoryBuildLogger, TracingBuildLogger};
pub use model::{Descriptor, Node};
pub use publisher::{
    BuildContextPublisher, InMemoryPlanStore, PlanBinding, PlanIdentity, PlanVariableStore,
    VariablePublisher,
};
pub use task::{ExtractVariablesTask, DEFAULT_POM};
pub use variables::{Variable, VariablesExtractor};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
