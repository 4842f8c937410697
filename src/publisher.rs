//! Variable publishing into the three host scopes.
//!
//! Job-local and job-result variables live in in-process maps owned by the
//! current execution. Plan variables are persisted through a
//! [`PlanVariableStore`], which on a detached worker is backed by the
//! host's remote delivery channel; whether that channel is needed is an
//! explicit capability on the binding, never probed at runtime.

use crate::config::VariableScope;
use crate::error::ExtractorError;
use crate::logger::BuildLogger;
use crate::variables::Variable;
use anyhow::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

/// Identifies where plan-scoped variables land: the top-level plan plus the
/// build result the write originated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanIdentity {
    pub top_level_plan_key: String,
    pub build_result_key: String,
}

/// Persistence seam for plan-scoped variables.
///
/// Writes are idempotent upserts matched by variable name within the
/// identified plan.
pub trait PlanVariableStore {
    fn create_or_update(&mut self, plan: &PlanIdentity, variables: &[Variable]) -> Result<()>;
}

/// Plan binding available to the current execution.
pub struct PlanBinding<'a> {
    pub identity: PlanIdentity,
    /// Execution happens on a detached worker without direct storage
    /// access; the store must route writes through remote delivery.
    pub detached: bool,
    pub store: Box<dyn PlanVariableStore + 'a>,
}

/// Commits an ordered variable set to the selected scope.
pub trait VariablePublisher {
    fn publish(
        &mut self,
        scope: VariableScope,
        variables: &[Variable],
    ) -> Result<(), ExtractorError>;
}

/// Publisher backed by the current execution's build context.
///
/// Job scopes are last-write-wins maps scoped to this execution. Plan
/// scope requires a [`PlanBinding`]; publishing plan variables without one
/// is a configuration error, reported before anything is written.
pub struct BuildContextPublisher<'a> {
    job_local: HashMap<String, String>,
    job_result: HashMap<String, String>,
    plan: Option<PlanBinding<'a>>,
}

impl<'a> BuildContextPublisher<'a> {
    pub fn new(plan: Option<PlanBinding<'a>>) -> Self {
        Self {
            job_local: HashMap::new(),
            job_result: HashMap::new(),
            plan,
        }
    }

    pub fn job_local(&self) -> &HashMap<String, String> {
        &self.job_local
    }

    pub fn job_result(&self) -> &HashMap<String, String> {
        &self.job_result
    }
}

impl VariablePublisher for BuildContextPublisher<'_> {
    fn publish(
        &mut self,
        scope: VariableScope,
        variables: &[Variable],
    ) -> Result<(), ExtractorError> {
        match scope {
            VariableScope::JobLocal => {
                for variable in variables {
                    self.job_local
                        .insert(variable.name.clone(), variable.value.clone());
                }
                Ok(())
            }
            VariableScope::JobResult => {
                for variable in variables {
                    self.job_result
                        .insert(variable.name.clone(), variable.value.clone());
                }
                Ok(())
            }
            VariableScope::Plan => {
                let binding = self.plan.as_mut().ok_or_else(|| {
                    ExtractorError::InvalidConfiguration(
                        "plan-scoped variables are not available in this execution context"
                            .to_string(),
                    )
                })?;
                if binding.detached {
                    debug!(
                        plan = %binding.identity.top_level_plan_key,
                        "delivering plan variables through the remote channel"
                    );
                }
                binding
                    .store
                    .create_or_update(&binding.identity, variables)?;
                Ok(())
            }
        }
    }
}

/// In-memory plan store: per-plan name-keyed upserts with build-log echo of
/// each add or update, in place of the host's persistent definitions.
///
/// Clones share the same underlying storage, so a handle kept outside the
/// publisher observes its writes.
pub struct InMemoryPlanStore<'a> {
    plans: Rc<RefCell<HashMap<String, HashMap<String, String>>>>,
    logger: &'a dyn BuildLogger,
}

impl<'a> InMemoryPlanStore<'a> {
    pub fn new(logger: &'a dyn BuildLogger) -> Self {
        Self {
            plans: Rc::new(RefCell::new(HashMap::new())),
            logger,
        }
    }

    pub fn plan_variables(&self, top_level_plan_key: &str) -> Option<HashMap<String, String>> {
        self.plans.borrow().get(top_level_plan_key).cloned()
    }
}

impl Clone for InMemoryPlanStore<'_> {
    fn clone(&self) -> Self {
        Self {
            plans: Rc::clone(&self.plans),
            logger: self.logger,
        }
    }
}

impl PlanVariableStore for InMemoryPlanStore<'_> {
    fn create_or_update(&mut self, plan: &PlanIdentity, variables: &[Variable]) -> Result<()> {
        let mut plans = self.plans.borrow_mut();
        let entries = plans.entry(plan.top_level_plan_key.clone()).or_default();
        for variable in variables {
            match entries.get(&variable.name) {
                Some(previous) => self.logger.log(&format!(
                    "Updating Plan variable from {}:{} to {}:{}",
                    variable.name, previous, variable.name, variable.value
                )),
                None => self.logger.log(&format!(
                    "Adding Plan variable {}:{}",
                    variable.name, variable.value
                )),
            }
            entries.insert(variable.name.clone(), variable.value.clone());
        }
        Ok(())
    }
}
