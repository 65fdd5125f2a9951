//! Requirement checker.
//!
//! The `RequirementChecker` runs each requirement's check command through a
//! [`CommandRunner`], caching results within a run so the same requirement
//! checked twice only executes its command once.

use std::collections::HashMap;

use crate::config::RequirementConfig;
use crate::shell::{execute_check, CommandRunner, ProcessInvocation};

use super::status::RequirementStatus;

/// Checks whether requirements are satisfied on the host.
pub struct RequirementChecker<'a> {
    runner: &'a mut dyn CommandRunner,
    cache: HashMap<String, bool>,
}

impl<'a> RequirementChecker<'a> {
    /// Create a checker that runs commands through `runner`.
    pub fn new(runner: &'a mut dyn CommandRunner) -> Self {
        Self {
            runner,
            cache: HashMap::new(),
        }
    }

    /// Check a single requirement, using the cache when available.
    pub fn check_one(&mut self, requirement: &RequirementConfig) -> RequirementStatus {
        if self.is_available(requirement) {
            RequirementStatus::Satisfied
        } else {
            RequirementStatus::Missing {
                installable: requirement.install.is_some(),
                install_hint: requirement.install_hint.clone(),
            }
        }
    }

    /// Whether the requirement's check command exits zero.
    ///
    /// A check command that cannot be spawned counts as unavailable.
    pub fn is_available(&mut self, requirement: &RequirementConfig) -> bool {
        if let Some(&cached) = self.cache.get(&requirement.name) {
            return cached;
        }

        let available = match ProcessInvocation::from_argv(&requirement.check) {
            Some(invocation) => execute_check(&mut *self.runner, &invocation),
            None => false,
        };
        tracing::debug!(
            requirement = %requirement.name,
            available,
            "Checked requirement"
        );

        self.cache.insert(requirement.name.clone(), available);
        available
    }

    /// Forget the cached result for a requirement (after installing it).
    pub fn invalidate(&mut self, name: &str) {
        self.cache.remove(name);
    }

    /// Access the underlying runner (used to run install commands).
    pub fn runner(&mut self) -> &mut dyn CommandRunner {
        &mut *self.runner
    }
}
