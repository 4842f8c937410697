//! End-to-end task execution: locate the descriptor, extract, publish.

use crate::config::TaskConfiguration;
use crate::error::ExtractorError;
use crate::extract::PomValueExtractor;
use crate::logger::BuildLogger;
use crate::model::Descriptor;
use crate::publisher::VariablePublisher;
use crate::variables::{Variable, VariablesExtractor};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_POM: &str = "pom.xml";

/// One execution of the variable-extraction task.
///
/// Publishing is all-or-nothing: any fatal error (missing or malformed
/// descriptor, invalid configuration) aborts before a single variable is
/// written.
pub struct ExtractVariablesTask<'a> {
    base_dir: &'a Path,
    config: &'a TaskConfiguration,
}

impl<'a> ExtractVariablesTask<'a> {
    pub fn new(base_dir: &'a Path, config: &'a TaskConfiguration) -> Self {
        Self { base_dir, config }
    }

    /// Runs the task and returns the published variable set.
    pub fn execute(
        &self,
        publisher: &mut dyn VariablePublisher,
        logger: &dyn BuildLogger,
    ) -> Result<Vec<Variable>, ExtractorError> {
        let pom_path = self.pom_path(logger);
        debug!(path = %pom_path.display(), "reading project descriptor");

        let descriptor = match Descriptor::from_file(&pom_path) {
            Ok(descriptor) => descriptor,
            Err(err @ ExtractorError::DescriptorNotFound(_)) => {
                logger.error(&format!(
                    "POM file not found at {}",
                    absolute(&pom_path).display()
                ));
                return Err(err);
            }
            Err(err) => {
                logger.error(&format!("Unable to read POM file. {}", err));
                return Err(err);
            }
        };

        let extractor = PomValueExtractor::new(descriptor);
        let variables = VariablesExtractor::new(&extractor, logger).extract(self.config);

        publisher.publish(self.config.scope, &variables)?;
        Ok(variables)
    }

    fn pom_path(&self, logger: &dyn BuildLogger) -> PathBuf {
        match &self.config.project_file {
            Some(project_file) => {
                logger.log(&format!("Overriding {} with {}", DEFAULT_POM, project_file));
                self.base_dir.join(project_file)
            }
            None => self.base_dir.join(DEFAULT_POM),
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
