//! Variable set construction from an extracted descriptor.

use crate::config::{ExtractMode, TaskConfiguration};
use crate::extract::PomValueExtractor;
use crate::logger::BuildLogger;
use crate::naming;
use serde::Serialize;

pub const POM_ELEMENT_GROUP_ID: &str = "groupId";
pub const POM_ELEMENT_ARTIFACT_ID: &str = "artifactId";
pub const POM_ELEMENT_VERSION: &str = "version";

const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// One named build variable. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub name: String,
    pub value: String,
}

impl Variable {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Builds the ordered variable set for one task configuration.
///
/// GAV mode always produces `groupId`, `artifactId`, `version` in that
/// order; custom mode produces exactly one variable. Every produced
/// variable is echoed to the build log together with its destination
/// scope. No I/O happens here and no new error kinds are raised.
pub struct VariablesExtractor<'a> {
    extractor: &'a PomValueExtractor,
    logger: &'a dyn BuildLogger,
}

impl<'a> VariablesExtractor<'a> {
    pub fn new(extractor: &'a PomValueExtractor, logger: &'a dyn BuildLogger) -> Self {
        Self { extractor, logger }
    }

    pub fn extract(&self, config: &TaskConfiguration) -> Vec<Variable> {
        let mut variables = Vec::new();
        match &config.mode {
            ExtractMode::Custom {
                variable_name,
                element,
            } => {
                self.extract_one(element, variable_name.clone(), config, &mut variables);
            }
            ExtractMode::Gav {
                prefix,
                strip_snapshot,
            } => {
                for field in [POM_ELEMENT_GROUP_ID, POM_ELEMENT_ARTIFACT_ID] {
                    self.extract_one(
                        field,
                        naming::variable_name(field, prefix),
                        config,
                        &mut variables,
                    );
                }
                let version_name = naming::variable_name(POM_ELEMENT_VERSION, prefix);
                if *strip_snapshot {
                    self.extract_version_stripped(version_name, config, &mut variables);
                } else {
                    self.extract_one(POM_ELEMENT_VERSION, version_name, config, &mut variables);
                }
            }
        }
        variables
    }

    fn extract_one(
        &self,
        element: &str,
        variable_name: String,
        config: &TaskConfiguration,
        variables: &mut Vec<Variable>,
    ) {
        let value = self.extractor.value(element);
        self.logger.log(&format!(
            "Extracted {} from POM. Setting {} variable {} to {}",
            element, config.scope, variable_name, value
        ));
        variables.push(Variable::new(variable_name, value));
    }

    fn extract_version_stripped(
        &self,
        variable_name: String,
        config: &TaskConfiguration,
        variables: &mut Vec<Variable>,
    ) {
        let raw = self.extractor.value(POM_ELEMENT_VERSION);
        // Only one trailing occurrence is removed; the value is trimmed
        // first so stray whitespace does not hide the suffix.
        let trimmed = raw.trim();
        let (value, stripped) = if trimmed.ends_with(SNAPSHOT_SUFFIX) {
            let end = trimmed.len() - SNAPSHOT_SUFFIX.len();
            (trimmed[..end].to_string(), true)
        } else {
            (raw, false)
        };
        let action = if stripped {
            "Stripping '-SNAPSHOT' and setting"
        } else {
            "Setting"
        };
        self.logger.log(&format!(
            "Extracted {} from POM. {} {} variable {} to {}",
            POM_ELEMENT_VERSION, action, config.scope, variable_name, value
        ));
        variables.push(Variable::new(variable_name, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PrefixPolicy, VariableScope};
    use crate::logger::MemoryBuildLogger;
    use crate::model::Descriptor;

    fn pom(version: &str) -> String {
        format!(
            r#"<project>
                <groupId>com.example</groupId>
                <artifactId>app</artifactId>
                <version>{}</version>
                <properties>
                    <myProperty>myValue</myProperty>
                </properties>
            </project>"#,
            version
        )
    }

    fn gav_config(prefix: PrefixPolicy, strip_snapshot: bool) -> TaskConfiguration {
        TaskConfiguration {
            project_file: None,
            mode: ExtractMode::Gav {
                prefix,
                strip_snapshot,
            },
            scope: VariableScope::JobLocal,
        }
    }

    fn extract(pom_text: &str, config: &TaskConfiguration) -> (Vec<Variable>, MemoryBuildLogger) {
        let extractor = PomValueExtractor::new(Descriptor::parse(pom_text).unwrap());
        let logger = MemoryBuildLogger::new();
        let variables = VariablesExtractor::new(&extractor, &logger).extract(config);
        (variables, logger)
    }

    #[test]
    fn gav_mode_produces_the_three_coordinates_in_order() {
        let (variables, _) = extract(&pom("1.0"), &gav_config(PrefixPolicy::Default, false));
        assert_eq!(
            variables,
            vec![
                Variable::new("maven.groupId", "com.example"),
                Variable::new("maven.artifactId", "app"),
                Variable::new("maven.version", "1.0"),
            ]
        );
    }

    #[test]
    fn custom_prefixes_rename_all_three_variables() {
        let prefix = PrefixPolicy::Custom("release.".to_string());
        let (variables, _) = extract(&pom("1.0"), &gav_config(prefix, false));
        let names: Vec<&str> = variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["release.groupId", "release.artifactId", "release.version"]);

        let (variables, _) = extract(
            &pom("1.0"),
            &gav_config(PrefixPolicy::Custom(String::new()), false),
        );
        let names: Vec<&str> = variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["groupId", "artifactId", "version"]);
    }

    #[test]
    fn snapshot_suffix_is_stripped_when_requested() {
        let (variables, logger) =
            extract(&pom("2.3-SNAPSHOT"), &gav_config(PrefixPolicy::Default, true));
        assert_eq!(variables[2], Variable::new("maven.version", "2.3"));
        assert!(logger.contains("Stripping '-SNAPSHOT'"));
    }

    #[test]
    fn versions_without_the_suffix_pass_through_unchanged() {
        let (variables, logger) = extract(&pom("2.3"), &gav_config(PrefixPolicy::Default, true));
        assert_eq!(variables[2], Variable::new("maven.version", "2.3"));
        assert!(!logger.contains("Stripping"));
    }

    #[test]
    fn only_the_trailing_snapshot_occurrence_is_stripped() {
        let (variables, _) = extract(
            &pom("2.3-SNAPSHOT-SNAPSHOT"),
            &gav_config(PrefixPolicy::Default, true),
        );
        assert_eq!(variables[2], Variable::new("maven.version", "2.3-SNAPSHOT"));
    }

    #[test]
    fn snapshot_flag_is_inert_when_disabled() {
        let (variables, _) =
            extract(&pom("2.3-SNAPSHOT"), &gav_config(PrefixPolicy::Default, false));
        assert_eq!(variables[2], Variable::new("maven.version", "2.3-SNAPSHOT"));
    }

    #[test]
    fn custom_mode_produces_exactly_one_variable() {
        let config = TaskConfiguration {
            project_file: None,
            mode: ExtractMode::Custom {
                variable_name: "myProperty".to_string(),
                element: "properties.myProperty".to_string(),
            },
            scope: VariableScope::JobLocal,
        };
        let (variables, _) = extract(&pom("1.0"), &config);
        assert_eq!(variables, vec![Variable::new("myProperty", "myValue")]);
    }

    #[test]
    fn every_variable_is_echoed_with_its_scope() {
        let config = TaskConfiguration {
            scope: VariableScope::Plan,
            ..gav_config(PrefixPolicy::Default, false)
        };
        let (_, logger) = extract(&pom("1.0"), &config);
        let entries = logger.entries();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].contains("plan variable maven.groupId to com.example"));
    }

    #[test]
    fn absent_elements_produce_empty_valued_variables() {
        let config = TaskConfiguration {
            project_file: None,
            mode: ExtractMode::Custom {
                variable_name: "description".to_string(),
                element: "description".to_string(),
            },
            scope: VariableScope::JobLocal,
        };
        let (variables, _) = extract(&pom("1.0"), &config);
        assert_eq!(variables, vec![Variable::new("description", "")]);
    }
}
