//! Value extraction: resolving a path expression against a descriptor.

use crate::model::Descriptor;
use crate::path::{self, Segment};

/// Resolves path expressions against one parsed descriptor.
///
/// Resolution is pure and never fails: any path that does not reach a
/// scalar leaf (absent element, missing property key, out-of-range index,
/// leftover segments after a scalar, or a terminal list/map node) yields
/// the empty string.
pub struct PomValueExtractor {
    descriptor: Descriptor,
}

impl PomValueExtractor {
    pub fn new(descriptor: Descriptor) -> Self {
        Self { descriptor }
    }

    pub fn value(&self, expression: &str) -> String {
        let mut current = self.descriptor.root();

        for segment in path::parse(expression) {
            let next = match segment {
                Segment::Name(name) => current.child(&name),
                Segment::Indexed(name, index) => {
                    current.child(&name).and_then(|list| list.index(index))
                }
                Segment::Key(key) => current.child(&key),
            };
            match next {
                Some(node) => current = node,
                None => return String::new(),
            }
        }

        current.as_scalar().unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC_POM: &str = r#"<project>
        <modelVersion>4.0.0</modelVersion>
        <groupId>com.example.build</groupId>
        <artifactId>pom-parser</artifactId>
        <version>2.3-SNAPSHOT</version>
        <properties>
            <myProperty>myValue</myProperty>
            <source.code.level>1.6</source.code.level>
        </properties>
        <dependencies>
            <dependency>
                <groupId>org.apache.maven</groupId>
                <artifactId>maven-model</artifactId>
                <version>3.0.4</version>
            </dependency>
            <dependency>
                <groupId>junit</groupId>
                <artifactId>junit</artifactId>
                <version>4.10</version>
                <scope>test</scope>
            </dependency>
            <dependency>
                <groupId>commons-beanutils</groupId>
                <artifactId>commons-beanutils</artifactId>
                <version>1.8.3</version>
            </dependency>
            <dependency>
                <groupId>org.hamcrest</groupId>
                <artifactId>hamcrest-all</artifactId>
                <version>1.1</version>
                <scope>test</scope>
            </dependency>
        </dependencies>
    </project>"#;

    const PARENT_POM: &str = r#"<project>
        <groupId>com.example.build</groupId>
        <artifactId>parent</artifactId>
        <version>1.0</version>
        <packaging>pom</packaging>
        <modules>
            <module>module-1</module>
            <module>module-2</module>
        </modules>
    </project>"#;

    fn extractor(text: &str) -> PomValueExtractor {
        PomValueExtractor::new(Descriptor::parse(text).unwrap())
    }

    #[test]
    fn the_gav_can_be_extracted() {
        let extractor = extractor(BASIC_POM);
        assert_eq!(extractor.value("groupId"), "com.example.build");
        assert_eq!(extractor.value("artifactId"), "pom-parser");
        assert_eq!(extractor.value("version"), "2.3-SNAPSHOT");
    }

    #[test]
    fn list_elements_resolve_through_indexed_segments() {
        let extractor = extractor(BASIC_POM);
        assert_eq!(extractor.value("dependencies[0].groupId"), "org.apache.maven");
        assert_eq!(extractor.value("dependencies[0].artifactId"), "maven-model");
        assert_eq!(extractor.value("dependencies[0].version"), "3.0.4");
        assert_eq!(extractor.value("dependencies[3].groupId"), "org.hamcrest");
        assert_eq!(extractor.value("dependencies[3].artifactId"), "hamcrest-all");
        assert_eq!(extractor.value("dependencies[3].scope"), "test");
    }

    #[test]
    fn absent_values_resolve_to_the_empty_string() {
        let extractor = extractor(BASIC_POM);
        assert_eq!(extractor.value("description"), "");
        assert_eq!(extractor.value("dependencies[0].scope"), "");
    }

    #[test]
    fn out_of_range_index_resolves_to_the_empty_string() {
        let extractor = extractor(BASIC_POM);
        assert_eq!(extractor.value("dependencies[4].groupId"), "");
        assert_eq!(extractor.value("modules[0]"), "");
    }

    #[test]
    fn simple_properties_can_be_extracted() {
        let extractor = extractor(BASIC_POM);
        assert_eq!(extractor.value("properties.myProperty"), "myValue");
    }

    #[test]
    fn dotted_property_keys_need_the_parenthesized_form() {
        let extractor = extractor(BASIC_POM);
        assert_eq!(extractor.value("properties(source.code.level)"), "1.6");
        // The dotted form traverses nonexistent intermediate nodes instead.
        assert_eq!(extractor.value("properties.source.code.level"), "");
    }

    #[test]
    fn module_entries_are_identifier_scalars() {
        let extractor = extractor(PARENT_POM);
        assert_eq!(extractor.value("modules[0]"), "module-1");
        assert_eq!(extractor.value("modules[1]"), "module-2");
    }

    #[test]
    fn segments_left_over_after_a_scalar_resolve_to_empty() {
        let extractor = extractor(BASIC_POM);
        assert_eq!(extractor.value("groupId.nested"), "");
    }

    #[test]
    fn terminal_list_or_map_nodes_resolve_to_empty() {
        let extractor = extractor(BASIC_POM);
        assert_eq!(extractor.value("dependencies"), "");
        assert_eq!(extractor.value("properties"), "");
        assert_eq!(extractor.value("dependencies[0]"), "");
    }

    #[test]
    fn malformed_indexes_resolve_to_empty() {
        let extractor = extractor(BASIC_POM);
        assert_eq!(extractor.value("dependencies[x].groupId"), "");
    }
}
