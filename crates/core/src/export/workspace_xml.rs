//! `workspace.xml` rendering.
//!
//! One `<project>` root, one `<component>` child, one empty `<property/>`
//! element per exported property carrying `name` and `value` attributes.

use super::properties::ExportedProperty;

pub const COMPONENT_NAME: &str = "PropertiesComponent";

pub fn render_workspace(properties: &[ExportedProperty]) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<project version=\"4\">\n");
    xml.push_str(&format!("  <component name=\"{}\">\n", COMPONENT_NAME));

    for property in properties {
        xml.push_str(&format!(
            "    <property name=\"{}\" value=\"{}\" />\n",
            property.name,
            escape_xml(&property.value)
        ));
    }

    xml.push_str("  </component>\n");
    xml.push_str("</project>\n");
    xml
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
        .replace('\n', "&#10;")
        .replace('\r', "&#13;")
        .replace('\t', "&#9;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::properties::PropertiesBuilder;

    #[test]
    fn test_render_workspace() {
        let properties = PropertiesBuilder::new(
            r#"["/repo/a/b:", "/repo/x/y::"]"#,
            "/repo/a/b",
            "0.0.4",
        )
        .incremental_import(Some(1337))
        .build();

        insta::assert_snapshot!(render_workspace(&properties), @r#"
        <?xml version="1.0" encoding="UTF-8"?>
        <project version="4">
          <component name="PropertiesComponent">
            <property name="targets" value="[&quot;/repo/a/b:&quot;, &quot;/repo/x/y::&quot;]" />
            <property name="project_path" value="/repo/a/b" />
            <property name="pants_idea_plugin_version" value="0.0.4" />
            <property name="incremental_import" value="1337" />
          </component>
        </project>
        "#);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
        assert_eq!(escape_xml("plain/path:name"), "plain/path:name");
        assert_eq!(escape_xml("a\tb\r\nc"), "a&#9;b&#13;&#10;c");
    }
}
