//! Rust source emission for translation components.
//!
//! Every component produces three kinds of files, one type per file:
//!
//! - the contract trait `I<Component>Translation`
//! - the bindable `<Component>TranslationManager`
//! - one `<Component>Translation<Language>` per language column
//!
//! The manager carries the explicit copy routine (`apply`) and the
//! implementation registry, so binding needs neither type discovery nor
//! property lookup by name at runtime.
//!
//! Output depends only on the component model, the module path and the
//! runtime crate path, so regenerating unchanged input is byte-identical.

use crate::component::{ComponentModel, LanguageColumn};
use crate::error::GeneratorError;
use crate::identifier::to_snake_case;
use crate::namespace::SEPARATOR;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Name this tool signs generated files with.
pub const GENERATOR_NAME: &str = "translation-generator";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Contract,
    Manager,
    Implementation,
}

impl ArtifactKind {
    fn label(self) -> &'static str {
        match self {
            ArtifactKind::Contract => "contract",
            ArtifactKind::Manager => "manager",
            ArtifactKind::Implementation => "implementation",
        }
    }
}

/// Source text of one generated type, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub kind: ArtifactKind,
    pub type_name: String,
    pub file_name: String,
    pub source: String,
}

/// A generated file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub type_name: String,
    pub path: PathBuf,
}

/// Renders and writes component modules.
#[derive(Debug, Clone)]
pub struct Emitter {
    runtime_crate: String,
}

impl Emitter {
    /// `runtime_crate` is the path generated code imports the runtime from.
    pub fn new(runtime_crate: impl Into<String>) -> Self {
        Self {
            runtime_crate: runtime_crate.into(),
        }
    }

    /// Render every artifact of a component: contract, manager, then one
    /// implementation per language column in table order.
    pub fn render(&self, component: &ComponentModel, namespace: &str) -> Vec<RenderedArtifact> {
        let mut artifacts = Vec::with_capacity(component.languages.len() + 2);

        artifacts.push(artifact(
            ArtifactKind::Contract,
            component.contract_name(),
            self.render_contract(component),
        ));
        artifacts.push(artifact(
            ArtifactKind::Manager,
            component.manager_name(),
            self.render_manager(component, namespace),
        ));
        for language in &component.languages {
            artifacts.push(artifact(
                ArtifactKind::Implementation,
                component.implementation_name(language),
                self.render_implementation(component, language, namespace),
            ));
        }

        artifacts
    }

    /// Write all artifacts of a component into `output_dir`.
    ///
    /// Existing files are overwritten. Files from earlier runs that this
    /// component no longer produces are left in place.
    pub fn emit(
        &self,
        component: &ComponentModel,
        namespace: &str,
        output_dir: &Path,
    ) -> Result<Vec<Artifact>, GeneratorError> {
        fs::create_dir_all(output_dir).map_err(|source| GeneratorError::WriteFailure {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let mut written = Vec::new();
        for rendered in self.render(component, namespace) {
            let path = output_dir.join(&rendered.file_name);
            fs::write(&path, &rendered.source).map_err(|source| GeneratorError::WriteFailure {
                path: path.clone(),
                source,
            })?;

            info!("Generated {}: {}", rendered.kind.label(), path.display());
            written.push(Artifact {
                kind: rendered.kind,
                type_name: rendered.type_name,
                path,
            });
        }

        Ok(written)
    }

    fn render_contract(&self, component: &ComponentModel) -> String {
        let contract = component.contract_name();
        let mut w = SourceWriter::new(component);

        w.line(format!("use {}::i18n::Translation;", self.runtime_crate));
        w.blank();

        let names: Vec<String> = component
            .properties
            .iter()
            .map(|p| format!("\"{}\"", escape_literal(&p.display)))
            .collect();
        w.line(format!(
            "/// Property names of [`{}`] in table order.",
            contract
        ));
        w.line(format!("pub const PROPERTIES: &[&str] = &[{}];", names.join(", ")));
        w.blank();

        w.line(format!(
            "/// Text every `{}` translation provides.",
            component.name
        ));
        w.line(format!("pub trait {}: Translation {{", contract));
        for property in &component.properties {
            w.line(format!("    fn {}(&self) -> &str;", property.field));
        }
        w.line("}");

        w.finish()
    }

    fn render_manager(&self, component: &ComponentModel, namespace: &str) -> String {
        let contract = component.contract_name();
        let manager = component.manager_name();
        let mut w = SourceWriter::new(component);

        w.line(format!(
            "use {}::i18n::{{Language, Translation, TranslationManager, TranslationRegistry}};",
            self.runtime_crate
        ));
        w.blank();
        w.line(use_sibling(namespace, &contract));
        for language in &component.languages {
            w.line(use_sibling(namespace, &component.implementation_name(language)));
        }
        w.blank();

        w.line(format!("/// Bindable holder for `{}` text.", component.name));
        w.line("#[derive(Debug, Clone, Default, PartialEq, Eq)]");
        w.line(format!("pub struct {} {{", manager));
        w.line("    bound_language: Option<Language>,");
        for property in &component.properties {
            w.line(format!("    {}: String,", property.field));
        }
        w.line("}");
        w.blank();

        write_translation_impl(&mut w, &manager, &component.name);
        w.blank();

        w.line(format!("impl {} for {} {{", contract, manager));
        w.methods(component.properties.iter().map(|property| {
            vec![
                format!("    fn {}(&self) -> &str {{", property.field),
                format!("        &self.{}", property.field),
                "    }".to_string(),
            ]
        }));
        w.line("}");
        w.blank();

        w.line(format!("impl TranslationManager for {} {{", manager));
        w.line(format!("    type Contract = dyn {};", contract));
        w.blank();
        w.line(format!(
            "    const COMPONENT: &'static str = \"{}\";",
            component.name
        ));
        w.blank();
        w.line("    fn registry() -> TranslationRegistry<Self::Contract> {");
        w.line("        TranslationRegistry::new(Self::COMPONENT)");
        for language in &component.languages {
            w.line(format!(
                "            .register(Language::new(\"{}\"), {}::create)",
                language.display,
                component.implementation_name(language)
            ));
        }
        w.line("    }");
        w.blank();
        w.line("    fn translation(&self) -> &Self::Contract {");
        w.line("        self");
        w.line("    }");
        w.blank();
        w.line("    fn language(&self) -> Option<&Language> {");
        w.line("        self.bound_language.as_ref()");
        w.line("    }");
        w.blank();
        w.line("    fn apply(&mut self, source: &Self::Contract, language: Language) {");
        for property in &component.properties {
            w.line(format!(
                "        self.{0} = source.{0}().to_owned();",
                property.field
            ));
        }
        w.line("        self.bound_language = Some(language);");
        w.line("    }");
        w.line("}");

        w.finish()
    }

    fn render_implementation(
        &self,
        component: &ComponentModel,
        language: &LanguageColumn,
        namespace: &str,
    ) -> String {
        let contract = component.contract_name();
        let implementation = component.implementation_name(language);
        let mut w = SourceWriter::new(component);

        w.line(format!("use {}::i18n::Translation;", self.runtime_crate));
        w.blank();
        w.line(use_sibling(namespace, &contract));
        w.blank();

        w.line(format!(
            "/// `{}` text in {}.",
            component.name, language.display
        ));
        w.line("#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]");
        w.line(format!("pub struct {};", implementation));
        w.blank();

        w.line(format!("impl {} {{", implementation));
        w.line("    /// Boxed instance for the manager's registry.");
        w.line(format!("    pub fn create() -> Box<dyn {}> {{", contract));
        w.line("        Box::new(Self)");
        w.line("    }");
        w.line("}");
        w.blank();

        write_translation_impl(&mut w, &implementation, &component.name);
        w.blank();

        w.line(format!("impl {} for {} {{", contract, implementation));
        w.methods(
            component
                .properties
                .iter()
                .zip(&language.values)
                .map(|(property, value)| {
                    vec![
                        format!("    fn {}(&self) -> &str {{", property.field),
                        format!("        \"{}\"", escape_literal(value)),
                        "    }".to_string(),
                    ]
                }),
        );
        w.line("}");

        w.finish()
    }
}

/// Escape text for a Rust string literal.
///
/// Besides backslashes and double quotes, control characters are escaped:
/// a stray `\r` left over from `\r\r\n` line endings is not allowed bare in
/// Rust source.
pub fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\r' => escaped.push_str("\\r"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{{{:x}}}", c as u32)),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// File name for a generated type.
pub fn file_name_for(type_name: &str) -> String {
    format!("{}.rs", to_snake_case(type_name))
}

fn artifact(kind: ArtifactKind, type_name: String, source: String) -> RenderedArtifact {
    RenderedArtifact {
        kind,
        file_name: file_name_for(&type_name),
        type_name,
        source,
    }
}

fn use_sibling(namespace: &str, type_name: &str) -> String {
    format!(
        "use {ns}{sep}{module}{sep}{ty};",
        ns = namespace,
        sep = SEPARATOR,
        module = to_snake_case(type_name),
        ty = type_name
    )
}

fn write_translation_impl(w: &mut SourceWriter, type_name: &str, component: &str) {
    w.line(format!("impl Translation for {} {{", type_name));
    w.line("    fn component(&self) -> &'static str {");
    w.line(format!("        \"{}\"", component));
    w.line("    }");
    w.line("}");
}

/// Line-oriented builder for generated files.
struct SourceWriter {
    out: String,
}

impl SourceWriter {
    fn new(component: &ComponentModel) -> Self {
        let mut writer = Self { out: String::new() };
        writer.line(format!(
            "// Generated by {} from {}. Do not edit by hand.",
            GENERATOR_NAME, component.table_file
        ));
        writer.blank();
        writer
    }

    fn line(&mut self, text: impl AsRef<str>) {
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Method bodies separated by blank lines.
    fn methods(&mut self, methods: impl Iterator<Item = Vec<String>>) {
        for (i, lines) in methods.enumerate() {
            if i > 0 {
                self.blank();
            }
            for line in lines {
                self.line(line);
            }
        }
    }

    fn finish(self) -> String {
        self.out
    }
}
