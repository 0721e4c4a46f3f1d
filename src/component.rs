//! Translation component model.
//!
//! One table becomes one component: a contract listing every property key,
//! a manager, and one implementation per language column. The model holds
//! everything the emitter needs with all names already normalized.

use crate::error::GeneratorError;
use crate::identifier::{
    component_name, to_display_case, to_field_name, to_snake_case, to_type_fragment,
};
use crate::table::Table;
use std::collections::HashSet;

/// Suffix stripped from table file names to get the component name.
pub const COMPONENT_SUFFIX: &str = "Translations";

/// A property of the contract, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Key as written in the table
    pub key: String,

    /// Display-case name (e.g. "PageTitle")
    pub display: String,

    /// Field and accessor name in generated code (e.g. "page_title")
    pub field: String,
}

/// One language column and its values, aligned with the properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageColumn {
    /// Header as written in the table
    pub column: String,

    /// Display-case language name used in type names (e.g. "Hungarian")
    pub display: String,

    /// One value per property; blank cells stay empty strings
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentModel {
    pub name: String,
    /// File name of the source table, recorded in generated headers
    pub table_file: String,
    pub properties: Vec<Property>,
    pub languages: Vec<LanguageColumn>,
}

impl ComponentModel {
    /// Build the model for a parsed table.
    ///
    /// Fails when two keys, or two language columns, normalize to the same
    /// generated name, or when two generated types would share a file (a
    /// language column named `manager` yields the manager's own name).
    pub fn from_table(table: &Table) -> Result<ComponentModel, GeneratorError> {
        let path = table.path();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let table_file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut fields = HashSet::new();
        let mut properties = Vec::with_capacity(table.rows().len());
        for row in table.rows() {
            let key = table.key(row).trim();
            let property = Property {
                key: key.to_string(),
                display: to_display_case(key),
                field: to_field_name(key),
            };
            if !fields.insert(property.field.clone()) {
                return Err(GeneratorError::DuplicateIdentifier {
                    path: path.to_path_buf(),
                    kind: "property",
                    name: property.field,
                });
            }
            properties.push(property);
        }

        let mut names = HashSet::new();
        let mut languages = Vec::new();
        for (index, column) in table.columns().iter().enumerate() {
            if index == table.key_index() {
                continue;
            }

            let display = to_type_fragment(column);
            if !names.insert(display.clone()) {
                return Err(GeneratorError::DuplicateIdentifier {
                    path: path.to_path_buf(),
                    kind: "language",
                    name: display,
                });
            }

            let values = table
                .rows()
                .iter()
                .map(|row| row.get(index).unwrap_or_default().to_string())
                .collect();

            languages.push(LanguageColumn {
                column: column.clone(),
                display,
                values,
            });
        }

        let model = ComponentModel {
            name: component_name(&stem, COMPONENT_SUFFIX),
            table_file,
            properties,
            languages,
        };

        let mut files = HashSet::new();
        for type_name in model.type_names() {
            if !files.insert(to_snake_case(&type_name)) {
                return Err(GeneratorError::DuplicateIdentifier {
                    path: path.to_path_buf(),
                    kind: "type",
                    name: type_name,
                });
            }
        }

        Ok(model)
    }

    /// Every generated type name: contract, manager, then implementations.
    pub fn type_names(&self) -> Vec<String> {
        let mut names = vec![self.contract_name(), self.manager_name()];
        names.extend(self.languages.iter().map(|l| self.implementation_name(l)));
        names
    }

    /// `I<Component>Translation`
    pub fn contract_name(&self) -> String {
        format!("I{}Translation", self.name)
    }

    /// `<Component>TranslationManager`
    pub fn manager_name(&self) -> String {
        format!("{}TranslationManager", self.name)
    }

    /// `<Component>Translation<Language>`
    pub fn implementation_name(&self, language: &LanguageColumn) -> String {
        format!("{}Translation{}", self.name, language.display)
    }
}
