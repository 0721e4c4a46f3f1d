//! Batch generation over a data root.
//!
//! Walks the data root for `.csv` tables, derives each table's module path
//! from its folder, and emits the component's modules either next to the
//! table or under a mirrored output root.

use crate::component::ComponentModel;
use crate::config::Config;
use crate::emitter::{file_name_for, Artifact, Emitter};
use crate::error::GeneratorError;
use crate::namespace::{base_module, derive_namespace, ANCHOR_FILE};
use crate::table::Table;
use crate::validator::TranslationValidator;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use walkdir::WalkDir;

/// Extension of translation tables, matched case-insensitively.
pub const TABLE_EXTENSION: &str = "csv";

/// Outcome of one generated table.
#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub table: PathBuf,
    pub component: String,
    pub namespace: String,
    pub artifacts: Vec<Artifact>,
    pub warnings: Vec<String>,
}

/// A table that could not be generated.
#[derive(Debug, Clone, Serialize)]
pub struct TableFailure {
    pub table: PathBuf,
    pub error: String,
}

/// Summary of a generation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    pub base_module: String,
    pub tables: Vec<TableReport>,
    /// Tables with a header but no rows
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<TableFailure>,
}

impl GenerationReport {
    pub fn artifact_count(&self) -> usize {
        self.tables.iter().map(|t| t.artifacts.len()).sum()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

enum TableOutcome {
    Generated(TableReport),
    Skipped,
}

pub struct Generator {
    config: Config,
    emitter: Emitter,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        let emitter = Emitter::new(config.runtime_crate.clone());
        Self { config, emitter }
    }

    /// Generate every table under the data root.
    ///
    /// Failures of the data root or anchor file end the run. A failing table
    /// ends it only with `fail_fast`; otherwise it is logged, recorded in the
    /// report, and the remaining tables are still processed.
    pub fn run(&self) -> Result<GenerationReport, GeneratorError> {
        let root = &self.config.data_root;
        if !root.is_dir() {
            return Err(GeneratorError::DataRootNotFound { path: root.clone() });
        }

        let base = base_module(&root.join(ANCHOR_FILE))?;
        info!("Base module: {}", base);

        let mut report = GenerationReport {
            base_module: base.clone(),
            ..GenerationReport::default()
        };

        // Generated file -> table that produced it, across the whole run
        let mut claimed = HashMap::new();

        for path in self.discover()? {
            match self.generate_table(&base, &path, &mut claimed) {
                Ok(TableOutcome::Generated(table)) => report.tables.push(table),
                Ok(TableOutcome::Skipped) => {
                    warn!("Skipping {}: table has no rows", path.display());
                    report.skipped.push(path);
                }
                Err(e) if self.config.fail_fast => return Err(e),
                Err(e) => {
                    error!("Failed to generate {}: {}", path.display(), e);
                    report.failures.push(TableFailure {
                        table: path,
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Processed {} tables, wrote {} files ({} skipped, {} failed)",
            report.tables.len(),
            report.artifact_count(),
            report.skipped.len(),
            report.failures.len()
        );
        Ok(report)
    }

    /// Every table under the data root, in sorted path order.
    pub fn discover(&self) -> Result<Vec<PathBuf>, GeneratorError> {
        let root = &self.config.data_root;
        let mut tables = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| GeneratorError::ReadFailure {
                path: e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone()),
                source: e.into(),
            })?;

            if entry.file_type().is_file() && is_table(entry.path()) {
                tables.push(entry.into_path());
            }
        }

        Ok(tables)
    }

    /// Directory the artifacts of tables in `table_dir` are written to.
    pub fn output_dir(&self, table_dir: &Path) -> PathBuf {
        match &self.config.output_root {
            Some(output_root) => {
                let relative = table_dir
                    .strip_prefix(&self.config.data_root)
                    .unwrap_or(Path::new(""));
                output_root.join(relative)
            }
            None => table_dir.to_path_buf(),
        }
    }

    fn generate_table(
        &self,
        base: &str,
        path: &Path,
        claimed: &mut HashMap<PathBuf, PathBuf>,
    ) -> Result<TableOutcome, GeneratorError> {
        let table = Table::read(path)?;
        if table.rows().is_empty() {
            return Ok(TableOutcome::Skipped);
        }

        let component = ComponentModel::from_table(&table)?;
        let table_dir = path.parent().unwrap_or(&self.config.data_root);
        let namespace = derive_namespace(base, &self.config.data_root, table_dir)?;
        let output_dir = self.output_dir(table_dir);

        // Components in one folder must not write each other's files
        let planned: Vec<PathBuf> = component
            .type_names()
            .iter()
            .map(|name| output_dir.join(file_name_for(name)))
            .collect();
        if let Some((file, owner)) = planned
            .iter()
            .find_map(|file| claimed.get(file).map(|owner| (file, owner)))
        {
            return Err(GeneratorError::DuplicateIdentifier {
                path: path.to_path_buf(),
                kind: "file",
                name: format!("{} (already generated from {})", file.display(), owner.display()),
            });
        }

        let validation = TranslationValidator::validate(&component);
        for warning in &validation.warnings {
            warn!("{}: {}", path.display(), warning);
        }

        let artifacts = self.emitter.emit(&component, &namespace, &output_dir)?;
        for file in planned {
            claimed.insert(file, path.to_path_buf());
        }

        Ok(TableOutcome::Generated(TableReport {
            table: path.to_path_buf(),
            component: component.name,
            namespace,
            artifacts,
            warnings: validation.warnings,
        }))
    }
}

fn is_table(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(TABLE_EXTENSION))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // ==================== Test Helpers ====================

    fn data_root() -> TempDir {
        let dir = TempDir::new().expect("tempdir");
        fs::write(
            dir.path().join(ANCHOR_FILE),
            "//! module crate::translations;\n",
        )
        .expect("write anchor");
        dir
    }

    fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).expect("create dirs");
        fs::write(&path, content).expect("write table");
        path
    }

    // ==================== Discovery Tests ====================

    #[test]
    fn test_discover_is_sorted_and_recursive() {
        let root = data_root();
        write(root.path(), "Pages/Counter/CounterTranslations.csv", "property_name;en\n");
        write(root.path(), "AppTranslations.CSV", "property_name;en\n");
        write(root.path(), "notes.txt", "not a table");

        let generator = Generator::new(Config::new(root.path()));
        let tables = generator.discover().expect("Should discover");

        assert_eq!(
            tables,
            vec![
                root.path().join("AppTranslations.CSV"),
                root.path().join("Pages/Counter/CounterTranslations.csv"),
            ]
        );
    }

    #[test]
    fn test_output_dir_defaults_to_table_dir() {
        let generator = Generator::new(Config::new("/data"));
        assert_eq!(
            generator.output_dir(Path::new("/data/Pages")),
            PathBuf::from("/data/Pages")
        );
    }

    #[test]
    fn test_output_dir_mirrors_layout() {
        let mut config = Config::new("/data");
        config.output_root = Some(PathBuf::from("/out"));
        let generator = Generator::new(config);

        assert_eq!(
            generator.output_dir(Path::new("/data/Pages/Counter")),
            PathBuf::from("/out/Pages/Counter")
        );
        assert_eq!(generator.output_dir(Path::new("/data")), PathBuf::from("/out"));
    }

    // ==================== Run Tests ====================

    #[test]
    fn test_run_generates_components() {
        let root = data_root();
        write(
            root.path(),
            "Pages/CounterTranslations.csv",
            "property_name;english;hungarian\npage_title;Counter;Számláló\n",
        );

        let report = Generator::new(Config::new(root.path())).run().expect("Should run");

        assert_eq!(report.base_module, "crate::translations");
        assert_eq!(report.tables.len(), 1);
        assert_eq!(report.tables[0].component, "Counter");
        assert_eq!(report.tables[0].namespace, "crate::translations::Pages");
        assert_eq!(report.artifact_count(), 4);
        assert!(root.path().join("Pages/counter_translation_manager.rs").exists());
        assert!(!report.has_failures());
    }

    #[test]
    fn test_run_skips_header_only_tables() {
        let root = data_root();
        let path = write(root.path(), "EmptyTranslations.csv", "property_name;english\n");

        let report = Generator::new(Config::new(root.path())).run().expect("Should run");

        assert_eq!(report.skipped, vec![path]);
        assert_eq!(report.artifact_count(), 0);
    }

    #[test]
    fn test_run_continues_past_failing_table() {
        let root = data_root();
        write(root.path(), "ATranslations.csv", "name;english\nx;y\n");
        write(root.path(), "BTranslations.csv", "property_name;english\nok;Fine\n");

        let report = Generator::new(Config::new(root.path())).run().expect("Should run");

        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].table.ends_with("ATranslations.csv"));
        assert!(report.failures[0].error.contains("property_name"));
        assert_eq!(report.tables.len(), 1);
        assert!(report.has_failures());
    }

    #[test]
    fn test_run_fail_fast_stops() {
        let root = data_root();
        write(root.path(), "ATranslations.csv", "name;english\nx;y\n");
        write(root.path(), "BTranslations.csv", "property_name;english\nok;Fine\n");

        let mut config = Config::new(root.path());
        config.fail_fast = true;
        let result = Generator::new(config).run();

        assert!(matches!(result, Err(GeneratorError::MissingKeyColumn { .. })));
        assert!(!root.path().join("b_translation_manager.rs").exists());
    }

    #[test]
    fn test_run_rejects_colliding_file_names() {
        let root = data_root();
        write(root.path(), "ABTestTranslations.csv", "property_name;en\ntitle;First\n");
        write(root.path(), "AbTestTranslations.csv", "property_name;en\ntitle;Second\n");

        let report = Generator::new(Config::new(root.path())).run().expect("Should run");

        assert_eq!(report.tables.len(), 1);
        assert_eq!(report.tables[0].component, "ABTest");
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].table.ends_with("AbTestTranslations.csv"));
        assert!(report.failures[0].error.contains("ab_test_translation_manager.rs"));

        let english = fs::read_to_string(root.path().join("ab_test_translation_en.rs"))
            .expect("read implementation");
        assert!(english.contains("\"First\""));
    }

    #[test]
    fn test_run_allows_same_component_in_other_folders() {
        let root = data_root();
        write(root.path(), "Pages/HomeTranslations.csv", "property_name;en\ntitle;A\n");
        write(root.path(), "Admin/HomeTranslations.csv", "property_name;en\ntitle;B\n");

        let report = Generator::new(Config::new(root.path())).run().expect("Should run");
        assert!(!report.has_failures());
        assert_eq!(report.tables.len(), 2);
    }

    #[test]
    fn test_run_records_validation_warnings() {
        let root = data_root();
        write(
            root.path(),
            "GreetingTranslations.csv",
            "property_name;english;hungarian\nwelcome;Hi {name};Szia\n",
        );

        let report = Generator::new(Config::new(root.path())).run().expect("Should run");
        assert_eq!(report.tables[0].warnings.len(), 1);
        assert!(report.tables[0].warnings[0].contains("Placeholder mismatch"));
    }

    #[test]
    fn test_run_missing_data_root() {
        let result = Generator::new(Config::new("/nonexistent/translations")).run();
        assert!(matches!(result, Err(GeneratorError::DataRootNotFound { .. })));
    }

    #[test]
    fn test_run_missing_anchor() {
        let root = TempDir::new().expect("tempdir");
        let result = Generator::new(Config::new(root.path())).run();
        assert!(matches!(result, Err(GeneratorError::AnchorNotFound { .. })));
    }

    #[test]
    fn test_report_serializes() {
        let root = data_root();
        write(root.path(), "GreetingTranslations.csv", "property_name;english\nhi;Hello\n");

        let report = Generator::new(Config::new(root.path())).run().expect("Should run");
        let json = serde_json::to_string(&report).expect("Should serialize");

        assert!(json.contains("\"base_module\":\"crate::translations\""));
        assert!(json.contains("\"kind\":\"manager\""));
    }
}
