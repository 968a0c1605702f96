//! Group CSV storage exporter
//!
//! Coordinates several child exporters as one logical export:
//!
//! 1. Select the registered children whose key the group declares
//! 2. Reject the run if the number of matches differs from the number of
//!    declared keys (no child runs)
//! 3. Settle the run options (override hook, else defaults)
//! 4. Run every child concurrently and wait for all of them
//! 5. Generate the combined metadata, even when some children failed
//! 6. Succeed with the metadata if every child succeeded, else fail with the
//!    children's error messages, one per line, in launch order
//!
//! A child that returns an error (rather than a failed result), a child task
//! that panics, or a metadata error turns the whole run into a generic failed
//! result; nothing escapes the group as an error.

use crate::core::export::registry::{ExporterRegistry, Registration};
use crate::core::export::traits::{ExportGroup, Exporter};
use crate::domain::context::ResultExt;
use crate::domain::{
    AgentError, ExportExecutionContext, ExportResult, ExporterKey, ExporterOptions, Result,
    StorageTarget,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Construction-time settings of a group exporter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupExporterSettings {
    /// Group name used in logs and reports
    pub name: String,

    /// Prefix of the group's file names
    pub export_file_prefix: String,

    /// Keys of the children the group expects to find registered
    pub child_exporters: Vec<ExporterKey>,
}

impl GroupExporterSettings {
    /// Create group settings
    pub fn new(
        name: impl Into<String>,
        export_file_prefix: impl Into<String>,
        child_exporters: Vec<ExporterKey>,
    ) -> Self {
        Self {
            name: name.into(),
            export_file_prefix: export_file_prefix.into(),
            child_exporters,
        }
    }
}

/// Exports a group of children and records combined metadata
pub struct CsvStorageGroupExporter<G: ExportGroup> {
    group: G,
    registry: Arc<ExporterRegistry>,
    settings: GroupExporterSettings,
}

impl<G: ExportGroup> CsvStorageGroupExporter<G> {
    /// Create a new group exporter over `registry`
    pub fn new(group: G, registry: Arc<ExporterRegistry>, settings: GroupExporterSettings) -> Self {
        Self {
            group,
            registry,
            settings,
        }
    }

    /// The group policy
    pub fn group(&self) -> &G {
        &self.group
    }

    /// Group settings
    pub fn settings(&self) -> &GroupExporterSettings {
        &self.settings
    }

    /// Run the group export
    ///
    /// Always returns `Ok`; every failure mode is reported as a failed
    /// [`ExportResult`].
    pub async fn run(
        &self,
        context: &ExportExecutionContext,
        storage_targets: &[StorageTarget],
    ) -> Result<ExportResult> {
        tracing::info!(
            group = %self.settings.name,
            context = %context.to_json(),
            "Exporting the group data"
        );

        let children = self.registry.select(&self.settings.child_exporters);

        let export_types = children
            .iter()
            .map(|child| child.exporter.group_item_type())
            .collect::<Vec<_>>()
            .join(",");
        tracing::info!(
            group = %self.settings.name,
            export_types = %export_types,
            "Exporting the data for children"
        );

        let expected = self.settings.child_exporters.len();
        if children.len() != expected {
            let message = format!(
                "Missing exporters from runtime. Expecting {expected}, Found {}",
                children.len()
            );
            tracing::warn!(
                group = %self.settings.name,
                expected,
                found = children.len(),
                "Missing exporters from runtime"
            );
            return Ok(ExportResult::fail(message));
        }

        let options = self
            .group
            .create_exporter_options(context, storage_targets)
            .unwrap_or_else(|| self.create_default_options(context, storage_targets));

        match self.fan_out(children, options, storage_targets).await {
            Ok(result) => Ok(result),
            Err(e) => {
                let message = format!(
                    "Error in generating the exports. export context: {}",
                    context.to_json()
                );
                tracing::error!(
                    group = %self.settings.name,
                    error = %e,
                    context = %context.to_json(),
                    "Error in generating the exports"
                );
                Ok(ExportResult::fail(message))
            }
        }
    }

    /// Run all children concurrently, then build metadata and the combined
    /// result
    async fn fan_out(
        &self,
        children: Vec<Registration>,
        options: ExporterOptions,
        storage_targets: &[StorageTarget],
    ) -> Result<ExportResult> {
        let options = Arc::new(options);
        let targets: Arc<[StorageTarget]> = Arc::from(storage_targets);

        let keys: Vec<ExporterKey> = children.iter().map(|child| child.key.clone()).collect();
        let tasks = children.into_iter().map(|child| {
            let options = Arc::clone(&options);
            let targets = Arc::clone(&targets);
            tokio::spawn(async move { child.exporter.run(&options, &targets).await })
        });

        // join_all keeps launch order and waits for every task
        let outcomes = futures::future::join_all(tasks).await;

        let mut results = Vec::with_capacity(outcomes.len());
        for (key, outcome) in keys.iter().zip(outcomes) {
            let result = outcome
                .map_err(|e| AgentError::Other(format!("Child export task did not complete: {e}")))
                .and_then(|result| result)
                .with_context(|| format!("Child exporter '{key}' failed"))?;
            results.push(result);
        }

        let metadata = self
            .group
            .generate_metadata(&results, &options, &targets)
            .await?;

        let errors: Vec<&str> = results.iter().filter_map(ExportResult::error).collect();
        if errors.is_empty() {
            tracing::info!(
                group = %self.settings.name,
                children = results.len(),
                metadata_file = %metadata.file,
                count = metadata.count,
                "Group export completed"
            );
            return Ok(ExportResult::success(metadata.file, metadata.count));
        }

        tracing::warn!(
            group = %self.settings.name,
            failed = errors.len(),
            children = results.len(),
            metadata_file = %metadata.file,
            "Group export completed with failures"
        );
        Ok(ExportResult::fail(errors.join("\n")))
    }

    fn create_default_options(
        &self,
        context: &ExportExecutionContext,
        storage_targets: &[StorageTarget],
    ) -> ExporterOptions {
        ExporterOptions::new(
            context.as_of_date,
            storage_targets,
            self.settings.export_file_prefix.as_str(),
        )
    }
}

#[async_trait]
impl<G: ExportGroup> Exporter for CsvStorageGroupExporter<G> {
    fn name(&self) -> &str {
        &self.settings.name
    }

    async fn run(
        &self,
        context: &ExportExecutionContext,
        storage_targets: &[StorageTarget],
    ) -> Result<ExportResult> {
        CsvStorageGroupExporter::run(self, context, storage_targets).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::traits::{ExportMetadata, GroupItemExporter};
    use chrono::NaiveDate;

    struct Child(&'static str, Option<&'static str>);

    #[async_trait]
    impl GroupItemExporter for Child {
        fn group_item_type(&self) -> &str {
            self.0
        }

        async fn run(
            &self,
            _options: &ExporterOptions,
            _storage_targets: &[StorageTarget],
        ) -> Result<ExportResult> {
            Ok(match self.1 {
                Some(error) => ExportResult::fail(error),
                None => ExportResult::success(format!("{}.csv", self.0), 1),
            })
        }
    }

    struct CountingGroup;

    #[async_trait]
    impl ExportGroup for CountingGroup {
        async fn generate_metadata(
            &self,
            results: &[ExportResult],
            options: &ExporterOptions,
            _storage_targets: &[StorageTarget],
        ) -> Result<ExportMetadata> {
            Ok(ExportMetadata::new(
                format!("{}_manifest.json", options.export_file_prefix()),
                results.iter().map(ExportResult::count).sum(),
            ))
        }
    }

    fn key(value: &str) -> ExporterKey {
        ExporterKey::new(value).unwrap()
    }

    fn context() -> ExportExecutionContext {
        ExportExecutionContext::new(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
    }

    #[tokio::test]
    async fn test_group_success_uses_metadata() {
        let registry = ExporterRegistry::new()
            .with(key("a"), Arc::new(Child("A", None)))
            .with(key("b"), Arc::new(Child("B", None)));
        let exporter = CsvStorageGroupExporter::new(
            CountingGroup,
            Arc::new(registry),
            GroupExporterSettings::new("daily", "daily", vec![key("a"), key("b")]),
        );

        let result = exporter.run(&context(), &[]).await.unwrap();

        assert_eq!(result, ExportResult::success("daily_manifest.json", 2));
    }

    #[tokio::test]
    async fn test_group_missing_child_is_rejected() {
        let registry = ExporterRegistry::new().with(key("a"), Arc::new(Child("A", None)));
        let exporter = CsvStorageGroupExporter::new(
            CountingGroup,
            Arc::new(registry),
            GroupExporterSettings::new("daily", "daily", vec![key("a"), key("b")]),
        );

        let result = exporter.run(&context(), &[]).await.unwrap();

        assert_eq!(
            result.error(),
            Some("Missing exporters from runtime. Expecting 2, Found 1")
        );
    }

    #[tokio::test]
    async fn test_group_failure_joins_child_errors() {
        let registry = ExporterRegistry::new()
            .with(key("a"), Arc::new(Child("A", Some("a broke"))))
            .with(key("b"), Arc::new(Child("B", None)))
            .with(key("c"), Arc::new(Child("C", Some("c broke"))));
        let exporter = CsvStorageGroupExporter::new(
            CountingGroup,
            Arc::new(registry),
            GroupExporterSettings::new("daily", "daily", vec![key("a"), key("b"), key("c")]),
        );

        let result = exporter.run(&context(), &[]).await.unwrap();

        assert_eq!(result.error(), Some("a broke\nc broke"));
    }
}
