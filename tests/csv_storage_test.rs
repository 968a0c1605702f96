//! End-to-end tests writing CSV files and manifests to local storage

use async_trait::async_trait;
use chrono::NaiveDate;
use export_agent::adapters::csv::{CsvFileExporter, CsvSettings};
use export_agent::adapters::manifest::{ExportManifest, ManifestGroup};
use export_agent::adapters::notification::TracingNotifier;
use export_agent::adapters::storage::{LocalStorageWriter, StorageWriter};
use export_agent::core::export::{
    CsvStorageExporter, CsvStorageGroupExporter, ExportDataSource, ExportRunner,
    ExporterRegistry, ExporterSettings, GroupExporterSettings,
};
use export_agent::domain::{
    ExportExecutionContext, ExportResult, ExporterKey, Result, StorageTarget,
};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

#[derive(Debug, Clone, Serialize)]
struct Trade {
    trade_id: u64,
    symbol: String,
    quantity: i64,
}

#[derive(Debug, Clone, Serialize)]
struct Price {
    symbol: String,
    close: f64,
}

struct TradeSource;

#[async_trait]
impl ExportDataSource for TradeSource {
    type Item = Trade;

    fn item_type(&self) -> &str {
        "trades"
    }

    async fn prepare_data(&self, _context: &ExportExecutionContext) -> Result<Option<Vec<Trade>>> {
        Ok(Some(vec![
            Trade {
                trade_id: 1,
                symbol: "AAPL".to_string(),
                quantity: 100,
            },
            Trade {
                trade_id: 2,
                symbol: "MSFT".to_string(),
                quantity: -50,
            },
        ]))
    }
}

struct PriceSource {
    available: bool,
}

#[async_trait]
impl ExportDataSource for PriceSource {
    type Item = Price;

    fn item_type(&self) -> &str {
        "prices"
    }

    async fn prepare_data(&self, _context: &ExportExecutionContext) -> Result<Option<Vec<Price>>> {
        if !self.available {
            return Ok(None);
        }
        Ok(Some(vec![Price {
            symbol: "AAPL".to_string(),
            close: 187.5,
        }]))
    }
}

fn local_target(dir: &Path, name: &str) -> StorageTarget {
    StorageTarget::new(name, dir.join(name).to_string_lossy().to_string())
}

fn context() -> ExportExecutionContext {
    ExportExecutionContext::new(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
}

fn build_group(
    storage: Arc<dyn StorageWriter>,
    prices_available: bool,
) -> CsvStorageGroupExporter<ManifestGroup> {
    let file_exporter = Arc::new(CsvFileExporter::new(storage.clone(), CsvSettings::default()));

    let trades = CsvStorageExporter::new(
        TradeSource,
        file_exporter.clone(),
        ExporterSettings::new("trades"),
    );
    let prices = CsvStorageExporter::new(
        PriceSource {
            available: prices_available,
        },
        file_exporter,
        ExporterSettings::new("prices"),
    );

    let registry = ExporterRegistry::new()
        .with(ExporterKey::new("trades").unwrap(), Arc::new(trades))
        .with(ExporterKey::new("prices").unwrap(), Arc::new(prices));

    CsvStorageGroupExporter::new(
        ManifestGroup::new(storage, "%Y%m%d").unwrap(),
        Arc::new(registry),
        GroupExporterSettings::new(
            "end-of-day",
            "eod",
            vec![
                ExporterKey::new("trades").unwrap(),
                ExporterKey::new("prices").unwrap(),
            ],
        ),
    )
}

#[tokio::test]
async fn test_single_export_writes_csv_to_every_target() {
    let temp_dir = TempDir::new().unwrap();
    let targets = vec![
        local_target(temp_dir.path(), "primary"),
        local_target(temp_dir.path(), "backup"),
    ];
    let exporter = CsvStorageExporter::new(
        TradeSource,
        Arc::new(CsvFileExporter::new(
            Arc::new(LocalStorageWriter::new()),
            CsvSettings::default(),
        )),
        ExporterSettings::new("trades"),
    );

    let result = exporter.run(&context(), &targets).await.unwrap();

    assert_eq!(result, ExportResult::success("trades_20240131.csv", 2));
    for target in ["primary", "backup"] {
        let written =
            std::fs::read_to_string(temp_dir.path().join(target).join("trades_20240131.csv"))
                .unwrap();
        assert_eq!(
            written,
            "trade_id,symbol,quantity\n1,AAPL,100\n2,MSFT,-50\n"
        );
    }
}

#[tokio::test]
async fn test_group_export_writes_children_and_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let targets = vec![local_target(temp_dir.path(), "primary")];
    let exporter = build_group(Arc::new(LocalStorageWriter::new()), true);

    let report = ExportRunner::new(Arc::new(TracingNotifier))
        .execute(&exporter, &context(), &targets)
        .await;

    assert!(report.is_successful());
    assert_eq!(report.exporter, "end-of-day");
    assert_eq!(
        report.result,
        ExportResult::success("eod_20240131_manifest.json", 3)
    );

    let primary = temp_dir.path().join("primary");
    assert!(primary.join("trades_20240131.csv").exists());
    assert_eq!(
        std::fs::read_to_string(primary.join("prices_20240131.csv")).unwrap(),
        "symbol,close\nAAPL,187.5\n"
    );

    let manifest: ExportManifest = serde_json::from_str(
        &std::fs::read_to_string(primary.join("eod_20240131_manifest.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(manifest.total_count, 3);
    assert_eq!(manifest.succeeded, 2);
    assert_eq!(manifest.failed, 0);
    assert_eq!(
        manifest.entries,
        vec![
            ExportResult::success("trades_20240131.csv", 2),
            ExportResult::success("prices_20240131.csv", 1),
        ]
    );
}

#[tokio::test]
async fn test_group_export_with_failed_child_still_writes_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let targets = vec![local_target(temp_dir.path(), "primary")];
    let exporter = build_group(Arc::new(LocalStorageWriter::new()), false);

    let result = exporter.run(&context(), &targets).await.unwrap();

    assert_eq!(result.error(), Some("Invalid data from the source."));

    let primary = temp_dir.path().join("primary");
    assert!(primary.join("trades_20240131.csv").exists());
    assert!(!primary.join("prices_20240131.csv").exists());

    let manifest: ExportManifest = serde_json::from_str(
        &std::fs::read_to_string(primary.join("eod_20240131_manifest.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(manifest.failed, 1);
    assert_eq!(manifest.total_count, 2);
}
