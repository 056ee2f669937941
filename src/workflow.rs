//! The three-phase export workflow: SVG export, then PNG, then WebP.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::batch::{Phase, PhaseReport, WorkflowReport, run_bounded};
use crate::config::WorkflowConfig;
use crate::error::{Result, WorkflowError};
use crate::export::SvgExporter;
use crate::icon::IconLibrary;
use crate::raster::{RasterConverter, RasterFormat};
use crate::theme::ThemeMode;

/// One raster conversion: a themed SVG file rendered to one output file.
#[derive(Debug, Clone)]
struct RasterJob {
    svg_path: PathBuf,
    output_path: PathBuf,
    theme: ThemeMode,
}

/// Drives the export and raster phases over an icon library.
pub struct SvgWorkflow {
    config: WorkflowConfig,
    library: Arc<IconLibrary>,
}

impl SvgWorkflow {
    /// Creates a workflow after validating `config`.
    ///
    /// Directories in `config` are used as given; call
    /// [`WorkflowConfig::resolved`] first to anchor them at a root.
    pub fn new(config: WorkflowConfig, library: IconLibrary) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            library: Arc::new(library),
        })
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Runs all three phases in order.
    ///
    /// Per-item failures are collected in the report; only an unusable SVG
    /// output directory is returned as an error.
    pub async fn run(&self) -> Result<WorkflowReport> {
        let mut report = WorkflowReport::default();
        report.phases.push(self.run_svg().await?);
        report.phases.push(self.run_png().await?);
        report.phases.push(self.run_webp().await?);

        info!(failed = report.total_failures(), "Workflow finished");
        Ok(report)
    }

    /// Exports every variant of every icon with a primary color.
    pub async fn run_svg(&self) -> Result<PhaseReport> {
        let svg_dir = &self.config.svg_dir;
        std::fs::create_dir_all(svg_dir).map_err(|e| WorkflowError::io(svg_dir, e))?;

        let exporter = SvgExporter::new(svg_dir);
        let library = Arc::clone(&self.library);
        let items: Vec<_> = self
            .library
            .iter()
            .enumerate()
            .filter(|(_, icon)| icon.is_exportable())
            .map(|(index, icon)| (icon.title.clone(), index))
            .collect();

        info!(icons = items.len(), dir = %svg_dir.display(), "Exporting SVG");
        let report = run_bounded(Phase::Svg, items, self.config.concurrency, move |index: usize| {
            exporter.export_icon(&library.icons[index])
        })
        .await;
        Ok(report)
    }

    /// Rasterizes every SVG in the export directory for every theme.
    pub async fn run_png(&self) -> Result<PhaseReport> {
        self.run_raster(RasterFormat::Png).await
    }

    /// Same as [`run_png`](Self::run_png) but encodes WebP.
    pub async fn run_webp(&self) -> Result<PhaseReport> {
        self.run_raster(RasterFormat::WebP).await
    }

    async fn run_raster(&self, format: RasterFormat) -> Result<PhaseReport> {
        let phase = match format {
            RasterFormat::Png => Phase::Png,
            RasterFormat::WebP => Phase::WebP,
        };

        let svg_files = list_svg_files(&self.config.svg_dir)?;
        if svg_files.is_empty() {
            warn!(dir = %self.config.svg_dir.display(), "No SVG files to convert");
        }

        let out_root = self.config.raster_dir(format);
        let jobs: Vec<_> = svg_files
            .iter()
            .flat_map(|svg_path| {
                self.config.themes.iter().map(move |theme| {
                    let output_path = raster_output_path(out_root, theme, svg_path, format);
                    (
                        output_path.display().to_string(),
                        RasterJob {
                            svg_path: svg_path.clone(),
                            output_path,
                            theme: theme.clone(),
                        },
                    )
                })
            })
            .collect();

        info!(files = svg_files.len(), jobs = jobs.len(), "Converting SVG to {format}");
        let converter = RasterConverter::new(self.config.height, self.config.placeholder.clone());
        let report = run_bounded(phase, jobs, self.config.concurrency, move |job: RasterJob| {
            converter.convert(&job.svg_path, &job.output_path, &job.theme, format)
        })
        .await;
        Ok(report)
    }
}

/// Lists `*.svg` files directly inside `dir`, sorted by path.
pub fn list_svg_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| WorkflowError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| WorkflowError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "svg") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// `<root>/<theme>/<stem>.<ext>` for an SVG file.
pub fn raster_output_path(
    root: &Path,
    theme: &ThemeMode,
    svg_path: &Path,
    format: RasterFormat,
) -> PathBuf {
    let stem = svg_path.file_stem().unwrap_or(svg_path.as_os_str());
    root.join(&theme.name)
        .join(format!("{}.{}", stem.to_string_lossy(), format.extension()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_uses_theme_dir_and_extension() {
        let path = raster_output_path(
            Path::new("/out/png"),
            &ThemeMode::dark(),
            Path::new("/svg/cube-stack-text-cn.svg"),
            RasterFormat::Png,
        );
        assert_eq!(path, Path::new("/out/png/dark/cube-stack-text-cn.png"));
    }

    #[test]
    fn list_svg_files_ignores_other_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.svg"), "<svg/>").unwrap();
        std::fs::write(dir.path().join("a.svg"), "<svg/>").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();
        std::fs::create_dir(dir.path().join("nested.svg")).unwrap();

        let files = list_svg_files(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("a.svg"), dir.path().join("b.svg")]);
    }

    #[test]
    fn list_svg_files_reports_missing_dir() {
        let err = list_svg_files(Path::new("/no/such/dir")).unwrap_err();
        assert!(matches!(err, WorkflowError::Io { .. }));
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = WorkflowConfig {
            concurrency: 0,
            ..WorkflowConfig::default()
        };
        assert!(SvgWorkflow::new(config, IconLibrary::new()).is_err());
    }
}
