//! icon-export: render an icon collection to SVG, PNG and WebP assets.
//!
//! The workflow runs three phases in order, each reading the previous
//! phase's output from disk:
//!
//! 1. **SVG**: every icon with a primary color is rendered, its `<svg>` root
//!    extracted and written as `<slug>.svg`, one file per variant.
//! 2. **PNG**: every exported SVG is themed (the `currentColor` placeholder is
//!    replaced by each theme's color) and rasterized at a fixed height.
//! 3. **WebP**: same as PNG, encoded as WebP.
//!
//! Work inside a phase runs with bounded parallelism. Failing items are
//! logged and counted in a [`WorkflowReport`]; they never stop the batch.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use icon_export::{SvgWorkflow, WorkflowConfig, builtin};
//!
//! # async fn run() -> icon_export::Result<()> {
//! let config = WorkflowConfig::default().resolved(Path::new("."));
//! let workflow = SvgWorkflow::new(config, builtin::library())?;
//!
//! let report = workflow.run().await?;
//! assert!(report.is_success());
//! # Ok(())
//! # }
//! ```

mod batch;
pub mod builtin;
mod config;
mod error;
mod export;
mod icon;
pub mod logging;
mod manifest;
mod raster;
mod theme;
mod workflow;

pub use batch::{Failure, Phase, PhaseReport, WorkflowReport, run_bounded};
pub use config::WorkflowConfig;
pub use error::{Result, WorkflowError};
pub use export::{SvgExporter, extract_svg, slugify};
pub use icon::{Icon, IconComponent, IconLibrary, VariantKind};
pub use manifest::{IconEntry, IconManifest, SerializableComponent};
pub use raster::{RasterConverter, RasterFormat, encode, render_svg_at_height};
pub use theme::{DEFAULT_PLACEHOLDER, ThemeMode};
pub use workflow::{SvgWorkflow, list_svg_files, raster_output_path};
