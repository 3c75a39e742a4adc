//! Report generation: pipeline orchestration, table model and export rows.

pub mod export;
pub mod pipeline;
pub mod table;
pub mod types;

pub use export::{
    from_export_rows, from_json, to_export_rows, to_json, ExportRow, MAX_IMPORTED_COUNT,
};
pub use pipeline::ReportPipeline;
pub use table::{ReportRow, ReportTable};
pub use types::{ReportDiagnostics, SurveyReport};
