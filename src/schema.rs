use serde::{Deserialize, Serialize};

use crate::footprint::MatrixLayout;
use crate::params::ParameterSet;
use crate::series::SeriesPoint;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub schema_version: u32,
    pub tool_version: String,
    /// Executable the sweep drove; absent for offline analysis reports.
    pub executable: Option<String>,
}

/// One driven run: the parameter set plus what the child process reported.
/// Stdout is summarized by size (it is dominated by matrix dumps); stderr is
/// kept verbatim for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub params: ParameterSet,
    pub exit_status: i32,
    pub stdout_bytes: u64,
    pub stderr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    pub meta: ReportMeta,
    pub sweep: String,
    pub runs: Vec<RunRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixBytes {
    pub name: String,
    pub bytes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootprintReport {
    pub meta: ReportMeta,
    pub n1: u64,
    pub n2: u64,
    pub k: u64,
    pub layout: MatrixLayout,
    pub base_overhead: u64,
    pub matrices: Vec<MatrixBytes>,
}

/// A projected timing series, ready for an external plotting surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesReport {
    pub meta: ReportMeta,
    pub independent: String,
    pub function: String,
    pub source: String,
    pub entries: usize,
    pub points: Vec<SeriesPoint>,
}
