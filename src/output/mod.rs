pub mod formatter;
pub mod json;
pub mod writer;

pub use formatter::{
    format_ranking_table, format_recommendations, format_report, format_tsv, should_use_colors,
};
pub use json::{summary_json, AnalysisSummary};
pub use writer::save_report;
