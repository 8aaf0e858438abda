pub mod formatter;

pub use formatter::{
    format_json, format_metric_value, format_ranked_table, format_score, format_tsv, format_winners_table,
    should_use_colors,
};
