pub mod formatter;

pub use formatter::{
    format_customer_detail, format_customer_line, format_customer_table, format_risk_status,
    format_tsv, should_use_colors,
};
