//! File I/O for configurations, case studies and estimates.

pub mod json;

pub use json::{
    case_from_str, read_case, read_config, to_json_string, write_case, write_config,
    write_estimate,
};
