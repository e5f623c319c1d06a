/// Formatter adapters for the document output formats
mod spdx_json_formatter;
mod tag_value_formatter;

pub use spdx_json_formatter::SpdxJsonFormatter;
pub use tag_value_formatter::TagValueFormatter;

/// SPDX version written by every formatter
pub(crate) const SPDX_VERSION: &str = "SPDX-2.3";
/// License of the document metadata itself, fixed by SPDX
pub(crate) const DATA_LICENSE: &str = "CC0-1.0";
