use std::io::IsTerminal;
use std::sync::OnceLock;

use super::table::TableOptions;
use crate::cli::{GlobalFlags, OutputFormat};

static TABLE_OPTIONS: OnceLock<TableOptions> = OnceLock::new();

/// Fix table colour and width for this run from the flags and the terminal.
pub fn init(flags: &GlobalFlags) {
    let color = flags.format == OutputFormat::Table
        && !flags.quiet
        && std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();
    let max_width = terminal_width(std::env::var("COLUMNS").ok().as_deref());
    let _ = TABLE_OPTIONS.set(TableOptions { max_width, color });
}

/// Plain, unbounded tables until [`init`] has run.
pub(super) fn table_options() -> TableOptions {
    TABLE_OPTIONS.get().copied().unwrap_or_default()
}

/// `COLUMNS` below 40 is ignored; tables that narrow are unreadable anyway.
fn terminal_width(columns: Option<&str>) -> Option<usize> {
    columns?.trim().parse::<usize>().ok().filter(|width| *width >= 40)
}

#[cfg(test)]
mod tests {
    use super::terminal_width;

    #[test]
    fn narrow_or_garbled_widths_are_ignored() {
        assert_eq!(terminal_width(Some("120")), Some(120));
        assert_eq!(terminal_width(Some("20")), None);
        assert_eq!(terminal_width(Some("wide")), None);
        assert_eq!(terminal_width(None), None);
    }
}
