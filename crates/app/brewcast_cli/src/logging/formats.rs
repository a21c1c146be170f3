use flexi_logger::DeferredNow;
use log::Record;

/// Compact single-line format: `LEVEL message`.
pub fn cli_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(w, "{} {}", record.level(), record.args())
}
