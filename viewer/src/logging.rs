use common::logging::LogError;
use log::LevelFilter;

// Rendered frames own stdout, so log records go to stderr.
pub fn setup(log_level: LevelFilter, log_format: String) -> Result<(), LogError> {
    if log_level.eq(&LevelFilter::Off) {
        return Ok(());
    }

    fern::Dispatch::new()
        .level(log_level)
        .format(move |out, message, record| {
            let formatted =
                common::logging::parse_format(log_format.clone(), message, record);

            out.finish(format_args!("{}", formatted))
        })
        .chain(std::io::stderr())
        .apply()
        .map_err(LogError::SetLoggerError)
}
