use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Logs to stderr so replayed responses never mix with anything piped through stdout.
pub fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
	let colors = ColoredLevelConfig::new().debug(Color::Magenta).info(Color::Green).warn(Color::Yellow).error(Color::Red);

	fern::Dispatch::new()
		.format(move |out, message, record| {
			out.finish(format_args!(
				"[{}]{} {} > {}",
				colors.color(record.level()),
				chrono::Local::now().format("[%H:%M:%S]"),
				record.target(),
				message
			))
		})
		.level(level)
		.chain(std::io::stderr())
		.apply()
}
