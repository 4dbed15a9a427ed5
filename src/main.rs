use std::io::{stdin, stdout, BufWriter, Write};

use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wordrank=warn")))
		.with_writer(std::io::stderr)
		.init();

	if let Err(err) = try_main() {
		error!(%err, "word count failed");
		std::process::exit(1);
	}
}

fn try_main() -> wordrank::Result<()> {
	let mut stdout = BufWriter::new(stdout().lock());
	wordrank::run(stdin().lock(), &mut stdout, wordrank::Config::default())?;
	stdout.flush()?;
	Ok(())
}
