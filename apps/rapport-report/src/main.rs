use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = rapport_report::Args::parse();
	rapport_report::run(args).await
}
