use clap::Parser;
use tracing::info;

use mail_ballot_analysis::constants::PAGE_SIZE;
use mail_ballot_analysis::infra::http_client::SocrataClient;
use mail_ballot_analysis::logging;
use mail_ballot_analysis::{AsOf, Pipeline, Reports};

#[derive(Parser)]
#[command(name = "mail_ballot_analysis")]
#[command(about = "Pull Pennsylvania mail-ballot applications and print summary reports")]
#[command(version = "0.1.0")]
struct Cli {}

fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let _cli = Cli::parse();

    let as_of = AsOf::today();
    let client = SocrataClient::pa_mail_ballots()?;
    info!("Fetching from {}", client.url());

    let output = Pipeline::run(&client, PAGE_SIZE, as_of)?;
    info!(
        "Fetched {} records; reporting on {} complete records",
        output.fetched,
        output.complete.len()
    );

    print!("{}", Reports::compute(&output.complete));
    Ok(())
}
