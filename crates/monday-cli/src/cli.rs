use anyhow::Context;
use clap::CommandFactory;
use crate::commands;
use crate::Outcome;
use monday::Client;
use monday::Payload;

#[derive(clap::Parser, Debug)]
#[command(
    name = "monday",
    version,
    about = "Build queries for the monday.com API and print or send them.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// Run the chosen subcommand, or render the help when there is none.
    pub(crate) async fn run(self) -> Outcome {
        let Some(cmd) = self.cmd else {
            return Outcome::Printed(Self::command().render_help().to_string());
        };
        let command = cmd.as_query_command();
        let payload = command.payload();
        let wire = payload.to_wire();
        if command.opts().dry_run {
            return Outcome::Printed(wire);
        }

        log::debug!("Sending `{wire}`...");
        match send(&payload).await {
            Ok(body) => Outcome::Printed(body),
            Err(err) => Outcome::Failed(format!("{err:#}")),
        }
    }
}

/// Send `payload` with the token from the environment and return the raw
/// response body.
async fn send(payload: &Payload) -> anyhow::Result<String> {
    let client = Client::from_env()?;
    let response = client
        .exec(payload)
        .await
        .with_context(|| format!("Failed to reach {}", client.endpoint()))?;
    let status = response.status();
    let body = response.text().await.context("Failed to read the response")?;
    if !status.is_success() {
        anyhow::bail!("{} responded {status}: {body}", client.endpoint());
    }
    Ok(body)
}
