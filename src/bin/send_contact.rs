use std::{process::ExitCode, time::Duration};

use clap::Parser;
use contact_relay::{
    contact_client::ContactApiClient,
    form::{ContactForm, FormError, FormField, SubmissionStatus},
    telemetry,
};

/// Send a message through a running contact relay, the way the website form does.
#[derive(Parser)]
#[command(name = "send_contact")]
struct Cli {
    /// Base URL of the contact relay
    #[arg(long, env = "CONTACT_ENDPOINT", default_value = "http://127.0.0.1:8000")]
    endpoint: String,

    /// Request timeout in milliseconds
    #[arg(long, default_value_t = 10_000)]
    timeout_milliseconds: u64,

    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    subject: String,

    #[arg(long)]
    message: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode, anyhow::Error> {
    let cli = Cli::parse();

    let subscriber =
        telemetry::get_subscriber("send_contact".into(), "warn".into(), std::io::stderr);
    telemetry::init_subscriber(subscriber);

    let client = ContactApiClient::new(
        cli.endpoint,
        Duration::from_millis(cli.timeout_milliseconds),
    )?;

    let mut form = ContactForm::new();
    form.set_field(FormField::Name, cli.name);
    form.set_field(FormField::Email, cli.email);
    form.set_field(FormField::Subject, cli.subject);
    form.set_field(FormField::Message, cli.message);

    let status = match form.submit(&client).await {
        Ok(status) => status,
        Err(FormError::Invalid(errors)) => {
            for error in errors {
                eprintln!("{}", error);
            }
            return Ok(ExitCode::from(exit_status(form.status())));
        }
    };

    if let Some(notice) = form.notice() {
        println!("{}", notice);
    }
    form.acknowledge();

    Ok(ExitCode::from(exit_status(status)))
}

/// Only a delivered message counts as success.
fn exit_status(status: SubmissionStatus) -> u8 {
    match status {
        SubmissionStatus::Succeeded => 0,
        SubmissionStatus::Idle | SubmissionStatus::Submitting | SubmissionStatus::Failed => 1,
    }
}
