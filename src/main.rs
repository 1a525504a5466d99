use agegate::{age_on, CalendarCheck, CalendarDate, DateError, FormGate, Registration};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    LibraryError(#[from] DateError),
}

/// Where the reference date ("today") comes from.
#[derive(Args, Debug)]
#[group(required = false, multiple = false)]
struct DateArg {
    /// [DATE PROVIDER] Use the current UTC date as today. Exclusive with other date providers.
    #[arg(long)]
    utc: bool,

    /// [DATE PROVIDER] Use the current local date as today. This is the default. Exclusive with
    /// other date providers.
    #[arg(long)]
    local: bool,

    /// [DATE PROVIDER] Use a date in format `YYYY-MM-DD` as today. Exclusive with other date
    /// providers.
    #[arg(long, value_name = "YYYY-MM-DD")]
    today: Option<String>,
}

impl DateArg {
    fn to_date(&self) -> Result<CalendarDate, CliError> {
        // clap guarantees at most one provider is set
        let date = if self.utc {
            CalendarDate::utc_today()?
        } else if let Some(today) = &self.today {
            CalendarDate::parse_iso(today)?
        } else {
            CalendarDate::local_today()?
        };
        Ok(date)
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submits the registration form and prints the resulting notification.
    ///
    /// Exits with 0 if registration is allowed, 1 otherwise. Empty fields are not a usage error:
    /// they are reported like the form reports them.
    Register {
        /// The person's name
        #[arg(short, long, default_value = "")]
        name: String,

        /// The birth date, as `DD-MM-YYYY`
        #[arg(short, long, value_name = "DD-MM-YYYY", default_value = "")]
        birth_date: String,

        /// The selected sex. Not validated.
        #[arg(short, long)]
        sex: Option<String>,

        /// Reject birth dates that are not real days, such as `31-02-2000`
        #[arg(long)]
        strict_calendar: bool,

        #[command(flatten)]
        date: DateArg,
    },

    /// Prints the age in whole years of someone born on `BIRTH_DATE`.
    Age {
        /// The birth date, as `DD-MM-YYYY`
        #[arg(value_name = "DD-MM-YYYY")]
        birth_date: String,

        #[command(flatten)]
        date: DateArg,
    },
}

type Output = (String, i32);

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agegate=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    let rendered = report(do_work(cli));
    if let Some(stdout) = &rendered.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = &rendered.stderr {
        eprintln!("{stderr}");
    }
    std::process::exit(rendered.exit_code);
}

/// What the process writes and how it exits.
#[derive(Debug, PartialEq)]
struct Report {
    stdout: Option<String>,
    stderr: Option<String>,
    exit_code: i32,
}

fn report(result: Result<Output, CliError>) -> Report {
    match result {
        Ok((output, exit_code)) => Report {
            stdout: Some(output),
            stderr: None,
            exit_code,
        },
        Err(e) => {
            // stderr already carries the message; keep the event below the default filter
            tracing::debug!(error = ?e, "command failed");
            Report {
                stdout: None,
                stderr: Some(e.to_string()),
                exit_code: 1,
            }
        }
    }
}

fn do_work(cli: Cli) -> Result<Output, CliError> {
    match cli.command {
        Commands::Register {
            name,
            birth_date,
            sex,
            strict_calendar,
            date,
        } => {
            let reference = date.to_date()?;
            let calendar_check = if strict_calendar {
                CalendarCheck::Strict
            } else {
                CalendarCheck::Lenient
            };
            let gate = FormGate::default().with_calendar_check(calendar_check);
            let registration = Registration {
                name,
                birth_date,
                sex,
            };
            let result = gate.submit(&registration, &reference);
            let exit_code = if result.is_valid() { 0 } else { 1 };
            Ok((result.message(), exit_code))
        }
        Commands::Age { birth_date, date } => {
            let reference = date.to_date()?;
            let birth = CalendarDate::parse(birth_date.trim())?;
            Ok((age_on(&birth, &reference).to_string(), 0))
        }
    }
}
