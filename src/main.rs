mod alarm;
mod panel;
mod shortcut;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};

use crate::alarm::model::{self, RangeParameters};
use crate::panel::Panel;
use crate::shortcut::PlatformKind;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliPlatform {
    Auto,
    Ios,
    Desktop,
}

impl CliPlatform {
    fn resolve(self) -> PlatformKind {
        match self {
            CliPlatform::Auto => shortcut::detect_platform(),
            CliPlatform::Ios => PlatformKind::Ios,
            CliPlatform::Desktop => PlatformKind::Desktop,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "wakebatch",
    version,
    about = "Plans a batch of wake-up alarms before an arrival time"
)]
struct Cli {
    /// Display name used in the alarm labels.
    #[arg(long, default_value = "나")]
    who: String,

    /// Reference date for --arrival-time (defaults to today).
    #[arg(long)]
    date: Option<String>,

    /// Explicit arrival date-time; takes precedence over --arrival-time.
    #[arg(long)]
    arrival: Option<String>,

    /// Arrival time of day as HH:MM, combined with --date.
    #[arg(long)]
    arrival_time: Option<String>,

    /// Minutes before arrival where the alarm window starts.
    #[arg(long, default_value_t = 120)]
    from_min: i64,

    /// Minutes before arrival where the alarm window ends.
    #[arg(long, default_value_t = 10)]
    to_min: i64,

    /// Spacing between alarms, in minutes.
    #[arg(long, default_value_t = 10)]
    step_min: i64,

    /// Override the current time (for scripted previews).
    #[arg(long)]
    now: Option<String>,

    #[arg(long, value_enum, default_value_t = CliPlatform::Auto)]
    platform: CliPlatform,

    /// Print the Shortcuts deep link instead of the preview panel.
    #[arg(long)]
    shortcut_url: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let now = match cli.now.as_deref() {
        Some(raw) => model::parse_local_datetime(raw)
            .with_context(|| format!("invalid --now value '{raw}', expected a local date-time"))?,
        None => Local::now().naive_local(),
    };

    let reference = model::resolve_reference_date(cli.date.as_deref(), now);
    let arrival = model::resolve_arrival(
        cli.arrival.as_deref(),
        cli.arrival_time.as_deref(),
        reference,
    );
    let params = RangeParameters::new(cli.from_min, cli.to_min, cli.step_min);

    let panel = Panel {
        who: cli.who,
        reference,
        arrival,
        params,
    };

    if cli.shortcut_url {
        let slots = panel.slots(now);
        let url =
            shortcut::batch_shortcut_url(&panel.who, panel.arrival, &slots, cli.platform.resolve())
                .context("cannot build the alarm shortcut link")?;
        println!("{url}");
        return Ok(());
    }

    print!("{}", panel.render(now));
    Ok(())
}
