use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pika_ui::{CalendarDate, DatePicker, I18n, MainCalendar, PickerOptions, format::parse_date};
use tracing::debug;

mod output;
mod text;

#[derive(Parser)]
#[command(name = "pika-demo")]
#[command(version, about = "Render pika date pickers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the picker markup as HTML
    Html {
        #[command(flatten)]
        picker: PickerArgs,
        /// Write the markup to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the picker as a terminal calendar
    Text {
        #[command(flatten)]
        picker: PickerArgs,
    },
}

#[derive(Args)]
struct PickerArgs {
    /// JSON file with picker options (camelCase keys)
    #[arg(long)]
    options: Option<PathBuf>,
    /// Date to show, as YYYY-MM-DD
    #[arg(short, long)]
    date: Option<String>,
    /// Date to select, as YYYY-MM-DD
    #[arg(short, long)]
    select: Option<String>,
    /// Number of months shown side by side
    #[arg(short, long)]
    months: Option<usize>,
    /// First day of the week (0 = Sunday)
    #[arg(long)]
    first_day: Option<u8>,
    /// Earliest selectable date, as YYYY-MM-DD
    #[arg(long)]
    min: Option<String>,
    /// Latest selectable date, as YYYY-MM-DD
    #[arg(long)]
    max: Option<String>,
    /// Highlighted range, as START..END
    #[arg(long)]
    range: Option<String>,
    /// Show week numbers
    #[arg(short, long)]
    week_numbers: bool,
    /// Show days of the neighbouring months
    #[arg(long)]
    outside_days: bool,
    /// Disable Saturdays and Sundays
    #[arg(long)]
    no_weekends: bool,
    /// Right-to-left layout
    #[arg(long)]
    rtl: bool,
    /// Show the target month in the last panel
    #[arg(long)]
    main_right: bool,
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,pika_ui=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .try_init();
}

fn parse_iso(value: &str) -> Result<CalendarDate> {
    parse_date(value, "YYYY-MM-DD", &I18n::default(), true)
        .with_context(|| format!("invalid date `{value}`, expected YYYY-MM-DD"))
}

impl PickerArgs {
    fn into_options(self) -> Result<PickerOptions> {
        let mut options: PickerOptions = match &self.options {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str(&json)
                    .with_context(|| format!("failed to parse options in {}", path.display()))?
            }
            None => PickerOptions::default(),
        };

        if let Some(date) = &self.date {
            options.default_date = Some(parse_iso(date)?);
        }
        if let Some(min) = &self.min {
            options.min_date = Some(parse_iso(min)?);
        }
        if let Some(max) = &self.max {
            options.max_date = Some(parse_iso(max)?);
        }
        if let Some(range) = &self.range {
            let (start, end) = range
                .split_once("..")
                .with_context(|| format!("invalid range `{range}`, expected START..END"))?;
            options.start_range = Some(parse_iso(start)?);
            options.end_range = Some(parse_iso(end)?);
        }
        if self.months.is_some() {
            options.number_of_months = self.months;
        }
        if self.first_day.is_some() {
            options.first_day = self.first_day;
        }
        if self.week_numbers {
            options.show_week_number = Some(true);
        }
        if self.outside_days {
            options.show_days_in_next_and_previous_months = Some(true);
        }
        if self.no_weekends {
            options.disable_weekends = Some(true);
        }
        if self.rtl {
            options.is_rtl = Some(true);
        }
        if self.main_right {
            options.main_calendar = Some(MainCalendar::Right);
        }
        Ok(options)
    }

    fn build(self) -> Result<DatePicker> {
        let select = self.select.as_deref().map(parse_iso).transpose()?;
        let mut picker = DatePicker::new(self.into_options()?);
        if let Some(date) = select {
            picker.set_date(date, false);
        }
        debug!(?picker, "picker ready");
        Ok(picker)
    }
}

fn main() -> Result<()> {
    init_tracing();
    let Cli { command } = Cli::parse();

    match command {
        Commands::Html {
            picker,
            output: destination,
        } => {
            let picker = picker.build()?;
            let html = pika_components::render(&picker);
            match destination {
                Some(path) => {
                    fs::write(&path, &html)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    output::status("Wrote", path.display().to_string());
                }
                None => println!("{html}"),
            }
        }
        Commands::Text { picker } => {
            let mut picker = picker.build()?;
            let config = picker.config().clone();
            let view = picker.draw_forced();
            println!("{}", text::render_text(&config, view));
            if let Some(date) = picker.get_date() {
                output::note(format!("selected {picker}"));
                debug!(%date, "selection shown");
            }
        }
    }

    Ok(())
}
