use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use owo_colors::OwoColorize;
use std::{fmt::Write, time::Duration};
use walldrop_core::progress::{LogType, ProgressListener};

const PROGRESS_CHARS: &str = "━━";

const TAG_TEMPLATE: &str = "{prefix:.bold} {wide_msg:.blue.bold} {pos:.green}/{len:.green}";
const MAIN_TEMPLATE: &str = "{spinner:.green.bold} {elapsed_precise:.bold} {wide_bar:.green/white.dim} {percent:.bold}  {pos:.green} (eta. {eta:.blue})";

/// Handles CLI progress display using `indicatif`.
///
/// Shows one line for the tag being synced and a bar for the wallpapers seen so far. The bar's
/// length grows with every search page, since the final count is only known at the end.
#[derive(Debug)]
pub struct IndicatifProgressHandler {
    tag_bar: ProgressBar,
    main_bar: ProgressBar,
    _multi_pb: MultiProgress,
}

impl IndicatifProgressHandler {
    pub fn new() -> Self {
        let multi = MultiProgress::with_draw_target(ProgressDrawTarget::stderr());

        let tag_bar = multi.add(
            ProgressBar::new(0)
                .with_style(tag_progress_style())
                .with_prefix("Tag"),
        );

        let main_bar = multi.add(ProgressBar::new(0).with_style(master_progress_style()));
        main_bar.enable_steady_tick(Duration::from_millis(100));

        Self {
            tag_bar,
            main_bar,
            _multi_pb: multi,
        }
    }
}

impl Default for IndicatifProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressListener for IndicatifProgressHandler {
    fn set_tag_total(&self, total: u64) {
        self.tag_bar.set_length(total);
    }

    fn tag_started(&self, index: u64, tag: &str) {
        self.tag_bar.set_position(index);
        self.tag_bar.set_message(tag.to_string());
    }

    fn inc_main_total(&self, delta: u64) {
        self.main_bar.inc_length(delta);
    }

    fn main_tick(&self) {
        self.main_bar.inc(1);
    }

    fn main_done(&self) {
        self.tag_bar.finish_and_clear();
        self.main_bar.finish_and_clear();
    }

    fn log_event(&self, log_type: LogType, target: &str, message: &str) {
        let formatted_message = match log_type {
            LogType::Info => format!("{} {}", target.bold(), message),
            LogType::Skip => {
                format!(
                    "{} {} {}",
                    target.blue().italic(),
                    message.green().bold(),
                    "Skipping...".green().bold()
                )
            }
            LogType::Download => {
                format!("{} {}", message.bold(), target.blue().italic())
            }
            LogType::Warning => format!(
                "{} {} {}",
                target.blue().italic(),
                message.yellow().bold(),
                "Skipped.".yellow().bold()
            ),
            LogType::Error => format!(
                "{} {} {}",
                target.blue().italic(),
                message.red().bold(),
                "Error.".red().bold()
            ),
        };

        self.main_bar.println(formatted_message);
    }
}

fn tag_progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(TAG_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

fn master_progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(MAIN_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .with_key("percent", |state: &ProgressState, w: &mut dyn Write| {
            let _ = write!(w, "{:>3.0}%", state.fraction() * 100_f32);
        })
        .progress_chars(PROGRESS_CHARS)
}
