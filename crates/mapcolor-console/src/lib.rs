//! Colorful console output for solver events.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **WARN**: Dropped adjacencies, failed requests
//! - **INFO**: Solve start/end, served requests
//! - **DEBUG**: Backtracks and aborted searches
//! - **TRACE**: Every recorded step

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str =
    "mapcolor=warn,mapcolor_solver=info,mapcolor_core=warn,mapcolor_server=info";

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 __  __              ____      _
|  \/  | __ _ _ __  / ___|___ | | ___  _ __
| |\/| |/ _` | '_ \| |   / _ \| |/ _ \| '__|
| |  | | (_| | |_) | |__| (_) | | (_) | |
|_|  |_|\__,_| .__/ \____\___/|_|\___/|_|
             |_|
"#;

    let version_line = format!("          v{} - Graph Coloring Search\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();

        if target != "mapcolor"
            && !target.starts_with("mapcolor::")
            && !target.starts_with("mapcolor_solver")
            && !target.starts_with("mapcolor_core")
            && !target.starts_with("mapcolor_server")
        {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    strategy: Option<String>,
    region: Option<String>,
    color: Option<String>,
    kind: Option<String>,
    reason: Option<String>,
    aborted: Option<String>,
    error: Option<String>,
    path: Option<String>,
    region_count: Option<u64>,
    adjacency_count: Option<u64>,
    color_count: Option<u64>,
    steps: Option<u64>,
    backtracks: Option<u64>,
    step: Option<u64>,
    assigned: Option<u64>,
    position: Option<u64>,
    arity: Option<u64>,
    duration_ms: Option<u64>,
    elapsed_ms: Option<u64>,
    status: Option<u64>,
    success: Option<bool>,
}

impl EventVisitor {
    fn set_str(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "strategy" => self.strategy = Some(value),
            "region" => self.region = Some(value),
            "color" => self.color = Some(value),
            "kind" => self.kind = Some(value),
            "reason" => self.reason = Some(value),
            "aborted" => self.aborted = Some(value),
            "error" => self.error = Some(value),
            "path" => self.path = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_str(field.name(), s.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_str(field.name(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "region_count" => self.region_count = Some(value),
            "adjacency_count" => self.adjacency_count = Some(value),
            "color_count" => self.color_count = Some(value),
            "steps" => self.steps = Some(value),
            "backtracks" => self.backtracks = Some(value),
            "step" => self.step = Some(value),
            "assigned" => self.assigned = Some(value),
            "position" => self.position = Some(value),
            "arity" => self.arity = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "elapsed_ms" => self.elapsed_ms = Some(value),
            "status" => self.status = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "success" {
            self.success = Some(value);
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "backtrack" => format_backtrack(v),
        "search_aborted" => format_search_aborted(v),
        "adjacency_dropped" => format_adjacency_dropped(v),
        "step" => format_step(v),
        "config_loaded" => format_config_loaded(v),
        "config_rejected" => format_config_rejected(v),
        "request_solved" => format_request_solved(v),
        "request_failed" => format_request_failed(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let strategy = v.strategy.as_deref().unwrap_or("unknown");
    let regions = v.region_count.unwrap_or(0);
    let adjacencies = v.adjacency_count.unwrap_or(0);
    let colors = v.color_count.unwrap_or(0);

    format!(
        "{} {} Solving │ {} │ {} regions │ {} adjacencies │ {} colors │ space {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        strategy.white().bold(),
        regions.to_formatted_string(&Locale::en).bright_yellow(),
        adjacencies.to_formatted_string(&Locale::en).bright_yellow(),
        colors.to_formatted_string(&Locale::en).bright_yellow(),
        search_space(regions as usize, colors as usize).bright_magenta()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let steps = v.steps.unwrap_or(0);
    let backtracks = v.backtracks.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    let (status_text, status) = match (v.success.unwrap_or(false), v.aborted.as_deref()) {
        (true, _) => (
            "COLORING FOUND".to_string(),
            "COLORED".bright_green().bold().to_string(),
        ),
        (false, Some(reason)) => (
            format!("ABORTED ({reason})"),
            "ABORTED".bright_yellow().bold().to_string(),
        ),
        (false, None) => (
            "NO PROPER COLORING EXISTS".to_string(),
            "EXHAUSTED".bright_red().bold().to_string(),
        ),
    };

    let mut output = format!(
        "{} {} Solving complete │ {} │ {} steps │ {} backtracks │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(duration).yellow(),
        steps.to_formatted_string(&Locale::en).white(),
        backtracks.to_formatted_string(&Locale::en).white(),
        status
    );

    // Summary box
    let inner_width: usize = 44;
    let rule = "═".repeat(inner_width);
    let total_pad = inner_width.saturating_sub(status_text.chars().count());
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;

    output.push_str("\n\n");
    output.push_str(&format!("╔{rule}╗").bright_cyan().to_string());
    output.push('\n');
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        status_text.bold(),
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');
    output.push_str(&format!("╚{rule}╝").bright_cyan().to_string());
    output.push('\n');

    output
}

fn format_backtrack(v: &EventVisitor) -> String {
    format!(
        "{} {} Backtrack {}={} │ step {}",
        format_elapsed(),
        "↩".yellow(),
        v.region.as_deref().unwrap_or("?").white(),
        v.color.as_deref().unwrap_or("?").white(),
        v.step
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_black()
    )
}

fn format_search_aborted(v: &EventVisitor) -> String {
    format!(
        "{} {} Search aborted │ {} │ {} steps │ {}",
        format_elapsed(),
        "⏹".bright_yellow().bold(),
        v.reason.as_deref().unwrap_or("unknown").bright_yellow(),
        v.steps.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        format_duration_ms(v.elapsed_ms.unwrap_or(0)).yellow()
    )
}

fn format_adjacency_dropped(v: &EventVisitor) -> String {
    format!(
        "{} {} Adjacency #{} dropped │ {} regions, expected 2",
        format_elapsed(),
        "⚠".bright_red().bold(),
        v.position.unwrap_or(0),
        v.arity.unwrap_or(0)
    )
}

fn format_step(v: &EventVisitor) -> String {
    let kind = v.kind.as_deref().unwrap_or("?");
    let icon = match kind {
        "assign" => "✓".bright_green().to_string(),
        "conflict" => "✗".bright_red().to_string(),
        _ => "↩".yellow().to_string(),
    };

    format!(
        "{} {} Step {:>8} │ {:<9} │ {}={} │ {} colored",
        format_elapsed(),
        icon,
        v.step
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_black(),
        kind,
        v.region.as_deref().unwrap_or("?"),
        v.color.as_deref().unwrap_or("?"),
        v.assigned.unwrap_or(0).bright_black()
    )
}

fn format_config_loaded(v: &EventVisitor) -> String {
    format!(
        "{} {} Config {} │ default {}",
        format_elapsed(),
        "⚙".bright_blue(),
        v.path.as_deref().unwrap_or("?").white(),
        v.strategy.as_deref().unwrap_or("backtracking").white().bold()
    )
}

fn format_config_rejected(v: &EventVisitor) -> String {
    format!(
        "{} {} Config {} ignored │ {}",
        format_elapsed(),
        "⚠".yellow(),
        v.path.as_deref().unwrap_or("?").white(),
        v.error.as_deref().unwrap_or("")
    )
}

fn format_request_solved(v: &EventVisitor) -> String {
    let outcome = if v.success.unwrap_or(false) {
        "colored".bright_green().to_string()
    } else {
        "uncolored".bright_red().to_string()
    };

    format!(
        "{} {} POST /solve/{} │ {} │ {} steps │ {}",
        format_elapsed(),
        "◆".bright_blue(),
        v.strategy.as_deref().unwrap_or("?").white().bold(),
        outcome,
        v.steps.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow()
    )
}

fn format_request_failed(v: &EventVisitor) -> String {
    format!(
        "{} {} Request failed │ {} │ {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        v.status.unwrap_or(0).bright_red(),
        v.error.as_deref().unwrap_or("")
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

/// Size of the unpruned search space, `colors ^ regions`.
fn search_space(region_count: usize, color_count: usize) -> String {
    if region_count == 0 {
        return "1".to_string();
    }
    if color_count == 0 {
        return "0".to_string();
    }

    let log_scale = (region_count as f64) * (color_count as f64).log10();
    let exponent = log_scale.floor() as i32;
    let mantissa = 10f64.powf(log_scale - exponent as f64);

    format!("{:.3} x 10^{}", mantissa, exponent)
}
