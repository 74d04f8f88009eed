//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::console_render_adapter::ConsoleRenderAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::calculator::{calculate, Calculation};
use crate::domain::error::TradesizerError;
use crate::domain::form::TradeForm;
use crate::domain::trade::{InstrumentMode, TradeDirection};
use crate::ports::config_port::ConfigPort;
use crate::ports::render_port::RenderPort;

#[derive(Parser, Debug)]
#[command(name = "tradesizer", about = "Position sizing and profit projection calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Size a trade from an INI trade file
    Size {
        #[arg(short, long)]
        config: PathBuf,
        /// Override the entry price (futures)
        #[arg(long)]
        entry: Option<String>,
        /// Override the stop loss
        #[arg(long)]
        stop: Option<String>,
        /// Override the risk amount
        #[arg(long)]
        risk: Option<String>,
        /// Override the direction (long/short)
        #[arg(long)]
        direction: Option<String>,
        /// Override the mode (futures/spot)
        #[arg(long)]
        mode: Option<String>,
    },
    /// Check a trade file and report its outcome class
    Check {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Print a template trade file
    Example,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Size {
            config,
            entry,
            stop,
            risk,
            direction,
            mode,
        } => run_size(
            &config,
            entry.as_deref(),
            stop.as_deref(),
            risk.as_deref(),
            direction.as_deref(),
            mode.as_deref(),
        ),
        Command::Check { config } => run_check(&config),
        Command::Example => run_example(),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = TradesizerError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

pub fn parse_mode(value: &str) -> Option<InstrumentMode> {
    match value.to_lowercase().as_str() {
        "futures" => Some(InstrumentMode::Futures),
        "spot" => Some(InstrumentMode::Spot),
        _ => None,
    }
}

pub fn parse_direction(value: &str) -> Option<TradeDirection> {
    match value.to_lowercase().as_str() {
        "long" => Some(TradeDirection::Long),
        "short" => Some(TradeDirection::Short),
        _ => None,
    }
}

/// Build a trade form from an INI trade file. Numeric keys stay raw
/// strings; a missing key keeps the form's default so absence never
/// becomes zero.
pub fn build_trade_form(config: &dyn ConfigPort) -> Result<TradeForm, TradesizerError> {
    let mode = match config.get_string("trade", "mode") {
        Some(s) => parse_mode(&s).ok_or_else(|| TradesizerError::ConfigInvalid {
            section: "trade".into(),
            key: "mode".into(),
            reason: format!("unknown mode '{}' (expected futures or spot)", s),
        })?,
        None => {
            return Err(TradesizerError::ConfigMissing {
                section: "trade".into(),
                key: "mode".into(),
            });
        }
    };

    let direction = match config.get_string("trade", "direction") {
        Some(s) => parse_direction(&s).ok_or_else(|| TradesizerError::ConfigInvalid {
            section: "trade".into(),
            key: "direction".into(),
            reason: format!("unknown direction '{}' (expected long or short)", s),
        })?,
        None => TradeDirection::Long,
    };

    let mut form = TradeForm::new(mode, direction);

    if let Some(v) = config.get_string("trade", "risk_amount") {
        form.risk_amount = v;
    }
    if let Some(v) = config.get_string("trade", "entry_price") {
        form.entry_price = v;
    }
    if let Some(v) = config.get_string("trade", "stop_loss") {
        form.stop_loss = v;
    }

    if let Some(v) = config.get_string("entries", "price1") {
        form.entry_prices[0] = v;
    }
    if let Some(v) = config.get_string("entries", "allocation1") {
        form.set_allocation(0, &v);
    }
    for slot in 1..3 {
        if config.get_bool("entries", &format!("entry{}", slot + 1), false) {
            form.set_entry_enabled(slot, true);
            if let Some(v) = config.get_string("entries", &format!("price{}", slot + 1)) {
                form.entry_prices[slot] = v;
            }
            if let Some(v) = config.get_string("entries", &format!("allocation{}", slot + 1)) {
                form.set_allocation(slot, &v);
            }
        }
    }

    if let Some(v) = config.get_string("targets", "price1") {
        form.target_prices[0] = v;
    }
    if let Some(v) = config.get_string("targets", "exit1") {
        form.set_exit_percent(0, &v);
    }
    for slot in 1..3 {
        if config.get_bool("targets", &format!("target{}", slot + 1), false) {
            form.set_target_enabled(slot, true);
            if let Some(v) = config.get_string("targets", &format!("price{}", slot + 1)) {
                form.target_prices[slot] = v;
            }
            if let Some(v) = config.get_string("targets", &format!("exit{}", slot + 1)) {
                form.set_exit_percent(slot, &v);
            }
        }
    }

    Ok(form)
}

pub fn run_size(
    config_path: &PathBuf,
    entry: Option<&str>,
    stop: Option<&str>,
    risk: Option<&str>,
    direction: Option<&str>,
    mode: Option<&str>,
) -> ExitCode {
    eprintln!("Loading trade file from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let mut form = match build_trade_form(&adapter) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if let Some(m) = mode {
        match parse_mode(m) {
            Some(m) => form.mode = m,
            None => {
                eprintln!("error: unknown mode '{}' (expected futures or spot)", m);
                return ExitCode::from(2);
            }
        }
    }
    if let Some(d) = direction {
        match parse_direction(d) {
            Some(d) => form.direction = d,
            None => {
                eprintln!("error: unknown direction '{}' (expected long or short)", d);
                return ExitCode::from(2);
            }
        }
    }
    if let Some(v) = entry {
        form.entry_price = v.to_string();
    }
    if let Some(v) = stop {
        form.stop_loss = v.to_string();
    }
    if let Some(v) = risk {
        form.risk_amount = v.to_string();
    }

    let outcome = calculate(&form.snapshot());

    let mut renderer = ConsoleRenderAdapter::new(std::io::stdout());
    if let Err(e) = renderer.render(&outcome) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    match outcome {
        Calculation::Invalid(e) => (&TradesizerError::from(e)).into(),
        _ => ExitCode::SUCCESS,
    }
}

pub fn run_check(config_path: &PathBuf) -> ExitCode {
    eprintln!("Checking trade file: {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let form = match build_trade_form(&adapter) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match calculate(&form.snapshot()) {
        Calculation::Complete(_) => {
            eprintln!("Trade file is valid and complete.");
            ExitCode::SUCCESS
        }
        Calculation::Incomplete => {
            eprintln!("Trade file is valid but incomplete: enter the remaining values.");
            ExitCode::SUCCESS
        }
        Calculation::Invalid(e) => {
            eprintln!("error: {e}");
            (&TradesizerError::from(e)).into()
        }
    }
}

fn run_example() -> ExitCode {
    print!("{}", EXAMPLE_TRADE_FILE);
    ExitCode::SUCCESS
}

pub const EXAMPLE_TRADE_FILE: &str = r#"[trade]
; futures or spot
mode = futures
; long or short, futures only
direction = long
risk_amount = 10
entry_price = 43,250
stop_loss = 41,800

[targets]
price1 = 45,000
exit1 = 50
target2 = true
price2 = 47,500
exit2 = 50

; spot mode reads [entries] instead of entry_price:
; [entries]
; price1 = 40,000
; allocation1 = 60
; entry2 = true
; price2 = 38,000
; allocation2 = 40
"#;
