#![allow(dead_code)]

use std::io::Write;
use tradesizer::adapters::file_config_adapter::FileConfigAdapter;
use tradesizer::cli::build_trade_form;
use tradesizer::domain::calculator::{calculate, Calculation};
use tradesizer::domain::trade::CalculationOutput;

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn config(content: &str) -> FileConfigAdapter {
    FileConfigAdapter::from_string(content).unwrap()
}

pub fn outcome_from_ini(content: &str) -> Calculation {
    let form = build_trade_form(&config(content)).unwrap();
    calculate(&form.snapshot())
}

pub fn complete_from_ini(content: &str) -> CalculationOutput {
    match outcome_from_ini(content) {
        Calculation::Complete(out) => out,
        other => panic!("expected complete calculation, got {:?}", other),
    }
}

pub const FUTURES_LONG_INI: &str = r#"
[trade]
mode = futures
direction = long
risk_amount = 10
entry_price = 100
stop_loss = 90

[targets]
price1 = 110
exit1 = 100
"#;

pub const SPOT_INI: &str = r#"
[trade]
mode = spot
risk_amount = 10
stop_loss = 90

[entries]
price1 = 100
allocation1 = 50
entry2 = true
price2 = 120
allocation2 = 50

[targets]
price1 = 130
exit1 = 100
"#;
