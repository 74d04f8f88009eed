//! Integration tests for the trade-file pipeline.
//!
//! Tests cover:
//! - INI trade file through form snapshot to calculation outcome
//! - Futures long/short sizing with thousands-separated values
//! - Spot weighted basis, allocation and entry-vs-stop validation
//! - Outcome rendering through the console adapter
//! - The shipped example template producing a complete calculation

mod common;

use approx::assert_relative_eq;
use common::*;
use tradesizer::adapters::console_render_adapter::ConsoleRenderAdapter;
use tradesizer::cli::{build_trade_form, EXAMPLE_TRADE_FILE};
use tradesizer::domain::calculator::{calculate, Calculation};
use tradesizer::domain::error::ValidationError;
use tradesizer::ports::render_port::RenderPort;

mod futures_pipeline {
    use super::*;

    #[test]
    fn long_trade_file_produces_expected_sizing() {
        let out = complete_from_ini(FUTURES_LONG_INI);
        assert_relative_eq!(out.position_size, 1.0);
        assert_relative_eq!(out.total_position_value, 100.0);
        assert_relative_eq!(out.total_potential_profit, 10.0);
        assert_relative_eq!(out.risk_reward_ratio, 1.0);
        assert_eq!(out.average_entry_price, None);
    }

    #[test]
    fn thousands_separated_values_parse() {
        let ini = r#"
[trade]
mode = futures
risk_amount = 1,000
entry_price = 43,250
stop_loss = 41,800

[targets]
price1 = 45,000
"#;
        let out = complete_from_ini(ini);
        assert_relative_eq!(out.position_size, 1000.0 / 1450.0);
        assert_relative_eq!(out.total_potential_profit, 1000.0 / 1450.0 * 1750.0);
    }

    #[test]
    fn short_trade_file_validates_downward_ordering() {
        let ini = r#"
[trade]
mode = futures
direction = short
risk_amount = 10
entry_price = 100
stop_loss = 110

[targets]
price1 = 90
"#;
        let out = complete_from_ini(ini);
        assert_relative_eq!(out.position_size, 1.0);
        assert_relative_eq!(out.total_potential_profit, 10.0);
    }

    #[test]
    fn missing_stop_loss_is_incomplete() {
        let ini = r#"
[trade]
mode = futures
risk_amount = 10
entry_price = 100

[targets]
price1 = 110
"#;
        assert_eq!(outcome_from_ini(ini), Calculation::Incomplete);
    }

    #[test]
    fn target_below_entry_is_invalid() {
        let ini = r#"
[trade]
mode = futures
risk_amount = 10
entry_price = 100
stop_loss = 90

[targets]
price1 = 95
"#;
        assert_eq!(
            outcome_from_ini(ini),
            Calculation::Invalid(ValidationError::TargetBelowEntry { slot: 1 })
        );
    }

    #[test]
    fn exit_budget_violation_from_file() {
        let ini = r#"
[trade]
mode = futures
risk_amount = 10
entry_price = 100
stop_loss = 90

[targets]
price1 = 110
exit1 = 70
target2 = true
price2 = 120
exit2 = 40
"#;
        assert_eq!(
            outcome_from_ini(ini),
            Calculation::Invalid(ValidationError::ExitPercentExceeded)
        );
    }

    #[test]
    fn three_targets_keep_slot_identity() {
        let ini = r#"
[trade]
mode = futures
risk_amount = 10
entry_price = 100
stop_loss = 90

[targets]
price1 = 110
exit1 = 50
target3 = true
price3 = 120
exit3 = 50
"#;
        let out = complete_from_ini(ini);
        assert_relative_eq!(out.target_profits[0].unwrap(), 5.0);
        assert_eq!(out.target_profits[1], None);
        assert_relative_eq!(out.target_profits[2].unwrap(), 10.0);
    }
}

mod spot_pipeline {
    use super::*;

    #[test]
    fn weighted_basis_from_two_entries() {
        let out = complete_from_ini(SPOT_INI);
        assert_relative_eq!(out.average_entry_price.unwrap(), 110.0);
        assert_relative_eq!(out.position_size, 0.5);
        assert_relative_eq!(out.total_position_value, 55.0);
        assert_relative_eq!(out.total_potential_profit, 10.0);
    }

    #[test]
    fn allocation_mismatch_is_invalid() {
        let ini = r#"
[trade]
mode = spot
risk_amount = 10
stop_loss = 90

[entries]
price1 = 100
allocation1 = 60
entry2 = true
price2 = 120
allocation2 = 30

[targets]
price1 = 130
"#;
        assert_eq!(
            outcome_from_ini(ini),
            Calculation::Invalid(ValidationError::AllocationMustBe100)
        );
    }

    #[test]
    fn entry_below_stop_is_invalid() {
        let ini = r#"
[trade]
mode = spot
risk_amount = 10
stop_loss = 90

[entries]
price1 = 100
allocation1 = 50
entry2 = true
price2 = 89
allocation2 = 50

[targets]
price1 = 130
"#;
        assert_eq!(
            outcome_from_ini(ini),
            Calculation::Invalid(ValidationError::EntryBelowStop)
        );
    }

    #[test]
    fn disabled_entry_rows_are_not_read() {
        let ini = r#"
[trade]
mode = spot
risk_amount = 10
stop_loss = 90

[entries]
price1 = 100
allocation1 = 100
entry2 = false
price2 = 10
allocation2 = 50

[targets]
price1 = 120
"#;
        let out = complete_from_ini(ini);
        assert_relative_eq!(out.average_entry_price.unwrap(), 100.0);
    }

    #[test]
    fn no_entries_section_is_incomplete() {
        let ini = r#"
[trade]
mode = spot
risk_amount = 10
stop_loss = 90

[targets]
price1 = 130
"#;
        assert_eq!(outcome_from_ini(ini), Calculation::Incomplete);
    }
}

mod rendering {
    use super::*;

    fn render_to_string(outcome: &Calculation) -> String {
        let mut renderer = ConsoleRenderAdapter::new(Vec::new());
        renderer.render(outcome).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn complete_futures_outcome_renders_panel() {
        let text = render_to_string(&outcome_from_ini(FUTURES_LONG_INI));
        assert!(text.contains("Position Size:          1 units"));
        assert!(text.contains("Total Position Value:   $100.00"));
        assert!(text.contains("Total Potential Profit: $10.00"));
        assert!(text.contains("Risk/Reward Ratio:      1 : 1.00"));
        assert!(text.contains("Profit at Target 1:     $10.00"));
        assert!(!text.contains("Average Entry Price"));
    }

    #[test]
    fn spot_outcome_renders_average_entry_banner() {
        let text = render_to_string(&outcome_from_ini(SPOT_INI));
        assert!(text.contains("Average Entry Price:    $110.00"));
    }

    #[test]
    fn invalid_outcome_renders_message() {
        let ini = r#"
[trade]
mode = futures
direction = short
risk_amount = 10
entry_price = 100
stop_loss = 90

[targets]
price1 = 80
"#;
        let text = render_to_string(&outcome_from_ini(ini));
        assert_eq!(
            text,
            "error: entry price must be below the stop loss for a short trade\n"
        );
    }

    #[test]
    fn incomplete_outcome_renders_prompt() {
        let text = render_to_string(&Calculation::Incomplete);
        assert_eq!(text, "Enter the trade values to see the results.\n");
    }
}

mod example_template {
    use super::*;

    #[test]
    fn example_trade_file_parses_and_completes() {
        let form = build_trade_form(&config(EXAMPLE_TRADE_FILE)).unwrap();
        let outcome = calculate(&form.snapshot());
        let out = outcome.output().expect("example template should compute");

        // entry 43,250, stop 41,800, risk 10: 10 / 1,450 units.
        assert_relative_eq!(out.position_size, 10.0 / 1450.0);
        assert!(out.target_profits[0].is_some());
        assert!(out.target_profits[1].is_some());
        assert_eq!(out.target_profits[2], None);
        assert!(out.risk_reward_ratio > 1.0);
    }
}
