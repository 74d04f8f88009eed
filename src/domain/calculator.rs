//! Position sizing and profit projection engine.
//!
//! `calculate` is pure and stateless: it takes a snapshot of trade
//! parameters and returns one of three outcomes. Validation is
//! fail-fast in a fixed priority order: exit-percent budget, then
//! (spot) allocation sum, then entry-vs-stop, then targets in slot
//! order.

use super::error::ValidationError;
use super::trade::{CalculationOutput, InstrumentMode, TradeDirection, TradeParameters};

/// Absolute tolerance for percentage-sum comparisons.
pub const PERCENT_TOLERANCE: f64 = 0.001;

/// Outcome of a calculation.
///
/// `Incomplete` is the "form not yet filled" state: essential fields are
/// absent or non-positive, or the inputs are degenerate. It is not an
/// error and must not be rendered as one.
#[derive(Debug, Clone, PartialEq)]
pub enum Calculation {
    Complete(CalculationOutput),
    Invalid(ValidationError),
    Incomplete,
}

impl Calculation {
    pub fn output(&self) -> Option<&CalculationOutput> {
        match self {
            Calculation::Complete(out) => Some(out),
            _ => None,
        }
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, Calculation::Incomplete)
    }
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// Compute position size, position value, per-target profits and the
/// aggregate risk/reward ratio for a trade parameter snapshot.
pub fn calculate(params: &TradeParameters) -> Calculation {
    // Exit budget is checked before the incomplete short-circuit so an
    // over-allocated set of targets is flagged even while entry fields
    // are still blank.
    let exit_total: f64 = params
        .active_targets()
        .map(|t| t.exit_pct.unwrap_or(0.0))
        .sum();
    if exit_total > 100.0 + PERCENT_TOLERANCE {
        return Calculation::Invalid(ValidationError::ExitPercentExceeded);
    }

    let (Some(stop), Some(risk)) = (positive(params.stop_loss), positive(params.risk_amount))
    else {
        return Calculation::Incomplete;
    };

    let (reference, average_entry_price) = match params.mode {
        InstrumentMode::Futures => {
            let Some(entry) = positive(params.entry_price) else {
                return Calculation::Incomplete;
            };
            (entry, None)
        }
        InstrumentMode::Spot => match spot_reference(params, stop) {
            Ok(Some(basis)) => (basis, Some(basis)),
            Ok(None) => return Calculation::Incomplete,
            Err(e) => return Calculation::Invalid(e),
        },
    };

    // Spot has no short side; its targets validate against the weighted
    // basis with the long rules.
    let direction = match params.mode {
        InstrumentMode::Futures => params.direction,
        InstrumentMode::Spot => TradeDirection::Long,
    };

    match direction {
        TradeDirection::Long => {
            if params.mode == InstrumentMode::Futures && reference <= stop {
                return Calculation::Invalid(ValidationError::EntryBelowStop);
            }
            for (i, t) in params.targets.iter().enumerate() {
                if t.is_active() && t.price.unwrap_or(0.0) <= reference {
                    return Calculation::Invalid(ValidationError::TargetBelowEntry {
                        slot: i + 1,
                    });
                }
            }
        }
        TradeDirection::Short => {
            if reference >= stop {
                return Calculation::Invalid(ValidationError::EntryAboveStop);
            }
            for (i, t) in params.targets.iter().enumerate() {
                if t.is_active() && t.price.unwrap_or(0.0) >= reference {
                    return Calculation::Invalid(ValidationError::TargetAboveEntry {
                        slot: i + 1,
                    });
                }
            }
        }
    }

    let risk_per_unit = (reference - stop).abs();
    if risk_per_unit <= 0.0 {
        return Calculation::Incomplete;
    }

    let position_size = risk / risk_per_unit;
    let total_position_value = position_size * reference;

    let mut target_profits = [None; 3];
    let mut total_potential_profit = 0.0;
    for (i, t) in params.targets.iter().enumerate() {
        if !t.is_active() {
            continue;
        }
        let reward_per_unit = (t.price.unwrap_or(0.0) - reference).abs();
        let profit = position_size * (t.exit_pct.unwrap_or(0.0) / 100.0) * reward_per_unit;
        total_potential_profit += profit;
        target_profits[i] = Some(profit);
    }

    if total_potential_profit <= 0.0 {
        return Calculation::Incomplete;
    }

    Calculation::Complete(CalculationOutput {
        position_size,
        total_position_value,
        total_potential_profit,
        risk_reward_ratio: total_potential_profit / risk,
        target_profits,
        average_entry_price,
    })
}

/// Weighted spot basis over active entries, or the first validation
/// failure. `Ok(None)` means no entry is active yet.
fn spot_reference(
    params: &TradeParameters,
    stop: f64,
) -> Result<Option<f64>, ValidationError> {
    if params.active_entries().next().is_none() {
        return Ok(None);
    }

    let alloc_total: f64 = params
        .active_entries()
        .map(|e| e.allocation_pct.unwrap_or(0.0))
        .sum();
    if (alloc_total - 100.0).abs() > PERCENT_TOLERANCE {
        return Err(ValidationError::AllocationMustBe100);
    }

    for e in params.active_entries() {
        if e.price.unwrap_or(0.0) <= stop {
            return Err(ValidationError::EntryBelowStop);
        }
    }

    let basis = params
        .active_entries()
        .map(|e| e.price.unwrap_or(0.0) * e.allocation_pct.unwrap_or(0.0) / 100.0)
        .sum();
    Ok(Some(basis))
}
