//! Form-state collaborator: raw text fields and their sanitization.
//!
//! Mirrors the editing surface in front of the calculator: every numeric
//! field is kept as entered (possibly with thousands separators), and
//! `snapshot` assembles a fresh `TradeParameters` per call. Unparsable
//! or empty text becomes an absent value, never zero.

use super::trade::{EntryPoint, InstrumentMode, TargetPoint, TradeDirection, TradeParameters};

/// Parse a user-entered numeric field. Thousands separators are
/// stripped; anything other than `digits [ . digits ]` is absent.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    let mut dots = 0;
    for c in cleaned.chars() {
        match c {
            '0'..='9' => {}
            '.' => {
                dots += 1;
                if dots > 1 {
                    return None;
                }
            }
            _ => return None,
        }
    }
    cleaned.parse().ok()
}

fn clamp_percent(raw: &str) -> String {
    match parse_numeric(raw) {
        Some(v) if v > 100.0 => "100".to_string(),
        _ => raw.to_string(),
    }
}

/// Editable trade form. Slot arrays are 0-indexed; slot 0 (entry 1 /
/// target 1) is always enabled.
#[derive(Debug, Clone)]
pub struct TradeForm {
    pub mode: InstrumentMode,
    pub direction: TradeDirection,
    pub risk_amount: String,
    /// Futures entry price field.
    pub entry_price: String,
    pub stop_loss: String,
    pub entry_prices: [String; 3],
    pub entry_allocations: [String; 3],
    entry_enabled: [bool; 3],
    pub target_prices: [String; 3],
    pub exit_percents: [String; 3],
    target_enabled: [bool; 3],
}

impl TradeForm {
    pub fn new(mode: InstrumentMode, direction: TradeDirection) -> Self {
        Self {
            mode,
            direction,
            risk_amount: "10".to_string(),
            entry_price: String::new(),
            stop_loss: String::new(),
            entry_prices: Default::default(),
            entry_allocations: ["100".to_string(), String::new(), String::new()],
            entry_enabled: [true, false, false],
            target_prices: Default::default(),
            exit_percents: ["100".to_string(), String::new(), String::new()],
            target_enabled: [true, false, false],
        }
    }

    pub fn entry_enabled(&self, slot: usize) -> bool {
        self.entry_enabled[slot]
    }

    pub fn target_enabled(&self, slot: usize) -> bool {
        self.target_enabled[slot]
    }

    /// Enable or disable spot entry 2 or 3 (slot index 1 or 2).
    /// Disabling clears the row; when both optional rows are off the
    /// first row's allocation restores to 100.
    pub fn set_entry_enabled(&mut self, slot: usize, enabled: bool) {
        if slot == 0 || slot > 2 {
            return;
        }
        self.entry_enabled[slot] = enabled;
        if !enabled {
            self.entry_prices[slot].clear();
            self.entry_allocations[slot].clear();
        }
        if !self.entry_enabled[1] && !self.entry_enabled[2] {
            self.entry_allocations[0] = "100".to_string();
        }
    }

    /// Enable or disable target 2 or 3 (slot index 1 or 2), with the
    /// same clear-and-restore policy as entries.
    pub fn set_target_enabled(&mut self, slot: usize, enabled: bool) {
        if slot == 0 || slot > 2 {
            return;
        }
        self.target_enabled[slot] = enabled;
        if !enabled {
            self.target_prices[slot].clear();
            self.exit_percents[slot].clear();
        }
        if !self.target_enabled[1] && !self.target_enabled[2] {
            self.exit_percents[0] = "100".to_string();
        }
    }

    /// Percent fields clamp to 100 on assignment.
    pub fn set_allocation(&mut self, slot: usize, raw: &str) {
        self.entry_allocations[slot] = clamp_percent(raw);
    }

    pub fn set_exit_percent(&mut self, slot: usize, raw: &str) {
        self.exit_percents[slot] = clamp_percent(raw);
    }

    /// Assemble an immutable parameter snapshot from the current field
    /// values.
    pub fn snapshot(&self) -> TradeParameters {
        let mut params = TradeParameters::new(self.mode, self.direction);
        params.risk_amount = parse_numeric(&self.risk_amount);
        params.entry_price = parse_numeric(&self.entry_price);
        params.stop_loss = parse_numeric(&self.stop_loss);
        for i in 0..3 {
            params.entries[i] = EntryPoint {
                price: parse_numeric(&self.entry_prices[i]),
                allocation_pct: parse_numeric(&self.entry_allocations[i]),
                enabled: self.entry_enabled[i],
            };
            params.targets[i] = TargetPoint {
                price: parse_numeric(&self.target_prices[i]),
                exit_pct: parse_numeric(&self.exit_percents[i]),
                enabled: self.target_enabled[i],
            };
        }
        params
    }
}
