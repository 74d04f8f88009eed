//! Trade parameter types and the calculation output model.

/// Direction of a futures trade. Spot trades have no short side and
/// always size against the long rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeDirection {
    Long,
    Short,
}

/// Which pricing model the calculator uses: a single futures entry or a
/// weighted multi-entry spot basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrumentMode {
    Futures,
    Spot,
}

/// One spot entry row: a price and the percentage of the position
/// allocated to it. Absent or unparsable fields are `None`, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EntryPoint {
    pub price: Option<f64>,
    pub allocation_pct: Option<f64>,
    pub enabled: bool,
}

impl EntryPoint {
    /// An entry participates in the calculation only when it is enabled
    /// and both fields hold positive values.
    pub fn is_active(&self) -> bool {
        self.enabled
            && self.price.is_some_and(|p| p > 0.0)
            && self.allocation_pct.is_some_and(|a| a > 0.0)
    }
}

/// One take-profit row: a target price and the percentage of the
/// position exited when it is hit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TargetPoint {
    pub price: Option<f64>,
    pub exit_pct: Option<f64>,
    pub enabled: bool,
}

impl TargetPoint {
    pub fn is_active(&self) -> bool {
        self.enabled
            && self.price.is_some_and(|p| p > 0.0)
            && self.exit_pct.is_some_and(|e| e > 0.0)
    }
}

/// Immutable snapshot of every input the calculator needs. Built fresh
/// per calculation; the engine holds no state between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeParameters {
    pub mode: InstrumentMode,
    pub direction: TradeDirection,
    pub risk_amount: Option<f64>,
    /// Futures entry price. Spot uses `entries` instead.
    pub entry_price: Option<f64>,
    pub stop_loss: Option<f64>,
    /// Spot entry rows. Entry 1 is always enabled.
    pub entries: [EntryPoint; 3],
    /// Take-profit rows. Target 1 is always enabled.
    pub targets: [TargetPoint; 3],
}

impl TradeParameters {
    /// Blank futures parameter set with entry 1 and target 1 enabled.
    pub fn new(mode: InstrumentMode, direction: TradeDirection) -> Self {
        let mut entries = [EntryPoint::default(); 3];
        entries[0].enabled = true;
        let mut targets = [TargetPoint::default(); 3];
        targets[0].enabled = true;
        Self {
            mode,
            direction,
            risk_amount: None,
            entry_price: None,
            stop_loss: None,
            entries,
            targets,
        }
    }

    pub fn active_entries(&self) -> impl Iterator<Item = &EntryPoint> {
        self.entries.iter().filter(|e| e.is_active())
    }

    pub fn active_targets(&self) -> impl Iterator<Item = &TargetPoint> {
        self.targets.iter().filter(|t| t.is_active())
    }
}

/// Result of a successful calculation.
///
/// `target_profits` keeps slot identity: index 0 is always target 1,
/// index 2 is always target 3, with `None` for inactive slots, so the
/// display can label "Target N" even when target 2 is disabled.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationOutput {
    pub position_size: f64,
    pub total_position_value: f64,
    pub total_potential_profit: f64,
    /// Reward per unit of risk: total potential profit / risk amount.
    pub risk_reward_ratio: f64,
    pub target_profits: [Option<f64>; 3],
    /// Weighted average entry price. `Some` only in spot mode.
    pub average_entry_price: Option<f64>,
}
