//! Console renderer implementing RenderPort.
//!
//! Writes the results panel to any `Write` sink: stdout in the CLI,
//! a buffer in tests.

use std::io::Write;

use crate::domain::calculator::Calculation;
use crate::domain::error::TradesizerError;
use crate::domain::format::{format_currency, format_ratio, format_units};
use crate::domain::trade::CalculationOutput;
use crate::ports::render_port::RenderPort;

pub struct ConsoleRenderAdapter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleRenderAdapter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_results(&mut self, result: &CalculationOutput) -> std::io::Result<()> {
        if let Some(avg) = result.average_entry_price {
            writeln!(self.out, "Average Entry Price:    {}", format_currency(avg))?;
        }
        writeln!(
            self.out,
            "Position Size:          {} units",
            format_units(result.position_size)
        )?;
        writeln!(
            self.out,
            "Total Position Value:   {}",
            format_currency(result.total_position_value)
        )?;
        writeln!(
            self.out,
            "Total Potential Profit: {}",
            format_currency(result.total_potential_profit)
        )?;
        writeln!(
            self.out,
            "Risk/Reward Ratio:      {}",
            format_ratio(result.risk_reward_ratio)
        )?;
        for (i, profit) in result.target_profits.iter().enumerate() {
            if let Some(profit) = profit {
                writeln!(
                    self.out,
                    "Profit at Target {}:     {}",
                    i + 1,
                    format_currency(*profit)
                )?;
            }
        }
        Ok(())
    }
}

impl<W: Write> RenderPort for ConsoleRenderAdapter<W> {
    fn render(&mut self, outcome: &Calculation) -> Result<(), TradesizerError> {
        match outcome {
            Calculation::Complete(result) => self.write_results(result)?,
            Calculation::Invalid(e) => writeln!(self.out, "error: {e}")?,
            Calculation::Incomplete => {
                writeln!(self.out, "Enter the trade values to see the results.")?
            }
        }
        Ok(())
    }
}
