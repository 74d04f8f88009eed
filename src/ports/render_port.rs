//! Display port trait.

use crate::domain::calculator::Calculation;
use crate::domain::error::TradesizerError;

/// Port for presenting a calculation outcome. Implementations must
/// handle all three outcome classes: a complete results panel, an error
/// banner, and a prompt for incomplete input.
pub trait RenderPort {
    fn render(&mut self, outcome: &Calculation) -> Result<(), TradesizerError>;
}
