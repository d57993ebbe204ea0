//! Last computed result, as shown on screen

use pitch_core::CalculationResult;

/// Holds the result of the most recent click.
///
/// Each click replaces the previous result; nothing older is kept.
#[derive(Debug, Clone, Default)]
pub struct ResultCell {
    current: Option<CalculationResult>,
}

impl ResultCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current(&mut self, result: CalculationResult) {
        self.current = Some(result);
    }

    pub fn current(&self) -> Option<&CalculationResult> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
