use log::debug;

use crate::convert::{convert, DisplaySet, NumberBase};

/// Caller-owned state of the converter form: the selected number system,
/// the raw input text and the four outputs derived from them.
///
/// Every mutation ends with [`ConverterState::recompute`], so the outputs are
/// always the conversion of the current input in the current base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterState {
    base: NumberBase,
    input: String,
    outputs: DisplaySet,
}

impl ConverterState {
    pub fn new(base: NumberBase) -> Self {
        Self {
            base,
            input: String::new(),
            outputs: DisplaySet::zero(),
        }
    }

    pub fn base(&self) -> NumberBase {
        self.base
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn outputs(&self) -> &DisplaySet {
        &self.outputs
    }

    pub fn placeholder(&self) -> &'static str {
        self.base.placeholder()
    }

    /// Replaces the input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.recompute();
    }

    /// Selects a number system. The input is always blanked, even when the
    /// same base is selected again.
    pub fn set_base(&mut self, base: NumberBase) {
        debug!("number system {} -> {}", self.base, base);
        self.base = base;
        self.input.clear();
        self.recompute();
    }

    /// Empties the input and resets every output to zero. The base is kept.
    pub fn clear(&mut self) {
        self.input.clear();
        self.recompute();
    }

    pub fn recompute(&mut self) {
        self.outputs = convert(&self.input, self.base).display();
    }
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new(NumberBase::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_blank_with_zeros() {
        let state = ConverterState::default();
        assert_eq!(state.base(), NumberBase::Decimal);
        assert_eq!(state.input(), "");
        assert_eq!(state.outputs(), &DisplaySet::zero());
        assert_eq!(state.placeholder(), "Enter decimal (0-9)");
    }

    #[test]
    fn every_keystroke_recomputes() {
        let mut state = ConverterState::new(NumberBase::Hexadecimal);
        state.set_input("f");
        assert_eq!(state.outputs().decimal, "15");
        state.set_input("ff");
        assert_eq!(state.outputs().decimal, "255");
        state.set_input("ffg");
        assert!(state.outputs().is_invalid());
        state.set_input("ff");
        assert_eq!(state.outputs(), &DisplaySet::of(255));
    }

    #[test]
    fn switching_base_blanks_input() {
        let mut state = ConverterState::new(NumberBase::Decimal);
        state.set_input("255");
        state.set_base(NumberBase::Binary);
        assert_eq!(state.base(), NumberBase::Binary);
        assert_eq!(state.input(), "");
        assert_eq!(state.outputs(), &DisplaySet::zero());
    }

    #[test]
    fn reselecting_same_base_still_blanks_input() {
        let mut state = ConverterState::new(NumberBase::Octal);
        state.set_input("9");
        assert!(state.outputs().is_invalid());
        state.set_base(NumberBase::Octal);
        assert_eq!(state.input(), "");
        assert_eq!(state.outputs(), &DisplaySet::zero());
    }

    #[test]
    fn clear_keeps_base() {
        let mut state = ConverterState::new(NumberBase::Binary);
        state.set_input("1010");
        state.clear();
        assert_eq!(state.base(), NumberBase::Binary);
        assert_eq!(state.input(), "");
        assert_eq!(state.outputs(), &DisplaySet::zero());
    }
}
