use crate::core::arithmetic::{calculate_per_person_total, calculate_tip};
use crate::domain::model::{format_amount, FormSnapshot, SplitCount, TipPercent};
use crate::domain::ports::{FormDefaults, SubmitHandler};

/// Single source of truth for the bill-splitting form: three inputs (bill
/// text, tip percent, split count) and two derived values (tip amount,
/// per-person total).
///
/// Every mutator runs an explicit recompute step, so the derived values are
/// always consistent with the inputs after a call returns. There is no
/// reactive machinery; callers drive the form one event at a time.
pub struct BillSplitForm {
    bill_text: String,
    bill_amount: Option<f64>,
    tip_percent: TipPercent,
    split_count: SplitCount,
    tip_amount: f64,
    per_person_total: f64,
}

impl BillSplitForm {
    pub fn new() -> Self {
        Self {
            bill_text: String::new(),
            bill_amount: None,
            tip_percent: TipPercent::default(),
            split_count: SplitCount::default(),
            tip_amount: 0.0,
            per_person_total: 0.0,
        }
    }

    /// Seeds tip percent and split count from a defaults provider. The bill
    /// always starts empty, so the form begins in the "awaiting valid bill"
    /// state regardless of the seed values.
    pub fn with_defaults(defaults: &impl FormDefaults) -> Self {
        let mut form = Self::new();
        form.tip_percent = TipPercent::new(defaults.tip_percent());
        form.split_count = SplitCount::new(defaults.split_count());
        form
    }

    /// Bill text changed. Valid text (trimmed, parses as a finite
    /// non-negative number) updates the bill amount and recomputes both
    /// derived values. Empty, non-numeric, and negative text all unset the
    /// bill amount and reset both derived values to zero.
    pub fn set_bill_text(&mut self, text: &str) {
        self.bill_text = text.to_string();
        self.bill_amount = parse_bill(text);
        self.recompute();
    }

    /// Split increment requested. No upper bound.
    pub fn increment_split(&mut self) {
        self.split_count = self.split_count.increment();
        self.recompute();
    }

    /// Split decrement requested. Floors at 1.
    pub fn decrement_split(&mut self) {
        self.split_count = self.split_count.decrement();
        self.recompute();
    }

    /// Tip slider moved. The raw position is snapped to a whole percent in
    /// [0, 100] before recomputing.
    pub fn set_tip_slider(&mut self, raw: f32) {
        self.tip_percent = TipPercent::from_slider(raw);
        self.recompute();
    }

    /// Submit requested. Only a valid bill is handed to the handler; a blank
    /// or unparseable bill makes this a no-op. Returns whether the
    /// submission was accepted.
    pub fn submit(&mut self, handler: &mut dyn SubmitHandler) -> bool {
        if self.bill_amount.is_none() {
            return false;
        }
        handler.on_submit(self.bill_text.trim());
        handler.dismiss_keyboard();
        true
    }

    /// The parsed bill amount, `None` while the bill text is empty or
    /// invalid. `Some(0.0)` (an entered zero) is distinct from `None`.
    pub fn bill_amount(&self) -> Option<f64> {
        self.bill_amount
    }

    pub fn tip_percent(&self) -> u8 {
        self.tip_percent.value()
    }

    pub fn split_count(&self) -> u32 {
        self.split_count.value()
    }

    pub fn tip_amount(&self) -> f64 {
        self.tip_amount
    }

    pub fn per_person_total(&self) -> f64 {
        self.per_person_total
    }

    /// Whether the split/tip/result controls are shown. Invalid bill text
    /// behaves exactly like empty text here.
    pub fn is_active(&self) -> bool {
        self.bill_amount.is_some()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            bill_text: self.bill_text.clone(),
            tip_percent: self.tip_percent.value(),
            split_count: self.split_count.value(),
            tip_amount: format_amount(self.tip_amount),
            per_person_total: format_amount(self.per_person_total),
            controls_visible: self.is_active(),
        }
    }

    // Derive step: recomputes both derived values from the current inputs.
    // Without a valid bill both are zero, including the tip amount, so
    // clearing the bill never leaves a stale tip on screen.
    fn recompute(&mut self) {
        match self.bill_amount {
            Some(bill) => {
                self.tip_amount = calculate_tip(bill, self.tip_percent.value());
                self.per_person_total = calculate_per_person_total(
                    bill,
                    self.split_count.value(),
                    self.tip_percent.value(),
                );
            }
            None => {
                self.tip_amount = 0.0;
                self.per_person_total = 0.0;
            }
        }
    }
}

impl Default for BillSplitForm {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_bill(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => None,
    }
}
