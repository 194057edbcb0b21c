use crate::config::Settings;
use crate::core::form::BillSplitForm;
use crate::domain::model::FormSnapshot;
use crate::domain::ports::{FormDefaults, SubmitHandler};
use crate::utils::error::{Result, TipError};
use std::io::{BufRead, Write};

/// Applies a scripted set of form events from the CLI flags and renders the
/// resulting snapshot once.
pub struct OneShotSession {
    settings: Settings,
    json: bool,
}

impl OneShotSession {
    pub fn new(settings: Settings, json: bool) -> Self {
        Self { settings, json }
    }

    pub fn run(
        &self,
        bill: Option<&str>,
        tip: Option<f32>,
        split: Option<u32>,
    ) -> Result<String> {
        let mut form = BillSplitForm::with_defaults(&self.settings);
        apply_flag_events(&mut form, bill, tip, split);

        let snapshot = form.snapshot();
        if self.json {
            Ok(serde_json::to_string_pretty(&snapshot)?)
        } else {
            Ok(render_snapshot(&snapshot, self.settings.currency_symbol()))
        }
    }
}

// CLI flags become ordinary controller events on the fresh form, so flags
// take effect after (and therefore over) the seeded defaults.
fn apply_flag_events(
    form: &mut BillSplitForm,
    bill: Option<&str>,
    tip: Option<f32>,
    split: Option<u32>,
) {
    if let Some(text) = bill {
        tracing::debug!("Applying bill text: {:?}", text);
        form.set_bill_text(text);
    }
    if let Some(raw) = tip {
        tracing::debug!("Applying tip slider: {}", raw);
        form.set_tip_slider(raw);
    }
    if let Some(target) = split {
        adjust_split(form, target);
    }
}

// Walks the split count to the target through the controller's own
// increment/decrement events, so the floor-at-1 rule applies.
fn adjust_split(form: &mut BillSplitForm, target: u32) {
    while form.split_count() < target {
        form.increment_split();
    }
    while form.split_count() > target.max(1) {
        form.decrement_split();
    }
}

/// Line-oriented event loop over any `BufRead`/`Write` pair. Each accepted
/// command is one controller event; the snapshot is re-rendered after every
/// state change.
pub struct InteractiveSession<R, W> {
    input: R,
    output: W,
    settings: Settings,
}

const HELP_TEXT: &str = "Commands: bill <amount> | tip <0-100> | split + | split - | done | help | quit";

impl<R: BufRead, W: Write> InteractiveSession<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    pub fn run(
        mut self,
        bill: Option<&str>,
        tip: Option<f32>,
        split: Option<u32>,
    ) -> Result<()> {
        let mut form = BillSplitForm::with_defaults(&self.settings);
        writeln!(self.output, "{}", HELP_TEXT)?;

        if bill.is_some() || tip.is_some() || split.is_some() {
            apply_flag_events(&mut form, bill, tip, split);
            let rendered = render_snapshot(&form.snapshot(), self.settings.currency_symbol());
            write!(self.output, "{}", rendered)?;
        }

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match self.apply_command(&mut form, line.trim_end_matches(['\n', '\r'])) {
                Ok(CommandOutcome::Continue) => {}
                Ok(CommandOutcome::Quit) => break,
                Err(e) => {
                    tracing::warn!("Rejected command: {}", e);
                    writeln!(self.output, "{}", e.user_friendly_message())?;
                    writeln!(self.output, "Hint: {}", e.recovery_suggestion())?;
                }
            }
        }

        Ok(())
    }

    fn apply_command(&mut self, form: &mut BillSplitForm, line: &str) -> Result<CommandOutcome> {
        let trimmed = line.trim();
        let (command, args) = match trimmed.split_once(char::is_whitespace) {
            Some((command, args)) => (command, args.trim()),
            None => (trimmed, ""),
        };

        match command {
            "" => return Ok(CommandOutcome::Continue),
            "bill" => {
                form.set_bill_text(args);
            }
            "tip" => {
                let raw = args.parse::<f32>().map_err(|_| TipError::InputError {
                    message: format!("'{}' is not a number", args),
                })?;
                form.set_tip_slider(raw);
            }
            "split" => match args {
                "+" => form.increment_split(),
                "-" => form.decrement_split(),
                other => {
                    return Err(TipError::InputError {
                        message: format!("expected 'split +' or 'split -', got '{}'", other),
                    })
                }
            },
            "done" => {
                let mut submit = CollectingSubmit::default();
                if form.submit(&mut submit) {
                    if let Some(bill_text) = submit.accepted {
                        writeln!(self.output, "Submitted bill: {}", bill_text)?;
                    }
                    if submit.keyboard_dismissed {
                        tracing::debug!("Keyboard dismissal requested");
                    }
                } else {
                    writeln!(self.output, "Nothing to submit: enter a bill amount first.")?;
                }
                return Ok(CommandOutcome::Continue);
            }
            "help" => {
                writeln!(self.output, "{}", HELP_TEXT)?;
                return Ok(CommandOutcome::Continue);
            }
            "quit" | "exit" => return Ok(CommandOutcome::Quit),
            other => {
                return Err(TipError::InputError {
                    message: format!("unknown command '{}'", other),
                })
            }
        }

        let rendered = render_snapshot(&form.snapshot(), self.settings.currency_symbol());
        write!(self.output, "{}", rendered)?;
        Ok(CommandOutcome::Continue)
    }
}

enum CommandOutcome {
    Continue,
    Quit,
}

#[derive(Default)]
struct CollectingSubmit {
    accepted: Option<String>,
    keyboard_dismissed: bool,
}

impl SubmitHandler for CollectingSubmit {
    fn on_submit(&mut self, bill_text: &str) {
        self.accepted = Some(bill_text.to_string());
    }

    fn dismiss_keyboard(&mut self) {
        self.keyboard_dismissed = true;
    }
}

/// Plain-text rendering of a snapshot. The split/tip/result lines appear
/// only while the form is active.
pub fn render_snapshot(snapshot: &FormSnapshot, currency: &str) -> String {
    if !snapshot.controls_visible {
        return "Enter a bill amount to see tip and split.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("Bill: {}{}\n", currency, snapshot.bill_text.trim()));
    out.push_str(&format!(
        "Tip ({}%): {}{}\n",
        snapshot.tip_percent, currency, snapshot.tip_amount
    ));
    out.push_str(&format!("Split: {} ways\n", snapshot.split_count));
    out.push_str(&format!(
        "Total per person: {}{}\n",
        currency, snapshot.per_person_total
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_renders_per_person_total() {
        let session = OneShotSession::new(Settings::default(), false);
        let output = session.run(Some("200"), Some(20.0), Some(4)).unwrap();

        assert!(output.contains("Tip (20%): $40.00"));
        assert!(output.contains("Split: 4 ways"));
        assert!(output.contains("Total per person: $60.00"));
    }

    #[test]
    fn test_one_shot_without_bill_hides_controls() {
        let session = OneShotSession::new(Settings::default(), false);
        let output = session.run(None, Some(20.0), Some(4)).unwrap();
        assert_eq!(output, "Enter a bill amount to see tip and split.\n");
    }

    #[test]
    fn test_one_shot_json_output() {
        let session = OneShotSession::new(Settings::default(), true);
        let output = session.run(Some("100"), Some(10.0), Some(2)).unwrap();

        let snapshot: FormSnapshot = serde_json::from_str(&output).unwrap();
        assert_eq!(snapshot.tip_amount, "10.00");
        assert_eq!(snapshot.per_person_total, "55.00");
        assert!(snapshot.controls_visible);
    }

    #[test]
    fn test_adjust_split_clamps_target_zero() {
        let mut form = BillSplitForm::new();
        adjust_split(&mut form, 0);
        assert_eq!(form.split_count(), 1);

        adjust_split(&mut form, 6);
        assert_eq!(form.split_count(), 6);

        adjust_split(&mut form, 2);
        assert_eq!(form.split_count(), 2);
    }
}
