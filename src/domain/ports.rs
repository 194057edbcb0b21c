/// Callback surface for the submit event. The controller hands over the
/// trimmed bill text and then asks the presentation side to dismiss any
/// on-screen keyboard; adapters without one keep the default no-op.
pub trait SubmitHandler {
    fn on_submit(&mut self, bill_text: &str);

    fn dismiss_keyboard(&mut self) {}
}

/// Initial form values and display settings, provided by either the CLI
/// config or the TOML defaults file.
pub trait FormDefaults {
    fn tip_percent(&self) -> u8;
    fn split_count(&self) -> u32;
    fn currency_symbol(&self) -> &str;
}
