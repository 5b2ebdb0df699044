/// User-facing notification port.
///
/// Messages are code-style identifiers (`cart.item_added`) that the display
/// layer localizes before showing. The four levels match the toast styles
/// the display layer renders.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}
