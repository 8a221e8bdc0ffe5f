/// Browser navigation contract.
///
/// A redirect replaces the current browsing context; the caller observes no
/// result.
pub trait Navigator: Send + Sync {
    fn redirect(&self, url: &str);
}
