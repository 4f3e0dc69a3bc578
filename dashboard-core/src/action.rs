use std::fmt::Debug;

/// Something the reducer can react to
///
/// Tasks build actions on worker threads, hence `Send + 'static`.
pub trait Action: Clone + Debug + Send + 'static {
    /// Variant name, used as a structured log field
    fn name(&self) -> &'static str;

    /// One-line description for trace logs. Override for payload-heavy variants.
    fn summary(&self) -> String {
        format!("{self:?}")
    }
}
