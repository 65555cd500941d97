use thiserror::Error;

/// Errors raised by the comparison transforms.
///
/// Sparse input (a credit without a date, revenue or character) is never an
/// error; the transform that needs the field skips the credit instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// A performer has no credit with both a release date and a revenue, so
    /// their active-year range is undefined.
    #[error("insufficient data for timeline: {performer_name} ({performer_id}) has no dated revenue credits")]
    EmptyRange {
        performer_id: i64,
        performer_name: String,
    },

    /// The timeline was asked to cover nobody.
    #[error("timeline roster is empty")]
    EmptyRoster,
}
