use strum::{Display, EnumIter};

/// The variant of an indicator, decided by the shape of its configured range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum IndicatorKind {
    /// The range is a sequence of codes.
    Coded,

    /// The range is a keyed record of bounds and statistics.
    Number,
}
