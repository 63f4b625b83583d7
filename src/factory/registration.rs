use crate::indicators::IndicatorKind;

/// HTTP-style status reported for every successful registration.
pub const CREATED: u16 = 201;

/// The success signal returned by [`IndicatorFactory::add`](crate::IndicatorFactory::add).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// No indicator with this name was registered before.
    Created(IndicatorKind),

    /// An indicator with this name was registered before and has been overwritten.
    Replaced { kind: IndicatorKind, previous: IndicatorKind },
}

impl Registration {
    /// Always [`CREATED`]; replacing an entry is still a successful creation.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        CREATED
    }

    /// The variant of the indicator that is now registered.
    #[must_use]
    pub const fn kind(self) -> IndicatorKind {
        match self {
            Self::Created(kind) | Self::Replaced { kind, .. } => kind,
        }
    }

    #[must_use]
    pub const fn is_replacement(self) -> bool {
        matches!(self, Self::Replaced { .. })
    }
}
