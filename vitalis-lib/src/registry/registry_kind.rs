use strum::Display;

/// A package registry vitalis can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Registry {
    PyPi,
    Npm,
}

impl Registry {
    /// How the registry is named in messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PyPi => "PyPI",
            Self::Npm => "npmjs.org",
        }
    }
}
