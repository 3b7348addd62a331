/// Reachability of the report backend, as last seen by the health probe.
///
/// Informational only: no report action is gated on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

impl BackendStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            BackendStatus::Unknown => "Desconocido",
            BackendStatus::Online => "Online",
            BackendStatus::Offline => "Offline",
        }
    }

    /// Badge variant used by the header
    pub fn badge_variant(&self) -> &'static str {
        match self {
            BackendStatus::Unknown => "neutral",
            BackendStatus::Online => "success",
            BackendStatus::Offline => "error",
        }
    }
}
