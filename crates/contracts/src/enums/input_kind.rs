/// User parameter a report needs before it can be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Farm,
    Product,
}

impl InputKind {
    /// Query parameter name the backend expects
    pub fn query_param(&self) -> &'static str {
        match self {
            InputKind::Farm => "nombre",
            InputKind::Product => "producto",
        }
    }

    /// Requirement text shown on cards that cannot be generated yet
    pub fn requirement(&self) -> &'static str {
        match self {
            InputKind::Farm => "Nombre de la finca",
            InputKind::Product => "Selección de producto",
        }
    }
}
