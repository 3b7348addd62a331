use super::descriptor::ReportDescriptor;
use crate::enums::InputKind;

/// Farms offered by the parameter panel
pub const FARM_OPTIONS: [&str; 5] = ["Finca 1", "Finca 2", "Finca 3", "Finca 4", "Finca 5"];

/// Products offered by the parameter panel
pub const PRODUCT_OPTIONS: [&str; 5] = ["Café", "Cacao", "Maíz", "Frijol", "Plátano"];

/// The two user-editable fields that parameterize report endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportParams {
    pub farm: String,
    pub product: String,
}

impl ReportParams {
    pub fn new(farm: impl Into<String>, product: impl Into<String>) -> Self {
        Self {
            farm: farm.into(),
            product: product.into(),
        }
    }

    /// Raw value of the field a report consumes
    pub fn value_of(&self, kind: InputKind) -> &str {
        match kind {
            InputKind::Farm => &self.farm,
            InputKind::Product => &self.product,
        }
    }

    /// Whether the report can be requested with the current fields.
    ///
    /// The farm must be non-blank after trimming; the product only has to be
    /// non-empty.
    pub fn allows(&self, descriptor: &ReportDescriptor) -> bool {
        match descriptor.input {
            None => true,
            Some(InputKind::Farm) => !self.farm.trim().is_empty(),
            Some(InputKind::Product) => !self.product.is_empty(),
        }
    }
}

/// Replaces every run of whitespace with a single underscore,
/// e.g. "Finca 1" -> "Finca_1".
pub fn underscore_whitespace(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut in_whitespace = false;
    for ch in value.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                result.push('_');
            }
            in_whitespace = true;
        } else {
            result.push(ch);
            in_whitespace = false;
        }
    }
    result
}
