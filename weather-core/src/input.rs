use crate::{error::WidgetError, model::CityQuery};

/// Read the city field. Blank (or whitespace-only) input is rejected before
/// anything touches the network; otherwise the value is kept verbatim.
pub fn read_city(raw: &str) -> Result<CityQuery, WidgetError> {
    if raw.trim().is_empty() {
        return Err(WidgetError::Validation);
    }

    Ok(CityQuery::new_unchecked(raw.to_owned()))
}
