use crate::errors::AppError;
use crate::models::ServiceCategory;

pub fn price_for(category: ServiceCategory) -> &'static str {
    match category {
        ServiceCategory::StandardCut => "20 euro",
        ServiceCategory::SkinFade => "25 euro",
        ServiceCategory::BeardTrim => "10 euro",
        ServiceCategory::Shave => "15 euro",
        ServiceCategory::ComboCutAndBeard => "30 euro",
    }
}

/// Looks up a category by its wire name. There is no default price.
pub fn price_lookup(category: &str) -> Result<&'static str, AppError> {
    let category: ServiceCategory = category.parse()?;
    Ok(price_for(category))
}
