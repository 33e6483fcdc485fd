use crate::utils::validation::{self, Data, Outcome, ValidationError};

const PREFIX: &str = "Dish must";

/// Fields every dish create or update must carry, checked in this order.
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

pub fn has_field(data: &Data, field: &str) -> Outcome<String> {
    validation::has_field(data, field, PREFIX)
}

pub fn has_price(data: &Data) -> Outcome<u64> {
    let value = data.get("price");

    if !validation::is_present(value) {
        return Err(ValidationError::new("Dish must include a price"));
    }

    value.and_then(validation::positive_integer).ok_or_else(|| {
        ValidationError::new("Dish must have a price that is an integer greater than 0")
    })
}

pub fn has_dish_fields(data: &Data) -> Outcome<DishFields> {
    let name = has_field(data, "name")?;
    let description = has_field(data, "description")?;
    let price = has_price(data)?;
    let image_url = has_field(data, "image_url")?;

    Ok(DishFields {
        name,
        description,
        price,
        image_url,
    })
}
