use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub name: String,
    pub street: String,
    pub house_number: String,
    pub town: String,
}

impl Address {
    pub fn new(name: &str, street: &str, house_number: &str, town: &str) -> Address {
        Address {
            name: name.to_string(),
            street: street.to_string(),
            house_number: house_number.to_string(),
            town: town.to_string(),
        }
    }
}
