use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recommended piece of home-gym equipment. Equipment has no slug and no
/// detail view; it only ever appears in the full listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price_range: String,
    pub image_url: String,
}

/// Insert payload for [`crate::store::ContentStore::insert_equipment`].
#[derive(Debug, Clone)]
pub struct NewEquipment {
    pub name: String,
    pub description: String,
    pub price_range: String,
    pub image_url: String,
}

impl NewEquipment {
    pub(crate) fn into_equipment(self, id: Uuid) -> Equipment {
        Equipment {
            id,
            name: self.name,
            description: self.description,
            price_range: self.price_range,
            image_url: self.image_url,
        }
    }
}
