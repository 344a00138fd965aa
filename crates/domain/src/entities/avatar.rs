//! Avatar entity - the explorer's look, kit and ride
//!
//! An avatar is always replaced as a whole (character creation builds a
//! fresh one); individual slots are never patched in place.

use serde::{Deserialize, Serialize};

use crate::{AvatarId, ItemId, ToolId, VehicleId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    pub id: AvatarId,
    pub name: String,
    pub hair: AvatarItem,
    pub eyes: AvatarItem,
    pub outfit: AvatarItem,
    pub accessories: Vec<AvatarItem>,
    pub tools: Vec<ExplorerTool>,
    pub vehicle: TravelVehicle,
}

impl Avatar {
    /// The avatar every new explorer starts with.
    pub fn starter() -> Self {
        Self {
            id: AvatarId::new("avatar1"),
            name: "Explorer".to_string(),
            hair: AvatarItem::new("hair1", "Spiky", ItemCategory::Hair, "hair1.png"),
            eyes: AvatarItem::new("eyes1", "Blue", ItemCategory::Eyes, "eyes1.png"),
            outfit: AvatarItem::new("outfit1", "Explorer", ItemCategory::Outfit, "outfit1.png"),
            accessories: Vec::new(),
            tools: vec![
                ExplorerTool::new("binoculars", "Binoculars", ToolType::Binoculars),
                ExplorerTool::new("compass", "Magic Compass", ToolType::Compass),
            ],
            vehicle: TravelVehicle::new("magic_carpet", "Magic Carpet", VehicleType::MagicCarpet, 100),
        }
    }
}

/// A cosmetic item (hair, eyes, outfit or accessory)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarItem {
    pub id: ItemId,
    pub name: String,
    pub category: ItemCategory,
    pub image_url: String,
    pub unlocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
}

impl AvatarItem {
    /// Create an unlocked, free item
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        category: ItemCategory,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            image_url: image_url.into(),
            unlocked: true,
            price: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Hair,
    Eyes,
    Outfit,
    Accessory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerTool {
    pub id: ToolId,
    pub name: String,
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    pub image_url: String,
    pub unlocked: bool,
    pub level: u32,
}

impl ExplorerTool {
    /// Create an unlocked level-1 tool; the image is named after the id.
    pub fn new(id: &str, name: impl Into<String>, tool_type: ToolType) -> Self {
        Self {
            id: ToolId::new(id),
            name: name.into(),
            tool_type,
            image_url: format!("{}.png", id),
            unlocked: true,
            level: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolType {
    Binoculars,
    Compass,
    Notebook,
    Camera,
    Map,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelVehicle {
    pub id: VehicleId,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub image_url: String,
    pub unlocked: bool,
    pub speed: u32,
    /// Fuel gauge on a 0-100 scale
    pub fuel: u32,
}

impl TravelVehicle {
    /// Create an unlocked, fully fuelled vehicle; the image is named after the id.
    pub fn new(id: &str, name: impl Into<String>, vehicle_type: VehicleType, speed: u32) -> Self {
        Self {
            id: VehicleId::new(id),
            name: name.into(),
            vehicle_type,
            image_url: format!("{}.png", id),
            unlocked: true,
            speed,
            fuel: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    MagicCarpet,
    SmallPlane,
    Rocket,
    HotAirBalloon,
}
