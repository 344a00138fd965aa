use worldexplorer_domain::{
    AvatarItem, ExplorerTool, ItemCategory, ToolType, TravelVehicle, VehicleType,
};

/// Choices offered during character creation
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarOptions {
    pub hair: Vec<AvatarItem>,
    pub eyes: Vec<AvatarItem>,
    pub outfits: Vec<AvatarItem>,
    pub tools: Vec<ExplorerTool>,
    pub vehicles: Vec<TravelVehicle>,
}

fn items(category: ItemCategory, prefix: &str, names: [&str; 3]) -> Vec<AvatarItem> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let id = format!("{}{}", prefix, i + 1);
            let image = format!("{}.png", id);
            AvatarItem::new(id, *name, category, image)
        })
        .collect()
}

pub fn avatar_options() -> AvatarOptions {
    AvatarOptions {
        hair: items(ItemCategory::Hair, "hair", ["Spiky", "Curly", "Straight"]),
        eyes: items(ItemCategory::Eyes, "eyes", ["Blue", "Green", "Brown"]),
        outfits: items(ItemCategory::Outfit, "outfit", ["Explorer", "Adventurer", "Scientist"]),
        tools: vec![
            ExplorerTool::new("binoculars", "Binoculars", ToolType::Binoculars),
            ExplorerTool::new("compass", "Magic Compass", ToolType::Compass),
            ExplorerTool::new("notebook", "Explorer Notebook", ToolType::Notebook),
            ExplorerTool::new("camera", "Adventure Camera", ToolType::Camera),
        ],
        vehicles: vec![
            TravelVehicle::new("magic_carpet", "Magic Carpet", VehicleType::MagicCarpet, 100),
            TravelVehicle::new("small_plane", "Small Plane", VehicleType::SmallPlane, 150),
            TravelVehicle::new("rocket", "Rocket", VehicleType::Rocket, 200),
            TravelVehicle::new("hot_air_balloon", "Hot Air Balloon", VehicleType::HotAirBalloon, 80),
        ],
    }
}
