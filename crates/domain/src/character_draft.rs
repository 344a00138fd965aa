//! Character creation draft
//!
//! Collects the explorer's picks during onboarding and turns them into an
//! [`Avatar`] once every slot is filled.

use crate::{Avatar, AvatarId, AvatarItem, DomainError, ExplorerTool, ItemCategory, TravelVehicle};

/// Most tools an explorer may pack
pub const MAX_TOOLS: usize = 2;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterDraft {
    hair: Option<AvatarItem>,
    eyes: Option<AvatarItem>,
    outfit: Option<AvatarItem>,
    tools: Vec<ExplorerTool>,
    vehicle: Option<TravelVehicle>,
}

impl CharacterDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_hair(&mut self, item: AvatarItem) -> Result<(), DomainError> {
        expect_category(&item, ItemCategory::Hair)?;
        self.hair = Some(item);
        Ok(())
    }

    pub fn select_eyes(&mut self, item: AvatarItem) -> Result<(), DomainError> {
        expect_category(&item, ItemCategory::Eyes)?;
        self.eyes = Some(item);
        Ok(())
    }

    pub fn select_outfit(&mut self, item: AvatarItem) -> Result<(), DomainError> {
        expect_category(&item, ItemCategory::Outfit)?;
        self.outfit = Some(item);
        Ok(())
    }

    pub fn select_vehicle(&mut self, vehicle: TravelVehicle) {
        self.vehicle = Some(vehicle);
    }

    /// Toggle a tool in or out of the kit.
    ///
    /// Returns whether the tool is selected afterwards. Adding a tool when
    /// the kit is already full leaves the selection unchanged.
    pub fn toggle_tool(&mut self, tool: ExplorerTool) -> bool {
        if let Some(pos) = self.tools.iter().position(|t| t.id == tool.id) {
            self.tools.remove(pos);
            return false;
        }
        if self.tools.len() >= MAX_TOOLS {
            return false;
        }
        self.tools.push(tool);
        true
    }

    pub fn tools(&self) -> &[ExplorerTool] {
        &self.tools
    }

    pub fn is_complete(&self) -> bool {
        self.hair.is_some()
            && self.eyes.is_some()
            && self.outfit.is_some()
            && self.vehicle.is_some()
            && !self.tools.is_empty()
    }

    /// Build the avatar, naming the first missing pick on failure.
    pub fn build(&self) -> Result<Avatar, DomainError> {
        let missing = |slot: &str| DomainError::validation(format!("no {} selected", slot));

        let hair = self.hair.clone().ok_or_else(|| missing("hair"))?;
        let eyes = self.eyes.clone().ok_or_else(|| missing("eyes"))?;
        let outfit = self.outfit.clone().ok_or_else(|| missing("outfit"))?;
        let vehicle = self.vehicle.clone().ok_or_else(|| missing("vehicle"))?;
        if self.tools.is_empty() {
            return Err(missing("tool"));
        }

        Ok(Avatar {
            id: AvatarId::new("avatar1"),
            name: "Explorer".to_string(),
            hair,
            eyes,
            outfit,
            accessories: Vec::new(),
            tools: self.tools.clone(),
            vehicle,
        })
    }
}

fn expect_category(item: &AvatarItem, expected: ItemCategory) -> Result<(), DomainError> {
    if item.category != expected {
        return Err(DomainError::validation(format!(
            "item '{}' is {:?}, expected {:?}",
            item.id, item.category, expected
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ToolType, VehicleType};

    fn filled_draft() -> CharacterDraft {
        let mut draft = CharacterDraft::new();
        draft
            .select_hair(AvatarItem::new("hair2", "Curly", ItemCategory::Hair, "hair2.png"))
            .expect("hair");
        draft
            .select_eyes(AvatarItem::new("eyes3", "Brown", ItemCategory::Eyes, "eyes3.png"))
            .expect("eyes");
        draft
            .select_outfit(AvatarItem::new(
                "outfit3",
                "Scientist",
                ItemCategory::Outfit,
                "outfit3.png",
            ))
            .expect("outfit");
        draft.select_vehicle(TravelVehicle::new("rocket", "Rocket", VehicleType::Rocket, 200));
        draft
    }

    #[test]
    fn build_requires_at_least_one_tool() {
        let mut draft = filled_draft();
        assert!(!draft.is_complete());
        assert!(draft.build().is_err());

        draft.toggle_tool(ExplorerTool::new("camera", "Adventure Camera", ToolType::Camera));
        let avatar = draft.build().expect("complete draft");
        assert_eq!(avatar.vehicle.vehicle_type, VehicleType::Rocket);
        assert_eq!(avatar.tools.len(), 1);
        assert!(avatar.accessories.is_empty());
    }

    #[test]
    fn tool_kit_is_capped_at_two() {
        let mut draft = CharacterDraft::new();
        assert!(draft.toggle_tool(ExplorerTool::new("binoculars", "Binoculars", ToolType::Binoculars)));
        assert!(draft.toggle_tool(ExplorerTool::new("compass", "Magic Compass", ToolType::Compass)));
        assert!(!draft.toggle_tool(ExplorerTool::new("notebook", "Explorer Notebook", ToolType::Notebook)));
        assert_eq!(draft.tools().len(), MAX_TOOLS);

        // Toggling a selected tool removes it and frees a slot
        assert!(!draft.toggle_tool(ExplorerTool::new("compass", "Magic Compass", ToolType::Compass)));
        assert!(draft.toggle_tool(ExplorerTool::new("notebook", "Explorer Notebook", ToolType::Notebook)));
    }

    #[test]
    fn wrong_category_is_rejected() {
        let mut draft = CharacterDraft::new();
        let err = draft
            .select_hair(AvatarItem::new("eyes1", "Blue", ItemCategory::Eyes, "eyes1.png"))
            .expect_err("eyes are not hair");
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn missing_slot_is_named() {
        let err = CharacterDraft::new().build().expect_err("empty draft");
        assert_eq!(err, DomainError::validation("no hair selected"));
    }
}
