use worldexplorer_domain::{
    Difficulty, Mission, MissionCategory, MissionId, MissionType, Reward, RewardType,
};

use super::locations;

pub fn sample_missions() -> Vec<Mission> {
    vec![
        Mission {
            id: MissionId::new("mission1"),
            title: "Eiffel Tower Discovery".to_string(),
            description: "Learn about the iconic Eiffel Tower in Paris".to_string(),
            mission_type: MissionType::GeographicDiscovery,
            category: MissionCategory::Landmarks,
            location: locations::eiffel_tower(),
            difficulty: Difficulty::Easy,
            points: 100,
            unlocked: true,
            completed: false,
            progress: 0,
            requirements: Vec::new(),
            rewards: vec![
                Reward::new(RewardType::Experience, "xp", 100),
                Reward::new(RewardType::Badge, "paris_explorer", 1),
            ],
        },
        Mission {
            id: MissionId::new("mission2"),
            title: "Japanese Greetings".to_string(),
            description: "Learn basic Japanese greetings".to_string(),
            mission_type: MissionType::LanguageLearning,
            category: MissionCategory::Language,
            location: locations::tokyo_mission(),
            difficulty: Difficulty::Medium,
            points: 150,
            unlocked: true,
            completed: false,
            progress: 0,
            requirements: Vec::new(),
            rewards: vec![
                Reward::new(RewardType::Experience, "xp", 150),
                Reward::new(RewardType::Badge, "language_learner", 1),
            ],
        },
    ]
}
