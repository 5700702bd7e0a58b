use rapier2d::prelude::*;

/// Collision groups for filtering what objects can collide with each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Default group - interacts with everything
    Default = 0b0000_0001,

    /// The player character
    Player = 0b0000_0010,

    /// Walkable ground (floors, platforms); the only group ground probes report
    Ground = 0b0000_0100,

    /// Sensors (trigger zones, etc.) - don't cause physical collision
    Sensor = 0b0000_1000,
}

impl CollisionGroups {
    fn bits(self) -> Group {
        Group::from_bits_truncate(self as u32)
    }

    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let filter = match self {
            // Players stand on ground and trip sensors, but never touch each other
            CollisionGroups::Player => CollisionGroups::Ground.bits() | CollisionGroups::Sensor.bits(),

            CollisionGroups::Ground => {
                CollisionGroups::Player.bits()
                    | CollisionGroups::Ground.bits()
                    | CollisionGroups::Default.bits()
            }

            CollisionGroups::Sensor | CollisionGroups::Default => Group::ALL,
        };

        InteractionGroups::new(self.bits(), filter)
    }

    /// Groups for a scene query issued on behalf of `self` that only reports `target`
    pub fn query_for(self, target: CollisionGroups) -> InteractionGroups {
        InteractionGroups::new(self.bits(), target.bits())
    }
}
