use crate::components::Component;

mod entity_manager_tests;
mod entity_store_tests;

#[derive(Debug, Default, Clone, Copy, PartialEq, Component)]
pub struct Position {
	pub x: i64,
	pub y: i64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Component)]
pub struct Rotation {
	pub facing: i64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Component)]
pub struct Velocity(pub i64);

#[derive(Debug, Default, Clone, PartialEq, Component)]
pub struct Name(pub String);
