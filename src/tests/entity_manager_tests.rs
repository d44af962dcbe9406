use crate::entities::{Entity, EntityManager};
use crate::error::EcsError;

#[test]
pub fn handles_are_unique_and_increasing() {
	let mut manager = EntityManager::with_capacity(256);
	let mut previous = Entity::INVALID;

	for _ in 0..256 {
		let entity = manager.create_entity().unwrap();
		assert!(entity.is_valid(), "Created entity uses the invalid handle");
		assert!(entity > previous, "Handles are not monotonically increasing");
		previous = entity;
	}

	assert_eq!(manager.len(), 256);
}

#[test]
pub fn handles_are_not_reused() {
	let mut manager = EntityManager::with_capacity(4);
	let a = manager.create_entity().unwrap();
	let b = manager.create_entity().unwrap();
	manager.destroy_entity(a).unwrap();
	manager.destroy_entity(b).unwrap();

	let c = manager.create_entity().unwrap();
	assert!(c != a && c != b, "Destroyed handle was issued again");
	assert!(c > b);
}

#[test]
pub fn destroy_moves_last_entity_into_freed_slot() {
	let mut manager = EntityManager::with_capacity(8);
	let entities: Vec<_> = (0..4).map(|_| manager.create_entity().unwrap()).collect();

	manager.component_mask_mut(entities[3]).unwrap().set(2, true);
	manager.destroy_entity(entities[1]).unwrap();

	assert_eq!(manager.entities(), &[entities[0], entities[3], entities[2]]);
	assert_eq!(manager.index_of(entities[3]), Ok(1), "Swapped entity index was not updated");
	assert!(
		manager.component_mask(entities[3]).unwrap().get(2),
		"Swapped entity lost its mask"
	);
	assert!(!manager.is_alive(entities[1]));
	assert_eq!(manager.index_of(entities[1]), Err(EcsError::StaleEntity(entities[1])));
}

#[test]
pub fn destroy_last_entity() {
	let mut manager = EntityManager::with_capacity(8);
	let a = manager.create_entity().unwrap();
	let b = manager.create_entity().unwrap();

	manager.destroy_entity(b).unwrap();
	assert_eq!(manager.entities(), &[a]);
	assert_eq!(manager.index_of(a), Ok(0));

	manager.destroy_entity(a).unwrap();
	assert!(manager.is_empty());
}

#[test]
pub fn destroyed_mask_is_returned() {
	let mut manager = EntityManager::with_capacity(2);
	let entity = manager.create_entity().unwrap();
	manager.component_mask_mut(entity).unwrap().set(4, true);

	let mask = manager.destroy_entity(entity).unwrap();
	assert_eq!(mask.iter_ones().collect::<Vec<_>>(), vec![4]);
}

#[test]
pub fn capacity_is_enforced() {
	let mut manager = EntityManager::with_capacity(2);
	let a = manager.create_entity().unwrap();
	manager.create_entity().unwrap();

	assert_eq!(
		manager.create_entity(),
		Err(EcsError::EntityCapacityExceeded { capacity: 2 })
	);

	manager.destroy_entity(a).unwrap();
	assert!(manager.create_entity().is_ok(), "Capacity should only count alive entities");
}

#[test]
pub fn invalid_and_stale_handles() {
	let mut manager = EntityManager::with_capacity(2);
	assert_eq!(manager.destroy_entity(Entity::INVALID), Err(EcsError::InvalidEntity));
	assert_eq!(manager.destroy_entity(Entity(42)), Err(EcsError::StaleEntity(Entity(42))));

	let entity = manager.create_entity().unwrap();
	manager.destroy_entity(entity).unwrap();
	assert_eq!(manager.destroy_entity(entity), Err(EcsError::StaleEntity(entity)));
}

#[test]
pub fn last_handle_is_issued_before_exhaustion() {
	let mut manager = EntityManager::with_capacity(8).with_next_handle(u64::MAX - 1);

	assert_eq!(manager.create_entity().unwrap().to_bits(), u64::MAX - 1);
	assert_eq!(manager.create_entity().unwrap().to_bits(), u64::MAX);
	assert_eq!(manager.create_entity(), Err(EcsError::HandlesExhausted));
	assert_eq!(manager.create_entity(), Err(EcsError::HandlesExhausted));
	assert_eq!(manager.len(), 2, "Failed creation left an entity behind");

	// Exhaustion is not cleared by destroying or clearing.
	let last = manager.entities()[1];
	manager.destroy_entity(last).unwrap();
	manager.clear();
	assert_eq!(manager.create_entity(), Err(EcsError::HandlesExhausted));
}
