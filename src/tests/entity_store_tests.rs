use crate::tests::{Name, Position, Rotation, Velocity};
use crate::entities::{Entity, EntityStore};
use crate::config::StoreConfig;
use crate::components::ComponentId;
use crate::context::EcsContext;
use crate::error::EcsError;

#[test]
pub fn add_get_and_mutate() {
	let mut store = EntityStore::new();
	let entity = store.create_entity();

	let position = store.add_component(entity, Position { x: 1, y: 2 });
	position.y = 5;
	assert_eq!(store.get_component::<Position>(entity), &Position { x: 1, y: 5 });

	store.get_component_mut::<Position>(entity).x = -1;
	assert_eq!(store.get_component::<Position>(entity), &Position { x: -1, y: 5 });
	assert!(store.has_component::<Position>(entity));
	assert!(!store.has_component::<Rotation>(entity));
}

#[test]
pub fn add_sets_and_remove_clears_mask_bit() {
	let mut store = EntityStore::new();
	let entity = store.create_entity();
	store.add_component(entity, Velocity(3));

	let bit = store.registry().bit_of(ComponentId::of::<Velocity>()).unwrap();
	assert!(store.component_mask(entity).unwrap().get(bit));

	assert_eq!(store.remove_component::<Velocity>(entity), Velocity(3));
	assert!(!store.component_mask(entity).unwrap().get(bit), "Mask bit was not cleared");
	assert_eq!(store.component_count::<Velocity>(), 0);
	assert_eq!(
		store.try_get_component::<Velocity>(entity),
		Err(EcsError::ComponentNotFound {
			entity,
			component: ComponentId::of::<Velocity>()
		})
	);
}

#[test]
pub fn bits_are_assigned_in_registration_order() {
	let mut store = EntityStore::new();
	assert_eq!(store.register_component::<Rotation>(), Ok(0));
	assert_eq!(store.register_component::<Position>(), Ok(1));
	assert_eq!(store.register_component::<Rotation>(), Ok(0), "Registration is not idempotent");
	assert_eq!(store.registry().len(), 2);
}

#[test]
pub fn destroy_cascades_into_containers() {
	let mut store = EntityStore::new();
	let a = store.create_entity();
	let b = store.create_entity();
	let c = store.create_entity();

	for (i, entity) in [a, b, c].into_iter().enumerate() {
		store.add_component(entity, Position { x: i as i64, y: 0 });
	}
	store.add_component(b, Rotation { facing: 9 });
	store.add_component(c, Rotation { facing: 7 });

	store.destroy_entity(b);
	assert!(!store.is_alive(b));
	assert_eq!(store.entity_count(), 2);
	assert_eq!(store.component_count::<Position>(), 2, "Destroyed entity's position was kept");
	assert_eq!(store.component_count::<Rotation>(), 1, "Destroyed entity's rotation was kept");

	assert_eq!(store.get_component::<Position>(c), &Position { x: 2, y: 0 });
	assert_eq!(store.get_component::<Rotation>(c), &Rotation { facing: 7 });
	assert_eq!(store.get_component::<Position>(a), &Position { x: 0, y: 0 });
}

#[test]
pub fn stale_handles_are_reported_separately_from_missing_components() {
	let mut store = EntityStore::new();
	let entity = store.create_entity();
	store.destroy_entity(entity);

	assert_eq!(store.try_get_component::<Position>(entity), Err(EcsError::StaleEntity(entity)));
	assert_eq!(store.try_destroy_entity(entity), Err(EcsError::StaleEntity(entity)));
	assert_eq!(
		store.try_add_component(Entity::INVALID, Position::default()).map(|p| *p),
		Err(EcsError::InvalidEntity)
	);
}

#[test]
pub fn duplicate_add_is_rejected() {
	let mut store = EntityStore::new();
	let entity = store.create_entity();
	store.add_component(entity, Name("a".into()));

	assert!(matches!(
		store.try_add_component(entity, Name("b".into())),
		Err(EcsError::DuplicateComponent { .. })
	));
	assert_eq!(store.get_component::<Name>(entity), &Name("a".into()));
}

#[test]
pub fn explicit_registration_is_required_without_auto_registration() {
	let config = StoreConfig::default().with_auto_registration(false);
	let mut store = EntityStore::with_config(config).unwrap();
	let entity = store.create_entity();

	assert_eq!(
		store.try_add_component(entity, Rotation::default()).map(|r| *r),
		Err(EcsError::ComponentNotRegistered {
			component: ComponentId::of::<Rotation>()
		})
	);
	assert!(store.try_view::<Rotation>().is_err());

	store.register_component::<Rotation>().unwrap();
	assert!(store.try_add_component(entity, Rotation { facing: 1 }).is_ok());
	assert_eq!(store.view::<Rotation>().count(), 1);
}

#[test]
pub fn component_capacity_is_enforced() {
	let config = StoreConfig::default().with_max_components(2);
	let mut store = EntityStore::with_config(config).unwrap();
	let entity = store.create_entity();

	store.add_component(entity, Position::default());
	store.add_component(entity, Rotation::default());
	assert_eq!(
		store.try_add_component(entity, Velocity(0)).map(|v| *v),
		Err(EcsError::ComponentCapacityExceeded { capacity: 2 })
	);
	assert!(!store.has_component::<Velocity>(entity));
}

#[test]
pub fn entity_capacity_is_enforced() {
	let config = StoreConfig::default().with_max_entities(3);
	let mut store = EntityStore::with_config(config).unwrap();
	for _ in 0..3 {
		store.create_entity();
	}

	assert_eq!(
		store.try_create_entity(),
		Err(EcsError::EntityCapacityExceeded { capacity: 3 })
	);
}

#[test]
pub fn store_reports_its_config() {
	let config = StoreConfig::default().with_max_entities(7).with_auto_registration(false);
	let mut store = EntityStore::with_config(config).unwrap();
	assert_eq!(store.config().max_entities, 7);
	assert!(!store.config().auto_registration);

	let entity = store.create_entity();
	assert_eq!(store.entity_manager().capacity(), 7);
	assert_eq!(store.entity_manager().entities(), &[entity]);
}

#[test]
pub fn invalid_configs_are_rejected() {
	let too_wide = StoreConfig::default().with_max_components(crate::config::MAX_COMPONENTS + 1);
	assert!(matches!(EntityStore::with_config(too_wide), Err(EcsError::InvalidConfig(_))));

	let no_entities = StoreConfig::default().with_max_entities(0);
	assert!(matches!(EntityStore::with_config(no_entities), Err(EcsError::InvalidConfig(_))));
}

#[test]
pub fn clear_keeps_registrations() {
	let mut store = EntityStore::new();
	let entity = store.create_entity();
	store.add_component(entity, Position::default());
	store.clear();

	assert_eq!(store.entity_count(), 0);
	assert_eq!(store.component_count::<Position>(), 0);
	assert!(store.registry().is_registered::<Position>());

	let next = store.create_entity();
	assert!(next > entity, "Handles were reused after clear");
}

#[test]
#[should_panic(expected = "has no component of type")]
pub fn missing_component_panics() {
	let mut store = EntityStore::new();
	let entity = store.create_entity();
	store.get_component::<Position>(entity);
}

#[test]
#[should_panic(expected = "has already been destroyed")]
pub fn stale_handle_panics() {
	let mut store = EntityStore::new();
	let entity = store.create_entity();
	store.destroy_entity(entity);
	store.add_component(entity, Rotation::default());
}
