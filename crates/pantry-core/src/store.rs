//! In-memory food store: identifier assignment and collection consistency

use parking_lot::RwLock;
use rand::{distributions::Alphanumeric, Rng};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{FoodError, FoodResult};
use crate::models::Food;
use crate::validate::validate_payload;

/// Source of fresh identifiers for created entities
///
/// Injected into the store so tests can force collisions and fixed
/// ids. Implementations do not need to guarantee uniqueness; the
/// store re-draws while an id is already in use.
pub trait IdGenerator: Send + Sync {
    /// Produce a candidate identifier
    fn generate(&self) -> String;
}

/// Default generator: random alphanumeric identifiers
#[derive(Debug, Clone)]
pub struct RandomIdGenerator {
    length: usize,
}

impl RandomIdGenerator {
    /// Create a generator producing ids of the given length
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new(8)
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}

/// Owner of the food collection
///
/// The single source of truth for identifier assignment and
/// consistency. All mutations run under one write lock, so no reader
/// ever observes a partially-applied create, update, or delete.
/// Listing preserves insertion order.
pub struct FoodStore {
    /// Stored entities in insertion order; ids are unique
    foods: RwLock<Vec<Food>>,
    /// Identifier source, re-drawn on collision
    id_gen: Box<dyn IdGenerator>,
}

impl Default for FoodStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodStore {
    /// Create an empty store with the default random id generator
    pub fn new() -> Self {
        Self::with_generator(Box::new(RandomIdGenerator::default()))
    }

    /// Create an empty store with a custom id generator
    pub fn with_generator(id_gen: Box<dyn IdGenerator>) -> Self {
        Self {
            foods: RwLock::new(Vec::new()),
            id_gen,
        }
    }

    /// Validate a payload and store it under a fresh id
    pub fn create(&self, payload: &Map<String, Value>) -> FoodResult<Food> {
        let valid = validate_payload(payload).map_err(|e| {
            debug!("create rejected: {}", e);
            e
        })?;

        let mut foods = self.foods.write();
        let id = Self::next_id(self.id_gen.as_ref(), &foods);
        let food = Food::new(id, valid.name, valid.calories);
        foods.push(food.clone());

        info!("food created: {} (\"{}\")", food.id, food.name);
        Ok(food)
    }

    /// All stored entities in insertion order
    pub fn list(&self) -> Vec<Food> {
        self.foods.read().clone()
    }

    /// Look up an entity by id
    pub fn get(&self, id: &str) -> FoodResult<Food> {
        let food = self
            .foods
            .read()
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or_else(|| FoodError::NotFound(id.to_string()))?;

        debug!("food fetched: {}", id);
        Ok(food)
    }

    /// Replace the name/calories of an existing entity
    ///
    /// The addressed id must exist, and a payload that carries its own
    /// `id` field must agree with it. The stored id never changes.
    pub fn update(&self, id: &str, payload: &Map<String, Value>) -> FoodResult<Food> {
        let mut foods = self.foods.write();

        let index = foods
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| FoodError::NotFound(id.to_string()))?;

        if let Some(payload_id) = payload.get("id") {
            if payload_id.as_str() != Some(id) {
                return Err(FoodError::IdentityMismatch {
                    expected: id.to_string(),
                    actual: payload_id
                        .as_str()
                        .map(str::to_string)
                        .unwrap_or_else(|| payload_id.to_string()),
                });
            }
        }

        let valid = validate_payload(payload).map_err(|e| {
            debug!("update of {} rejected: {}", id, e);
            FoodError::from(e)
        })?;

        let food = &mut foods[index];
        food.name = valid.name;
        food.calories = valid.calories;

        info!("food updated: {}", id);
        Ok(food.clone())
    }

    /// Remove an entity by id
    pub fn delete(&self, id: &str) -> FoodResult<()> {
        let mut foods = self.foods.write();

        let index = foods
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| FoodError::NotFound(id.to_string()))?;

        foods.remove(index);
        info!("food deleted: {}", id);
        Ok(())
    }

    /// Number of stored entities
    pub fn len(&self) -> usize {
        self.foods.read().len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.foods.read().is_empty()
    }

    /// Draw ids until one is not in use
    ///
    /// Runs while the caller holds the write lock, so a generated id
    /// cannot race with a concurrent create.
    fn next_id(id_gen: &dyn IdGenerator, foods: &[Food]) -> String {
        loop {
            let id = id_gen.generate();
            if !foods.iter().any(|f| f.id == id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use parking_lot::Mutex;
    use serde_json::json;
    use std::collections::VecDeque;

    /// Hands out a scripted sequence of ids, for collision tests
    struct ScriptedIdGenerator {
        ids: Mutex<VecDeque<String>>,
    }

    impl ScriptedIdGenerator {
        fn new(ids: &[&str]) -> Self {
            Self {
                ids: Mutex::new(ids.iter().map(|s| s.to_string()).collect()),
            }
        }
    }

    impl IdGenerator for ScriptedIdGenerator {
        fn generate(&self) -> String {
            self.ids.lock().pop_front().expect("script exhausted")
        }
    }

    fn payload(value: serde_json::Value) -> Map<String, Value> {
        value.as_object().expect("test payload must be an object").clone()
    }

    fn cake() -> Map<String, Value> {
        payload(json!({"name": "cake", "calories": 150}))
    }

    #[test]
    fn create_assigns_id_and_stores_fields() {
        let store = FoodStore::new();

        let food = store.create(&cake()).unwrap();

        assert!(!food.id.is_empty());
        assert_eq!(food.name, "cake");
        assert_eq!(food.calories, serde_json::Number::from(150));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn create_rejects_invalid_payload_and_stores_nothing() {
        let store = FoodStore::new();

        let result = store.create(&payload(json!({"calories": 100})));

        assert_eq!(
            result,
            Err(FoodError::InvalidInput(ValidationError::MissingName))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn create_redraws_on_id_collision() {
        let store = FoodStore::with_generator(Box::new(ScriptedIdGenerator::new(&[
            "aaaa1111", "aaaa1111", "bbbb2222",
        ])));

        let first = store.create(&cake()).unwrap();
        let second = store
            .create(&payload(json!({"name": "notCake", "calories": 75})))
            .unwrap();

        assert_eq!(first.id, "aaaa1111");
        assert_eq!(second.id, "bbbb2222");
    }

    #[test]
    fn created_entity_is_retrievable_by_id() {
        let store = FoodStore::new();
        let food = store.create(&cake()).unwrap();

        assert_eq!(store.get(&food.id).unwrap(), food);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = FoodStore::new();
        let cake = store.create(&cake()).unwrap();
        let not_cake = store
            .create(&payload(json!({"name": "notCake", "calories": 75})))
            .unwrap();

        assert_eq!(store.list(), vec![cake, not_cake]);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = FoodStore::new();

        assert_eq!(store.get("1"), Err(FoodError::NotFound("1".to_string())));
    }

    #[test]
    fn update_replaces_fields_and_keeps_id() {
        let store = FoodStore::new();
        let food = store.create(&cake()).unwrap();

        let updated = store
            .update(&food.id, &payload(json!({"name": "theCakeIsALie", "calories": 150})))
            .unwrap();

        assert_eq!(updated.id, food.id);
        assert_eq!(updated.name, "theCakeIsALie");
        assert_eq!(store.get(&food.id).unwrap(), updated);
    }

    #[test]
    fn update_accepts_matching_payload_id() {
        let store = FoodStore::new();
        let food = store.create(&cake()).unwrap();

        let updated = store
            .update(
                &food.id,
                &payload(json!({"name": "cake", "calories": 99, "id": food.id})),
            )
            .unwrap();

        assert_eq!(updated.calories, serde_json::Number::from(99));
    }

    #[test]
    fn update_rejects_mismatched_payload_id() {
        let store = FoodStore::new();
        let food = store.create(&cake()).unwrap();

        let result = store.update(
            &food.id,
            &payload(json!({"name": "cake", "calories": 150, "id": "someOtherId"})),
        );

        assert_eq!(
            result,
            Err(FoodError::IdentityMismatch {
                expected: food.id.clone(),
                actual: "someOtherId".to_string(),
            })
        );
        // Failed update leaves the store untouched
        assert_eq!(store.get(&food.id).unwrap(), food);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let store = FoodStore::new();

        assert_eq!(
            store.update("missing", &cake()),
            Err(FoodError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn update_rejects_invalid_payload_without_mutating() {
        let store = FoodStore::new();
        let food = store.create(&cake()).unwrap();

        let result = store.update(&food.id, &payload(json!({"name": "cake", "calories": -1})));

        assert_eq!(
            result,
            Err(FoodError::InvalidInput(ValidationError::NegativeCalories))
        );
        assert_eq!(store.get(&food.id).unwrap(), food);
    }

    #[test]
    fn delete_removes_entity() {
        let store = FoodStore::new();
        let food = store.create(&cake()).unwrap();

        store.delete(&food.id).unwrap();

        assert_eq!(
            store.get(&food.id),
            Err(FoodError::NotFound(food.id.clone()))
        );
        assert!(store.list().is_empty());
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let store = FoodStore::new();

        assert_eq!(
            store.delete("missing"),
            Err(FoodError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn mismatch_check_runs_before_validation() {
        let store = FoodStore::new();
        let food = store.create(&cake()).unwrap();

        // Payload is both invalid and mismatched; the id conflict wins
        let result = store.update(&food.id, &payload(json!({"id": "other"})));

        assert!(matches!(result, Err(FoodError::IdentityMismatch { .. })));
    }
}
