use std::collections::BTreeMap;

use tableau_engine::coords::Camera2D;
use tableau_engine::paint::Color;

use crate::container::{insert_unique, WidgetContainer};
use crate::context::UpdateCtx;
use crate::entity::Entity;
use crate::error::{Collection, SceneError};
use crate::painter::Painter;

/// World-space entities plus screen-space UI layers, drawn with one camera.
///
/// A frame draws in two passes: every entity inside the camera's world pass,
/// then every UI container in ascending draw order. The UI always lands on
/// top of the world regardless of draw order.
pub struct Scene {
    entities: BTreeMap<String, Box<dyn Entity>>,
    ui_containers: BTreeMap<String, WidgetContainer>,
    camera: Camera2D,
    background: Color,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
            ui_containers: BTreeMap::new(),
            camera: Camera2D::default(),
            background: Color::BLACK,
        }
    }

    // ── entities ──────────────────────────────────────────────────────────

    /// Takes ownership of `entity` under `id`; a taken id is rejected.
    pub fn add_entity(&mut self, id: impl Into<String>, entity: impl Entity) -> Result<(), SceneError> {
        self.add_boxed_entity(id, Box::new(entity))
    }

    pub fn add_boxed_entity(
        &mut self,
        id: impl Into<String>,
        entity: Box<dyn Entity>,
    ) -> Result<(), SceneError> {
        insert_unique(&mut self.entities, Collection::Entity, id.into(), entity)
    }

    /// Stores `entity` under `id`, returning the entity it displaced.
    pub fn replace_entity(&mut self, id: impl Into<String>, entity: impl Entity) -> Option<Box<dyn Entity>> {
        self.entities.insert(id.into(), Box::new(entity))
    }

    /// Removes and returns the entity under `id`. A missing id is a no-op.
    pub fn remove_entity(&mut self, id: &str) -> Option<Box<dyn Entity>> {
        let removed = self.entities.remove(id);
        if removed.is_some() {
            log::debug!("removed entity `{id}`");
        }
        removed
    }

    pub fn get_entity(&self, id: &str) -> Result<&dyn Entity, SceneError> {
        self.entities
            .get(id)
            .map(|e| &**e)
            .ok_or_else(|| SceneError::not_found(Collection::Entity, id))
    }

    pub fn get_entity_mut(&mut self, id: &str) -> Result<&mut dyn Entity, SceneError> {
        let entity: &mut dyn Entity = &mut **self
            .entities
            .get_mut(id)
            .ok_or_else(|| SceneError::not_found(Collection::Entity, id))?;
        Ok(entity)
    }

    /// Looks up `id` and downcasts it to the concrete entity type `T`.
    pub fn get_entity_as<T: Entity>(&self, id: &str) -> Result<&T, SceneError> {
        self.get_entity(id)?
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| SceneError::type_mismatch::<T>(Collection::Entity, id))
    }

    pub fn get_entity_as_mut<T: Entity>(&mut self, id: &str) -> Result<&mut T, SceneError> {
        self.get_entity_mut(id)?
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or_else(|| SceneError::type_mismatch::<T>(Collection::Entity, id))
    }

    #[inline]
    pub fn contains_entity(&self, id: &str) -> bool {
        self.entities.contains_key(id)
    }

    pub fn entity_ids(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    #[inline]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    // ── UI containers ─────────────────────────────────────────────────────

    /// Takes ownership of `container` under `id`; a taken id is rejected.
    pub fn add_ui_container(&mut self, id: impl Into<String>, container: WidgetContainer) -> Result<(), SceneError> {
        insert_unique(&mut self.ui_containers, Collection::UiContainer, id.into(), container)
    }

    pub fn replace_ui_container(
        &mut self,
        id: impl Into<String>,
        container: WidgetContainer,
    ) -> Option<WidgetContainer> {
        self.ui_containers.insert(id.into(), container)
    }

    /// Removes and returns the container under `id`. A missing id is a no-op.
    pub fn remove_ui_container(&mut self, id: &str) -> Option<WidgetContainer> {
        let removed = self.ui_containers.remove(id);
        if removed.is_some() {
            log::debug!("removed UI container `{id}`");
        }
        removed
    }

    pub fn get_ui_container(&self, id: &str) -> Result<&WidgetContainer, SceneError> {
        self.ui_containers
            .get(id)
            .ok_or_else(|| SceneError::not_found(Collection::UiContainer, id))
    }

    pub fn get_ui_container_mut(&mut self, id: &str) -> Result<&mut WidgetContainer, SceneError> {
        self.ui_containers
            .get_mut(id)
            .ok_or_else(|| SceneError::not_found(Collection::UiContainer, id))
    }

    #[inline]
    pub fn contains_ui_container(&self, id: &str) -> bool {
        self.ui_containers.contains_key(id)
    }

    pub fn ui_container_ids(&self) -> impl Iterator<Item = &str> {
        self.ui_containers.keys().map(String::as_str)
    }

    #[inline]
    pub fn ui_container_count(&self) -> usize {
        self.ui_containers.len()
    }

    /// `true` if the scene holds no entities and no UI containers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.ui_containers.is_empty()
    }

    // ── view ──────────────────────────────────────────────────────────────

    #[inline]
    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    #[inline]
    pub fn camera_mut(&mut self) -> &mut Camera2D {
        &mut self.camera
    }

    pub fn set_camera(&mut self, camera: Camera2D) {
        self.camera = camera;
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Updates every entity, then every UI container.
    pub fn update(&mut self, ctx: &UpdateCtx<'_>) {
        for entity in self.entities.values_mut() {
            entity.update(ctx);
        }
        for container in self.ui_containers.values_mut() {
            container.update(ctx);
        }
    }

    pub fn draw(&self, painter: &mut Painter<'_>) {
        painter.clear(self.background);

        // ── world pass ────────────────────────────────────────────────────
        painter.begin_world(self.camera);
        for entity in self.entities.values() {
            entity.draw(painter);
        }
        painter.end_world();

        // ── UI pass ───────────────────────────────────────────────────────
        let mut layers: Vec<&WidgetContainer> = self.ui_containers.values().collect();
        layers.sort_by_key(|c| c.draw_order());
        for layer in layers {
            layer.draw(painter);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use tableau_engine::coords::Vec2;
    use tableau_engine::draw::DrawCmd;

    use super::*;
    use crate::testing::{record, Input, Tracker, Tally};
    use crate::widget::Widget;

    fn layer(id: &str, order: i32, tally: &Tally) -> WidgetContainer {
        let mut container = WidgetContainer::with_draw_order(order);
        container.add_element(id, Tracker::new(id, tally)).unwrap();
        container
    }

    // ── ownership ─────────────────────────────────────────────────────────

    #[test]
    fn dropping_scene_drops_entities_and_widgets_once() {
        let tally = Tally::new();
        let mut scene = Scene::new();
        scene.add_entity("ship", Tracker::new("ship", &tally)).unwrap();
        scene.add_entity("rock", Tracker::new("rock", &tally)).unwrap();
        scene.add_ui_container("hud", layer("score", 0, &tally)).unwrap();

        drop(scene);
        assert_eq!(tally.drops(), 3);
    }

    #[test]
    fn duplicate_container_is_rejected() {
        let kept = Tally::new();
        let rejected = Tally::new();
        let mut scene = Scene::new();
        scene.add_ui_container("hud", layer("a", 0, &kept)).unwrap();

        let err = scene.add_ui_container("hud", layer("b", 0, &rejected)).unwrap_err();
        assert_eq!(err, SceneError::duplicate(Collection::UiContainer, "hud"));
        assert_eq!(rejected.drops(), 1);
        assert!(scene.get_ui_container("hud").unwrap().contains_element("a"));
    }

    #[test]
    fn remove_missing_entity_is_noop() {
        let tally = Tally::new();
        let mut scene = Scene::new();
        scene.add_entity("ship", Tracker::new("ship", &tally)).unwrap();

        assert!(scene.remove_entity("ghost").is_none());
        assert!(scene.remove_ui_container("ghost").is_none());
        assert_eq!(scene.entity_count(), 1);

        drop(scene.remove_entity("ship"));
        assert_eq!(tally.drops(), 1);
        assert!(scene.is_empty());
    }

    // ── lookup ────────────────────────────────────────────────────────────

    #[test]
    fn entity_lookup_preserves_identity() {
        let tally = Tally::new();
        let boxed: Box<dyn Entity> = Box::new(Tracker::new("ship", &tally));
        let addr: *const dyn Entity = &*boxed;
        let mut scene = Scene::new();
        scene.add_boxed_entity("ship", boxed).unwrap();

        assert!(std::ptr::addr_eq(scene.get_entity("ship").unwrap(), addr));
        assert!(std::ptr::addr_eq(scene.get_entity_mut("ship").unwrap(), addr));
        assert_eq!(scene.get_entity_as::<Tracker>("ship").unwrap().name(), "ship");
    }

    #[test]
    fn missing_lookups_name_the_id() {
        let scene = Scene::new();
        let err = scene.get_entity("ship").err().unwrap();
        assert_eq!(err.to_string(), "entity with id `ship` not found");
        let err = scene.get_ui_container("hud").err().unwrap();
        assert_eq!(err.to_string(), "UI container with id `hud` not found");
    }

    #[test]
    fn entity_transform_is_mutable_through_lookup() {
        let tally = Tally::new();
        let mut scene = Scene::new();
        scene.add_entity("ship", Tracker::new("ship", &tally)).unwrap();
        scene.get_entity_mut("ship").unwrap().transform_mut().position = Vec2::new(5.0, 6.0);
        assert_eq!(scene.get_entity("ship").unwrap().transform().position, Vec2::new(5.0, 6.0));
    }

    // ── update ────────────────────────────────────────────────────────────

    #[test]
    fn update_reaches_entities_and_visible_widgets() {
        let tally = Tally::new();
        let mut scene = Scene::new();
        scene.add_entity("ship", Tracker::new("ship", &tally)).unwrap();
        scene.add_ui_container("hud", layer("score", 0, &tally)).unwrap();
        scene.add_ui_container("menu", layer("title", 0, &tally)).unwrap();
        scene.get_ui_container_mut("menu").unwrap().set_all_visibility_to(false);

        let input = Input::new();
        scene.update(&input.ctx());
        assert_eq!(tally.updates(), 2);
    }

    // ── draw ──────────────────────────────────────────────────────────────

    #[test]
    fn world_is_drawn_before_any_ui() {
        let tally = Tally::new();
        let mut scene = Scene::new();
        scene.add_ui_container("back", layer("backdrop", -100, &tally)).unwrap();
        scene.add_entity("ship", Tracker::new("ship", &tally)).unwrap();

        let list = record(|p| scene.draw(p));
        assert_eq!(tally.trace(), ["ship", "backdrop"]);

        let kinds: Vec<&str> = list
            .items()
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::Clear(_) => "clear",
                DrawCmd::BeginWorld(_) => "begin",
                DrawCmd::EndWorld => "end",
                _ => "draw",
            })
            .collect();
        assert_eq!(kinds, ["clear", "begin", "draw", "end", "draw"]);
    }

    #[test]
    fn containers_draw_in_ascending_order() {
        let tally = Tally::new();
        let mut scene = Scene::new();
        scene.add_ui_container("a", layer("front", 5, &tally)).unwrap();
        scene.add_ui_container("b", layer("back", -5, &tally)).unwrap();
        scene.add_ui_container("c", layer("middle", 0, &tally)).unwrap();

        record(|p| scene.draw(p));
        assert_eq!(tally.trace(), ["back", "middle", "front"]);
    }

    #[test]
    fn camera_and_background_are_recorded() {
        let mut scene = Scene::new();
        scene.set_background(Color::WHITE);
        scene.camera_mut().zoom = 2.0;

        let list = record(|p| scene.draw(p));
        assert_eq!(list.items()[0], DrawCmd::Clear(Color::WHITE));
        let DrawCmd::BeginWorld(camera) = &list.items()[1] else { panic!("expected world pass") };
        assert_eq!(camera.zoom, 2.0);
        assert_eq!(list.stats().world_passes, 1);
    }

    #[test]
    fn hidden_widget_in_visible_layer_is_skipped() {
        let tally = Tally::new();
        let mut scene = Scene::new();
        let mut hud = layer("score", 0, &tally);
        hud.add_element("lives", Tracker::new("lives", &tally)).unwrap();
        hud.get_element_mut("score").unwrap().toggle_display_state();
        scene.add_ui_container("hud", hud).unwrap();

        record(|p| scene.draw(p));
        assert_eq!(tally.trace(), ["lives"]);
    }
}
