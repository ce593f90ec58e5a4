use std::collections::BTreeMap;
use std::mem;

use crate::container::insert_unique;
use crate::context::UpdateCtx;
use crate::error::{Collection, SceneError};
use crate::painter::Painter;
use crate::scene::Scene;

/// Id of the empty scene every manager starts with.
pub const DEFAULT_SCENE_ID: &str = "scene_default";

/// What [`SceneManager::load_scene`] does when asked for an id it does not hold.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum MissingScenePolicy {
    /// Switch to the default scene and log a warning.
    #[default]
    Fallback,
    /// Keep the current scene active.
    Strict,
}

/// Owns every scene and forwards update/draw to the active one.
///
/// The active scene is held by value, so there is always exactly one and it
/// can never dangle. Switching moves scenes between the active slot and the
/// inactive map.
pub struct SceneManager {
    active_id: String,
    active: Scene,
    inactive: BTreeMap<String, Scene>,
    missing_scene: MissingScenePolicy,
}

impl SceneManager {
    /// Manager holding only the empty default scene, which is active.
    pub fn new() -> Self {
        Self::with_policy(MissingScenePolicy::default())
    }

    pub fn with_policy(missing_scene: MissingScenePolicy) -> Self {
        Self {
            active_id: DEFAULT_SCENE_ID.to_owned(),
            active: Scene::new(),
            inactive: BTreeMap::new(),
            missing_scene,
        }
    }

    #[inline]
    pub fn missing_scene_policy(&self) -> MissingScenePolicy {
        self.missing_scene
    }

    pub fn set_missing_scene_policy(&mut self, policy: MissingScenePolicy) {
        self.missing_scene = policy;
    }

    // ── ownership ─────────────────────────────────────────────────────────

    /// Takes ownership of `scene` under `id`; a taken id is rejected.
    pub fn add_scene(&mut self, id: impl Into<String>, scene: Scene) -> Result<(), SceneError> {
        let id = id.into();
        if id == self.active_id {
            log::warn!("rejected scene `{id}`: id already in use");
            return Err(SceneError::duplicate(Collection::Scene, &id));
        }
        insert_unique(&mut self.inactive, Collection::Scene, id, scene)
    }

    /// Stores `scene` under `id`, returning the scene it displaced. Replacing
    /// the active scene swaps it in place.
    pub fn replace_scene(&mut self, id: impl Into<String>, scene: Scene) -> Option<Scene> {
        let id = id.into();
        if id == self.active_id {
            Some(mem::replace(&mut self.active, scene))
        } else {
            self.inactive.insert(id, scene)
        }
    }

    /// Removes and returns the scene under `id`. A missing id is a no-op.
    ///
    /// Removing the active scene activates the default scene, recreating it
    /// empty if it no longer exists.
    pub fn remove_scene(&mut self, id: &str) -> Option<Scene> {
        if id != self.active_id {
            let removed = self.inactive.remove(id);
            if removed.is_some() {
                log::debug!("removed scene `{id}`");
            }
            return removed;
        }

        log::warn!("removed active scene `{id}`; activating `{DEFAULT_SCENE_ID}`");
        let replacement = if id == DEFAULT_SCENE_ID {
            Scene::new()
        } else {
            self.inactive.remove(DEFAULT_SCENE_ID).unwrap_or_default()
        };
        self.active_id = DEFAULT_SCENE_ID.to_owned();
        Some(mem::replace(&mut self.active, replacement))
    }

    // ── switching ─────────────────────────────────────────────────────────

    /// Makes the scene under `id` active.
    ///
    /// A missing id returns [`SceneError::NotFound`]. Under
    /// [`MissingScenePolicy::Fallback`] the default scene is activated first;
    /// under [`MissingScenePolicy::Strict`] the active scene is kept.
    pub fn load_scene(&mut self, id: &str) -> Result<(), SceneError> {
        if id == self.active_id {
            return Ok(());
        }
        if let Some(next) = self.inactive.remove(id) {
            self.activate(id.to_owned(), next);
            return Ok(());
        }

        match self.missing_scene {
            MissingScenePolicy::Strict => {
                log::warn!("scene `{id}` not found; keeping `{}`", self.active_id);
            }
            MissingScenePolicy::Fallback => {
                log::warn!("scene `{id}` not found; falling back to `{DEFAULT_SCENE_ID}`");
                if self.active_id != DEFAULT_SCENE_ID {
                    let default = self.inactive.remove(DEFAULT_SCENE_ID).unwrap_or_default();
                    self.activate(DEFAULT_SCENE_ID.to_owned(), default);
                }
            }
        }
        Err(SceneError::not_found(Collection::Scene, id))
    }

    fn activate(&mut self, id: String, scene: Scene) {
        let previous = mem::replace(&mut self.active, scene);
        let previous_id = mem::replace(&mut self.active_id, id);
        log::debug!("switched scene `{previous_id}` -> `{}`", self.active_id);
        self.inactive.insert(previous_id, previous);
    }

    // ── lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn active_scene(&self) -> &Scene {
        &self.active
    }

    #[inline]
    pub fn active_scene_mut(&mut self) -> &mut Scene {
        &mut self.active
    }

    #[inline]
    pub fn active_scene_id(&self) -> &str {
        &self.active_id
    }

    /// Any scene by id, active or not.
    pub fn scene(&self, id: &str) -> Result<&Scene, SceneError> {
        if id == self.active_id {
            return Ok(&self.active);
        }
        self.inactive.get(id).ok_or_else(|| SceneError::not_found(Collection::Scene, id))
    }

    pub fn scene_mut(&mut self, id: &str) -> Result<&mut Scene, SceneError> {
        if id == self.active_id {
            return Ok(&mut self.active);
        }
        self.inactive.get_mut(id).ok_or_else(|| SceneError::not_found(Collection::Scene, id))
    }

    pub fn contains_scene(&self, id: &str) -> bool {
        id == self.active_id || self.inactive.contains_key(id)
    }

    /// All scene ids in ascending order.
    pub fn scene_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.inactive.keys().map(String::as_str).collect();
        ids.push(&self.active_id);
        ids.sort_unstable();
        ids
    }

    /// Number of scenes, the active one included.
    #[inline]
    pub fn len(&self) -> usize {
        self.inactive.len() + 1
    }

    // ── frame ─────────────────────────────────────────────────────────────

    pub fn update(&mut self, ctx: &UpdateCtx<'_>) {
        self.active.update(ctx);
    }

    pub fn draw(&self, painter: &mut Painter<'_>) {
        self.active.draw(painter);
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}
