//! Shared asset cache for collision sounds and animation frames.
//!
//! Entities only carry [`AssetId`]s. Decoding and playback belong to an
//! external collaborator reached through [`AssetLoader`]; the cache keeps one
//! handle per identifier so that many entities referencing the same sound or
//! frame trigger a single load.
//!
//! # Failure handling
//!
//! A failed load is logged once and remembered. Later lookups of the same
//! identifier return `None` without calling the loader again, until
//! [`AssetCache::retry_failed`] clears the remembered failures.
//!
//! # Example
//!
//! ```
//! use tussle_core::assets::{AssetCache, AssetId, AssetKind, AssetLoader, RenderSurface};
//! use tussle_core::error::AssetError;
//!
//! struct Named;
//!
//! impl AssetLoader for Named {
//!     type Handle = String;
//!
//!     fn load(&mut self, kind: AssetKind, id: &AssetId) -> Result<String, AssetError> {
//!         Ok(format!("{kind}:{id}"))
//!     }
//! }
//!
//! let mut cache = AssetCache::new(Named);
//! assert_eq!(cache.load_sound(&AssetId::new("hit.wav")).as_deref(), Some("sound:hit.wav"));
//!
//! // Textures need a render surface first.
//! assert!(cache.load_texture(&AssetId::new("hero.png")).is_none());
//! cache.bind_render_surface(RenderSurface::new(1));
//! assert!(cache.load_texture(&AssetId::new("hero.png")).is_some());
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::AssetError;

/// Opaque identifier for a sound or texture (usually a path).
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetId(String);

impl AssetId {
    /// Wraps an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty identifier, meaning "no asset".
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId({:?})", self.0)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AssetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// What an asset is used for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    /// Audio clip
    Sound,
    /// Image / animation frame
    Texture,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sound => write!(f, "sound"),
            Self::Texture => write!(f, "texture"),
        }
    }
}

/// Handle to the render target textures are uploaded to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderSurface(u64);

impl RenderSurface {
    /// Wraps a collaborator-provided surface handle.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw handle.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Collaborator that turns identifiers into loaded handles.
pub trait AssetLoader {
    /// Loaded asset handle.
    type Handle: Clone;

    /// Loads one asset.
    ///
    /// # Errors
    ///
    /// Returns an [`AssetError`] if the asset is missing or cannot be decoded.
    fn load(&mut self, kind: AssetKind, id: &AssetId) -> Result<Self::Handle, AssetError>;
}

/// Cache of loaded assets keyed by kind and identifier.
pub struct AssetCache<L: AssetLoader> {
    loader: L,
    surface: Option<RenderSurface>,
    entries: HashMap<(AssetKind, AssetId), Option<L::Handle>>,
}

impl<L: AssetLoader> fmt::Debug for AssetCache<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetCache")
            .field("surface", &self.surface)
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<L: AssetLoader> AssetCache<L> {
    /// Creates an empty cache with no render surface bound.
    #[must_use]
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            surface: None,
            entries: HashMap::new(),
        }
    }

    /// Binds the render surface; required before textures can load.
    pub fn bind_render_surface(&mut self, surface: RenderSurface) {
        self.surface = Some(surface);
    }

    /// The bound render surface, if any.
    #[must_use]
    pub const fn render_surface(&self) -> Option<RenderSurface> {
        self.surface
    }

    /// Loads (or returns the cached) sound.
    pub fn load_sound(&mut self, id: &AssetId) -> Option<L::Handle> {
        self.load(AssetKind::Sound, id)
    }

    /// Loads (or returns the cached) texture.
    ///
    /// Returns `None` without touching the loader while no render surface is
    /// bound; the entity simply does not render.
    pub fn load_texture(&mut self, id: &AssetId) -> Option<L::Handle> {
        if self.surface.is_none() {
            tracing::trace!(asset = %id, "no render surface bound, skipping texture");
            return None;
        }
        self.load(AssetKind::Texture, id)
    }

    /// Loads an entity's collision sound and animation frames.
    ///
    /// Returns how many of them are available.
    pub fn preload(&mut self, entity: &Entity) -> usize {
        let mut ready = 0;
        let sound = entity.collision_sound();
        if !sound.is_empty() && self.load_sound(sound).is_some() {
            ready += 1;
        }
        for frame in entity.frames() {
            if self.load_texture(frame).is_some() {
                ready += 1;
            }
        }
        ready
    }

    /// Returns `true` if a load of this asset was attempted and failed.
    #[must_use]
    pub fn has_failed(&self, kind: AssetKind, id: &AssetId) -> bool {
        matches!(self.entries.get(&(kind, id.clone())), Some(None))
    }

    /// Forgets remembered failures so the next lookup retries them.
    ///
    /// Returns the number of failures cleared.
    pub fn retry_failed(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, handle| handle.is_some());
        before - self.entries.len()
    }

    /// Number of cached entries, failures included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been loaded or attempted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn load(&mut self, kind: AssetKind, id: &AssetId) -> Option<L::Handle> {
        let key = (kind, id.clone());
        if let Some(cached) = self.entries.get(&key) {
            return cached.clone();
        }

        let handle = match self.loader.load(kind, id) {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::warn!(error = %err, "asset load failed");
                None
            }
        };
        self.entries.insert(key, handle.clone());
        handle
    }
}
