//! A running sketch session: gesture fold, snapshot publication and
//! settings.
//!
//! Input is processed on whichever thread owns the [`Session`]; other
//! threads read published models through [`Session::snapshots`] or get
//! them pushed via [`Session::subscribe`].

use super::model::{Model, SketchHost};
use super::update::update_model;
use crate::events::{Event, InputEvent};
use crate::input::{EventFold, PointerContext};
use crate::perf::UpdateMonitor;
use crate::render::{DrawContext, draw_model};
use crate::settings::Settings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher};
use crate::subscription::{Broadcaster, SnapshotCell, Subscription};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

type Update = fn(&Model, &Event) -> Model;

pub struct Session {
    fold: EventFold<Model, Update>,
    snapshots: Arc<SnapshotCell<Model>>,
    models: Broadcaster<Arc<Model>>,
    monitor: UpdateMonitor,
}

impl Session {
    pub fn new(host: Arc<dyn SketchHost>) -> Self {
        let model = Model::new(host);
        Self {
            snapshots: Arc::new(SnapshotCell::new(model.clone())),
            fold: EventFold::new(model, update_model as Update),
            models: Broadcaster::new(),
            monitor: UpdateMonitor::default(),
        }
    }

    pub fn with_settings(host: Arc<dyn SketchHost>, settings: &Settings) -> Self {
        let mut session = Self::new(host);
        session.apply_settings(settings);
        session
    }

    /// Fold `event` at the current time.
    pub fn handle(&mut self, event: InputEvent) -> Arc<Model> {
        self.handle_at(event, Instant::now())
    }

    /// Fold `event` as if it arrived at `now`, then publish the result.
    pub fn handle_at(&mut self, event: InputEvent, now: Instant) -> Arc<Model> {
        let start = Instant::now();
        let model = Arc::new(self.fold.handle(event, now).clone());
        self.monitor.record("input", start.elapsed());
        self.publish(Arc::clone(&model));
        model
    }

    fn publish(&self, model: Arc<Model>) {
        self.snapshots.store(Arc::clone(&model));
        self.models.emit(&model);
    }

    /// The most recently published model.
    pub fn model(&self) -> Arc<Model> {
        self.snapshots.load()
    }

    /// Shared handle for readers on other threads.
    pub fn snapshots(&self) -> Arc<SnapshotCell<Model>> {
        Arc::clone(&self.snapshots)
    }

    /// Call `observer` with every model published from now on.
    pub fn subscribe(&self, observer: impl Fn(&Arc<Model>) + Send + Sync + 'static) -> Subscription {
        self.models.subscribe(observer)
    }

    pub fn draw(&self, ctx: &mut impl DrawContext) {
        draw_model(ctx, &self.model());
    }

    pub fn context(&self) -> &PointerContext<Model> {
        self.fold.context()
    }

    pub fn monitor(&self) -> &UpdateMonitor {
        &self.monitor
    }

    /// Push settings into the gesture recogniser, the live model and any
    /// model saved by an in-progress gesture. An invalid mapping table is
    /// reported and the current mappings are kept.
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.fold.set_config(settings.gesture_config());

        let client = settings.client_model();
        let mappings = match settings.interaction_mappings() {
            Ok(mappings) => Some(Arc::new(mappings)),
            Err(e) => {
                warn!(error = %e, "Ignoring invalid pointer mappings");
                None
            }
        };
        let scroll_scale = settings.navigation.scroll_translation_scale;

        self.fold.map_models(|model| {
            let model = model
                .with_client(client.clone())
                .with_scroll_translation_scale(scroll_scale);
            match &mappings {
                Some(mappings) => model.with_pointer_mappings(Arc::clone(mappings)),
                None => model,
            }
        });

        self.publish(Arc::new(self.fold.model().clone()));
    }

    /// Reload settings from the watcher's file if it changed. Returns
    /// whether anything was applied.
    pub fn reload_settings_if_changed(&mut self, watcher: &mut SettingsWatcher) -> bool {
        match watcher.poll() {
            Some(SettingsEvent::Modified | SettingsEvent::Created) => {
                info!(path = %watcher.path().display(), "Settings file changed, reloading");
                let settings = Settings::load_from(watcher.path());
                self.apply_settings(&settings);
                true
            }
            Some(SettingsEvent::Deleted) => {
                warn!(path = %watcher.path().display(), "Settings file deleted; keeping current settings");
                false
            }
            Some(SettingsEvent::Error(e)) => {
                error!("Settings watch error: {}", e);
                false
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("model", &self.fold.model())
            .field("subscribers", &self.models.observer_count())
            .finish_non_exhaustive()
    }
}
