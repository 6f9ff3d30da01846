use skyhop_core::config::GameConfig;
use skyhop_core::world::World;

use crate::assets::AssetCache;
use crate::diag;
use crate::input::InputState;
use crate::renderer::CanvasRenderer;

/// The running session: the simulation plus its collaborators. One
/// instance lives for the whole page lifetime.
pub struct App {
    world: World,
    pub input: InputState,
    cache: AssetCache,
    renderer: CanvasRenderer,
    running: bool,
    prev_timestamp: f64,
}

impl App {
    pub fn new(renderer: CanvasRenderer, config: GameConfig) -> Self {
        let world = World::new(config);

        // Kick off every image load up front; sprites no-op until ready.
        let mut cache = AssetCache::new();
        let mut sources: Vec<String> = vec![world.player.animation.sheet.src.clone()];
        sources.extend(
            world
                .platforms()
                .iter()
                .map(|p| p.animation().sheet.src.clone()),
        );
        for src in sources {
            if let Err(e) = cache.load(&src) {
                diag::console_warn!("could not start loading {src}: {e:?}");
            }
        }

        Self {
            world,
            input: InputState::new(),
            cache,
            renderer,
            running: false,
            prev_timestamp: 0.0,
        }
    }

    /// Begin the session at the given presentation timestamp.
    pub fn start(&mut self, now: f64) {
        if self.running {
            return;
        }
        self.running = true;
        self.prev_timestamp = now;
    }

    /// Clear the running flag. Any frame callback already scheduled will
    /// see the flag and decline to reschedule itself. Not wired to any
    /// control yet; the session normally lives as long as the page.
    #[allow(dead_code)]
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One scheduled frame: measure the timestamp delta, step the world
    /// with the current input snapshot, repaint.
    pub fn frame(&mut self, timestamp: f64) {
        let dt = (timestamp - self.prev_timestamp) as f32;
        self.prev_timestamp = timestamp;

        let input = self.input.snapshot();
        self.world.update(dt, input);
        self.render();
    }

    /// Paint order: background, platforms in list order, player on top.
    fn render(&self) {
        self.renderer.clear();
        for platform in self.world.platforms() {
            self.renderer
                .draw_sprite(&self.cache, platform.animation(), platform.rect());
        }
        self.renderer.draw_sprite(
            &self.cache,
            &self.world.player.animation,
            &self.world.player.rect,
        );
    }
}
