//=========================================================================
// Skimmer
//
// One-button side-scroller on top of the arcade engine.
//
// Hold the primary key (or press on the stage) to climb, release to fall.
// Barriers scroll in from the right with their gaps placed by a noise
// curve; touching one restarts the run. The mute button in the corner
// swallows presses that land on it.
//
// Nothing is drawn: the engine runs with its default `NullSurface` and
// the game reports progress through the log. Set `RUST_LOG=debug` for
// per-run details.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use arcade_engine::core::geometry::{
    choose, clamp, map_range, noise1, noise2, random_range, rects_intersect, Point, Rect,
};
use arcade_engine::prelude::*;

//=== Tuning ==============================================================

/// Values at the 960×540 reference resolution, scaled by the stage ratio.
const GRAVITY: f32 = 0.48;
const CLIMB_ACCEL: f32 = -0.9;
const MAX_CLIMB_SPEED: f32 = -6.0;
const HITBOX_WIDTH: f32 = 72.0;
const HITBOX_HEIGHT: f32 = 30.0;
const BLOCK_WIDTH: f32 = 40.0;
const BARRIER_GAP: f32 = 220.0;
const BARRIER_SPACING: f32 = 320.0;
const SCROLL_SPEED: f32 = 5.0;
const SCORE_MULTIPLIER: f32 = 0.2;

//=== Game State ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Waiting for the first tap of a run.
    Ready,
    Playing,
}

#[derive(Debug)]
struct Barrier {
    top: Rect,
    bottom: Rect,
}

impl Barrier {
    fn shift(&mut self, dx: f32) {
        self.top.x -= dx;
        self.bottom.x -= dx;
    }

    fn hits(&self, hitbox: &Rect) -> bool {
        rects_intersect(&self.top, hitbox) || rects_intersect(&self.bottom, hitbox)
    }
}

struct Skimmer {
    rng: StdRng,
    phase: Phase,
    scale: (f32, f32),
    ui: ButtonBar,
    mute_button: Option<ButtonId>,
    muted: bool,

    player: Point,
    velocity: f32,
    barriers: Vec<Barrier>,
    noise: fn(f32) -> f32,
    distance: f32,
    next_barrier: f32,
    best: u32,
}

impl Skimmer {
    fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            phase: Phase::Ready,
            scale: (1.0, 1.0),
            ui: ButtonBar::new(),
            mute_button: None,
            muted: false,
            player: Point::ORIGIN,
            velocity: 0.0,
            barriers: Vec::new(),
            noise: noise1,
            distance: 0.0,
            next_barrier: 0.0,
            best: 0,
        }
    }

    fn score(&self) -> u32 {
        (self.distance * SCORE_MULTIPLIER).floor() as u32
    }

    fn hitbox(&self) -> Rect {
        Rect::centered(self.player, HITBOX_WIDTH * self.scale.1, HITBOX_HEIGHT * self.scale.1)
    }

    fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        if let Some(id) = self.mute_button {
            self.ui.set_label(id, if self.muted { "UNMUTE" } else { "MUTE" });
        }
        info!("Sound {}", if self.muted { "muted" } else { "unmuted" });
    }

    fn spawn_barrier(&mut self, stage: &Stage) {
        let (sx, sy) = self.scale;
        let gap = BARRIER_GAP * sy;
        let width = BLOCK_WIDTH * sx;

        let n = (self.noise)(self.distance * 0.004);
        let jitter = random_range(&mut self.rng, -10.0, 10.0) * sy;
        let center = gap_center(n, jitter, gap, stage.height());

        let x = stage.width();
        self.barriers.push(Barrier {
            top: Rect::new(x, 0.0, width, center - gap / 2.0),
            bottom: Rect::new(x, center + gap / 2.0, width, stage.height() - center - gap / 2.0),
        });
    }
}

/// Vertical centre of a barrier gap for noise value `n`, kept far enough
/// from both edges that neither block has a negative height.
fn gap_center(n: f32, jitter: f32, gap: f32, height: f32) -> f32 {
    let (lo, hi) = (gap / 2.0, height - gap / 2.0);
    clamp(map_range(n, 0.0, 1.0, lo, hi) + jitter, lo, hi)
}

//=== Lifecycle Hooks =====================================================

impl Game for Skimmer {
    fn init(manager: &mut LifecycleManager<Self>) {
        manager.on_fn(LifecycleEvent::Update, |ctx: &mut LoopContext<Self>| {
            if let Tap::Ui(id) = tap(ctx.input(), &ctx.game.ui) {
                if Some(id) == ctx.game.mute_button {
                    ctx.game.toggle_mute();
                }
            }
        });
    }

    fn on_start(ctx: &mut LoopContext<Self>) {
        let scale = ctx.stage().ratio();
        let game = &mut ctx.game;
        game.scale = scale;
        game.mute_button = Some(game.ui.add(Point::new(64.0, 32.0), 100.0, 50.0, "MUTE"));
        info!("Skimmer ready (scale {:.2}x{:.2})", scale.0, scale.1);
    }

    fn on_restart(ctx: &mut LoopContext<Self>) {
        let mid = ctx.stage().mid();
        let width = ctx.stage().width();
        let game = &mut ctx.game;

        let score = game.score();
        if score > game.best {
            game.best = score;
        }
        debug!("Run over: score {} (best {})", score, game.best);

        game.phase = Phase::Ready;
        game.player = Point::new(width * 0.2, mid.y);
        game.velocity = 0.0;
        game.barriers.clear();
        game.distance = 0.0;
        game.next_barrier = BARRIER_SPACING * game.scale.0;

        let noises: [fn(f32) -> f32; 2] = [noise1, noise2];
        game.noise = choose(&mut game.rng, &noises).copied().unwrap_or(noise1);
    }

    fn on_update(ctx: &mut LoopContext<Self>) {
        let dt = ctx.clock().clamped_delta() as f32;
        let stage = *ctx.stage();
        let flying = fly_held(ctx.input());
        let tapped = tap(ctx.input(), &ctx.game.ui) == Tap::Action;

        let game = &mut ctx.game;
        let (sx, sy) = game.scale;

        if game.phase == Phase::Ready {
            if tapped {
                game.phase = Phase::Playing;
                info!("Run started");
            }
            return;
        }

        //--- Player ----------------------------------------------------------

        if flying {
            game.velocity = (game.velocity + CLIMB_ACCEL * sy * dt).max(MAX_CLIMB_SPEED * sy);
        } else {
            game.velocity += GRAVITY * sy * dt;
        }
        game.player.y += game.velocity * dt;

        //--- Scrolling -------------------------------------------------------

        let dx = SCROLL_SPEED * sx * dt;
        game.distance += dx;
        for barrier in &mut game.barriers {
            barrier.shift(dx);
        }
        game.barriers.retain(|b| b.top.right() >= 0.0);

        game.next_barrier -= dx;
        if game.next_barrier <= 0.0 {
            game.spawn_barrier(&stage);
            game.next_barrier += BARRIER_SPACING * sx;
        }

        //--- Collisions ------------------------------------------------------

        let hitbox = game.hitbox();
        let off_stage = hitbox.bottom() < 0.0 || hitbox.y > stage.height();
        if off_stage || game.barriers.iter().any(|b| b.hits(&hitbox)) {
            info!("Crashed at {}", game.score());
            ctx.request_restart();
        }
    }

    fn on_render(ctx: &mut LoopContext<Self>) {
        let frame = ctx.clock().frame_count();
        if frame % 600 == 0 {
            debug!(
                "frame {}: {} fps, score {}, {} barriers",
                frame,
                ctx.clock().fps(),
                ctx.game.score(),
                ctx.game.barriers.len()
            );
        }
    }
}

//=== Entry Point =========================================================

fn main() {
    init_tracing();

    let result = EngineBuilder::new()
        .with_title("Skimmer")
        .build(Skimmer::new())
        .run();

    if let Err(err) = result {
        log::error!("Engine failed: {}", err);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .init();
}

//=========================================================================
// Unit Tests
//=========================================================================
