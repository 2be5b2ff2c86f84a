//! Simulation constants and tuning parameters.

/// Nominal tick rate of the host loop (Hz).
pub const TICK_RATE: u32 = 30;

/// Upper bound on a single tick step (seconds).
pub const MAX_DT: f64 = 1.0 / 30.0;

// --- World ---

/// Default arena width (world units).
pub const WORLD_WIDTH: f64 = 2200.0;

/// Default arena height (world units).
pub const WORLD_HEIGHT: f64 = 2200.0;

/// Static obstacles as (x, y, w, h). Geometry only.
pub const PILLARS: [(f64, f64, f64, f64); 3] = [
    (600.0, 600.0, 140.0, 220.0),
    (1500.0, 500.0, 160.0, 240.0),
    (1000.0, 1500.0, 180.0, 260.0),
];
pub const WALLS: [(f64, f64, f64, f64); 1] = [(900.0, 980.0, 420.0, 80.0)];

// --- Player ---

pub const PLAYER_RADIUS: f64 = 18.0;
pub const PLAYER_MAX_HP: f64 = 100.0;
/// Movement speed (units/s).
pub const PLAYER_SPEED: f64 = 220.0;
/// Duration of the red damage overlay after a hit (seconds).
pub const DAMAGE_FLASH_SECS: f64 = 0.4;

// --- Projectiles ---

pub const PROJECTILE_RADIUS: f64 = 3.0;
/// Lifetime of a projectile that hits nothing (seconds).
pub const PROJECTILE_LIFETIME: f64 = 1.4;

/// HUD ammo text. No weapon consumes finite ammo.
pub const AMMO_TEXT: &str = "∞";

/// Barrel spin rate of the Rapid weapon while fire is held (rad/s).
pub const RAPID_SPIN_RATE: f64 = 25.0;

// --- Enemies ---

/// Hit-flash duration after taking a projectile (seconds).
pub const HIT_FLASH_SECS: f64 = 0.08;

pub const KAMIKAZE_HP: f64 = 18.0;
pub const KAMIKAZE_RADIUS: f64 = 16.0;
pub const KAMIKAZE_SPEED: f64 = 170.0;
pub const KAMIKAZE_DAMAGE: f64 = 28.0;
pub const KAMIKAZE_SCORE: u32 = 1;

pub const ZIGZAG_HP: f64 = 40.0;
pub const ZIGZAG_RADIUS: f64 = 22.0;
pub const ZIGZAG_SPEED: f64 = 120.0;
pub const ZIGZAG_DAMAGE: f64 = 10.0;
pub const ZIGZAG_SCORE: u32 = 2;
/// Oscillation phase advance (rad/s).
pub const ZIGZAG_PHASE_RATE: f64 = 6.0;
/// Per-instance amplitude range, before scaling.
pub const ZIGZAG_AMPLITUDE_MIN: f64 = 0.9;
pub const ZIGZAG_AMPLITUDE_MAX: f64 = 1.4;
/// Scale applied to the per-instance amplitude.
pub const ZIGZAG_AMPLITUDE_SCALE: f64 = 0.7;
/// Upper bound of the randomized starting oscillation phase.
pub const ZIGZAG_INITIAL_PHASE_MAX: f64 = 10.0;
/// Sustained contact damage multiplier (per second).
pub const ZIGZAG_CONTACT_RATE: f64 = 6.0;

pub const CHARGER_HP: f64 = 90.0;
pub const CHARGER_RADIUS: f64 = 26.0;
pub const CHARGER_WALK_SPEED: f64 = 70.0;
pub const CHARGER_CHARGE_SPEED: f64 = 260.0;
/// Cool-down speed as a multiple of walk speed.
pub const CHARGER_COOL_FACTOR: f64 = 1.3;
pub const CHARGER_DAMAGE: f64 = 18.0;
pub const CHARGER_SCORE: u32 = 4;
/// Phase duration ranges (seconds).
pub const CHARGER_WALK_SECS: (f64, f64) = (0.5, 1.5);
pub const CHARGER_CHARGE_SECS: (f64, f64) = (0.6, 0.9);
pub const CHARGER_COOL_SECS: (f64, f64) = (0.7, 1.2);
/// Acceleration ramp rates (1/s).
pub const CHARGER_ACCEL_RAMP: f64 = 2.6;
pub const CHARGER_ACCEL_DECAY: f64 = 2.0;
/// Effective speed = target * (FLOOR + (1 - FLOOR) * accel).
pub const CHARGER_SPEED_FLOOR: f64 = 0.4;
/// Sustained contact damage multipliers (per second).
pub const CHARGER_CONTACT_RATE_CHARGING: f64 = 9.0;
pub const CHARGER_CONTACT_RATE: f64 = 4.0;

// --- Waves ---

/// Delay before the first wave of a session (seconds).
pub const FIRST_WAVE_DELAY_SECS: f64 = 2.0;
/// Enemy count = floor((BASE + PER_WAVE * wave) * difficulty).
pub const WAVE_BASE_COUNT: f64 = 6.0;
pub const WAVE_COUNT_PER_WAVE: f64 = 3.0;
/// Difficulty growth per spawned wave.
pub const WAVE_DIFFICULTY_STEP: f64 = 0.18;
/// Countdown range after a wave spawns (seconds).
pub const WAVE_COUNTDOWN_SECS: (f64, f64) = (5.0, 9.0);
/// Inclusive range of the randomized max-wave count.
pub const MIN_WAVES: u32 = 3;
pub const MAX_WAVES: u32 = 5;
/// Type roll thresholds: roll <= KAMIKAZE -> Kamikaze, <= ZIGZAG -> ZigZag, else Charger.
pub const SPAWN_ROLL_KAMIKAZE: f64 = 0.55;
pub const SPAWN_ROLL_ZIGZAG: f64 = 0.83;
/// Radial spawn distance from the player.
pub const SPAWN_DISTANCE: (f64, f64) = (380.0, 560.0);
/// Spawn positions keep this margin from the world edges.
pub const SPAWN_EDGE_MARGIN: f64 = 40.0;
