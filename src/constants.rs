// Playfield geometry
pub const PLAYFIELD_WIDTH: f64 = 400.0;
pub const PLAYFIELD_HEIGHT: f64 = 600.0;

// Player
pub const PLAYER_X: f64 = 80.0;
pub const PLAYER_SIZE: f64 = 90.0;
pub const HITBOX_INSET: f64 = 20.0;
pub const BOUNDARY_TOLERANCE: f64 = 10.0;

// Physics (per tick)
pub const GRAVITY: f64 = 0.5;
pub const JUMP_VELOCITY: f64 = -7.0;

// Obstacles
pub const OBSTACLE_WIDTH: f64 = 120.0;
pub const BARRIER_HEIGHT: f64 = 300.0;
pub const GAP_HEIGHT: f64 = 180.0;
pub const GAP_MARGIN: f64 = 80.0;
pub const OBSTACLE_SPEED: f64 = 3.0;
pub const SPAWN_THRESHOLD: u32 = 100;
pub const MAX_SPAWN_THRESHOLD: u32 = 100_000;

// Frame timing
pub const FRAMES_PER_SECOND: u32 = 60;
pub const MAX_FRAMES_PER_SECOND: u32 = 1_000;

// Start screen animation
pub const FLOAT_STEP: f64 = 0.4;
pub const FLOAT_LIMIT: f64 = 10.0;
pub const BLINK_PERIOD_FRAMES: u32 = 30;

// Files under the data directory
pub const DATA_DIR_NAME: &str = ".flappy-burger";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "flappy-burger.log";
