// Page contract: element ids the front-end binds to.

// Snowfall canvas and effect targets
pub const SNOW_CANVAS_ID: &str = "snow-c";
pub const STAGE_ID: &str = "stage";
pub const GRADIENT_ID: &str = "bg-gradient";
pub const CARD_ID: &str = "card";

// Splash screen and player
pub const SPLASH_ID: &str = "splash";
pub const AUDIO_ID: &str = "player-audio";
pub const OPEN_BUTTON_ID: &str = "open-btn";
pub const CLOSE_BUTTON_ID: &str = "close-btn";
pub const PLAY_BUTTON_ID: &str = "play-btn";
pub const MUTE_BUTTON_ID: &str = "mute-btn";
pub const STOP_BUTTON_ID: &str = "stop-btn";
pub const SEEK_INPUT_ID: &str = "seek";
pub const TIME_CURRENT_ID: &str = "time-current";
pub const TIME_DURATION_ID: &str = "time-duration";
pub const PROGRESS_FILL_ID: &str = "progress-fill";

// Class toggled on the splash and stage to show or hide them
pub const HIDDEN_CLASS: &str = "hidden";

// Optional overrides read from the canvas
pub const DENSITY_DIVISOR_ATTR: &str = "data-density-divisor";
pub const SMOOTHING_ATTR: &str = "data-smoothing";

// Drawing
pub const SNOW_FILL_STYLE: &str = "rgba(255,255,255,0.9)";

// Player track
pub const AUDIO_SRC: &str = "/spring-lofi.mp3";
