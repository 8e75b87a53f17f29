//! Shared numeric constants for the canvas crate.

// ── Cursor trail ────────────────────────────────────────────────

/// Maximum number of dots kept in the trail.
pub const TRAIL_MAX_DOTS: usize = 20;

/// Opacity of a freshly spawned trail dot.
pub const TRAIL_SPAWN_OPACITY: f64 = 0.9;

/// Per-frame opacity multiplier.
pub const TRAIL_OPACITY_DECAY: f64 = 0.9;

/// Per-frame scale multiplier.
pub const TRAIL_SCALE_DECAY: f64 = 0.95;

/// Dots fainter than this are not drawn.
pub const TRAIL_MIN_OPACITY: f64 = 0.01;

/// Parked pointer position while the cursor is outside the document.
pub const TRAIL_OFFSCREEN: f64 = -100.0;

/// Radius of the soft halo around the live cursor.
pub const CURSOR_GLOW_RADIUS: f64 = 35.0;

/// Radius of the live cursor core.
pub const CURSOR_CORE_RADIUS: f64 = 4.0;

// ── Particle field ──────────────────────────────────────────────

/// Upper bound on the number of particles.
pub const PARTICLE_MAX_COUNT: usize = 100;

/// One particle per this many square CSS pixels.
pub const PARTICLE_AREA_PER_PARTICLE: f64 = 12_000.0;

/// Global clock advance per frame.
pub const PARTICLE_TIME_STEP: f64 = 0.008;

/// Distance beyond the edge before a particle wraps to the other side.
pub const PARTICLE_WRAP_MARGIN: f64 = 10.0;

/// Pointer repulsion radius.
pub const PARTICLE_REPEL_RADIUS: f64 = 150.0;

/// Maximum repulsion displacement per frame.
pub const PARTICLE_REPEL_STRENGTH: f64 = 3.0;

/// Maximum distance between two linked particles.
pub const PARTICLE_LINK_DISTANCE: f64 = 140.0;

/// Number of faint background orbs.
pub const ORB_COUNT: usize = 3;

/// Radius of each background orb.
pub const ORB_RADIUS: f64 = 120.0;

// ── Globe ───────────────────────────────────────────────────────

/// Side of the square globe canvas in CSS pixels.
pub const GLOBE_SIZE: f64 = 280.0;

/// Gap between the globe rim and the canvas edge.
pub const GLOBE_PADDING: f64 = 20.0;

/// Rotation advance per frame, in radians.
pub const GLOBE_ROTATION_STEP: f64 = 0.004;

/// Number of meridian ellipses.
pub const GLOBE_MERIDIANS: usize = 12;

/// Number of parallel ellipses.
pub const GLOBE_PARALLELS: usize = 6;

/// Longitude of the home marker relative to the rotation (~78° E).
pub const GLOBE_MARKER_LON: f64 = 1.36;

/// Normalised latitude of the home marker (~20° N).
pub const GLOBE_MARKER_LAT: f64 = 0.35;

/// Marker is drawn while `cos(lon)` stays above this.
pub const GLOBE_MARKER_HORIZON: f64 = -0.2;

/// Marker pulse period divisor in milliseconds.
pub const GLOBE_PULSE_MS: f64 = 300.0;
