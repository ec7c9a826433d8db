// Shared tuning constants for the synapse field.

// Layout
pub const MARGIN: f32 = 50.0; // inset from every viewport edge
pub const NARROW_BREAKPOINT: f32 = 640.0; // logical widths below this use the narrow tier

// Field generation
pub const NODE_COUNT_WIDE: usize = 100;
pub const NODE_COUNT_NARROW: usize = 55;
pub const CONNECTION_DISTANCE_WIDE: f32 = 150.0;
pub const CONNECTION_DISTANCE_NARROW: f32 = 120.0;
pub const MIN_NODE_SPACING: f32 = 40.0;
pub const PLACEMENT_ATTEMPTS_PER_NODE: usize = 25;

// Node motion and shape
pub const NODE_SPEED_SPAN: f32 = 0.3; // velocity components drawn from +/- half of this
pub const NODE_RADIUS_MIN: f32 = 1.5;
pub const NODE_RADIUS_SPAN: f32 = 2.0;

// Activation
pub const POINTER_RADIUS: f32 = 140.0;
pub const ACTIVATION_DECAY: f32 = 0.982;
pub const ACTIVATION_EPSILON: f32 = 0.008;
pub const PROPAGATION_THRESHOLD: f32 = 0.25;
pub const PROPAGATION_STRENGTH: f32 = 0.18;
pub const AMBIENT_FIRE_PROBABILITY: f32 = 0.008;
pub const AMBIENT_FIRE_MIN: f32 = 0.3;
pub const AMBIENT_FIRE_SPAN: f32 = 0.2;

// Energy particles
pub const MAX_PARTICLES: usize = 60;
pub const SPAWN_DIFF_THRESHOLD: f32 = 0.15;
pub const SPAWN_PEAK_THRESHOLD: f32 = 0.35;
pub const SPAWN_CHANCE: f32 = 0.025;
pub const PARTICLE_SPEED_MIN: f32 = 0.012;
pub const PARTICLE_SPEED_SPAN: f32 = 0.018;
pub const PARTICLE_ALPHA_MIN: f32 = 0.6;
pub const PARTICLE_ALPHA_SPAN: f32 = 0.4;
pub const PARTICLE_FADE_RATE: f32 = 5.0; // envelope slope at both ends of progress
pub const PARTICLE_GLOW_RADIUS: f32 = 5.0;

// Edge styling
pub const EDGE_BASE_ALPHA: f32 = 0.08;
pub const EDGE_BOOST_ALPHA: f32 = 0.45;
pub const EDGE_MIN_ALPHA: f32 = 0.01;
pub const EDGE_WIDTH_BASE: f32 = 0.4;
pub const EDGE_WIDTH_BOOST: f32 = 1.2;
pub const EDGE_COLOR_DIM: [u8; 3] = [100, 116, 139];
pub const EDGE_COLOR_HOT: [u8; 3] = [96, 180, 250];

// Node styling
pub const PULSE_RATE: f32 = 1.2; // radians per second
pub const PULSE_DEPTH: f32 = 0.25;
pub const GLOW_THRESHOLD: f32 = 0.04;
pub const GLOW_REACH: f32 = 18.0; // extra glow radius at full activation
pub const PIP_THRESHOLD: f32 = 0.5;
pub const PIP_RADIUS_FRACTION: f32 = 0.4;
pub const CORE_ALPHA_BASE: f32 = 0.25;
pub const CORE_COLOR_COLD: [u8; 3] = [148, 163, 184];
pub const CORE_COLOR_HOT: [u8; 3] = [160, 210, 255];
pub const PIP_COLOR: [u8; 3] = [220, 240, 255];

// Glow palette shared by node halos and particles
pub const GLOW_WHITE: [u8; 3] = [180, 220, 255];
pub const PARTICLE_WHITE: [u8; 3] = [190, 220, 255];
pub const GLOW_BLUE: [u8; 3] = [96, 180, 250];
pub const GLOW_EDGE: [u8; 3] = [59, 130, 246];

// Magnetic hover
pub const MAGNET_STRENGTH: f32 = 0.3;
pub const MAGNET_RADIUS: f32 = 80.0;
pub const MAGNET_STIFFNESS: f32 = 150.0;
pub const MAGNET_DAMPING: f32 = 15.0;
pub const MAGNET_MAX_DT_SEC: f32 = 0.1;
pub const MAGNET_SUBSTEP_SEC: f32 = 1.0 / 120.0;
pub const MAGNET_REST_EPSILON: f32 = 0.01;
