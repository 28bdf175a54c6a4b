//! Semantic action IDs for demo click targets.

// ── Tab bar ──────────────────────────────────────────────────
pub const TAB_BASE: u16 = 1; // +Tab::index() 0..2

// ── Skills tab ───────────────────────────────────────────────
pub const SKILL_CHIP_BASE: u16 = 10; // +index into SKILL_CATALOG
pub const HOURS_DOWN: u16 = 30;
pub const HOURS_UP: u16 = 31;
pub const ANALYZE: u16 = 40;

// ── Gaps tab ─────────────────────────────────────────────────
pub const GENERATE_PLAN: u16 = 50;

// ── Plan tab ─────────────────────────────────────────────────
pub const START_OVER: u16 = 60;
