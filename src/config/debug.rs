//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

pub struct DebugFlags {
    /// Emit dataset load/save logs (paths, sizes, timings).
    pub print_serde: bool,
    /// Emit per-call ranking summaries (filtered count, selected count).
    pub print_ranking: bool,
    /// Emit each overlay decision (skipped pairs, marker dedup).
    pub print_overlay: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_serde: false,
    print_ranking: false,
    print_overlay: true,
};
