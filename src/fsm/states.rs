//! Concrete state handler functions and table builder.
//!
//! ```text
//!  IDLE ──[cycles remaining]──▶ FORWARD ──[dwell]──▶ REVERSE
//!    ▲                                                  │
//!    └──────────────────[dwell, cycle++]────────────────┘
//! ```

use super::context::SequenceContext;
use super::{StateDescriptor, StateId};
use crate::drivers::h_bridge::{BridgeState, Direction};
use log::info;

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0: Idle
        StateDescriptor {
            id: StateId::Idle,
            name: "Idle",
            on_enter: Some(idle_enter),
            on_exit: None,
            on_update: idle_update,
        },
        // Index 1: Forward
        StateDescriptor {
            id: StateId::Forward,
            name: "Forward",
            on_enter: Some(forward_enter),
            on_exit: None,
            on_update: forward_update,
        },
        // Index 2: Reverse
        StateDescriptor {
            id: StateId::Reverse,
            name: "Reverse",
            on_enter: Some(reverse_enter),
            on_exit: Some(reverse_exit),
            on_update: reverse_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  IDLE
// ═══════════════════════════════════════════════════════════════════════════

fn idle_enter(ctx: &mut SequenceContext) {
    ctx.command = BridgeState::Coasting;
    ctx.dwell_ms = 0;
}

fn idle_update(ctx: &mut SequenceContext) -> Option<StateId> {
    (ctx.cycles_remaining() > 0).then_some(StateId::Forward)
}

// ═══════════════════════════════════════════════════════════════════════════
//  FORWARD
// ═══════════════════════════════════════════════════════════════════════════

fn forward_enter(ctx: &mut SequenceContext) {
    ctx.command = BridgeState::Driving(Direction::Forward);
    ctx.dwell_ms = ctx.forward_ms;
    info!("FORWARD: {} ms", ctx.forward_ms);
}

fn forward_update(_ctx: &mut SequenceContext) -> Option<StateId> {
    // Caller has already held the command for `dwell_ms`.
    Some(StateId::Reverse)
}

// ═══════════════════════════════════════════════════════════════════════════
//  REVERSE
// ═══════════════════════════════════════════════════════════════════════════

fn reverse_enter(ctx: &mut SequenceContext) {
    ctx.command = BridgeState::Driving(Direction::Reverse);
    ctx.dwell_ms = ctx.reverse_ms;
    info!("REVERSE: {} ms", ctx.reverse_ms);
}

fn reverse_update(_ctx: &mut SequenceContext) -> Option<StateId> {
    Some(StateId::Idle)
}

fn reverse_exit(ctx: &mut SequenceContext) {
    ctx.cycles_completed += 1;
}
