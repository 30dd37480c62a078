#![no_main]
use arbitrary::Arbitrary;
use justify::{hs_just, Break, BreakFlags, Params};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzBreak {
    delta_x0: i16,
    glue: u16,
    penalty: u32,
    is_space: bool,
    is_hyphen: bool,
    is_tab: bool,
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    breaks: Vec<FuzzBreak>,
    set_width: u16,
    max_neg_space: u16,
    tab_width: u16,
    final_width: u16,
}

/// Unlike [`hq_just`](justify::hq_just), `hs_just` tolerates
/// non-monotone `x0` (tab resets) by construction, so `delta_x0` may be
/// negative here: the monotonicity pre-pass is exactly what's being
/// fuzzed.
fuzz_target!(|input: FuzzInput| {
    let mut x0: i32 = 0;
    let mut breaks = Vec::with_capacity(input.breaks.len());
    for b in &input.breaks {
        x0 = x0.saturating_add(i32::from(b.delta_x0));
        let mut bits = 0u8;
        if b.is_space {
            bits |= justify::flags::IS_SPACE;
        }
        if b.is_hyphen && !b.is_space {
            bits |= justify::flags::IS_HYPHEN;
        }
        if b.is_tab {
            bits |= justify::flags::IS_TAB;
        }
        let flags = BreakFlags::from_bits(bits);
        let x1 = if flags.is_space() {
            x0.saturating_add(i32::from(b.glue))
        } else {
            x0
        };
        breaks.push(Break::new(x0, x1, b.penalty, flags));
        x0 = x1;
    }
    x0 = x0.saturating_add(i32::from(input.final_width));
    breaks.push(Break::terminator(x0));

    let params = Params::new(i32::from(input.set_width) + 1)
        .max_neg_space(input.max_neg_space)
        .tab_width(u32::from(input.tab_width));
    let _ = hs_just(&mut breaks, &params);
});
