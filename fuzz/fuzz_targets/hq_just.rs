#![no_main]
use arbitrary::Arbitrary;
use justify::{hq_just, Break, BreakFlags, Params};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzBreak {
    delta_x0: u16,
    glue: u16,
    penalty: u32,
    is_space: bool,
    is_hyphen: bool,
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    breaks: Vec<FuzzBreak>,
    set_width: u16,
    max_neg_space: u16,
    final_width: u16,
}

/// Builds a well-formed (`x0` non-decreasing, single terminal break)
/// `Break` sequence from arbitrary bytes, then runs `hq_just` on it.
/// `hq_just` never panics on well-formed input, so this only needs to
/// guard the two documented preconditions (`set_width > 0`, non-empty
/// input) that a malformed fuzz input could otherwise violate.
fuzz_target!(|input: FuzzInput| {
    let mut x0: i32 = 0;
    let mut breaks = Vec::with_capacity(input.breaks.len());
    for b in &input.breaks {
        x0 += i32::from(b.delta_x0);
        let flags = match (b.is_space, b.is_hyphen) {
            (true, _) => BreakFlags::from_bits(justify::flags::IS_SPACE),
            (false, true) => BreakFlags::from_bits(justify::flags::IS_HYPHEN),
            (false, false) => BreakFlags::NONE,
        };
        let x1 = if flags.is_space() {
            x0 + i32::from(b.glue)
        } else {
            x0
        };
        breaks.push(Break::new(x0, x1, b.penalty, flags));
        x0 = x1;
    }
    x0 += i32::from(input.final_width);
    breaks.push(Break::terminator(x0));

    let params = Params::new(i32::from(input.set_width) + 1).max_neg_space(input.max_neg_space);
    let _ = hq_just(&breaks, &params);
});
