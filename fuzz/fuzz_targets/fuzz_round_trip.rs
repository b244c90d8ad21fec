#![no_main]
use libfuzzer_sys::{
    arbitrary::{self, Arbitrary},
    fuzz_target,
};
use write_bez::{FlexParams, WriteOptions};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    round_coords: bool,
    min_distance: i16,
    delta: i16,
    program: &'a str,
}

fuzz_target!(|input: Input| {
    let Ok(glyph) = read_bez::read_glyph(input.program) else {
        return;
    };
    let options = WriteOptions {
        round_coords: input.round_coords,
        flex: FlexParams {
            min_distance: input.min_distance.into(),
            delta: input.delta.into(),
        },
    };
    let Ok(first) = write_bez::write_glyph(&glyph, options) else {
        return;
    };
    // anything we write can be read back; after one pass, values are
    // already in written precision and the text is stable
    let reread = read_bez::read_glyph(&first).expect("written program is readable");
    let second = write_bez::write_glyph(&reread, options).expect("rewrite succeeds");
    let reread = read_bez::read_glyph(&second).expect("written program is readable");
    let third = write_bez::write_glyph(&reread, options).expect("rewrite succeeds");
    assert_eq!(second, third);
});
