#![no_main]
use std::sync::Arc;

use bez_autohint::{Autohinter, HintOptions, MemoryLimit};
use libfuzzer_sys::{
    arbitrary::{self, Arbitrary},
    fuzz_target,
};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    allow_hint_sub: bool,
    round_coords: bool,
    dst_len: u8,
    font_info: &'a str,
    glyph: &'a str,
}

fuzz_target!(|input: Input| {
    let mut hinter = Autohinter::new();
    hinter.set_memory_manager(Arc::new(MemoryLimit(1 << 20)));
    let options = HintOptions {
        allow_hint_sub: input.allow_hint_sub,
        round_coords: input.round_coords,
        ..Default::default()
    };
    let mut dst = vec![0; input.dst_len as usize];
    if let Ok(len) = hinter.autohint_string(input.glyph, input.font_info, &options, &mut dst) {
        assert_eq!(dst[len - 1], 0);
    }
});
