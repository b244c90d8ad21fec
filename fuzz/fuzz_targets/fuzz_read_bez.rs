#![no_main]
use libfuzzer_sys::fuzz_target;
use read_bez::{
    evaluate,
    types::{Fixed, Point},
    CommandSink,
};

/// The sink for when you don't really care what gets built
struct NopSink;

impl CommandSink for NopSink {
    fn move_to(&mut self, _x: Fixed, _y: Fixed) {}

    fn line_to(&mut self, _x: Fixed, _y: Fixed) {}

    fn curve_to(
        &mut self,
        _cx0: Fixed,
        _cy0: Fixed,
        _cx1: Fixed,
        _cy1: Fixed,
        _x: Fixed,
        _y: Fixed,
    ) {
    }

    fn close(&mut self) {}

    fn flex(&mut self, _points: [Point<Fixed>; 6], _y_flex: bool) {}
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let _ = evaluate(text, &mut NopSink);
    let _ = read_bez::read_glyph(text);
});
