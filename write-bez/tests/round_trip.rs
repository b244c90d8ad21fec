//! Reading hinted programs and writing them back.

use pretty_assertions::assert_eq;
use read_bez::read_glyph;
use write_bez::{write_glyph, WriteOptions};

fn rewrite(text: &str, options: WriteOptions) -> String {
    let _ = env_logger::builder().is_test(true).try_init();
    let glyph = read_glyph(text).unwrap();
    write_glyph(&glyph, options).unwrap()
}

#[test]
fn hinted_programs_are_stable() {
    for text in [
        bez_test_data::HINTED_A,
        bez_test_data::MERGED_A_BOLD,
        bez_test_data::MASTER_A_BOLD,
        bez_test_data::FLEX,
        bez_test_data::UNHINTED_O,
    ] {
        assert_eq!(rewrite(text, WriteOptions::default()), text);
    }
}

#[test]
fn relative_operators_become_absolute() {
    let expected = "% frac\n\
        sc\n\
        10.25 20.75 mt\n\
        100.50 20.75 dt\n\
        100.50 120.75 dt\n\
        cp\n\
        ed\n";
    assert_eq!(
        rewrite(bez_test_data::RELATIVE_FRACTIONAL, WriteOptions::new(false)),
        expected
    );
    let expected = "% frac\n\
        sc\n\
        10 21 mt\n\
        101 21 dt\n\
        101 121 dt\n\
        cp\n\
        ed\n";
    assert_eq!(
        rewrite(bez_test_data::RELATIVE_FRACTIONAL, WriteOptions::new(true)),
        expected
    );
}

#[test]
fn flex_flags_survive() {
    let glyph = read_glyph(bez_test_data::FLEX).unwrap();
    let flags: Vec<_> = glyph
        .elements
        .iter()
        .map(|element| (element.is_flex, element.y_flex))
        .collect();
    assert_eq!(
        flags,
        [
            (false, false),
            (true, true),
            (true, true),
            (false, false),
            (false, false),
            (false, false),
        ]
    );
}
