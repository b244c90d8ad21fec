use std::{cell::RefCell, rc::Rc, sync::Arc};

use bez_autohint::{
    types::{ElementId, Fixed, Glyph, HintKind, HintPoint},
    Autohinter, EngineError, Error, HintContext, HintEngine, HintOptions, MemoryLimit, ResultCode,
};
use bez_test_data as data;
use pretty_assertions::assert_eq;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn hint(font_info: &str, glyph: &str) -> Result<String, Error> {
    init_logger();
    Autohinter::new().hint_bez_glyph(font_info, glyph, &HintOptions::default())
}

#[test]
fn hinted_glyph_round_trips() {
    assert_eq!(hint(data::FONT_INFO, data::HINTED_A).unwrap(), data::HINTED_A);
    assert_eq!(hint(data::FONT_INFO, data::UNHINTED_O).unwrap(), data::UNHINTED_O);
}

#[test]
fn flex_follows_font_info() {
    assert_eq!(hint(data::FONT_INFO, data::FLEX).unwrap(), data::FLEX);
    assert_eq!(
        hint(data::FONT_INFO_NO_FLEX, data::FLEX).unwrap(),
        data::FLEX_AS_CURVES
    );
    // no FlexOK entry at all
    assert_eq!(hint("", data::FLEX).unwrap(), data::FLEX_AS_CURVES);
}

#[test]
fn without_substitution() {
    init_logger();
    let options = HintOptions {
        allow_hint_sub: false,
        ..Default::default()
    };
    let text = Autohinter::new()
        .hint_bez_glyph(data::FONT_INFO, data::HINTED_A, &options)
        .unwrap();
    assert!(!text.contains("beginsubr"));
    assert!(text.starts_with("% a\n50 40 ry % 1 2 \n0 500 rb % 2 3 \nsc\n"));
}

#[test]
fn unrounded_coordinates() {
    init_logger();
    let options = HintOptions {
        round_coords: false,
        ..Default::default()
    };
    let text = Autohinter::new()
        .hint_bez_glyph("", data::RELATIVE_FRACTIONAL, &options)
        .unwrap();
    assert_eq!(
        text,
        "% frac\nsc\n10.25 20.75 mt\n100.50 20.75 dt\n100.50 120.75 dt\ncp\ned\n"
    );
}

#[test]
fn result_codes() {
    let cases: [(&str, &str, usize, ResultCode); 4] = [
        (data::HINTED_A, "DominantV [80", 64, ResultCode::FontinfoParseFail),
        (data::HINTED_A, data::FONT_INFO, 0, ResultCode::MemoryError),
        ("   ", data::FONT_INFO, 64, ResultCode::InvalidParameterError),
        ("sc\n0 mt\ned\n", data::FONT_INFO, 64, ResultCode::FatalError),
    ];
    init_logger();
    let mut hinter = Autohinter::new();
    for (glyph, font_info, len, expected) in cases {
        let mut dst = vec![0; len];
        let err = hinter
            .autohint_string(glyph, font_info, &HintOptions::default(), &mut dst)
            .unwrap_err();
        assert_eq!(err.code(), expected, "{err}");
    }
}

#[test]
fn refused_growth_is_fatal() {
    init_logger();
    let mut hinter = Autohinter::new();
    hinter.set_memory_manager(Arc::new(MemoryLimit(32)));
    let mut dst = vec![0; 16];
    let err = hinter
        .autohint_string(data::HINTED_A, data::FONT_INFO, &HintOptions::default(), &mut dst)
        .unwrap_err();
    assert!(matches!(err, Error::Write(_)));
    assert_eq!(err.code(), ResultCode::FatalError);
    assert_eq!(dst, vec![0; 16]);
}

#[test]
fn destination_grows() {
    init_logger();
    let mut hinter = Autohinter::new();
    let mut dst = vec![0; 4];
    let len = hinter
        .autohint_string(data::HINTED_A, data::FONT_INFO, &HintOptions::default(), &mut dst)
        .unwrap();
    assert_eq!(len, data::HINTED_A.len() + 1);
    assert_eq!(dst.len(), len);
    assert_eq!(&dst[..len - 1], data::HINTED_A.as_bytes());
}

#[test]
fn stem_callbacks() {
    init_logger();
    let stems = Rc::new(RefCell::new(Vec::new()));
    let (h, v) = (stems.clone(), stems.clone());
    let mut hinter = Autohinter::new();
    hinter.set_report_stems_callbacks(
        move |top, bottom, name| h.borrow_mut().push(format!("h {top} {bottom} {name}")),
        move |right, left, name| v.borrow_mut().push(format!("v {right} {left} {name}")),
        true,
    );
    hinter
        .hint_bez_glyph(data::FONT_INFO, data::HINTED_A, &HintOptions::default())
        .unwrap();
    // every mask is reported when all stems are requested
    assert_eq!(
        *stems.borrow(),
        ["v 90 50 a", "h 500 0 a", "v 90 50 a"]
    );
}

#[test]
fn zone_callbacks_replace_stem_callbacks() {
    init_logger();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let (s, g, z) = (seen.clone(), seen.clone(), seen.clone());
    let mut hinter = Autohinter::new();
    hinter.set_report_stems_callbacks(
        move |_, _, _| s.borrow_mut().push("stem".to_string()),
        |_, _, _| {},
        false,
    );
    hinter.set_report_zones_callbacks(
        move |top, bottom, _| g.borrow_mut().push(format!("glyph {top} {bottom}")),
        move |top, bottom, _| z.borrow_mut().push(format!("zone {top} {bottom}")),
    );
    hinter
        .hint_bez_glyph(data::FONT_INFO, data::HINTED_A, &HintOptions::default())
        .unwrap();
    assert_eq!(*seen.borrow(), ["glyph 500 0", "zone 500 0"]);
}

#[test]
fn compatible_masters() {
    init_logger();
    let outputs = Autohinter::new()
        .hint_compatible_bez_glyphs(
            data::FONT_INFO,
            &[data::HINTED_A, data::MASTER_A_BOLD],
            &["Regular", "Bold"],
        )
        .unwrap();
    assert_eq!(outputs, [data::HINTED_A, data::MERGED_A_BOLD]);
}

#[test]
fn incompatible_master_delivers_nothing() {
    init_logger();
    let mut outputs = vec![vec![7; 8], vec![7; 8], vec![7; 8]];
    let err = Autohinter::new()
        .autohint_string_mm(
            &[data::HINTED_A, data::MASTER_A_BOLD, data::MASTER_A_SHORT],
            data::FONT_INFO,
            &["Regular", "Bold", "Condensed"],
            &HintOptions::default(),
            &mut outputs,
        )
        .unwrap_err();
    assert!(matches!(err, Error::Merge(_)));
    assert_eq!(err.code(), ResultCode::FatalError);
    assert!(outputs.iter().all(|output| output == &vec![7; 8]));
}

/// Adds a hint the writer has no operator for.
struct UnknownHintEngine;

impl HintEngine for UnknownHintEngine {
    fn hint(&mut self, glyph: &mut Glyph, _: &mut HintContext<'_>) -> Result<(), EngineError> {
        let point = HintPoint::new(HintKind::Unknown(b'q'), Fixed::ZERO, Fixed::from_i32(10))
            .with_elements(Some(ElementId::new(0)), Some(ElementId::new(1)));
        glyph.hints.add(0, point);
        Ok(())
    }
}

#[test]
fn warnings_reach_report_callback() {
    init_logger();
    let messages = Rc::new(RefCell::new(Vec::new()));
    let sink = messages.clone();
    let mut hinter = Autohinter::with_engine(UnknownHintEngine);
    hinter.set_report_callback(move |msg| sink.borrow_mut().push(msg.to_owned()));
    let text = hinter
        .hint_bez_glyph(data::FONT_INFO, data::UNHINTED_O, &HintOptions::default())
        .unwrap();
    // the annotation is kept without an operator
    assert!(text.contains("\n % 1 2 \n"), "{text}");
    let messages = messages.borrow();
    assert_eq!(messages.len(), 1);
    assert!(
        messages[0].contains("Illegal point list data"),
        "{}",
        messages[0]
    );
}

#[test]
fn clean_glyph_reports_nothing() {
    init_logger();
    let messages = Rc::new(RefCell::new(Vec::new()));
    let sink = messages.clone();
    let mut hinter = Autohinter::new();
    hinter.set_report_callback(move |msg| sink.borrow_mut().push(msg.to_owned()));
    hinter
        .hint_bez_glyph(data::FONT_INFO, data::HINTED_A, &HintOptions::default())
        .unwrap();
    assert!(messages.borrow().is_empty());
}

#[test]
fn out_of_range_program_is_fatal() {
    let glyphs = [
        "% a\n8388607 8388607 rb\nsc\n0 0 mt\n1 1 dt\ned\n",
        "% a\nsc\n8388607 0 rmt\n8388607 0 rdt\ned\n",
    ];
    for glyph in glyphs {
        let err = hint("", glyph).unwrap_err();
        assert!(matches!(err, Error::Read(_)), "{err}");
        assert_eq!(err.code(), ResultCode::FatalError);
    }
}

#[test]
fn masters_with_distant_hint_edges() {
    init_logger();
    let glyph = "% c\n8388607 0 rb % 2 0\nsc\n0 0 mt\n0 -8388607 dt\ncp\ned\n";
    let outputs = Autohinter::new()
        .hint_compatible_bez_glyphs("", &[glyph, glyph], &["Regular", "Bold"])
        .unwrap();
    // the low edge snaps to the nearer end of its element
    let expected = "% c\n0 8388607 rb % 2 0 \nsc\n0 0 mt\n0 -8388607 dt\ncp\ned\n";
    assert_eq!(outputs, [expected, expected]);
}

#[test]
fn master_options_apply_to_every_master() {
    init_logger();
    let options = HintOptions {
        allow_hint_sub: false,
        ..Default::default()
    };
    let mut outputs = vec![vec![0; 64], vec![0; 64]];
    let lens = Autohinter::new()
        .autohint_string_mm(
            &[data::HINTED_A, data::MASTER_A_BOLD],
            data::FONT_INFO,
            &["Regular", "Bold"],
            &options,
            &mut outputs,
        )
        .unwrap();
    for (output, len) in outputs.iter().zip(lens) {
        let text = std::str::from_utf8(&output[..len - 1]).unwrap();
        assert!(!text.contains("beginsubr"), "{text}");
        assert_eq!(output[len - 1], 0);
    }

    let mut outputs = vec![vec![0; 64], vec![0; 64]];
    let lens = Autohinter::new()
        .autohint_string_mm(
            &[data::FLEX, data::FLEX],
            data::FONT_INFO_NO_FLEX,
            &["Regular", "Bold"],
            &HintOptions::default(),
            &mut outputs,
        )
        .unwrap();
    for (output, len) in outputs.iter().zip(lens) {
        assert_eq!(&output[..len - 1], data::FLEX_AS_CURVES.as_bytes());
    }
}
