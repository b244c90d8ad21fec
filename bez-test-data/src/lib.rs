//! test data shared between the bez crates.
//!
//! Hinted programs here are in the exact form the writer produces, so
//! reading and writing them again with default options reproduces them.

/// Font info for the glyphs below.
pub static FONT_INFO: &str = "\
OrigEmSqUnits 1000
FontName TestSans-Regular
FlexOK true
BaselineYCoord 0
BaselineOvershoot -12
CapHeight 700
CapOvershoot 12
LcHeight 500
LcOvershoot 12
DominantV [80]
DominantH [40, 46]
VCounterChars ( m n )
";

/// Font info that disables flex.
pub static FONT_INFO_NO_FLEX: &str = "\
FontName TestSans-Bold
FlexOK false
DominantV [90]
";

/// A hinted glyph with an initial mask and one substitution.
pub static HINTED_A: &str = "% a\n\
50 40 ry % 1 2 \n\
0 500 rb % 2 3 \n\
sc\n\
50 0 mt\n\
90 0 dt\n\
90 500 dt\n\
beginsubr snc\n\
50 40 ry % 4 3 \n\
endsubr enc\n\
newcolors\n\
50 500 dt\n\
cp\n\
ed\n";

/// A second master of [`HINTED_A`], with the same path structure and no
/// hints.
pub static MASTER_A_BOLD: &str = "% a\n\
sc\n\
40 0 mt\n\
100 0 dt\n\
100 520 dt\n\
40 520 dt\n\
cp\n\
ed\n";

/// [`MASTER_A_BOLD`] with the hints of [`HINTED_A`] carried over.
pub static MERGED_A_BOLD: &str = "% a\n\
40 60 ry % 1 2 \n\
0 520 rb % 2 3 \n\
sc\n\
40 0 mt\n\
100 0 dt\n\
100 520 dt\n\
beginsubr snc\n\
40 60 ry % 4 3 \n\
endsubr enc\n\
newcolors\n\
40 520 dt\n\
cp\n\
ed\n";

/// A master whose path is shorter than [`HINTED_A`].
pub static MASTER_A_SHORT: &str = "% a\n\
sc\n\
40 0 mt\n\
100 0 dt\n\
cp\n\
ed\n";

/// A glyph with a flex pair along the y axis.
pub static FLEX: &str = "% flex\n\
sc\n\
0 0 mt\n\
preflx1\n\
30 0 rmt\n\
preflx2a\n\
10 0 rmt\n\
preflx2a\n\
20 5 rmt\n\
preflx2a\n\
30 5 rmt\n\
preflx2a\n\
40 5 rmt\n\
preflx2a\n\
50 0 rmt\n\
preflx2a\n\
60 0 rmt\n\
preflx2a\n\
10 0 20 5 30 5 40 5 50 0 60 0 50 0 1 60 0 flxa\n\
60 100 dt\n\
0 100 dt\n\
cp\n\
ed\n";

/// [`FLEX`] with the pair written as plain curves.
pub static FLEX_AS_CURVES: &str = "% flex\n\
sc\n\
0 0 mt\n\
10 0 20 5 30 5 ct\n\
40 5 50 0 60 0 ct\n\
60 100 dt\n\
0 100 dt\n\
cp\n\
ed\n";

/// An unhinted glyph made of curves.
pub static UNHINTED_O: &str = "% o\n\
sc\n\
250 -10 mt\n\
380 -10 470 90 470 250 ct\n\
470 410 380 510 250 510 ct\n\
120 510 30 410 30 250 ct\n\
30 90 120 -10 250 -10 ct\n\
cp\n\
ed\n";

/// A glyph using relative operators and fractional coordinates.
pub static RELATIVE_FRACTIONAL: &str = "% frac\n\
sc\n\
10.25 20.75 mt\n\
90.25 0 rdt\n\
0 100 rdt\n\
cp\n\
ed\n";
