//! Property-based tests for time arithmetic and whole-document parsing
//!
//! Uses proptest to check invariants across generated times and generated
//! cue documents.

use proptest::prelude::*;
use vtt_core::{parser::Document, Cue, Setting, Time};

/// Generate a normalized time
fn arb_time() -> impl Strategy<Value = Time> {
    (0u32..10_000, 0u32..60, 0u32..60, 0u32..1000)
        .prop_map(|(h, m, s, ms)| Time::new(h, m, s, ms))
}

/// Generate a setting token pair
fn arb_setting() -> impl Strategy<Value = Setting> {
    ("[a-z]{1,8}", "[a-z0-9%,.-]{1,8}").prop_map(|(name, value)| Setting::new(name, value))
}

/// Generate a payload line that cannot be mistaken for a blank line
fn arb_payload_line() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!?<>/-]{0,30}[a-zA-Z0-9]"
}

/// Generate a cue with stop after start
fn arb_cue() -> impl Strategy<Value = Cue> {
    (
        prop_oneof![Just(String::new()), "[a-z0-9][a-z0-9 _-]{0,15}"],
        arb_time(),
        0i64..100_000,
        prop::collection::vec(arb_setting(), 0..4),
        prop::collection::vec(arb_payload_line(), 1..4),
    )
        .prop_map(|(identifier, start_time, length, settings, payload)| Cue {
            identifier,
            start_time,
            stop_time: start_time + length,
            settings,
            payload,
        })
}

/// Line terminator choices
fn arb_terminator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("\n"), Just("\r"), Just("\r\n")]
}

/// Render cues as a WebVTT document
fn render(cues: &[Cue], eol: &str, bom: bool) -> String {
    let mut out = String::new();
    if bom {
        out.push('\u{FEFF}');
    }
    out.push_str("WEBVTT");
    out.push_str(eol);
    out.push_str(eol);

    for cue in cues {
        if cue.has_identifier() {
            out.push_str(&cue.identifier);
            out.push_str(eol);
        }
        out.push_str(&format!("{} --> {}", cue.start_time, cue.stop_time));
        for setting in &cue.settings {
            out.push_str(&format!(" {}:{}", setting.name, setting.value));
        }
        out.push_str(eol);
        for line in &cue.payload {
            out.push_str(line);
            out.push_str(eol);
        }
        out.push_str(eol);
    }
    out
}

proptest! {
    #[test]
    fn presentation_round_trip(t in arb_time()) {
        prop_assert_eq!(Time::from_presentation(t.presentation()), t);
    }

    #[test]
    fn ordering_matches_presentation(a in arb_time(), b in arb_time()) {
        prop_assert_eq!(a < b, a.presentation() < b.presentation());
        prop_assert_eq!(a.cmp(&b), a.presentation().cmp(&b.presentation()));
    }

    #[test]
    fn difference_and_offset_agree(a in arb_time(), b in arb_time()) {
        let delta = b - a;
        prop_assert_eq!(a + delta, b);
    }

    #[test]
    fn seconds_only_form_normalizes(total in 0u32..i32::MAX as u32) {
        let t: Time = total.to_string().parse().unwrap();
        prop_assert!(t.minutes < 60 && t.seconds < 60);
        prop_assert_eq!(t.presentation(), i64::from(total) * 1000);
    }

    #[test]
    fn display_parses_back(t in arb_time()) {
        prop_assert_eq!(t.to_string().parse::<Time>(), Ok(t));
    }

    #[test]
    fn rendered_documents_parse_back(
        cues in prop::collection::vec(arb_cue(), 0..6),
        eol in arb_terminator(),
        bom in any::<bool>(),
    ) {
        let text = render(&cues, eol, bom);
        let doc = Document::parse(&text).unwrap();
        prop_assert_eq!(doc.header.has_bom, bom);
        prop_assert_eq!(doc.cues, cues);
    }
}
